//! Property-based tests for the fan-out decision
//!
//! Uses proptest to generate random messages and verify the size rule

use proptest::prelude::*;

use codeshare::shared::event::{LARGE_MESSAGE_POSTED, NEW_MESSAGE};
use codeshare::shared::fanout::{decide, decide_with_threshold, FANOUT_THRESHOLD_BYTES};
use codeshare::shared::{BroadcastEvent, FileAttachment, Message};

fn attachment() -> impl Strategy<Value = Option<FileAttachment>> {
    proptest::option::of(("[a-z0-9-]{1,40}", ".{0,30}", any::<u64>()).prop_map(|(key, name, size)| {
        FileAttachment {
            url: format!("https://store.example/storage/v1/object/public/workspace-files/{}", key),
            key,
            name,
            size,
        }
    }))
}

proptest! {
    #[test]
    fn test_event_kind_follows_serialized_size(
        user in ".{0,20}",
        text in prop_oneof![".{0,200}", ".{8900,9100}", "[a-z]{8900,9100}"],
        file in attachment(),
    ) {
        let message = Message::new(user, text, file);
        let size = message.serialized_size().unwrap();
        let event = decide(&message).unwrap();

        if size < FANOUT_THRESHOLD_BYTES {
            prop_assert_eq!(event.name(), NEW_MESSAGE);
            prop_assert_eq!(event, BroadcastEvent::NewMessage(message));
        } else {
            prop_assert_eq!(event.name(), LARGE_MESSAGE_POSTED);
        }
    }

    #[test]
    fn test_stub_identifies_message_without_body(
        user in ".{0,20}",
        text in "[a-zA-Z ]{1,2000}",
        threshold in 1usize..64,
    ) {
        let message = Message::new(user, text, None);
        let event = decide_with_threshold(&message, threshold).unwrap();

        match event {
            BroadcastEvent::LargeMessagePosted(stub) => {
                prop_assert_eq!(stub.id, message.id);
                prop_assert_eq!(&stub.user, &message.user);
                prop_assert_eq!(&stub.timestamp, &message.ts);
                let data = serde_json::to_value(&stub).unwrap();
                prop_assert!(data.get("text").is_none());
                prop_assert!(data.get("file").is_none());
            }
            other => prop_assert!(false, "expected stub, got {:?}", other),
        }
    }

    #[test]
    fn test_wire_event_parses_back(text in ".{0,300}") {
        let event = decide(&Message::new("you".to_string(), text, None)).unwrap();
        let data = event.data_json().unwrap();
        let parsed = BroadcastEvent::from_parts(event.name(), &data).unwrap();
        prop_assert_eq!(parsed, event);
    }
}
