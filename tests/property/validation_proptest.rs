//! Property-based tests for post validation and the message store

use proptest::prelude::*;

use codeshare::backend::messages::validation::validate_post;
use codeshare::backend::MessageStore;
use codeshare::shared::{FileAttachment, Message, PostMessageRequest};

fn file() -> FileAttachment {
    FileAttachment {
        key: "k-a.txt".to_string(),
        name: "a.txt".to_string(),
        size: 1,
        url: "https://store.example/storage/v1/object/public/workspace-files/k-a.txt".to_string(),
    }
}

proptest! {
    #[test]
    fn test_text_with_content_is_kept_verbatim(
        padding in "[ \t\n]{0,5}",
        body in "[a-zA-Z0-9{}();]{1,40}",
    ) {
        let text = format!("{}{}{}", padding, body, padding);
        let post = validate_post(PostMessageRequest::text("you", text.clone())).unwrap();
        prop_assert_eq!(post.text, text);
    }

    #[test]
    fn test_blank_text_needs_a_file(blank in "[ \t\r\n]{0,10}") {
        prop_assert!(validate_post(PostMessageRequest::text("you", blank.clone())).is_err());

        let with_file = PostMessageRequest::text("you", blank).with_file(file());
        prop_assert!(validate_post(with_file).is_ok());
    }

    #[test]
    fn test_user_is_never_empty(user in proptest::option::of(".{0,10}")) {
        let request = PostMessageRequest { user, text: Some("hi".to_string()), file: None };
        let post = validate_post(request).unwrap();
        prop_assert!(!post.user.is_empty());
    }

    #[test]
    fn test_memory_store_preserves_append_order(texts in proptest::collection::vec("[a-z]{1,8}", 0..20)) {
        let store = MessageStore::memory();
        let messages: Vec<Message> = texts
            .into_iter()
            .map(|text| Message::new("you".to_string(), text, None))
            .collect();

        let listed = tokio_test::block_on(async {
            for message in &messages {
                store.append(message).await.unwrap();
            }
            store.list().await.unwrap()
        });

        prop_assert_eq!(listed, messages);
    }
}
