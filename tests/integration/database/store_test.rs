//! Message store tests against PostgreSQL

use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::database::migrated_pool;
use crate::common::{post_message, test_server, MESSAGES};
use codeshare::backend::realtime::Broadcaster;
use codeshare::backend::{AppState, MessageStore};
use codeshare::shared::{FileAttachment, Message};

/// Rows written under `user`, in the order the store returns them
async fn listed_for(store: &MessageStore, user: &str) -> Vec<Message> {
    store
        .list()
        .await
        .unwrap()
        .into_iter()
        .filter(|message| message.user == user)
        .collect()
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
#[serial_test::serial]
async fn test_append_then_list_keeps_insertion_order() {
    let (pool, user) = migrated_pool().await;
    let store = MessageStore::postgres(pool);

    // same instant, so the ids collide and only insertion order tells them apart
    let posted_at = Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap();
    let later = Utc.with_ymd_and_hms(2026, 3, 1, 9, 31, 0).unwrap();
    let messages = vec![
        Message::at(later, user.clone(), "third by clock, first in".to_string(), None),
        Message::at(posted_at, user.clone(), "b".to_string(), None),
        Message::at(posted_at, user.clone(), "a".to_string(), None),
    ];
    for message in &messages {
        store.append(message).await.unwrap();
    }

    assert_eq!(listed_for(&store, &user).await, messages);
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
#[serial_test::serial]
async fn test_file_metadata_survives_storage() {
    let (pool, user) = migrated_pool().await;
    let store = MessageStore::postgres(pool);

    let file = FileAttachment {
        key: "1714564800000-notes.txt".to_string(),
        name: "notes.txt".to_string(),
        size: 2048,
        url: "https://example.supabase.co/storage/v1/object/public/workspace-files/1714564800000-notes.txt"
            .to_string(),
    };
    let with_file = Message::at(Utc::now(), user.clone(), String::new(), Some(file.clone()));
    let without_file = Message::at(Utc::now(), user.clone(), "plain".to_string(), None);
    store.append(&with_file).await.unwrap();
    store.append(&without_file).await.unwrap();

    let listed = listed_for(&store, &user).await;
    assert_eq!(listed[0].file, Some(file));
    assert_eq!(listed[1].file, None);
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
#[serial_test::serial]
async fn test_timestamp_string_is_unchanged_by_storage() {
    let (pool, user) = migrated_pool().await;
    let store = MessageStore::postgres(pool);

    let posted_at = Utc.timestamp_millis_opt(1_714_564_800_123).unwrap();
    let message = Message::at(posted_at, user.clone(), "tick".to_string(), None);
    store.append(&message).await.unwrap();

    let listed = listed_for(&store, &user).await;
    assert_eq!(listed[0].ts, "2024-05-01T12:00:00.123Z");
    assert_eq!(listed[0].ts, message.ts);
    assert_eq!(listed[0].id, 1_714_564_800_123);
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
#[serial_test::serial]
async fn test_posted_message_is_listed_over_http() {
    let (pool, user) = migrated_pool().await;
    let server = test_server(AppState::new(MessageStore::postgres(pool), Broadcaster::new(None)));

    let posted: Message = post_message(&server, json!({ "user": user, "text": "  stored as is " }))
        .await
        .json();

    let listed: Vec<Message> = server.get(MESSAGES).await.json();
    let mine: Vec<Message> = listed.into_iter().filter(|m| m.user == user).collect();
    assert_eq!(mine, vec![posted]);
}
