/**
 * Database Operations for Messages
 *
 * This module persists messages to PostgreSQL. The `seq` column preserves
 * insertion order; `id` is the wall-clock id carried by the message and is
 * not unique.
 */

use crate::shared::{FileAttachment, Message};
use crate::shared::message::format_timestamp;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::PgPool;

/// Append a message to the `messages` table
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `message` - Message to save
pub async fn save_message(pool: &PgPool, message: &Message) -> Result<(), sqlx::Error> {
    let ts = message
        .ts
        .parse::<DateTime<Utc>>()
        .map_err(|e| sqlx::Error::Decode(format!("Failed to parse timestamp: {}", e).into()))?;

    sqlx::query(
        r#"
        INSERT INTO messages (id, user_name, text, file, ts)
        VALUES ($1, $2, $3, $4, $5)
        "#,
    )
    .bind(message.id)
    .bind(&message.user)
    .bind(&message.text)
    .bind(message.file.clone().map(Json))
    .bind(ts)
    .execute(pool)
    .await?;

    Ok(())
}

/// Load every message in insertion order
pub async fn load_messages(pool: &PgPool) -> Result<Vec<Message>, sqlx::Error> {
    #[derive(sqlx::FromRow)]
    struct MessageRow {
        id: i64,
        user_name: String,
        text: String,
        file: Option<Json<FileAttachment>>,
        ts: DateTime<Utc>,
    }

    let rows = sqlx::query_as::<_, MessageRow>(
        r#"
        SELECT id, user_name, text, file, ts
        FROM messages
        ORDER BY seq ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    let messages = rows
        .into_iter()
        .map(|row| Message {
            id: row.id,
            user: row.user_name,
            text: row.text,
            file: row.file.map(|Json(file)| file),
            ts: format_timestamp(row.ts),
        })
        .collect();

    Ok(messages)
}
