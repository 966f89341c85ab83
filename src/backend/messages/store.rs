use crate::backend::error::BackendError;
use crate::backend::messages::db;
use crate::shared::Message;
use sqlx::PgPool;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Append-only list of messages
///
/// `Postgres` is used whenever `DATABASE_URL` is configured. `Memory` keeps
/// the list in process and loses it on restart.
#[derive(Clone, Debug)]
pub enum MessageStore {
    Memory(Arc<RwLock<Vec<Message>>>),
    Postgres(PgPool),
}

impl MessageStore {
    pub fn memory() -> Self {
        Self::Memory(Arc::new(RwLock::new(Vec::new())))
    }

    pub fn postgres(pool: PgPool) -> Self {
        Self::Postgres(pool)
    }

    pub fn backend_name(&self) -> &'static str {
        match self {
            Self::Memory(_) => "memory",
            Self::Postgres(_) => "postgres",
        }
    }

    pub async fn append(&self, message: &Message) -> Result<(), BackendError> {
        match self {
            Self::Memory(messages) => {
                messages.write().await.push(message.clone());
            }
            Self::Postgres(pool) => db::save_message(pool, message).await?,
        }
        tracing::debug!("[Store] Appended message {} to {} store", message.id, self.backend_name());
        Ok(())
    }

    /// All messages in insertion order
    pub async fn list(&self) -> Result<Vec<Message>, BackendError> {
        match self {
            Self::Memory(messages) => Ok(messages.read().await.clone()),
            Self::Postgres(pool) => Ok(db::load_messages(pool).await?),
        }
    }
}

impl Default for MessageStore {
    fn default() -> Self {
        Self::memory()
    }
}
