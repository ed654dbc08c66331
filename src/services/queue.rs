use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rusqlite::Connection;

use crate::db::queries;
use crate::models::{QueuedMessage, WorkItem};

/// Durable hand-off between dialog close and the fulfillment worker. No
/// logic beyond send/receive/delete; receivers see oldest records first.
#[async_trait]
pub trait WorkQueue: Send + Sync {
    /// Enqueue a work item, returning its message id.
    async fn send(&self, item: &WorkItem) -> anyhow::Result<String>;

    /// Take up to `max` pending records, oldest first. Records stay queued
    /// until deleted by handle.
    async fn receive(&self, max: usize) -> anyhow::Result<Vec<QueuedMessage>>;

    async fn delete(&self, handle: i64) -> anyhow::Result<()>;

    async fn depth(&self) -> anyhow::Result<i64>;
}

pub struct SqliteWorkQueue {
    db: Arc<Mutex<Connection>>,
}

impl SqliteWorkQueue {
    pub fn new(db: Arc<Mutex<Connection>>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl WorkQueue for SqliteWorkQueue {
    async fn send(&self, item: &WorkItem) -> anyhow::Result<String> {
        let message_id = uuid::Uuid::new_v4().to_string();
        let body = serde_json::to_string(item)?;

        let db = self.db.lock().unwrap();
        queries::enqueue(&db, &message_id, &body)?;

        tracing::info!(message_id = %message_id, "work item enqueued");
        Ok(message_id)
    }

    async fn receive(&self, max: usize) -> anyhow::Result<Vec<QueuedMessage>> {
        let db = self.db.lock().unwrap();
        queries::receive(&db, max)
    }

    async fn delete(&self, handle: i64) -> anyhow::Result<()> {
        let db = self.db.lock().unwrap();
        queries::delete(&db, handle)?;
        Ok(())
    }

    async fn depth(&self) -> anyhow::Result<i64> {
        let db = self.db.lock().unwrap();
        queries::queue_depth(&db)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;

    fn test_queue() -> SqliteWorkQueue {
        let conn = db::init_db(":memory:").unwrap();
        SqliteWorkQueue::new(Arc::new(Mutex::new(conn)))
    }

    fn item() -> WorkItem {
        WorkItem {
            location: "new york".to_string(),
            cuisine: "chinese".to_string(),
            phone: "1234567890".to_string(),
        }
    }

    #[tokio::test]
    async fn test_send_receive_roundtrip() {
        let queue = test_queue();
        let message_id = queue.send(&item()).await.unwrap();

        let messages = queue.receive(10).await.unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].message_id, message_id);

        let decoded: WorkItem = serde_json::from_str(&messages[0].body).unwrap();
        assert_eq!(decoded, item());
    }

    #[tokio::test]
    async fn test_receive_leaves_records_until_deleted() {
        let queue = test_queue();
        queue.send(&item()).await.unwrap();

        let first = queue.receive(10).await.unwrap();
        let second = queue.receive(10).await.unwrap();
        assert_eq!(first.len(), 1);
        assert_eq!(second.len(), 1);

        queue.delete(first[0].handle).await.unwrap();
        assert_eq!(queue.depth().await.unwrap(), 0);
        assert!(queue.receive(10).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_values_with_delimiters_survive() {
        let queue = test_queue();
        let tricky = WorkItem {
            location: "new york; ny".to_string(),
            cuisine: "chinese".to_string(),
            phone: "1234567890".to_string(),
        };
        queue.send(&tricky).await.unwrap();

        let messages = queue.receive(1).await.unwrap();
        let decoded: WorkItem = serde_json::from_str(&messages[0].body).unwrap();
        assert_eq!(decoded.location, "new york; ny");
    }
}
