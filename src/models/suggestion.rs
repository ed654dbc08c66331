use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A stored restaurant suggestion. Written once by the fulfillment worker,
/// never updated or deleted. The id is `<work item message id>-<n>` with a
/// 1-based sequence counter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestion {
    pub id: String,
    pub restaurant_name: String,
    pub address: String,
    pub rating: i64,
    pub cuisine: String,
    pub created_at: NaiveDateTime,
}
