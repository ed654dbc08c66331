use serde::{Deserialize, Serialize};

/// Payload handed from dialog close to the fulfillment worker. Serialized as
/// JSON on the queue so field values may contain any characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkItem {
    pub location: String,
    pub cuisine: String,
    pub phone: String,
}

/// A queued record as returned by `WorkQueue::receive`. The handle is the
/// receipt used to delete the record after processing; the body is the raw
/// payload, decoded by the consumer.
#[derive(Debug, Clone)]
pub struct QueuedMessage {
    pub handle: i64,
    pub message_id: String,
    pub body: String,
}
