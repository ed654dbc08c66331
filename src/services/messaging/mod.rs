pub mod twilio;

use async_trait::async_trait;

/// Outbound SMS, used to deliver suggestion summaries to the diner.
#[async_trait]
pub trait MessagingProvider: Send + Sync {
    /// Send `body` to an E.164 phone number.
    async fn send_message(&self, to: &str, body: &str) -> anyhow::Result<()>;
}
