pub mod lex;

use async_trait::async_trait;

/// Conversational-understanding service. Takes the user's raw utterance,
/// returns the bot's reply text; everything in between is opaque.
#[async_trait]
pub trait BotProvider: Send + Sync {
    async fn post_text(&self, user_id: &str, input_text: &str) -> anyhow::Result<String>;
}
