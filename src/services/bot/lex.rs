use anyhow::Context;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use super::BotProvider;

/// Lex-runtime-style text endpoint:
/// `POST {base}/bot/{name}/alias/{alias}/user/{user}/text`.
pub struct LexRuntimeProvider {
    base_url: String,
    bot_name: String,
    bot_alias: String,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct PostTextResponse {
    #[serde(default)]
    message: Option<String>,
}

impl LexRuntimeProvider {
    pub fn new(base_url: String, bot_name: String, bot_alias: String) -> Self {
        Self {
            base_url,
            bot_name,
            bot_alias,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl BotProvider for LexRuntimeProvider {
    async fn post_text(&self, user_id: &str, input_text: &str) -> anyhow::Result<String> {
        let url = format!(
            "{}/bot/{}/alias/{}/user/{}/text",
            self.base_url, self.bot_name, self.bot_alias, user_id
        );

        let resp = self
            .client
            .post(&url)
            .json(&json!({ "inputText": input_text }))
            .send()
            .await
            .context("failed to call bot runtime")?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            anyhow::bail!("bot runtime error ({status}): {body}");
        }

        let data: PostTextResponse = resp
            .json()
            .await
            .context("failed to parse bot runtime response")?;

        data.message
            .ok_or_else(|| anyhow::anyhow!("missing message in bot runtime response"))
    }
}
