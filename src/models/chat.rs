use serde::{Deserialize, Serialize};

/// Envelope the chat front-end exchanges with the intake endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    #[serde(rename = "type", default = "default_kind")]
    pub kind: String,
    pub unstructured: UnstructuredMessage,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnstructuredMessage {
    #[serde(default)]
    pub id: Option<String>,
    pub text: String,
    #[serde(default)]
    pub timestamp: Option<String>,
}

fn default_kind() -> String {
    "string".to_string()
}
