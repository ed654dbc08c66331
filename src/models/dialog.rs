use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::slots::{DiningSlots, SlotName};

/// Intent request posted by the dialog engine on every turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentRequest {
    #[serde(rename = "currentIntent")]
    pub current_intent: CurrentIntent,
    #[serde(rename = "sessionAttributes", default)]
    pub session_attributes: Option<HashMap<String, String>>,
    #[serde(rename = "invocationSource")]
    pub invocation_source: InvocationSource,
    #[serde(rename = "userId", default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub bot: Option<BotIdentity>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentIntent {
    pub name: String,
    pub slots: DiningSlots,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotIdentity {
    pub name: String,
}

/// Which phase of the turn the dialog engine is invoking: slot validation
/// while the conversation is still collecting, or fulfillment once every
/// slot has been filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvocationSource {
    DialogCodeHook,
    FulfillmentCodeHook,
}

/// Response returned to the dialog engine. Exactly one action per turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DialogResponse {
    #[serde(rename = "sessionAttributes")]
    pub session_attributes: Option<HashMap<String, String>>,
    #[serde(rename = "dialogAction")]
    pub dialog_action: DialogAction,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DialogAction {
    /// Ask the user again for one specific slot.
    ElicitSlot {
        #[serde(rename = "intentName")]
        intent_name: String,
        slots: DiningSlots,
        #[serde(rename = "slotToElicit")]
        slot_to_elicit: SlotName,
        /// Absent when the engine should fall back to the prompt defined on
        /// its build-time model.
        #[serde(skip_serializing_if = "Option::is_none")]
        message: Option<BotMessage>,
    },
    /// All filled slots are acceptable so far; let the engine pick the next
    /// step.
    Delegate { slots: DiningSlots },
    /// Terminal action once fulfillment has run.
    Close {
        #[serde(rename = "fulfillmentState")]
        fulfillment_state: FulfillmentState,
        message: BotMessage,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FulfillmentState {
    Fulfilled,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BotMessage {
    #[serde(rename = "contentType")]
    pub content_type: String,
    pub content: String,
}

impl BotMessage {
    pub fn plain(content: impl Into<String>) -> Self {
        Self {
            content_type: "PlainText".to_string(),
            content: content.into(),
        }
    }
}
