use std::collections::HashMap;
use std::sync::Arc;

use chrono::Local;

use crate::errors::AppError;
use crate::models::{
    BotMessage, DialogAction, DialogResponse, DiningSlots, FulfillmentState, IntentRequest,
    InvocationSource, WorkItem,
};
use crate::services::validation::{validate_dining, SlotViolation};
use crate::state::AppState;

pub const DINING_INTENT: &str = "DiningSuggestionsIntent";

const CONFIRMATION: &str = "You're all set. Expect my recommendations shortly!";

/// Route an incoming intent by name. Anything other than the dining intent
/// is rejected with a typed error rather than handled.
pub async fn dispatch(
    state: &Arc<AppState>,
    request: IntentRequest,
) -> Result<DialogResponse, AppError> {
    tracing::debug!(
        user_id = request.user_id.as_deref().unwrap_or("-"),
        intent = %request.current_intent.name,
        "dispatching intent"
    );

    if request.current_intent.name == DINING_INTENT {
        dining_suggestion(state, request).await
    } else {
        Err(AppError::UnsupportedIntent(request.current_intent.name))
    }
}

/// One turn of the dining dialog. In the validation phase, re-elicit the
/// first invalid slot or delegate back to the engine; in the fulfillment
/// phase, enqueue the work item and close.
async fn dining_suggestion(
    state: &Arc<AppState>,
    request: IntentRequest,
) -> Result<DialogResponse, AppError> {
    let intent_name = request.current_intent.name;
    let mut slots = request.current_intent.slots;
    let session_attributes = request.session_attributes;

    match request.invocation_source {
        InvocationSource::DialogCodeHook => {
            let now = Local::now().naive_local();
            if let Err(violation) = validate_dining(&slots, now) {
                tracing::info!(slot = violation.slot.as_str(), "re-eliciting invalid slot");
                slots.clear(violation.slot);
                return Ok(elicit_slot(session_attributes, intent_name, slots, violation));
            }

            Ok(delegate(session_attributes.unwrap_or_default(), slots))
        }
        InvocationSource::FulfillmentCodeHook => {
            let item = work_item_from_slots(&slots)?;
            state
                .queue
                .send(&item)
                .await
                .map_err(|e| AppError::Queue(e.to_string()))?;

            Ok(close(
                session_attributes,
                FulfillmentState::Fulfilled,
                BotMessage::plain(CONFIRMATION),
            ))
        }
    }
}

// The engine only invokes the fulfillment hook once every slot has been
// collected, so missing values here mean a malformed request.
fn work_item_from_slots(slots: &DiningSlots) -> Result<WorkItem, AppError> {
    fn require(value: &Option<String>, name: &str) -> Result<String, AppError> {
        value
            .clone()
            .ok_or_else(|| AppError::BadRequest(format!("missing {name} slot at fulfillment")))
    }

    Ok(WorkItem {
        location: require(&slots.location, "Location")?,
        cuisine: require(&slots.cuisine, "Cuisine")?,
        phone: require(&slots.phone_no, "Phone_No")?,
    })
}

fn elicit_slot(
    session_attributes: Option<HashMap<String, String>>,
    intent_name: String,
    slots: DiningSlots,
    violation: SlotViolation,
) -> DialogResponse {
    DialogResponse {
        session_attributes,
        dialog_action: DialogAction::ElicitSlot {
            intent_name,
            slots,
            slot_to_elicit: violation.slot,
            message: violation.message.map(BotMessage::plain),
        },
    }
}

fn delegate(session_attributes: HashMap<String, String>, slots: DiningSlots) -> DialogResponse {
    DialogResponse {
        session_attributes: Some(session_attributes),
        dialog_action: DialogAction::Delegate { slots },
    }
}

fn close(
    session_attributes: Option<HashMap<String, String>>,
    fulfillment_state: FulfillmentState,
    message: BotMessage,
) -> DialogResponse {
    DialogResponse {
        session_attributes,
        dialog_action: DialogAction::Close {
            fulfillment_state,
            message,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SlotName;

    fn slots() -> DiningSlots {
        DiningSlots {
            location: Some("new york".to_string()),
            cuisine: Some("chinese".to_string()),
            date: Some("2025-06-17".to_string()),
            time: Some("18:30".to_string()),
            people: Some("4".to_string()),
            phone_no: Some("1234567890".to_string()),
        }
    }

    #[test]
    fn test_elicit_slot_wire_shape() {
        let violation = SlotViolation {
            slot: SlotName::PhoneNo,
            message: Some("That aint no US number".to_string()),
        };
        let response = elicit_slot(None, DINING_INTENT.to_string(), slots(), violation);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["dialogAction"]["type"], "ElicitSlot");
        assert_eq!(json["dialogAction"]["intentName"], DINING_INTENT);
        assert_eq!(json["dialogAction"]["slotToElicit"], "Phone_No");
        assert_eq!(json["dialogAction"]["message"]["contentType"], "PlainText");
        assert_eq!(json["dialogAction"]["slots"]["Location"], "new york");
    }

    #[test]
    fn test_elicit_slot_omits_absent_message() {
        let violation = SlotViolation {
            slot: SlotName::Time,
            message: None,
        };
        let response = elicit_slot(None, DINING_INTENT.to_string(), slots(), violation);

        let json = serde_json::to_value(&response).unwrap();
        assert!(json["dialogAction"].get("message").is_none());
    }

    #[test]
    fn test_delegate_wire_shape() {
        let response = delegate(HashMap::new(), slots());

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["dialogAction"]["type"], "Delegate");
        assert_eq!(json["sessionAttributes"], serde_json::json!({}));
        assert_eq!(json["dialogAction"]["slots"]["Phone_No"], "1234567890");
    }

    #[test]
    fn test_close_wire_shape() {
        let response = close(
            None,
            FulfillmentState::Fulfilled,
            BotMessage::plain(CONFIRMATION),
        );

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["dialogAction"]["type"], "Close");
        assert_eq!(json["dialogAction"]["fulfillmentState"], "Fulfilled");
        assert_eq!(json["dialogAction"]["message"]["content"], CONFIRMATION);
    }

    #[test]
    fn test_work_item_from_full_slots() {
        let item = work_item_from_slots(&slots()).unwrap();
        assert_eq!(item.location, "new york");
        assert_eq!(item.cuisine, "chinese");
        assert_eq!(item.phone, "1234567890");
    }

    #[test]
    fn test_work_item_requires_phone() {
        let mut incomplete = slots();
        incomplete.phone_no = None;
        let err = work_item_from_slots(&incomplete).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }
}
