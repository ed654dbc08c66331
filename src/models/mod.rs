pub mod chat;
pub mod dialog;
pub mod slots;
pub mod suggestion;
pub mod work_item;

pub use chat::{ChatMessage, ChatRequest, ChatResponse, UnstructuredMessage};
pub use dialog::{
    BotIdentity, BotMessage, CurrentIntent, DialogAction, DialogResponse, FulfillmentState,
    IntentRequest, InvocationSource,
};
pub use slots::{DiningSlots, SlotName};
pub use suggestion::Suggestion;
pub use work_item::{QueuedMessage, WorkItem};
