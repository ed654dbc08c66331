use serde::{Deserialize, Serialize};

/// The six slots the dining dialog collects. Names match the dialog-engine
/// slot names on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotName {
    Location,
    Cuisine,
    Date,
    Time,
    People,
    #[serde(rename = "Phone_No")]
    PhoneNo,
}

impl SlotName {
    pub fn as_str(&self) -> &'static str {
        match self {
            SlotName::Location => "Location",
            SlotName::Cuisine => "Cuisine",
            SlotName::Date => "Date",
            SlotName::Time => "Time",
            SlotName::People => "People",
            SlotName::PhoneNo => "Phone_No",
        }
    }
}

/// Fixed slot record. A slot is either unset or holds a value that has
/// passed its validation rule; the dialog handler clears a slot whenever its
/// value fails validation, before re-eliciting it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiningSlots {
    #[serde(rename = "Location")]
    pub location: Option<String>,
    #[serde(rename = "Cuisine")]
    pub cuisine: Option<String>,
    #[serde(rename = "Date")]
    pub date: Option<String>,
    #[serde(rename = "Time")]
    pub time: Option<String>,
    #[serde(rename = "People")]
    pub people: Option<String>,
    #[serde(rename = "Phone_No")]
    pub phone_no: Option<String>,
}

impl DiningSlots {
    pub fn clear(&mut self, slot: SlotName) {
        match slot {
            SlotName::Location => self.location = None,
            SlotName::Cuisine => self.cuisine = None,
            SlotName::Date => self.date = None,
            SlotName::Time => self.time = None,
            SlotName::People => self.people = None,
            SlotName::PhoneNo => self.phone_no = None,
        }
    }
}
