use chrono::{NaiveDate, NaiveDateTime, Timelike};

use crate::models::{DiningSlots, SlotName};

pub const SUPPORTED_LOCATIONS: &[&str] = &["new york", "manhattan", "california", "texas"];

pub const SUPPORTED_CUISINES: &[&str] = &[
    "indian", "chinese", "italian", "mexican", "japanese", "thai", "french", "asian", "spanish",
];

const OPENING_HOUR: i64 = 10;
const CLOSING_HOUR: i64 = 22;

/// First slot value that failed validation. A `None` message tells the
/// dialog engine to re-prompt with the prompt defined on its build-time
/// model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotViolation {
    pub slot: SlotName,
    pub message: Option<String>,
}

impl SlotViolation {
    fn new(slot: SlotName, message: impl Into<String>) -> Self {
        Self {
            slot,
            message: Some(message.into()),
        }
    }

    fn without_message(slot: SlotName) -> Self {
        Self {
            slot,
            message: None,
        }
    }
}

/// Check the filled slots in fixed order (location, cuisine, date, time,
/// people, phone) and report the first violation. Unset slots are skipped:
/// they have not been collected yet.
pub fn validate_dining(slots: &DiningSlots, now: NaiveDateTime) -> Result<(), SlotViolation> {
    if let Some(location) = &slots.location {
        if !SUPPORTED_LOCATIONS.contains(&location.to_lowercase().as_str()) {
            return Err(SlotViolation::new(
                SlotName::Location,
                "We've just got started. Our service is limited to just a few places like Manhattan, California and Texas",
            ));
        }
    }

    if let Some(cuisine) = &slots.cuisine {
        if !SUPPORTED_CUISINES.contains(&cuisine.to_lowercase().as_str()) {
            return Err(SlotViolation::new(
                SlotName::Cuisine,
                format!(
                    "We do not support {cuisine}, would you like to try another cuisine? My personal favourite is Chinese"
                ),
            ));
        }
    }

    let mut parsed_date = None;
    if let Some(date) = &slots.date {
        match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
            Ok(d) if d < now.date() => {
                return Err(SlotViolation::new(
                    SlotName::Date,
                    "I wish I could go back in time. For now, pick another date",
                ));
            }
            Ok(d) => parsed_date = Some(d),
            Err(_) => {
                return Err(SlotViolation::new(
                    SlotName::Date,
                    "I did not understand that, what date would you like to dine out?",
                ));
            }
        }
    }

    if let Some(time) = &slots.time {
        if time.len() != 5 {
            return Err(SlotViolation::without_message(SlotName::Time));
        }

        let Some((hour_str, minute_str)) = time.split_once(':') else {
            return Err(SlotViolation::without_message(SlotName::Time));
        };
        let (Ok(hour), Ok(minute)) = (hour_str.parse::<i64>(), minute_str.parse::<i64>()) else {
            return Err(SlotViolation::new(
                SlotName::Time,
                "I did not understand that, what time?",
            ));
        };

        if !(OPENING_HOUR..=CLOSING_HOUR).contains(&hour) {
            return Err(SlotViolation::new(
                SlotName::Time,
                "Most business hours are from 10 AM to 10 PM. Can you specify a time during this range?",
            ));
        }

        if parsed_date == Some(now.date()) {
            let now_hour = i64::from(now.hour());
            let now_minute = i64::from(now.minute());
            if hour < now_hour || (hour == now_hour && minute < now_minute) {
                return Err(SlotViolation::new(
                    SlotName::Time,
                    "I wish I could go back in time. For now, pick another time",
                ));
            }
        }
    }

    if let Some(people) = &slots.people {
        match people.trim().parse::<i64>() {
            Ok(n) if n > 0 => {}
            _ => {
                return Err(SlotViolation::new(
                    SlotName::People,
                    "Take some real friends with you!",
                ));
            }
        }
    }

    if let Some(phone_no) = &slots.phone_no {
        if phone_no.len() != 10 {
            return Err(SlotViolation::new(
                SlotName::PhoneNo,
                "That aint no US number",
            ));
        }
    }

    Ok(())
}
