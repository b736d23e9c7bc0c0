use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

use crate::Error;

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    pub fn parse(value: &str) -> crate::Result<Self> {
        value
            .parse()
            .map_err(|_| Error::InvalidSlot(format!("unknown day '{value}'")))
    }
}

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealSlot {
    pub fn parse(value: &str) -> crate::Result<Self> {
        value
            .parse()
            .map_err(|_| Error::InvalidSlot(format!("unknown meal slot '{value}'")))
    }
}

/// Parses a `(day, slot)` coordinate coming from outside the typed API.
pub fn parse_slot(day: &str, slot: &str) -> crate::Result<(Day, MealSlot)> {
    Ok((Day::parse(day)?, MealSlot::parse(slot)?))
}
