//! Field validation for the styling form.
//!
//! Occasion: emptiness and minimum length are measured on the trimmed value,
//! the maximum on the raw value. Surrounding whitespace therefore counts
//! toward the 300-character cap but never satisfies the minimum.

use serde::{Deserialize, Serialize};

pub const OCCASION_MIN_LENGTH: usize = 5;
pub const OCCASION_MAX_LENGTH: usize = 300;
pub const PREFERENCES_MAX_LENGTH: usize = 200;

pub const OCCASION_REQUIRED: &str = "Please describe the occasion.";
pub const GENDER_REQUIRED: &str = "Required.";

/// Quick-pick occasions offered under the form.
pub const SUGGESTED_OCCASIONS: &[&str] = &[
    "Casual Coffee Date",
    "Summer Wedding Guest",
    "Tech Job Interview",
    "Weekend Brunch",
    "Gallery Opening",
    "Cocktail Party",
];

/// Style archetypes offered by the button group.
pub const STYLE_ARCHETYPES: &[&str] = &["Female", "Male", "Non-Binary"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Occasion,
    Gender,
    Preferences,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Occasion, Field::Gender, Field::Preferences];
}

/// Returns the validation message for `value` in `field`; empty means valid.
pub fn validate(field: Field, value: &str) -> String {
    match field {
        Field::Occasion => validate_occasion(value),
        Field::Gender => validate_gender(value),
        Field::Preferences => validate_preferences(value),
    }
}

pub fn validate_occasion(value: &str) -> String {
    let trimmed_len = char_len(value.trim());
    if trimmed_len == 0 {
        return OCCASION_REQUIRED.to_string();
    }
    if trimmed_len < OCCASION_MIN_LENGTH {
        return format!("At least {OCCASION_MIN_LENGTH} chars needed.");
    }
    if char_len(value) > OCCASION_MAX_LENGTH {
        return format!("Limit to {OCCASION_MAX_LENGTH} characters.");
    }
    String::new()
}

pub fn validate_gender(value: &str) -> String {
    if value.trim().is_empty() {
        return GENDER_REQUIRED.to_string();
    }
    String::new()
}

pub fn validate_preferences(value: &str) -> String {
    if char_len(value) > PREFERENCES_MAX_LENGTH {
        return format!("Limit to {PREFERENCES_MAX_LENGTH} characters.");
    }
    String::new()
}

/// Length in characters, not bytes.
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}
