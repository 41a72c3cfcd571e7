//! The five-point Likert scale.

use std::fmt;

use serde_json::Value;
use thiserror::Error;

pub const RATING_LABELS: [&str; 5] = [
    "Strongly Disagree",
    "Disagree",
    "Neutral",
    "Agree",
    "Strongly Agree",
];

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// A validated answer in `1..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rating(u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("rating {0} is outside 1..=5")]
pub struct RatingOutOfRange(pub i64);

impl Rating {
    pub fn value(self) -> u8 {
        self.0
    }

    pub fn label(self) -> &'static str {
        RATING_LABELS[usize::from(self.0 - MIN_RATING)]
    }

    /// Read a stored answer. Accepts integers, integral floats and numeric strings;
    /// anything else (null, out of range, text) yields `None`.
    pub fn from_json(value: &Value) -> Option<Self> {
        let number = match value {
            Value::Number(number) => number
                .as_i64()
                .or_else(|| number.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64))?,
            Value::String(text) => text.trim().parse::<i64>().ok()?,
            _ => return None,
        };
        Rating::try_from(number).ok()
    }

    pub fn all() -> impl Iterator<Item = Rating> {
        (MIN_RATING..=MAX_RATING).map(Rating)
    }
}

impl TryFrom<i64> for Rating {
    type Error = RatingOutOfRange;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (i64::from(MIN_RATING)..=i64::from(MAX_RATING)).contains(&value) {
            Ok(Rating(value as u8))
        } else {
            Err(RatingOutOfRange(value))
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.0, self.label())
    }
}
