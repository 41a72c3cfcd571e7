//! Field naming and value coercion rules.
//!
//! Form inputs arrive as strings. Before posting, each one is coerced by name:
//! - names ending in `price` (any case) become floats
//! - rating fields (`<category prefix><n>`) and `age` become integers
//! - everything else stays text

use crate::{model::FieldValue, schema::QuestionSchema};

/// `prefix + (index + 1)`, the stored column name of a Likert question.
pub fn field_name(prefix: &str, index: usize) -> String {
    format!("{prefix}{}", index + 1)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Rating,
    Integer,
    Float,
    Text,
}

impl FieldKind {
    pub fn classify(key: &str, schema: &QuestionSchema) -> Self {
        if key.to_ascii_lowercase().ends_with("price") {
            FieldKind::Float
        } else if schema.locate(key).is_some() || is_prefixed_number(key, schema) {
            FieldKind::Rating
        } else if key == "age" {
            FieldKind::Integer
        } else {
            FieldKind::Text
        }
    }

    /// Convert a raw form value. `None` when a numeric field does not parse.
    pub fn coerce(self, raw: &str) -> Option<FieldValue> {
        let trimmed = raw.trim();
        match self {
            FieldKind::Rating | FieldKind::Integer => parse_int(trimmed).map(FieldValue::Integer),
            FieldKind::Float => trimmed
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .map(FieldValue::Float),
            FieldKind::Text => Some(FieldValue::Text(raw.to_string())),
        }
    }
}

/// `prefix` followed by digits, even past the end of the category's list.
fn is_prefixed_number(key: &str, schema: &QuestionSchema) -> bool {
    schema.categories.iter().any(|category| {
        key.strip_prefix(category.prefix)
            .map(|rest| !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()))
            .unwrap_or(false)
    })
}

/// Leading-integer parse: `"4"` and `"4.0"` are 4, `"abc"` is nothing.
fn parse_int(value: &str) -> Option<i64> {
    if let Ok(parsed) = value.parse::<i64>() {
        return Some(parsed);
    }
    value
        .parse::<f64>()
        .ok()
        .filter(|parsed| parsed.is_finite() && parsed.fract() == 0.0)
        .map(|parsed| parsed as i64)
}
