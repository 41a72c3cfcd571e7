//! Formatting helpers for presenting stored answers.

use std::fmt::Display;

use time::{format_description::well_known::Rfc3339, macros::format_description, OffsetDateTime};

/// Shown wherever a value is missing.
pub const PLACEHOLDER: &str = "—";

pub fn or_placeholder<T: Display>(value: Option<T>) -> String {
    value
        .map(|value| value.to_string())
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// `2025-03-01T10:04:55.123+00:00` becomes `2025-03-01 · 10:04`.
/// Unparseable input is returned as-is.
pub fn format_timestamp(iso: &str) -> String {
    if let Ok(parsed) = OffsetDateTime::parse(iso, &Rfc3339) {
        let date = parsed.format(&format_description!("[year]-[month]-[day]"));
        let clock = parsed.format(&format_description!("[hour]:[minute]"));
        if let (Ok(date), Ok(clock)) = (date, clock) {
            return format!("{date} · {clock}");
        }
    }

    let (date, time_segment) = match iso.split_once('T') {
        Some(parts) => parts,
        None => return iso.to_string(),
    };
    let time_display: String = time_segment.chars().take(5).collect();
    if time_display.is_empty() {
        date.to_string()
    } else {
        format!("{date} · {time_display}")
    }
}
