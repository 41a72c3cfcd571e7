//! Turn submitted form entries into the JSON body for `POST /api/submit_survey`.

use api::{FieldKind, FieldValue, QuestionSchema, Rating, SurveyResponse};
use thiserror::Error;

use super::demographics::OTHER_COUNTRY;

const COUNTRY: &str = "country";
const COUNTRY_OTHER: &str = "countryOther";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayloadError {
    #[error("Please answer question {field}.")]
    MissingRating { field: String },
    #[error("Answer for {field} must be between 1 and 5 (got {value}).")]
    RatingOutOfRange { field: String, value: i64 },
}

/// Coerce raw `(name, value)` form entries.
///
/// `country == "Other"` is replaced by the trimmed `countryOther` text when one
/// was typed; `countryOther` itself is never sent. Numeric fields that fail to
/// parse are left out. Every rating field of `schema` must be present and in
/// range.
pub fn build_response<I, K, V>(
    entries: I,
    schema: &QuestionSchema,
) -> Result<SurveyResponse, PayloadError>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let entries: Vec<(String, String)> = entries
        .into_iter()
        .map(|(key, value)| (key.as_ref().to_string(), value.as_ref().to_string()))
        .collect();

    let other_country = entries
        .iter()
        .find(|(key, _)| key == COUNTRY_OTHER)
        .map(|(_, value)| value.trim())
        .filter(|value| !value.is_empty());

    let mut response = SurveyResponse::new();
    for (key, raw) in &entries {
        if key == COUNTRY_OTHER {
            continue;
        }

        let raw = match (key.as_str(), other_country) {
            (COUNTRY, Some(other)) if raw == OTHER_COUNTRY => other,
            _ => raw.as_str(),
        };

        if let Some(value) = FieldKind::classify(key, schema).coerce(raw) {
            response.insert(key.clone(), value);
        }
    }

    for field in schema.rating_fields() {
        match response.get(&field).and_then(FieldValue::as_i64) {
            Some(value) => {
                Rating::try_from(value)
                    .map_err(|_| PayloadError::RatingOutOfRange {
                        field: field.clone(),
                        value,
                    })?;
            }
            None => return Err(PayloadError::MissingRating { field }),
        }
    }

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_form() -> Vec<(String, String)> {
        let schema = QuestionSchema::current();
        let mut entries: Vec<(String, String)> = vec![
            ("age".into(), "27".into()),
            ("gender".into(), "Female".into()),
            ("education".into(), "Master's degree".into()),
            ("occupation".into(), "Student".into()),
            ("income".into(), "Prefer not to say".into()),
            ("country".into(), "Czech Republic".into()),
            ("countryOther".into(), "".into()),
            ("aiKnowledge".into(), "Basic".into()),
            ("pragueAiPrice".into(), "12.5".into()),
            ("pragueHumanPrice".into(), "18".into()),
            ("newYorkAiPrice".into(), "20".into()),
            ("newYorkHumanPrice".into(), "24.99".into()),
        ];
        for (i, field) in schema.rating_fields().enumerate() {
            entries.push((field, ((i % 5) + 1).to_string()));
        }
        entries
    }

    #[test]
    fn full_form_coerces_every_field() {
        let schema = QuestionSchema::current();
        let response = build_response(complete_form(), schema).unwrap();

        for field in schema.rating_fields() {
            let value = response.get(&field).and_then(FieldValue::as_i64).unwrap();
            assert!((1..=5).contains(&value), "{field} = {value}");
        }
        for price in schema.prices {
            assert!(matches!(response.get(price.wire), Some(FieldValue::Float(_))));
        }
        assert_eq!(response.get("age"), Some(&FieldValue::Integer(27)));
        assert_eq!(
            response.get("gender"),
            Some(&FieldValue::Text("Female".into()))
        );
        assert!(response.get("countryOther").is_none());

        let body = serde_json::to_value(&response).unwrap();
        assert!(body["pragueHumanPrice"].is_f64());
        assert!(body["awareness1"].is_i64());
    }

    #[test]
    fn other_country_uses_free_text() {
        let mut entries = complete_form();
        for (key, value) in entries.iter_mut() {
            match key.as_str() {
                "country" => *value = "Other".into(),
                "countryOther" => *value = "  Portugal ".into(),
                _ => {}
            }
        }
        let response = build_response(entries, QuestionSchema::current()).unwrap();
        assert_eq!(
            response.get("country"),
            Some(&FieldValue::Text("Portugal".into()))
        );
    }

    #[test]
    fn blank_other_keeps_the_choice() {
        let mut entries = complete_form();
        for (key, value) in entries.iter_mut() {
            if key == "country" {
                *value = "Other".into();
            }
        }
        let response = build_response(entries, QuestionSchema::current()).unwrap();
        assert_eq!(
            response.get("country"),
            Some(&FieldValue::Text("Other".into()))
        );
    }

    #[test]
    fn unanswered_rating_is_reported() {
        let entries: Vec<_> = complete_form()
            .into_iter()
            .filter(|(key, _)| key != "newyork_wtp3")
            .collect();
        let err = build_response(entries, QuestionSchema::current()).unwrap_err();
        assert_eq!(
            err,
            PayloadError::MissingRating {
                field: "newyork_wtp3".into()
            }
        );
    }

    #[test]
    fn out_of_range_rating_is_reported() {
        let mut entries = complete_form();
        for (key, value) in entries.iter_mut() {
            if key == "awareness2" {
                *value = "9".into();
            }
        }
        let err = build_response(entries, QuestionSchema::current()).unwrap_err();
        assert!(matches!(err, PayloadError::RatingOutOfRange { value: 9, .. }));
    }

    #[test]
    fn unparseable_price_is_dropped() {
        let mut entries = complete_form();
        for (key, value) in entries.iter_mut() {
            if key == "pragueAiPrice" {
                *value = "".into();
            }
        }
        let response = build_response(entries, QuestionSchema::current()).unwrap();
        assert!(response.get("pragueAiPrice").is_none());
        assert!(response.get("pragueHumanPrice").is_some());
    }
}
