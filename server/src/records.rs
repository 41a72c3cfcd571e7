//! Turning a submitted form body into a stored row.

use api::{QuestionSchema, Rating, SubmissionRecord};
use serde_json::{Map, Value};

use crate::error::AppError;

/// `(body key, column)` for the demographic answers, copied as-is.
pub const DEMOGRAPHICS: [(&str, &str); 7] = [
    ("age", "age"),
    ("gender", "gender"),
    ("education", "education"),
    ("occupation", "occupation"),
    ("income", "income"),
    ("country", "country"),
    ("aiKnowledge", "ai_knowledge"),
];

/// Build the row for `body`. Every column of `schema` is written: ratings that
/// are missing, unparseable or outside 1–5 become `null`, as do prices that do
/// not parse as a finite number.
pub fn build_record(body: &Value, schema: &QuestionSchema) -> Result<SubmissionRecord, AppError> {
    let fields = body
        .as_object()
        .ok_or_else(|| AppError::MalformedPayload("expected a JSON object".into()))?;

    let mut record = SubmissionRecord::new(Map::new());
    for (key, column) in DEMOGRAPHICS {
        record.set(column, fields.get(key).cloned().unwrap_or(Value::Null));
    }
    for field in schema.rating_fields() {
        let rating = fields.get(&field).and_then(lenient_rating);
        record.set(field, rating.map_or(Value::Null, |r| Value::from(r.value())));
    }
    for price in schema.prices {
        let value = fields.get(price.wire).and_then(lenient_float);
        record.set(price.column, value.map_or(Value::Null, Value::from));
    }
    Ok(record)
}

fn lenient_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

fn lenient_rating(value: &Value) -> Option<Rating> {
    lenient_int(value).and_then(|raw| Rating::try_from(raw).ok())
}

fn lenient_float(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    };
    parsed.filter(|f: &f64| f.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn schema() -> &'static QuestionSchema {
        QuestionSchema::current()
    }

    #[test]
    fn demographics_are_copied_and_renamed() {
        let record = build_record(
            &json!({ "age": 27, "gender": "Female", "aiKnowledge": "Basic", "country": "Portugal" }),
            schema(),
        )
        .unwrap();
        assert_eq!(record.get("ai_knowledge"), Some(&json!("Basic")));
        assert!(record.fields().get("aiKnowledge").is_none());
        assert_eq!(record.get("age"), Some(&json!(27)));
        assert_eq!(record.fields().get("income"), Some(&Value::Null));
    }

    #[test]
    fn ratings_are_parsed_leniently() {
        let record = build_record(
            &json!({
                "awareness1": 4,
                "awareness2": "5",
                "awareness3": 3.9,
                "awareness4": "x",
                "awareness5": 9,
                "awareness6": 0,
            }),
            schema(),
        )
        .unwrap();
        assert_eq!(record.get("awareness1"), Some(&json!(4)));
        assert_eq!(record.get("awareness2"), Some(&json!(5)));
        assert_eq!(record.get("awareness3"), Some(&json!(3)));
        assert!(record.get("awareness4").is_none());
        assert!(record.get("awareness5").is_none());
        assert!(record.get("awareness6").is_none());
        // every schema column exists, even if unanswered
        assert_eq!(record.fields().get("newyork_wtp4"), Some(&Value::Null));
    }

    #[test]
    fn prices_land_in_snake_case_columns() {
        let record = build_record(
            &json!({ "pragueAiPrice": 12.5, "pragueHumanPrice": "18", "newYorkAiPrice": "free" }),
            schema(),
        )
        .unwrap();
        assert_eq!(record.get("prague_ai_price"), Some(&json!(12.5)));
        assert_eq!(record.get("prague_human_price"), Some(&json!(18.0)));
        assert!(record.get("newyork_ai_price").is_none());
        assert!(record.fields().get("pragueAiPrice").is_none());
    }

    #[test]
    fn non_object_body_is_malformed() {
        let err = build_record(&json!([1, 2, 3]), schema()).unwrap_err();
        assert!(matches!(err, AppError::MalformedPayload(_)));
    }
}
