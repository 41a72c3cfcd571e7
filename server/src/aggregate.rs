//! Admin dashboard numbers computed from stored rows.

use api::{Aggregates, QuestionSchema, SubmissionRecord, SubmissionSummary};
use serde_json::Value;

/// Mean answer per question, per category of `schema`. Only answers that are
/// present and non-zero count; a question nobody answered averages to 0.
pub fn aggregate(rows: &[SubmissionRecord], schema: &QuestionSchema) -> Aggregates {
    schema
        .categories
        .iter()
        .map(|category| {
            let means = category
                .fields()
                .map(|field| mean(rows.iter().filter_map(|row| row.get(&field).and_then(answer))))
                .collect();
            (category.key.to_string(), means)
        })
        .collect()
}

fn answer(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }?;
    (number != 0.0 && number.is_finite()).then_some(number)
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        0.0
    } else {
        round2(sum / count as f64)
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Table rows for the dashboard, in store order. Rows without an id are skipped.
pub fn summaries(rows: &[SubmissionRecord]) -> Vec<SubmissionSummary> {
    rows.iter().filter_map(SubmissionRecord::summary).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rows(values: Vec<Value>) -> Vec<SubmissionRecord> {
        values
            .into_iter()
            .map(|v| serde_json::from_value(v).unwrap())
            .collect()
    }

    #[test]
    fn means_are_rounded_and_skip_blanks() {
        let rows = rows(vec![
            json!({ "id": 1, "awareness1": 4, "awareness2": 1, "prague_wtp1": 2 }),
            json!({ "id": 2, "awareness1": 5, "awareness2": 2, "prague_wtp1": null }),
            json!({ "id": 3, "awareness1": 5, "awareness2": 2, "prague_wtp1": 0 }),
        ]);
        let aggregates = aggregate(&rows, QuestionSchema::current());

        assert_eq!(aggregates.len(), 3);
        assert_eq!(aggregates["awareness"].len(), 8);
        assert_eq!(aggregates["awareness"][0], 4.67);
        assert_eq!(aggregates["awareness"][1], 1.67);
        assert_eq!(aggregates["awareness"][2], 0.0);
        assert_eq!(aggregates["prague_wtp"][0], 2.0);
        assert_eq!(aggregates["newyork_wtp"], vec![0.0; 4]);
    }

    #[test]
    fn no_rows_gives_zero_means() {
        let aggregates = aggregate(&[], QuestionSchema::current());
        assert!(aggregates.values().flatten().all(|mean| *mean == 0.0));
        assert_eq!(aggregates["prague_wtp"].len(), 4);
    }

    #[test]
    fn summaries_keep_order_and_skip_rows_without_id() {
        let rows = rows(vec![
            json!({ "id": 7, "age": "33", "gender": "Male" }),
            json!({ "gender": "Female" }),
            json!({ "id": 3, "income": "" }),
        ]);
        let summaries = summaries(&rows);
        assert_eq!(summaries.iter().map(|s| s.id).collect::<Vec<_>>(), [7, 3]);
        assert_eq!(summaries[0].age, Some(33));
        assert_eq!(summaries[1].income, None);
    }
}
