//! CSV rendering of every stored row.

use api::SubmissionRecord;
use serde_json::Value;

pub const NO_DATA: &str = "No data";

const LINE_END: &str = "\r\n";

/// Header row from the first row's columns, then one line per row. Columns a
/// later row lacks are written empty; extra columns are dropped.
pub fn to_csv(rows: &[SubmissionRecord]) -> String {
    let Some(first) = rows.first() else {
        return format!("{NO_DATA}{LINE_END}");
    };

    let headers: Vec<&str> = first.keys().collect();
    let mut out = String::new();
    push_line(&mut out, headers.iter().map(|h| escape(h)));
    for row in rows {
        push_line(
            &mut out,
            headers.iter().map(|h| escape(&cell(row.fields().get(*h)))),
        );
    }
    out
}

fn push_line(out: &mut String, cells: impl Iterator<Item = String>) {
    let line: Vec<String> = cells.collect();
    out.push_str(&line.join(","));
    out.push_str(LINE_END);
}

fn cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
