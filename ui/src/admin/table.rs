use api::SubmissionSummary;
use dioxus::prelude::*;

use crate::core::format;

pub const EMPTY_TABLE_MESSAGE: &str = "No submissions yet";

/// One table row, already formatted for display.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionRow {
    pub id: i64,
    pub submitted: String,
    pub age: String,
    pub gender: String,
    pub education: String,
    pub occupation: String,
    pub income: String,
}

impl From<&SubmissionSummary> for SubmissionRow {
    fn from(summary: &SubmissionSummary) -> Self {
        Self {
            id: summary.id,
            submitted: format::or_placeholder(
                summary.created_at.as_deref().map(format::format_timestamp),
            ),
            age: format::or_placeholder(summary.age),
            gender: format::or_placeholder(summary.gender.as_deref()),
            education: format::or_placeholder(summary.education.as_deref()),
            occupation: format::or_placeholder(summary.occupation.as_deref()),
            income: format::or_placeholder(summary.income.as_deref()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TableContent {
    Empty,
    Rows(Vec<SubmissionRow>),
}

impl TableContent {
    pub fn from_submissions(submissions: &[SubmissionSummary]) -> Self {
        if submissions.is_empty() {
            TableContent::Empty
        } else {
            TableContent::Rows(submissions.iter().map(SubmissionRow::from).collect())
        }
    }
}

#[component]
pub fn SubmissionsTable(content: TableContent, on_view: EventHandler<i64>) -> Element {
    rsx! {
        section { class: "results-card admin-table",
            div { class: "results-card__header",
                h2 { "Submissions" }
                if let TableContent::Rows(rows) = &content {
                    span { class: "results-card__meta", "{rows.len()} recorded" }
                }
            }

            table { id: "submissionsTable", class: "admin-table__grid",
                thead {
                    tr {
                        th { "ID" }
                        th { "Submitted" }
                        th { "Age" }
                        th { "Gender" }
                        th { "Education" }
                        th { "Occupation" }
                        th { "Income" }
                        th { "Actions" }
                    }
                }
                tbody {
                    if let TableContent::Rows(rows) = &content {
                        for row in rows.iter() {
                            {render_row(row, on_view)}
                        }
                    }
                }
            }

            if content == TableContent::Empty {
                p { id: "tableEmpty", class: "admin-table__empty", "{EMPTY_TABLE_MESSAGE}" }
            }
        }
    }
}

fn render_row(row: &SubmissionRow, on_view: EventHandler<i64>) -> Element {
    let id = row.id;

    rsx! {
        tr { key: "{row.id}",
            td { "{row.id}" }
            td { "{row.submitted}" }
            td { "{row.age}" }
            td { "{row.gender}" }
            td { "{row.education}" }
            td { "{row.occupation}" }
            td { "{row.income}" }
            td {
                button {
                    r#type: "button",
                    class: "button button--ghost admin-table__view",
                    "data-id": "{id}",
                    onclick: move |_| on_view.call(id),
                    "View"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(id: i64) -> SubmissionSummary {
        SubmissionSummary {
            id,
            created_at: Some("2025-05-06T14:03:27.123456+00:00".into()),
            age: Some(41),
            gender: Some("Female".into()),
            education: None,
            occupation: Some("Designer".into()),
            income: None,
        }
    }

    #[component]
    fn TableHarness(content: TableContent) -> Element {
        rsx! {
            SubmissionsTable { content, on_view: move |_: i64| {} }
        }
    }

    fn render(content: TableContent) -> String {
        let mut dom = VirtualDom::new_with_props(TableHarness, TableHarnessProps { content });
        dom.rebuild_in_place();
        dioxus::ssr::render(&dom)
    }

    fn body_rows(html: &str) -> usize {
        let body = html
            .split_once("<tbody>")
            .and_then(|(_, rest)| rest.split_once("</tbody>"))
            .map(|(body, _)| body)
            .expect("rendered table has a tbody");
        body.matches("<tr").count()
    }

    #[test]
    fn no_submissions_means_empty_message() {
        assert_eq!(TableContent::from_submissions(&[]), TableContent::Empty);
    }

    #[test]
    fn empty_table_renders_no_rows_and_a_separate_note() {
        let html = render(TableContent::Empty);
        assert_eq!(body_rows(&html), 0);

        let (_, after_table) = html.split_once("</table>").unwrap();
        assert!(after_table.contains("id=\"tableEmpty\""));
        assert!(after_table.contains(EMPTY_TABLE_MESSAGE));
    }

    #[test]
    fn one_body_row_per_submission() {
        let html = render(TableContent::from_submissions(&[summary(9), summary(4)]));
        assert_eq!(body_rows(&html), 2);
        assert!(!html.contains("tableEmpty"));
    }

    #[test]
    fn rows_keep_server_order_and_mark_missing_cells() {
        let content = TableContent::from_submissions(&[summary(9), summary(4)]);
        let TableContent::Rows(rows) = content else {
            panic!("expected rows");
        };
        assert_eq!(rows.iter().map(|r| r.id).collect::<Vec<_>>(), [9, 4]);

        let row = &rows[0];
        assert_eq!(row.submitted, "2025-05-06 · 14:03");
        assert_eq!(row.age, "41");
        assert_eq!(row.education, "—");
        assert_eq!(row.income, "—");
        assert_eq!(row.occupation, "Designer");
    }

    #[test]
    fn missing_timestamp_shows_placeholder() {
        let mut bare = summary(1);
        bare.created_at = None;
        bare.age = None;
        let row = SubmissionRow::from(&bare);
        assert_eq!(row.submitted, "—");
        assert_eq!(row.age, "—");
    }
}
