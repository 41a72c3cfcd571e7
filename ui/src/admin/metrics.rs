use dioxus::prelude::*;

use crate::core::format::PLACEHOLDER;

use super::DashboardState;

/// The three counter cards above the chart. Only the submission count is
/// tracked; the other two are fixed labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryMetrics {
    pub total_submissions: String,
    pub unique_emails: String,
    pub questions_answered: String,
}

impl SummaryMetrics {
    pub fn from_state(state: &DashboardState) -> Self {
        let questions_answered = if state.loaded { "All" } else { PLACEHOLDER };
        Self {
            total_submissions: state.submissions.len().to_string(),
            unique_emails: PLACEHOLDER.to_string(),
            questions_answered: questions_answered.to_string(),
        }
    }
}

#[component]
pub fn MetricsCards(metrics: SummaryMetrics) -> Element {
    rsx! {
        div { class: "admin-metrics",
            {metric_card("totalSubmissions", "Total submissions", &metrics.total_submissions)}
            {metric_card("uniqueEmails", "Unique emails", &metrics.unique_emails)}
            {metric_card("questionsAnswered", "Questions answered", &metrics.questions_answered)}
        }
    }
}

fn metric_card(id: &'static str, label: &'static str, value: &str) -> Element {
    rsx! {
        div { class: "results-card admin-metrics__card",
            span { class: "admin-metrics__label", "{label}" }
            strong { id: "{id}", class: "admin-metrics__value", "{value}" }
        }
    }
}
