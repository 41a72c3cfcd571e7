use api::QuestionSchema;
use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;

use crate::core::{client::ApiClient, platform};
use crate::t;

use super::{
    build_detail, mean_lines, DashboardState, DetailModal, ExportButton, GroupedChart, MeansList,
    MetricsCards, ModalState, SubmissionsTable,
};

#[component]
pub fn AdminDashboard() -> Element {
    let client = use_context_provider(ApiClient::default);
    let mut state = use_signal(DashboardState::default);
    let mut modal = use_signal(ModalState::default);

    {
        let client = client.clone();
        use_future(move || {
            let client = client.clone();
            async move {
                let result = client.admin_data().await;
                let outcome = state.write().load_result(result, QuestionSchema::current());
                match outcome {
                    Ok(()) => info!("Loaded admin data"),
                    Err(alert) => {
                        warn!("{alert}");
                        platform::alert(&alert);
                    }
                }
            }
        });
    }

    let on_view = move |id: i64| {
        let ticket = modal.write().begin();
        let client = client.clone();
        platform::spawn_future(async move {
            match client.admin_response(id).await {
                Ok(record) => {
                    let view = build_detail(&record, id);
                    if !modal.write().complete(ticket, view) {
                        info!("Dropping stale detail for submission {id}");
                    }
                }
                Err(err) => {
                    warn!("Failed to load submission {id}: {err}");
                    if modal.read().is_latest(ticket) {
                        platform::alert("Error loading submission details");
                    }
                }
            }
        });
    };

    let snapshot = state();
    let schema = QuestionSchema::current();
    let lines = mean_lines(&snapshot.aggregates, schema);
    let chart = snapshot.chart.current().cloned();
    let detail = modal.read().view().cloned();

    rsx! {
        div { class: "page admin-page",
            header { class: "admin-page__header",
                div {
                    h1 { {t!("admin-title")} }
                    p { class: "admin-page__subtitle", {t!("admin-subtitle")} }
                }
                ExportButton {}
            }

            MetricsCards { metrics: snapshot.metrics() }

            section { class: "results-card admin-chart",
                div { class: "results-card__header",
                    h2 { {t!("admin-chart-title")} }
                }
                if let Some(model) = chart {
                    GroupedChart { model }
                } else {
                    p { class: "results-card__placeholder", {t!("admin-chart-empty")} }
                }
                MeansList { lines }
            }

            SubmissionsTable { content: snapshot.table(), on_view }

            if let Some(view) = detail {
                DetailModal {
                    view,
                    on_click: move |target| modal.write().click(target),
                }
            }
        }
    }
}
