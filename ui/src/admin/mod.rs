//! Admin dashboard: summary counters, grouped mean chart, submissions table and detail modal.

mod chart;
pub use chart::{build_chart, mean_lines, BarPoint, ChartModel, ChartSeries, ChartSlot, GroupedChart, MeansList};

mod detail;
pub use detail::{build_detail, ClickTarget, DetailField, DetailModal, DetailSection, DetailView, ModalState};

mod export;
pub use export::ExportButton;

mod metrics;
pub use metrics::{MetricsCards, SummaryMetrics};

mod table;
pub use table::{SubmissionRow, SubmissionsTable, TableContent, EMPTY_TABLE_MESSAGE};

mod view;
pub use view::AdminDashboard;

use api::{AdminData, Aggregates, QuestionSchema, SubmissionSummary};

use crate::core::client::ClientError;

/// Everything the dashboard shows, owned by the page and passed down explicitly.
///
/// Stays at its default (pre-load) value until a load succeeds; a failed load
/// never touches it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    pub loaded: bool,
    pub aggregates: Aggregates,
    pub submissions: Vec<SubmissionSummary>,
    pub chart: ChartSlot,
}

impl DashboardState {
    pub fn apply(&mut self, data: AdminData, schema: &QuestionSchema) {
        self.chart.install(build_chart(&data.aggregates, schema));
        self.aggregates = data.aggregates;
        self.submissions = data.submissions;
        self.loaded = true;
    }

    /// Apply a finished load. A failure leaves the state untouched and returns
    /// the alert text to show.
    pub fn load_result(
        &mut self,
        result: Result<AdminData, ClientError>,
        schema: &QuestionSchema,
    ) -> Result<(), String> {
        match result {
            Ok(data) => {
                self.apply(data, schema);
                Ok(())
            }
            Err(err) => Err(format!("Error loading admin data: {err}")),
        }
    }

    pub fn metrics(&self) -> SummaryMetrics {
        SummaryMetrics::from_state(self)
    }

    pub fn table(&self) -> TableContent {
        TableContent::from_submissions(&self.submissions)
    }
}
