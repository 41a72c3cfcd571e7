use api::{Aggregates, Category, QuestionSchema};
use dioxus::prelude::*;

pub const Y_MIN: f64 = 0.0;
pub const Y_MAX: f64 = 5.0;

const FALLBACK_COLOR: &str = "#94a3b8";

#[derive(Debug, Clone, PartialEq)]
pub struct BarPoint {
    /// One-based question number.
    pub question: usize,
    /// Mean as reported by the server.
    pub value: f64,
    /// `value` clamped to the rating axis.
    pub plotted: f64,
    pub tooltip: String,
}

impl BarPoint {
    /// Bar height as a percentage of the axis.
    pub fn height_percent(&self) -> f64 {
        (self.plotted - Y_MIN) / (Y_MAX - Y_MIN) * 100.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub key: String,
    pub label: String,
    pub color: String,
    pub points: Vec<BarPoint>,
}

/// Grouped bar chart: one series per category, one group per question index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartModel {
    pub labels: Vec<String>,
    pub series: Vec<ChartSeries>,
}

/// Build the chart from server aggregates.
///
/// Series follow the schema's category order; categories the schema does not
/// know are appended with a neutral colour and no question text.
pub fn build_chart(aggregates: &Aggregates, schema: &QuestionSchema) -> ChartModel {
    let mut series = Vec::with_capacity(aggregates.len());

    for category in schema.categories {
        if let Some(means) = aggregates.get(category.key) {
            series.push(build_series(schema, category.key, Some(category), means));
        }
    }
    for (key, means) in aggregates {
        if schema.category(key).is_none() {
            series.push(build_series(schema, key, None, means));
        }
    }

    let count = series.iter().map(|s| s.points.len()).max().unwrap_or(0);
    let labels = (1..=count).map(|n| format!("Q{n}")).collect();

    ChartModel { labels, series }
}

fn build_series(
    schema: &QuestionSchema,
    key: &str,
    category: Option<&Category>,
    means: &[f64],
) -> ChartSeries {
    let label = category
        .map(|category| category.chart_label.to_string())
        .unwrap_or_else(|| capitalize(key));
    let color = category
        .map(|category| category.color)
        .unwrap_or(FALLBACK_COLOR)
        .to_string();

    let points = means
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            let question = schema.question_text(key, index);
            BarPoint {
                question: index + 1,
                value,
                plotted: clamp_rating(value),
                tooltip: tooltip(&label, index + 1, value, question),
            }
        })
        .collect();

    ChartSeries {
        key: key.to_string(),
        label,
        color,
        points,
    }
}

fn clamp_rating(value: f64) -> f64 {
    if value.is_nan() {
        Y_MIN
    } else {
        value.clamp(Y_MIN, Y_MAX)
    }
}

fn tooltip(label: &str, number: usize, value: f64, question: Option<&str>) -> String {
    match question {
        Some(text) => format!("Question {number}\n{label}: {value} — {text}"),
        None => format!("Question {number}\n{label}: {value}"),
    }
}

fn capitalize(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `"<Label> Q<n>: <mean>"` for every aggregate, in chart order.
pub fn mean_lines(aggregates: &Aggregates, schema: &QuestionSchema) -> Vec<String> {
    let known = schema
        .categories
        .iter()
        .filter_map(|category| {
            aggregates
                .get(category.key)
                .map(|means| (category.short_label.to_string(), means))
        });
    let unknown = aggregates
        .iter()
        .filter(|(key, _)| schema.category(key).is_none())
        .map(|(key, means)| (capitalize(key), means));

    known
        .chain(unknown)
        .flat_map(|(label, means)| {
            means
                .iter()
                .enumerate()
                .map(move |(index, mean)| format!("{label} Q{}: {mean}", index + 1))
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Holds the chart currently on screen. Installing a new model disposes the
/// previous one first, so repeated loads never stack charts.
///
/// The install/dispose counters make that lifecycle observable: [`live`]
/// is at most 1 at all times.
///
/// [`live`]: ChartSlot::live
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartSlot {
    current: Option<ChartModel>,
    installed: u64,
    disposed: u64,
}

impl ChartSlot {
    pub fn install(&mut self, model: ChartModel) {
        if let Some(previous) = self.current.take() {
            self.dispose(previous);
        }
        self.current = Some(model);
        self.installed += 1;
    }

    fn dispose(&mut self, previous: ChartModel) {
        drop(previous);
        self.disposed += 1;
    }

    pub fn current(&self) -> Option<&ChartModel> {
        self.current.as_ref()
    }

    pub fn installed(&self) -> u64 {
        self.installed
    }

    /// Charts created and not yet disposed.
    pub fn live(&self) -> u64 {
        self.installed - self.disposed
    }
}

#[component]
pub fn GroupedChart(model: ChartModel) -> Element {
    let question_count = model.labels.len();
    let ticks: Vec<String> = (0..=5).rev().map(|tick| tick.to_string()).collect();

    rsx! {
        div { id: "groupedChart", class: "results-chart",
            div { class: "results-chart__legend",
                for series in model.series.iter() {
                    span { class: "results-chart__legend-item", key: "{series.key}",
                        span {
                            class: "results-chart__legend-swatch",
                            style: "background: {series.color};",
                        }
                        "{series.label}"
                    }
                }
            }

            div { class: "results-chart__body",
                div { class: "results-chart__axis-y",
                    span { class: "results-chart__axis-title", "Mean (1–5)" }
                    for tick in ticks.iter() {
                        span { class: "results-chart__tick", "{tick}" }
                    }
                }
                div { class: "results-chart__groups",
                    for (index, label) in model.labels.iter().enumerate() {
                        {render_group(&model, index, label)}
                    }
                }
            }

            p { class: "results-chart__axis-x", "Question number (1–{question_count})" }
        }
    }
}

fn render_group(model: &ChartModel, index: usize, label: &str) -> Element {
    let bars: Vec<Option<(String, String)>> = model
        .series
        .iter()
        .map(|series| {
            series.points.get(index).map(|point| {
                let style = format!(
                    "height: {:.1}%; background: {};",
                    point.height_percent(),
                    series.color
                );
                (style, point.tooltip.clone())
            })
        })
        .collect();

    rsx! {
        div { class: "results-chart__group", key: "{label}",
            div { class: "results-chart__bars",
                for bar in bars.into_iter() {
                    if let Some((style, tooltip)) = bar {
                        div { class: "results-chart__bar", style: "{style}", title: "{tooltip}" }
                    } else {
                        div { class: "results-chart__bar results-chart__bar--empty" }
                    }
                }
            }
            span { class: "results-chart__label", "{label}" }
        }
    }
}

#[component]
pub fn MeansList(lines: Vec<String>) -> Element {
    rsx! {
        ul { id: "aggregatesList", class: "results-means",
            for line in lines.iter() {
                li { "{line}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::schema::{SCHEMA_V1, SCHEMA_V2};

    fn awareness_only() -> Aggregates {
        let mut aggregates = Aggregates::new();
        aggregates.insert(
            "awareness".into(),
            vec![4.2, 3.0, 2.5, 5.0, 1.0, 3.3, 4.4, 2.2],
        );
        aggregates
    }

    #[test]
    fn single_category_gives_single_series() {
        let model = build_chart(&awareness_only(), &SCHEMA_V2);
        assert_eq!(model.series.len(), 1);

        let series = &model.series[0];
        assert_eq!(series.label, "Awareness");
        assert_eq!(series.color, "#3b82f6");
        assert_eq!(series.points.len(), 8);
        assert_eq!(model.labels.len(), 8);
        assert_eq!(model.labels[0], "Q1");
        for point in &series.points {
            assert!((Y_MIN..=Y_MAX).contains(&point.plotted));
        }
        assert_eq!(series.points[0].value, 4.2);
    }

    #[test]
    fn tooltip_names_the_question() {
        let model = build_chart(&awareness_only(), &SCHEMA_V2);
        let tooltip = &model.series[0].points[2].tooltip;
        assert!(tooltip.starts_with("Question 3\nAwareness: 2.5 — "));
        assert!(tooltip.ends_with(SCHEMA_V2.question_text("awareness", 2).unwrap()));
    }

    #[test]
    fn values_outside_the_scale_are_clamped_for_drawing() {
        let mut aggregates = Aggregates::new();
        aggregates.insert("prague_wtp".into(), vec![7.5, -1.0, f64::NAN, 0.0]);
        let model = build_chart(&aggregates, &SCHEMA_V2);
        let plotted: Vec<f64> = model.series[0].points.iter().map(|p| p.plotted).collect();
        assert_eq!(plotted, [5.0, 0.0, 0.0, 0.0]);
        assert_eq!(model.series[0].points[0].height_percent(), 100.0);
        assert_eq!(model.series[0].points[0].value, 7.5);
    }

    #[test]
    fn series_follow_schema_order_then_unknown_keys() {
        let mut aggregates = Aggregates::new();
        aggregates.insert("newyork_wtp".into(), vec![2.0; 4]);
        aggregates.insert("awareness".into(), vec![3.0; 8]);
        aggregates.insert("extra".into(), vec![1.0]);
        aggregates.insert("prague_wtp".into(), vec![4.0; 4]);

        let model = build_chart(&aggregates, &SCHEMA_V2);
        let labels: Vec<&str> = model.series.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, ["Awareness", "Prague WTP", "New York WTP", "Extra"]);
        assert_eq!(model.series[3].color, FALLBACK_COLOR);
        assert_eq!(model.series[3].points[0].tooltip, "Question 1\nExtra: 1");
    }

    #[test]
    fn legacy_schema_labels() {
        let mut aggregates = Aggregates::new();
        aggregates.insert("wtp".into(), vec![3.5; 8]);
        let model = build_chart(&aggregates, &SCHEMA_V1);
        assert_eq!(model.series[0].label, "WTP");
    }

    #[test]
    fn mean_lines_use_short_labels() {
        let mut aggregates = awareness_only();
        aggregates.insert("prague_wtp".into(), vec![3.25, 2.0, 1.5, 4.0]);
        let lines = mean_lines(&aggregates, &SCHEMA_V2);
        assert_eq!(lines.len(), 12);
        assert_eq!(lines[0], "Awareness Q1: 4.2");
        assert_eq!(lines[8], "Prague Q1: 3.25");
    }

    #[test]
    fn empty_aggregates_build_an_empty_chart() {
        let model = build_chart(&Aggregates::new(), &SCHEMA_V2);
        assert!(model.series.is_empty());
        assert!(model.labels.is_empty());
    }

    #[test]
    fn slot_disposes_previous_chart() {
        let mut slot = ChartSlot::default();
        assert_eq!(slot.live(), 0);

        slot.install(build_chart(&awareness_only(), &SCHEMA_V2));
        slot.install(ChartModel::default());
        slot.install(build_chart(&awareness_only(), &SCHEMA_V2));

        assert_eq!(slot.installed(), 3);
        assert_eq!(slot.live(), 1);
        assert_eq!(slot.current().unwrap().series.len(), 1);
    }
}
