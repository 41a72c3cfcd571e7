use api::{QuestionSchema, SubmissionRecord};
use dioxus::prelude::*;

use crate::core::format::{self, PLACEHOLDER};

const DEMOGRAPHICS: [(&str, &str); 7] = [
    ("Age", "age"),
    ("Gender", "gender"),
    ("Education", "education"),
    ("Occupation", "occupation"),
    ("Income", "income"),
    ("Country", "country"),
    ("Familiarity with AI", "ai_knowledge"),
];

#[derive(Debug, Clone, PartialEq)]
pub enum DetailField {
    Value {
        label: String,
        value: String,
    },
    Answer {
        number: usize,
        question: String,
        response: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailSection {
    pub title: String,
    pub fields: Vec<DetailField>,
}

/// Everything the detail modal shows for one stored response.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub title: String,
    pub submitted: String,
    pub sections: Vec<DetailSection>,
}

/// Lay out a stored response: demographics, one section per question category,
/// then the price answers. The schema is picked from the record's own columns
/// so rows written by an older form still line up with their questions.
pub fn build_detail(record: &SubmissionRecord, id: i64) -> DetailView {
    let schema = QuestionSchema::detect(record.keys());
    let mut sections = Vec::with_capacity(schema.categories.len() + 2);

    sections.push(DetailSection {
        title: "Section 1: Demographics".to_string(),
        fields: DEMOGRAPHICS
            .iter()
            .map(|(label, key)| DetailField::Value {
                label: label.to_string(),
                value: format::or_placeholder(record.text(key)),
            })
            .collect(),
    });

    for (position, category) in schema.categories.iter().enumerate() {
        let fields = category
            .questions
            .iter()
            .enumerate()
            .map(|(index, question)| DetailField::Answer {
                number: index + 1,
                question: question.to_string(),
                response: format::or_placeholder(record.rating(&category.field(index))),
            })
            .collect();
        sections.push(DetailSection {
            title: format!("Section {}: {}", position + 2, category.title),
            fields,
        });
    }

    sections.push(DetailSection {
        title: "Maximum Willingness to Pay".to_string(),
        fields: schema
            .prices
            .iter()
            .map(|price| DetailField::Value {
                label: price.label.to_string(),
                value: format::or_placeholder(record.number(price.column)),
            })
            .collect(),
    });

    let submitted = record
        .created_at()
        .map(format::format_timestamp)
        .unwrap_or_else(|| PLACEHOLDER.to_string());

    DetailView {
        title: format!("Submission #{id} Details"),
        submitted,
        sections,
    }
}

/// Where a click inside the modal overlay landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Backdrop,
    Content,
    CloseButton,
}

impl ClickTarget {
    pub fn closes_modal(self) -> bool {
        matches!(self, ClickTarget::Backdrop | ClickTarget::CloseButton)
    }
}

/// Detail modal state. Each "View" takes a ticket; only the newest ticket may
/// fill the modal, so a slow earlier request cannot overwrite a later one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModalState {
    latest: u64,
    view: Option<DetailView>,
}

impl ModalState {
    pub fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_latest(&self, ticket: u64) -> bool {
        ticket == self.latest
    }

    /// Open the modal with `view` if `ticket` is still the newest request.
    pub fn complete(&mut self, ticket: u64, view: DetailView) -> bool {
        if !self.is_latest(ticket) {
            return false;
        }
        self.view = Some(view);
        true
    }

    pub fn click(&mut self, target: ClickTarget) {
        if target.closes_modal() {
            self.close();
        }
    }

    pub fn close(&mut self) {
        self.view = None;
    }

    pub fn is_open(&self) -> bool {
        self.view.is_some()
    }

    pub fn view(&self) -> Option<&DetailView> {
        self.view.as_ref()
    }
}

#[component]
pub fn DetailModal(view: DetailView, on_click: EventHandler<ClickTarget>) -> Element {
    rsx! {
        div {
            id: "modalBackdrop",
            class: "modal-backdrop",
            onclick: move |_| on_click.call(ClickTarget::Backdrop),

            div {
                class: "modal",
                role: "dialog",
                onclick: move |evt: MouseEvent| {
                    evt.stop_propagation();
                    on_click.call(ClickTarget::Content);
                },

                div { class: "modal__header",
                    h3 { id: "modalTitle", "{view.title}" }
                    button {
                        id: "closeModal",
                        r#type: "button",
                        class: "button button--ghost modal__close",
                        aria_label: "Close",
                        onclick: move |evt: MouseEvent| {
                            evt.stop_propagation();
                            on_click.call(ClickTarget::CloseButton);
                        },
                        "×"
                    }
                }

                div { id: "modalContent", class: "modal__content",
                    p { class: "modal__submitted", strong { "Submitted: " } "{view.submitted}" }
                    for section in view.sections.iter() {
                        {render_section(section)}
                    }
                }
            }
        }
    }
}

fn render_section(section: &DetailSection) -> Element {
    rsx! {
        section { class: "modal__section", key: "{section.title}",
            h4 { "{section.title}" }
            for field in section.fields.iter() {
                {match field {
                    DetailField::Value { label, value } => rsx! {
                        div { class: "modal-field",
                            strong { "{label}: " }
                            "{value}"
                        }
                    },
                    DetailField::Answer { number, question, response } => rsx! {
                        div { class: "modal-field",
                            strong { "Q{number}. " }
                            "{question}"
                            br {}
                            em { "Response: " }
                            "{response}"
                        }
                    },
                }}
            }
        }
    }
}
