use api::{Category, Rating};
use dioxus::prelude::*;

/// One Likert question as rendered on the form.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionBlock {
    /// One-based position within the category.
    pub number: usize,
    /// Shared input name, `prefix + number`.
    pub name: String,
    pub text: &'static str,
    pub options: Vec<RatingOption>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RatingOption {
    pub value: u8,
    pub label: &'static str,
    pub input_id: String,
}

/// Build one block per question, each offering the five scale points.
pub fn render_questions(category: &Category) -> Vec<QuestionBlock> {
    category
        .questions
        .iter()
        .enumerate()
        .map(|(index, text)| {
            let name = category.field(index);
            let options = Rating::all()
                .map(|rating| RatingOption {
                    value: rating.value(),
                    label: rating.label(),
                    input_id: format!("{name}-{}", rating.value()),
                })
                .collect();
            QuestionBlock {
                number: index + 1,
                name,
                text,
                options,
            }
        })
        .collect()
}

#[component]
pub fn QuestionGroup(category: Category, section: usize) -> Element {
    let blocks = render_questions(&category);

    rsx! {
        fieldset { class: "survey-section", id: "{category.key}Container",
            legend { class: "survey-section__title", "Section {section}: {category.title}" }
            p { class: "survey-section__hint",
                "1 = Strongly Disagree · 5 = Strongly Agree"
            }
            for block in blocks.into_iter() {
                {render_block(block)}
            }
        }
    }
}

fn render_block(block: QuestionBlock) -> Element {
    rsx! {
        div { class: "survey-question", key: "{block.name}",
            p { class: "survey-question__text", "{block.number}. {block.text}" }
            div { class: "rating-scale", role: "radiogroup",
                for option in block.options.iter() {
                    label {
                        class: "rating-scale__option",
                        r#for: "{option.input_id}",
                        title: "{option.label}",
                        input {
                            id: "{option.input_id}",
                            r#type: "radio",
                            name: "{block.name}",
                            value: "{option.value}",
                            required: true,
                        }
                        span { class: "rating-scale__value", "{option.value}" }
                    }
                }
            }
        }
    }
}
