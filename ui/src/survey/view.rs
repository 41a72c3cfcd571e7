use api::QuestionSchema;
use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;

use crate::core::{client::ApiClient, platform};
use crate::t;

use super::{build_response, ChoiceField, QuestionGroup, CHOICE_FIELDS, OTHER_COUNTRY};

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitStatus {
    Editing,
    Sending,
    Submitted,
    Failed(String),
}

#[component]
pub fn SurveyForm() -> Element {
    let schema = QuestionSchema::current();
    let client = use_hook(ApiClient::default);
    let mut status = use_signal(|| SubmitStatus::Editing);
    let country = use_signal(String::new);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if status() == SubmitStatus::Sending {
            return;
        }

        let entries = evt
            .values()
            .into_iter()
            .map(|(name, value)| (name, value.as_value()));

        let response = match build_response(entries, schema) {
            Ok(response) => response,
            Err(err) => {
                let message = err.to_string();
                platform::alert(&message);
                status.set(SubmitStatus::Failed(message));
                return;
            }
        };

        status.set(SubmitStatus::Sending);
        let client = client.clone();
        platform::spawn_future(async move {
            match client.submit_survey(&response).await {
                Ok(()) => {
                    info!("Survey submitted");
                    status.set(SubmitStatus::Submitted);
                }
                Err(err) => {
                    warn!("Survey submission failed: {err}");
                    let message = err.submission_alert();
                    platform::alert(&message);
                    status.set(SubmitStatus::Failed(message));
                }
            }
        });
    };

    let current = status();
    if current == SubmitStatus::Submitted {
        return rsx! {
            div { id: "thankYou", class: "thank-you thank-you--active",
                h2 { {t!("survey-thanks-title")} }
                p { {t!("survey-thanks-body")} }
                div { class: "thank-you__actions",
                    a { id: "goHome", class: "button button--primary", href: "/", {t!("survey-go-home")} }
                }
            }
        };
    }

    let sending = current == SubmitStatus::Sending;
    let failure = match &current {
        SubmitStatus::Failed(message) => Some(message.clone()),
        _ => None,
    };
    let show_other = country() == OTHER_COUNTRY;

    rsx! {
        form { id: "surveyForm", class: "survey-form", onsubmit: on_submit,
            fieldset { class: "survey-section",
                legend { class: "survey-section__title", "Section 1: Demographics" }
                div { class: "survey-field",
                    label { r#for: "age", "Age" }
                    input {
                        id: "age",
                        name: "age",
                        r#type: "number",
                        min: "16",
                        max: "100",
                        required: true,
                    }
                }
                for field in CHOICE_FIELDS.iter() {
                    {render_choice(*field, country)}
                }
                if show_other {
                    div { class: "survey-field",
                        label { r#for: "countryOther", "Please specify your country" }
                        input { id: "countryOther", name: "countryOther", r#type: "text" }
                    }
                }
            }

            for (index, category) in schema.categories.iter().enumerate() {
                QuestionGroup { key: "{category.key}", category: *category, section: index + 2 }
            }

            fieldset { class: "survey-section",
                legend { class: "survey-section__title", "Maximum willingness to pay (EUR)" }
                for price in schema.prices.iter() {
                    div { class: "survey-field",
                        label { r#for: "{price.wire}", "{price.label}" }
                        input {
                            id: "{price.wire}",
                            name: "{price.wire}",
                            r#type: "number",
                            min: "0",
                            step: "0.01",
                            required: true,
                        }
                    }
                }
            }

            if let Some(message) = failure {
                p { class: "survey-form__error", "⚠️ {message}" }
            }

            div { class: "survey-form__actions",
                a { id: "backCompare", class: "button button--ghost", href: "/compare",
                    {t!("survey-back-compare")}
                }
                button {
                    r#type: "submit",
                    class: "button button--primary",
                    disabled: sending,
                    if sending { {t!("survey-sending")} } else { {t!("survey-submit")} }
                }
            }
        }
    }
}

fn render_choice(field: ChoiceField, mut country: Signal<String>) -> Element {
    let tracks_country = field.name == "country";

    rsx! {
        div { class: "survey-field", key: "{field.name}",
            label { r#for: "{field.name}", "{field.label}" }
            select {
                id: "{field.name}",
                name: "{field.name}",
                required: true,
                oninput: move |evt: FormEvent| {
                    if tracks_country {
                        country.set(evt.value());
                    }
                },
                option { value: "", disabled: true, selected: true, "Select…" }
                for choice in field.options.iter() {
                    option { value: "{choice}", "{choice}" }
                }
            }
        }
    }
}
