use dioxus::prelude::*;

use crate::t;

/// Initial divider position, in percent from the left edge.
pub const INITIAL_SPLIT: f64 = 50.0;

/// Parse the range input value into a divider position in `[0, 100]`.
/// Anything unparseable resets to the middle.
pub fn clamp_split(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value.clamp(0.0, 100.0),
        _ => INITIAL_SPLIT,
    }
}

/// Inline style that reveals the left `split` percent of the overlay image.
pub fn clip_style(split: f64) -> String {
    format!("clip-path: inset(0 {:.1}% 0 0);", 100.0 - split)
}

#[component]
pub fn Compare() -> Element {
    let mut split = use_signal(|| INITIAL_SPLIT);
    let overlay_style = clip_style(split());

    rsx! {
        section { class: "page page-compare",
            h1 { {t!("compare-title")} }
            p { {t!("compare-intro")} }

            div { class: "compare-cards",
                article { class: "compare-card reveal tilt",
                    h2 { {t!("compare-ai-title")} }
                    p { {t!("compare-ai-body")} }
                }
                article { class: "compare-card reveal tilt",
                    h2 { {t!("compare-human-title")} }
                    p { {t!("compare-human-body")} }
                }
            }

            div { class: "compare-slider",
                div { class: "compare-slider__frame",
                    div { class: "compare-slider__image compare-slider__image--human",
                        span { class: "compare-slider__tag", {t!("compare-human-title")} }
                    }
                    div {
                        class: "compare-slider__image compare-slider__image--ai",
                        style: "{overlay_style}",
                        span { class: "compare-slider__tag", {t!("compare-ai-title")} }
                    }
                }
                label { class: "visually-hidden", r#for: "compareRange", {t!("compare-slider-label")} }
                input {
                    id: "compareRange",
                    class: "compare-slider__range",
                    r#type: "range",
                    min: "0",
                    max: "100",
                    value: "{split()}",
                    oninput: move |evt: FormEvent| split.set(clamp_split(&evt.value())),
                }
            }

            div { class: "page-compare__actions",
                a { id: "backHome", class: "button button--ghost", href: "/", {t!("compare-back")} }
                a { id: "toSurvey", class: "button button--primary", href: "/survey", {t!("compare-to-survey")} }
            }
        }
    }
}
