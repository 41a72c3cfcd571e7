use dioxus::prelude::*;

use crate::survey::SurveyForm;
use crate::t;

#[component]
pub fn Survey() -> Element {
    rsx! {
        section { class: "page page-survey",
            h1 { {t!("survey-title")} }
            p { class: "page-survey__intro", {t!("survey-intro")} }
            SurveyForm {}
        }
    }
}
