use dioxus::prelude::*;

use crate::t;

#[component]
pub fn Home() -> Element {
    // Re-render when the navbar switches language.
    let _lang = try_use_context::<Signal<String>>().map(|code| code());

    rsx! {
        section { class: "page page-home",
            div { class: "page-home__hero reveal",
                h1 { {t!("home-title")} }
                p { class: "page-home__tagline", {t!("home-tagline-short")} }
                p { {t!("home-intro")} }
                div { class: "page-home__actions",
                    a { id: "startCompare", class: "button button--primary", href: "/compare",
                        {t!("home-cta-compare")}
                    }
                    a { id: "ctaGallery", class: "button button--ghost", href: "/gallery",
                        {t!("home-cta-gallery")}
                    }
                }
            }

            ul { class: "page-home__features",
                li { class: "reveal tilt", {t!("home-feature-compare")} }
                li { class: "reveal tilt", {t!("home-feature-survey")} }
                li { class: "reveal tilt", {t!("home-feature-results")} }
            }

            p { class: "page-home__cta",
                {t!("home-cta")}
                " "
                a { href: "/survey", {t!("home-cta-survey")} }
            }
        }
    }
}
