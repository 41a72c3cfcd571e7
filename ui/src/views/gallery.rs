use dioxus::prelude::*;

use crate::t;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Ai,
    Human,
}

impl Origin {
    fn modifier(self) -> &'static str {
        match self {
            Origin::Ai => "gallery-card--ai",
            Origin::Human => "gallery-card--human",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Design {
    pub name: &'static str,
    pub city: &'static str,
    pub origin: Origin,
}

pub const DESIGNS: &[Design] = &[
    Design { name: "Charles Bridge at Dawn", city: "Prague", origin: Origin::Ai },
    Design { name: "Old Town Rooftops", city: "Prague", origin: Origin::Human },
    Design { name: "Astronomical Clock", city: "Prague", origin: Origin::Ai },
    Design { name: "Vltava Linework", city: "Prague", origin: Origin::Human },
    Design { name: "Midtown Skyline", city: "New York", origin: Origin::Ai },
    Design { name: "Brooklyn Bridge Sketch", city: "New York", origin: Origin::Human },
    Design { name: "Subway Map Pop", city: "New York", origin: Origin::Ai },
    Design { name: "Central Park Autumn", city: "New York", origin: Origin::Human },
];

pub fn designs_for(city: &str) -> impl Iterator<Item = &'static Design> + '_ {
    DESIGNS.iter().filter(move |design| design.city == city)
}

#[component]
pub fn Gallery() -> Element {
    let ai_label = t!("gallery-origin-ai");
    let human_label = t!("gallery-origin-human");

    rsx! {
        section { class: "page page-gallery",
            h1 { {t!("gallery-title")} }
            p { {t!("gallery-intro")} }

            for city in ["Prague", "New York"] {
                div { class: "gallery-city", key: "{city}",
                    h2 { "{city}" }
                    div { class: "gallery-grid",
                        for design in designs_for(city) {
                            {render_card(design, &ai_label, &human_label)}
                        }
                    }
                }
            }

            p { class: "page-gallery__cta",
                a { id: "ctaCompare2", class: "button button--primary", href: "/compare", {t!("home-cta-compare")} }
            }
        }
    }
}

fn render_card(design: &Design, ai_label: &str, human_label: &str) -> Element {
    let class = format!("gallery-card reveal tilt {}", design.origin.modifier());
    let origin = match design.origin {
        Origin::Ai => ai_label,
        Origin::Human => human_label,
    };

    rsx! {
        article { class: "{class}", key: "{design.name}",
            div { class: "gallery-card__art" }
            h3 { "{design.name}" }
            span { class: "gallery-card__origin", "{origin}" }
        }
    }
}
