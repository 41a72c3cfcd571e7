use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;
use once_cell::sync::OnceCell;

use crate::i18n;
use crate::t;

const NAVBAR_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Link constructors supplied by the platform crate, which owns the `Route`
/// enum. Each receives the localized label and returns a link containing it.
pub struct NavBuilder {
    pub home: fn(label: &str) -> Element,
    pub compare: fn(label: &str) -> Element,
    pub gallery: fn(label: &str) -> Element,
    pub survey: fn(label: &str) -> Element,
    pub admin: fn(label: &str) -> Element,
}

impl NavBuilder {
    fn links(&self) -> [Element; 5] {
        [
            (self.home)(&t!("nav-home")),
            (self.compare)(&t!("nav-compare")),
            (self.gallery)(&t!("nav-gallery")),
            (self.survey)(&t!("nav-survey")),
            (self.admin)(&t!("nav-admin")),
        ]
    }
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

/// Register once at startup; later calls are ignored.
pub fn register_nav(builder: NavBuilder) {
    if NAV_BUILDER.set(builder).is_err() {
        warn!("Navigation already registered");
    }
}

/// Site header. Without a registered [`NavBuilder`] the `children` are used as
/// the link list.
#[component]
pub fn AppNavbar(children: Element) -> Element {
    i18n::init();

    // Re-render on language switches made anywhere in the app.
    let lang_code = try_use_context::<Signal<String>>();
    let active_lang = lang_code.map(|code| code()).unwrap_or_default();

    let links = NAV_BUILDER.get().map(NavBuilder::links);

    rsx! {
        document::Style { "{NAVBAR_CSS}" }

        header { id: "navbar", class: "navbar", "data-lang": "{active_lang}",
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-link",
                        span { class: "navbar__brand-spark", aria_hidden: "true" }
                        span { class: "navbar__brand-mark", "Mugsurvey" }
                    }
                    span { class: "navbar__brand-subtitle", {t!("tagline")} }
                }

                nav { class: "navbar__links",
                    if let Some(links) = links {
                        for link in links {
                            {link}
                        }
                    } else {
                        {children}
                    }
                }

                LocaleSwitcher { lang_code }
            }
        }
    }
}

/// Hidden when only one language is embedded.
#[component]
fn LocaleSwitcher(#[props(!optional)] lang_code: Option<Signal<String>>) -> Element {
    let langs = use_hook(i18n::available_languages);
    let mut selected = use_signal(|| i18n::FALLBACK_LANGUAGE.to_string());

    if langs.len() < 2 {
        return rsx! {};
    }

    let on_change = move |evt: FormEvent| {
        let tag = evt.value();
        match i18n::set_language(&tag) {
            Ok(()) => {
                info!("Language switched to {tag}");
                selected.set(tag.clone());
                if let Some(mut code) = lang_code {
                    code.set(tag);
                }
            }
            Err(err) => warn!("Could not switch language to {tag}: {err}"),
        }
    };

    rsx! {
        div { class: "navbar__locale",
            label { class: "visually-hidden", r#for: "locale-select", {t!("nav-language-label")} }
            select { id: "locale-select", value: "{selected}", oninput: on_change,
                for code in langs.iter() {
                    option { key: "{code}", value: "{code}", "{code}" }
                }
            }
        }
    }
}
