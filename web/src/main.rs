use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::views::{Admin, Compare, Gallery, Home, Survey};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Home {},
    #[route("/compare")]
    Compare {},
    #[route("/gallery")]
    Gallery {},
    #[route("/survey")]
    Survey {},
    #[route("/admin")]
    Admin {},
}

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn nav_link(to: Route, label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        active_class: "active",
        to,
        "{label}"
    })
}

fn nav_home(label: &str) -> Element {
    nav_link(Route::Home {}, label)
}
fn nav_compare(label: &str) -> Element {
    nav_link(Route::Compare {}, label)
}
fn nav_gallery(label: &str) -> Element {
    nav_link(Route::Gallery {}, label)
}
fn nav_survey(label: &str) -> Element {
    nav_link(Route::Survey {}, label)
}
fn nav_admin(label: &str) -> Element {
    nav_link(Route::Admin {}, label)
}

fn main() {
    ui::i18n::init();
    register_nav(NavBuilder {
        home: nav_home,
        compare: nav_compare,
        gallery: nav_gallery,
        survey: nav_survey,
        admin: nav_admin,
    });
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // The navbar writes the selected language here.
    let lang_code = use_signal(|| ui::i18n::FALLBACK_LANGUAGE.to_string());
    use_context_provider(|| lang_code);

    rsx! {
        document::Title { "Mugsurvey" }
        document::Style { "{THEME_CSS}" }

        // Remount the routed tree when the language changes.
        div { key: "{lang_code()}",
            Router::<Route> {}
        }
    }
}

#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar {}
        Outlet::<Route> {}
    }
}
