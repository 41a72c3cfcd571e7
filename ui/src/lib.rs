//! Shared UI crate for Mugsurvey: survey form, admin dashboard, static pages and i18n.

pub mod admin;
pub mod core;
pub mod i18n;
pub mod survey;
pub mod views;

pub mod components {
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;
}
