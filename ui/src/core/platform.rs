//! Platform glue: background futures, blocking alerts, navigation and the API origin.

use std::future::Future;

use dioxus::logger::tracing::warn;

/// Used when no browser origin is available.
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000";

pub fn spawn_future<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    dioxus::prelude::spawn(future);
}

/// Origin the REST endpoints are served from.
pub fn api_base() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|window| window.location().origin().ok())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        std::env::var("MUGSURVEY_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string())
    }
}

/// Blocking user-facing alert.
pub fn alert(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if window.alert_with_message(message).is_ok() {
                return;
            }
        }
    }

    warn!("{message}");
}

/// Full-page navigation, used for file downloads served by the backend.
pub fn navigate(url: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if window.location().set_href(url).is_ok() {
                return;
            }
        }
    }

    warn!("Navigation unavailable on this platform; open {url} manually");
}
