use dioxus::logger::tracing::info;
use dioxus::prelude::*;

use crate::core::{client::ApiClient, platform};

/// Sends the browser to the CSV export endpoint; the server's
/// `Content-Disposition` header turns that into a download.
#[component]
pub fn ExportButton() -> Element {
    let client = use_context::<ApiClient>();

    rsx! {
        button {
            id: "exportCsv",
            r#type: "button",
            class: "button button--primary",
            onclick: move |_| {
                let url = client.export_url();
                info!("Exporting responses from {url}");
                platform::navigate(&url);
            },
            "Export CSV"
        }
    }
}
