use dioxus::prelude::*;

use crate::admin::AdminDashboard;

#[component]
pub fn Admin() -> Element {
    rsx! {
        AdminDashboard {}
    }
}
