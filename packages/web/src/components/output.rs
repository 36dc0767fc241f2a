//! Read-only result panels

use dioxus::prelude::*;

/// Titled read-only panel for a result payload
#[component]
pub fn OutputPanel(title: String, content: String) -> Element {
    rsx! {
        div {
            h3 { class: "text-sm font-semibold text-gray-900 mb-2", "{title}" }
            pre {
                class: "bg-gray-50 p-3 rounded-md overflow-x-auto text-xs text-gray-900 border border-gray-200 max-h-96 overflow-y-auto",
                "{content}"
            }
        }
    }
}
