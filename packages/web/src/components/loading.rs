//! Loading components

use dioxus::prelude::*;

/// Inline loading indicator for the submit button
#[component]
pub fn LoadingDots() -> Element {
    rsx! {
        div {
            class: "inline-flex space-x-1",
            div { class: "w-2 h-2 bg-white rounded-full animate-bounce" }
            div { class: "w-2 h-2 bg-white rounded-full animate-bounce", style: "animation-delay: 0.1s" }
            div { class: "w-2 h-2 bg-white rounded-full animate-bounce", style: "animation-delay: 0.2s" }
        }
    }
}
