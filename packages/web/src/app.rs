//! Root application component

use dioxus::prelude::*;

use crate::pages::Extract;

/// Root application component
#[component]
pub fn App() -> Element {
    rsx! {
        // Global styles
        document::Stylesheet { href: asset!("/assets/tailwind.css") }

        // Single page, no routing
        Extract {}
    }
}
