//! ParseBot - Dioxus Fullstack Web Application
//!
//! A single-page form: enter a website URL and an extraction prompt, and the
//! backend returns the JSON schema it derived plus the extracted data.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! dx serve --features web,server
//! ```
//!
//! Production build:
//! ```bash
//! dx build --release --features web,server
//! ```

#![allow(non_snake_case)]

mod app;
mod components;
mod config;
mod pages;
mod state;

fn main() {
    // Server-side environment from .env, if present
    #[cfg(feature = "server")]
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt::init();

    // Launch the Dioxus app
    // In fullstack mode, this handles both server and client
    dioxus::launch(app::App);
}
