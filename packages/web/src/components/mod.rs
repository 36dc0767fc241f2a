//! Reusable UI components

mod loading;
mod output;

pub use loading::*;
pub use output::*;
