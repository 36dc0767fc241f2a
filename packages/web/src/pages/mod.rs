//! Page components

mod extract;

pub use extract::*;
