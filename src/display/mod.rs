//! Terminal display module
//!
//! Renders style markup with automatic TTY detection.

pub mod markup;
mod terminal;

pub use markup::render;
pub use terminal::{should_use_colors, Terminal};
