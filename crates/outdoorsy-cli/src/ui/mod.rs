//! Terminal styling: color mode and prefixed messages

pub mod color;
pub mod style;

pub use color::ColorMode;
pub use style::{MessageType, Style};
