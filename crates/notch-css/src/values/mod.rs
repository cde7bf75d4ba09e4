//! Style value types and parsing
//!
//! - [CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/)
//! - [CSS Color Level 4](https://www.w3.org/TR/css-color-4/)

mod color;
mod length;

pub use color::ColorValue;
pub use length::{LengthUnit, LengthValue, parse_length, sanitize_tokens};
