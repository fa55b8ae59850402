//! Full-width/half-width and hiragana/katakana conversion.

pub mod convert;
pub mod tables;

pub use convert::{convert_to_half, convert_to_katakana, convert_to_wide};
