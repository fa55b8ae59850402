pub mod range;
pub mod split;
pub mod text_tool;

pub use range::CharRange;
pub use split::split_string;
pub use text_tool::{TextTool, utf8_string_length, utf8_string_substr};
