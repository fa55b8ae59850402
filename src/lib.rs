//! Text and key-event helpers for a Japanese input method.
//!
//! All positions are character offsets into UTF-8 text, never byte offsets.
//!
//! ```
//! use kana_util::surrounding::{compute_safe_delta, resolve_anchor};
//!
//! // the selection "world" follows the cursor, so the anchor lies after it
//! assert_eq!(resolve_anchor("helloworld", "world", 5), Some(10));
//! assert_eq!(compute_safe_delta(3, 10), Ok(-7));
//! ```

pub mod command;
pub mod kana;
pub mod key;
pub mod options;
pub mod process;
pub mod surrounding;
pub mod text;
