//! Offset arithmetic on editor surrounding text.

pub mod anchor;
pub mod delta;

pub use anchor::resolve_anchor;
pub use delta::{OverflowError, compute_safe_delta};
