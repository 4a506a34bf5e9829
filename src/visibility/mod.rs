//! Catalogue visibility
//!
//! The decision engine classifying declared operations against the
//! configured allow/deny mask lists.
//!
//! ## Decision model
//!
//! The two lists yield exactly three observable modes:
//!
//! 1. **Include** — only `visible_items` configured: an operation is
//!    advertised iff some allow mask matches it.
//! 2. **Exclude** — only `hidden_items` configured: an operation is
//!    advertised unless some deny mask matches it.
//! 3. **Mixed** — both configured: the visible set is the allow-match set
//!    minus the deny-match set. Deny only narrows, never widens.
//!
//! With neither list configured, everything is advertised.

pub mod engine;
pub mod mask;
mod pattern;

pub use engine::VisibilityEngine;
pub use mask::Mask;
