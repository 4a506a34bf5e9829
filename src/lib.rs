//! Catalogue visibility for declared API operations
//!
//! apimask decides, per declared operation of a service interface
//! (a group + operation pair, e.g. controller + action), whether that
//! operation is advertised in a generated interface catalogue such as an
//! API documentation UI. It classifies operations purely by name and
//! never affects whether an operation can actually be invoked.
//!
//! ## Decision model
//!
//! ```text
//! visible_items (allow) → hidden_items (deny, narrows only)
//! ```
//!
//! - neither list configured: everything is advertised
//! - only `visible_items`: advertised iff some mask matches
//! - only `hidden_items`: advertised unless some mask matches
//! - both: the hidden list removes entries from the visible set
//!
//! Masks take `Group[.Operation]` form, split at the first `.`, and
//! support `?` (one character) and `*` (any run) wildcards matched
//! case-insensitively against the whole name.
//!
//! ## Example
//!
//! ```
//! use apimask::visibility::VisibilityEngine;
//!
//! let engine = VisibilityEngine::new(
//!     ["User.*", "WeatherForecast.Get*"],
//!     Vec::<String>::new(),
//! );
//!
//! assert!(engine.is_visible("User", Some("SetUser")).unwrap());
//! assert!(!engine
//!     .is_visible("WeatherForecast", Some("DeleteWeatherForecast"))
//!     .unwrap());
//! ```
//!
//! ## Example Configuration
//!
//! ```toml
//! [catalogue]
//! visible_items = ["User.*", "WeatherForecast.Get*"]
//! hidden_items = ["WeatherForecast.GetLegacy*"]
//! ```

pub mod catalogue;
pub mod config;
pub mod error;
pub mod visibility;

// Re-export main types
pub use catalogue::{Catalogue, CatalogueEntry, OperationDescriptor};
pub use config::{AppConfig, load_config};
pub use error::{AppError, Result, VisibilityError};
pub use visibility::{Mask, VisibilityEngine};
