//! lumos-core
//!
//! Pure domain types for the Lumos style guide generator: the design
//! configuration record, its field catalog, the font catalog, and the
//! recommended slider ranges. No I/O; this is the shared vocabulary the
//! export, preview, and session crates consume.

pub mod error;
pub mod format;
pub mod models;
pub mod range;

pub use error::CoreError;
pub use models::configuration::DesignConfiguration;
pub use models::field::{Field, FieldGroup, FieldKind, FieldValue};
pub use models::font::FontFamily;
pub use models::scale::TypeScale;
pub use models::theme::{ThemeColors, ThemeMode};
pub use range::RecommendedRange;
