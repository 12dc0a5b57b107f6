//! lumos-export
//!
//! Stylesheet generation from a design configuration, and delivery of the
//! generated file through a pluggable collaborator.

pub mod delivery;
pub mod error;
pub mod render;
pub mod stylesheet;

pub use delivery::{DirectoryDelivery, Download, FileDelivery, MemoryDelivery};
pub use error::ExportError;
pub use stylesheet::{export_stylesheet, generate, STYLESHEET_FILENAME, STYLESHEET_MIME};
