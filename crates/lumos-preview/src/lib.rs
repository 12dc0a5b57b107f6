//! lumos-preview
//!
//! Live preview of a design configuration as a plain visual tree: one
//! panel per theme, example cards, an optional 12-column grid overlay, and
//! a full preview page that can be serialized to HTML.
//!
//! Every function here is pure. Nothing is cached between calls; each call
//! builds a fresh, fully owned tree from the configuration it is given.

pub mod card;
pub mod grid;
pub mod html;
pub mod page;
pub mod panel;
pub mod tree;

pub use card::render_card;
pub use grid::{grid_overlay, GRID_COLUMNS};
pub use html::{to_html, to_html_document};
pub use page::{render_page, PREVIEW_FILENAME, PREVIEW_MIME};
pub use panel::render;
pub use tree::{Element, Node, Style};
