//! lumos-session
//!
//! The single mutable owner of a [`DesignConfiguration`] for the lifetime
//! of an editing session, plus the font-loading collaborator it drives.
//!
//! [`DesignConfiguration`]: lumos_core::DesignConfiguration

pub mod error;
pub mod font;
pub mod links;
pub mod remote;
pub mod store;

pub use error::SessionError;
pub use font::{font_stylesheet_url, FontHandle, FontLoader, FontResource, DEFAULT_FONT_CSS_BASE};
pub use links::LinkRegistry;
pub use remote::RemoteFontLoader;
pub use store::ConfigStore;
