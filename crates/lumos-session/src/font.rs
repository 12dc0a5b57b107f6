use std::fmt;
use std::sync::Arc;

use lumos_core::FontFamily;

use crate::error::SessionError;

/// Default font stylesheet service.
pub const DEFAULT_FONT_CSS_BASE: &str = "https://fonts.googleapis.com/css";

/// Stylesheet URL that makes `family` available: `<base>?family=Times+New+Roman`.
pub fn font_stylesheet_url(base: &str, family: FontFamily) -> String {
    format!("{base}?family={}", family.query_name())
}

/// Opaque id for one loaded font resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FontHandle(pub u64);

impl fmt::Display for FontHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font#{}", self.0)
    }
}

/// Makes font families available for rendering.
///
/// `release` must be idempotent: releasing an unknown or already released
/// handle is a no-op.
pub trait FontLoader: Send + Sync {
    fn acquire(&self, family: FontFamily) -> Result<FontHandle, SessionError>;

    fn release(&self, handle: FontHandle);

    /// Stylesheet links currently held, for documents that want to include
    /// them.
    fn loaded_stylesheets(&self) -> Vec<String> {
        Vec::new()
    }
}

/// A loaded font, released when dropped.
pub struct FontResource {
    family: FontFamily,
    handle: FontHandle,
    loader: Arc<dyn FontLoader>,
}

impl FontResource {
    pub fn acquire(loader: Arc<dyn FontLoader>, family: FontFamily) -> Result<Self, SessionError> {
        let handle = loader.acquire(family)?;
        tracing::debug!(%family, %handle, "font acquired");
        Ok(Self {
            family,
            handle,
            loader,
        })
    }

    pub fn family(&self) -> FontFamily {
        self.family
    }

    pub fn handle(&self) -> FontHandle {
        self.handle
    }
}

impl Drop for FontResource {
    fn drop(&mut self) {
        self.loader.release(self.handle);
        tracing::debug!(family = %self.family, handle = %self.handle, "font released");
    }
}

impl fmt::Debug for FontResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontResource")
            .field("family", &self.family)
            .field("handle", &self.handle)
            .finish_non_exhaustive()
    }
}
