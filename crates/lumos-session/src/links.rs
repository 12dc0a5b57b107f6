use std::collections::BTreeMap;
use std::sync::Mutex;

use lumos_core::FontFamily;

use crate::error::SessionError;
use crate::font::{font_stylesheet_url, FontHandle, FontLoader, DEFAULT_FONT_CSS_BASE};

/// The set of font stylesheet links a document head carries.
///
/// Acquiring adds a link, releasing removes it. Nothing is fetched; hosts
/// that render the links let the browser do that.
#[derive(Debug)]
pub struct LinkRegistry {
    base: String,
    inner: Mutex<Registry>,
}

#[derive(Debug, Default)]
struct Registry {
    next_id: u64,
    links: BTreeMap<FontHandle, String>,
    acquired: u64,
    released: u64,
}

impl LinkRegistry {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            inner: Mutex::new(Registry::default()),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Links currently held, in acquisition order.
    pub fn links(&self) -> Vec<String> {
        self.with(|r| r.links.values().cloned().collect())
    }

    /// Number of links currently held.
    pub fn held(&self) -> usize {
        self.with(|r| r.links.len())
    }

    /// Total successful acquisitions.
    pub fn acquired(&self) -> u64 {
        self.with(|r| r.acquired)
    }

    /// Total releases that removed a held link.
    pub fn released(&self) -> u64 {
        self.with(|r| r.released)
    }

    fn with<T>(&self, f: impl FnOnce(&mut Registry) -> T) -> T {
        let mut guard = self
            .inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut guard)
    }
}

impl Default for LinkRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_FONT_CSS_BASE)
    }
}

impl FontLoader for LinkRegistry {
    fn acquire(&self, family: FontFamily) -> Result<FontHandle, SessionError> {
        let url = font_stylesheet_url(&self.base, family);
        Ok(self.with(|r| {
            r.next_id += 1;
            let handle = FontHandle(r.next_id);
            r.links.insert(handle, url);
            r.acquired += 1;
            handle
        }))
    }

    fn release(&self, handle: FontHandle) {
        self.with(|r| {
            if r.links.remove(&handle).is_some() {
                r.released += 1;
            }
        });
    }

    fn loaded_stylesheets(&self) -> Vec<String> {
        self.links()
    }
}
