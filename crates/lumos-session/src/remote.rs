use std::sync::Arc;
use std::thread;

use lumos_core::FontFamily;

use crate::error::SessionError;
use crate::font::{font_stylesheet_url, FontHandle, FontLoader};
use crate::links::LinkRegistry;

/// A [`LinkRegistry`] that also warms the font stylesheet over HTTP.
///
/// The fetch runs on a detached thread and nobody waits for it; failures are
/// logged and otherwise ignored.
#[derive(Debug, Clone)]
pub struct RemoteFontLoader {
    links: Arc<LinkRegistry>,
}

impl RemoteFontLoader {
    pub fn new(links: Arc<LinkRegistry>) -> Self {
        Self { links }
    }

    pub fn links(&self) -> &LinkRegistry {
        &self.links
    }
}

impl FontLoader for RemoteFontLoader {
    fn acquire(&self, family: FontFamily) -> Result<FontHandle, SessionError> {
        let handle = self.links.acquire(family)?;
        let url = font_stylesheet_url(self.links.base(), family);

        let spawned = thread::Builder::new()
            .name("font-prefetch".to_string())
            .spawn(move || match ureq::get(url.as_str()).call() {
                Ok(resp) => tracing::debug!(%url, status = %resp.status(), "font stylesheet fetched"),
                Err(e) => tracing::warn!(%url, error = %e, "font stylesheet fetch failed"),
            });

        if let Err(e) = spawned {
            tracing::warn!(%family, error = %e, "could not start font prefetch");
        }
        Ok(handle)
    }

    fn release(&self, handle: FontHandle) {
        self.links.release(handle);
    }

    fn loaded_stylesheets(&self) -> Vec<String> {
        self.links.links()
    }
}
