//! Shared application state for the card server.

use std::sync::Arc;

use anyhow::Result;
use kinga::io::site::SiteConfig;
use kinga::render::PageRenderer;

/// Read-only state shared by all request handlers.
///
/// Nothing here changes after startup; each request builds its own card.
#[derive(Debug, Clone)]
pub struct AppState {
    pub renderer: Arc<PageRenderer>,
    pub site: Arc<SiteConfig>,
}

impl AppState {
    pub fn new(site: SiteConfig) -> Result<Self> {
        Ok(Self {
            renderer: Arc::new(PageRenderer::new()?),
            site: Arc::new(site),
        })
    }
}
