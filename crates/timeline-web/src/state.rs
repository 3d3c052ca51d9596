//! Shared application state.
//!
//! Everything in [`AppState`] is built once at startup and only read
//! afterwards, so handlers share it through an `Arc` without locking.

use timeline_chat::ChatGateway;
use timeline_core::{Catalog, history_content, map_overlays};
use timeline_types::{HistoryContent, MapOverlay};
use tracing::debug;

use crate::error::SiteError;
use crate::templates::Templates;

/// Shared state for all handlers.
pub struct AppState {
    /// The validated map event catalog.
    pub catalog: Catalog,
    /// Content for the history page.
    pub history: HistoryContent,
    /// Static map layers.
    pub overlays: Vec<MapOverlay>,
    /// The configured chat backend.
    pub gateway: ChatGateway,
    /// Instruction text sent with questions from the history page.
    pub system_preamble: Option<String>,
    /// Compiled page templates.
    pub templates: Templates,
}

impl AppState {
    /// Assemble state around `catalog` and `gateway`. History content and
    /// overlays are the built-in ones.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Template`] if the page templates fail to compile.
    pub fn new(
        catalog: Catalog,
        gateway: ChatGateway,
        system_preamble: Option<String>,
    ) -> Result<Self, SiteError> {
        let templates = Templates::new()?;
        debug!(templates = ?templates.names().collect::<Vec<_>>(), "templates compiled");
        Ok(Self {
            catalog,
            history: history_content(),
            overlays: map_overlays(),
            gateway,
            system_preamble,
            templates,
        })
    }

    /// The preamble as a borrowed string, if one is configured.
    pub fn preamble(&self) -> Option<&str> {
        self.system_preamble.as_deref()
    }
}
