//src/loader.rs
use crate::catalog::Catalog;
use crate::catalog_client::CatalogError;
use tracing::{debug, error};

/// Message shown to the user when the catalog can't be loaded.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load exercises.";

/// Handed out per fetch; only the newest ticket may resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded(Catalog),
    Failed(String),
}

/// Tracks catalog fetches so a slow response to an older request can never
/// overwrite the result of a newer one.
#[derive(Debug, Default)]
pub struct CatalogLoader {
    issued: u64,
    state: LoadState,
}

impl CatalogLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new fetch (initial load or retry).
    pub fn begin(&mut self) -> RequestTicket {
        self.issued += 1;
        self.state = LoadState::Loading;
        RequestTicket(self.issued)
    }

    /// Applies a fetch result. Returns false when the ticket is stale and the
    /// result was dropped.
    pub fn resolve(
        &mut self,
        ticket: RequestTicket,
        result: Result<Catalog, CatalogError>,
    ) -> bool {
        if ticket.0 != self.issued {
            debug!(
                "Dropping stale catalog response (request {}, latest {})",
                ticket.0, self.issued
            );
            return false;
        }
        self.state = match result {
            Ok(catalog) => LoadState::Loaded(catalog),
            Err(e) => {
                error!("Error loading exercises: {}", e);
                LoadState::Failed(LOAD_FAILED_MESSAGE.to_string())
            }
        };
        true
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, LoadState::Loading)
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        match &self.state {
            LoadState::Loaded(catalog) => Some(catalog),
            _ => None,
        }
    }
}
