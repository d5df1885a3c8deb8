use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

// --- Declare modules ---
mod builder;
mod catalog;
mod catalog_client;
mod config;
mod export;
mod focus;
mod ids;
mod loader;
mod model;
mod reorder;

// --- Expose public types ---
pub use builder::{sets_label, WodBuilder};
pub use catalog::{Catalog, CatalogRecord, Category, UNCATEGORIZED, UNTITLED_EXERCISE};
pub use catalog_client::{
    decode_records, decode_response, CatalogClient, CatalogError, GROUPED_EXERCISES_PATH,
};
pub use config::{
    get_config_path as get_config_path_util, load as load_config_util, parse_color,
    save as save_config_util, Config, Error as ConfigError, StandardColor, ThemeConfig,
    API_URL_ENV_VAR,
};
pub use export::format_workout;
pub use focus::{Focus, GroupSlot};
pub use ids::{GroupId, IdGenerator, ItemId, SequentialIds};
pub use loader::{CatalogLoader, LoadState, RequestTicket, LOAD_FAILED_MESSAGE};
pub use model::{
    CollectionRef, ExerciseItem, InsertAt, ItemRef, SupersetGroup, Workout, DIVIDER_TEXT,
};
pub use reorder::{moved_order, ReorderError};

/// Application-level entry point shared by the CLI and the TUI.
pub struct AppService {
    pub config: Config,
    pub config_path: PathBuf,
}

impl AppService {
    /// Initializes the application service.
    /// # Errors
    /// Returns `anyhow::Error` if the config path can't be determined or the file can't be loaded.
    pub fn initialize() -> Result<Self> {
        let config_path =
            config::get_config_path().context("Failed to determine configuration file path")?;
        let config = config::load(&config_path)
            .with_context(|| format!("Failed to load config from {config_path:?}"))?;

        Ok(Self {
            config,
            config_path,
        })
    }

    pub fn get_config_path(&self) -> &Path {
        &self.config_path
    }

    /// The catalog base URL: `WOD_API_URL` wins over the config file.
    pub fn api_base_url(&self) -> Result<String, ConfigError> {
        std::env::var(API_URL_ENV_VAR)
            .ok()
            .filter(|url| !url.trim().is_empty())
            .or_else(|| self.config.api_base_url.clone())
            .ok_or_else(|| ConfigError::ApiUrlNotSet(self.config_path.clone()))
    }

    /// Persists a new catalog base URL.
    pub fn set_api_url(&mut self, url: &str) -> Result<()> {
        self.config.api_base_url = Some(url.trim().to_string());
        self.save_config()
    }

    pub fn save_config(&self) -> Result<()> {
        config::save(&self.config_path, &self.config)
            .with_context(|| format!("Failed to save config to {:?}", self.config_path))
    }

    /// A catalog client for `url_override`, or for the configured URL.
    pub fn catalog_client(&self, url_override: Option<&str>) -> Result<CatalogClient> {
        let base_url = match url_override {
            Some(url) => url.to_string(),
            None => self.api_base_url()?,
        };
        Ok(CatalogClient::new(base_url))
    }

    /// Superset preset labels, e.g. `["2 Sets", "3 Sets", "4 Sets"]`.
    pub fn superset_preset_labels(&self) -> Vec<String> {
        self.config
            .superset_presets
            .iter()
            .map(sets_label)
            .collect()
    }
}
