//src/catalog_client.rs
use crate::catalog::{Catalog, CatalogRecord};
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, error, info};

pub const GROUPED_EXERCISES_PATH: &str = "/api/grouped-exercises";
const DEFAULT_SERVER_ERROR: &str = "Failed to fetch grouped exercises";

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to reach catalog server: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Catalog server returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Malformed catalog response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("{0}")]
    Server(String),
}

// Wire shape of GET /api/grouped-exercises
#[derive(Deserialize, Debug)]
struct GroupedExercisesResponse {
    success: bool,
    #[serde(default)]
    grouped: Option<Map<String, Value>>,
    #[serde(default)]
    error: Option<String>,
}

/// Decodes an ungrouped export (`[{"name": .., "category": ..}, ..]`) and groups it.
pub fn decode_records(body: &[u8]) -> Result<Catalog, CatalogError> {
    let records: Vec<CatalogRecord> = serde_json::from_slice(body)?;
    debug!("Grouping {} catalog records", records.len());
    Ok(Catalog::from_records(records))
}

/// Decodes a response body into a catalog, honouring the `success` flag.
pub fn decode_response(body: &[u8]) -> Result<Catalog, CatalogError> {
    let response: GroupedExercisesResponse = serde_json::from_slice(body)?;
    if !response.success {
        return Err(CatalogError::Server(
            response
                .error
                .unwrap_or_else(|| DEFAULT_SERVER_ERROR.to_string()),
        ));
    }
    Ok(response
        .grouped
        .map(|grouped| Catalog::from_json_map(&grouped))
        .unwrap_or_default())
}

#[derive(Debug, Clone)]
pub struct CatalogClient {
    http_client: Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            http_client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, GROUPED_EXERCISES_PATH)
    }

    /// Fetches the grouped exercise catalog.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` on transport failure, a non-success HTTP status,
    /// an undecodable body, or `success: false` from the server.
    pub async fn fetch(&self) -> Result<Catalog, CatalogError> {
        let url = self.endpoint();
        info!("Fetching exercises from {}", url);

        let response = self.http_client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error body".to_string());
            error!("Catalog request failed with status {}: {}", status, body);
            return Err(CatalogError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.bytes().await?;
        let catalog = decode_response(&body)?;
        debug!(
            "Catalog received: {} categories, {} exercises",
            catalog.categories().len(),
            catalog.exercise_count()
        );
        Ok(catalog)
    }
}
