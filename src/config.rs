use serde::{Deserialize, Serialize};
use std::path::Path;
use url::Url;

use crate::error::{Result, SolrgateError};
use crate::query::DEFAULT_SUGGEST_ROWS;

pub const DEFAULT_SOLR_URL: &str = "http://localhost:8983/solr";
pub const DEFAULT_COLLECTION: &str = "kaifsCollection";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Where the search backend lives and how to talk to it.
///
/// Built once at startup and handed to [`crate::solr::SolrClient::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolrConfig {
    /// Solr root, e.g. `http://localhost:8983/solr`.
    pub base_url: String,
    pub collection: String,
    pub timeout_secs: u64,
    pub suggest_rows: u32,
}

impl Default for SolrConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SOLR_URL.to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            suggest_rows: DEFAULT_SUGGEST_ROWS,
        }
    }
}

impl SolrConfig {
    pub fn new(base_url: impl Into<String>, collection: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            collection: collection.into(),
            ..Default::default()
        }
    }

    /// Load from a JSON file. Keys missing from the file keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SolrgateError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        let config: SolrConfig = serde_json::from_str(&content).map_err(|e| {
            SolrgateError::Config(format!("failed to parse {}: {}", path.display(), e))
        })?;
        tracing::info!(
            "Loaded backend config from {}: base_url={}, collection={}",
            path.display(),
            config.base_url,
            config.collection
        );
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.base_url)?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(SolrgateError::Config(format!(
                "base_url must be http or https, got {}",
                url.scheme()
            )));
        }
        if self.collection.trim().is_empty() {
            return Err(SolrgateError::Config("collection cannot be empty".into()));
        }
        if self.collection.contains('/') {
            return Err(SolrgateError::Config(format!(
                "collection '{}' must not contain '/'",
                self.collection
            )));
        }
        if self.timeout_secs == 0 {
            return Err(SolrgateError::Config("timeout_secs must be > 0".into()));
        }
        Ok(())
    }

    /// `<base_url>/<collection>/select`
    pub fn select_url(&self) -> Result<Url> {
        self.collection_url(&["select"])
    }

    /// `<base_url>/<collection>/admin/ping`
    pub fn ping_url(&self) -> Result<Url> {
        self.collection_url(&["admin", "ping"])
    }

    fn collection_url(&self, tail: &[&str]) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)?;
        url.path_segments_mut()
            .map_err(|_| {
                SolrgateError::Config(format!("base_url '{}' cannot be a base", self.base_url))
            })?
            .pop_if_empty()
            .push(&self.collection)
            .extend(tail);
        Ok(url)
    }
}
