use std::time::Duration;

use serde_json::Value;
use url::Url;

use crate::config::SolrConfig;
use crate::error::{Result, SolrgateError};
use crate::facets::facet_values_from_response;
use crate::query::{
    build_facet_query, build_search_select, build_suggest_query_with_rows, SelectQuery, Suggest,
};
use crate::suggest::suggestions_from_response;
use crate::types::{FacetResult, SearchRequest};

/// HTTP client for one Solr collection.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct SolrClient {
    http_client: reqwest::Client,
    select_url: Url,
    ping_url: Url,
    suggest_rows: u32,
}

impl SolrClient {
    pub fn new(config: &SolrConfig) -> Result<Self> {
        config.validate()?;
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SolrgateError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http_client,
            select_url: config.select_url()?,
            ping_url: config.ping_url()?,
            suggest_rows: config.suggest_rows,
        })
    }

    pub fn select_url(&self) -> &Url {
        &self.select_url
    }

    /// Send a `/select` request and return the backend's JSON untouched.
    pub async fn select(&self, query: &SelectQuery) -> Result<Value> {
        let params = query.params();
        tracing::debug!(q = %query.expression(), "solr select");

        let response = self
            .http_client
            .get(self.select_url.clone())
            .query(&params)
            .send()
            .await
            .map_err(|e| SolrgateError::BackendUnavailable(format!("select failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "solr select returned an error");
            return Err(SolrgateError::Backend {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| SolrgateError::MalformedResponse(e.to_string()))
    }

    pub async fn search(&self, req: &SearchRequest) -> Result<Value> {
        self.select(&build_search_select(req)).await
    }

    /// Title suggestions for `prefix`. A blank prefix answers immediately
    /// with no suggestions and no backend call.
    pub async fn suggest(&self, prefix: &str) -> Result<Vec<String>> {
        match build_suggest_query_with_rows(Some(prefix), self.suggest_rows) {
            Suggest::NoSuggestions => Ok(Vec::new()),
            Suggest::Lookup(query) => {
                let response = self.select(&query).await?;
                Ok(suggestions_from_response(&response))
            }
        }
    }

    pub async fn facet_values(&self, field: &str) -> Result<Vec<String>> {
        let response = self.select(&build_facet_query(field)).await?;
        Ok(facet_values_from_response(&response, field))
    }

    /// Distinct values for each of `fields`. A field whose lookup fails maps
    /// to an empty list.
    pub async fn facets(&self, fields: &[&str]) -> FacetResult {
        let mut result = FacetResult::with_capacity(fields.len());
        for field in fields {
            let values = match self.facet_values(field).await {
                Ok(values) => values,
                Err(e) => {
                    tracing::warn!(field = %field, error = %e, "facet lookup failed");
                    Vec::new()
                }
            };
            result.insert(field.to_string(), values);
        }
        result
    }

    /// Probe the collection's ping handler.
    pub async fn ping(&self) -> Result<()> {
        let response = self
            .http_client
            .get(self.ping_url.clone())
            .query(&[("wt", "json")])
            .send()
            .await
            .map_err(|e| SolrgateError::BackendUnavailable(format!("ping failed: {e}")))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(SolrgateError::Backend {
                status: response.status().as_u16(),
                message: "ping failed".to_string(),
            })
        }
    }
}
