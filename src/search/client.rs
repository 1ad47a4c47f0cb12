//! HTTP client for the Vectara v1 query API

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use reqwest::StatusCode;
use tracing::debug;
use tracing::info;
use tracing::warn;

use crate::config::VectaraConfig;
use crate::errors::RagChatError;
use crate::errors::Result;
use crate::search::types::QueryRequest;
use crate::search::types::QueryResponse;
use crate::search::Retriever;

/// Client for the Vectara corpus configured at startup
pub struct VectaraClient {
    client: Client,
    endpoint: String,
    customer_id: String,
    api_key: String,
    corpus_id: String,
    num_results: u32,
}

impl VectaraClient {
    /// Create a new Vectara client
    ///
    /// # Errors
    /// - HTTP client build errors (invalid configuration)
    pub fn new(config: &VectaraConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            customer_id: config.customer_id.clone(),
            api_key: config.api_key.clone(),
            corpus_id: config.corpus_id.clone(),
            num_results: config.num_results,
        })
    }

    /// Build the request body for `query`
    pub fn build_request(&self, query: &str) -> QueryRequest {
        QueryRequest::single(query, self.num_results, &self.customer_id, &self.corpus_id)
    }

    /// Run a query against the corpus.
    ///
    /// # Errors
    /// - `SearchFailed` for any status other than 200
    /// - Network errors (connection failures, timeouts when configured)
    /// - Serialization errors for a body that is not JSON or not the expected shape
    pub async fn query(&self, query: &str) -> Result<Option<QueryResponse>> {
        let request = self.build_request(query);
        debug!("Querying Vectara corpus {} for: {}", self.corpus_id, query);

        let response = self
            .client
            .post(&self.endpoint)
            .header("customer-id", &self.customer_id)
            .header("x-api-key", &self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let reason = status.canonical_reason().unwrap_or("Unknown").to_string();
            warn!("Vectara query failed with code {}, reason {}", status.as_u16(), reason);
            return Err(RagChatError::SearchFailed {
                status: status.as_u16(),
                reason,
            });
        }

        let body = response.text().await?;
        let parsed = parse_query_response(&body)?;
        if let Some(result) = &parsed {
            info!(
                "Vectara returned {} response set(s)",
                result.response_set.len()
            );
        }
        Ok(parsed)
    }
}

/// Decode a 200 body. An empty or falsy JSON value (`null`, `false`, `0`,
/// `""`, `[]`, `{}`) counts as an absent result.
pub fn parse_query_response(body: &str) -> Result<Option<QueryResponse>> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    if is_empty_result(&value) {
        return Ok(None);
    }
    Ok(Some(serde_json::from_value(value)?))
}

fn is_empty_result(value: &serde_json::Value) -> bool {
    use serde_json::Value;

    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

#[async_trait]
impl Retriever for VectaraClient {
    async fn retrieve(&self, query: &str) -> Result<Option<QueryResponse>> {
        self.query(query).await
    }
}
