//! Index client implementation.
//!
//! This module provides the main client for interacting with an
//! Elasticsearch-compatible search index. Application code uses this to
//! create and remove indices, add documents, and run searches.

use reqwest::Method;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::debug;

use crate::config::ClientConfig;
use crate::errors::IndexClientError;
use crate::helpers;
use crate::http::HttpTransport;
use crate::interfaces::Transport;
use crate::types::ApiRequest;

/// The main client for interacting with the search index service.
///
/// Every operation is a single stateless round trip: the client holds no
/// state between calls beyond its transport. Errors are never retried.
pub struct IndexClient {
    transport: Box<dyn Transport>,
}

impl IndexClient {
    /// Create a new IndexClient over the given transport.
    pub fn new(transport: Box<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Create a new IndexClient speaking HTTP to the configured service.
    ///
    /// # Returns
    ///
    /// * `Ok(IndexClient)` - A ready client
    /// * `Err(IndexClientError::ConnectionError)` - If the configuration does
    ///   not form a valid base URL
    pub fn connect(config: ClientConfig) -> Result<Self, IndexClientError> {
        Ok(Self::new(Box::new(HttpTransport::new(config)?)))
    }

    /// Check that an index name is usable in a request path.
    fn validate_index_name(index: &str) -> Result<(), IndexClientError> {
        if index.is_empty() {
            return Err(IndexClientError::validation("Index name must not be empty"));
        }
        Ok(())
    }

    /// Parse a response body as JSON.
    fn parse_body(body: &str) -> Result<Value, IndexClientError> {
        serde_json::from_str(body).map_err(|e| IndexClientError::parse(e.to_string()))
    }

    /// Add a document to the given index.
    ///
    /// When `id` is `None`, a random 20-character alphanumeric id is
    /// generated. Issues `PUT /{index}/_doc/{id}`.
    ///
    /// # Returns
    ///
    /// * `Ok(Value)` - The parsed response body
    /// * `Err(IndexClientError)` - If the request fails or the response body
    ///   is not valid JSON
    pub async fn add_document<T: Serialize>(
        &self,
        index: &str,
        document: &T,
        id: Option<&str>,
    ) -> Result<Value, IndexClientError> {
        Self::validate_index_name(index)?;

        let id = match id {
            Some(id) => id.to_string(),
            None => helpers::random_document_id(),
        };
        let body = serde_json::to_value(document).map_err(|e| {
            IndexClientError::validation(format!("Document is not serializable to JSON: {}", e))
        })?;

        let request = ApiRequest::with_body(Method::PUT, format!("/{}/_doc/{}", index, id), body);
        let response = self.transport.execute(request).await?;

        debug!(index = %index, doc_id = %id, status = %response.status, "Document added");
        Self::parse_body(&response.body)
    }

    /// Remove an index.
    ///
    /// Issues `DELETE /{index}` and returns `true` once the response
    /// completes. The status code is intentionally not inspected, so removing
    /// a non-existent index still reports success.
    pub async fn remove_index(&self, index: &str) -> Result<bool, IndexClientError> {
        Self::validate_index_name(index)?;

        let request = ApiRequest::new(Method::DELETE, format!("/{}", index));
        let response = self.transport.execute(request).await?;

        debug!(index = %index, status = %response.status, "Index removed");
        Ok(true)
    }

    /// Run a query-string search against an index.
    ///
    /// Issues `GET /{index}/_search?q={query}` with the query URL-encoded.
    pub async fn search(&self, index: &str, query: &str) -> Result<Value, IndexClientError> {
        Self::validate_index_name(index)?;

        let request = ApiRequest::new(
            Method::GET,
            format!("/{}/_search?q={}", index, urlencoding::encode(query)),
        );
        let response = self.transport.execute(request).await?;

        debug!(index = %index, status = %response.status, "Search completed");
        Self::parse_body(&response.body)
    }

    /// Run a full query-DSL search against an index.
    ///
    /// Issues `POST /{index}/_search` with the given JSON query body.
    pub async fn search_advanced(
        &self,
        index: &str,
        query: Value,
    ) -> Result<Value, IndexClientError> {
        Self::validate_index_name(index)?;

        let request =
            ApiRequest::with_body(Method::POST, format!("/{}/_search", index), query);
        let response = self.transport.execute(request).await?;

        debug!(index = %index, status = %response.status, "Advanced search completed");
        Self::parse_body(&response.body)
    }

    /// Create an index with the given settings and optional mappings.
    ///
    /// Both `settings` and `mappings` (when supplied) must be JSON objects;
    /// `mappings` defaults to an empty object. Issues `PUT /{index}` with
    /// body `{"settings": .., "mappings": ..}`.
    ///
    /// # Returns
    ///
    /// * `Ok(Value)` - The parsed acknowledgment
    /// * `Err(IndexClientError::ValidationError)` - If `settings` or
    ///   `mappings` is not an object
    pub async fn create_index(
        &self,
        index: &str,
        settings: Value,
        mappings: Option<Value>,
    ) -> Result<Value, IndexClientError> {
        Self::validate_index_name(index)?;

        if !settings.is_object() {
            return Err(IndexClientError::validation(
                "Parameter settings must be a JSON object",
            ));
        }
        let mappings = mappings.unwrap_or_else(|| json!({}));
        if !mappings.is_object() {
            return Err(IndexClientError::validation(
                "Parameter mappings must be a JSON object",
            ));
        }

        let body = json!({
            "settings": settings,
            "mappings": mappings
        });
        let request = ApiRequest::with_body(Method::PUT, format!("/{}", index), body);
        let response = self.transport.execute(request).await?;

        debug!(index = %index, status = %response.status, "Index created");
        Self::parse_body(&response.body)
    }

    /// Check whether an index exists.
    ///
    /// Issues `GET /{index}` and returns `true` exactly when the parsed
    /// response carries no `error` field.
    pub async fn index_exists(&self, index: &str) -> Result<bool, IndexClientError> {
        Self::validate_index_name(index)?;

        let request = ApiRequest::new(Method::GET, format!("/{}", index));
        let response = self.transport.execute(request).await?;

        let parsed = Self::parse_body(&response.body)?;
        Ok(parsed.get("error").is_none())
    }
}
