//! Transport trait definition.
//!
//! This module defines the abstract interface for executing requests against
//! the search index service, allowing the HTTP layer to be swapped for a
//! mock in tests.

use async_trait::async_trait;

use crate::errors::IndexClientError;
use crate::types::{ApiRequest, ApiResponse};

/// Abstracts the HTTP round trip against the search index service.
///
/// Implementations are injected into `IndexClient` to enable dependency
/// injection and easy testing with mock implementations.
///
/// A transport must not interpret the response: it returns the status code
/// and the full body as received, even for non-success statuses. Status
/// inspection and JSON parsing are the caller's responsibility.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync` to allow use across async tasks.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute one request and collect the full response.
    ///
    /// # Arguments
    ///
    /// * `request` - The request to execute
    ///
    /// # Returns
    ///
    /// * `Ok(ApiResponse)` - The status code and raw body, for any status
    /// * `Err(IndexClientError::ConnectionError)` - If the round trip fails
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, IndexClientError>;
}
