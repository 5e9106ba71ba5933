//! reqwest-backed transport implementation.

use async_trait::async_trait;
use tracing::{debug, info};
use url::Url;

use crate::config::ClientConfig;
use crate::errors::IndexClientError;
use crate::interfaces::Transport;
use crate::types::{ApiRequest, ApiResponse};

/// HTTP transport for the search index service.
///
/// Each request opens against the configured base URL, attaches HTTP Basic
/// auth when credentials are configured, and sends JSON bodies with
/// `Content-Type: application/json`. Responses are collected in full before
/// being returned; status codes are never interpreted here.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    config: ClientConfig,
}

impl HttpTransport {
    /// Create a transport for the given configuration.
    ///
    /// # Returns
    ///
    /// * `Ok(HttpTransport)` - A ready transport
    /// * `Err(IndexClientError::ConnectionError)` - If the configured
    ///   protocol, hostname and port do not form a valid base URL
    pub fn new(config: ClientConfig) -> Result<Self, IndexClientError> {
        let base_url = config.base_url();
        Url::parse(&base_url).map_err(|e| IndexClientError::connection(e.to_string()))?;

        info!(
            base_url = %base_url,
            authenticated = config.credentials.is_some(),
            "Created HTTP transport"
        );

        Ok(Self {
            client: reqwest::Client::new(),
            base_url,
            config,
        })
    }

    /// Join the base URL with a request path.
    fn request_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, IndexClientError> {
        let url = self.request_url(&request.path);
        debug!(method = %request.method, url = %url, "Executing request");

        let mut builder = self.client.request(request.method, url);

        if let Some(credentials) = &self.config.credentials {
            builder = builder.basic_auth(&credentials.username, Some(&credentials.password));
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| IndexClientError::connection(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| IndexClientError::connection(e.to_string()))?;

        debug!(status = %status, "Request completed");

        Ok(ApiResponse::new(status, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Credentials, Environment, Protocol};

    #[test]
    fn test_new_with_valid_config() {
        let config = ClientConfig::for_environment(Environment::Staging);
        assert!(HttpTransport::new(config).is_ok());
    }

    #[test]
    fn test_new_rejects_invalid_hostname() {
        let config = ClientConfig {
            protocol: Protocol::Http,
            hostname: "not a hostname".to_string(),
            port: 9200,
            credentials: None,
        };
        let result = HttpTransport::new(config);
        assert!(matches!(
            result,
            Err(IndexClientError::ConnectionError(_))
        ));
    }

    #[test]
    fn test_request_url_joins_base_and_path() {
        let config = ClientConfig {
            protocol: Protocol::Http,
            hostname: "search.internal".to_string(),
            port: 9201,
            credentials: Some(Credentials::new("elastic", "changeme")),
        };
        let transport = HttpTransport::new(config).unwrap();
        assert_eq!(
            transport.request_url("/movies/_doc/abc"),
            "http://search.internal:9201/movies/_doc/abc"
        );
    }
}
