//! # Search Index Client
//!
//! A thin client for an Elasticsearch-compatible HTTP search index. Every
//! operation is one stateless request/response round trip: build a path,
//! serialize a JSON body, parse a JSON response.
//!
//! The concrete HTTP layer sits behind the [`Transport`] trait so tests can
//! inject a mock in its place.
//!
//! # Example
//!
//! ```ignore
//! use search_index_client::{ClientConfig, IndexClient};
//! use serde_json::json;
//!
//! let client = IndexClient::connect(ClientConfig::from_env())?;
//! client
//!     .create_index("movies", json!({"number_of_shards": 1}), None)
//!     .await?;
//! client
//!     .add_document("movies", &json!({"title": "Alien"}), None)
//!     .await?;
//! let results = client.search("movies", "alien").await?;
//! ```

pub mod client;
pub mod config;
pub mod errors;
pub mod helpers;
pub mod http;
pub mod interfaces;
pub mod types;

pub use client::IndexClient;
pub use config::{ClientConfig, Credentials, Environment, Protocol};
pub use errors::IndexClientError;
pub use http::HttpTransport;
pub use interfaces::Transport;
pub use types::{ApiRequest, ApiResponse};
