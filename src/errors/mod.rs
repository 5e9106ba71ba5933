//! Error types for the index client.

mod client_error;

pub use client_error::IndexClientError;
