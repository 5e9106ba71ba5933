//! HTTP implementation of the transport.
//!
//! This module provides the concrete `Transport` implementation backed by
//! reqwest.

mod transport;

pub use transport::HttpTransport;
