//! Movable Type Data API client SDK for Rust
//!
//! This crate provides a small client for the versioned Data API of a
//! Movable Type installation.
//!
//! # Example
//!
//! ```no_run
//! use mt_data_api::{Client, ClientConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new(ClientConfig {
//!         base_url: "https://movabletype.net/.data-api".to_string(),
//!         endpoint_version: "v4".to_string(),
//!     })?;
//!
//!     let version = client.version().await?;
//!     println!("EndpointVersion : {}", version.endpoint_version());
//!     println!("ApiVersion      : {}", version.api_version());
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod transport;
mod types;

pub use client::{Client, ClientConfig, VersionStream, DEFAULT_BASE_URL, DEFAULT_ENDPOINT_VERSION};
pub use error::{Error, Result};
pub use transport::{HttpMethod, HttpRequest, HttpResponse, ReqwestTransport, Transport};
pub use types::*;
