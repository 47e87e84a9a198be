//! REST API client module for the Google Civic Information API.
//!
//! This module provides an HTTP client for the election, voter-info, and
//! representative lookup endpoints. Responses are returned as generic
//! [`serde_json::Value`] trees: the remote API's shape is not
//! contractually fixed by this client, so no schema is enforced.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use civic_sdk::api::{CivicClient, QueryOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create client with default settings
//!     let client = CivicClient::new("my-api-key")?;
//!
//!     // List current elections
//!     let elections = client.elections(&QueryOptions::new()).await?;
//!     println!("found {} elections", elections["elections"].as_array().map_or(0, Vec::len));
//!
//!     // Look up representatives for a division
//!     let reps = client
//!         .representative_info_by_division(
//!             "ocd-division/country:us/state:nc/county:durham",
//!             &QueryOptions::new(),
//!         )
//!         .await?;
//!     println!("offices: {}", reps["offices"]);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Client Configuration
//!
//! Use the builder pattern for custom configuration:
//!
//! ```rust,ignore
//! use civic_sdk::api::CivicClient;
//! use std::time::Duration;
//!
//! let client = CivicClient::builder("my-api-key")
//!     .timeout(Duration::from_secs(60))
//!     .build()?;
//! ```
//!
//! # Navigating responses
//!
//! Index into the tree by key, or use a JSON pointer for nested paths:
//!
//! ```rust,ignore
//! let name = &elections["elections"][0]["name"];
//! let name = elections.pointer("/elections/0/name");
//! ```
//!
//! # Error Handling
//!
//! All methods return `CivicResult<Value>`, an alias for
//! `Result<Value, CivicError>`:
//!
//! ```rust,ignore
//! use civic_sdk::api::{CivicClient, CivicError};
//!
//! match client.elections(&QueryOptions::new()).await {
//!     Ok(elections) => println!("ok: {}", elections["kind"]),
//!     Err(CivicError::Api { status, message, .. }) => {
//!         println!("server rejected the request ({status}): {message}");
//!     }
//!     Err(e) => println!("other error: {e}"),
//! }
//! ```

pub mod client;
pub mod error;
pub mod query;

// Re-export main types for convenience
pub use client::{CivicClient, CivicClientBuilder};
pub use error::{CivicError, CivicResult, ErrorDetail, ErrorResponse};
pub use query::QueryOptions;
