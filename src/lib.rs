//! # Civic SDK
//!
//! A Rust client for the Google Civic Information API: elections, voter
//! information, and representative lookup.
//!
//! ## Modules
//!
//! - [`api`]: REST API client for the civic-information endpoints
//! - [`network`]: Network URL constants
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use civic_sdk::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CivicClient::new("my-api-key")?;
//!
//!     // List current elections
//!     let elections = client.elections(&QueryOptions::new()).await?;
//!     println!("elections: {}", elections["elections"]);
//!
//!     // Voter information for an address
//!     let info = client
//!         .voter_info(2000, "1263 Pacific Ave. Kansas City KS", &QueryOptions::new())
//!         .await?;
//!     println!("contests: {}", info["contests"]);
//!
//!     Ok(())
//! }
//! ```
//!
//! Responses are generic [`serde_json::Value`] trees; see the [`api`]
//! module docs for navigation patterns and error handling.

// ============================================================================
// MODULES
// ============================================================================

/// REST API client module for elections, voter info, and representative lookup.
pub mod api;

/// Network URL constants (API endpoint).
pub mod network;

// ============================================================================
// PRELUDE
// ============================================================================

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use civic_sdk::prelude::*;
/// ```
pub mod prelude {
    // API module exports
    pub use crate::api::{
        CivicClient, CivicClientBuilder, CivicError, CivicResult, ErrorDetail, ErrorResponse,
        QueryOptions,
    };

    // Network constants
    pub use crate::network::DEFAULT_API_URL;
}
