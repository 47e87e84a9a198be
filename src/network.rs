//! Network URL constants for the Civic SDK.

/// Default REST API base URL for the Google Civic Information API.
pub const DEFAULT_API_URL: &str = "https://www.googleapis.com/civicinfo/v2";
