//! Configuration types for the directory client.

/// Base URL of the upstream mock directory API.
///
/// The user collection lives at `{base}/users`.
pub const DEFAULT_BASE_URL: &str = "https://67e0d94c58cc6bf78523245f.mockapi.io/api/v1";

/// Configuration for connecting to a user directory API.
#[derive(Debug, Clone)]
pub struct DirectoryConfig {
    /// Base URL of the API (e.g. `https://directory.example.com/api/v1`)
    pub base_url: String,
}

impl DirectoryConfig {
    /// Create a config pointing at the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
