//! Core configuration.
//!
//! Centralizes the defaults used by the API client and query cache.

// =============================================================================
// Network Configuration
// =============================================================================

/// Base URL used when `WINLOSS_API_BASE` is not set at build time.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api";

/// Base URL of the analytics API, fixed at compile time.
pub const API_BASE: &str = match option_env!("WINLOSS_API_BASE") {
    Some(base) => base,
    None => DEFAULT_API_BASE,
};

// =============================================================================
// Cache Configuration
// =============================================================================

/// Window (ms) during which a completed entry counts as fresh and new
/// observers of the same key reuse it without fetching.
pub const DEFAULT_DEDUPE_INTERVAL_MS: f64 = 2000.0;

// =============================================================================
// Ask AI
// =============================================================================

/// Assistant reply appended when a question could not be answered.
pub const ASK_FALLBACK_MESSAGE: &str =
    "Sorry, I couldn't process that question. Please try again.";

/// Runtime configuration for [`ApiClient`](crate::api::ApiClient).
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Origin plus API prefix, without a trailing slash.
    pub base_url: String,
    /// Transport timeout. `None` leaves requests unbounded.
    pub request_timeout_ms: Option<u32>,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            request_timeout_ms: None,
        }
    }

    pub fn with_timeout(mut self, timeout_ms: u32) -> Self {
        self.request_timeout_ms = Some(timeout_ms);
        self
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(API_BASE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = ApiConfig::new("https://api.example.com/api/");
        assert_eq!(config.base_url, "https://api.example.com/api");
        assert_eq!(config.request_timeout_ms, None);
    }

    #[test]
    fn test_with_timeout() {
        let config = ApiConfig::new("http://x").with_timeout(5000);
        assert_eq!(config.request_timeout_ms, Some(5000));
    }
}
