//! Client configuration

/// Client configuration for connecting to the scoring API
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL (e.g., "http://127.0.0.1:8000")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Page size for the scored-logs endpoint
    pub page_limit: u32,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: 30,
            page_limit: 50,
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Set the scored-logs page size
    pub fn with_page_limit(mut self, limit: u32) -> Self {
        self.page_limit = limit;
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> super::HttpClient {
        super::HttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://127.0.0.1:8000")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://127.0.0.1:8000");
        assert_eq!(config.timeout, 30);
        assert_eq!(config.page_limit, 50);
    }

    #[test]
    fn builder_overrides() {
        let config = ClientConfig::new("http://chimera:9000")
            .with_timeout(5)
            .with_page_limit(25);
        assert_eq!(config.base_url, "http://chimera:9000");
        assert_eq!(config.timeout, 5);
        assert_eq!(config.page_limit, 25);
    }
}
