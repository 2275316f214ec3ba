/**
 * Client Configuration
 *
 * Resolves the API origin the access layer talks to. Frontends running
 * next to the server use the default local origin; deployed clients set
 * `GEOSENTINEL_API_URL`.
 */

/// Default API origin
const DEFAULT_API_URL: &str = "http://127.0.0.1:3000";

/// Client configuration wrapper.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl ClientConfig {
    /// Create a configuration pointing at an explicit origin.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Resolve the origin from `GEOSENTINEL_API_URL`, defaulting to the
    /// local development server.
    pub fn from_env() -> Self {
        match std::env::var("GEOSENTINEL_API_URL") {
            Ok(url) if !url.is_empty() => Self::new(url),
            _ => Self::default(),
        }
    }

    /// Origin without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for an API endpoint path, e.g. `/aois` →
    /// `http://127.0.0.1:3000/api/aois`.
    pub fn api_url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_origin() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url(), "http://127.0.0.1:3000");
    }

    #[test]
    fn test_api_url() {
        let config = ClientConfig::new("https://geosentinel.example.org");
        assert_eq!(
            config.api_url("/aois"),
            "https://geosentinel.example.org/api/aois"
        );
    }

    #[test]
    fn test_trailing_slash_stripped() {
        let config = ClientConfig::new("http://localhost:3000/");
        assert_eq!(config.api_url("/alerts"), "http://localhost:3000/api/alerts");
    }
}
