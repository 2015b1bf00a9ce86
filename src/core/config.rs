//! Application configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Upstream identity service the /api/auth reverse proxy targets
    /// Example: https://auth.internal:4000
    pub auth_api_url: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self {
            auth_api_url: std::env::var("AUTH_API_URL").ok(),
        }
    }

    /// Check if the upstream identity service is configured
    pub fn has_auth_api(&self) -> bool {
        self.auth_api_url.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_with_auth_api() {
        let config = Config {
            auth_api_url: Some("https://auth.internal:4000".to_string()),
        };

        assert!(config.has_auth_api());
        assert_eq!(
            config.auth_api_url,
            Some("https://auth.internal:4000".to_string())
        );
    }

    #[test]
    fn test_config_without_auth_api() {
        let config = Config { auth_api_url: None };

        assert!(!config.has_auth_api());
    }

    #[test]
    fn test_config_from_env_returns_config() {
        // Actual values depend on environment, so only exercise the accessors
        let config = Config::from_env();
        let _ = config.has_auth_api();
    }

    #[test]
    fn test_config_debug_shows_fields() {
        let config = Config {
            auth_api_url: Some("https://auth.internal".to_string()),
        };

        let debug_str = format!("{:?}", config);
        assert!(debug_str.contains("auth_api_url"));
        assert!(debug_str.contains("https://auth.internal"));
    }
}
