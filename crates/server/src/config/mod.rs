// Server configuration loaded from environment variables
// Decision: No DATABASE_URL means in-memory dev mode, not a start-up failure

/// Default listen address
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to
    pub bind_addr: String,
    /// Postgres URL; None selects the in-memory backend
    pub database_url: Option<String>,
    /// Prefix for the /api routes, e.g. "/v1" gives /v1/api/artworks
    pub api_prefix: String,
    /// Origins allowed by CORS; empty disables the CORS layer
    pub cors_allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            database_url: None,
            api_prefix: String::new(),
            cors_allowed_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            bind_addr: std::env::var("BIND_ADDR")
                .ok()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            database_url: std::env::var("DATABASE_URL").ok().filter(|s| !s.is_empty()),
            api_prefix: std::env::var("API_PREFIX").unwrap_or_default(),
            cors_allowed_origins: std::env::var("CORS_ALLOWED_ORIGINS")
                .map(|s| parse_origins(&s))
                .unwrap_or_default(),
        }
    }
}

/// Split a comma-separated origin list, dropping blanks
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr, "0.0.0.0:3000");
        assert!(config.database_url.is_none());
        assert!(config.api_prefix.is_empty());
        assert!(config.cors_allowed_origins.is_empty());
    }

    #[test]
    fn test_parse_origins() {
        assert_eq!(
            parse_origins("https://eaststore.com, https://admin.eaststore.com,,"),
            vec!["https://eaststore.com", "https://admin.eaststore.com"]
        );
        assert!(parse_origins("").is_empty());
    }
}
