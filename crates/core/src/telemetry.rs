// Telemetry module
//
// Console logging via tracing-subscriber with an env-driven filter.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Default filter used when neither RUST_LOG nor LOG_LEVEL is set
pub const DEFAULT_LOG_FILTER: &str = "east_store_server=debug,tower_http=debug";

/// Configuration for logging
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Service name, reported once at start-up
    pub service_name: String,
    /// Service version
    pub service_version: Option<String>,
    /// Environment (e.g., "development", "production")
    pub environment: Option<String>,
    /// Log filter (e.g., "info", "east_store_server=debug")
    pub log_filter: Option<String>,
    /// Emit JSON lines instead of the human-readable format
    pub json: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: "east-store".to_string(),
            service_version: None,
            environment: None,
            log_filter: None,
            json: false,
        }
    }
}

impl TelemetryConfig {
    /// Create configuration from environment variables
    ///
    /// Environment variables:
    /// - `SERVICE_NAME`: Service name (default: "east-store")
    /// - `APP_ENV`: Deployment environment
    /// - `RUST_LOG` or `LOG_LEVEL`: Log filter
    /// - `LOG_FORMAT`: "json" for JSON lines
    pub fn from_env() -> Self {
        Self {
            service_name: std::env::var("SERVICE_NAME")
                .unwrap_or_else(|_| "east-store".to_string()),
            service_version: None,
            environment: std::env::var("APP_ENV").ok(),
            log_filter: std::env::var("RUST_LOG")
                .ok()
                .or_else(|| std::env::var("LOG_LEVEL").ok()),
            json: std::env::var("LOG_FORMAT")
                .map(|v| v.eq_ignore_ascii_case("json"))
                .unwrap_or(false),
        }
    }

    fn filter(&self) -> EnvFilter {
        self.log_filter
            .as_ref()
            .and_then(|f| EnvFilter::try_new(f).ok())
            .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
    }
}

/// Initialize the global tracing subscriber.
///
/// Call once, early in `main`. A second call panics inside tracing-subscriber,
/// so tests should not call this.
pub fn init_telemetry(config: TelemetryConfig) {
    let filter = config.filter();

    let fmt_layer = if config.json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_filter(filter)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_filter(filter)
            .boxed()
    };

    tracing_subscriber::registry().with(fmt_layer).init();

    tracing::info!(
        service = %config.service_name,
        version = config.service_version.as_deref().unwrap_or("unknown"),
        environment = config.environment.as_deref().unwrap_or("development"),
        "Telemetry initialized"
    );
}
