// Authentication configuration loaded from environment variables.
// Decision: AUTH_ prefix for session settings, ADMIN_ prefix for the admin account
// Decision: Without AUTH_SESSION_TOKEN a random token is generated per process

use east_store_core::AdminIdentity;
use std::time::Duration;

pub const DEFAULT_COOKIE_NAME: &str = "east_admin_token";
pub const DEFAULT_PROTECTED_PREFIX: &str = "/admin";
pub const DEFAULT_LOGIN_PATH: &str = "/login";

/// Default cookie lifetime: 7 days
const DEFAULT_SESSION_MAX_AGE: Duration = Duration::from_secs(7 * 24 * 60 * 60);

/// Admin login credentials
#[derive(Debug, Clone)]
pub struct AdminCredentials {
    pub email: String,
    pub password: String,
}

impl AdminCredentials {
    /// Exact comparison of both fields
    pub fn matches(&self, email: &str, password: &str) -> bool {
        self.email == email && self.password == password
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// The single valid session value
    pub session_token: String,
    /// Name of the cookie carrying the session value
    pub cookie_name: String,
    /// Paths starting with this prefix require the cookie
    pub protected_prefix: String,
    /// Redirect target when the cookie is missing
    pub login_path: String,
    /// Set the Secure attribute on the session cookie
    pub cookie_secure: bool,
    /// Session cookie max age
    pub session_max_age: Duration,
    /// Login credentials; login is disabled when unset
    pub admin: Option<AdminCredentials>,
    /// Identity returned on a successful check
    pub identity: AdminIdentity,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_token: generate_token(),
            cookie_name: DEFAULT_COOKIE_NAME.to_string(),
            protected_prefix: DEFAULT_PROTECTED_PREFIX.to_string(),
            login_path: DEFAULT_LOGIN_PATH.to_string(),
            cookie_secure: true,
            session_max_age: DEFAULT_SESSION_MAX_AGE,
            admin: None,
            identity: AdminIdentity::default(),
        }
    }
}

fn generate_token() -> String {
    use rand::Rng;
    let bytes: [u8; 32] = rand::thread_rng().gen();
    hex::encode(bytes)
}

fn env_non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}

fn parse_bool(s: &str) -> bool {
    s.eq_ignore_ascii_case("true") || s == "1"
}

/// Parse a session lifetime in minutes; out-of-range values are rejected
fn parse_max_age_minutes(s: &str) -> Option<Duration> {
    let mins: u64 = s.trim().parse().ok()?;
    mins.checked_mul(60).map(Duration::from_secs)
}

impl AuthConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let session_token = env_non_empty("AUTH_SESSION_TOKEN").unwrap_or_else(|| {
            tracing::warn!(
                "AUTH_SESSION_TOKEN not set, generated a random session token; \
                 admin sessions will not survive a restart"
            );
            generate_token()
        });

        let cookie_name =
            env_non_empty("AUTH_COOKIE_NAME").unwrap_or_else(|| DEFAULT_COOKIE_NAME.to_string());

        let protected_prefix = env_non_empty("AUTH_PROTECTED_PREFIX")
            .unwrap_or_else(|| DEFAULT_PROTECTED_PREFIX.to_string());

        let login_path =
            env_non_empty("AUTH_LOGIN_PATH").unwrap_or_else(|| DEFAULT_LOGIN_PATH.to_string());

        let cookie_secure = std::env::var("AUTH_COOKIE_SECURE")
            .map(|s| parse_bool(&s))
            .unwrap_or(true);

        let session_max_age = std::env::var("AUTH_SESSION_MAX_AGE")
            .ok()
            .and_then(|s| parse_max_age_minutes(&s))
            .unwrap_or(DEFAULT_SESSION_MAX_AGE);

        let admin = match (env_non_empty("ADMIN_EMAIL"), env_non_empty("ADMIN_PASSWORD")) {
            (Some(email), Some(password)) => Some(AdminCredentials { email, password }),
            _ => {
                tracing::warn!("ADMIN_EMAIL/ADMIN_PASSWORD not set, admin login is disabled");
                None
            }
        };

        let defaults = AdminIdentity::default();
        let identity = AdminIdentity {
            id: env_non_empty("ADMIN_ID").unwrap_or(defaults.id),
            email: admin
                .as_ref()
                .map(|a| a.email.clone())
                .unwrap_or(defaults.email),
            name: env_non_empty("ADMIN_NAME").unwrap_or(defaults.name),
            store_id: None,
        };

        Self {
            session_token,
            cookie_name,
            protected_prefix,
            login_path,
            cookie_secure,
            session_max_age,
            admin,
            identity,
        }
    }

    /// Check if the login endpoint can succeed
    pub fn login_enabled(&self) -> bool {
        self.admin.is_some()
    }

    /// Raw string prefix match, so `/admin-tools` is protected along with `/admin`
    pub fn is_protected(&self, path: &str) -> bool {
        path.starts_with(&self.protected_prefix)
    }
}
