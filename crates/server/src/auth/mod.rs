// Admin authentication
//
// A static session credential carried in one cookie. The gate middleware
// protects a path prefix by cookie presence; the check endpoint validates the
// value through a CredentialVerifier.

pub mod config;
pub mod credential;
pub mod middleware;
pub mod routes;

pub use config::{AdminCredentials, AuthConfig};
pub use credential::{CredentialVerifier, StaticTokenVerifier};
pub use middleware::{require_session_cookie, AuthError, AuthState};
pub use routes::{routes, AuthCheckResponse, LoginRequest};
