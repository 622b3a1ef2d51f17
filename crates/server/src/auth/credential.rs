// Session credential verification
// Decision: The check endpoint depends only on CredentialVerifier, so a token
// store with issuance and expiry can replace the static token later

use async_trait::async_trait;
use east_store_core::AdminIdentity;

/// Issues session tokens and resolves presented ones to the admin identity
///
/// Implementations:
/// - `StaticTokenVerifier`: one configured token, exact match
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    /// Return the identity for a valid token, or None
    async fn verify(&self, token: &str) -> Option<AdminIdentity>;

    /// Issue the token written into the session cookie after a successful login
    async fn issue(&self, identity: &AdminIdentity) -> String;
}

/// Single shared-secret verifier
///
/// Exactly one token is valid per process. It is compared by exact string
/// equality and never looked up in storage.
#[derive(Clone)]
pub struct StaticTokenVerifier {
    token: String,
    identity: AdminIdentity,
}

impl StaticTokenVerifier {
    pub fn new(token: impl Into<String>, identity: AdminIdentity) -> Self {
        Self {
            token: token.into(),
            identity,
        }
    }
}

impl std::fmt::Debug for StaticTokenVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticTokenVerifier")
            .field("token", &"<redacted>")
            .field("identity", &self.identity)
            .finish()
    }
}

#[async_trait]
impl CredentialVerifier for StaticTokenVerifier {
    async fn verify(&self, token: &str) -> Option<AdminIdentity> {
        if token == self.token {
            Some(self.identity.clone())
        } else {
            None
        }
    }

    async fn issue(&self, identity: &AdminIdentity) -> String {
        tracing::debug!(user_id = %identity.id, "Issuing static session token");
        self.token.clone()
    }
}
