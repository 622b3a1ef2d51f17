// Admin identity
//
// The site has exactly one admin. A successful session check always returns
// the same record; it is never looked up per request.

use serde::{Deserialize, Serialize};

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Fixed identity returned for a valid admin session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct AdminIdentity {
    /// Identifier of the admin.
    #[cfg_attr(feature = "openapi", schema(example = "1"))]
    pub id: String,
    /// Admin email address.
    #[cfg_attr(feature = "openapi", schema(example = "admin@eaststore.com"))]
    pub email: String,
    /// Display name.
    #[cfg_attr(feature = "openapi", schema(example = "Admin"))]
    pub name: String,
    /// Store the admin is scoped to. Always null: the site has a single store.
    pub store_id: Option<String>,
}

impl Default for AdminIdentity {
    fn default() -> Self {
        Self {
            id: "1".to_string(),
            email: "admin@eaststore.com".to_string(),
            name: "Admin".to_string(),
            store_id: None,
        }
    }
}
