// Content setting domain types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// A keyed piece of editable site copy (hero text, contact email, ...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct ContentSetting {
    /// Unique key, e.g. "home.hero_title".
    #[cfg_attr(feature = "openapi", schema(example = "home.hero_title"))]
    pub key: String,
    /// Plain string value.
    pub value: String,
    /// Timestamp of the last write.
    pub updated_at: DateTime<Utc>,
}
