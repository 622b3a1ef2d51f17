// Artwork domain types
//
// Artworks are the gallery items shown on the marketing site.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Artwork - a gallery item with an externally hosted image.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct Artwork {
    /// Unique identifier for the artwork.
    pub id: Uuid,
    /// Display title.
    pub title: String,
    /// Optional long-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// URL of the hosted image.
    pub image_url: String,
    /// Tags for filtering in the gallery.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Whether the artwork is shown on the home page.
    #[serde(default)]
    pub featured: bool,
    /// Position in the gallery; lower values come first.
    #[serde(default)]
    pub sort_order: i32,
    /// Timestamp when the artwork was created.
    pub created_at: DateTime<Utc>,
    /// Timestamp when the artwork was last updated.
    pub updated_at: DateTime<Utc>,
}
