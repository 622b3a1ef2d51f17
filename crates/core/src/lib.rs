// East Store core
//
// Storage-agnostic domain types shared by the server and its tests.
//
// Key design decisions:
// - Entities carry serde + (optional) utoipa derives so the API can return them directly
// - Size-card table shape is checked here so every caller applies the same rule
// - The admin identity is a fixed record, not a user table row

// Telemetry (tracing subscriber setup)
pub mod telemetry;

// Domain entity types
pub mod artwork;
pub mod content_setting;
pub mod identity;
pub mod size_card;

pub mod error;

// Re-exports for convenience
pub use artwork::Artwork;
pub use content_setting::ContentSetting;
pub use error::StoreError;
pub use identity::AdminIdentity;
pub use size_card::SizeCardTemplate;
