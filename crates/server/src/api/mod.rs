// HTTP API routes
//
// Each submodule handles a specific resource type with its own AppState.

pub mod admin;
pub mod artworks;
pub mod common;
pub mod settings;
pub mod size_cards;
pub mod validation;

// Re-export common types
pub use common::{ErrorResponse, ListResponse};
