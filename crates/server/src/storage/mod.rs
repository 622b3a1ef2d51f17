// Storage layer for the East Store server
// Decision: Support both PostgreSQL (production) and in-memory (dev mode)

pub mod backend;
pub mod memory;
pub mod models;
pub mod repositories;

pub use backend::StorageBackend;
pub use memory::InMemoryDatabase;
pub use models::*;
pub use repositories::Database;
