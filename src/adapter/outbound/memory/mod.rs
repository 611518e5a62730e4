//! In-memory storage backend.

mod store;
mod table;

pub use store::MemoryStore;
