//! Persistence: key-value store and configuration.

pub mod config;
pub mod store;

pub use config::AppConfig;
pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError};
