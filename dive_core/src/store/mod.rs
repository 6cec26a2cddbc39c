//! Flat key-value persistence for selection state
//!
//! Stores only hold strings. Encoding the selections is the caller's job.

mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use thiserror::Error;

/// Errors surfaced by store implementations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// String-keyed storage for persisted selections
pub trait KeyValueStore: Send + Sync {
    /// Value stored under `key`, `None` when absent
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<()>;
}
