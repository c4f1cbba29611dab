#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

use serde::{Serialize, de::DeserializeOwned};

mod dto;
mod file;
mod memory;
mod store;

pub use file::FileKv;
pub use memory::MemoryKv;
pub use store::LocalStore;

pub mod keys {
    pub const EXERCISES: &str = "exercises";
    pub const CATEGORIES: &str = "categories";
    pub const PLAYERS: &str = "players";
    pub const PLANS: &str = "workout-plans";
    pub const SETTINGS: &str = "settings";
    pub const LOG: &str = "log";
}

/// Persistent key-value store. Values are JSON documents; `get` returns
/// `None` for keys that have never been written.
pub trait Kv: Send + Sync + 'static {
    fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, KvError>;
    fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), KvError>;
}

impl<K: Kv> Kv for std::sync::Arc<K> {
    fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, KvError> {
        (**self).get(key)
    }

    fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), KvError> {
        (**self).set(key, value)
    }
}

#[derive(thiserror::Error, Debug)]
pub enum KvError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
}

impl From<KvError> for liftplan_domain::StorageError {
    fn from(value: KvError) -> Self {
        liftplan_domain::StorageError::Other(Box::new(value))
    }
}
