use std::{collections::HashMap, sync::Mutex};

use serde::{Serialize, de::DeserializeOwned};

use crate::{Kv, KvError};

/// In-memory key-value store for tests.
#[derive(Default)]
pub struct MemoryKv {
    entries: Mutex<HashMap<String, serde_json::Value>>,
}

impl MemoryKv {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Kv for MemoryKv {
    fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, KvError> {
        let entries = self.entries.lock().unwrap();
        match entries.get(key) {
            Some(value) => Ok(Some(serde_json::from_value(value.clone())?)),
            None => Ok(None),
        }
    }

    fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), KvError> {
        let value = serde_json::to_value(value)?;
        self.entries.lock().unwrap().insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_get_absent_key() {
        let kv = MemoryKv::new();
        assert_eq!(kv.get::<Vec<String>>("missing").unwrap(), None);
    }

    #[test]
    fn test_set_and_get() {
        let kv = MemoryKv::new();
        kv.set("key", &vec!["a".to_string(), "b".to_string()]).unwrap();
        assert_eq!(
            kv.get::<Vec<String>>("key").unwrap(),
            Some(vec!["a".to_string(), "b".to_string()])
        );
    }

    #[test]
    fn test_set_replaces_value() {
        let kv = MemoryKv::new();
        kv.set("key", &1).unwrap();
        kv.set("key", &2).unwrap();
        assert_eq!(kv.get::<i32>("key").unwrap(), Some(2));
    }
}
