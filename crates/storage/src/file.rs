use std::{fs, io::Write, path::PathBuf};

use serde::{Serialize, de::DeserializeOwned};

use crate::{Kv, KvError};

/// Key-value store with one JSON file per key. Writes go to a temporary
/// file in the same directory followed by a rename, so a stored value is
/// never observed half-written.
pub struct FileKv {
    dir: PathBuf,
}

impl FileKv {
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, KvError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Kv for FileKv {
    fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, KvError> {
        match fs::read(self.path(key)) {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), KvError> {
        let mut file = tempfile::NamedTempFile::new_in(&self.dir)?;
        serde_json::to_writer_pretty(&mut file, value)?;
        file.flush()?;
        file.persist(self.path(key)).map_err(|err| err.error)?;
        Ok(())
    }
}
