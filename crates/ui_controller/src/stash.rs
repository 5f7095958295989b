//! Page-scoped key/value storage that survives a single navigation.

use std::{
    collections::{BTreeMap, HashMap},
    fs,
    path::{Path, PathBuf},
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StashError {
    #[error("stash io failure at '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("stash file '{path}' is not valid json: {source}")]
    Format {
        path: PathBuf,
        source: serde_json::Error,
    },
}

pub trait Stash {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StashError>;
    fn remove(&mut self, key: &str) -> Result<(), StashError>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStash {
    entries: HashMap<String, String>,
}

impl MemoryStash {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Stash for MemoryStash {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StashError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StashError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// JSON-file stash shared by successive invocations of a front-end process.
/// The file is re-read on every access so separate processes see each
/// other's writes.
#[derive(Debug, Clone)]
pub struct FileStash {
    path: PathBuf,
}

impl FileStash {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, StashError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(BTreeMap::new())
            }
            Err(source) => {
                return Err(StashError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        if raw.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&raw).map_err(|source| StashError::Format {
            path: self.path.clone(),
            source,
        })
    }

    fn store(&self, entries: &BTreeMap<String, String>) -> Result<(), StashError> {
        let io_err = |source| StashError::Io {
            path: self.path.clone(),
            source,
        };
        if entries.is_empty() {
            return match fs::remove_file(&self.path) {
                Ok(()) => Ok(()),
                Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
                Err(err) => Err(io_err(err)),
            };
        }
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let raw = serde_json::to_string_pretty(entries).map_err(|source| StashError::Format {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, raw).map_err(io_err)
    }
}

impl Stash for FileStash {
    fn get(&self, key: &str) -> Option<String> {
        match self.load() {
            Ok(entries) => entries.get(key).cloned(),
            Err(err) => {
                tracing::warn!(%err, "stash: unreadable, treating as empty");
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StashError> {
        let mut entries = self.load().unwrap_or_default();
        entries.insert(key.to_string(), value.to_string());
        self.store(&entries)
    }

    fn remove(&mut self, key: &str) -> Result<(), StashError> {
        let mut entries = self.load().unwrap_or_default();
        if entries.remove(key).is_none() {
            return Ok(());
        }
        self.store(&entries)
    }
}

#[cfg(test)]
#[path = "tests/stash_tests.rs"]
mod tests;
