//! Save/load persistence
//!
//! Features:
//! - One directory per profile, one file per record
//! - JSON for structured records, plain text for single values
//! - Atomic replace (write tmp, then rename over the old file)
//! - A missing file is `Ok(None)`, not an error

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors from reading or writing persisted state
#[derive(Error, Debug)]
pub enum PersistError {
    /// Filesystem failure
    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// File exists but is not valid JSON for the expected record
    #[error("Failed to parse '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Record could not be encoded
    #[error("Failed to encode record: {0}")]
    Encode(#[from] serde_json::Error),

    /// Text record does not hold a number
    #[error("Invalid number in '{}': {value:?}", .path.display())]
    InvalidNumber { path: PathBuf, value: String },
}

/// Result type alias for persistence operations
pub type Result<T> = std::result::Result<T, PersistError>;

/// Directory-backed key/file store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_of(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    /// Read a text record; `None` when it has never been written
    pub fn load_text(&self, name: &str) -> Result<Option<String>> {
        let path = self.path_of(name);
        match fs::read_to_string(&path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(PersistError::Io { path, source }),
        }
    }

    /// Replace a text record
    pub fn save_text(&self, name: &str, text: &str) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|source| PersistError::Io {
            path: self.dir.clone(),
            source,
        })?;

        let path = self.path_of(name);
        let tmp = self.path_of(&format!("{name}.tmp"));
        fs::write(&tmp, text).map_err(|source| PersistError::Io {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &path).map_err(|source| PersistError::Io { path, source })
    }

    pub fn load_json<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>> {
        let Some(text) = self.load_text(name)? else {
            return Ok(None);
        };
        serde_json::from_str(&text)
            .map(Some)
            .map_err(|source| PersistError::Parse {
                path: self.path_of(name),
                source,
            })
    }

    pub fn save_json<T: Serialize>(&self, name: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        self.save_text(name, &json)
    }

    /// Read a text record holding one unsigned integer
    pub fn load_u64(&self, name: &str) -> Result<Option<u64>> {
        let Some(text) = self.load_text(name)? else {
            return Ok(None);
        };
        let trimmed = text.trim();
        trimmed
            .parse()
            .map(Some)
            .map_err(|_| PersistError::InvalidNumber {
                path: self.path_of(name),
                value: trimmed.to_string(),
            })
    }
}
