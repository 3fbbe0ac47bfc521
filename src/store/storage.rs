//! Storage medium behind each table: a whole-file blob that is read and
//! rewritten in full.

use crate::errors::AppResult;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub trait Storage {
    /// Last fully written contents, or `None` if nothing was ever written.
    fn read(&self) -> AppResult<Option<Vec<u8>>>;

    /// Replace the stored contents.
    fn write(&mut self, bytes: &[u8]) -> AppResult<()>;

    /// Human readable location, used in messages.
    fn location(&self) -> String;
}

/// A table kept in a file on disk.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Storage for FileStorage {
    fn read(&self) -> AppResult<Option<Vec<u8>>> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&mut self, bytes: &[u8]) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, bytes)?;
        tracing::debug!(path = %self.path.display(), bytes = bytes.len(), "table written");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// A table kept in memory; starts empty unless seeded.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    data: Option<Vec<u8>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(contents: &str) -> Self {
        Self {
            data: Some(contents.as_bytes().to_vec()),
        }
    }

    pub fn contents(&self) -> Option<String> {
        self.data
            .as_ref()
            .map(|b| String::from_utf8_lossy(b).into_owned())
    }
}

impl Storage for MemoryStorage {
    fn read(&self) -> AppResult<Option<Vec<u8>>> {
        Ok(self.data.clone())
    }

    fn write(&mut self, bytes: &[u8]) -> AppResult<()> {
        self.data = Some(bytes.to_vec());
        Ok(())
    }

    fn location(&self) -> String {
        "<memory>".to_string()
    }
}
