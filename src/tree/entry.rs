//! Scan entry type

use std::path::PathBuf;
use std::time::SystemTime;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// One file or directory discovered during a scan.
///
/// Entries come out of the scanner in pre-order: a directory is immediately
/// followed by its own contents, one level deeper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub name: String,
    /// Used to re-access the entry, never for ordering.
    pub full_path: PathBuf,
    pub is_directory: bool,
    /// File length, or for directories the sum of all regular files beneath.
    pub size: u64,
    /// Distance from the scan root; first-level children are at depth 1.
    pub depth: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime<Utc>>,
}

impl Entry {
    pub fn file(name: impl Into<String>, depth: usize, size: u64) -> Self {
        let name = name.into();
        Self {
            full_path: PathBuf::from(&name),
            name,
            is_directory: false,
            size,
            depth,
            last_modified: None,
        }
    }

    pub fn dir(name: impl Into<String>, depth: usize, size: u64) -> Self {
        Self {
            is_directory: true,
            ..Self::file(name, depth, size)
        }
    }

    pub(crate) fn with_modified(mut self, modified: Option<SystemTime>) -> Self {
        self.last_modified = modified.map(DateTime::<Utc>::from);
        self
    }

    pub(crate) fn with_path(mut self, path: PathBuf) -> Self {
        self.full_path = path;
        self
    }
}
