//! Diagnostics produced while scanning a directory tree

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    // Root
    #[error("path does not exist: {}", .0.display())]
    NotFound(PathBuf),

    #[error("path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("invalid path {path:?}: {reason}")]
    InvalidPath { path: String, reason: String },

    // Per entry
    #[error("cannot access {}: {source}", .path.display())]
    EntryAccessDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("entry vanished during scan: {}", .path.display())]
    EntryVanished { path: PathBuf },

    #[error("I/O error on {}: {source}", .path.display())]
    EntryIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    // Filters
    #[error("invalid exclude pattern {pattern:?} ({reason}), matching as substring")]
    PatternInvalid { pattern: String, reason: String },
}

impl ScanError {
    /// Classify an I/O failure on a single entry.
    pub fn from_entry_io(path: &Path, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => Self::EntryVanished {
                path: path.to_path_buf(),
            },
            io::ErrorKind::PermissionDenied => Self::EntryAccessDenied {
                path: path.to_path_buf(),
                source,
            },
            _ => Self::EntryIo {
                path: path.to_path_buf(),
                source,
            },
        }
    }

    /// The filesystem path this diagnostic refers to, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::NotFound(p)
            | Self::NotADirectory(p)
            | Self::EntryVanished { path: p }
            | Self::EntryAccessDenied { path: p, .. }
            | Self::EntryIo { path: p, .. } => Some(p),
            Self::InvalidPath { .. } | Self::PatternInvalid { .. } => None,
        }
    }

    /// Root-level errors abort the scan; everything else is skipped over.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::NotFound(_) | Self::NotADirectory(_) | Self::InvalidPath { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_io_classification() {
        let path = Path::new("/tmp/x");

        let err = ScanError::from_entry_io(path, io::Error::from(io::ErrorKind::NotFound));
        assert!(matches!(err, ScanError::EntryVanished { .. }));

        let err = ScanError::from_entry_io(path, io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(matches!(err, ScanError::EntryAccessDenied { .. }));

        let err = ScanError::from_entry_io(path, io::Error::other("disk on fire"));
        assert!(matches!(err, ScanError::EntryIo { .. }));
        assert_eq!(err.path(), Some(path));
    }

    #[test]
    fn test_fatal_split() {
        assert!(ScanError::NotFound(PathBuf::from("/nope")).is_fatal());
        assert!(ScanError::NotADirectory(PathBuf::from("/etc/hosts")).is_fatal());
        assert!(
            ScanError::InvalidPath {
                path: String::new(),
                reason: "empty".to_string()
            }
            .is_fatal()
        );
        assert!(
            !ScanError::EntryVanished {
                path: PathBuf::from("/tmp/gone")
            }
            .is_fatal()
        );
        assert!(
            !ScanError::PatternInvalid {
                pattern: "(".to_string(),
                reason: "unclosed group".to_string()
            }
            .is_fatal()
        );
    }

    #[test]
    fn test_messages_name_the_path() {
        let err = ScanError::NotFound(PathBuf::from("/no/such/dir"));
        assert_eq!(err.to_string(), "path does not exist: /no/such/dir");
    }
}
