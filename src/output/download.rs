//! Downloadable text attachment of a rendered tree

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::tree::ScanResult;

pub const CONTENT_TYPE: &str = "text/plain";

/// A rendered tree packaged as a file attachment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub filename: String,
    pub content: String,
}

impl Download {
    /// Package `result`, naming the file after the current time.
    pub fn new(result: &ScanResult) -> Self {
        Self::at(result, Utc::now())
    }

    pub fn at(result: &ScanResult, timestamp: DateTime<Utc>) -> Self {
        Self {
            filename: filename_for(timestamp),
            content: result.render(),
        }
    }

    pub fn content_type(&self) -> &'static str {
        CONTENT_TYPE
    }

    pub fn content_disposition(&self) -> String {
        format!("attachment; filename={}", self.filename)
    }

    /// Write the attachment into `dir`, returning the file's path.
    pub fn write_to(&self, dir: &Path) -> io::Result<PathBuf> {
        fs::create_dir_all(dir)?;
        let path = dir.join(&self.filename);
        fs::write(&path, &self.content)?;
        log::info!(
            "wrote {} ({}, {} bytes)",
            path.display(),
            self.content_type(),
            self.content.len()
        );
        Ok(path)
    }
}

/// `file_tree_<unix seconds>.txt`
pub fn filename_for(timestamp: DateTime<Utc>) -> String {
    format!("file_tree_{}.txt", timestamp.timestamp())
}
