//! The outcome of one scan

use std::path::PathBuf;
use std::time::Duration;

use crate::error::ScanError;
use crate::output::{OutputConfig, TreeFormatter};

use super::config::ScanOptions;
use super::entry::Entry;

/// Everything one scan produced, together with the options that produced it.
///
/// Owned by the caller and handed to rendering or download explicitly; a
/// later scan never overwrites an earlier result.
#[derive(Debug)]
pub struct ScanResult {
    /// Canonical root when it resolved, otherwise the path as given
    pub path: PathBuf,
    pub entries: Vec<Entry>,
    pub options: ScanOptions,
    pub diagnostics: Vec<ScanError>,
    pub elapsed: Duration,
}

impl ScanResult {
    pub fn new(
        path: PathBuf,
        entries: Vec<Entry>,
        options: ScanOptions,
        diagnostics: Vec<ScanError>,
        elapsed: Duration,
    ) -> Self {
        Self {
            path,
            entries,
            options,
            diagnostics,
            elapsed,
        }
    }

    /// Number of emitted entries, directories included.
    pub fn file_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The error that aborted the scan, if it was aborted.
    pub fn root_error(&self) -> Option<&ScanError> {
        self.diagnostics.iter().find(|d| d.is_fatal())
    }

    /// Non-fatal diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &ScanError> {
        self.diagnostics.iter().filter(|d| !d.is_fatal())
    }

    /// Render with the options this scan was made with.
    pub fn render(&self) -> String {
        TreeFormatter::new(OutputConfig::from(&self.options)).format(&self.entries)
    }
}
