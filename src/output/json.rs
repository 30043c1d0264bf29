//! JSON wire shapes for scan and render results

use std::io;
use std::path::PathBuf;

use serde::Serialize;

use crate::tree::{ScanResult, format_size};

pub const NO_SCAN_DATA: &str = "No scan data available. Please scan a directory first.";

/// One entry as exposed on the wire.
#[derive(Debug, Clone, Serialize)]
pub struct EntrySummary {
    pub name: String,
    pub is_directory: bool,
    pub depth: usize,
    pub size: u64,
    pub size_formatted: String,
}

/// Scan result wire shape.
#[derive(Debug, Clone, Serialize)]
pub struct ScanResponse {
    pub success: bool,
    pub message: String,
    pub path: PathBuf,
    pub file_count: usize,
    pub files: Vec<EntrySummary>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl From<&ScanResult> for ScanResponse {
    fn from(result: &ScanResult) -> Self {
        let human_readable = result.options.human_readable;
        let (success, message) = match result.root_error() {
            Some(e) => (false, e.to_string()),
            None => (true, "Directory scanned successfully".to_string()),
        };

        Self {
            success,
            message,
            path: result.path.clone(),
            file_count: result.file_count(),
            files: result
                .entries
                .iter()
                .map(|e| EntrySummary {
                    name: e.name.clone(),
                    is_directory: e.is_directory,
                    depth: e.depth,
                    size: e.size,
                    size_formatted: format_size(e.size, human_readable),
                })
                .collect(),
            warnings: result.warnings().map(|w| w.to_string()).collect(),
        }
    }
}

/// Render result wire shape.
#[derive(Debug, Clone, Serialize)]
pub struct TreeResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub tree_text: String,
    pub path: PathBuf,
    pub file_count: usize,
}

impl From<&ScanResult> for TreeResponse {
    fn from(result: &ScanResult) -> Self {
        if result.is_empty() {
            return Self {
                success: false,
                message: Some(NO_SCAN_DATA.to_string()),
                tree_text: String::new(),
                path: result.path.clone(),
                file_count: 0,
            };
        }

        Self {
            success: true,
            message: None,
            tree_text: result.render(),
            path: result.path.clone(),
            file_count: result.file_count(),
        }
    }
}

/// Print a value as pretty-printed JSON to stdout.
pub fn print_json<T: Serialize>(value: &T) -> io::Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
    println!("{}", json);
    Ok(())
}
