//! Shared utility functions for scanning

use std::io;
use std::path::{Path, PathBuf};

use crate::error::ScanError;

const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Format a size in bytes.
///
/// Human-readable sizes are scaled by 1024 up to TB and always carry two
/// decimals (`1.50 KB`, `0.00 B`). Otherwise the raw count is printed (`1536 B`).
pub fn format_size(bytes: u64, human_readable: bool) -> String {
    if !human_readable {
        return format!("{} B", bytes);
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.2} {}", value, UNITS[unit])
}

/// Resolve a scan root to its canonical form, checking it is a directory.
pub fn validate_root(path: &Path) -> Result<PathBuf, ScanError> {
    let raw = path.as_os_str();
    if raw.is_empty() {
        return Err(invalid(path, "empty path"));
    }
    if raw.as_encoded_bytes().contains(&0) {
        return Err(invalid(path, "path contains a NUL byte"));
    }

    let canonical = match path.canonicalize() {
        Ok(p) => p,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(ScanError::NotFound(path.to_path_buf()));
        }
        Err(e) => return Err(invalid(path, &e.to_string())),
    };

    if !canonical.is_dir() {
        return Err(ScanError::NotADirectory(canonical));
    }
    Ok(canonical)
}

fn invalid(path: &Path, reason: &str) -> ScanError {
    ScanError::InvalidPath {
        path: path.to_string_lossy().to_string(),
        reason: reason.to_string(),
    }
}
