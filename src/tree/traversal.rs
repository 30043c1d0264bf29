//! Reading and ordering the children of one directory.

use std::cmp::Ordering;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::error::ScanError;

use super::filter::ExcludeFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildKind {
    Directory,
    File,
    /// Never followed. Records whether the target is a directory.
    Symlink { target_is_dir: bool },
    /// FIFOs, sockets, devices.
    Other,
}

/// A directory child that survived exclusion and could be stat'ed.
#[derive(Debug)]
pub struct Child {
    pub name: String,
    os_name: OsString,
    pub path: PathBuf,
    pub kind: ChildKind,
    pub len: u64,
    pub modified: Option<SystemTime>,
}

impl Child {
    pub fn is_dir(&self) -> bool {
        match self.kind {
            ChildKind::Directory => true,
            ChildKind::Symlink { target_is_dir } => target_is_dir,
            ChildKind::File | ChildKind::Other => false,
        }
    }
}

/// Directories before everything else, then raw file-name byte order.
fn child_order(a: &Child, b: &Child) -> Ordering {
    b.is_dir()
        .cmp(&a.is_dir())
        .then_with(|| a.os_name.cmp(&b.os_name))
}

/// List, filter and sort the children of `dir`.
///
/// The directory handle is closed before this returns. Children that cannot
/// be stat'ed are pushed onto `diagnostics` and left out; an `Err` means
/// `dir` itself could not be listed.
pub fn read_children(
    dir: &Path,
    filter: &ExcludeFilter,
    diagnostics: &mut Vec<ScanError>,
) -> std::io::Result<Vec<Child>> {
    let mut children = Vec::new();

    for dir_entry in fs::read_dir(dir)? {
        let dir_entry = match dir_entry {
            Ok(e) => e,
            Err(e) => {
                report(diagnostics, ScanError::from_entry_io(dir, e));
                continue;
            }
        };

        let os_name = dir_entry.file_name();
        let name = os_name.to_string_lossy().to_string();
        if filter.is_excluded(&name) {
            continue;
        }

        let path = dir_entry.path();
        match stat_child(&path) {
            Ok((kind, len, modified)) => children.push(Child {
                name,
                os_name,
                path,
                kind,
                len,
                modified,
            }),
            Err(e) => report(diagnostics, ScanError::from_entry_io(&path, e)),
        }
    }

    children.sort_by(child_order);
    Ok(children)
}

/// Log a per-entry diagnostic and keep it for the caller.
pub fn report(diagnostics: &mut Vec<ScanError>, err: ScanError) {
    log::warn!("{}", err);
    diagnostics.push(err);
}

fn stat_child(path: &Path) -> std::io::Result<(ChildKind, u64, Option<SystemTime>)> {
    let meta = fs::symlink_metadata(path)?;
    let modified = meta.modified().ok();
    let file_type = meta.file_type();

    if file_type.is_symlink() {
        // A dangling link fails here with NotFound
        let target = fs::metadata(path)?;
        return Ok((
            ChildKind::Symlink {
                target_is_dir: target.is_dir(),
            },
            0,
            modified,
        ));
    }

    let kind = if file_type.is_dir() {
        ChildKind::Directory
    } else if file_type.is_file() {
        ChildKind::File
    } else {
        ChildKind::Other
    };
    let len = if kind == ChildKind::Directory { 0 } else { meta.len() };
    Ok((kind, len, modified))
}
