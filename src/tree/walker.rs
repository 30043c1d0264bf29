//! TreeWalker - depth-first scan producing a flat pre-order listing

use std::path::Path;
use std::time::Instant;

use crate::error::ScanError;

use super::config::ScanOptions;
use super::entry::Entry;
use super::filter::ExcludeFilter;
use super::result::ScanResult;
use super::traversal::{ChildKind, read_children, report};
use super::utils::validate_root;

/// Accumulated output of one walk.
struct WalkState {
    entries: Vec<Entry>,
    diagnostics: Vec<ScanError>,
}

/// Single-threaded directory scanner.
///
/// Every directory below the root is visited once. Directory sizes are
/// summed bottom-up on the way back out of the recursion, so depth limiting
/// only affects what is emitted, never what is counted.
pub struct TreeWalker {
    options: ScanOptions,
    filter: ExcludeFilter,
}

impl TreeWalker {
    pub fn new(options: ScanOptions) -> Self {
        let filter = ExcludeFilter::new(&options.exclude_patterns);
        Self { options, filter }
    }

    /// Scan `root`. Never fails outright: root-level problems leave the
    /// entry list empty and show up in the diagnostics.
    pub fn scan(&self, root: &Path) -> ScanResult {
        let started = Instant::now();
        let mut state = WalkState {
            entries: Vec::new(),
            diagnostics: self.filter.diagnostics(),
        };

        let root_path = match validate_root(root) {
            Ok(p) => p,
            Err(e) => {
                log::error!("{}", e);
                state.diagnostics.push(e);
                return ScanResult::new(
                    root.to_path_buf(),
                    Vec::new(),
                    self.options.clone(),
                    state.diagnostics,
                    started.elapsed(),
                );
            }
        };

        log::debug!(
            "scanning {} (max depth {:?}, {} exclude patterns)",
            root_path.display(),
            self.options.max_depth,
            self.options.exclude_patterns.len()
        );

        let total = self.walk_dir(&root_path, 0, &mut state);

        let elapsed = started.elapsed();
        log::info!(
            "scanned {}: {} entries, {} bytes, {} diagnostics in {}",
            root_path.display(),
            state.entries.len(),
            total,
            state.diagnostics.len(),
            humantime::format_duration(elapsed)
        );

        ScanResult::new(
            root_path,
            state.entries,
            self.options.clone(),
            state.diagnostics,
            elapsed,
        )
    }

    fn emits(&self, depth: usize) -> bool {
        self.options.max_depth.is_none_or(|max| depth <= max)
    }

    /// Walk the contents of `dir` (itself at `depth`) and return the total
    /// size of regular files beneath it.
    fn walk_dir(&self, dir: &Path, depth: usize, state: &mut WalkState) -> u64 {
        let children = match read_children(dir, &self.filter, &mut state.diagnostics) {
            Ok(c) => c,
            Err(e) => {
                report(&mut state.diagnostics, ScanError::from_entry_io(dir, e));
                return 0;
            }
        };

        let child_depth = depth + 1;
        let emit = self.emits(child_depth);
        let mut total = 0u64;

        for child in children {
            let entry = emit.then(|| {
                Entry::file(child.name.clone(), child_depth, child.len)
                    .with_path(child.path.clone())
                    .with_modified(child.modified)
            });

            match child.kind {
                ChildKind::Directory => {
                    // Reserve the slot so the directory precedes its contents
                    let slot = entry.map(|e| {
                        state.entries.push(Entry {
                            is_directory: true,
                            ..e
                        });
                        state.entries.len() - 1
                    });
                    let size = self.walk_dir(&child.path, child_depth, state);
                    if let Some(i) = slot {
                        state.entries[i].size = size;
                    }
                    total += size;
                }
                ChildKind::File => {
                    total += child.len;
                    state.entries.extend(entry);
                }
                ChildKind::Symlink { target_is_dir } => {
                    state.entries.extend(entry.map(|e| Entry {
                        is_directory: target_is_dir,
                        ..e
                    }));
                }
                ChildKind::Other => state.entries.extend(entry),
            }
        }

        total
    }
}

/// Scan `root` with `options`.
pub fn scan(root: impl AsRef<Path>, options: &ScanOptions) -> ScanResult {
    TreeWalker::new(options.clone()).scan(root.as_ref())
}
