//! Shared utility functions for output formatting

use crate::tree::Entry;

pub const BRANCH: &str = "├── ";
pub const LAST_BRANCH: &str = "└── ";
pub const CONTINUATION: &str = "│   ";
pub const BLANK: &str = "    ";

pub const DIR_ICON: &str = "📁 ";
pub const FILE_ICON: &str = "📄 ";

/// Branch glyph placed in front of an entry.
pub fn connector(is_last: bool) -> &'static str {
    if is_last { LAST_BRANCH } else { BRANCH }
}

/// Column glyph under an ancestor: a bar while that ancestor still has
/// siblings to come, blank once it was the last.
pub fn column(ancestor_is_last: bool) -> &'static str {
    if ancestor_is_last { BLANK } else { CONTINUATION }
}

pub fn icon(is_directory: bool) -> &'static str {
    if is_directory { DIR_ICON } else { FILE_ICON }
}

/// For every entry, whether it is the last of its siblings.
///
/// An entry is last unless a later entry at the same depth appears before
/// any shallower one; deeper entries in between are its own (or a sibling's)
/// descendants and are skipped over. Computed in one backward pass.
pub fn last_sibling_flags(entries: &[Entry]) -> Vec<bool> {
    let mut flags = vec![true; entries.len()];
    // pending[d]: a later entry at depth d exists with nothing shallower in between
    let mut pending: Vec<bool> = Vec::new();

    for (i, entry) in entries.iter().enumerate().rev() {
        let d = entry.depth;
        if pending.len() <= d {
            pending.resize(d + 1, false);
        }
        flags[i] = !pending[d];
        pending.truncate(d + 1);
        pending[d] = true;
    }

    flags
}

/// Panic if `entries` is not a pre-order listing.
///
/// Going down, depth may only grow by one, and only below a directory.
pub fn assert_preorder(entries: &[Entry]) {
    for pair in entries.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        if next.depth > prev.depth {
            assert!(
                next.depth == prev.depth + 1,
                "entry {:?} at depth {} follows {:?} at depth {}: depth may only grow by one",
                next.name,
                next.depth,
                prev.name,
                prev.depth
            );
            assert!(
                prev.is_directory,
                "entry {:?} is nested under file {:?}",
                next.name,
                prev.name
            );
        }
    }
}
