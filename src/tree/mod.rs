//! Directory scanning
//!
//! `TreeWalker` walks a root directory depth-first and produces a flat,
//! pre-order list of [`Entry`] values: directories before files at every
//! level, each group sorted by name, every directory immediately followed by
//! its own contents. Directory sizes cover the whole subtree regardless of
//! the depth limit.

mod config;
mod entry;
mod filter;
mod result;
mod traversal;
mod utils;
mod walker;

// Re-export public types
pub use config::ScanOptions;
pub use entry::Entry;
pub use filter::ExcludeFilter;
pub use result::ScanResult;
pub use utils::{format_size, validate_root};
pub use walker::{TreeWalker, scan};
