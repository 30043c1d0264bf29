//! Tree formatting and result shapes
//!
//! # Module Structure
//!
//! - `config` - Output configuration types
//! - `utils` - Branch glyphs, last-sibling detection, listing checks
//! - `tree` - Formatter turning a pre-order listing into a text tree
//! - `json` - Wire shapes for scan and render results
//! - `download` - Rendered tree packaged as a text attachment

mod config;
mod download;
mod json;
mod tree;
mod utils;

// Re-export public types and functions
pub use config::OutputConfig;
pub use download::{CONTENT_TYPE, Download, filename_for};
pub use json::{EntrySummary, NO_SCAN_DATA, ScanResponse, TreeResponse, print_json};
pub use tree::{NO_FILES, TreeFormatter, render};

pub use utils::{assert_preorder, last_sibling_flags};
