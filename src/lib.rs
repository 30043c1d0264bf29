//! dirtree - Scan a directory and draw it as a text tree, with optional sizes

pub mod error;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::ScanError;
pub use output::{
    Download, OutputConfig, ScanResponse, TreeFormatter, TreeResponse, print_json, render,
};
pub use tree::{Entry, ScanOptions, ScanResult, TreeWalker, format_size, scan};
