//! Output configuration types

use crate::tree::ScanOptions;

/// Configuration for tree rendering.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub show_size: bool,
    pub human_readable: bool,
    /// Only affects terminal printing; formatted text never carries colour codes
    pub use_color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            show_size: false,
            human_readable: true,
            use_color: true,
        }
    }
}

impl From<&ScanOptions> for OutputConfig {
    fn from(options: &ScanOptions) -> Self {
        Self {
            show_size: options.show_size,
            human_readable: options.human_readable,
            ..Default::default()
        }
    }
}
