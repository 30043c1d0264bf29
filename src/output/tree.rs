//! Tree formatter for scan listings
//!
//! This module provides `TreeFormatter`, which turns the flat pre-order
//! listing produced by the scanner back into a nested text diagram, either
//! as a plain string or printed to stdout with colors.

use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::{Entry, format_size};

use super::config::OutputConfig;
use super::utils::{assert_preorder, column, connector, icon, last_sibling_flags};

/// Text rendered for an empty listing.
pub const NO_FILES: &str = "No files found.";

/// One rendered row, split so the printer can color each part.
struct Row<'a> {
    /// Column glyphs plus the branch connector
    prefix: String,
    entry: &'a Entry,
    size: Option<String>,
}

/// Formatter for scan listings.
pub struct TreeFormatter {
    config: OutputConfig,
}

impl TreeFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    fn rows<'a>(&self, entries: &'a [Entry]) -> Vec<Row<'a>> {
        assert_preorder(entries);

        let is_last = last_sibling_flags(entries);
        // last_at_depth[d]: whether the most recent entry at depth d was last
        let mut last_at_depth: Vec<bool> = Vec::new();
        let mut rows = Vec::with_capacity(entries.len());

        for (entry, &last) in entries.iter().zip(&is_last) {
            let size = self
                .config
                .show_size
                .then(|| format_size(entry.size, self.config.human_readable));

            if entry.depth == 0 {
                rows.push(Row {
                    prefix: String::new(),
                    entry,
                    size,
                });
                continue;
            }

            if last_at_depth.len() <= entry.depth {
                last_at_depth.resize(entry.depth + 1, false);
            }
            last_at_depth[entry.depth] = last;

            let mut prefix = String::new();
            for &ancestor_last in &last_at_depth[1..entry.depth] {
                prefix.push_str(column(ancestor_last));
            }
            prefix.push_str(connector(last));

            rows.push(Row {
                prefix,
                entry,
                size,
            });
        }

        rows
    }

    /// Render `entries` as a text block, one line per entry.
    pub fn format(&self, entries: &[Entry]) -> String {
        if entries.is_empty() {
            return NO_FILES.to_string();
        }

        let mut output = String::new();
        for row in self.rows(entries) {
            output.push_str(&row.prefix);
            output.push_str(icon(row.entry.is_directory));
            output.push_str(&row.entry.name);
            if let Some(size) = &row.size {
                output.push_str(" (");
                output.push_str(size);
                output.push(')');
            }
            output.push('\n');
        }
        output
    }

    /// Print `entries` to stdout, coloring directory names and sizes.
    pub fn print(&self, entries: &[Entry]) -> io::Result<()> {
        let choice = if self.config.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);

        if entries.is_empty() {
            writeln!(stdout, "{}", NO_FILES)?;
            return Ok(());
        }

        for row in self.rows(entries) {
            write!(stdout, "{}{}", row.prefix, icon(row.entry.is_directory))?;
            if row.entry.is_directory {
                stdout.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
            }
            write!(stdout, "{}", row.entry.name)?;
            stdout.reset()?;

            if let Some(size) = &row.size {
                write!(stdout, " (")?;
                stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
                write!(stdout, "{}", size)?;
                stdout.reset()?;
                write!(stdout, ")")?;
            }
            writeln!(stdout)?;
        }
        Ok(())
    }
}

/// Render `entries` with the display settings in `options`.
pub fn render(entries: &[Entry], options: &crate::tree::ScanOptions) -> String {
    TreeFormatter::new(OutputConfig::from(options)).format(entries)
}
