//! Name-based exclusion for scanning

use regex::{Regex, RegexBuilder};

use crate::error::ScanError;

enum NameMatcher {
    /// Case-insensitive, anchored at both ends.
    Regex(Regex),
    /// Fallback for patterns that fail to compile. Case-sensitive containment.
    Substring(String),
}

impl NameMatcher {
    fn matches(&self, name: &str) -> bool {
        match self {
            NameMatcher::Regex(re) => re.is_match(name),
            NameMatcher::Substring(s) => name.contains(s.as_str()),
        }
    }
}

/// Compiled set of exclude patterns, tested against base names.
pub struct ExcludeFilter {
    matchers: Vec<NameMatcher>,
    /// (pattern, compile error) for every pattern that fell back to substring
    rejected: Vec<(String, String)>,
}

impl ExcludeFilter {
    /// Compile `patterns`. Invalid regular expressions degrade to substring
    /// matching and are kept for [`ExcludeFilter::diagnostics`].
    pub fn new(patterns: &[String]) -> Self {
        let mut matchers = Vec::with_capacity(patterns.len());
        let mut rejected = Vec::new();

        for pattern in patterns {
            // Validate the pattern on its own; wrapping can hide unbalanced groups
            match compile(pattern).and_then(|_| compile(&format!("^(?:{})$", pattern))) {
                Ok(re) => matchers.push(NameMatcher::Regex(re)),
                Err(e) => {
                    let reason = first_line(&e.to_string()).to_string();
                    log::warn!(
                        "invalid exclude pattern {:?} ({}), matching as substring",
                        pattern,
                        reason
                    );
                    rejected.push((pattern.clone(), reason));
                    matchers.push(NameMatcher::Substring(pattern.clone()));
                }
            }
        }

        Self { matchers, rejected }
    }

    /// One `PatternInvalid` per pattern that fell back to substring matching.
    pub fn diagnostics(&self) -> Vec<ScanError> {
        self.rejected
            .iter()
            .map(|(pattern, reason)| ScanError::PatternInvalid {
                pattern: pattern.clone(),
                reason: reason.clone(),
            })
            .collect()
    }

    /// True if `name` matches any pattern.
    pub fn is_excluded(&self, name: &str) -> bool {
        self.matchers.iter().any(|m| m.matches(name))
    }
}

fn compile(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern).case_insensitive(true).build()
}

fn first_line(s: &str) -> &str {
    s.lines().find(|l| !l.trim().is_empty()).unwrap_or(s).trim()
}
