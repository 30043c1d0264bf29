//! Configuration types for scanning

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Options controlling a scan and how its result is rendered.
///
/// This is also the options wire shape: every field is optional and missing
/// fields take the defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanOptions {
    pub show_size: bool,
    /// Scale sizes to B/KB/MB/GB/TB instead of printing raw byte counts
    pub human_readable: bool,
    /// `None` = unlimited. Any negative wire value also means unlimited.
    #[serde(
        serialize_with = "serialize_max_depth",
        deserialize_with = "deserialize_max_depth"
    )]
    pub max_depth: Option<usize>,
    /// Case-insensitive regular expressions matched against the full base name
    #[serde(deserialize_with = "deserialize_patterns")]
    pub exclude_patterns: Vec<String>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            show_size: false,
            human_readable: true,
            max_depth: None,
            exclude_patterns: Vec::new(),
        }
    }
}

impl ScanOptions {
    /// Parse the options wire shape.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    pub fn with_exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude_patterns.push(pattern.into());
        self
    }

    pub fn with_size(mut self, human_readable: bool) -> Self {
        self.show_size = true;
        self.human_readable = human_readable;
        self
    }
}

fn serialize_max_depth<S: Serializer>(depth: &Option<usize>, s: S) -> Result<S::Ok, S::Error> {
    match depth {
        Some(d) => s.serialize_i64(*d as i64),
        None => s.serialize_i64(-1),
    }
}

fn deserialize_max_depth<'de, D: Deserializer<'de>>(d: D) -> Result<Option<usize>, D::Error> {
    let raw: Option<i64> = Option::deserialize(d)?;
    Ok(raw.and_then(|v| usize::try_from(v).ok()))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

fn deserialize_patterns<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<String>, D::Error> {
    let raw: Option<OneOrMany> = Option::deserialize(d)?;
    Ok(match raw {
        None => Vec::new(),
        Some(OneOrMany::One(p)) if p.is_empty() => Vec::new(),
        Some(OneOrMany::One(p)) => vec![p],
        Some(OneOrMany::Many(ps)) => ps,
    })
}
