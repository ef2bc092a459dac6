use once_cell::sync::Lazy;
/// Unicode confusable mapping table, embedded at build time from the data
/// under `assets/data/` or loaded from a persisted JSON document.
use std::collections::{HashMap, HashSet};
use std::path::Path;
use thiserror::Error;

use crate::zero_width;

// Include generated confusable table
include!(concat!(env!("OUT_DIR"), "/confusables_gen.rs"));

/// Failure to construct a table from a persisted document. Fatal at
/// initialization; engine operations themselves never fail.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("failed to read mapping table: {0}")]
    Io(#[from] std::io::Error),
    #[error("mapping table is not a flat JSON object of strings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("mapping key {0:?} is not a single character")]
    BadKey(String),
}

/// Immutable map from a confusable character to the replacement it resembles,
/// plus the set of zero-width characters to strip. Built once, read-only
/// afterwards; safe to share across threads.
#[derive(Debug)]
pub struct ConfusablesTable {
    map: HashMap<char, String>,
    zero_width: HashSet<char>,
}

static EMBEDDED: Lazy<ConfusablesTable> = Lazy::new(|| {
    let mut map = HashMap::with_capacity(CONFUSABLE_COUNT);
    for &(src, replacement) in CONFUSABLE_TABLE {
        if let Some(src) = char::from_u32(src) {
            map.insert(src, replacement.to_string());
        }
    }
    ConfusablesTable::from_map(map)
});

impl ConfusablesTable {
    /// The table compiled in from `assets/data/confusables.txt`.
    pub fn embedded() -> &'static ConfusablesTable {
        &EMBEDDED
    }

    fn from_map(map: HashMap<char, String>) -> Self {
        Self {
            map,
            zero_width: zero_width::all().iter().copied().collect(),
        }
    }

    /// Build a table from explicit pairs. Useful for substituting a small
    /// table in tests.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (char, String)>,
    {
        Self::from_map(pairs.into_iter().collect())
    }

    /// Load a persisted table: a flat JSON object of single-character keys
    /// to replacement strings, as produced by the table builder.
    pub fn load(path: &Path) -> Result<Self, TableError> {
        let document = std::fs::read_to_string(path)?;
        Self::from_json(&document)
    }

    /// Parse a persisted JSON document into a table.
    pub fn from_json(document: &str) -> Result<Self, TableError> {
        let raw: HashMap<String, String> = serde_json::from_str(document)?;
        let mut map = HashMap::with_capacity(raw.len());
        for (key, replacement) in raw {
            let mut scalars = key.chars();
            match (scalars.next(), scalars.next()) {
                (Some(src), None) => {
                    map.insert(src, replacement);
                }
                _ => return Err(TableError::BadKey(key)),
            }
        }
        Ok(Self::from_map(map))
    }

    /// The replacement a confusable character resembles, if any. Absence
    /// means the character is already canonical.
    pub fn lookup(&self, ch: char) -> Option<&str> {
        self.map.get(&ch).map(String::as_str)
    }

    pub fn is_zero_width(&self, ch: char) -> bool {
        self.zero_width.contains(&ch)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
