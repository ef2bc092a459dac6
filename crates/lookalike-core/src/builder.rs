//! Offline table builder: turns the Unicode Consortium's published
//! confusables file into the persisted JSON document the engine loads.
//!
//! This runs out-of-band; its failures are its own and never appear in the
//! engine's error model. The fetch and write boundaries are injected so
//! tests never touch the network or the filesystem.

use std::collections::HashMap;
use std::io;

use thiserror::Error;

/// Published source of the confusables data.
pub const CONFUSABLES_URL: &str = "https://unicode.org/Public/security/latest/confusables.txt";

#[derive(Debug, Error)]
pub enum BuilderError {
    #[error("failed to fetch confusables data: {0}")]
    Fetch(#[source] io::Error),
    #[error("confusables data contained no mapping entries")]
    Empty,
    #[error("failed to serialize mapping table: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write mapping table: {0}")]
    Write(#[source] io::Error),
}

/// Decode a whitespace-separated sequence of hex code points into a string.
fn decode_hex_field(field: &str) -> Option<String> {
    let mut decoded = String::new();
    for token in field.split_whitespace() {
        let scalar = u32::from_str_radix(token, 16).ok()?;
        decoded.push(char::from_u32(scalar)?);
    }
    if decoded.is_empty() {
        None
    } else {
        Some(decoded)
    }
}

/// Parse the raw confusables file. Each non-comment, non-blank line is
/// semicolon-delimited; fields 1 and 2 are whitespace-separated hexadecimal
/// code points. Only single-scalar sources become keys, and later duplicate
/// sources overwrite earlier ones, matching the published file's semantics.
pub fn parse_confusables(raw: &str) -> HashMap<char, String> {
    let mut table = HashMap::new();
    for line in raw.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let data = line.split('#').next().unwrap_or("");
        let mut fields = data.split(';');
        let (Some(from_field), Some(to_field)) = (fields.next(), fields.next()) else {
            continue;
        };
        let (Some(from), Some(to)) = (decode_hex_field(from_field), decode_hex_field(to_field))
        else {
            continue;
        };
        let mut scalars = from.chars();
        if let (Some(source), None) = (scalars.next(), scalars.next()) {
            table.insert(source, to);
        }
    }
    table
}

/// Fetch the published data, parse it, and persist the table as a flat JSON
/// object. `fetch` receives [`CONFUSABLES_URL`] and returns the raw text;
/// `sink` receives the serialized document. Returns the entry count.
pub fn update_table<F, S>(fetch: F, sink: S) -> Result<usize, BuilderError>
where
    F: FnOnce(&str) -> io::Result<String>,
    S: FnOnce(&str) -> io::Result<()>,
{
    let raw = fetch(CONFUSABLES_URL).map_err(BuilderError::Fetch)?;
    let table = parse_confusables(&raw);
    if table.is_empty() {
        return Err(BuilderError::Empty);
    }

    let document: HashMap<String, String> = table
        .into_iter()
        .map(|(source, to)| (source.to_string(), to))
        .collect();
    let serialized = serde_json::to_string_pretty(&document)?;
    sink(&serialized).map_err(BuilderError::Write)?;
    Ok(document.len())
}
