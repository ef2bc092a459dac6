//! The four confusables operations: skeleton, containment, annotation,
//! rectification.
//!
//! Everything here walks Unicode scalar values, never bytes or UTF-16 code
//! units, so characters outside the basic multilingual plane (mathematical
//! alphanumerics, emoji) are single atomic units. All operations are total
//! and pure: any string input, including the empty string, yields a value.

use serde::{Deserialize, Serialize};

use crate::table::ConfusablesTable;
use crate::zero_width::ZERO_WIDTH;

/// One entry per original input character. `similar_to` is the canonical
/// replacement when the character is confusable, the empty string when it is
/// a filtered zero-width character, and absent when it is already canonical.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    #[serde(rename = "char")]
    pub ch: char,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub similar_to: Option<String>,
}

/// True when `atom` is exactly the single scalar `ch`.
fn atom_is_char(atom: &str, ch: char) -> bool {
    let mut scalars = atom.chars();
    scalars.next() == Some(ch) && scalars.next().is_none()
}

/// Convert a string to its skeleton: zero-width characters are dropped
/// entirely (no placeholder), every other character is replaced by its
/// mapping if it has one. One atom per surviving input character; an atom
/// may hold several scalars when a ligature decomposes.
pub fn skeleton(table: &ConfusablesTable, input: &str) -> Vec<String> {
    let mut atoms = Vec::new();
    for ch in input.chars() {
        if table.is_zero_width(ch) {
            continue;
        }
        match table.lookup(ch) {
            Some(replacement) => atoms.push(replacement.to_string()),
            None => atoms.push(ch.to_string()),
        }
    }
    atoms
}

/// Check whether any character deviates from its canonical form.
///
/// Walks the original characters and the skeleton in lockstep, up to the
/// skeleton's end only. Trailing input characters beyond the skeleton's
/// length are treated as non-confusable without comparison; do not extend
/// the walk to the input's full length.
pub fn contains_confusables(table: &ConfusablesTable, input: &str) -> bool {
    let skeleton = skeleton(table, input);
    input
        .chars()
        .zip(skeleton.iter())
        .any(|(ch, atom)| !atom_is_char(atom, ch))
}

/// Annotate every character of the input with what it is similar to.
///
/// The skeleton is shorter than the input whenever zero-width characters
/// were dropped, so a running offset tracks the cumulative drop count: each
/// original character at index `i` is compared against the skeleton atom at
/// `i - offset`. The equality check takes priority over the zero-width
/// check. Output length always equals the input's character count.
pub fn confusables(table: &ConfusablesTable, input: &str) -> Vec<Annotation> {
    let skeleton = skeleton(table, input);
    let mut entries = Vec::new();
    let mut offset = 0usize;

    for (index, ch) in input.chars().enumerate() {
        match skeleton.get(index - offset) {
            Some(atom) if atom_is_char(atom, ch) => entries.push(Annotation {
                ch,
                similar_to: None,
            }),
            // Input ran past the skeleton's end: canonical, no mapping.
            None => entries.push(Annotation {
                ch,
                similar_to: None,
            }),
            Some(_) if table.is_zero_width(ch) => {
                entries.push(Annotation {
                    ch,
                    similar_to: Some(ZERO_WIDTH.to_string()),
                });
                // This character consumed no skeleton slot; every later
                // lookup shifts by one.
                offset += 1;
            }
            Some(atom) => entries.push(Annotation {
                ch,
                similar_to: Some(atom.clone()),
            }),
        }
    }

    entries
}

/// Rebuild the fully canonicalized form of the input: each confusable
/// character becomes its replacement, zero-width characters vanish (their
/// replacement is the empty string), canonical characters pass through.
pub fn rectify(table: &ConfusablesTable, input: &str) -> String {
    confusables(table, input)
        .into_iter()
        .map(|entry| match entry.similar_to {
            Some(replacement) => replacement,
            None => entry.ch.to_string(),
        })
        .collect()
}
