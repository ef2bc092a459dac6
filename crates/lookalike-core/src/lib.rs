pub mod builder;
pub mod engine;
pub mod table;
pub mod zero_width;

pub use engine::Annotation;
pub use table::{ConfusablesTable, TableError};

/// Convert a string to its skeleton using the embedded table.
pub fn skeleton(input: &str) -> Vec<String> {
    engine::skeleton(ConfusablesTable::embedded(), input)
}

/// Check a string for confusable characters using the embedded table.
pub fn contains_confusables(input: &str) -> bool {
    engine::contains_confusables(ConfusablesTable::embedded(), input)
}

/// Annotate every character of a string using the embedded table.
pub fn confusables(input: &str) -> Vec<Annotation> {
    engine::confusables(ConfusablesTable::embedded(), input)
}

/// Rectify a string using the embedded table.
pub fn rectify(input: &str) -> String {
    engine::rectify(ConfusablesTable::embedded(), input)
}
