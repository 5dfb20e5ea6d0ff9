pub mod classify;
pub mod relevance;
pub mod score;

// Re-export command functions for convenience
pub use classify::classify;
pub use relevance::relevance;
pub use score::score;

use std::path::Path;

use crate::error::{Error, Result};

/// Read and parse one JSON record file
pub(crate) fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| {
        Error::input_with_source(format!("Malformed JSON record: {}", path.display()), e)
    })
}

/// Read a JSONL file into records, reporting the offending line on failure
pub(crate) fn read_jsonl<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let content = std::fs::read_to_string(path)?;
    let mut records = Vec::new();
    for (index, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let record = serde_json::from_str(line).map_err(|e| {
            Error::input_with_source(
                format!("Malformed record at {}:{}", path.display(), index + 1),
                e,
            )
        })?;
        records.push(record);
    }
    Ok(records)
}
