use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::record::Record;

/// Reads a JSON Lines batch file: one JSON value per line, blank lines
/// skipped.
pub fn read_records_jsonl<P: AsRef<Path>>(path: P) -> Result<Vec<Record>> {
    let file = File::open(path.as_ref())
        .with_context(|| format!("Failed to open batch file: {:?}", path.as_ref()))?;
    let reader = BufReader::new(file);

    let mut records = Vec::new();
    for (line_idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let value: serde_json::Value = serde_json::from_str(&line)
            .with_context(|| format!("Invalid JSON on line {}", line_idx + 1))?;
        records.push(Record::from(value));
    }

    Ok(records)
}
