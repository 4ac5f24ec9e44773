use super::{format_output, Processor};
use crate::error::ProcessError;
use crate::record::Record;

/// Reports character and whitespace-delimited word counts for text records.
pub struct TextProcessor;

impl Processor for TextProcessor {
    fn name(&self) -> &str {
        "text"
    }

    fn validate(&self, record: &Record) -> bool {
        record.as_str().is_some()
    }

    fn process(&self, record: &Record) -> Result<String, ProcessError> {
        let text = record
            .as_str()
            .ok_or_else(|| ProcessError::validation("valid text", record))?;

        let char_count = text.chars().count();
        let word_count = text.split_whitespace().count();

        Ok(format_output(&format!(
            "Processed text: {char_count} characters, {word_count} words"
        )))
    }
}
