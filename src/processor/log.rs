use super::{format_output, Processor};
use crate::error::ProcessError;
use crate::record::Record;

/// Splits "level: message" log lines and renders an alert summary.
pub struct LogProcessor;

impl Processor for LogProcessor {
    fn name(&self) -> &str {
        "log"
    }

    fn validate(&self, record: &Record) -> bool {
        record.as_str().is_some_and(|text| text.contains(':'))
    }

    fn process(&self, record: &Record) -> Result<String, ProcessError> {
        // Split on the first separator only; the message may itself contain
        // colons.
        let (level, message) = record
            .as_str()
            .and_then(|text| text.split_once(':'))
            .ok_or_else(|| ProcessError::validation("a valid log entry", record))?;

        Ok(format_output(&format!(
            "[ALERT] {} level detected: {}",
            level.trim(),
            message.trim()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_level_and_message() {
        let record = Record::Text("WARN: disk full".to_string());
        let output = LogProcessor.process(&record).unwrap();
        assert_eq!(output, "Output: [ALERT] WARN level detected: disk full");
    }

    #[test]
    fn splits_on_first_separator_only() {
        let record = Record::Text("ERROR: db: connection lost".to_string());
        let output = LogProcessor.process(&record).unwrap();
        assert_eq!(
            output,
            "Output: [ALERT] ERROR level detected: db: connection lost"
        );
    }

    #[test]
    fn trims_both_sides() {
        let record = Record::Text("  INFO  :  started  ".to_string());
        let output = LogProcessor.process(&record).unwrap();
        assert_eq!(output, "Output: [ALERT] INFO level detected: started");
    }

    #[test]
    fn rejects_text_without_separator() {
        let record = Record::Text("no separator here".to_string());
        assert!(!LogProcessor.validate(&record));
        assert!(matches!(
            LogProcessor.process(&record),
            Err(ProcessError::Validation { .. })
        ));
    }

    #[test]
    fn rejects_non_text_input() {
        assert!(!LogProcessor.validate(&Record::List(vec![])));
    }
}
