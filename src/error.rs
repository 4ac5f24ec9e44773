use thiserror::Error;

/// Errors raised by the processor contract. Validation shape checks never
/// error on their own; only `process` surfaces them.
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("validation error: {input} is not {expected}")]
    Validation {
        expected: &'static str,
        input: String,
    },

    #[error("cannot summarize an empty numeric sequence")]
    EmptyInput,
}

impl ProcessError {
    pub(crate) fn validation(expected: &'static str, input: &crate::record::Record) -> Self {
        ProcessError::Validation {
            expected,
            input: input.to_string(),
        }
    }
}
