use crate::error::ProcessError;
use crate::record::Record;

mod log;
mod numeric;
mod text;

pub use log::LogProcessor;
pub use numeric::NumericProcessor;
pub use text::TextProcessor;

/// Processor trait - unified validate/process interface.
/// `validate` reports whether a record has the expected shape and never
/// errors; `process` fails with `ProcessError::Validation` on the records
/// `validate` rejects.
pub trait Processor: Send + Sync {
    fn name(&self) -> &str;
    fn validate(&self, record: &Record) -> bool;
    fn process(&self, record: &Record) -> Result<String, ProcessError>;
}

/// Shared formatter all processors route their final text through.
pub fn format_output(result: &str) -> String {
    format!("Output: {result}")
}

pub fn create_processor(kind: &str) -> anyhow::Result<Box<dyn Processor>> {
    match kind {
        "numeric" => Ok(Box::new(NumericProcessor)),
        "text" => Ok(Box::new(TextProcessor)),
        "log" => Ok(Box::new(LogProcessor)),
        _ => anyhow::bail!("Unknown processor: {}", kind),
    }
}
