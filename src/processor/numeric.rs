use super::{format_output, Processor};
use crate::error::ProcessError;
use crate::record::Record;

/// Summarizes sequences of numbers: element count, sum, arithmetic mean.
pub struct NumericProcessor;

impl Processor for NumericProcessor {
    fn name(&self) -> &str {
        "numeric"
    }

    fn validate(&self, record: &Record) -> bool {
        match record.as_list() {
            Some(items) => items.iter().all(Record::is_number),
            None => false,
        }
    }

    fn process(&self, record: &Record) -> Result<String, ProcessError> {
        if !self.validate(record) {
            return Err(ProcessError::validation("numeric", record));
        }

        let items = record.as_list().unwrap_or(&[]);
        if items.is_empty() {
            return Err(ProcessError::EmptyInput);
        }

        let total: f64 = items.iter().filter_map(Record::as_f64).sum();
        let average = total / items.len() as f64;

        Ok(format_output(&format!(
            "Processed {} numeric values, sum={}, avg={}",
            items.len(),
            total,
            average
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(values: &[f64]) -> Record {
        Record::List(values.iter().map(|v| Record::Float(*v)).collect())
    }

    #[test]
    fn sum_and_mean_match_direct_computation() {
        let record = Record::List(vec![Record::Int(1), Record::Int(2), Record::Float(3.5)]);
        let output = NumericProcessor.process(&record).unwrap();
        assert_eq!(
            output,
            "Output: Processed 3 numeric values, sum=6.5, avg=2.1666666666666665"
        );
    }

    #[test]
    fn accepts_integers_and_floats() {
        assert!(NumericProcessor.validate(&numbers(&[1.0, 2.0, 3.0])));
        assert!(NumericProcessor.validate(&Record::List(vec![Record::Int(4), Record::Float(0.5)])));
    }

    #[test]
    fn rejects_mixed_and_non_sequence_input() {
        let mixed = Record::List(vec![Record::Int(1), Record::Text("two".to_string())]);
        assert!(!NumericProcessor.validate(&mixed));
        assert!(!NumericProcessor.validate(&Record::Text("123".to_string())));

        assert!(matches!(
            NumericProcessor.process(&mixed),
            Err(ProcessError::Validation { .. })
        ));
    }

    #[test]
    fn empty_sequence_is_an_explicit_error() {
        // An empty list is still a valid numeric sequence; it only fails at
        // the mean computation.
        let empty = Record::List(vec![]);
        assert!(NumericProcessor.validate(&empty));
        assert!(matches!(
            NumericProcessor.process(&empty),
            Err(ProcessError::EmptyInput)
        ));
    }
}
