use crate::record::Record;

mod event;
mod registry;
mod sensor;
mod transaction;

pub use event::EventStream;
pub use registry::StreamRegistry;
pub use sensor::SensorStream;
pub use transaction::TransactionStream;

/// DataStream trait - batch aggregation interface.
///
/// `process_batch` computes stats for one batch and returns them; the stream
/// also retains them so `get_stats` can render the most recent batch. Stats
/// never accumulate across batches.
pub trait DataStream: Send {
    fn stream_id(&self) -> &str;

    /// Human-readable type label for the stats block.
    fn kind(&self) -> &str;

    /// Base filter drops null records. Implementations override this and
    /// layer their own shape check on top of `drop_nulls`.
    fn filter_batch(&self, batch: &[Record]) -> Vec<Record> {
        drop_nulls(batch)
    }

    fn process_batch(&mut self, batch: &[Record]) -> StreamStats;

    /// Multi-line text block for the most recently processed batch.
    fn get_stats(&self) -> String;
}

/// Stats for one processed batch, tagged by stream type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StreamStats {
    Sensor(SensorStats),
    Transaction(TransactionStats),
    Event(EventStats),
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SensorStats {
    pub readings: u64,
    pub errors: u64,
    /// Taken from the first raw batch element, not from the parsed readings.
    pub average: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TransactionStats {
    pub operations: u64,
    pub errors: u64,
    pub net_flow: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EventStats {
    pub events: u64,
    pub errors: u64,
}

pub fn create_stream(kind: &str, stream_id: &str) -> anyhow::Result<Box<dyn DataStream>> {
    match kind {
        "sensor" => Ok(Box::new(SensorStream::new(stream_id))),
        "transaction" => Ok(Box::new(TransactionStream::new(stream_id))),
        "event" => Ok(Box::new(EventStream::new(stream_id))),
        _ => anyhow::bail!("Unknown stream kind: {}", kind),
    }
}

/// Shared pre-filter applied by every stream.
pub fn drop_nulls(batch: &[Record]) -> Vec<Record> {
    batch
        .iter()
        .filter(|record| !record.is_null())
        .cloned()
        .collect()
}

pub(crate) fn render_batch(batch: &[Record]) -> String {
    let items: Vec<String> = batch.iter().map(Record::to_string).collect();
    format!("[{}]", items.join(", "))
}
