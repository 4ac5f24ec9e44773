use super::{DataStream, StreamStats};
use crate::record::Record;
use std::collections::HashMap;

/// Ordered collection of streams, dispatched by stream id.
#[derive(Default)]
pub struct StreamRegistry {
    streams: Vec<Box<dyn DataStream>>,
}

impl StreamRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_stream(&mut self, stream: Box<dyn DataStream>) {
        self.streams.push(stream);
    }

    /// Runs every registered stream against the batch keyed by its id, in
    /// registration order. A stream with no batch entry sees an empty batch.
    pub fn process_all(&mut self, batches: &HashMap<String, Vec<Record>>) -> Vec<StreamStats> {
        self.streams
            .iter_mut()
            .map(|stream| {
                let batch = batches
                    .get(stream.stream_id())
                    .map(Vec::as_slice)
                    .unwrap_or(&[]);
                stream.process_batch(batch)
            })
            .collect()
    }

    /// Collects each stream's stats block in registration order.
    pub fn all_stats(&self) -> Vec<String> {
        self.streams.iter().map(|stream| stream.get_stats()).collect()
    }

    pub fn len(&self) -> usize {
        self.streams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.streams.is_empty()
    }
}
