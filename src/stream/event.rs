use super::{drop_nulls, render_batch, DataStream, EventStats, StreamStats};
use crate::record::Record;

/// Counts system events and flags the ones mentioning an error.
pub struct EventStream {
    stream_id: String,
    last_batch: Vec<Record>,
    stats: EventStats,
}

impl EventStream {
    pub fn new(stream_id: impl Into<String>) -> Self {
        Self {
            stream_id: stream_id.into(),
            last_batch: Vec::new(),
            stats: EventStats::default(),
        }
    }
}

impl DataStream for EventStream {
    fn stream_id(&self) -> &str {
        &self.stream_id
    }

    fn kind(&self) -> &str {
        "System Events"
    }

    fn filter_batch(&self, batch: &[Record]) -> Vec<Record> {
        drop_nulls(batch)
            .into_iter()
            .filter(|record| record.as_str().is_some())
            .collect()
    }

    fn process_batch(&mut self, batch: &[Record]) -> StreamStats {
        self.last_batch = batch.to_vec();

        let mut stats = EventStats::default();
        for record in self.filter_batch(batch) {
            stats.events += 1;
            // Substring match anywhere in the event, not just a prefix.
            let is_error = record
                .as_str()
                .is_some_and(|text| text.to_lowercase().contains("error"));
            if is_error {
                stats.errors += 1;
            }
        }

        self.stats = stats;
        StreamStats::Event(stats)
    }

    fn get_stats(&self) -> String {
        format!(
            "Stream ID: {}, Type: {}\n\
             Processing event batch: {}\n\
             Event analysis: {} events, {} error detected\n",
            self.stream_id,
            self.kind(),
            render_batch(&self.last_batch),
            self.stats.events,
            self.stats.errors
        )
    }
}
