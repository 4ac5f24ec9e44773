use super::{drop_nulls, render_batch, DataStream, SensorStats, StreamStats};
use crate::record::Record;

/// Aggregates numeric sensor readings, given either as plain numbers or as
/// "label:value" text.
pub struct SensorStream {
    stream_id: String,
    last_batch: Vec<Record>,
    stats: SensorStats,
}

impl SensorStream {
    pub fn new(stream_id: impl Into<String>) -> Self {
        Self {
            stream_id: stream_id.into(),
            last_batch: Vec::new(),
            stats: SensorStats::default(),
        }
    }
}

/// Parses one reading: the value part of "label:value" text, or the number
/// itself.
fn parse_reading(record: &Record) -> Option<f64> {
    match record.as_str() {
        Some(text) => match text.split_once(':') {
            Some((_, value)) => value.trim().parse().ok(),
            None => text.trim().parse().ok(),
        },
        None => record.as_f64(),
    }
}

impl DataStream for SensorStream {
    fn stream_id(&self) -> &str {
        &self.stream_id
    }

    fn kind(&self) -> &str {
        "Environmental Data"
    }

    fn filter_batch(&self, batch: &[Record]) -> Vec<Record> {
        drop_nulls(batch)
            .into_iter()
            .filter(|record| {
                record.is_number() || record.as_str().is_some_and(|text| text.contains(':'))
            })
            .collect()
    }

    fn process_batch(&mut self, batch: &[Record]) -> StreamStats {
        self.last_batch = batch.to_vec();

        let mut stats = SensorStats::default();
        for record in self.filter_batch(batch) {
            match parse_reading(&record) {
                Some(_) => stats.readings += 1,
                None => stats.errors += 1,
            }
        }

        // The average comes from the first raw batch element, before any
        // filtering. An empty batch or an unparsable first element yields
        // 0.0 and is already reflected in the error count.
        stats.average = batch.first().and_then(parse_reading).unwrap_or(0.0);

        self.stats = stats;
        StreamStats::Sensor(stats)
    }

    fn get_stats(&self) -> String {
        format!(
            "Stream ID: {}, Type: {}\n\
             Processing sensor batch: {}\n\
             Sensor analysis: {} readings processed, avg temp: {:.1}°C\n",
            self.stream_id,
            self.kind(),
            render_batch(&self.last_batch),
            self.stats.readings,
            self.stats.average
        )
    }
}
