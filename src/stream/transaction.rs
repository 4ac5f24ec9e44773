use super::{drop_nulls, render_batch, DataStream, StreamStats, TransactionStats};
use crate::record::Record;

/// Aggregates "buy:N" / "sell:N" operations into a signed net flow.
pub struct TransactionStream {
    stream_id: String,
    last_batch: Vec<Record>,
    stats: TransactionStats,
}

impl TransactionStream {
    pub fn new(stream_id: impl Into<String>) -> Self {
        Self {
            stream_id: stream_id.into(),
            last_batch: Vec::new(),
            stats: TransactionStats::default(),
        }
    }
}

/// Parses "op:value" where value must be an integer. The sign comes from
/// the operation: buy adds, sell subtracts.
fn parse_operation(text: &str) -> Option<i64> {
    let (op, value) = text.split_once(':')?;
    let value: i64 = value.trim().parse().ok()?;
    match op {
        "buy" => Some(value),
        "sell" => Some(-value),
        _ => None,
    }
}

impl DataStream for TransactionStream {
    fn stream_id(&self) -> &str {
        &self.stream_id
    }

    fn kind(&self) -> &str {
        "Financial Data"
    }

    fn filter_batch(&self, batch: &[Record]) -> Vec<Record> {
        drop_nulls(batch)
            .into_iter()
            .filter(|record| {
                record
                    .as_str()
                    .is_some_and(|text| text.starts_with("buy:") || text.starts_with("sell:"))
            })
            .collect()
    }

    fn process_batch(&mut self, batch: &[Record]) -> StreamStats {
        self.last_batch = batch.to_vec();

        let mut stats = TransactionStats::default();
        for record in self.filter_batch(batch) {
            match record.as_str().and_then(parse_operation) {
                Some(signed) => {
                    stats.net_flow += signed;
                    stats.operations += 1;
                }
                None => stats.errors += 1,
            }
        }

        self.stats = stats;
        StreamStats::Transaction(stats)
    }

    fn get_stats(&self) -> String {
        format!(
            "Stream ID: {}, Type: {}\n\
             Processing transaction batch: {}\n\
             Transaction analysis: {} operations, net flow: {:+} units\n",
            self.stream_id,
            self.kind(),
            render_batch(&self.last_batch),
            self.stats.operations,
            self.stats.net_flow
        )
    }
}
