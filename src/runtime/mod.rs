use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::Path;

use crate::config::{BatchSource, RunConfig};
use crate::io;
use crate::processor::create_processor;
use crate::record::Record;
use crate::stream::{create_stream, StreamRegistry};

/// Drives a full run: evaluates the configured processor jobs, then feeds
/// every stream its batch and prints the stats blocks in declaration order.
/// `base_dir` anchors relative batch file paths (the run file's directory).
pub fn run(config: &RunConfig, base_dir: &Path) -> Result<()> {
    println!("Running: {}", config.name);

    for job in &config.processors {
        let processor = create_processor(&job.kind)
            .with_context(|| format!("Failed to create processor: {}", job.kind))?;
        // A record that fails validation is reported, not fatal; the
        // remaining jobs still run.
        match processor.process(&job.input) {
            Ok(output) => println!("[{}] {}", processor.name(), output),
            Err(err) => println!("[{}] {}", processor.name(), err),
        }
    }

    let mut registry = build_registry(config)?;
    let batches = resolve_batches(config, base_dir)?;
    registry.process_all(&batches);

    for block in registry.all_stats() {
        println!("{block}");
    }

    Ok(())
}

/// Builds the stream registry in the order streams are declared.
pub fn build_registry(config: &RunConfig) -> Result<StreamRegistry> {
    let mut registry = StreamRegistry::new();
    for stream in &config.streams {
        let built = create_stream(&stream.kind, &stream.id)
            .with_context(|| format!("Failed to create stream: {}", stream.id))?;
        registry.add_stream(built);
    }
    Ok(registry)
}

/// Materializes every named batch, loading file-backed ones from disk.
pub fn resolve_batches(
    config: &RunConfig,
    base_dir: &Path,
) -> Result<HashMap<String, Vec<Record>>> {
    let mut batches = HashMap::new();
    for (stream_id, source) in &config.batches {
        let records = match source {
            BatchSource::Inline(records) => records.clone(),
            BatchSource::File { file } => io::read_records_jsonl(base_dir.join(file))
                .with_context(|| format!("Failed to load batch for stream: {stream_id}"))?,
        };
        batches.insert(stream_id.clone(), records);
    }
    Ok(batches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stream::{SensorStats, StreamStats, TransactionStats};

    #[test]
    fn builds_streams_in_declared_order() {
        let config = RunConfig::from_yaml_str(
            r#"
name: order
streams:
  - id: EVENT_001
    kind: event
  - id: SENSOR_001
    kind: sensor
"#,
        )
        .unwrap();

        let registry = build_registry(&config).unwrap();
        let blocks = registry.all_stats();
        assert!(blocks[0].starts_with("Stream ID: EVENT_001"));
        assert!(blocks[1].starts_with("Stream ID: SENSOR_001"));
    }

    #[test]
    fn unknown_stream_kind_fails_at_build() {
        let config = RunConfig::from_yaml_str(
            r#"
name: bad
streams:
  - id: S1
    kind: audit
"#,
        )
        .unwrap();
        assert!(build_registry(&config).is_err());
    }

    #[test]
    fn resolves_inline_batches_and_runs_them() {
        let config = RunConfig::from_yaml_str(
            r#"
name: inline
streams:
  - id: SENSOR_001
    kind: sensor
  - id: TRANS_001
    kind: transaction
batches:
  SENSOR_001: ["temp:22.5", "humidity:65", "pressure:1013"]
  TRANS_001: ["buy:100", "sell:150", "buy:75"]
"#,
        )
        .unwrap();

        let mut registry = build_registry(&config).unwrap();
        let batches = resolve_batches(&config, Path::new(".")).unwrap();
        let stats = registry.process_all(&batches);

        assert_eq!(
            stats,
            vec![
                StreamStats::Sensor(SensorStats {
                    readings: 3,
                    errors: 0,
                    average: 22.5,
                }),
                StreamStats::Transaction(TransactionStats {
                    operations: 3,
                    errors: 0,
                    net_flow: 25,
                }),
            ]
        );
    }
}
