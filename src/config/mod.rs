use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::record::Record;

/// A run file: processor jobs to evaluate plus streams and the named
/// batches to feed them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    pub name: String,
    #[serde(default)]
    pub processors: Vec<ProcessorJob>,
    #[serde(default)]
    pub streams: Vec<StreamConfig>,
    #[serde(default)]
    pub batches: HashMap<String, BatchSource>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessorJob {
    pub kind: String,
    pub input: Record,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamConfig {
    pub id: String,
    pub kind: String,
}

/// A batch is either written inline or loaded from a JSON Lines file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BatchSource {
    Inline(Vec<Record>),
    File { file: String },
}

impl RunConfig {
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: RunConfig =
            serde_yaml::from_str(content).context("Failed to parse YAML configuration")?;

        // Validate
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        // Check stream ids are unique and non-empty
        let mut stream_ids = std::collections::HashSet::new();
        for stream in &self.streams {
            if stream.id.is_empty() {
                anyhow::bail!("Stream id must not be empty");
            }
            if !stream_ids.insert(&stream.id) {
                anyhow::bail!("Duplicate stream id: {}", stream.id);
            }
        }

        Ok(())
    }
}
