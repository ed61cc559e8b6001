//! Read-only metadata table, loaded once at startup.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use thiserror::Error;

use super::types::MetadataRecord;

/// Tab-separated columns per line: eight attribute fields followed by the
/// episode id join key.
const FIELD_COUNT: usize = 9;

#[derive(Debug, Error)]
pub enum MetadataLoadError {
    #[error("failed to read metadata table: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: expected {expected} tab-separated fields, found {found}")]
    MalformedLine {
        line: usize,
        expected: usize,
        found: usize,
    },
}

/// Mapping of episode id to [`MetadataRecord`], immutable after load.
#[derive(Debug)]
pub struct MetadataStore {
    records: HashMap<String, MetadataRecord>,
}

impl MetadataStore {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MetadataLoadError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader(reader: impl BufRead) -> Result<Self, MetadataLoadError> {
        let mut records = HashMap::new();

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim_end_matches('\r');
            if line.is_empty() {
                continue;
            }

            let fields: Vec<&str> = line.split('\t').collect();
            if fields.len() != FIELD_COUNT {
                return Err(MetadataLoadError::MalformedLine {
                    line: idx + 1,
                    expected: FIELD_COUNT,
                    found: fields.len(),
                });
            }

            let record = MetadataRecord {
                show_name: fields[0].to_string(),
                show_description: fields[1].to_string(),
                publisher: fields[2].to_string(),
                language: fields[3].to_string(),
                rss_link: fields[4].to_string(),
                episode_uri: fields[5].to_string(),
                episode_name: fields[6].to_string(),
                episode_description: fields[7].to_string(),
            };
            records.insert(fields[8].to_string(), record);
        }

        Ok(Self { records })
    }

    pub fn lookup(&self, episode_id: &str) -> Option<&MetadataRecord> {
        self.records.get(episode_id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
