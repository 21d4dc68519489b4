use std::collections::HashMap;
use std::path::Path;

use super::text_io::{data_lines, in_file, read_text};
use super::{DictError, WordFrequency};

/// Persian word → observed corpus count.
#[derive(Debug, Clone, Default)]
pub struct FrequencyIndex {
    counts: HashMap<String, u64>,
}

impl FrequencyIndex {
    pub fn from_entries<K: Into<String>>(entries: impl IntoIterator<Item = (K, u64)>) -> Self {
        Self {
            counts: entries.into_iter().map(|(w, c)| (w.into(), c)).collect(),
        }
    }

    /// Parse `word count` lines. `#` lines are comments; fields after the
    /// count are ignored.
    pub fn parse(text: &str) -> Result<Self, DictError> {
        let mut counts = HashMap::new();
        for (line, content) in data_lines(text) {
            if content.starts_with('#') {
                continue;
            }
            let mut fields = content.split_whitespace();
            let (Some(word), Some(count)) = (fields.next(), fields.next()) else {
                return Err(DictError::Parse {
                    line,
                    reason: "expected `word count`".to_string(),
                });
            };
            let count: u64 = count.parse().map_err(|_| DictError::Parse {
                line,
                reason: format!("invalid frequency {count:?}"),
            })?;
            counts.insert(word.to_string(), count);
        }
        Ok(Self { counts })
    }

    pub fn open(path: &Path) -> Result<Self, DictError> {
        let text = read_text(path)?;
        Self::parse(&text).map_err(|e| in_file(path, e))
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

impl WordFrequency for FrequencyIndex {
    fn frequency(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }
}
