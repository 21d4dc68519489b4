use std::collections::HashMap;
use std::path::Path;

use serde::Serialize;

use super::text_io::{data_lines, in_file, read_text};
use super::DictError;

/// Reserved table output meaning "renders as nothing" (silent letters).
pub const EMPTY_SENTINEL: &str = "nothing";

/// Where a token sits inside its word. Selects which table applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Beginning,
    Middle,
    Ending,
}

impl Position {
    /// Position of token `index` in a word of `len` tokens.
    ///
    /// The first token is always `Beginning`, so a one-token word never
    /// consults the ending table.
    pub fn of(index: usize, len: usize) -> Self {
        if index == 0 {
            Position::Beginning
        } else if index + 1 == len {
            Position::Ending
        } else {
            Position::Middle
        }
    }
}

/// Latin token → ordered Persian outputs for one position.
#[derive(Debug, Clone, Default)]
pub struct ConversionTable {
    entries: HashMap<String, Vec<String>>,
}

impl ConversionTable {
    /// Build from in-memory pairs. Tokens with no outputs are dropped, so
    /// every stored token has at least one rendering.
    pub fn from_entries<K, V>(entries: impl IntoIterator<Item = (K, Vec<V>)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let entries = entries
            .into_iter()
            .filter(|(_, outputs)| !outputs.is_empty())
            .map(|(token, outputs)| {
                (
                    token.into(),
                    outputs.into_iter().map(Into::into).collect(),
                )
            })
            .collect();
        Self { entries }
    }

    /// Parse the text format: `token output1 output2 ...` per line.
    ///
    /// Blank lines are skipped; a repeated token replaces the earlier line.
    pub fn parse(text: &str) -> Result<Self, DictError> {
        let mut entries = HashMap::new();
        for (line, content) in data_lines(text) {
            let mut fields = content.split_whitespace();
            let Some(token) = fields.next() else {
                continue;
            };
            let outputs: Vec<String> = fields.map(str::to_string).collect();
            if outputs.is_empty() {
                return Err(DictError::Parse {
                    line,
                    reason: format!("token {token:?} has no outputs"),
                });
            }
            entries.insert(token.to_string(), outputs);
        }
        Ok(Self { entries })
    }

    pub fn open(path: &Path) -> Result<Self, DictError> {
        let text = read_text(path)?;
        Self::parse(&text).map_err(|e| in_file(path, e))
    }

    /// Renderings for `token` in table order, with [`EMPTY_SENTINEL`]
    /// replaced by `""`. `None` on a miss.
    pub fn renderings(&self, token: &str) -> Option<Vec<&str>> {
        self.entries.get(token).map(|outputs| {
            outputs
                .iter()
                .map(|o| if o == EMPTY_SENTINEL { "" } else { o.as_str() })
                .collect()
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The beginning/middle/ending table triple.
#[derive(Debug, Clone, Default)]
pub struct PositionTables {
    pub beginning: ConversionTable,
    pub middle: ConversionTable,
    pub ending: ConversionTable,
}

impl PositionTables {
    pub fn new(beginning: ConversionTable, middle: ConversionTable, ending: ConversionTable) -> Self {
        Self {
            beginning,
            middle,
            ending,
        }
    }

    pub fn table(&self, position: Position) -> &ConversionTable {
        match position {
            Position::Beginning => &self.beginning,
            Position::Middle => &self.middle,
            Position::Ending => &self.ending,
        }
    }
}
