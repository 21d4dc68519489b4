//! Conversion tables and word-frequency storage.
//!
//! `PositionTables` holds the three position-dependent Latin → Persian
//! tables, `FrequencyIndex` the corpus counts used for scoring. Both are
//! loaded once from line-oriented text files and never mutated afterwards.

mod conversion;
mod frequency;
#[cfg(test)]
mod tests;
mod text_io;

pub use conversion::{ConversionTable, Position, PositionTables, EMPTY_SENTINEL};
pub use frequency::FrequencyIndex;

use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::settings::{settings, FileSettings};

/// Error type for loading conversion tables and frequency files.
#[derive(Debug, thiserror::Error)]
pub enum DictError {
    #[error("cannot read {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("{}: {source}", path.display())]
    File {
        path: PathBuf,
        source: Box<DictError>,
    },
}

/// Read access to corpus frequencies.
///
/// Absence means frequency 0, never an error.
pub trait WordFrequency: Send + Sync {
    fn frequency(&self, word: &str) -> u64;
}

/// Everything the converter reads: the three position tables and the
/// frequency index.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    pub tables: PositionTables,
    pub frequencies: FrequencyIndex,
}

impl Lexicon {
    pub fn from_parts(tables: PositionTables, frequencies: FrequencyIndex) -> Self {
        Self {
            tables,
            frequencies,
        }
    }

    /// Load all four data files from `dir` using the configured file names.
    pub fn open(dir: &Path) -> Result<Self, DictError> {
        Self::open_with(dir, &settings().files)
    }

    pub fn open_with(dir: &Path, files: &FileSettings) -> Result<Self, DictError> {
        let tables = PositionTables::new(
            ConversionTable::open(&dir.join(&files.beginning))?,
            ConversionTable::open(&dir.join(&files.middle))?,
            ConversionTable::open(&dir.join(&files.ending))?,
        );
        let frequencies = FrequencyIndex::open(&dir.join(&files.frequency))?;
        debug!(
            beginning = tables.beginning.len(),
            middle = tables.middle.len(),
            ending = tables.ending.len(),
            words = frequencies.len(),
            "lexicon loaded"
        );
        Ok(Self::from_parts(tables, frequencies))
    }
}
