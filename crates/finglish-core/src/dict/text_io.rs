use std::fs;
use std::path::Path;

use super::DictError;

/// Read a whole data file, attaching the path to IO errors.
pub(super) fn read_text(path: &Path) -> Result<String, DictError> {
    fs::read_to_string(path).map_err(|source| DictError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Trimmed, non-blank lines paired with their 1-based line number.
pub(super) fn data_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
}

/// Wrap a parse error with the file it came from.
pub(super) fn in_file(path: &Path, err: DictError) -> DictError {
    match err {
        DictError::Io { .. } => err,
        other => DictError::File {
            path: path.to_path_buf(),
            source: Box::new(other),
        },
    }
}
