mod convert_ops;
mod explain_ops;

pub use convert_ops::{convert_cmd, read_phrase, write_results};
pub use explain_ops::explain_cmd;

use std::io;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
