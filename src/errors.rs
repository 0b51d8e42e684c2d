use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),

    #[error("failed to open log file {path}: {source}")]
    LogFile { path: PathBuf, source: io::Error },
}
