use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Arc;

use tracing::Level;

use crate::errors::ShellError;

/// Initialize the tracing subscriber writing to stderr. Safe to call
/// multiple times; subsequent calls are no-ops for the global subscriber.
pub fn init_default() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_target(false)
        .with_thread_names(false)
        .with_writer(io::stderr)
        .try_init();
}

/// Initialize the tracing subscriber appending to a log file. Used when the
/// shell runs on the alternate screen, where stderr output would corrupt
/// the rendered frame.
pub fn init_with_file(path: &Path) -> Result<(), ShellError> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| ShellError::LogFile {
            path: path.to_path_buf(),
            source,
        })?;
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_target(false)
        .with_thread_names(false)
        .with_ansi(false)
        .with_writer(Arc::new(file))
        .try_init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_with_file_creates_the_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("neoshell.log");
        init_with_file(&path).expect("subscriber init");
        assert!(path.exists());
    }

    #[test]
    fn init_with_file_rejects_unwritable_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("missing").join("neoshell.log");
        let err = init_with_file(&path).expect_err("parent dir does not exist");
        assert!(matches!(err, ShellError::LogFile { .. }));
    }
}
