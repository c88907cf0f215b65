// src/logging/mod.rs
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;

use log::LevelFilter;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Logger already initialized: {0}")]
    AlreadyInitialized(#[from] log::SetLoggerError),
}

pub type Result<T> = std::result::Result<T, LoggingError>;

/// Opens `path` for appending, creating missing parent directories.
pub fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    Ok(file)
}

fn builder(level: LevelFilter) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .format_timestamp_secs()
        .format_module_path(true)
        .format_target(true);
    builder
}

/// Installs the global logger. Records go to stderr, or to `log_file` when given.
pub fn init(level: LevelFilter, log_file: Option<&Path>) -> Result<()> {
    let mut builder = builder(level);

    if let Some(path) = log_file {
        let file = open_log_file(path)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    } else {
        builder.target(env_logger::Target::Stderr);
    }

    builder.try_init()?;
    log::debug!("Logging initialized at level {}", level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn creates_missing_log_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("passgen.log");

        let mut file = open_log_file(&path).unwrap();
        writeln!(file, "first").unwrap();
        drop(file);

        let mut file = open_log_file(&path).unwrap();
        writeln!(file, "second").unwrap();
        drop(file);

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "first\nsecond\n");
    }
}
