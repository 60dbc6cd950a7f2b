use std::path::Path;

use tracing_appender::{
    non_blocking::{NonBlocking, WorkerGuard},
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::EnvFilter;

use crate::error::Result;

/// Directory the log file is written to, relative to the working directory.
pub const LOG_DIR: &str = "logs";

/// Opens `<dir>/<file_name>` behind a non-blocking writer.
pub fn file_writer(dir: impl AsRef<Path>, file_name: &str) -> Result<(NonBlocking, WorkerGuard)> {
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(dir)?;
    Ok(tracing_appender::non_blocking(appender))
}

/// Sends `tracing` output to `logs/<file_name>` so it never mixes with the maze
/// drawn on the terminal. The level defaults to `info` and follows `RUST_LOG`.
///
/// When the log file cannot be created, logging is disabled and the program
/// carries on. Keep the returned guard alive until exit, or buffered lines are lost.
pub fn init(file_name: &str) -> Option<WorkerGuard> {
    let (writer, guard) = match file_writer(LOG_DIR, file_name) {
        Ok(pair) => pair,
        Err(err) => {
            eprintln!("Logging disabled: {}", err);
            return None;
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();
    Some(guard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn scratch_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("mazewalk-{}-{}", name, std::process::id()))
    }

    #[test]
    fn test_file_writer_fails_when_dir_is_a_file() {
        let blocker = scratch_path("blocker");
        std::fs::write(&blocker, b"not a directory").unwrap();

        let result = file_writer(&blocker, "mazewalk.log");
        assert!(matches!(result, Err(Error::Log(_))));

        std::fs::remove_file(&blocker).unwrap();
    }

    #[test]
    fn test_file_writer_creates_log_file() {
        let dir = scratch_path("logs");
        {
            let (_writer, _guard) = file_writer(&dir, "test.log").unwrap();
        }
        assert!(dir.join("test.log").is_file());
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
