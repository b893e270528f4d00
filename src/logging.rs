//! File logging backend.
//!
//! The terminal belongs to the interface while the game runs, so log records are appended to a
//! file named on the command line instead of being printed.

use std::{
    fs::{File, OpenOptions},
    io::Write as _,
    path::Path,
    sync::Mutex,
};

use color_eyre::eyre::{Result, WrapErr as _};
use log::{LevelFilter, Log, Metadata, Record};

/// Logger that appends one line per record to a file.
#[derive(Debug)]
pub(crate) struct FileLogger {
    /// Destination of the records.
    file: Mutex<File>,
    /// Most verbose level that gets written.
    level: LevelFilter,
}

impl FileLogger {
    /// Opens `path` for appending, creating it if needed.
    ///
    /// # Errors
    ///
    /// This function returns an error if the file cannot be opened.
    pub(crate) fn open(path: &Path, level: LevelFilter) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .wrap_err_with(|| format!("could not open log file {}", path.display()))?;

        Ok(Self {
            file: Mutex::new(file),
            level,
        })
    }
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let Ok(mut file) = self.file.lock() else {
            return;
        };

        writeln!(
            file,
            "[{:<5} {}] {}",
            record.level(),
            record.target(),
            record.args()
        )
        .unwrap_or_default();
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            file.flush().unwrap_or_default();
        }
    }
}

/// Routes the `log` records of the whole program to `path`.
///
/// Records more verbose than `level` are dropped before they are formatted.
///
/// # Errors
///
/// This function returns an error if the file cannot be opened or a logger is already installed.
pub fn install_file_logger(path: &Path, level: LevelFilter) -> Result<()> {
    let logger = FileLogger::open(path, level)?;
    log::set_boxed_logger(Box::new(logger)).wrap_err("a logger is already installed")?;
    log::set_max_level(level);

    Ok(())
}
