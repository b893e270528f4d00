//! Command line configuration.
//!
//! This module holds the options the game is started with: the fixed size of every maze of the
//! session, an optional seed that makes the sequence of mazes reproducible and where log records
//! go.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr as _};
use log::LevelFilter;
use rand::{rngs::StdRng, SeedableRng as _};

use crate::grid::{Dimensions, DEFAULT_COLUMNS, DEFAULT_ROWS};

/// Options the game is started with.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Number of columns of every maze.
    #[arg(long, default_value_t = DEFAULT_COLUMNS)]
    pub columns: usize,
    /// Number of rows of every maze.
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    pub rows: usize,
    /// Seed for the maze generator. A random one is drawn when omitted.
    #[arg(long)]
    pub seed: Option<u64>,
    /// File that log records are appended to. Nothing is logged when omitted.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
    /// Most verbose level written to the log file.
    #[arg(long, default_value_t = LevelFilter::Info)]
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
            seed: None,
            log_file: None,
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    /// Validates the configured maze size.
    ///
    /// # Errors
    ///
    /// This function returns an error if either side is zero or the grid is too large to address.
    pub fn dimensions(&self) -> Result<Dimensions> {
        Dimensions::new(self.columns, self.rows).wrap_err_with(|| {
            format!(
                "invalid maze size {}x{} (columns x rows)",
                self.columns, self.rows
            )
        })
    }

    /// Builds the random source for the session, seeded from `--seed` when given.
    #[must_use]
    pub fn rng(&self) -> StdRng {
        self.seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
    }
}
