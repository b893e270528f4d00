//! A terminal maze game.
//!
//! Every maze is a perfect maze carved by a randomized depth-first backtracker: exactly one path
//! joins any two cells. The player starts on the top-left cell and walks through openings towards
//! the exit on the bottom-right cell; reaching it immediately replaces the maze with a new one.
//!
//! The maze model ([`Grid`]), the generator ([`generate_maze`]), the movement engine
//! ([`MazeState`]) and the session controller ([`Session`]) do not depend on the terminal and can
//! be driven by any host. [`App`] is the Ratatui host shipped with the binary.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]

mod app;
mod config;
mod events;
mod generator;
mod gesture;
mod grid;
mod logging;
mod movement;
mod session;
mod toast;
mod types;
mod ui;

pub use app::App;
pub use config::Config;
pub use generator::generate_maze;
pub use grid::{Cell, Dimensions, Direction, Grid, Position, DEFAULT_COLUMNS, DEFAULT_ROWS};
pub use logging::install_file_logger;
pub use movement::{MazeState, MoveOutcome, Step};
pub use session::{MoveReport, Session};
