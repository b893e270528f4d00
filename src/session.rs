//! Session control module.
//!
//! This module ties generation and movement together: a session always holds a playable maze, and
//! the move that lands the player on the exit also throws that maze away and carves the next one
//! before returning.

use rand::Rng;

use crate::{
    generator::generate_maze,
    grid::{Dimensions, Direction, Position},
    movement::{MazeState, Step},
};

/// What a move request did to the session, as reported to the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveReport {
    /// A wall stood in the way.
    Blocked,
    /// The player moved into the given cell.
    Moved(Position),
    /// The player reached the exit and a new maze replaced the solved one.
    Solved {
        /// Number of the freshly generated maze.
        generation: u64,
    },
}

/// A running game: the random source, the fixed dimensions and the maze currently being played.
#[derive(Debug)]
pub struct Session<R> {
    /// Random source handed to every generation.
    rng: R,
    /// Extents used for every maze of the session.
    dimensions: Dimensions,
    /// The maze being played.
    state: MazeState,
    /// Number of the current maze, starting at one.
    generation: u64,
    /// Number of mazes solved so far.
    solved: u64,
}

impl<R: Rng> Session<R> {
    /// Starts a session by carving its first maze.
    pub fn new(dimensions: Dimensions, mut rng: R) -> Self {
        let state = generate_maze(dimensions, &mut rng);
        log::info!(
            "started a session on a {}x{} grid",
            dimensions.columns(),
            dimensions.rows()
        );

        Self {
            rng,
            dimensions,
            state,
            generation: 1,
            solved: 0,
        }
    }

    /// The maze being played.
    pub const fn state(&self) -> &MazeState {
        &self.state
    }

    /// Extents used for every maze of the session.
    pub const fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Number of the current maze, starting at one.
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of mazes solved so far.
    pub const fn solved(&self) -> u64 {
        self.solved
    }

    /// Handles a single move request.
    ///
    /// The exit is checked after every request, blocked ones included, so a maze whose player
    /// already stands on the exit (a single cell) is solved by any input. A solved maze is
    /// discarded and a new one is generated before this returns, so the caller always observes a
    /// playable maze with the player on the top-left cell.
    pub fn attempt_move(&mut self, direction: Direction) -> MoveReport {
        let step = self.state.step(direction);
        if self.state.is_solved() {
            self.solved += 1;
            log::info!("maze {} solved", self.generation);
            self.regenerate();
            return MoveReport::Solved {
                generation: self.generation,
            };
        }

        match step {
            Step::Blocked => MoveReport::Blocked,
            Step::Advanced { to, .. } => MoveReport::Moved(to),
        }
    }

    /// Discards the current maze and carves a new one.
    pub fn regenerate(&mut self) {
        self.state = generate_maze(self.dimensions, &mut self.rng);
        self.generation += 1;
        log::info!("generated maze {}", self.generation);
    }
}
