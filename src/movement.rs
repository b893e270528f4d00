//! Player movement module.
//!
//! This module holds the state of a single maze while it is being played and the transition
//! function that moves the player through openings.

use crate::grid::{Direction, Grid, Position};

/// A generated maze together with the player and exit cells.
///
/// Both cells are referred to by coordinates into the owned grid, so discarding the grid on
/// regeneration never leaves a stale reference behind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MazeState {
    /// The carved grid.
    grid: Grid,
    /// Cell currently occupied by the player.
    player: Position,
    /// Cell the player has to reach.
    exit: Position,
}

/// Result of a single move request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// A wall stood in the way and nothing changed.
    Blocked,
    /// The player moved into the neighboring cell.
    Advanced {
        /// Cell the player now occupies.
        to: Position,
        /// Whether that cell is the exit.
        exit_reached: bool,
    },
}

/// The state that follows a move request, together with what the request did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The state after the move.
    pub state: MazeState,
    /// What the move did.
    pub step: Step,
}

impl MoveOutcome {
    /// Whether the move landed the player on the exit.
    #[must_use]
    pub const fn exit_reached(&self) -> bool {
        matches!(
            self.step,
            Step::Advanced {
                exit_reached: true,
                ..
            }
        )
    }
}

impl MazeState {
    /// Binds a player and an exit to a carved grid. The player starts on the top-left cell and the
    /// exit sits on the bottom-right one.
    pub(crate) const fn new(grid: Grid) -> Self {
        let exit = grid.dimensions().last();

        Self {
            grid,
            player: Position::ORIGIN,
            exit,
        }
    }

    /// The carved grid, for renderers and inspection.
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Cell currently occupied by the player.
    #[must_use]
    pub const fn player(&self) -> Position {
        self.player
    }

    /// Cell the player has to reach.
    #[must_use]
    pub const fn exit(&self) -> Position {
        self.exit
    }

    /// Whether the player stands on the exit.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.player == self.exit
    }

    /// Consumes the state and returns the one that follows the move request.
    ///
    /// A request against a wall yields the very same state and a [`Step::Blocked`] step.
    #[must_use]
    pub fn attempt_move(mut self, direction: Direction) -> MoveOutcome {
        let step = self.step(direction);
        MoveOutcome { state: self, step }
    }

    /// Applies a move request in place.
    ///
    /// The wall on the requested side of the player's cell decides the outcome: if it is present
    /// the request is ignored, otherwise the player moves into the neighbor on that side.
    pub fn step(&mut self, direction: Direction) -> Step {
        let open = self
            .grid
            .cell(self.player)
            .is_some_and(|cell| !cell.has_wall(direction));
        if !open {
            log::debug!("move {direction:?} from {:?} blocked by a wall", self.player);
            return Step::Blocked;
        }

        let Some(to) = self.grid.neighbor(self.player, direction) else {
            log::warn!(
                "open {direction:?} wall at {:?} leads outside the grid",
                self.player
            );
            return Step::Blocked;
        };

        self.player = to;
        Step::Advanced {
            to,
            exit_reached: self.is_solved(),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng as _};

    use super::*;
    use crate::{generator::generate_maze, grid::Dimensions};

    /// Builds a generated maze from a fixed seed.
    fn seeded_state(columns: usize, rows: usize, seed: u64) -> MazeState {
        let dimensions = Dimensions::new(columns, rows).expect("test dimensions should be valid");
        generate_maze(dimensions, &mut StdRng::seed_from_u64(seed))
    }

    /// Builds a hand-carved 3x1 corridor: (0,0) - (1,0) - (2,0).
    fn corridor() -> MazeState {
        let dimensions = Dimensions::new(3, 1).expect("test dimensions should be valid");
        let mut grid = Grid::new(dimensions);
        grid.remove_wall(Position::new(0, 0), Direction::Right);
        grid.remove_wall(Position::new(1, 0), Direction::Right);
        MazeState::new(grid)
    }

    #[test]
    fn test_blocked_move_returns_identical_state() {
        let state = seeded_state(7, 10, 5);

        for direction in Direction::ALL {
            let cell = state
                .grid()
                .cell(state.player())
                .expect("player is inside the grid");
            if cell.has_wall(direction) {
                let outcome = state.clone().attempt_move(direction);
                assert_eq!(outcome.step, Step::Blocked);
                assert_eq!(outcome.state, state, "blocked move must not change state");
                assert!(!outcome.exit_reached());
            }
        }
    }

    #[test]
    fn test_move_right_through_opening() {
        let state = corridor();

        let outcome = state.attempt_move(Direction::Right);

        assert_eq!(
            outcome.step,
            Step::Advanced {
                to: Position::new(1, 0),
                exit_reached: false,
            }
        );
        assert_eq!(outcome.state.player(), Position::new(1, 0));
    }

    #[test]
    fn test_boundary_moves_are_blocked() {
        let mut state = corridor();

        assert_eq!(state.step(Direction::Up), Step::Blocked);
        assert_eq!(state.step(Direction::Left), Step::Blocked);
        assert_eq!(state.step(Direction::Down), Step::Blocked);
        assert_eq!(state.player(), Position::ORIGIN);
    }

    #[test]
    fn test_reaching_the_exit() {
        let mut state = corridor();

        assert!(!state.is_solved());
        let _ = state.step(Direction::Right);
        let last = state.step(Direction::Right);

        assert_eq!(
            last,
            Step::Advanced {
                to: Position::new(2, 0),
                exit_reached: true,
            }
        );
        assert!(state.is_solved());
        assert_eq!(state.step(Direction::Right), Step::Blocked);
    }

    #[test]
    fn test_move_then_back() {
        let mut state = corridor();

        let _ = state.step(Direction::Right);
        let back = state.step(Direction::Left);

        assert_eq!(
            back,
            Step::Advanced {
                to: Position::ORIGIN,
                exit_reached: false,
            }
        );
    }

    #[test]
    fn test_moves_never_touch_walls() {
        let mut state = seeded_state(7, 10, 21);
        let grid = state.grid().clone();

        for direction in Direction::ALL.into_iter().cycle().take(200) {
            let _ = state.step(direction);
            assert!(
                state.grid().contains(state.player()),
                "player left the grid at {:?}",
                state.player()
            );
        }

        assert_eq!(state.grid(), &grid, "moving must only read the walls");
    }

    #[test]
    fn test_every_open_wall_can_be_walked() {
        let state = seeded_state(4, 4, 8);

        for position in state.grid().positions() {
            let cell = state.grid().cell(position).expect("listed positions exist");
            for direction in Direction::ALL {
                let mut walker = state.clone();
                walker.player = position;
                let step = walker.step(direction);
                if cell.has_wall(direction) {
                    assert_eq!(step, Step::Blocked, "wall at {position:?} {direction:?}");
                } else {
                    let expected = state
                        .grid()
                        .neighbor(position, direction)
                        .expect("open walls lead to a neighbor");
                    assert_eq!(walker.player(), expected);
                }
            }
        }
    }
}
