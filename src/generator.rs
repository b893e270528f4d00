//! Maze generation module.
//!
//! This module carves perfect mazes with the randomized depth-first backtracker. Starting from the
//! top-left cell the carver keeps walking into random unvisited neighbors, knocking down the wall
//! it walks through, and backs up along an explicit stack whenever it reaches a dead end. Walls are
//! only removed when stepping into a cell that was never visited before, so the passages end up
//! forming a spanning tree over the grid.

use rand::{seq::IndexedRandom as _, Rng};

use crate::{
    grid::{Dimensions, Direction, Grid, Position},
    movement::MazeState,
};

/// Order in which the neighbors of the current cell are considered before one is picked.
const CARVE_ORDER: [Direction; 4] = [
    Direction::Left,
    Direction::Right,
    Direction::Up,
    Direction::Down,
];

/// Builds a brand new maze of the given dimensions.
///
/// The returned state has the player on the top-left cell and the exit on the bottom-right one.
/// Passing the same seeded random source twice yields the same layout.
pub fn generate_maze<R: Rng + ?Sized>(dimensions: Dimensions, rng: &mut R) -> MazeState {
    let mut grid = Grid::new(dimensions);
    let passages = carve(&mut grid, rng);

    log::debug!(
        "carved a {}x{} maze with {passages} passages",
        dimensions.columns(),
        dimensions.rows()
    );

    MazeState::new(grid)
}

/// Runs the backtracker over a fully walled grid and returns the number of walls it removed.
///
/// The visited set only lives for the duration of the call.
pub(crate) fn carve<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> usize {
    let mut visited = vec![false; grid.dimensions().area()];
    let mut passages = 0;

    let mut current = Position::ORIGIN;
    mark_visited(grid, &mut visited, current);
    let mut stack = vec![current];

    while !stack.is_empty() {
        let candidates: Vec<(Direction, Position)> = CARVE_ORDER
            .into_iter()
            .filter_map(|direction| {
                grid.neighbor(current, direction)
                    .filter(|neighbor| !is_visited(grid, &visited, *neighbor))
                    .map(|neighbor| (direction, neighbor))
            })
            .collect();

        if let Some(&(direction, next)) = candidates.choose(rng) {
            grid.remove_wall(current, direction);
            passages += 1;
            stack.push(current);
            current = next;
            mark_visited(grid, &mut visited, current);
        } else if let Some(previous) = stack.pop() {
            current = previous;
        }
    }

    passages
}

/// Returns whether the carver already went through the given cell. Positions outside the grid
/// count as visited so they are never picked.
fn is_visited(grid: &Grid, visited: &[bool], position: Position) -> bool {
    grid.index(position)
        .and_then(|index| visited.get(index))
        .copied()
        .unwrap_or(true)
}

/// Records that the carver went through the given cell.
fn mark_visited(grid: &Grid, visited: &mut [bool], position: Position) {
    if let Some(flag) = grid
        .index(position)
        .and_then(|index| visited.get_mut(index))
    {
        *flag = true;
    }
}
