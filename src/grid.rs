//! Grid model module.
//!
//! This module contains the cell and wall data model of a maze along with the raw adjacency
//! queries the generator and the movement engine rely on. Cells are owned by value in a flat,
//! row-major collection and are identified by their coordinates only.

use color_eyre::eyre::{bail, OptionExt as _, Result};

/// Default number of columns in a maze.
pub const DEFAULT_COLUMNS: usize = 7;

/// Default number of rows in a maze.
pub const DEFAULT_ROWS: usize = 10;

/// Cardinal directions a player may request and, equally, the four sides of a cell.
///
/// The [`Up`](Direction::Up) side is the top wall of a cell, [`Down`](Direction::Down) the bottom
/// wall, and [`Left`](Direction::Left) and [`Right`](Direction::Right) the side walls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards row zero.
    Up,
    /// Towards the last row.
    Down,
    /// Towards column zero.
    Left,
    /// Towards the last column.
    Right,
}

impl Direction {
    /// Every direction, in the order the wall sides are usually listed: top, right, bottom, left.
    pub const ALL: [Self; 4] = [Self::Up, Self::Right, Self::Down, Self::Left];

    /// Returns the direction pointing the other way, that is, the side of the neighbor that faces
    /// back at the current cell.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Bit used for this side in a cell's wall mask.
    const fn bit(self) -> u8 {
        match self {
            Self::Up => 0b0001,
            Self::Right => 0b0010,
            Self::Down => 0b0100,
            Self::Left => 0b1000,
        }
    }
}

/// Coordinates of a cell within a grid.
///
/// Columns grow to the right and rows grow downwards, both starting at zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    /// Zero-based column index.
    pub column: usize,
    /// Zero-based row index.
    pub row: usize,
}

impl Position {
    /// The top-left cell, where every maze starts carving and every player starts walking.
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Builds a position from a column and a row.
    #[must_use]
    pub const fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }
}

/// Validated extents of a grid.
///
/// Both sides are strictly positive and the number of cells fits in a `usize`. The only way to
/// build one is through [`Dimensions::new`], so a [`Grid`] never has to deal with empty extents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    /// Number of columns.
    columns: usize,
    /// Number of rows.
    rows: usize,
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
        }
    }
}

impl Dimensions {
    /// Validates and builds the extents of a grid.
    ///
    /// # Errors
    ///
    /// This function returns a configuration error if:
    /// - Either `columns` or `rows` is zero
    /// - The total number of cells overflows a `usize`
    pub fn new(columns: usize, rows: usize) -> Result<Self> {
        if columns == 0 {
            bail!("a maze needs at least one column");
        }
        if rows == 0 {
            bail!("a maze needs at least one row");
        }
        let _ = columns
            .checked_mul(rows)
            .ok_or_eyre("maze dimensions overflow the number of addressable cells")?;

        Ok(Self { columns, rows })
    }

    /// Number of columns.
    #[must_use]
    pub const fn columns(self) -> usize {
        self.columns
    }

    /// Number of rows.
    #[must_use]
    pub const fn rows(self) -> usize {
        self.rows
    }

    /// Total number of cells.
    #[must_use]
    pub const fn area(self) -> usize {
        self.columns * self.rows
    }

    /// The bottom-right cell, which is where the exit of a maze is placed.
    #[must_use]
    pub const fn last(self) -> Position {
        Position::new(self.columns - 1, self.rows - 1)
    }
}

/// A single maze cell.
///
/// A cell only knows which of its four walls are still standing. A freshly built cell has all of
/// them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    /// Bit mask of the walls still present, one bit per [`Direction`].
    walls: u8,
}

impl Default for Cell {
    fn default() -> Self {
        Self::new()
    }
}

impl Cell {
    /// Mask with every wall present.
    const CLOSED: u8 = 0b1111;

    /// Builds a cell with all four walls present.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            walls: Self::CLOSED,
        }
    }

    /// Returns whether the wall on the given side is present.
    #[must_use]
    pub const fn has_wall(self, side: Direction) -> bool {
        self.walls & side.bit() != 0
    }

    /// Whether the top wall is present.
    #[must_use]
    pub const fn top(self) -> bool {
        self.has_wall(Direction::Up)
    }

    /// Whether the right wall is present.
    #[must_use]
    pub const fn right(self) -> bool {
        self.has_wall(Direction::Right)
    }

    /// Whether the bottom wall is present.
    #[must_use]
    pub const fn bottom(self) -> bool {
        self.has_wall(Direction::Down)
    }

    /// Whether the left wall is present.
    #[must_use]
    pub const fn left(self) -> bool {
        self.has_wall(Direction::Left)
    }

    /// Knocks down the wall on the given side.
    fn open(&mut self, side: Direction) {
        self.walls &= !side.bit();
    }
}

/// A fixed-size rectangular collection of cells.
///
/// The grid owns every cell by value. It is never resized; a new maze means a new grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    /// Extents of the grid.
    dimensions: Dimensions,
    /// Cells stored row after row.
    cells: Vec<Cell>,
}

impl Grid {
    /// Allocates a grid whose cells have every wall present.
    #[must_use]
    pub fn new(dimensions: Dimensions) -> Self {
        Self {
            dimensions,
            cells: vec![Cell::new(); dimensions.area()],
        }
    }

    /// Extents of the grid.
    #[must_use]
    pub const fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Returns whether the position lies within the grid.
    #[must_use]
    pub const fn contains(&self, position: Position) -> bool {
        position.column < self.dimensions.columns && position.row < self.dimensions.rows
    }

    /// Flat index of a position, or `None` when it falls outside the grid.
    pub(crate) const fn index(&self, position: Position) -> Option<usize> {
        if self.contains(position) {
            Some(position.row * self.dimensions.columns + position.column)
        } else {
            None
        }
    }

    /// Returns the cell at the given position, if any.
    #[must_use]
    pub fn cell(&self, position: Position) -> Option<Cell> {
        self.index(position)
            .and_then(|index| self.cells.get(index))
            .copied()
    }

    /// Returns the position adjacent to `position` in the given direction, or `None` when that
    /// would leave the grid.
    #[must_use]
    pub fn neighbor(&self, position: Position, direction: Direction) -> Option<Position> {
        let neighbor = match direction {
            Direction::Up => Position::new(position.column, position.row.checked_sub(1)?),
            Direction::Down => Position::new(position.column, position.row.checked_add(1)?),
            Direction::Left => Position::new(position.column.checked_sub(1)?, position.row),
            Direction::Right => Position::new(position.column.checked_add(1)?, position.row),
        };

        self.contains(neighbor).then_some(neighbor)
    }

    /// Iterates over every position of the grid, row after row.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let Dimensions { columns, rows } = self.dimensions;
        (0..rows).flat_map(move |row| (0..columns).map(move |column| Position::new(column, row)))
    }

    /// Removes the wall between a cell and its neighbor in the given direction.
    ///
    /// Both sides of the wall pair are cleared together. When there is no neighbor in that
    /// direction the call does nothing, so the outer boundary of the grid always stays closed.
    pub(crate) fn remove_wall(&mut self, position: Position, direction: Direction) {
        let Some(neighbor) = self.neighbor(position, direction) else {
            return;
        };

        if let Some(cell) = self.index(position).and_then(|index| self.cells.get_mut(index)) {
            cell.open(direction);
        }
        if let Some(cell) = self.index(neighbor).and_then(|index| self.cells.get_mut(index)) {
            cell.open(direction.opposite());
        }
    }
}
