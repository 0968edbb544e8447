//! Occupancy grid
//!
//! The maze is a fixed rectangle of cells addressed as `(col, row)`, where the
//! column runs along world x and the row along world z. Anything outside the
//! rectangle blocks movement.

use glam::{IVec2, Vec3};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Cell codes as they appear in a maze layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Open,
    Wall,
    /// Traversable; entering it wins the session
    Goal,
}

impl Cell {
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Cell::Open),
            1 => Some(Cell::Wall),
            2 => Some(Cell::Goal),
            _ => None,
        }
    }

    pub fn code(&self) -> u8 {
        match self {
            Cell::Open => 0,
            Cell::Wall => 1,
            Cell::Goal => 2,
        }
    }

    pub fn is_blocking(&self) -> bool {
        matches!(self, Cell::Wall)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum MazeError {
    #[error("maze must contain at least one cell")]
    Empty,
    #[error("row {row} has {actual} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[error("unknown cell code {code} at row {row}, column {col}")]
    UnknownCode { row: usize, col: usize, code: u8 },
    #[error("cell size {0} must be finite and positive")]
    InvalidCellSize(f32),
}

/// The reference layout: a U-shaped corridor ending in a goal on the south wall
pub const DEFAULT_LAYOUT: [[u8; 5]; 5] = [
    [1, 1, 1, 1, 1],
    [1, 0, 0, 0, 1],
    [1, 0, 1, 0, 1],
    [1, 0, 1, 0, 1],
    [1, 1, 1, 2, 1],
];

/// Immutable maze grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Maze {
    cols: usize,
    rows: usize,
    cell_size: f32,
    /// Row-major cells, `rows * cols` long
    cells: Vec<Cell>,
}

impl Maze {
    /// Build a maze from rows of numeric cell codes
    pub fn from_codes<R>(rows: &[R], cell_size: f32) -> Result<Self, MazeError>
    where
        R: AsRef<[u8]>,
    {
        if !cell_size.is_finite() || cell_size <= 0.0 {
            return Err(MazeError::InvalidCellSize(cell_size));
        }

        let cols = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        if cols == 0 {
            return Err(MazeError::Empty);
        }

        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (row, codes) in rows.iter().enumerate() {
            let codes = codes.as_ref();
            if codes.len() != cols {
                return Err(MazeError::RaggedRow {
                    row,
                    expected: cols,
                    actual: codes.len(),
                });
            }
            for (col, &code) in codes.iter().enumerate() {
                let cell = Cell::from_code(code).ok_or(MazeError::UnknownCode { row, col, code })?;
                cells.push(cell);
            }
        }

        Ok(Self {
            cols,
            rows: rows.len(),
            cell_size,
            cells,
        })
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Cell at grid coordinates, `None` when out of bounds
    pub fn cell(&self, at: IVec2) -> Option<Cell> {
        if at.x < 0 || at.y < 0 {
            return None;
        }
        let (col, row) = (at.x as usize, at.y as usize);
        if col >= self.cols || row >= self.rows {
            return None;
        }
        Some(self.cells[row * self.cols + col])
    }

    /// Grid coordinates containing a world position (floor division on x/z)
    pub fn cell_coords(&self, pos: Vec3) -> IVec2 {
        IVec2::new(
            (pos.x / self.cell_size).floor() as i32,
            (pos.z / self.cell_size).floor() as i32,
        )
    }

    /// Cell containing a world position, `None` when out of bounds
    pub fn cell_at(&self, pos: Vec3) -> Option<Cell> {
        if !pos.is_finite() {
            return None;
        }
        self.cell(self.cell_coords(pos))
    }

    /// True if a walker may stand at this position
    pub fn is_walkable(&self, pos: Vec3) -> bool {
        self.cell_at(pos).is_some_and(|c| !c.is_blocking())
    }

    /// World-space center of a cell at the given height
    pub fn cell_center(&self, at: IVec2, y: f32) -> Vec3 {
        Vec3::new(
            (at.x as f32 + 0.5) * self.cell_size,
            y,
            (at.y as f32 + 0.5) * self.cell_size,
        )
    }

    /// Grid coordinates of every goal cell, in row-major order
    pub fn goal_cells(&self) -> impl Iterator<Item = IVec2> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == Cell::Goal)
            .map(|(i, _)| IVec2::new((i % self.cols) as i32, (i / self.cols) as i32))
    }
}

impl Default for Maze {
    fn default() -> Self {
        let cells = DEFAULT_LAYOUT
            .iter()
            .flatten()
            .map(|&code| Cell::from_code(code).unwrap_or(Cell::Wall))
            .collect();
        Self {
            cols: DEFAULT_LAYOUT[0].len(),
            rows: DEFAULT_LAYOUT.len(),
            cell_size: crate::consts::CELL_SIZE,
            cells,
        }
    }
}
