use std::fmt;
use std::str::FromStr;
use crate::error::{FilterError, FilterResult};

/// Rectangular 0/1 mask with its center at `(rows / 2, cols / 2)`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct StructuringElement {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl StructuringElement {
    /// Rejects empty, ragged and all-zero grids.
    pub fn new(grid: Vec<Vec<bool>>) -> FilterResult<Self> {
        let rows = grid.len();
        let cols = grid.first()
            .map(|row| row.len())
            .unwrap_or(0);
        if rows == 0 || cols == 0 {
            return Err(FilterError::InvalidStructuringElement("empty grid".into()));
        }
        if grid.iter().any(|row| row.len() != cols) {
            return Err(FilterError::InvalidStructuringElement("rows differ in length".into()));
        }
        let cells: Vec<bool> = grid.into_iter().flatten().collect();
        if !cells.contains(&true) {
            return Err(FilterError::InvalidStructuringElement("no active cells".into()));
        }
        Ok(StructuringElement { rows, cols, cells })
    }

    fn filled(rows: usize, cols: usize, f: impl Fn(usize, usize) -> bool) -> FilterResult<Self> {
        let grid = (0..rows)
            .map(|r| (0..cols)
                .map(|c| f(r, c))
                .collect())
            .collect();
        Self::new(grid)
    }

    pub fn square(size: usize) -> FilterResult<Self> {
        Self::filled(size, size, |_, _| true)
    }

    pub fn cross(size: usize) -> FilterResult<Self> {
        let mid = size / 2;
        Self::filled(size, size, |r, c| r == mid || c == mid)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn center(&self) -> (usize, usize) {
        (self.rows / 2, self.cols / 2)
    }

    pub fn is_active(&self, row: usize, col: usize) -> bool {
        self.cells[row * self.cols + col]
    }

    /// `(dx, dy)` of every active cell relative to the center.
    pub fn active_offsets(&self) -> impl Iterator<Item = (i64, i64)> + '_ {
        let (cy, cx) = self.center();
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, on)| **on)
            .map(move |(i, _)| (
                (i % self.cols) as i64 - cx as i64,
                (i / self.cols) as i64 - cy as i64,
            ))
    }
}

impl Default for StructuringElement {
    fn default() -> Self {
        StructuringElement {
            rows: 3,
            cols: 3,
            cells: vec![true; 9],
        }
    }
}

impl fmt::Display for StructuringElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            if row > 0 {
                f.write_str(",")?;
            }
            for col in 0..self.cols {
                f.write_str(if self.is_active(row, col) { "1" } else { "0" })?;
            }
        }
        Ok(())
    }
}

/// Rows of `0`/`1` separated by commas, e.g. `010,111,010`.
impl FromStr for StructuringElement {
    type Err = FilterError;

    fn from_str(s: &str) -> FilterResult<Self> {
        let grid = s.split(',')
            .map(|row| row.trim()
                .chars()
                .map(|c| match c {
                    '0' => Ok(false),
                    '1' => Ok(true),
                    other => Err(FilterError::InvalidStructuringElement(
                        format!("unexpected '{other}' in '{s}'"))),
                })
                .collect::<FilterResult<Vec<_>>>())
            .collect::<FilterResult<Vec<_>>>()?;
        Self::new(grid)
    }
}
