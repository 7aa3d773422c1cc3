use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};

/// Fixed subplot arrangement, chosen once at canvas construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridShape {
    pub rows: usize,
    pub cols: usize,
}

impl GridShape {
    pub fn new(rows: usize, cols: usize) -> PlotResult<Self> {
        if rows == 0 || cols == 0 {
            return Err(PlotError::InvalidGrid { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    #[must_use]
    pub const fn contains(self, id: SubplotId) -> bool {
        id.row < self.rows && id.col < self.cols
    }

    #[must_use]
    pub const fn cell_count(self) -> usize {
        self.rows * self.cols
    }

    /// Row-major iteration over every cell of the grid.
    pub fn iter(self) -> impl Iterator<Item = SubplotId> {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| SubplotId::new(row, col)))
    }
}

/// Address of one subplot within the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubplotId {
    pub row: usize,
    pub col: usize,
}

impl SubplotId {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for SubplotId {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

/// Addressing used by configuration operations.
///
/// `All` targets every subplot that currently holds at least one series,
/// mirroring the "all" sentinel of the operations it backs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubplotTarget {
    One(SubplotId),
    All,
}

impl From<SubplotId> for SubplotTarget {
    fn from(id: SubplotId) -> Self {
        Self::One(id)
    }
}

impl From<(usize, usize)> for SubplotTarget {
    fn from(pair: (usize, usize)) -> Self {
        Self::One(pair.into())
    }
}

#[cfg(test)]
mod tests {
    use super::{GridShape, SubplotId};

    #[test]
    fn grid_shape_rejects_empty_dimensions() {
        assert!(GridShape::new(0, 1).is_err());
        assert!(GridShape::new(1, 0).is_err());
        assert!(GridShape::new(2, 3).is_ok());
    }

    #[test]
    fn grid_shape_contains_checks_both_axes() {
        let shape = GridShape::new(2, 3).expect("valid shape");
        assert!(shape.contains(SubplotId::new(1, 2)));
        assert!(!shape.contains(SubplotId::new(2, 0)));
        assert!(!shape.contains(SubplotId::new(0, 3)));
    }

    #[test]
    fn grid_iteration_is_row_major() {
        let shape = GridShape::new(2, 2).expect("valid shape");
        let cells: Vec<_> = shape.iter().collect();
        assert_eq!(
            cells,
            vec![
                SubplotId::new(0, 0),
                SubplotId::new(0, 1),
                SubplotId::new(1, 0),
                SubplotId::new(1, 1),
            ]
        );
    }
}
