//! Board dimension arithmetic.

use crate::BoardError;

/// Validated dimensions of a Sudoku board.
///
/// A geometry is parameterized by `size`, the number of cells per row,
/// column, and box. Valid sizes are positive perfect squares; boxes are
/// `sqrt(size) × sqrt(size)`.
///
/// Cells are numbered `0..size²` in row-major order. Rows, columns, and
/// boxes (the three kinds of *house*) are numbered `0..size`, with boxes
/// ordered left to right, top to bottom.
///
/// # Examples
///
/// ```
/// use linkdoku_core::Geometry;
///
/// let geometry = Geometry::new(9)?;
/// assert_eq!(geometry.cell_id(5, 4), Some(49));
/// assert_eq!(geometry.row_of(78), Some(8));
/// assert_eq!(geometry.column_of(78), Some(6));
/// assert_eq!(geometry.box_of(78), Some(8));
/// # Ok::<(), linkdoku_core::BoardError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    size: usize,
    box_size: usize,
}

impl Geometry {
    /// The standard board size.
    pub const DEFAULT_SIZE: usize = 9;

    /// Returns `true` if `size` is a positive perfect square.
    #[must_use]
    pub fn is_valid_size(size: usize) -> bool {
        size > 0 && integer_sqrt(size).is_some()
    }

    /// Creates a geometry for the given board size.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidSize`] if `size` is zero or not a
    /// perfect square.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        match integer_sqrt(size) {
            Some(box_size) if size > 0 => Ok(Self { size, box_size }),
            _ => Err(BoardError::InvalidSize { size }),
        }
    }

    /// The number of cells per row, column, and box.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// The side length of a box (`sqrt(size)`).
    #[must_use]
    pub fn box_size(&self) -> usize {
        self.box_size
    }

    /// The total number of cells on the board (`size²`).
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.size * self.size
    }

    /// Converts a `(row, column)` pair to a cell id, if both are in range.
    #[must_use]
    pub fn cell_id(&self, row: usize, column: usize) -> Option<usize> {
        (self.is_valid_house(row) && self.is_valid_house(column))
            .then(|| row * self.size + column)
    }

    /// The row containing the given cell.
    #[must_use]
    pub fn row_of(&self, cell: usize) -> Option<usize> {
        self.is_valid_cell(cell).then(|| cell / self.size)
    }

    /// The column containing the given cell.
    #[must_use]
    pub fn column_of(&self, cell: usize) -> Option<usize> {
        self.is_valid_cell(cell).then(|| cell % self.size)
    }

    /// The box containing the given cell.
    #[must_use]
    pub fn box_of(&self, cell: usize) -> Option<usize> {
        self.is_valid_cell(cell).then(|| {
            let row = cell / self.size;
            let column = cell % self.size;
            (row / self.box_size) * self.box_size + column / self.box_size
        })
    }

    /// The row, column, and box containing the given cell.
    #[must_use]
    pub fn houses_of(&self, cell: usize) -> Option<(usize, usize, usize)> {
        Some((self.row_of(cell)?, self.column_of(cell)?, self.box_of(cell)?))
    }

    /// The cell ids in the given row, in column order.
    ///
    /// Returns an empty vector if `row` is out of range.
    #[must_use]
    pub fn cells_in_row(&self, row: usize) -> Vec<usize> {
        if !self.is_valid_house(row) {
            return Vec::new();
        }
        let first = row * self.size;
        (first..first + self.size).collect()
    }

    /// The cell ids in the given column, in row order.
    ///
    /// Returns an empty vector if `column` is out of range.
    #[must_use]
    pub fn cells_in_column(&self, column: usize) -> Vec<usize> {
        if !self.is_valid_house(column) {
            return Vec::new();
        }
        (0..self.size).map(|row| row * self.size + column).collect()
    }

    /// The cell ids in the given box, in row-major order.
    ///
    /// Returns an empty vector if `box_id` is out of range.
    #[must_use]
    pub fn cells_in_box(&self, box_id: usize) -> Vec<usize> {
        if !self.is_valid_house(box_id) {
            return Vec::new();
        }
        let first =
            (box_id / self.box_size) * self.box_size * self.size + (box_id % self.box_size) * self.box_size;
        (0..self.size)
            .map(|i| first + i % self.box_size + (i / self.box_size) * self.size)
            .collect()
    }

    /// Returns `true` if `house` is a valid row, column, or box id.
    #[must_use]
    pub fn is_valid_house(&self, house: usize) -> bool {
        house < self.size
    }

    /// Returns `true` if `cell` is a valid cell id.
    #[must_use]
    pub fn is_valid_cell(&self, cell: usize) -> bool {
        cell < self.cell_count()
    }

    /// Returns `true` if `value` may be written into a cell (`1..=size`).
    #[must_use]
    pub fn is_valid_value(&self, value: u8) -> bool {
        value >= 1 && usize::from(value) <= self.size
    }
}

fn integer_sqrt(n: usize) -> Option<usize> {
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss
    )]
    let mut root = (n as f64).sqrt() as usize;
    // Guard against floating point rounding near perfect squares.
    while root * root > n {
        root -= 1;
    }
    while (root + 1) * (root + 1) <= n {
        root += 1;
    }
    (root * root == n).then_some(root)
}
