//! Board state and validation.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{BoardError, Geometry};

/// A Sudoku board of values.
///
/// Cells hold `0` for empty or `1..=size` for a filled value. A `Board`
/// only stores state; Sudoku rules are checked on demand by
/// [`validate`](Board::validate), so partially contradictory boards can be
/// represented (and then rejected before solving).
///
/// # Examples
///
/// ```
/// use linkdoku_core::Board;
///
/// let board: Board = "
///     12 34
///     34 12
///     2_ __
///     4_ __
/// "
/// .parse()?;
/// assert_eq!(board.size(), 4);
/// assert_eq!(board.get(0, 3), 4);
/// assert_eq!(board.filled_count(), 10);
/// # Ok::<(), linkdoku_core::BoardError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    geometry: Geometry,
    cells: Vec<u8>,
}

impl Board {
    /// Creates an empty board of the given size.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidSize`] if `size` is not a positive
    /// perfect square.
    pub fn empty(size: usize) -> Result<Self, BoardError> {
        let geometry = Geometry::new(size)?;
        let cells = vec![0; geometry.cell_count()];
        Ok(Self { geometry, cells })
    }

    /// Creates a board from row vectors, `0` meaning empty.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidSize`] if the number of rows is not a
    /// valid board size, [`BoardError::BadShape`] if any row has the wrong
    /// length, or [`BoardError::ValueOutOfRange`] if any value exceeds the
    /// board size.
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self, BoardError> {
        let geometry = Geometry::new(rows.len())?;
        let size = geometry.size();
        let mut cells = Vec::with_capacity(geometry.cell_count());
        for (row, values) in rows.iter().enumerate() {
            if values.len() != size {
                return Err(BoardError::BadShape {
                    row,
                    len: values.len(),
                    expected: size,
                });
            }
            for (column, &value) in values.iter().enumerate() {
                if value != 0 && !geometry.is_valid_value(value) {
                    #[expect(clippy::cast_possible_truncation)]
                    return Err(BoardError::ValueOutOfRange {
                        row,
                        column,
                        value,
                        max: size as u8,
                    });
                }
                cells.push(value);
            }
        }
        Ok(Self { geometry, cells })
    }

    /// The board's dimension arithmetic.
    #[must_use]
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// The number of cells per row, column, and box.
    #[must_use]
    pub fn size(&self) -> usize {
        self.geometry.size()
    }

    /// Returns the value at `(row, column)`, `0` meaning empty.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `column` is out of range.
    #[must_use]
    pub fn get(&self, row: usize, column: usize) -> u8 {
        let cell = self
            .geometry
            .cell_id(row, column)
            .unwrap_or_else(|| panic!("cell ({row}, {column}) out of range"));
        self.cells[cell]
    }

    /// Writes `value` at `(row, column)`; `0` clears the cell.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `column` is out of range, or if `value` exceeds
    /// the board size.
    pub fn set(&mut self, row: usize, column: usize, value: u8) {
        let cell = self
            .geometry
            .cell_id(row, column)
            .unwrap_or_else(|| panic!("cell ({row}, {column}) out of range"));
        assert!(
            value == 0 || self.geometry.is_valid_value(value),
            "value {value} out of range for size {}",
            self.size()
        );
        self.cells[cell] = value;
    }

    /// Returns the value at the given cell id, `0` meaning empty.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is out of range.
    #[must_use]
    pub fn value_at(&self, cell: usize) -> u8 {
        assert!(self.geometry.is_valid_cell(cell), "cell {cell} out of range");
        self.cells[cell]
    }

    /// Copies the board into row vectors.
    #[must_use]
    pub fn rows(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks(self.size())
            .map(<[u8]>::to_vec)
            .collect()
    }

    /// Iterates over `(cell, value)` pairs of all filled cells.
    pub fn filled_cells(&self) -> impl Iterator<Item = (usize, u8)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &value)| value != 0)
            .map(|(cell, &value)| (cell, value))
    }

    /// The number of filled cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.filled_cells().count()
    }

    /// Returns `true` if every cell is filled.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|&value| value != 0)
    }

    /// Returns `true` if every filled cell of `self` holds the same value
    /// in `other`.
    #[must_use]
    pub fn is_subset_of(&self, other: &Self) -> bool {
        self.size() == other.size()
            && self
                .filled_cells()
                .all(|(cell, value)| other.cells[cell] == value)
    }

    /// Checks the Sudoku constraints on the current state.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::DuplicateValue`] if a value occurs twice in
    /// any row, column, or box. Empty cells are ignored.
    pub fn validate(&self) -> Result<(), BoardError> {
        let size = self.size();
        for house in 0..size {
            self.check_house(&self.geometry.cells_in_row(house))?;
            self.check_house(&self.geometry.cells_in_column(house))?;
            self.check_house(&self.geometry.cells_in_box(house))?;
        }
        Ok(())
    }

    fn check_house(&self, cells: &[usize]) -> Result<(), BoardError> {
        let mut seen = vec![false; self.size() + 1];
        for &cell in cells {
            let value = self.cells[cell];
            if value == 0 {
                continue;
            }
            if seen[usize::from(value)] {
                let (row, column, _) = self
                    .geometry
                    .houses_of(cell)
                    .expect("house cell ids are in range");
                return Err(BoardError::DuplicateValue { row, column, value });
            }
            seen[usize::from(value)] = true;
        }
        Ok(())
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.size();
        let box_size = self.geometry.box_size();
        for row in 0..size {
            for column in 0..size {
                if column > 0 && column % box_size == 0 {
                    write!(f, " ")?;
                }
                match self.get(row, column) {
                    0 => write!(f, "_")?,
                    value => write!(f, "{value}")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parses a board from grid text.
    ///
    /// Digits `1..=9` are filled cells; `0`, `_`, and `.` are empty;
    /// whitespace is ignored. The board size is inferred from the number
    /// of cells, so text boards are limited to sizes 1, 4, and 9.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut values = Vec::new();
        for character in s.chars() {
            match character {
                '0' | '_' | '.' => values.push(0),
                #[expect(clippy::cast_possible_truncation)]
                '1'..='9' => values.push(character as u8 - b'0'),
                c if c.is_whitespace() => {}
                c => return Err(BoardError::UnexpectedCharacter { character: c }),
            }
        }
        let size = integer_sqrt_exact(values.len())
            .ok_or(BoardError::InvalidSize { size: values.len() })?;
        let rows = values.chunks(size.max(1)).map(<[u8]>::to_vec).collect::<Vec<_>>();
        Self::from_rows(&rows)
    }
}

fn integer_sqrt_exact(n: usize) -> Option<usize> {
    (0..=n).take_while(|i| i * i <= n).find(|i| i * i == n)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const SOLVED_4: &str = "
        12 34
        34 12
        21 43
        43 21
    ";

    #[test]
    fn parse_and_display_round_trip() {
        let board: Board = SOLVED_4.parse().unwrap();
        let reparsed: Board = board.to_string().parse().unwrap();
        assert_eq!(board, reparsed);
    }

    #[test]
    fn parse_rejects_bad_cell_counts() {
        assert!(matches!(
            "123".parse::<Board>(),
            Err(BoardError::InvalidSize { size: 3 })
        ));
    }

    #[test]
    fn parse_rejects_unexpected_characters() {
        assert!(matches!(
            "12x4".parse::<Board>(),
            Err(BoardError::UnexpectedCharacter { character: 'x' })
        ));
    }

    #[test]
    fn from_rows_rejects_ragged_input() {
        let rows = vec![vec![0, 0, 0, 0], vec![0, 0], vec![0; 4], vec![0; 4]];
        assert!(matches!(
            Board::from_rows(&rows),
            Err(BoardError::BadShape { row: 1, len: 2, expected: 4 })
        ));
    }

    #[test]
    fn from_rows_rejects_out_of_range_values() {
        let mut rows = vec![vec![0u8; 4]; 4];
        rows[2][3] = 5;
        assert!(matches!(
            Board::from_rows(&rows),
            Err(BoardError::ValueOutOfRange { row: 2, column: 3, value: 5, max: 4 })
        ));
    }

    #[test]
    fn validate_accepts_legal_boards() {
        let board: Board = SOLVED_4.parse().unwrap();
        assert!(board.validate().is_ok());
        assert!(board.is_complete());

        let board = Board::empty(9).unwrap();
        assert!(board.validate().is_ok());
        assert!(!board.is_complete());
    }

    #[test]
    fn validate_finds_row_column_and_box_duplicates() {
        let mut board = Board::empty(9).unwrap();
        board.set(3, 1, 5);
        board.set(3, 7, 5);
        assert!(matches!(
            board.validate(),
            Err(BoardError::DuplicateValue { value: 5, .. })
        ));

        let mut board = Board::empty(9).unwrap();
        board.set(0, 2, 9);
        board.set(8, 2, 9);
        assert!(board.validate().is_err());

        let mut board = Board::empty(9).unwrap();
        board.set(0, 0, 1);
        board.set(1, 1, 1);
        assert!(board.validate().is_err());
    }

    #[test]
    fn subset_tracks_filled_cells_only() {
        let full: Board = SOLVED_4.parse().unwrap();
        let mut partial = full.clone();
        partial.set(0, 0, 0);
        partial.set(2, 3, 0);
        assert!(partial.is_subset_of(&full));
        assert!(!full.is_subset_of(&partial));

        partial.set(0, 0, 2);
        assert!(!partial.is_subset_of(&full));
    }

    proptest! {
        #[test]
        fn display_round_trips_any_board(values in proptest::collection::vec(0u8..=9, 81)) {
            let rows = values.chunks(9).map(<[u8]>::to_vec).collect::<Vec<_>>();
            let board = Board::from_rows(&rows).unwrap();
            let reparsed: Board = board.to_string().parse().unwrap();
            prop_assert_eq!(board, reparsed);
        }
    }
}
