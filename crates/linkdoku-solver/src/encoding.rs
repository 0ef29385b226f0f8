//! Sudoku ⇄ exact-cover arithmetic.

use linkdoku_core::Geometry;

/// Maps a Sudoku board of size `n` onto an exact-cover matrix.
///
/// The matrix has `n³` candidate rows, one per `(cell, value)` pair
/// with `candidate = cell * n + (value - 1)`, and `4n²` constraint
/// columns arranged in four families:
///
/// | Family | Columns      | Meaning                              |
/// |--------|--------------|--------------------------------------|
/// | cell   | `[0, n²)`    | every cell holds exactly one value   |
/// | row    | `[n², 2n²)`  | every row holds each value once      |
/// | column | `[2n², 3n²)` | every column holds each value once   |
/// | box    | `[3n², 4n²)` | every box holds each value once      |
///
/// Each candidate row therefore intersects exactly four columns, one per
/// family.
#[derive(Debug, Clone, Copy)]
pub struct CoverEncoding {
    geometry: Geometry,
}

impl CoverEncoding {
    /// Creates the encoding for one board geometry.
    #[must_use]
    pub fn new(geometry: Geometry) -> Self {
        Self { geometry }
    }

    /// The board geometry this encoding maps.
    #[must_use]
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Number of candidate rows in the matrix (`n³`).
    #[must_use]
    pub fn network_rows(&self) -> usize {
        self.geometry.cell_count() * self.geometry.size()
    }

    /// Number of constraint columns in the matrix (`4n²`).
    #[must_use]
    pub fn network_columns(&self) -> usize {
        4 * self.geometry.cell_count()
    }

    /// The column range of the cell-constraint family (`[0, n²)`).
    ///
    /// Useful for restricting header traversal when locating a candidate
    /// by its cell.
    #[must_use]
    pub fn cell_columns(&self) -> std::ops::Range<usize> {
        0..self.geometry.cell_count()
    }

    /// The incidence predicate the network is built from: does candidate
    /// `row` satisfy constraint `column`?
    #[must_use]
    pub fn is_node(&self, row: usize, column: usize) -> bool {
        let n = self.geometry.size();
        let cells = self.geometry.cell_count();
        let cell = row / n;
        let offset = row % n;
        let board_row = cell / n;
        let board_column = cell % n;
        if column < cells {
            column == cell
        } else if column < 2 * cells {
            column - cells == board_row * n + offset
        } else if column < 3 * cells {
            column - 2 * cells == board_column * n + offset
        } else {
            let box_size = self.geometry.box_size();
            let box_id = (board_row / box_size) * box_size + board_column / box_size;
            column - 3 * cells == box_id * n + offset
        }
    }

    /// The candidate row id for placing `value` in `cell`.
    #[must_use]
    pub fn candidate(&self, cell: usize, value: u8) -> usize {
        cell * self.geometry.size() + usize::from(value) - 1
    }

    /// The cell a candidate row places into.
    #[must_use]
    pub fn cell_of(&self, candidate: usize) -> usize {
        candidate / self.geometry.size()
    }

    /// The board row a candidate row places into.
    #[must_use]
    pub fn board_row_of(&self, candidate: usize) -> usize {
        candidate / self.geometry.cell_count()
    }

    /// The board column a candidate row places into.
    #[must_use]
    pub fn board_column_of(&self, candidate: usize) -> usize {
        (candidate / self.geometry.size()) % self.geometry.size()
    }

    /// The value a candidate row places.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub fn value_of(&self, candidate: usize) -> u8 {
        (candidate % self.geometry.size()) as u8 + 1
    }

    /// The cell guarded by a constraint column, if the column belongs to
    /// the cell family.
    #[must_use]
    pub fn cell_of_header(&self, column: usize) -> Option<usize> {
        (column < self.geometry.cell_count()).then_some(column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoding(size: usize) -> CoverEncoding {
        CoverEncoding::new(Geometry::new(size).unwrap())
    }

    #[test]
    fn dimensions() {
        let enc = encoding(9);
        assert_eq!(enc.network_rows(), 729);
        assert_eq!(enc.network_columns(), 324);
        assert_eq!(enc.cell_columns(), 0..81);

        let enc = encoding(4);
        assert_eq!(enc.network_rows(), 64);
        assert_eq!(enc.network_columns(), 64);
    }

    #[test]
    fn candidate_encode_decode_round_trip() {
        for size in [4usize, 9] {
            let enc = encoding(size);
            for cell in 0..size * size {
                for value in 1..=size as u8 {
                    let candidate = enc.candidate(cell, value);
                    assert_eq!(enc.cell_of(candidate), cell);
                    assert_eq!(enc.value_of(candidate), value);
                    assert_eq!(enc.board_row_of(candidate), cell / size);
                    assert_eq!(enc.board_column_of(candidate), cell % size);
                }
            }
        }
    }

    #[test]
    fn every_candidate_satisfies_exactly_four_constraints() {
        for size in [4usize, 9] {
            let enc = encoding(size);
            for row in 0..enc.network_rows() {
                let hits = (0..enc.network_columns())
                    .filter(|&column| enc.is_node(row, column))
                    .collect::<Vec<_>>();
                assert_eq!(hits.len(), 4, "candidate {row} of size {size}");
                // One hit per family, in family order.
                let cells = size * size;
                assert!(hits[0] < cells);
                assert!((cells..2 * cells).contains(&hits[1]));
                assert!((2 * cells..3 * cells).contains(&hits[2]));
                assert!(hits[3] >= 3 * cells);
            }
        }
    }

    #[test]
    fn every_constraint_has_n_candidates() {
        let enc = encoding(9);
        for column in 0..enc.network_columns() {
            let count = (0..enc.network_rows())
                .filter(|&row| enc.is_node(row, column))
                .count();
            assert_eq!(count, 9, "column {column}");
        }
    }

    #[test]
    fn cell_family_guards_cell_ids_directly() {
        let enc = encoding(9);
        let geometry = enc.geometry();
        // Cell (5, 4) is cell 49; cell 78 sits at row 8, column 6.
        assert_eq!(geometry.cell_id(5, 4), Some(49));
        assert_eq!(geometry.row_of(78), Some(8));
        assert_eq!(geometry.column_of(78), Some(6));
        // Cell-family column 78 guards cell 78, and every candidate in it
        // decodes to that cell.
        assert_eq!(enc.cell_of_header(78), Some(78));
        assert_eq!(enc.cell_of_header(81), None);
        for value in 1..=9 {
            let candidate = enc.candidate(78, value);
            assert!(enc.is_node(candidate, 78));
            assert_eq!(enc.board_row_of(candidate), 8);
            assert_eq!(enc.board_column_of(candidate), 6);
        }
    }

    #[test]
    fn box_family_follows_box_geometry() {
        let enc = encoding(4);
        let geometry = enc.geometry();
        let cells = geometry.cell_count();
        for cell in 0..cells {
            let box_id = geometry.box_of(cell).unwrap();
            for value in 1..=4u8 {
                let candidate = enc.candidate(cell, value);
                let column = 3 * cells + box_id * 4 + usize::from(value) - 1;
                assert!(enc.is_node(candidate, column));
            }
        }
    }
}
