//! The dancing-links network for one Sudoku board.

use linkdoku_core::{Board, Geometry};
use linkdoku_dlx::{Network, NetworkSolution, NodeId};

use crate::CoverEncoding;

/// An exact-cover network specialized to one Sudoku geometry.
///
/// Owns the underlying [`Network`] for the duration of one solve or
/// generate invocation; the network is built blank and given cells are
/// committed into it with [`place`](SudokuNetwork::place). The raw
/// network stays accessible for callers (like the generator) that drive
/// the matrix directly.
#[derive(Debug)]
pub struct SudokuNetwork {
    encoding: CoverEncoding,
    network: Network,
}

impl SudokuNetwork {
    /// Builds the network for an empty board of the given geometry.
    #[must_use]
    pub fn blank(geometry: Geometry) -> Self {
        let encoding = CoverEncoding::new(geometry);
        let network = Network::new(
            encoding.network_rows(),
            encoding.network_columns(),
            |row, column| encoding.is_node(row, column),
        );
        Self { encoding, network }
    }

    /// The board ⇄ matrix arithmetic in use.
    #[must_use]
    pub fn encoding(&self) -> CoverEncoding {
        self.encoding
    }

    /// The underlying exact-cover network.
    #[must_use]
    pub fn network(&self) -> &Network {
        &self.network
    }

    /// Mutable access to the underlying network.
    pub fn network_mut(&mut self) -> &mut Network {
        &mut self.network
    }

    /// Locates the still-available candidate for `value` in `cell`, or
    /// `None` if that placement has been eliminated.
    #[must_use]
    pub fn find_candidate(&self, cell: usize, value: u8) -> Option<NodeId> {
        let header = self
            .network
            .headers_in(self.encoding.cell_columns())
            .find(|&header| self.network.column_id(header) == Some(cell))?;
        self.network.column_nodes(header).find(|&node| {
            self.network
                .row_id(node)
                .is_some_and(|row| self.encoding.value_of(row) == value)
        })
    }

    /// Commits `value` into `cell` as a given. Returns `false` if the
    /// placement is no longer available (it conflicts with an earlier
    /// commitment).
    pub fn place(&mut self, cell: usize, value: u8) -> bool {
        match self.find_candidate(cell, value) {
            Some(node) => {
                self.network.add_to_solution(node);
                true
            }
            None => false,
        }
    }

    /// Commits every filled cell of `board`. Returns `false` on the
    /// first unavailable placement.
    pub fn place_board(&mut self, board: &Board) -> bool {
        board
            .filled_cells()
            .all(|(cell, value)| self.place(cell, value))
    }

    /// Runs the exact-cover search. See [`Network::solve`].
    pub fn solve(&mut self) -> NetworkSolution {
        self.network.solve()
    }

    /// Decodes candidate row ids into a board.
    ///
    /// # Panics
    ///
    /// Panics if a candidate id is out of range for the geometry.
    #[must_use]
    pub fn board_from_rows(&self, rows: &[usize]) -> Board {
        let geometry = self.encoding.geometry();
        let mut board = Board::empty(geometry.size()).expect("geometry sizes are valid");
        for &row in rows {
            board.set(
                self.encoding.board_row_of(row),
                self.encoding.board_column_of(row),
                self.encoding.value_of(row),
            );
        }
        board
    }

    /// The board formed by the currently committed givens.
    #[must_use]
    pub fn committed_board(&self) -> Board {
        self.board_from_rows(&self.network.committed_rows())
    }
}
