//! Sudoku solving on top of the dancing-links exact-cover engine.
//!
//! A Sudoku board maps onto an exact-cover matrix with four constraint
//! families (cell, row, column, box) and one candidate row per
//! `(cell, value)` pair; [`CoverEncoding`] owns that arithmetic,
//! [`SudokuNetwork`] builds and drives the matrix for one board, and
//! [`solve`] is the high-level entry point.
//!
//! # Examples
//!
//! ```
//! use linkdoku_core::Board;
//! use linkdoku_solver::solve;
//!
//! let puzzle: Board = "
//!     12 34
//!     34 12
//!     21 __
//!     4_ __
//! "
//! .parse()?;
//!
//! let result = solve(&puzzle);
//! let solution = result.solution.expect("puzzle is solvable");
//! assert!(puzzle.is_subset_of(&solution));
//! assert!(!result.multiple_solutions);
//! # Ok::<(), linkdoku_core::BoardError>(())
//! ```

pub mod encoding;
mod sudoku_network;

use linkdoku_core::Board;

pub use self::{encoding::CoverEncoding, sudoku_network::SudokuNetwork};

/// Outcome of [`solve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveResult {
    /// The first solution found, or `None` if the board is malformed,
    /// contradictory, or has no completion.
    pub solution: Option<Board>,
    /// `true` if the board admits more than one solution.
    pub multiple_solutions: bool,
}

impl SolveResult {
    fn infeasible() -> Self {
        Self {
            solution: None,
            multiple_solutions: false,
        }
    }
}

/// Solves a Sudoku board.
///
/// The board is validated first: duplicate values in a row, column, or
/// box (or any malformed input) yield the infeasible result rather than
/// reaching the matrix builder. A board with zero completions also yields
/// `solution: None`; that is a legitimate outcome, not an error.
#[must_use]
pub fn solve(board: &Board) -> SolveResult {
    if let Err(error) = board.validate() {
        log::debug!("rejecting board before search: {error}");
        return SolveResult::infeasible();
    }

    let mut network = SudokuNetwork::blank(board.geometry());
    if !network.place_board(board) {
        return SolveResult::infeasible();
    }

    let outcome = network.solve();
    log::debug!(
        "search finished: {} solution rows, multiple={}, nodes_tried={}",
        outcome.rows.len(),
        outcome.multiple_solutions,
        outcome.nodes_tried
    );
    if outcome.rows.is_empty() {
        return SolveResult::infeasible();
    }
    SolveResult {
        solution: Some(network.board_from_rows(&outcome.rows)),
        multiple_solutions: outcome.multiple_solutions,
    }
}
