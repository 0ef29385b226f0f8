//! Sudoku puzzle generation.
//!
//! A puzzle is carved out of a complete solution in two phases, both
//! driven by the exact-cover engine:
//!
//! 1. **Solution**: a blank network is seeded by filling every cell of
//!    row 0, column 0, and box 0 with a uniformly random remaining
//!    candidate (breaking the blank board's symmetry), and the search
//!    completes it into a full valid grid.
//! 2. **Carving**: a fresh network is seeded with one random given per
//!    box (taken from the solution), then givens are added one at a
//!    time, always in the reachable column with the *most* remaining
//!    candidates, until the search proves the puzzle uniquely solvable.
//!
//! The cost of that final search classifies the puzzle's [`Difficulty`].
//!
//! # Examples
//!
//! ```
//! use linkdoku_generator::PuzzleGenerator;
//! use linkdoku_solver::solve;
//!
//! let generated = PuzzleGenerator::new().generate_with_seed(9, 7)?;
//! assert!(generated.puzzle.is_subset_of(&generated.solution));
//!
//! let resolved = solve(&generated.puzzle);
//! assert_eq!(resolved.solution.as_ref(), Some(&generated.solution));
//! assert!(!resolved.multiple_solutions);
//! # Ok::<(), linkdoku_generator::GenerateError>(())
//! ```

mod difficulty;

use linkdoku_core::{Board, Geometry};
use linkdoku_dlx::NodeId;
use linkdoku_solver::SudokuNetwork;
use rand::{Rng, RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64Mcg;

pub use self::difficulty::Difficulty;

/// How many times solution seeding is retried before giving up.
///
/// Random seeding of three full houses can occasionally produce a
/// partial assignment with no completion; a fresh roll almost always
/// succeeds.
const MAX_SOLUTION_ATTEMPTS: usize = 32;

/// Errors produced by puzzle generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GenerateError {
    /// The requested board size is not a positive perfect square.
    #[display("invalid board size: {size}")]
    InvalidSize {
        /// The rejected size.
        size: usize,
    },
    /// No complete solution was found within the retry budget.
    #[display("failed to build a complete solution after {attempts} attempts")]
    SolutionFailed {
        /// Number of seeding attempts made.
        attempts: usize,
    },
    /// The network lost every candidate consistent with the solution.
    /// Indicates a corrupted network and should not occur.
    #[display("no candidate matching the solution remains")]
    NoMatchingCandidate,
}

/// A generated puzzle together with its unique solution and rating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The puzzle board; a proper subset of `solution` with exactly one
    /// completion.
    pub puzzle: Board,
    /// The complete solution the puzzle was carved from.
    pub solution: Board,
    /// Difficulty rating derived from the final search cost.
    pub difficulty: Difficulty,
}

/// Generates Sudoku puzzles with a unique solution.
///
/// # Examples
///
/// ```
/// use linkdoku_generator::PuzzleGenerator;
///
/// let generator = PuzzleGenerator::new();
/// let generated = generator.generate_with_seed(4, 11)?;
/// assert_eq!(generated.puzzle.size(), 4);
/// # Ok::<(), linkdoku_generator::GenerateError>(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct PuzzleGenerator;

impl PuzzleGenerator {
    /// Creates a generator.
    #[must_use]
    pub const fn new() -> Self {
        PuzzleGenerator
    }

    /// Generates a puzzle of the given size using the thread-local RNG.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::InvalidSize`] for sizes that are not
    /// positive perfect squares, or a generation error if the retry
    /// budget is exhausted.
    pub fn generate(&self, size: usize) -> Result<GeneratedPuzzle, GenerateError> {
        self.generate_with_rng(size, &mut rand::rng())
    }

    /// Generates a puzzle reproducibly from a seed.
    ///
    /// The same `size` and `seed` always produce the same puzzle.
    ///
    /// # Errors
    ///
    /// Same as [`generate`](Self::generate).
    pub fn generate_with_seed(
        &self,
        size: usize,
        seed: u64,
    ) -> Result<GeneratedPuzzle, GenerateError> {
        self.generate_with_rng(size, &mut Pcg64Mcg::seed_from_u64(seed))
    }

    /// Generates a puzzle using the caller's RNG.
    ///
    /// # Errors
    ///
    /// Same as [`generate`](Self::generate).
    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        size: usize,
        rng: &mut R,
    ) -> Result<GeneratedPuzzle, GenerateError> {
        let geometry = Geometry::new(size).map_err(|_| GenerateError::InvalidSize { size })?;
        let solution = complete_solution(geometry, rng)?;
        let (puzzle, nodes_tried) = carve(geometry, &solution, rng)?;
        let difficulty = Difficulty::from_search_cost(nodes_tried);
        log::debug!(
            "generated size-{size} puzzle: {} givens, search cost {nodes_tried}, rated {difficulty}",
            puzzle.filled_count()
        );
        Ok(GeneratedPuzzle {
            puzzle,
            solution,
            difficulty,
        })
    }
}

/// Builds a complete random solution by seeding three houses and letting
/// the search fill in the rest.
fn complete_solution<R: Rng + ?Sized>(
    geometry: Geometry,
    rng: &mut R,
) -> Result<Board, GenerateError> {
    for attempt in 0..MAX_SOLUTION_ATTEMPTS {
        let mut net = SudokuNetwork::blank(geometry);
        for cell in seed_cells(geometry) {
            if let Some(node) = random_candidate_in_cell(&net, cell, rng) {
                net.network_mut().add_to_solution(node);
            }
        }
        let outcome = net.solve();
        if !outcome.rows.is_empty() {
            if attempt > 0 {
                log::trace!("solution seeding succeeded on attempt {}", attempt + 1);
            }
            return Ok(net.board_from_rows(&outcome.rows));
        }
    }
    Err(GenerateError::SolutionFailed {
        attempts: MAX_SOLUTION_ATTEMPTS,
    })
}

/// The cells of row 0, column 0, and box 0, deduplicated in that order.
fn seed_cells(geometry: Geometry) -> Vec<usize> {
    let mut cells = Vec::new();
    for cell in geometry
        .cells_in_row(0)
        .into_iter()
        .chain(geometry.cells_in_column(0))
        .chain(geometry.cells_in_box(0))
    {
        if !cells.contains(&cell) {
            cells.push(cell);
        }
    }
    cells
}

/// Picks a uniformly random candidate still available in `cell`'s
/// cell-constraint column, or `None` if the cell is already decided or
/// exhausted.
fn random_candidate_in_cell<R: Rng + ?Sized>(
    net: &SudokuNetwork,
    cell: usize,
    rng: &mut R,
) -> Option<NodeId> {
    let network = net.network();
    let header = network
        .headers_in(net.encoding().cell_columns())
        .find(|&header| network.column_id(header) == Some(cell))?;
    let size = network.column_size(header);
    if size == 0 {
        return None;
    }
    network.column_nodes(header).nth(rng.random_range(0..size))
}

/// Carves a uniquely solvable puzzle out of `solution`.
///
/// Returns the puzzle and the tried-node count of the search that proved
/// uniqueness.
fn carve<R: Rng + ?Sized>(
    geometry: Geometry,
    solution: &Board,
    rng: &mut R,
) -> Result<(Board, usize), GenerateError> {
    let mut net = SudokuNetwork::blank(geometry);

    // Initial givens: one random cell per box, valued from the solution.
    for box_id in 0..geometry.size() {
        let cells = geometry.cells_in_box(box_id);
        let cell = cells[rng.random_range(0..cells.len())];
        if !net.place(cell, solution.value_at(cell)) {
            return Err(GenerateError::NoMatchingCandidate);
        }
    }

    let mut nodes_tried = 0;
    loop {
        if net.network().is_empty() {
            // Every cell is given; trivially unique.
            break;
        }
        commit_solution_candidate(&mut net, solution)?;
        let outcome = net.solve();
        log::trace!(
            "carve step: {} givens, multiple={}, nodes_tried={}",
            net.network().partial_solution().len(),
            outcome.multiple_solutions,
            outcome.nodes_tried
        );
        if !outcome.multiple_solutions {
            nodes_tried = outcome.nodes_tried;
            break;
        }
    }
    Ok((net.committed_board(), nodes_tried))
}

/// Commits the solution's candidate in the reachable column with the
/// most remaining candidates, the least constrained constraint, so the
/// new given prunes ambiguity without over-constraining.
fn commit_solution_candidate(
    net: &mut SudokuNetwork,
    solution: &Board,
) -> Result<(), GenerateError> {
    let network = net.network();
    let encoding = net.encoding();
    let header = network
        .headers()
        .max_by_key(|&header| network.column_size(header))
        .ok_or(GenerateError::NoMatchingCandidate)?;
    let node = network
        .column_nodes(header)
        .find(|&node| {
            network.row_id(node).is_some_and(|row| {
                let value = solution.get(
                    encoding.board_row_of(row),
                    encoding.board_column_of(row),
                );
                value == encoding.value_of(row)
            })
        })
        .ok_or(GenerateError::NoMatchingCandidate)?;
    net.network_mut().add_to_solution(node);
    Ok(())
}

#[cfg(test)]
mod tests {
    use linkdoku_solver::solve;

    use super::*;

    #[test]
    fn seeded_generation_is_deterministic() {
        let generator = PuzzleGenerator::new();
        let first = generator.generate_with_seed(9, 42).unwrap();
        let second = generator.generate_with_seed(9, 42).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn generated_puzzle_is_valid_and_uniquely_solvable() {
        let generated = PuzzleGenerator::new().generate_with_seed(9, 1).unwrap();

        assert!(generated.puzzle.validate().is_ok());
        assert!(!generated.puzzle.is_complete());
        assert!(generated.puzzle.is_subset_of(&generated.solution));
        assert!(generated.solution.is_complete());
        assert!(generated.solution.validate().is_ok());

        let resolved = solve(&generated.puzzle);
        assert_eq!(resolved.solution, Some(generated.solution));
        assert!(!resolved.multiple_solutions);
    }

    #[test]
    fn different_seeds_give_different_puzzles() {
        let generator = PuzzleGenerator::new();
        let first = generator.generate_with_seed(9, 2).unwrap();
        let second = generator.generate_with_seed(9, 3).unwrap();
        assert_ne!(first.puzzle, second.puzzle);
    }

    #[test]
    fn generates_small_boards() {
        let generated = PuzzleGenerator::new().generate_with_seed(4, 5).unwrap();
        assert_eq!(generated.puzzle.size(), 4);
        assert!(generated.puzzle.is_subset_of(&generated.solution));

        let resolved = solve(&generated.puzzle);
        assert_eq!(resolved.solution, Some(generated.solution));
        assert!(!resolved.multiple_solutions);
    }

    #[test]
    fn rejects_invalid_sizes() {
        let generator = PuzzleGenerator::new();
        assert_eq!(
            generator.generate(7),
            Err(GenerateError::InvalidSize { size: 7 })
        );
        assert_eq!(
            generator.generate(0),
            Err(GenerateError::InvalidSize { size: 0 })
        );
    }

    #[test]
    fn seed_cells_cover_three_houses_without_repeats() {
        let geometry = Geometry::new(9).unwrap();
        let cells = seed_cells(geometry);
        // 9 in the row + 8 more in the column + 4 more in the box.
        assert_eq!(cells.len(), 21);
        let mut unique = cells.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), cells.len());
    }
}
