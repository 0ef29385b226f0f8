//! A dancing-links exact-cover engine.
//!
//! This crate implements Knuth's Algorithm X over a sparse 0/1 incidence
//! matrix stored as a toroidal doubly-linked structure (the "dancing
//! links" technique). The matrix is held in an arena of nodes addressed by
//! [`NodeId`] indices, so unlink/relink stay O(1) without raw pointers.
//!
//! The crate is organized around one type:
//!
//! - [`Network`] owns the arena and exposes construction from an incidence
//!   predicate, read-only traversal, the reversible mutation operations
//!   (*cover*, *remove*, *hide*, with a LIFO undo history), and the
//!   backtracking search itself.
//!
//! The engine is problem-agnostic: rows are candidate choices, columns are
//! constraints, and a node marks "this candidate satisfies this
//! constraint". Sudoku-specific encoding lives in `linkdoku-solver`.
//!
//! # Examples
//!
//! ```
//! use linkdoku_dlx::Network;
//!
//! // Knuth's example matrix: exactly one way to pick rows so that every
//! // column is covered exactly once (rows 1, 3, and 5).
//! let mut network = Network::from_matrix(&[
//!     vec![1, 0, 0, 1, 0, 0, 1],
//!     vec![1, 0, 0, 1, 0, 0, 0],
//!     vec![0, 0, 0, 1, 1, 0, 1],
//!     vec![0, 0, 1, 0, 1, 1, 0],
//!     vec![0, 1, 1, 0, 0, 1, 1],
//!     vec![0, 1, 0, 0, 0, 0, 1],
//! ]);
//! let solution = network.solve();
//! let mut rows = solution.rows.clone();
//! rows.sort_unstable();
//! assert_eq!(rows, [1, 3, 5]);
//! assert!(!solution.multiple_solutions);
//! ```

pub mod network;
mod node;
pub mod ops;
pub mod search;

pub use self::{
    network::Network,
    node::{Direction, NodeId},
    ops::Event,
    search::NetworkSolution,
};
