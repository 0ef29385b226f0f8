//! Core data structures for the linkdoku Sudoku solver and generator.
//!
//! This crate provides the board-level vocabulary shared by the exact-cover
//! solver and the puzzle generator:
//!
//! 1. **Grid arithmetic** - [`Geometry`] maps between cell ids, rows,
//!    columns, and boxes for any valid board size (a positive perfect
//!    square such as 4, 9, or 16).
//! 2. **Board state** - [`Board`] stores cell values (`0` meaning empty)
//!    and validates shape, value range, and Sudoku house constraints.
//!
//! # Examples
//!
//! ```
//! use linkdoku_core::{Board, Geometry};
//!
//! let geometry = Geometry::new(9)?;
//! assert_eq!(geometry.cell_id(5, 4), Some(49));
//!
//! let mut board = Board::empty(9)?;
//! board.set(5, 4, 7);
//! assert_eq!(board.get(5, 4), 7);
//! assert!(board.validate().is_ok());
//! # Ok::<(), linkdoku_core::BoardError>(())
//! ```

pub mod board;
mod error;
pub mod geometry;

pub use self::{board::Board, error::BoardError, geometry::Geometry};
