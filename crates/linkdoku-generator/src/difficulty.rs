//! Difficulty classification.

use std::fmt::{self, Display};

/// Difficulty rating of a generated puzzle.
///
/// The rating is derived from the cost of the final uniqueness-proving
/// search: puzzles whose search tries more candidate rows demand more
/// backtracking, which correlates with harder play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Difficulty {
    /// Little to no backtracking required.
    Easy,
    /// Some backtracking required.
    Medium,
    /// Substantial backtracking required.
    Hard,
    /// Heavy backtracking required.
    Expert,
}

impl Difficulty {
    /// Search costs below this rate as [`Easy`](Difficulty::Easy).
    ///
    /// The cutoffs are empirically tuned for 9×9 boards and are meant to
    /// be adjusted, not depended upon.
    pub const EASY_BELOW: usize = 50;
    /// Search costs below this (and at least [`EASY_BELOW`](Self::EASY_BELOW))
    /// rate as [`Medium`](Difficulty::Medium).
    pub const MEDIUM_BELOW: usize = 55;
    /// Search costs below this (and at least
    /// [`MEDIUM_BELOW`](Self::MEDIUM_BELOW)) rate as
    /// [`Hard`](Difficulty::Hard); anything above is
    /// [`Expert`](Difficulty::Expert).
    pub const HARD_BELOW: usize = 70;

    /// Classifies a search cost (tried-node count) into a rating.
    #[must_use]
    pub fn from_search_cost(nodes_tried: usize) -> Self {
        if nodes_tried < Self::EASY_BELOW {
            Self::Easy
        } else if nodes_tried < Self::MEDIUM_BELOW {
            Self::Medium
        } else if nodes_tried < Self::HARD_BELOW {
            Self::Hard
        } else {
            Self::Expert
        }
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::Expert => "expert",
        };
        f.write_str(name)
    }
}
