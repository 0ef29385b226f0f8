/// Errors produced while constructing or validating boards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    /// The board size is not a positive perfect square.
    #[display("invalid board size: {size}")]
    InvalidSize {
        /// The rejected size.
        size: usize,
    },
    /// A row of the input grid has the wrong length.
    #[display("row {row} has {len} cells, expected {expected}")]
    BadShape {
        /// Index of the offending row.
        row: usize,
        /// Actual length of that row.
        len: usize,
        /// Expected length (the board size).
        expected: usize,
    },
    /// A cell value is outside `0..=size`.
    #[display("value {value} at ({row}, {column}) is out of range 0..={max}")]
    ValueOutOfRange {
        /// Row of the offending cell.
        row: usize,
        /// Column of the offending cell.
        column: usize,
        /// The rejected value.
        value: u8,
        /// Largest allowed value (the board size).
        max: u8,
    },
    /// Board text contains a character that is not a digit, `_`, or `.`.
    #[display("unexpected character {character:?} in board text")]
    UnexpectedCharacter {
        /// The rejected character.
        character: char,
    },
    /// The same value appears twice in a row, column, or box.
    #[display("value {value} appears twice in a house containing ({row}, {column})")]
    DuplicateValue {
        /// Row of the second occurrence.
        row: usize,
        /// Column of the second occurrence.
        column: usize,
        /// The duplicated value.
        value: u8,
    },
}
