//! Arena node primitives.

/// Handle to a node in a [`Network`](crate::Network) arena.
///
/// Node ids are opaque: they are only meaningful to the network that
/// created them. The root sentinel and column headers get ids during
/// construction; row nodes follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// A traversal direction along the toroidal links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards the previous node in a column.
    Up,
    /// Towards the next node in a column.
    Down,
    /// Towards the previous node in a row.
    Left,
    /// Towards the next node in a row.
    Right,
}

impl Direction {
    /// The direction that walks the same ring the opposite way.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// One point of the sparse matrix.
///
/// Sentinels (the root and the column headers) link to themselves until
/// connected, so every link is always a valid arena index.
#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) left: NodeId,
    pub(crate) right: NodeId,
    pub(crate) up: NodeId,
    pub(crate) down: NodeId,
    /// Owning column header; a header (and the root) points to itself.
    pub(crate) column: NodeId,
    pub(crate) kind: NodeKind,
}

#[derive(Debug, Clone)]
pub(crate) enum NodeKind {
    Root,
    Header {
        /// Constraint index of this column.
        index: usize,
        /// Number of row nodes currently linked into this column.
        size: usize,
    },
    Cell {
        /// Candidate index of the matrix row this node belongs to.
        row: usize,
    },
}

impl Node {
    pub(crate) fn detached(id: NodeId, kind: NodeKind) -> Self {
        Self {
            left: id,
            right: id,
            up: id,
            down: id,
            column: id,
            kind,
        }
    }

    pub(crate) fn link(&self, direction: Direction) -> NodeId {
        match direction {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }
}
