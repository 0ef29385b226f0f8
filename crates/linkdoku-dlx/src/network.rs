//! Sparse matrix construction and traversal.

use crate::{
    node::{Node, NodeKind},
    Direction, NodeId,
};

/// A sparse 0/1 incidence matrix as a toroidal doubly-linked structure.
///
/// Columns are constraints, rows are candidates, and each stored node
/// marks an incidence between the two. Every node sits on two circular
/// rings: the vertical ring of its column (closed through the column
/// header) and the horizontal ring of its row. Headers themselves form a
/// horizontal ring closed through a root sentinel, which is the anchor
/// for all traversal: a constraint is *reachable* while its header is on
/// that ring.
///
/// The network is built once from an incidence predicate and then mutated
/// destructively-but-reversibly through the operations in [`ops`], driven
/// by the search in [`search`].
///
/// [`ops`]: crate::ops
/// [`search`]: crate::search
#[derive(Debug, Clone)]
pub struct Network {
    pub(crate) nodes: Vec<Node>,
    pub(crate) root: NodeId,
    row_count: usize,
    column_count: usize,
    pub(crate) history: Vec<crate::Event>,
    pub(crate) partial: Vec<NodeId>,
}

impl Network {
    /// Builds a network with the given dimensions from an incidence
    /// predicate.
    ///
    /// Column headers are created first and ringed to the root; then each
    /// candidate row is walked left to right, appending a node at the
    /// bottom of every column where `is_node(row, column)` holds and
    /// closing the row into a ring.
    pub fn new(rows: usize, columns: usize, is_node: impl Fn(usize, usize) -> bool) -> Self {
        let mut network = Self {
            nodes: Vec::new(),
            root: NodeId(0),
            row_count: rows,
            column_count: columns,
            history: Vec::new(),
            partial: Vec::new(),
        };
        network.push_node(NodeKind::Root);

        for index in 0..columns {
            let header = network.push_node(NodeKind::Header { index, size: 0 });
            network.link_header(header);
        }

        for row in 0..rows {
            let mut first: Option<NodeId> = None;
            let mut last: Option<NodeId> = None;
            for column in 0..columns {
                if !is_node(row, column) {
                    continue;
                }
                // Headers were allocated right after the root, so header
                // ids are contiguous. During construction nothing is
                // covered yet, so direct indexing matches ring order.
                let header = NodeId(u32::try_from(column + 1).expect("arena index fits in u32"));
                let node = network.push_node(NodeKind::Cell { row });
                network.append_to_column(header, node);
                if let Some(previous) = last {
                    network.nodes[node.index()].left = previous;
                    network.nodes[previous.index()].right = node;
                } else {
                    first = Some(node);
                }
                last = Some(node);
            }
            if let (Some(first), Some(last)) = (first, last) {
                network.nodes[first.index()].left = last;
                network.nodes[last.index()].right = first;
            }
        }

        network
    }

    /// Builds a network from a dense 0/1 matrix (any nonzero is a node).
    #[must_use]
    pub fn from_matrix(matrix: &[Vec<u8>]) -> Self {
        let columns = matrix.first().map_or(0, Vec::len);
        Self::new(matrix.len(), columns, |row, column| matrix[row][column] != 0)
    }

    fn push_node(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(u32::try_from(self.nodes.len()).expect("arena index fits in u32"));
        self.nodes.push(Node::detached(id, kind));
        id
    }

    /// Appends `header` at the right end of the header ring.
    fn link_header(&mut self, header: NodeId) {
        let root = self.root;
        let last = self.nodes[root.index()].left;
        self.nodes[header.index()].left = last;
        self.nodes[header.index()].right = root;
        self.nodes[last.index()].right = header;
        self.nodes[root.index()].left = header;
    }

    /// Appends `node` at the bottom of `header`'s vertical ring.
    fn append_to_column(&mut self, header: NodeId, node: NodeId) {
        let bottom = self.nodes[header.index()].up;
        self.nodes[node.index()].up = bottom;
        self.nodes[node.index()].down = header;
        self.nodes[node.index()].column = header;
        self.nodes[bottom.index()].down = node;
        self.nodes[header.index()].up = node;
        if let NodeKind::Header { size, .. } = &mut self.nodes[header.index()].kind {
            *size += 1;
        }
    }

    /// The root sentinel anchoring the header ring.
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// The candidate (row) dimension the network was built with.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// The constraint (column) dimension the network was built with.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.column_count
    }

    /// Returns `true` if no column header is reachable from the root,
    /// i.e. every constraint is satisfied and an exact cover is complete.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes[self.root.index()].right == self.root
    }

    /// The neighbor of `id` in the given direction.
    #[must_use]
    pub fn neighbor(&self, id: NodeId, direction: Direction) -> NodeId {
        self.nodes[id.index()].link(direction)
    }

    /// Walks a circular ring starting at `origin`'s neighbor, yielding
    /// every node until the walk returns to `origin` (which is not
    /// yielded).
    pub fn chain(&self, origin: NodeId, direction: Direction) -> impl Iterator<Item = NodeId> + '_ {
        Chain {
            network: self,
            origin,
            next: self.neighbor(origin, direction),
            direction,
        }
    }

    /// Iterates the reachable column headers in ring order.
    pub fn headers(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.chain(self.root, Direction::Right)
    }

    /// Iterates the reachable column headers whose constraint index lies
    /// in `range`.
    ///
    /// This is how callers restrict traversal to one constraint family
    /// (e.g. the Sudoku encoding looking only at cell-constraint columns).
    pub fn headers_in(
        &self,
        range: std::ops::Range<usize>,
    ) -> impl Iterator<Item = NodeId> + '_ {
        self.headers()
            .filter(move |&header| range.contains(&self.column_index(header)))
    }

    /// Iterates the row nodes currently linked into `header`'s column,
    /// top to bottom.
    pub fn column_nodes(&self, header: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.chain(header, Direction::Down)
    }

    /// Returns `true` if `id` is a column header.
    #[must_use]
    pub fn is_header(&self, id: NodeId) -> bool {
        matches!(self.nodes[id.index()].kind, NodeKind::Header { .. })
    }

    /// The candidate index of a row node, or `None` for headers and the
    /// root.
    #[must_use]
    pub fn row_id(&self, id: NodeId) -> Option<usize> {
        match self.nodes[id.index()].kind {
            NodeKind::Cell { row } => Some(row),
            _ => None,
        }
    }

    /// The constraint index of the column owning `id`, or `None` for the
    /// root.
    #[must_use]
    pub fn column_id(&self, id: NodeId) -> Option<usize> {
        match self.nodes[id.index()].kind {
            NodeKind::Header { index, .. } => Some(index),
            NodeKind::Cell { .. } => Some(self.column_index(self.column_of(id))),
            NodeKind::Root => None,
        }
    }

    /// The header of the column owning `id` (a header owns itself).
    #[must_use]
    pub fn column_of(&self, id: NodeId) -> NodeId {
        self.nodes[id.index()].column
    }

    /// The number of row nodes currently linked into a column.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not a column header.
    #[must_use]
    pub fn column_size(&self, id: NodeId) -> usize {
        match self.nodes[id.index()].kind {
            NodeKind::Header { size, .. } => size,
            _ => panic!("column_size target must be a column header"),
        }
    }

    pub(crate) fn column_index(&self, header: NodeId) -> usize {
        match self.nodes[header.index()].kind {
            NodeKind::Header { index, .. } => index,
            _ => panic!("expected a column header"),
        }
    }

    /// Reconstructs the dense 0/1 matrix currently visible from the root.
    ///
    /// Covered columns and unlinked rows contribute nothing, so the result
    /// reflects the present state of the structure, not the matrix the
    /// network was built from.
    #[must_use]
    pub fn to_matrix(&self) -> Vec<Vec<u8>> {
        let mut matrix = vec![vec![0; self.column_count]; self.row_count];
        for header in self.headers() {
            let column = self.column_index(header);
            for node in self.column_nodes(header) {
                let row = self.row_id(node).expect("column chains hold row nodes");
                matrix[row][column] = 1;
            }
        }
        matrix
    }

    /// Verifies the structural invariants of everything reachable from
    /// the root: all four links are exact inverses, every node in a column
    /// chain points back to its header, row rings agree on their
    /// candidate index, and each header's tracked size matches its actual
    /// chain length.
    #[must_use]
    pub fn is_fully_connected(&self) -> bool {
        self.headers().all(|header| {
            if !self.links_consistent(header) {
                return false;
            }
            let mut length = 0;
            for node in self.column_nodes(header) {
                length += 1;
                if !self.links_consistent(node) || self.column_of(node) != header {
                    return false;
                }
                let row = self.row_id(node);
                if row.is_none() {
                    return false;
                }
                let row_ring_ok = self
                    .chain(node, Direction::Right)
                    .all(|peer| self.links_consistent(peer) && self.row_id(peer) == row);
                if !row_ring_ok {
                    return false;
                }
            }
            length == self.column_size(header)
        })
    }

    fn links_consistent(&self, id: NodeId) -> bool {
        let node = &self.nodes[id.index()];
        self.nodes[node.left.index()].right == id
            && self.nodes[node.right.index()].left == id
            && self.nodes[node.up.index()].down == id
            && self.nodes[node.down.index()].up == id
    }
}

struct Chain<'a> {
    network: &'a Network,
    origin: NodeId,
    next: NodeId,
    direction: Direction,
}

impl Iterator for Chain<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next == self.origin {
            return None;
        }
        let current = self.next;
        self.next = self.network.neighbor(current, self.direction);
        Some(current)
    }
}
