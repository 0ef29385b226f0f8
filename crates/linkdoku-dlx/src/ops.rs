//! Reversible mutation of the network.
//!
//! Three operations shrink the structure:
//!
//! - [`cover`](Network::cover) eliminates one constraint and every
//!   candidate touching it (the Algorithm X elimination step);
//! - [`remove`](Network::remove) commits one candidate by covering every
//!   constraint it satisfies;
//! - [`hide`](Network::hide) drops a single candidate from consideration
//!   without eliminating anything else.
//!
//! Each successful operation pushes an [`Event`] onto a LIFO history, and
//! [`undo`](Network::undo) pops one event and applies its exact structural
//! inverse in reverse node order. The discipline is strict: history is
//! only ever unwound from the top, which is what makes the destructive
//! link surgery safe to reverse.

use crate::{Network, NodeId};

/// A recorded mutation, replayed in reverse by [`Network::undo`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A column header was covered.
    Cover(NodeId),
    /// A row node was committed (all its columns covered).
    Remove(NodeId),
    /// A row node was hidden (vertical unlink only).
    Hide(NodeId),
}

impl Network {
    /// Covers a column: unlinks its header from the header ring, then
    /// vertically unlinks every row touching the column from all *other*
    /// columns, decrementing their sizes.
    ///
    /// After a cover the constraint can no longer be violated, because no
    /// remaining candidate uses it.
    ///
    /// # Panics
    ///
    /// Panics if `column` is the root or a row node.
    pub fn cover(&mut self, column: NodeId) {
        assert!(
            column != self.root,
            "cannot cover the root sentinel"
        );
        assert!(
            self.is_header(column),
            "cover target must be a column header"
        );
        self.cover_links(column);
        self.history.push(Event::Cover(column));
    }

    /// Commits a row node into the partial solution structure: covers the
    /// column of every node in its row ring, its own column last.
    ///
    /// # Panics
    ///
    /// Panics if `node` is the root or a column header.
    pub fn remove(&mut self, node: NodeId) {
        assert!(node != self.root, "cannot remove the root sentinel");
        assert!(
            !self.is_header(node),
            "remove target must be a row node"
        );
        self.remove_links(node);
        self.history.push(Event::Remove(node));
    }

    /// Hides a row: vertically unlinks the node and every node to its
    /// right, decrementing the owning columns' sizes. Headers stay on the
    /// header ring, so no other candidate is affected.
    ///
    /// # Panics
    ///
    /// Panics if `node` is the root or a column header.
    pub fn hide(&mut self, node: NodeId) {
        assert!(node != self.root, "cannot hide the root sentinel");
        assert!(!self.is_header(node), "hide target must be a row node");
        self.hide_links(node);
        self.history.push(Event::Hide(node));
    }

    /// Commits `node` via [`remove`](Network::remove) and records it on
    /// the current-solution stack.
    pub fn add_to_solution(&mut self, node: NodeId) {
        self.remove(node);
        self.partial.push(node);
    }

    /// The row nodes currently committed as chosen, in commit order.
    #[must_use]
    pub fn partial_solution(&self) -> &[NodeId] {
        &self.partial
    }

    /// The candidate indices of the committed rows, in commit order.
    #[must_use]
    pub fn committed_rows(&self) -> Vec<usize> {
        self.partial
            .iter()
            .filter_map(|&node| self.row_id(node))
            .collect()
    }

    /// The number of mutations recorded and not yet undone.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Reverses the most recent mutation. Returns `false` (a no-op) if
    /// the history is empty.
    pub fn undo(&mut self) -> bool {
        let Some(event) = self.history.pop() else {
            return false;
        };
        match event {
            Event::Cover(column) => self.uncover_links(column),
            Event::Remove(node) => self.unremove_links(node),
            Event::Hide(node) => self.unhide_links(node),
        }
        true
    }

    /// Unwinds the whole history and clears the current-solution stack.
    pub fn reset(&mut self) {
        while self.undo() {}
        self.partial.clear();
    }

    pub(crate) fn cover_links(&mut self, column: NodeId) {
        let left = self.nodes[column.index()].left;
        let right = self.nodes[column.index()].right;
        self.nodes[right.index()].left = left;
        self.nodes[left.index()].right = right;

        let mut row = self.nodes[column.index()].down;
        while row != column {
            let mut peer = self.nodes[row.index()].right;
            while peer != row {
                let up = self.nodes[peer.index()].up;
                let down = self.nodes[peer.index()].down;
                self.nodes[down.index()].up = up;
                self.nodes[up.index()].down = down;
                self.bump_size(self.column_of(peer), -1);
                peer = self.nodes[peer.index()].right;
            }
            row = self.nodes[row.index()].down;
        }
    }

    /// Exact inverse of [`cover_links`](Network::cover_links), walking the
    /// column bottom-up and each row right-to-left.
    pub(crate) fn uncover_links(&mut self, column: NodeId) {
        let mut row = self.nodes[column.index()].up;
        while row != column {
            let mut peer = self.nodes[row.index()].left;
            while peer != row {
                self.bump_size(self.column_of(peer), 1);
                let up = self.nodes[peer.index()].up;
                let down = self.nodes[peer.index()].down;
                self.nodes[down.index()].up = peer;
                self.nodes[up.index()].down = peer;
                peer = self.nodes[peer.index()].left;
            }
            row = self.nodes[row.index()].up;
        }
        let left = self.nodes[column.index()].left;
        let right = self.nodes[column.index()].right;
        self.nodes[right.index()].left = column;
        self.nodes[left.index()].right = column;
    }

    fn remove_links(&mut self, node: NodeId) {
        let mut peer = self.nodes[node.index()].right;
        while peer != node {
            self.cover_links(self.column_of(peer));
            peer = self.nodes[peer.index()].right;
        }
        self.cover_links(self.column_of(node));
    }

    fn unremove_links(&mut self, node: NodeId) {
        self.uncover_links(self.column_of(node));
        let mut peer = self.nodes[node.index()].left;
        while peer != node {
            self.uncover_links(self.column_of(peer));
            peer = self.nodes[peer.index()].left;
        }
    }

    fn hide_links(&mut self, node: NodeId) {
        self.hide_one(node);
        let mut peer = self.nodes[node.index()].right;
        while peer != node {
            self.hide_one(peer);
            peer = self.nodes[peer.index()].right;
        }
    }

    fn unhide_links(&mut self, node: NodeId) {
        self.unhide_one(node);
        let mut peer = self.nodes[node.index()].right;
        while peer != node {
            self.unhide_one(peer);
            peer = self.nodes[peer.index()].right;
        }
    }

    fn hide_one(&mut self, node: NodeId) {
        self.bump_size(self.column_of(node), -1);
        let up = self.nodes[node.index()].up;
        let down = self.nodes[node.index()].down;
        self.nodes[up.index()].down = down;
        self.nodes[down.index()].up = up;
    }

    fn unhide_one(&mut self, node: NodeId) {
        self.bump_size(self.column_of(node), 1);
        let up = self.nodes[node.index()].up;
        let down = self.nodes[node.index()].down;
        self.nodes[up.index()].down = node;
        self.nodes[down.index()].up = node;
    }

    fn bump_size(&mut self, header: NodeId, delta: isize) {
        if let crate::node::NodeKind::Header { size, .. } = &mut self.nodes[header.index()].kind {
            *size = size
                .checked_add_signed(delta)
                .expect("column size stays non-negative");
        }
    }
}
