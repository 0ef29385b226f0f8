//! Exact-cover search (Algorithm X).

use crate::{Network, NodeId};

/// Outcome of one [`Network::solve`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkSolution {
    /// Candidate indices of the solution rows (committed givens
    /// included), in commit order. Empty if the network has no exact
    /// cover.
    pub rows: Vec<usize>,
    /// `true` if a second distinct solution was found. When set, `rows`
    /// holds the first solution encountered.
    pub multiple_solutions: bool,
    /// Number of candidate rows tried during the search; a rough measure
    /// of how much backtracking the network required.
    pub nodes_tried: usize,
}

#[derive(Debug, Default)]
struct SearchState {
    solution: Vec<NodeId>,
    found: bool,
    multiple: bool,
    nodes_tried: usize,
}

impl Network {
    /// Runs the backtracking search and reports the first solution found,
    /// whether more than one exists, and the search cost.
    ///
    /// Rows already committed via
    /// [`add_to_solution`](Network::add_to_solution) are treated as fixed
    /// givens and included in the reported solution. The search leaves the
    /// network exactly as it found it (every cover is matched by an undo),
    /// so `solve` can be called repeatedly while givens are added; the
    /// generator leans on this.
    ///
    /// Search order: choose the reachable column with the fewest
    /// remaining candidates (leftmost on ties), cover it, and try each of
    /// its rows in chain order. Once a second solution is seen, the
    /// multiple-solutions flag prunes all remaining branching.
    pub fn solve(&mut self) -> NetworkSolution {
        let mut state = SearchState::default();
        self.search(&mut state);
        let rows = state
            .solution
            .iter()
            .filter_map(|&node| self.row_id(node))
            .collect();
        NetworkSolution {
            rows,
            multiple_solutions: state.multiple,
            nodes_tried: state.nodes_tried,
        }
    }

    fn search(&mut self, state: &mut SearchState) {
        if state.multiple {
            return;
        }
        if self.is_empty() {
            if state.found {
                state.multiple = true;
            } else {
                state.found = true;
                state.solution = self.partial.clone();
            }
            return;
        }

        let column = self.smallest_column();
        self.cover(column);
        let mut row = self.neighbor(column, crate::Direction::Down);
        while row != column {
            if state.multiple {
                break;
            }
            state.nodes_tried += 1;
            self.partial.push(row);
            let mut peer = self.neighbor(row, crate::Direction::Right);
            while peer != row {
                self.cover(self.column_of(peer));
                peer = self.neighbor(peer, crate::Direction::Right);
            }
            self.search(state);
            let mut peer = self.neighbor(row, crate::Direction::Left);
            while peer != row {
                self.undo();
                peer = self.neighbor(peer, crate::Direction::Left);
            }
            self.partial.pop();
            row = self.neighbor(row, crate::Direction::Down);
        }
        self.undo();
    }

    /// The reachable column with the fewest remaining candidates,
    /// breaking ties towards the start of the header ring.
    fn smallest_column(&self) -> NodeId {
        self.headers()
            .min_by_key(|&header| self.column_size(header))
            .expect("search only chooses a column while the network is non-empty")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Knuth's worked example from the Dancing Links paper; the unique
    // exact cover is rows {1, 3, 5}.
    fn knuth_matrix() -> Vec<Vec<u8>> {
        vec![
            vec![1, 0, 0, 1, 0, 0, 1],
            vec![1, 0, 0, 1, 0, 0, 0],
            vec![0, 0, 0, 1, 1, 0, 1],
            vec![0, 0, 1, 0, 1, 1, 0],
            vec![0, 1, 1, 0, 0, 1, 1],
            vec![0, 1, 0, 0, 0, 0, 1],
        ]
    }

    #[test]
    fn finds_the_unique_cover() {
        let mut network = Network::from_matrix(&knuth_matrix());
        let solution = network.solve();
        let mut rows = solution.rows;
        rows.sort_unstable();
        assert_eq!(rows, [1, 3, 5]);
        assert!(!solution.multiple_solutions);
        assert!(solution.nodes_tried >= 3);
    }

    #[test]
    fn search_restores_the_network() {
        let mut network = Network::from_matrix(&knuth_matrix());
        let before = network.to_matrix();
        let first = network.solve();
        assert!(network.is_fully_connected());
        assert_eq!(network.to_matrix(), before);
        assert_eq!(network.history_len(), 0);

        // A second run sees the same structure and the same answer.
        let second = network.solve();
        assert_eq!(first, second);
    }

    #[test]
    fn detects_multiple_solutions() {
        // Two disjoint ways to cover both columns.
        let mut network = Network::from_matrix(&[
            vec![1, 0],
            vec![0, 1],
            vec![1, 1],
        ]);
        let solution = network.solve();
        assert!(solution.multiple_solutions);
        assert!(!solution.rows.is_empty());
    }

    #[test]
    fn reports_no_solution_as_empty_rows() {
        // Column 2 has no candidates at all.
        let mut network = Network::from_matrix(&[vec![1, 0, 0], vec![0, 1, 0]]);
        let solution = network.solve();
        assert!(solution.rows.is_empty());
        assert!(!solution.multiple_solutions);
        assert!(network.is_fully_connected());
    }

    #[test]
    fn committed_givens_constrain_and_join_the_solution() {
        let mut network = Network::from_matrix(&[
            vec![1, 0],
            vec![0, 1],
            vec![1, 1],
        ]);
        // Committing row 0 rules out row 2, forcing the {0, 1} cover.
        let header = network.headers().next().unwrap();
        let given = network.column_nodes(header).next().unwrap();
        assert_eq!(network.row_id(given), Some(0));
        network.add_to_solution(given);

        let solution = network.solve();
        let mut rows = solution.rows;
        rows.sort_unstable();
        assert_eq!(rows, [0, 1]);
        assert!(!solution.multiple_solutions);
    }

    #[test]
    fn trivially_empty_network_has_one_empty_solution() {
        let mut network = Network::new(0, 0, |_, _| false);
        let solution = network.solve();
        assert!(solution.rows.is_empty());
        assert!(!solution.multiple_solutions);
        assert_eq!(solution.nodes_tried, 0);
    }
}
