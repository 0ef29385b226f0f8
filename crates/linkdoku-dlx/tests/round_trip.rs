//! Round-trip laws for the mutation engine.
//!
//! Applies random sequences of valid cover/remove/hide operations to
//! random matrices, then unwinds them and checks that the structure is
//! restored exactly.

use linkdoku_dlx::{Direction, Network, NodeId};
use proptest::prelude::*;
use rand::{RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64Mcg;

/// Picks a random reachable header, if any.
fn random_header(network: &Network, rng: &mut Pcg64Mcg) -> Option<NodeId> {
    let headers = network.headers().collect::<Vec<_>>();
    if headers.is_empty() {
        return None;
    }
    Some(headers[rng.random_range(0..headers.len())])
}

/// Picks a random row node still linked under a reachable header, if any.
fn random_row_node(network: &Network, rng: &mut Pcg64Mcg) -> Option<NodeId> {
    let nodes = network
        .headers()
        .flat_map(|header| network.column_nodes(header))
        .collect::<Vec<_>>();
    if nodes.is_empty() {
        return None;
    }
    Some(nodes[rng.random_range(0..nodes.len())])
}

fn apply_random_operations(network: &mut Network, rng: &mut Pcg64Mcg, count: usize) -> usize {
    let mut applied = 0;
    for _ in 0..count {
        match rng.random_range(0..3) {
            0 => {
                let Some(header) = random_header(network, rng) else {
                    break;
                };
                network.cover(header);
            }
            1 => {
                let Some(node) = random_row_node(network, rng) else {
                    break;
                };
                network.remove(node);
            }
            _ => {
                let Some(node) = random_row_node(network, rng) else {
                    break;
                };
                network.hide(node);
            }
        }
        applied += 1;
    }
    applied
}

proptest! {
    #[test]
    fn operations_then_reset_restore_the_matrix(
        rows in 1usize..8,
        columns in 1usize..8,
        bits in proptest::collection::vec(any::<bool>(), 64),
        operations in 0usize..24,
        seed in any::<u64>(),
    ) {
        let matrix = (0..rows)
            .map(|r| (0..columns).map(|c| u8::from(bits[r * 8 + c])).collect::<Vec<_>>())
            .collect::<Vec<_>>();
        let mut network = Network::from_matrix(&matrix);
        let before = network.to_matrix();
        prop_assert!(network.is_fully_connected());

        let mut rng = Pcg64Mcg::seed_from_u64(seed);
        let applied = apply_random_operations(&mut network, &mut rng, operations);
        prop_assert!(network.is_fully_connected());
        prop_assert_eq!(network.history_len(), applied);

        network.reset();
        prop_assert_eq!(network.to_matrix(), before);
        prop_assert!(network.is_fully_connected());
        prop_assert_eq!(network.history_len(), 0);
    }

    #[test]
    fn undo_inverts_one_operation_at_a_time(
        seed in any::<u64>(),
        operations in 1usize..12,
    ) {
        // A dense-ish fixed matrix keeps every operation kind applicable.
        let matrix = vec![
            vec![1, 0, 1, 0, 1],
            vec![0, 1, 0, 1, 0],
            vec![1, 1, 0, 0, 1],
            vec![0, 0, 1, 1, 0],
            vec![1, 0, 0, 1, 1],
        ];
        let mut network = Network::from_matrix(&matrix);
        let mut rng = Pcg64Mcg::seed_from_u64(seed);

        // Snapshot the visible matrix before each operation, then undo
        // them one by one and compare against the snapshots in reverse.
        let mut snapshots = Vec::new();
        for _ in 0..operations {
            snapshots.push(network.to_matrix());
            if apply_random_operations(&mut network, &mut rng, 1) == 0 {
                snapshots.pop();
                break;
            }
        }
        for snapshot in snapshots.iter().rev() {
            prop_assert!(network.undo());
            prop_assert_eq!(&network.to_matrix(), snapshot);
            prop_assert!(network.is_fully_connected());
        }
        prop_assert!(!network.undo());
    }
}

#[test]
fn hide_preserves_header_reachability() {
    let mut network = Network::from_matrix(&[vec![1, 1, 0], vec![0, 1, 1], vec![1, 0, 1]]);
    let headers_before = network.headers().count();

    let first_header = network.headers().next().unwrap();
    let node = network.column_nodes(first_header).next().unwrap();
    network.hide(node);

    assert_eq!(network.headers().count(), headers_before);
    // The hidden row's horizontal ring is intact; only vertical links and
    // sizes changed.
    let peers = network.chain(node, Direction::Right).count();
    assert_eq!(peers, 1);
    network.reset();
    assert!(network.is_fully_connected());
}
