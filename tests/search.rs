use mctree::report::{pre_order, success_rates};
use mctree::search::{self, backpropagate, descend, random_descent, Outcome, Path};
use mctree::tree::create_random_tree;
use mctree::{Node, TreeConfig};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Flattens `(success, total)` of every node in pre-order.
fn counters(root: &Node) -> Vec<(u32, u32)> {
    pre_order(Some(root))
        .map(|node| (node.success(), node.total()))
        .collect()
}

/// Pre-order positions of the nodes on a root-to-leaf walk.
fn path_positions(root: &Node, indices: &[usize]) -> Vec<usize> {
    let mut positions = vec![0];
    let mut position = 0;
    let mut node = root;
    for &index in indices {
        position += 1 + node.children()[..index]
            .iter()
            .map(Node::size)
            .sum::<usize>();
        node = &node.children()[index];
        positions.push(position);
    }
    positions
}

fn arb_config() -> impl Strategy<Value = TreeConfig> {
    (0u8..7, 0u8..=100, 0usize..5).prop_map(|(depth, win_rate, max_children)| TreeConfig {
        depth,
        win_rate,
        max_children,
    })
}

#[test]
fn two_leaves_scenario() {
    let mut root = Node::with_children(vec![Node::leaf(false), Node::leaf(true)]);
    let path = descend(&root, |_| 1);
    let outcome = backpropagate(&mut root, path);
    assert_eq!(outcome, Outcome::Success);
    assert_eq!(counters(&root), vec![(1, 1), (0, 0), (1, 1)]);
}

#[test]
#[allow(clippy::float_cmp)]
fn sentinel_law() {
    let mut node = Node::leaf(true);
    assert!(node.success_rate().is_nan());
    assert_eq!(backpropagate(&mut node, Path::new()), Outcome::Success);
    assert_eq!(node.success_rate(), 1.0);
}

#[test]
fn valid_leaves_of_example_win() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let mut root = Node::example();
    search::run_iterations(&mut root, 1000, &mut rng);

    // Winners only ever record successes, losers only failures.
    for node in pre_order(Some(&root)).filter(|node| node.is_leaf()) {
        if node.is_valid() {
            assert_eq!(node.success(), node.total());
        } else {
            assert_eq!(node.success(), 0);
        }
    }
    // Child 1 has exactly one winning leaf out of two.
    let rate = root.children()[1].success_rate();
    assert!((0.4..0.6).contains(&rate), "{rate}");
}

#[test]
fn builder_on_valid_node_keeps_it_leaf() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let mut winner = Node::leaf(true);
    let mut other = Node::new();
    create_random_tree(10, &mut other, 50, 4, &mut rng);
    create_random_tree(10, &mut winner, 0, 4, &mut rng);
    assert_eq!(winner, Node::leaf(true));
}

proptest! {
    #[test]
    fn prop_counters_invariant(seed in any::<u64>(), config in arb_config(), iterations in 0usize..64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut root = config.build(&mut rng);
        for _ in 0..iterations {
            search::run_iteration(&mut root, &mut rng);
            for node in pre_order(Some(&root)) {
                prop_assert!(node.success() <= node.total());
            }
        }
        prop_assert_eq!(root.total() as usize, iterations);
        prop_assert_eq!(success_rates(Some(&root)).count(), root.size());
    }

    #[test]
    fn prop_path_consistency(seed in any::<u64>(), config in arb_config()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut root = config.build(&mut rng);
        search::run_iterations(&mut root, 8, &mut rng);

        let before = counters(&root);
        let path = random_descent(&root, &mut rng);
        let on_path = path_positions(&root, path.indices());
        let outcome = backpropagate(&mut root, path);
        let after = counters(&root);

        for (position, (old, new)) in before.iter().zip(&after).enumerate() {
            if on_path.contains(&position) {
                prop_assert_eq!(new.1, old.1 + 1);
                prop_assert_eq!(new.0, old.0 + u32::from(outcome == Outcome::Success));
            } else {
                prop_assert_eq!(old, new);
            }
        }
    }

    #[test]
    fn prop_valid_nodes_are_leaves(seed in any::<u64>(), config in arb_config()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let root = config.build(&mut rng);
        for node in pre_order(Some(&root)) {
            prop_assert!(!node.is_valid() || node.is_leaf());
            prop_assert!(node.children().len() <= config.max_children);
        }
    }
}
