#![no_main]
use libfuzzer_sys::fuzz_target;
use mctree::report::pre_order;
use mctree::{search, TreeConfig};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fuzz_target!(|data: &[u8]| {
    let [depth, win_rate, max_children, iterations, seed @ ..] = data else {
        return;
    };
    let config = TreeConfig {
        depth: depth % 8,
        win_rate: *win_rate,
        max_children: usize::from(max_children % 6),
    };
    let mut seed_bytes = [0u8; 8];
    for (byte, value) in seed_bytes.iter_mut().zip(seed) {
        *byte = *value;
    }
    let mut rng = ChaCha8Rng::seed_from_u64(u64::from_le_bytes(seed_bytes));

    let mut root = config.build(&mut rng);
    search::run_iterations(&mut root, usize::from(*iterations), &mut rng);

    assert_eq!(root.total(), u32::from(*iterations));
    for node in pre_order(Some(&root)) {
        assert!(node.success() <= node.total());
        assert!(!node.is_valid() || node.is_leaf());
        assert!(node.children().len() <= config.max_children);
    }
});
