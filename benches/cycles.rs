//! iai benchmarks are measuring projected processor cycles spent on executing a
//! piece of code. They are less noisy and give a better understanding of
//! whether the performance is "objectively" changing between different
//! versions.
//!
//! The measurements include the whole function execution, so tree building is
//! benchmarked on its own and once more as part of the search benchmark.

use mctree::{search, TreeConfig};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const CONFIG: TreeConfig = TreeConfig {
    depth: 8,
    win_rate: 90,
    max_children: 4,
};

fn build_tree() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let _ = iai::black_box(CONFIG.build(&mut rng));
}

fn build_and_search() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut root = CONFIG.build(&mut rng);
    search::run_iterations(&mut root, 10_000, &mut rng);
    let _ = iai::black_box(root.total());
}

iai::main!(build_tree, build_and_search);
