//! One search iteration is a pure random walk from the root down to a leaf
//! followed by backpropagation of the leaf's outcome to every node on the
//! walked path.
//!
//! There is no selection policy (UCB or otherwise), no expansion and no
//! rollout: the outcome is the leaf's validity flag set when the tree was
//! built.
//!
//! Iterations mutate counters in place and must be serialized by the caller.

use rand::Rng;

use crate::tree::Node;

mod path;
pub use path::Path;

/// Result of a single descent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The descent reached a valid leaf.
    Success,
    /// The descent reached a leaf that is not valid.
    Failure,
}

impl From<bool> for Outcome {
    fn from(valid: bool) -> Self {
        if valid {
            Self::Success
        } else {
            Self::Failure
        }
    }
}

/// Walks from `root` down to a leaf. At every inner node `choose` is given
/// the number of children and returns the index of the child to step into.
///
/// # Panics
///
/// Panics if `choose` returns an index out of bounds.
pub fn descend(root: &Node, mut choose: impl FnMut(usize) -> usize) -> Path {
    let mut path = Path::new();
    let mut node = root;
    while !node.is_leaf() {
        let index = choose(node.children().len());
        node = &node.children()[index];
        path.push(index);
    }
    path
}

/// Walks from `root` down to a leaf picking children uniformly at random.
pub fn random_descent<R: Rng + ?Sized>(root: &Node, rng: &mut R) -> Path {
    descend(root, |children| rng.gen_range(0..children))
}

/// Updates every node on `path`, from the leaf back up to the root, with the
/// outcome of the leaf the path ends in. Nodes off the path are untouched.
///
/// # Panics
///
/// Panics if `path` does not describe a root-to-leaf walk in `root`'s tree.
pub fn backpropagate(root: &mut Node, mut path: Path) -> Outcome {
    let leaf = root.descendant(path.indices());
    assert!(leaf.is_leaf(), "path has to end in a leaf: {path:?}");
    let outcome = Outcome::from(leaf.is_valid());
    loop {
        root.descendant_mut(path.indices()).record(outcome);
        if path.pop().is_none() {
            break;
        }
    }
    outcome
}

/// Performs one iteration: a uniformly random descent followed by
/// backpropagation. A root without children only updates itself.
pub fn run_iteration<R: Rng + ?Sized>(root: &mut Node, rng: &mut R) {
    let path = random_descent(root, rng);
    let depth = path.leaf_depth();
    let outcome = backpropagate(root, path);
    tracing::debug!(depth, ?outcome, "search iteration");
}

/// Runs [`run_iteration`] `iterations` times on the same tree.
pub fn run_iterations<R: Rng + ?Sized>(root: &mut Node, iterations: usize, rng: &mut R) {
    for _ in 0..iterations {
        run_iteration(root, rng);
    }
}
