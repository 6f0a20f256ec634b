//! Randomized tree generation of bounded depth and branching factor.

use anyhow::bail;
use rand::Rng;

use super::{Depth, Node};

/// Height of the generated trees unless configured otherwise.
pub const DEFAULT_DEPTH: Depth = 4;
/// Percentage threshold a child's draw in `[0, 100]` has to reach to become a
/// valid (winning) leaf.
pub const DEFAULT_WIN_RATE: u8 = 98;
/// Inclusive upper bound on the number of children of a generated node.
pub const DEFAULT_MAX_CHILDREN: usize = 3;

/// Children draw from `[0, MAX_DRAW]`: with the inclusive bound a child is
/// valid with probability `(MAX_DRAW - win_rate + 1) / (MAX_DRAW + 1)`.
const MAX_DRAW: u8 = 100;

fn draw<R: Rng + ?Sized>(rng: &mut R) -> u8 {
    rng.gen_range(0..=MAX_DRAW)
}

const fn is_winning(draw: u8, win_rate: u8) -> bool {
    draw >= win_rate
}

/// Parameters of [`create_random_tree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TreeConfig {
    /// Recursion budget: the generated tree is at most this many edges deep.
    pub depth: Depth,
    /// A child is valid iff a uniform draw from `[0, 100]` is `>= win_rate`,
    /// i.e. with probability `(100 - win_rate + 1) / 101`.
    pub win_rate: u8,
    /// Each expanded node gets a uniform number of children from
    /// `[0, max_children]`.
    pub max_children: usize,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            win_rate: DEFAULT_WIN_RATE,
            max_children: DEFAULT_MAX_CHILDREN,
        }
    }
}

impl TreeConfig {
    /// Checks that `win_rate` is a percentage.
    ///
    /// [`create_random_tree`] itself accepts any `win_rate`: values above 100
    /// simply never produce a valid child.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.win_rate > 100 {
            bail!("win rate should be within [0, 100], got {}", self.win_rate);
        }
        Ok(())
    }

    /// Builds a fresh random tree.
    #[must_use]
    pub fn build<R: Rng + ?Sized>(&self, rng: &mut R) -> Node {
        let mut root = Node::new();
        self.populate(&mut root, rng);
        tracing::debug!(nodes = root.size(), config = ?self, "built random tree");
        root
    }

    /// Grows a random subtree under `parent`, see [`create_random_tree`].
    pub fn populate<R: Rng + ?Sized>(&self, parent: &mut Node, rng: &mut R) {
        create_random_tree(self.depth, parent, self.win_rate, self.max_children, rng);
    }
}

/// Populates `parent` with a random subtree.
///
/// Nothing happens if `depth` is 0 or `parent` is already a valid leaf:
/// winning leaves stay leaves. Otherwise `parent` gets a uniform number of
/// children from `[0, max_children]` (replacing any it had), each child is
/// valid iff an independent draw from `[0, 100]` is `>= win_rate`, and the
/// builder recurses into every child with `depth - 1`.
pub fn create_random_tree<R: Rng + ?Sized>(
    depth: Depth,
    parent: &mut Node,
    win_rate: u8,
    max_children: usize,
    rng: &mut R,
) {
    if depth == 0 || parent.is_valid() {
        return;
    }
    let count = rng.gen_range(0..=max_children);
    let mut children = Vec::with_capacity(count);
    for _ in 0..count {
        let roll = draw(rng);
        let mut child = Node::leaf(is_winning(roll, win_rate));
        tracing::trace!(depth, draw = roll, valid = child.is_valid(), "new child");
        create_random_tree(depth - 1, &mut child, win_rate, max_children, rng);
        children.push(child);
    }
    parent.set_children(children);
}
