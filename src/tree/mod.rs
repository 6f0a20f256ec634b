//! The tree data model: every [`Node`] exclusively owns its children and keeps
//! win/loss statistics of the descents that went through it.
//!
//! Topology is fixed at construction time (either directly or through
//! [`create_random_tree`]); afterwards only the counters change, and only
//! through [`crate::search`] backpropagation.

mod builder;

pub use builder::{
    create_random_tree, TreeConfig, DEFAULT_DEPTH, DEFAULT_MAX_CHILDREN, DEFAULT_WIN_RATE,
};

use crate::report::pre_order;
use crate::search::Outcome;

/// Remaining recursion budget (tree height) for the builder.
pub type Depth = u8;

/// A node of the search tree.
///
/// A node without children is a leaf. Only leaves consult [`Node::is_valid`]:
/// a valid leaf is a winning outcome of a descent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Node {
    children: Vec<Node>,
    /// Number of descents through this node that reached a valid leaf.
    success: u32,
    /// Number of all descents through this node.
    total: u32,
    valid: bool,
}

impl Node {
    /// Creates a fresh node: no children, no statistics, not valid.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a leaf which is a winning outcome iff `valid` is set.
    #[must_use]
    pub fn leaf(valid: bool) -> Self {
        Self {
            valid,
            ..Self::default()
        }
    }

    /// Creates an inner node owning given children.
    #[must_use]
    pub fn with_children(children: Vec<Self>) -> Self {
        Self {
            children,
            ..Self::default()
        }
    }

    /// Builds the small fixed tree used for demonstrations:
    ///
    /// ```text
    /// root
    /// ├── leaf
    /// ├── ·
    /// │   ├── leaf (valid)
    /// │   └── leaf
    /// └── ·
    ///     ├── ·
    ///     │   ├── leaf (valid)
    ///     │   └── leaf (valid)
    ///     └── ·
    ///         └── leaf
    /// ```
    #[must_use]
    pub fn example() -> Self {
        Self::with_children(vec![
            Self::new(),
            Self::with_children(vec![Self::leaf(true), Self::new()]),
            Self::with_children(vec![
                Self::with_children(vec![Self::leaf(true), Self::leaf(true)]),
                Self::with_children(vec![Self::new()]),
            ]),
        ])
    }

    /// Children in order; empty for leaves.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    /// Number of descents through this node that reached a valid leaf.
    #[must_use]
    pub const fn success(&self) -> u32 {
        self.success
    }

    /// Number of all descents through this node.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.total
    }

    /// Whether this is a winning leaf. Meaningless for inner nodes.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    /// A node without children is a leaf.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the number of nodes in this subtree, including itself.
    #[must_use]
    pub fn size(&self) -> usize {
        pre_order(Some(self)).count()
    }

    /// Records a descent through this node that reached a valid leaf.
    ///
    /// Counters saturate at [`u32::MAX`] so that `success <= total` holds
    /// even past that many descents.
    pub fn add_successful(&mut self) {
        self.success = self.success.saturating_add(1);
        self.total = self.total.saturating_add(1);
    }

    /// Records a descent through this node that reached an invalid leaf.
    pub fn add_failure(&mut self) {
        self.total = self.total.saturating_add(1);
    }

    pub(crate) fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Success => self.add_successful(),
            Outcome::Failure => self.add_failure(),
        }
    }

    /// Returns `success / total` or NaN if no descent went through this node
    /// yet. NaN means "no data" and is not a valid ratio.
    #[must_use]
    pub fn success_rate(&self) -> f64 {
        if self.total == 0 {
            return f64::NAN;
        }
        f64::from(self.success) / f64::from(self.total)
    }

    /// Follows child indices starting from this node.
    ///
    /// # Panics
    ///
    /// Panics if any index is out of bounds for the node it is applied to.
    #[must_use]
    pub fn descendant(&self, indices: &[usize]) -> &Self {
        indices
            .iter()
            .fold(self, |node, &index| &node.children[index])
    }

    pub(crate) fn descendant_mut(&mut self, indices: &[usize]) -> &mut Self {
        indices
            .iter()
            .fold(self, |node, &index| &mut node.children[index])
    }

    pub(crate) fn set_children(&mut self, children: Vec<Self>) {
        self.children = children;
    }
}
