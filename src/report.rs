//! Read-only depth-first traversal of the accumulated statistics.
//!
//! The traversals are lazy and restartable: each call starts a new pre-order
//! walk (node first, then its children in order) and both accept an absent
//! node, which yields nothing.

use std::io::Write;

use itertools::Itertools;

use crate::tree::Node;

/// Lazy pre-order iterator over a tree.
#[derive(Clone, Debug)]
pub struct PreOrder<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children().iter().rev());
        Some(node)
    }
}

/// Visits `node` and all of its descendants in pre-order.
#[must_use]
pub fn pre_order(node: Option<&Node>) -> PreOrder<'_> {
    PreOrder {
        stack: node.into_iter().collect(),
    }
}

/// Yields [`Node::success_rate`] of every node in pre-order. Nodes that were
/// never visited yield NaN.
pub fn success_rates(node: Option<&Node>) -> impl Iterator<Item = f64> + Clone + '_ {
    pre_order(node).map(Node::success_rate)
}

/// Writes one `Rate: <value>` line per node in pre-order.
pub fn write_report(node: Option<&Node>, output: &mut impl Write) -> anyhow::Result<()> {
    for rate in success_rates(node) {
        writeln!(output, "Rate: {rate}")?;
    }
    Ok(())
}

/// Formats the rates on a single line, e.g. `0.5 1 NaN`.
#[must_use]
pub fn summary(node: Option<&Node>) -> String {
    success_rates(node).join(" ")
}
