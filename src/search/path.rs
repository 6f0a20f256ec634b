/// Records a descent as the ordered child indices taken from the root.
///
/// The visited nodes form a stack: the root is the empty prefix and every
/// pushed index adds the next node on the way to the leaf. No parent pointers
/// are needed to walk back up.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Path {
    indices: Vec<usize>,
}

impl Path {
    /// Creates a path holding only the root.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves one level down into the child with given index.
    pub fn push(&mut self, index: usize) {
        self.indices.push(index);
    }

    /// Drops the deepest node. Returns `None` when only the root is left:
    /// the root can not be popped.
    pub fn pop(&mut self) -> Option<usize> {
        self.indices.pop()
    }

    /// Number of edges between the root and the deepest node.
    #[must_use]
    pub fn leaf_depth(&self) -> usize {
        self.indices.len()
    }

    /// Child indices from the root down to the deepest node.
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }
}

impl From<Vec<usize>> for Path {
    fn from(indices: Vec<usize>) -> Self {
        Self { indices }
    }
}
