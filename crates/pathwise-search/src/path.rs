//! Search results.

use std::ops::Index;
use std::slice;
use std::vec;

/// A start-to-goal node sequence together with its total edge cost.
///
/// Produced by [`astar`](crate::astar) and
/// [`uniform_cost`](crate::uniform_cost). Never empty: the first node is
/// the search start, the last one satisfies the goal test, and when the
/// start itself is a goal the path is just `[start]` with zero cost.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path<N, C> {
    nodes: Vec<N>,
    cost: C,
}

impl<N, C> Path<N, C> {
    pub(crate) fn new(nodes: Vec<N>, cost: C) -> Self {
        Self { nodes, cost }
    }

    /// The node sequence from start to goal.
    #[inline]
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    /// Number of nodes, edges plus one.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the path holds no nodes. Always `false` for paths the
    /// search engine returns.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates over the nodes from start to goal.
    pub fn iter(&self) -> slice::Iter<'_, N> {
        self.nodes.iter()
    }

    /// Consumes the path, returning just the node sequence.
    pub fn into_nodes(self) -> Vec<N> {
        self.nodes
    }
}

impl<N, C: Copy> Path<N, C> {
    /// Total cost of the path: the sum of its edge costs.
    #[inline]
    pub fn cost(&self) -> C {
        self.cost
    }
}

impl<N, C> Index<usize> for Path<N, C> {
    type Output = N;

    fn index(&self, idx: usize) -> &N {
        &self.nodes[idx]
    }
}

impl<N, C> IntoIterator for Path<N, C> {
    type Item = N;
    type IntoIter = vec::IntoIter<N>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}

impl<'a, N, C> IntoIterator for &'a Path<N, C> {
    type Item = &'a N;
    type IntoIter = slice::Iter<'a, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}
