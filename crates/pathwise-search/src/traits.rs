//! The callback traits a search space implements.

use std::hash::Hash;
use std::ops::Add;

use num_traits::Zero;

/// An implicit graph to search over: successor edges plus a goal
/// condition.
///
/// The engine never looks inside a node. It clones nodes, compares them
/// for equality and hashes them to detect revisits, and otherwise hands
/// them back to the callbacks, so the graph may be given lazily and can
/// be arbitrarily large as long as the searched region stays finite.
pub trait SearchSpace {
    /// Node type. Equality and hashing must agree (`a == b` implies
    /// equal hashes), otherwise revisit detection misbehaves.
    type Node: Clone + Eq + Hash;

    /// Cost type for edges and accumulated path costs. `Ord` supplies
    /// the total order used to rank frontier entries; integers and other
    /// totally ordered types work directly, floating-point costs need a
    /// total-order wrapper.
    type Cost: Copy + Ord + Add<Output = Self::Cost> + Zero;

    /// Appends every `(successor, edge_cost)` pair reachable from `n` in
    /// one step to `buf`. The engine clears `buf` before each call, so
    /// implementations only append. Edge costs must be non-negative; the
    /// engine panics on a negative one rather than return wrong paths.
    fn successors(&self, n: &Self::Node, buf: &mut Vec<(Self::Node, Self::Cost)>);

    /// Whether `n` satisfies the goal condition. A predicate rather than
    /// a target node, so searches can accept any of several goals.
    fn is_goal(&self, n: &Self::Node) -> bool;
}

/// A [`SearchSpace`] that can also estimate the remaining cost to a
/// goal, which is what lets A* outperform uniform-cost search.
pub trait Informed: SearchSpace {
    /// Estimated cost still needed to reach a goal from `n`.
    ///
    /// For [`astar`](crate::astar) to guarantee cheapest paths the
    /// estimate must be admissible: never greater than the true
    /// remaining cost. The engine does not verify this; an inadmissible
    /// estimate still terminates but may return a more expensive path.
    fn estimate(&self, n: &Self::Node) -> Self::Cost;
}
