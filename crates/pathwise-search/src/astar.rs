//! The best-first search engine.

use std::cmp::Ordering;

use hashbrown::HashMap;
use num_traits::Zero;
use pathwise_queue::PriorityQueue;

use crate::path::Path;
use crate::space::Uninformed;
use crate::traits::{Informed, SearchSpace};

/// A discovered node in the per-search arena.
///
/// Parent links index into the arena and always point at an earlier
/// record, so the records form a tree rooted at the start node and
/// backtracking cannot cycle.
struct SearchNode<N, C> {
    state: N,
    g: C,
    parent: Option<usize>,
}

/// Frontier entry: estimated total cost plus the arena index it refers
/// to. Orders by ascending `f`, then by ascending index, which is
/// creation order, so equal-cost entries pop oldest first and a search
/// is reproducible for a given space.
#[derive(Clone, Copy, PartialEq, Eq)]
struct OpenEntry<C> {
    f: C,
    idx: usize,
}

impl<C: Ord> Ord for OpenEntry<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.f.cmp(&other.f).then_with(|| self.idx.cmp(&other.idx))
    }
}

impl<C: Ord> PartialOrd for OpenEntry<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Computes the cheapest path from `start` to a goal node using A*.
///
/// Returns the full path (including both endpoints) or `None` if the
/// goal is unreachable. If `start` already satisfies the goal test the
/// path is `[start]` with zero cost. The result is cheapest only when
/// [`estimate`](Informed::estimate) is admissible.
///
/// # Panics
///
/// Panics if [`successors`](SearchSpace::successors) reports a negative
/// edge cost.
pub fn astar<S: Informed>(space: &S, start: S::Node) -> Option<Path<S::Node, S::Cost>> {
    let mut arena: Vec<SearchNode<S::Node, S::Cost>> = Vec::new();
    let mut open: PriorityQueue<OpenEntry<S::Cost>> = PriorityQueue::new();
    let mut finalized: HashMap<S::Node, S::Cost> = HashMap::new();
    let mut edges: Vec<(S::Node, S::Cost)> = Vec::new();
    let mut expanded = 0usize;

    let f = space.estimate(&start);
    arena.push(SearchNode {
        state: start,
        g: S::Cost::zero(),
        parent: None,
    });
    open.push(OpenEntry { f, idx: 0 });

    while let Some(OpenEntry { idx, .. }) = open.pop() {
        if space.is_goal(&arena[idx].state) {
            log::trace!(
                "goal reached: {expanded} expanded, {} discovered, {} left open",
                arena.len(),
                open.len()
            );
            return Some(reconstruct(&arena, idx));
        }

        // Skip stale entries: finding a cheaper route to a queued node
        // pushes a duplicate instead of rewriting the queued entry, and
        // the superseded one is discarded here.
        let g = arena[idx].g;
        if let Some(&best) = finalized.get(&arena[idx].state) {
            if best <= g {
                continue;
            }
        }
        finalized.insert(arena[idx].state.clone(), g);
        expanded += 1;

        edges.clear();
        space.successors(&arena[idx].state, &mut edges);
        for (next, edge) in edges.drain(..) {
            assert!(
                edge >= S::Cost::zero(),
                "successors reported a negative edge cost"
            );
            let tentative = g + edge;
            if let Some(&best) = finalized.get(&next) {
                if best <= tentative {
                    continue;
                }
            }
            let f = tentative + space.estimate(&next);
            let child = arena.len();
            arena.push(SearchNode {
                state: next,
                g: tentative,
                parent: Some(idx),
            });
            open.push(OpenEntry { f, idx: child });
        }
    }

    log::trace!("frontier exhausted: {expanded} expanded, {} discovered", arena.len());
    None
}

/// Computes the cheapest path from `start` to a goal node by uniform-cost
/// search, i.e. A* with a constant-zero estimate.
///
/// Needs no remaining-cost estimate, so it works for any
/// [`SearchSpace`]; the result is still cheapest, just found with less
/// guidance. Panics on negative edge costs like [`astar`].
pub fn uniform_cost<S: SearchSpace>(space: &S, start: S::Node) -> Option<Path<S::Node, S::Cost>> {
    astar(&Uninformed(space), start)
}

/// Walks parent links from the goal record back to the start, then
/// reverses into start-to-goal order.
fn reconstruct<N: Clone, C: Copy>(arena: &[SearchNode<N, C>], goal: usize) -> Path<N, C> {
    let mut nodes = Vec::new();
    let mut cur = Some(goal);
    while let Some(idx) = cur {
        nodes.push(arena[idx].state.clone());
        cur = arena[idx].parent;
    }
    nodes.reverse();
    Path::new(nodes, arena[goal].g)
}
