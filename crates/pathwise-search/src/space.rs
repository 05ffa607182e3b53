//! Adapters for building search spaces without a dedicated type.

use std::hash::Hash;
use std::marker::PhantomData;
use std::ops::Add;

use num_traits::Zero;

use crate::traits::{Informed, SearchSpace};

/// A search space assembled from three closures: successors, goal test,
/// remaining-cost estimate.
///
/// Handy for one-off searches where a dedicated [`SearchSpace`] type is
/// not worth defining. The closures borrow whatever state they need from
/// the environment.
pub struct FnSpace<N, C, FS, FG, FH> {
    successors: FS,
    is_goal: FG,
    estimate: FH,
    _marker: PhantomData<fn(N) -> C>,
}

impl<N, C, FS, FG, FH> FnSpace<N, C, FS, FG, FH>
where
    FS: Fn(&N, &mut Vec<(N, C)>),
    FG: Fn(&N) -> bool,
    FH: Fn(&N) -> C,
{
    /// Bundles the three callbacks into a space. For uniform-cost search
    /// pass a constant-zero `estimate` or ignore it by calling
    /// [`uniform_cost`](crate::uniform_cost).
    pub fn new(successors: FS, is_goal: FG, estimate: FH) -> Self {
        Self {
            successors,
            is_goal,
            estimate,
            _marker: PhantomData,
        }
    }
}

impl<N, C, FS, FG, FH> SearchSpace for FnSpace<N, C, FS, FG, FH>
where
    N: Clone + Eq + Hash,
    C: Copy + Ord + Add<Output = C> + Zero,
    FS: Fn(&N, &mut Vec<(N, C)>),
    FG: Fn(&N) -> bool,
{
    type Node = N;
    type Cost = C;

    fn successors(&self, n: &N, buf: &mut Vec<(N, C)>) {
        (self.successors)(n, buf);
    }

    fn is_goal(&self, n: &N) -> bool {
        (self.is_goal)(n)
    }
}

impl<N, C, FS, FG, FH> Informed for FnSpace<N, C, FS, FG, FH>
where
    N: Clone + Eq + Hash,
    C: Copy + Ord + Add<Output = C> + Zero,
    FS: Fn(&N, &mut Vec<(N, C)>),
    FG: Fn(&N) -> bool,
    FH: Fn(&N) -> C,
{
    fn estimate(&self, n: &N) -> C {
        (self.estimate)(n)
    }
}

/// Wraps a space so every estimate is zero, turning informed search into
/// uniform-cost search.
pub(crate) struct Uninformed<'a, S>(pub(crate) &'a S);

impl<S: SearchSpace> SearchSpace for Uninformed<'_, S> {
    type Node = S::Node;
    type Cost = S::Cost;

    fn successors(&self, n: &Self::Node, buf: &mut Vec<(Self::Node, Self::Cost)>) {
        self.0.successors(n, buf);
    }

    fn is_goal(&self, n: &Self::Node) -> bool {
        self.0.is_goal(n)
    }
}

impl<S: SearchSpace> Informed for Uninformed<'_, S> {
    fn estimate(&self, _n: &Self::Node) -> Self::Cost {
        S::Cost::zero()
    }
}
