//! Generic best-first search: A* and uniform-cost over caller-defined
//! graphs.
//!
//! The engine knows nothing about grids or coordinates. A caller
//! describes its graph by implementing [`SearchSpace`] (successor edges
//! plus a goal test) and, for A*, [`Informed`] (an admissible
//! remaining-cost estimate), or by bundling three closures into a
//! [`FnSpace`]. Nodes may be any `Clone + Eq + Hash` type and costs any
//! ordered type with addition and a zero, so the same entry points serve
//! mazes, weighted route graphs and abstract state spaces.
//!
//! Revisits are handled by lazy deletion: finding a cheaper route to an
//! already-queued node pushes a duplicate frontier entry rather than
//! rewriting the queued one, and stale entries are discarded when they
//! pop. Equal-cost entries pop in creation order, so searches are
//! reproducible.
//!
//! | Entry point | Needs | Guarantee |
//! |---|---|---|
//! | [`astar`] | [`Informed`] | cheapest path if the estimate is admissible |
//! | [`uniform_cost`] | [`SearchSpace`] | cheapest path |
//!
//! ```
//! use pathwise_search::{FnSpace, astar};
//!
//! // Count from 0 to 9 with +1 (cost 1) and +3 (cost 2) steps.
//! let space = FnSpace::new(
//!     |&n: &i32, buf: &mut Vec<(i32, i32)>| {
//!         buf.push((n + 1, 1));
//!         buf.push((n + 3, 2));
//!     },
//!     |&n: &i32| n == 9,
//!     |&n: &i32| (9 - n).max(0) / 3,
//! );
//! let path = astar(&space, 0).expect("9 is reachable");
//! assert_eq!(path.cost(), 6);
//! ```

mod astar;
mod path;
mod space;
mod traits;

pub use astar::{astar, uniform_cost};
pub use path::Path;
pub use space::FnSpace;
pub use traits::{Informed, SearchSpace};
