/*!
# Graph Algorithms

This module provides the algorithms that run on a finished [`MultiDigraph`](crate::repr::MultiDigraph)
(or any other [`DirectedAdjacencyList`]):

- [`DegreeStatistics`]: minimum/maximum in- and out-degrees, also available as
  `graph.degree_statistics()` via [`GraphStatistics`],
- [`RandomSurfer`]: an empirical rank estimate obtained by simulating a random walk with resets,
- [`PowerIteration`]: an analytic rank estimate obtained by repeatedly multiplying a probability
  vector with the damped transition matrix of the graph.

The rank estimators are configured with the *Builder* pattern before being run on a graph:
```rust
use dotrank::{prelude::*, algo::*};

let graph = MultiDigraph::from_named_edges([("A", "B"), ("B", "A")]);
let ranks = PowerIteration::new().damping(0.5).iterations(200).ranks(&graph).unwrap();
assert!((ranks[0] - 0.5).abs() < 1e-12);
```

Both estimators treat invalid parameters (no nodes, no steps, a probability outside `(0, 1]`)
as a no-op: nothing is computed and a caller supplied buffer is left untouched.
*/

mod power_iteration;
mod random_surfer;
mod statistics;

use crate::{prelude::*, utils::*};

pub use power_iteration::*;
pub use random_surfer::*;
pub use statistics::*;

/// Default reset/damping probability `p = 0.1`
pub const DEFAULT_RESET_PROBABILITY: f64 = 0.1;

/// Returns *true* if a rank estimator configured with `p` and `steps` does any work on `graph`
fn rank_preconditions_hold<G: GraphNodeOrder>(graph: &G, p: f64, steps: u64) -> bool {
    !graph.is_empty() && p.is_positive_probility() && steps > 0
}
