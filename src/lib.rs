/*!
`dotrank` reads directed multigraphs written in a small subset of the DOT notation and reports
either their degree statistics or an estimate of the importance ("rank") of every node.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
Ids are handed out in the order in which node names are first seen and never change afterwards;
this insertion order is also the order of every report.
For **edges**, we use a simple tuple-struct `Edge(Node, Node)`.

Graphs are **directed multigraphs**: parallel edges and self-loops are allowed and counted with
their *multiplicity*. The only representation is the dense [`MultiDigraph`](crate::repr::MultiDigraph),
a growable square matrix of edge counts, as rank estimation touches every pair of nodes anyway.

# Rank Estimation

Both estimators share a *reset* (or *damping*) probability `p` in `(0, 1]`:

- [`RandomSurfer`](crate::algo::RandomSurfer) simulates a walker that follows a random outgoing
  link or, with probability `p`, jumps to a uniformly random node. The rank of a node is the
  fraction of steps that ended in it.
- [`PowerIteration`](crate::algo::PowerIteration) repeatedly multiplies the uniform distribution
  with the damped transition matrix of the graph for a fixed number of rounds.

# Design

All algorithms are provided as configurable structs that one can alter to their needs using the
*Builder* / *Setter* pattern before calling the configured algorithm on a provided graph.
The degree statistics are also implemented as a trait on the graph itself
(`graph.degree_statistics()`).

# Usage

There are *4* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, basic graph operations, and the graph representation,
- [`algo`] includes the statistics and both rank estimators,
- [`io`] includes the DOT reader and the report writers,
- [`cli`] includes the command line surface of the `dotrank` binary.

In most use-cases, `use dotrank::{prelude::*, algo::*};` suffices for your needs.

```
use dotrank::{prelude::*, algo::*};

let graph = MultiDigraph::from_named_edges([("A", "B"), ("B", "C"), ("C", "A"), ("A", "C")]);
let stats = graph.degree_statistics();
assert_eq!((stats.min_out_degree, stats.max_out_degree), (1, 2));

let ranks = PowerIteration::new().damping(0.15).iterations(50).ranks(&graph).unwrap();
assert!((ranks.iter().sum::<f64>() - 1.0).abs() < 1e-9);
```
*/

pub mod algo;
pub mod cli;
pub mod edge;
pub mod exit;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
pub(crate) mod testing;
pub mod utils;

pub use edge::*;
pub use node::*;

/// `dotrank::prelude` includes definitions for nodes and edges, all basic graph operation traits as well as the graph representation.
pub mod prelude {
    pub use super::{edge::*, node::*, ops::*, repr::*};
}
