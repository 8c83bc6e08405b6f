/*!
`wgraphs` is a toolkit of classical algorithms on **w**eighted directed graphs whose nodes are
numbered `0` to `n - 1`.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
Edges are directed and carry a signed integer [`Weight`] (`i64` by default); edges given without
a weight get weight `1`, so hop counts and path weights coincide on unweighted input.

A graph is built once from an edge list and is immutable afterwards:
- [`AdjArray`](crate::repr::AdjArray): adjacency lists in insertion order (the default),
- [`AdjMatrix`](crate::repr::AdjMatrix): a dense weight matrix.

Undirected graphs are modelled by inserting every edge in both directions
(see [`try_from_undirected_edges`]).

[`try_from_undirected_edges`]: crate::ops::GraphFromScratch::try_from_undirected_edges

# Design

All algorithms are provided as structs that are constructed from a graph, run once and then
answer read-only queries. Options are set in builder-style (`with_*`) before the algorithm runs.
The most important functionality is additionally exposed via traits on the graph itself, e.g.
`graph.bfs(0)`, `graph.topological_sort()`, `graph.dijkstra(0)`.

Algorithms only borrow the graph immutably and own all of their working state, so any number
of them may run on the same graph, also from different threads.

Failures are reported as [`Error`] values: `InvalidIndex`, `NoPathExists`, `CyclicGraph` and
the opt-in `NegativeCycle`. Unreached nodes in distance vectors are regular `None` values.

# Usage

```rust
use wgraphs::{prelude::*, algo::*};

let graph: AdjArray =
    AdjArray::try_from_edges(4, [(0, 1, 4), (0, 2, 1), (2, 1, 2), (1, 3, 1)]).unwrap();

let (distance, path) = graph.dijkstra(0).unwrap().shortest_path(3).unwrap();
assert_eq!(distance, 4);
assert_eq!(path, vec![0, 2, 1, 3]);

assert_eq!(graph.topological_sort().unwrap(), vec![0, 2, 1, 3]);
```

In most use-cases, `use wgraphs::{prelude::*, algo::*};` suffices for your needs.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod node;
pub mod ops;
pub mod repr;
pub(crate) mod testing;
pub mod weight;

pub use edge::*;
pub use error::{Error, Result};
pub use node::*;
pub use weight::Weight;

/// `wgraphs::prelude` includes definitions for nodes, edges and weights, all basic graph
/// operation traits as well as all implemented representations.
pub mod prelude {
    pub use super::{edge::*, error::*, node::*, ops::*, repr::*, weight::*};
}
