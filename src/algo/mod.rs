/*!
# Graph Algorithms

This module provides the **graph algorithms** built on top of the graph representations in this
crate. All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use wgraphs::algo::*;
```
and gain access to traversal, cycle detection, topological ordering, strongly connected
components, bipartiteness and shortest paths.

Every algorithm is available as a struct that borrows the graph immutably, runs once and then
answers queries, as well as via extension traits implemented for every suitable graph.
*/

mod bellman_ford;
mod bipartite;
mod cycle;
mod dijkstra;
mod floyd_warshall;
mod scc;
mod shortest_path_tree;
mod topological;
mod traversal;

use crate::{ops::validate_node_bound, prelude::*};

pub use bellman_ford::*;
pub use bipartite::*;
pub use cycle::*;
pub use dijkstra::*;
pub use floyd_warshall::*;
pub use scc::*;
pub use shortest_path_tree::*;
pub use topological::*;
pub use traversal::*;
