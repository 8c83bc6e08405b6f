/*!
# Graph Representations

Both representations are immutable after construction via
[`GraphFromScratch::try_from_edges`](crate::ops::GraphFromScratch::try_from_edges) and are
shared read-only by every algorithm.

- [`AdjArray`]: weighted adjacency lists, neighbors in insertion order. Default choice.
- [`AdjMatrix`]: dense weight matrix, `O(1)` edge-weight lookup, parallel edges collapse to the
  minimum weight.
*/

use crate::{ops::*, *};

mod array;
mod matrix;

pub use array::*;
pub use matrix::*;
