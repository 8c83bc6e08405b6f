use std::{cmp::Reverse, collections::BinaryHeap};

use num::Zero;

use super::*;

/// Dijkstra's single-source shortest path algorithm for non-negative edge weights.
///
/// The priority queue is ordered by `(distance, node)`, so among nodes with equal tentative
/// distance the smaller index is finalized first. Every node is finalized exactly once; queue
/// entries that are outdated by a later improvement are skipped when popped.
///
/// Negative weights are not supported; debug builds assert their absence.
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// let g: AdjArray = AdjArray::try_from_edges(3, [(0, 1, 5), (0, 2, 1), (2, 1, 1)]).unwrap();
///
/// let tree = Dijkstra::new(&g).run(0).unwrap();
/// assert_eq!(tree.distances(), vec![Some(0), Some(2), Some(1)]);
/// assert_eq!(tree.path_to(1).unwrap(), vec![0, 2, 1]);
/// ```
pub struct Dijkstra<'a, G> {
    graph: &'a G,
}

impl<'a, G> Dijkstra<'a, G>
where
    G: AdjacencyList,
{
    /// Prepares a run over `graph`; all edge weights must be non-negative
    pub fn new(graph: &'a G) -> Self {
        Self { graph }
    }

    /// Computes the shortest distances and a shortest path tree from `start`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidIndex`] if `start` is out of range.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(n = self.graph.number_of_nodes(), start = start)
    )]
    pub fn run(&self, start: Node) -> Result<ShortestPathTree<G::Weight>> {
        self.graph.validate_node(start)?;

        let mut tree = ShortestPathTree::with_source(self.graph.number_of_nodes(), start);
        let mut heap = BinaryHeap::new();
        heap.push(Reverse((G::Weight::zero(), start)));

        let mut finalized: NumNodes = 0;
        while let Some(Reverse((dist, u))) = heap.pop() {
            if dist > tree.raw_distance(u) {
                continue;
            }
            finalized += 1;

            for (v, w) in self.graph.weighted_neighbors_of(u) {
                debug_assert!(
                    !w.is_negative_weight(),
                    "Dijkstra requires non-negative weights, found ({u},{v};{w})"
                );

                if tree.relax(u, v, w) {
                    heap.push(Reverse((tree.raw_distance(v), v)));
                }
            }
        }

        tracing::debug!(finalized, "dijkstra finished");
        Ok(tree)
    }

    /// Returns the distance and nodes of a shortest path from `start` to `end`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidIndex`] if a node is out of range and [`Error::NoPathExists`] if
    /// `end` is unreachable from `start`.
    pub fn shortest_path(&self, start: Node, end: Node) -> Result<(G::Weight, Vec<Node>)> {
        self.graph.validate_node(end)?;
        self.run(start)?.shortest_path(end)
    }
}
