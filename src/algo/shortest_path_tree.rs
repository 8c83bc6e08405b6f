/*!
# Single-Source Shortest Path Trees

[`ShortestPathTree`] is the common result of [`Dijkstra`] and [`BellmanFord`]: the distance of
every node from the source (with [`Weight::infinity`] for unreached nodes) and the parent of every
reached node on some shortest path. The source is its own parent.

[`ShortestPaths`] exposes all shortest-path algorithms directly on graphs.
*/

use num::Zero;

use super::{traversal::walk_parents, *};

/// Distances and parent pointers of a single-source shortest path computation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPathTree<W> {
    source: Node,
    distances: Vec<W>,
    parents: Vec<Node>,
    rounds: NumNodes,
}

impl<W: Weight> ShortestPathTree<W> {
    /// Creates a tree containing only `source` for a graph with `n` nodes
    pub(crate) fn with_source(n: NumNodes, source: Node) -> Self {
        let mut distances = vec![W::infinity(); n as usize];
        let mut parents = vec![INVALID_NODE; n as usize];
        distances[source as usize] = W::zero();
        parents[source as usize] = source;
        Self {
            source,
            distances,
            parents,
            rounds: 0,
        }
    }

    #[inline]
    pub(crate) fn set_rounds(&mut self, rounds: NumNodes) {
        self.rounds = rounds;
    }

    /// Tries to improve the distance of `v` via an edge `(u, v)` of weight `w`.
    /// Returns *true* on strict improvement.
    #[inline]
    pub(crate) fn relax(&mut self, u: Node, v: Node, w: W) -> bool {
        match self.distances[u as usize].extend(w) {
            Some(candidate) if candidate < self.distances[v as usize] => {
                self.distances[v as usize] = candidate;
                self.parents[v as usize] = u;
                true
            }
            _ => false,
        }
    }

    #[inline]
    pub(crate) fn raw_distance(&self, u: Node) -> W {
        self.distances[u as usize]
    }

    /// The source node
    pub fn source(&self) -> Node {
        self.source
    }

    /// Number of full relaxation rounds over all edges that produced this tree. This includes
    /// the negative-cycle validation round of [`BellmanFord`] if it ran. Always `0` for
    /// [`Dijkstra`].
    pub fn rounds(&self) -> NumNodes {
        self.rounds
    }

    /// Returns the number of reached nodes (including the source)
    pub fn number_of_reached_nodes(&self) -> NumNodes {
        self.distances.iter().filter(|d| !d.is_infinite()).count() as NumNodes
    }

    /// Returns the shortest distance from the source to `v` or `None` if `v` is unreached.
    ///
    /// # Errors
    /// Returns [`Error::InvalidIndex`] if `v` is out of range.
    pub fn distance_to(&self, v: Node) -> Result<Option<W>> {
        validate_node_bound(v, self.distances.len() as NumNodes)?;
        let d = self.distances[v as usize];
        Ok((!d.is_infinite()).then_some(d))
    }

    /// Returns the distance of every node, `None` for unreached ones
    pub fn distances(&self) -> Vec<Option<W>> {
        finite_distances(&self.distances)
    }

    /// Returns the distance vector using [`Weight::infinity`] for unreached nodes
    pub fn raw_distances(&self) -> &[W] {
        &self.distances
    }

    /// Returns the parent of `v` on a shortest path, `None` if `v` is unreached.
    ///
    /// # Errors
    /// Returns [`Error::InvalidIndex`] if `v` is out of range.
    pub fn parent_of(&self, v: Node) -> Result<Option<Node>> {
        validate_node_bound(v, self.parents.len() as NumNodes)?;
        let p = self.parents[v as usize];
        Ok((p != INVALID_NODE).then_some(p))
    }

    /// Returns the nodes of a shortest path from the source to `end`, both included.
    ///
    /// # Errors
    /// Returns [`Error::InvalidIndex`] if `end` is out of range and [`Error::NoPathExists`] if
    /// `end` is unreached.
    pub fn path_to(&self, end: Node) -> Result<Vec<Node>> {
        validate_node_bound(end, self.parents.len() as NumNodes)?;
        walk_parents(&self.parents, self.source, end)
    }

    /// Returns the distance of `end` together with a shortest path to it.
    ///
    /// # Errors
    /// See [`ShortestPathTree::path_to`].
    pub fn shortest_path(&self, end: Node) -> Result<(W, Vec<Node>)> {
        let path = self.path_to(end)?;
        Ok((self.distances[end as usize], path))
    }
}

/// Provides the shortest-path algorithms directly on graphs
pub trait ShortestPaths: AdjacencyList {
    /// Runs [`Dijkstra`] from `start`. All weights must be non-negative.
    ///
    /// # Errors
    /// Returns [`Error::InvalidIndex`] if `start` is out of range.
    fn dijkstra(&self, start: Node) -> Result<ShortestPathTree<Self::Weight>> {
        Dijkstra::new(self).run(start)
    }

    /// Runs [`BellmanFord`] from `start` without negative-cycle validation.
    ///
    /// # Errors
    /// Returns [`Error::InvalidIndex`] if `start` is out of range.
    fn bellman_ford(&self, start: Node) -> Result<ShortestPathTree<Self::Weight>> {
        BellmanFord::new(self).run(start)
    }

    /// Runs [`FloydWarshall`] for all pairs.
    fn floyd_warshall(&self) -> FloydWarshall<Self::Weight> {
        FloydWarshall::new(self)
    }
}

impl<G> ShortestPaths for G where G: AdjacencyList {}
