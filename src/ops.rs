use std::ops::Range;

use itertools::Itertools;

use crate::*;

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns a range over V.
    /// In contrast to self.vertices(), the range does not borrow self and hence may be used where
    /// additional mutable references of self are needed
    fn vertices_range(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns an iterator over V.
    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices_range()
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `Ok(())` if `u` is a node of the graph and [`Error::InvalidIndex`] otherwise
    fn validate_node(&self, u: Node) -> Result<()> {
        validate_node_bound(u, self.number_of_nodes())
    }
}

/// Returns [`Error::InvalidIndex`] unless `u < n`
#[inline]
pub(crate) fn validate_node_bound(u: Node, n: NumNodes) -> Result<()> {
    if u < n {
        Ok(())
    } else {
        Err(Error::InvalidIndex {
            node: u,
            number_of_nodes: n,
        })
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_singleton_graph(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Traits pertaining getters for neighborhoods & edges.
///
/// All graphs are directed: `neighbors_of(u)` are the targets of the edges leaving `u`, in the
/// order the edges were inserted. This order determines the order in which every traversal in
/// [`crate::algo`] explores a node.
pub trait AdjacencyList: GraphNodeOrder + GraphEdgeOrder + Sized {
    /// Type of the edge weights
    type Weight: Weight;

    /// Returns an iterator over the out-neighbors of a given vertex together with the weight
    /// of the connecting edge.
    /// ** Panics if `u >= n` **
    fn weighted_neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Self::Weight)> + '_;

    /// Returns an iterator over the out-neighbors of a given vertex.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.weighted_neighbors_of(u).map(|(v, _)| v)
    }

    /// Returns the number of outgoing edges of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns an iterator over the out-degrees of all nodes
    fn degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        self.vertices().map(|u| self.degree_of(u))
    }

    /// Returns the maximum out-degree in the graph
    fn max_degree(&self) -> NumNodes {
        self.degrees().max().unwrap_or(0)
    }

    /// Returns an iterator over outgoing edges of a given vertex.
    /// ** Panics if `u >= n` **
    fn edges_of(&self, u: Node) -> impl Iterator<Item = Edge> + '_ {
        self.neighbors_of(u).map(move |v| Edge(u, v))
    }

    /// Returns an iterator over outgoing weighted edges of a given vertex.
    /// ** Panics if `u >= n` **
    fn weighted_edges_of(
        &self,
        u: Node,
    ) -> impl Iterator<Item = WeightedEdge<Self::Weight>> + '_ {
        self.weighted_neighbors_of(u)
            .map(move |(v, w)| WeightedEdge(u, v, w))
    }

    /// Returns an iterator over all edges in the graph, grouped by source in increasing order
    fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.vertices_range().flat_map(move |u| self.edges_of(u))
    }

    /// Returns an iterator over all weighted edges in the graph, grouped by source in
    /// increasing order.
    ///
    /// This is the fixed order in which Bellman-Ford relaxes edges.
    fn weighted_edges(&self) -> impl Iterator<Item = WeightedEdge<Self::Weight>> + '_ {
        self.vertices_range()
            .flat_map(move |u| self.weighted_edges_of(u))
    }

    /// Returns all edges in sorted order
    fn ordered_edges(&self) -> Vec<Edge> {
        self.edges().sorted().collect_vec()
    }

    /// Returns *true* if any edge carries a negative weight
    fn has_negative_weights(&self) -> bool {
        self.weighted_edges()
            .any(|WeightedEdge(_, _, w)| w.is_negative_weight())
    }
}

/// Trait for random access into the out-neighborhood of a node.
///
/// The explicit-stack DFS keeps a cursor per stack frame and uses this to resume a node
/// after returning from a child.
pub trait IndexedAdjacencyList: AdjacencyList {
    /// Returns the ith out-neighbor (0-indexed) of a given vertex together with the edge weight
    /// ** Panics if `u >= n || i >= deg(u)` **
    fn ith_weighted_neighbor(&self, u: Node, i: NumNodes) -> (Node, Self::Weight);

    /// Returns the ith out-neighbor (0-indexed) of a given vertex
    /// ** Panics if `u >= n || i >= deg(u)` **
    fn ith_neighbor(&self, u: Node, i: NumNodes) -> Node {
        self.ith_weighted_neighbor(u, i).0
    }
}

/// Trait to test existence of certain structures in a graph.
pub trait AdjacencyTest: GraphNodeOrder {
    /// Returns *true* if the edge (u,v) exists in the graph.
    /// ** Panics if `u >= n || v >= n` **
    fn has_edge(&self, u: Node, v: Node) -> bool;

    /// Returns *true* if a self-loop (u,u) exists.
    /// ** Panics if `u >= n` **
    fn has_self_loop(&self, u: Node) -> bool {
        self.has_edge(u, u)
    }

    /// Returns *true* if there exists an edge (u,v) as well as (v,u) in the graph.
    /// ** Panics if `u >= n || v >= n` **
    fn has_bidirected_edge(&self, u: Node, v: Node) -> bool {
        self.has_edge(u, v) && self.has_edge(v, u)
    }
}

/// Trait for looking up the weight of an edge.
pub trait EdgeWeight: AdjacencyList {
    /// Returns the weight of the edge `(u, v)` or `None` if no such edge exists.
    /// With parallel edges, the smallest weight is returned.
    /// ** Panics if `u >= n || v >= n` **
    fn edge_weight(&self, u: Node, v: Node) -> Option<Self::Weight>;
}

/// A trait for creating a graph from scratch from a set of edges and a number of nodes.
///
/// Graphs are immutable afterwards: there is no editing API.
pub trait GraphFromScratch: AdjacencyList {
    /// Create a graph with `n` nodes from an iterator over (weighted) edges.
    ///
    /// Accepts `(u, v)` tuples (unit weight), `(u, v, w)` tuples and [`WeightedEdge`]s.
    ///
    /// # Errors
    /// Returns [`Error::InvalidIndex`] if any endpoint is not in `0..n`.
    fn try_from_edges<I, E>(n: NumNodes, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<WeightedEdge<Self::Weight>>;

    /// Create a graph with `n` nodes where each given edge `{u, v}` is inserted in both
    /// directions, modelling an undirected graph.
    ///
    /// # Errors
    /// Returns [`Error::InvalidIndex`] if any endpoint is not in `0..n`.
    fn try_from_undirected_edges<I, E>(n: NumNodes, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<WeightedEdge<Self::Weight>>,
    {
        let mut symmetric = Vec::new();
        for e in edges {
            let e: WeightedEdge<Self::Weight> = e.into();
            symmetric.push(e);
            if !e.unweighted().is_loop() {
                symmetric.push(e.reverse());
            }
        }
        Self::try_from_edges(n, symmetric)
    }
}

/// Trait for constructing the graph with every edge reversed.
pub trait Transpose: Sized {
    /// Returns an independent graph containing the edge `(v, u, w)` for every edge `(u, v, w)`.
    /// The original graph is not modified.
    fn transposed(&self) -> Self;
}
