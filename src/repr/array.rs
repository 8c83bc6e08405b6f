/*!
# Adjacency Array

[`AdjArray`] stores, for every node, the list of its outgoing edges as `(target, weight)` pairs
in insertion order. It is the default substrate of all algorithms in [`crate::algo`]: neighbor
enumeration is a slice iteration and random access into a neighborhood is `O(1)`, which the
explicit-stack DFS relies on.

Parallel edges are kept as given; algorithms compare their weights like any other pair of
alternatives.
*/

use super::*;
use crate::testing::test_graph_ops;

/// Directed weighted graph using adjacency arrays (`Vec<(Node, W)>` per node).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdjArray<W = i64> {
    out_nbs: Vec<Vec<(Node, W)>>,
    num_edges: NumEdges,
}

impl<W: Weight> AdjArray<W> {
    /// Returns a slice-reference of the weighted out-neighborhood of a given vertex
    /// ** Panics if `u >= n` **
    pub fn as_neighbors_slice(&self, u: Node) -> &[(Node, W)] {
        &self.out_nbs[u as usize]
    }

    /// Creates a graph with `n` nodes and no edges
    fn with_nodes(n: NumNodes) -> Self {
        Self {
            out_nbs: vec![Vec::new(); n as usize],
            num_edges: 0,
        }
    }

    fn push_edge(&mut self, WeightedEdge(u, v, w): WeightedEdge<W>) {
        self.out_nbs[u as usize].push((v, w));
        self.num_edges += 1;
    }
}

impl<W: Weight> GraphNodeOrder for AdjArray<W> {
    fn number_of_nodes(&self) -> NumNodes {
        self.out_nbs.len() as NumNodes
    }
}

impl<W: Weight> GraphEdgeOrder for AdjArray<W> {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl<W: Weight> AdjacencyList for AdjArray<W> {
    type Weight = W;

    fn weighted_neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, W)> + '_ {
        self.out_nbs[u as usize].iter().copied()
    }

    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.out_nbs[u as usize].iter().map(|&(v, _)| v)
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.out_nbs[u as usize].len() as NumNodes
    }
}

impl<W: Weight> IndexedAdjacencyList for AdjArray<W> {
    #[inline]
    fn ith_weighted_neighbor(&self, u: Node, i: NumNodes) -> (Node, W) {
        self.out_nbs[u as usize][i as usize]
    }
}

impl<W: Weight> AdjacencyTest for AdjArray<W> {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.out_nbs[u as usize].iter().any(|&(x, _)| x == v)
    }
}

impl<W: Weight> EdgeWeight for AdjArray<W> {
    fn edge_weight(&self, u: Node, v: Node) -> Option<W> {
        self.out_nbs[u as usize]
            .iter()
            .filter_map(|&(x, w)| (x == v).then_some(w))
            .min()
    }
}

impl<W: Weight> GraphFromScratch for AdjArray<W> {
    fn try_from_edges<I, E>(n: NumNodes, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<WeightedEdge<W>>,
    {
        let mut graph = Self::with_nodes(n);
        for edge in edges {
            let edge: WeightedEdge<W> = edge.into();
            validate_node_bound(edge.source(), n)?;
            validate_node_bound(edge.target(), n)?;
            graph.push_edge(edge);
        }
        Ok(graph)
    }
}

impl<W: Weight> Transpose for AdjArray<W> {
    fn transposed(&self) -> Self {
        let mut transposed = Self::with_nodes(self.number_of_nodes());
        for edge in self.weighted_edges() {
            transposed.push_edge(edge.reverse());
        }
        transposed
    }
}

// ---------- Testing ----------

test_graph_ops!(
    test_adj_array,
    AdjArray,
    (GraphFromScratch, AdjacencyList, EdgeWeight, Transpose)
);
