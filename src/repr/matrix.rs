/*!
# Adjacency Matrix

[`AdjMatrix`] stores a dense `n x n` matrix of edge weights. Absent edges are encoded by the
[`Weight::infinity`] sentinel, parallel edges collapse to their minimum weight. Edge-weight
lookups are `O(1)`, neighbor enumeration scans a whole row and yields neighbors in increasing
order.
*/

use super::*;
use crate::testing::test_graph_ops;

/// Directed weighted graph using a dense adjacency matrix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdjMatrix<W = i64> {
    n: NumNodes,
    weights: Vec<W>,
    num_edges: NumEdges,
}

impl<W: Weight> AdjMatrix<W> {
    /// Creates a graph with `n` nodes and no edges
    fn with_nodes(n: NumNodes) -> Self {
        Self {
            n,
            weights: vec![W::infinity(); n as usize * n as usize],
            num_edges: 0,
        }
    }

    #[inline]
    fn index(&self, u: Node, v: Node) -> usize {
        u as usize * self.n as usize + v as usize
    }

    /// Returns the row of `u`, i.e. the weight to every node or [`Weight::infinity`]
    /// ** Panics if `u >= n` **
    pub fn row(&self, u: Node) -> &[W] {
        let begin = self.index(u, 0);
        &self.weights[begin..begin + self.n as usize]
    }

    /// Inserts `(u, v, w)` keeping the minimum weight for parallel edges
    fn insert_edge(&mut self, WeightedEdge(u, v, w): WeightedEdge<W>) {
        let idx = self.index(u, v);
        let entry = &mut self.weights[idx];
        if entry.is_infinite() {
            self.num_edges += 1;
            *entry = w;
        } else if w < *entry {
            *entry = w;
        }
    }
}

impl<W: Weight> GraphNodeOrder for AdjMatrix<W> {
    fn number_of_nodes(&self) -> NumNodes {
        self.n
    }
}

impl<W: Weight> GraphEdgeOrder for AdjMatrix<W> {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl<W: Weight> AdjacencyList for AdjMatrix<W> {
    type Weight = W;

    fn weighted_neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, W)> + '_ {
        self.row(u)
            .iter()
            .enumerate()
            .filter_map(|(v, w)| (!w.is_infinite()).then_some((v as Node, *w)))
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.row(u).iter().filter(|w| !w.is_infinite()).count() as NumNodes
    }
}

impl<W: Weight> IndexedAdjacencyList for AdjMatrix<W> {
    /// Scans the row of `u`; costs `O(n)` per call
    fn ith_weighted_neighbor(&self, u: Node, i: NumNodes) -> (Node, W) {
        let deg = self.degree_of(u);
        self.weighted_neighbors_of(u)
            .nth(i as usize)
            .unwrap_or_else(|| panic!("neighbor index {i} out of range for degree {deg}"))
    }
}

impl<W: Weight> AdjacencyTest for AdjMatrix<W> {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        !self.weights[self.index(u, v)].is_infinite()
    }
}

impl<W: Weight> EdgeWeight for AdjMatrix<W> {
    fn edge_weight(&self, u: Node, v: Node) -> Option<W> {
        let w = self.weights[self.index(u, v)];
        (!w.is_infinite()).then_some(w)
    }
}

impl<W: Weight> GraphFromScratch for AdjMatrix<W> {
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
            graph.insert_edge(edge);
        }
        Ok(graph)
    }
}

impl<W: Weight> Transpose for AdjMatrix<W> {
    fn transposed(&self) -> Self {
        let mut transposed = Self::with_nodes(self.n);
        for edge in self.weighted_edges() {
            transposed.insert_edge(edge.reverse());
        }
        transposed
    }
}

impl<W: Weight> From<&AdjArray<W>> for AdjMatrix<W> {
    fn from(graph: &AdjArray<W>) -> Self {
        let mut matrix = Self::with_nodes(graph.number_of_nodes());
        for edge in graph.weighted_edges() {
            matrix.insert_edge(edge);
        }
        matrix
    }
}

// ---------- Testing ----------

test_graph_ops!(
    test_adj_matrix,
    AdjMatrix,
    (GraphFromScratch, AdjacencyList, EdgeWeight, Transpose)
);

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn parallel_edges_collapse_to_minimum() {
        let graph: AdjMatrix =
            AdjMatrix::try_from_edges(3, [(0, 1, 5), (0, 1, 3), (0, 1, 4), (2, 0, -2)]).unwrap();
        assert_eq!(graph.number_of_edges(), 2);
        assert_eq!(graph.edge_weight(0, 1), Some(3));
        assert_eq!(graph.edge_weight(2, 0), Some(-2));
        assert_eq!(graph.edge_weight(1, 0), None);
        assert_eq!(graph.row(0), &[i64::MAX, 3, i64::MAX]);
    }

    #[test]
    fn neighbors_are_ordered() {
        let graph: AdjMatrix = AdjMatrix::try_from_edges(4, [(0, 3), (0, 1), (0, 2)]).unwrap();
        assert_eq!(graph.neighbors_of(0).collect_vec(), vec![1, 2, 3]);
        assert_eq!(graph.ith_neighbor(0, 1), 2);
        assert_eq!(graph.degree_of(0), 3);
        assert_eq!(graph.degree_of(3), 0);
    }

    #[test]
    fn from_adj_array() {
        let list: AdjArray =
            AdjArray::try_from_edges(3, [(0, 1, 2), (1, 2, 7), (1, 2, 6)]).unwrap();
        let matrix = AdjMatrix::from(&list);

        assert_eq!(matrix.number_of_nodes(), 3);
        assert_eq!(matrix.number_of_edges(), 2);
        assert_eq!(matrix.edge_weight(1, 2), Some(6));
        assert_eq!(list.ordered_edges(), {
            let mut edges = matrix.ordered_edges();
            edges.insert(2, Edge(1, 2));
            edges
        });
    }

    #[test]
    fn rejects_out_of_range_edges() {
        assert!(matches!(
            AdjMatrix::<i32>::try_from_edges(2, [(0, 2)]),
            Err(Error::InvalidIndex {
                node: 2,
                number_of_nodes: 2
            })
        ));
    }
}
