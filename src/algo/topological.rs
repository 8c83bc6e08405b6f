/*!
# Topological Sort

A topological order lists every node of a directed acyclic graph such that each edge `(u, v)`
has `u` before `v`. It is the reversed finish order of a DFS over all nodes (roots in increasing
order). The first back-edge proves a cycle; the sort then fails with [`Error::CyclicGraph`] and
no partial order is returned.
*/

use std::ops::ControlFlow;

use itertools::Itertools;

use super::{traversal::*, *};

/// Collects the finish order and aborts at the first back-edge
#[derive(Default)]
struct ReverseFinishOrder {
    order: Vec<Node>,
}

impl DfsVisitor for ReverseFinishOrder {
    type Break = Node;

    fn edge(&mut self, _u: Node, v: Node, kind: EdgeKind, _: Option<Node>) -> ControlFlow<Node> {
        if kind == EdgeKind::Back {
            ControlFlow::Break(v)
        } else {
            ControlFlow::Continue(())
        }
    }

    fn finish(&mut self, u: Node) -> ControlFlow<Node> {
        self.order.push(u);
        ControlFlow::Continue(())
    }
}

/// Computes topological orders of directed acyclic graphs
pub trait TopologicalSort: IndexedAdjacencyList {
    /// Returns the nodes in an order where every edge `(u, v)` has `u` before `v`.
    /// The order is the reverse finish order of a full-graph DFS restarting in increasing
    /// node order.
    ///
    /// # Errors
    /// Returns [`Error::CyclicGraph`] with the target of the first back-edge if the graph
    /// contains a cycle.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g: AdjArray = AdjArray::try_from_edges(3, [(2, 1), (1, 0)]).unwrap();
    /// assert_eq!(g.topological_sort(), Ok(vec![2, 1, 0]));
    ///
    /// let g: AdjArray = AdjArray::try_from_edges(3, [(0, 1), (1, 2), (2, 1)]).unwrap();
    /// assert_eq!(g.topological_sort(), Err(Error::CyclicGraph { node: 1 }));
    /// ```
    fn topological_sort(&self) -> Result<Vec<Node>>;

    /// Returns *true* if `order` is a permutation of all nodes in which every edge points
    /// forward.
    fn is_topological_order(&self, order: &[Node]) -> bool {
        if order.len() != self.len() {
            return false;
        }

        let mut position = vec![INVALID_NODE; self.len()];
        for (i, &u) in order.iter().enumerate() {
            if u >= self.number_of_nodes() || position[u as usize] != INVALID_NODE {
                return false;
            }
            position[u as usize] = i as Node;
        }

        self.edges()
            .all(|Edge(u, v)| position[u as usize] < position[v as usize])
    }
}

impl<G> TopologicalSort for G
where
    G: IndexedAdjacencyList,
{
    #[tracing::instrument(level = "debug", skip_all, fields(n = self.number_of_nodes()))]
    fn topological_sort(&self) -> Result<Vec<Node>> {
        let mut visitor = ReverseFinishOrder::default();

        let mut dfs = DepthFirstSearch::for_graph(self);
        if let ControlFlow::Break(node) = dfs.run_all(self, &mut visitor) {
            tracing::debug!(node, "back-edge found, graph is cyclic");
            return Err(Error::CyclicGraph { node });
        }

        Ok(visitor.order.into_iter().rev().collect_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures;
    use rand::{SeedableRng, seq::SliceRandom};
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn sort_small_dag() {
        let graph: AdjArray =
            AdjArray::try_from_edges(5, [(0, 1), (0, 4), (2, 4), (2, 1), (3, 0), (4, 1)]).unwrap();

        let order = graph.topological_sort().unwrap();
        assert_eq!(order, vec![3, 2, 0, 4, 1]);
        assert!(graph.is_topological_order(&order));
        assert!(!graph.is_topological_order(&[0, 1, 2, 3, 4]));
        assert!(!graph.is_topological_order(&[3, 2, 0, 4]));
        assert!(!graph.is_topological_order(&[3, 3, 0, 4, 1]));
    }

    #[test]
    fn cyclic_graph_fails() {
        let graph: AdjArray =
            AdjArray::try_from_edges(5, [(0, 1), (0, 2), (1, 3), (2, 1), (3, 0), (4, 1)]).unwrap();
        assert_eq!(graph.topological_sort(), Err(Error::CyclicGraph { node: 0 }));

        let graph: AdjArray = AdjArray::try_from_edges(1, [(0, 0)]).unwrap();
        assert_eq!(graph.topological_sort(), Err(Error::CyclicGraph { node: 0 }));
    }

    #[test]
    fn empty_graph() {
        let graph: AdjArray = AdjArray::try_from_edges(0, Vec::<Edge>::new()).unwrap();
        assert_eq!(graph.topological_sort(), Ok(vec![]));
    }

    #[test]
    fn random_dags() {
        let rng = &mut Pcg64Mcg::seed_from_u64(11);

        for n in [5, 20, 50] {
            for _ in 0..10 {
                // orient random edges along a hidden random permutation
                let mut hidden: Vec<Node> = (0..n).collect();
                hidden.shuffle(rng);

                let random = fixtures::random_weighted_graph(rng, n, 0.1, 0..10);
                let edges = random
                    .edges()
                    .filter(|&Edge(u, v)| u < v)
                    .map(|Edge(u, v)| (hidden[u as usize], hidden[v as usize]))
                    .collect_vec();
                let graph: AdjArray = AdjArray::try_from_edges(n, edges).unwrap();

                let order = graph.topological_sort().unwrap();
                assert!(graph.is_topological_order(&order));
                assert!(order.iter().copied().sorted().eq(0..n));
            }
        }
    }
}
