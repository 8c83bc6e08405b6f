/*!
# Strongly Connected Components

Kosaraju's algorithm in three phases:
1. a full-graph DFS on the original graph records the finish order,
2. an independent transposed graph is built,
3. the node states are reset and a DFS on the transpose is started at every unvisited node in
   reverse finish order; every DFS tree of this phase is one strongly connected component.

Components are ordered by the root that discovered them, nodes within a component by their
finish time in phase 3. The components partition the node set; singletons are components, too.
*/

use std::{convert::Infallible, ops::ControlFlow};

use itertools::Itertools;

use super::{traversal::*, *};

/// Opens a new component at every DFS root and fills it in finish order
#[derive(Default)]
struct ComponentCollector {
    components: Vec<Vec<Node>>,
}

impl DfsVisitor for ComponentCollector {
    type Break = Infallible;

    fn discover(&mut self, _u: Node, parent: Option<Node>) -> ControlFlow<Infallible> {
        if parent.is_none() {
            self.components.push(Vec::new());
        }
        ControlFlow::Continue(())
    }

    fn finish(&mut self, u: Node) -> ControlFlow<Infallible> {
        if let Some(component) = self.components.last_mut() {
            component.push(u);
        }
        ControlFlow::Continue(())
    }
}

/// The strongly connected components of a directed graph.
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// let g: AdjArray = AdjArray::try_from_edges(4, [(0, 1), (1, 0), (1, 2), (3, 2)]).unwrap();
/// let sccs = StronglyConnectedComponents::new(&g);
///
/// assert_eq!(sccs.number_of_components(), 3);
/// assert_eq!(sccs.are_strongly_connected(0, 1), Ok(true));
/// assert_eq!(sccs.are_strongly_connected(2, 3), Ok(false));
/// assert_eq!(sort_components(sccs.into_components()), vec![vec![0, 1], vec![2], vec![3]]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StronglyConnectedComponents {
    components: Vec<Vec<Node>>,
    component_of: Vec<NumNodes>,
}

impl StronglyConnectedComponents {
    /// Runs Kosaraju's algorithm on `graph`. The graph itself is not modified.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(n = graph.number_of_nodes(), m = graph.number_of_edges())
    )]
    pub fn new<G>(graph: &G) -> Self
    where
        G: IndexedAdjacencyList + Transpose,
    {
        let mut dfs = DepthFirstSearch::for_graph(graph);

        let mut finish = FinishOrder::default();
        let _ = dfs.run_all(graph, &mut finish);

        let transposed = graph.transposed();
        dfs.reset();

        let mut collector = ComponentCollector::default();
        let _ = dfs.run_from_each(&transposed, finish.order.into_iter().rev(), &mut collector);
        let components = collector.components;

        let mut component_of = vec![INVALID_NODE; graph.len()];
        for (i, component) in components.iter().enumerate() {
            for &u in component {
                component_of[u as usize] = i as NumNodes;
            }
        }
        debug_assert!(component_of.iter().all(|&c| c != INVALID_NODE));

        tracing::debug!(components = components.len(), "strongly connected components computed");

        Self {
            components,
            component_of,
        }
    }

    /// Returns all components in discovery order
    pub fn components(&self) -> &[Vec<Node>] {
        &self.components
    }

    /// Consumes the structure and returns the components
    pub fn into_components(self) -> Vec<Vec<Node>> {
        self.components
    }

    /// Returns the number of strongly connected components
    pub fn number_of_components(&self) -> NumNodes {
        self.components.len() as NumNodes
    }

    /// Returns the index (into [`StronglyConnectedComponents::components`]) of the component
    /// containing `u`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidIndex`] if `u` is out of range.
    pub fn component_of(&self, u: Node) -> Result<NumNodes> {
        validate_node_bound(u, self.component_of.len() as NumNodes)?;
        Ok(self.component_of[u as usize])
    }

    /// Returns *true* if `u` and `v` can reach each other.
    ///
    /// # Errors
    /// Returns [`Error::InvalidIndex`] if a node is out of range.
    pub fn are_strongly_connected(&self, u: Node, v: Node) -> Result<bool> {
        Ok(self.component_of(u)? == self.component_of(v)?)
    }
}

/// Normalizes components for comparison: sorts nodes within each component and then the
/// components lexicographically
pub fn sort_components(mut components: Vec<Vec<Node>>) -> Vec<Vec<Node>> {
    for comp in &mut components {
        comp.sort_unstable();
    }
    components.sort();
    components
}

/// Provides strongly connected components directly on graphs
pub trait StronglyConnected: IndexedAdjacencyList + Transpose {
    /// Computes the strongly connected components of the graph
    /// (see [`StronglyConnectedComponents`])
    fn strongly_connected_components(&self) -> StronglyConnectedComponents {
        StronglyConnectedComponents::new(self)
    }

    /// Returns *true* if every node can reach every other node
    fn is_strongly_connected(&self) -> bool {
        self.strongly_connected_components().number_of_components() <= 1
    }

    /// Returns all components with more than one node or with a self-loop
    fn nontrivial_strongly_connected_components(&self) -> Vec<Vec<Node>>
    where
        Self: AdjacencyTest,
    {
        self.strongly_connected_components()
            .into_components()
            .into_iter()
            .filter(|c| c.len() > 1 || self.has_self_loop(c[0]))
            .collect_vec()
    }
}

impl<G> StronglyConnected for G where G: IndexedAdjacencyList + Transpose {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn kosaraju_instance() {
        let graph = fixtures::scc_instance();
        let sccs = graph.strongly_connected_components();

        assert_eq!(sccs.components(), &[vec![3, 2], vec![1, 6, 4, 0], vec![5]]);
        assert_eq!(sccs.number_of_components(), 3);
        assert_eq!(
            sort_components(sccs.clone().into_components()),
            vec![vec![0, 1, 4, 6], vec![2, 3], vec![5]]
        );

        assert_eq!(sccs.component_of(6), Ok(1));
        assert_eq!(sccs.are_strongly_connected(0, 6), Ok(true));
        assert_eq!(sccs.are_strongly_connected(0, 5), Ok(false));
        assert!(matches!(
            sccs.component_of(7),
            Err(Error::InvalidIndex { node: 7, .. })
        ));

        // the graph is untouched
        assert_eq!(graph, fixtures::scc_instance());
    }

    #[test]
    fn singletons_and_loops() {
        let graph: AdjArray = AdjArray::try_from_edges(3, [(0, 0), (0, 1)]).unwrap();
        let sccs = graph.strongly_connected_components();
        assert_eq!(
            sort_components(sccs.into_components()),
            vec![vec![0], vec![1], vec![2]]
        );
        assert_eq!(graph.nontrivial_strongly_connected_components(), vec![vec![0]]);
        assert!(!graph.is_strongly_connected());

        let empty: AdjArray = AdjArray::try_from_edges(0, Vec::<Edge>::new()).unwrap();
        assert_eq!(empty.strongly_connected_components().number_of_components(), 0);
        assert!(empty.is_strongly_connected());
    }

    #[test]
    fn cycle_is_strongly_connected() {
        for n in 1..20 {
            let graph: AdjArray =
                AdjArray::try_from_edges(n, (0..n).map(|u| (u, (u + 1) % n))).unwrap();
            assert!(graph.is_strongly_connected());
            assert!(AdjMatrix::from(&graph).is_strongly_connected());
        }
    }

    #[test]
    fn mutual_reachability() {
        let rng = &mut Pcg64Mcg::seed_from_u64(13);

        for n in [10, 25, 40] {
            for p in [0.02, 0.05, 0.1] {
                let graph = fixtures::random_weighted_graph(rng, n, p, 1..2);
                let sccs = graph.strongly_connected_components();

                let reach = graph
                    .vertices()
                    .map(|u| {
                        let mut row = vec![false; n as usize];
                        graph.bfs(u).for_each(|v| row[v as usize] = true);
                        row
                    })
                    .collect_vec();

                assert_eq!(
                    sccs.components().iter().map(|c| c.len()).sum::<usize>(),
                    n as usize
                );

                for u in 0..n {
                    for v in 0..n {
                        assert_eq!(
                            sccs.are_strongly_connected(u, v).unwrap(),
                            reach[u as usize][v as usize] && reach[v as usize][u as usize]
                        );
                    }
                }

                let matrix_sccs = AdjMatrix::from(&graph).strongly_connected_components();
                assert_eq!(
                    sort_components(matrix_sccs.into_components()),
                    sort_components(sccs.into_components())
                );
            }
        }
    }
}
