use super::*;

/// Bellman-Ford single-source shortest paths; supports negative edge weights.
///
/// Runs at most `n - 1` rounds, each relaxing every edge once in the fixed order of
/// [`AdjacencyList::weighted_edges`] (source ascending, then adjacency order). Distances are
/// updated in place, so improvements propagate within a round. The algorithm stops after the
/// first round without any improvement.
///
/// If a negative cycle is reachable from the start, the resulting distances are meaningless.
/// Enable [`BellmanFord::with_negative_cycle_check`] to detect this case instead.
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// let g: AdjArray = AdjArray::try_from_edges(3, [(0, 1, 4), (0, 2, 1), (1, 2, -5)]).unwrap();
/// let tree = BellmanFord::new(&g).run(0).unwrap();
/// assert_eq!(tree.distances(), vec![Some(0), Some(4), Some(-1)]);
///
/// let g: AdjArray = AdjArray::try_from_edges(2, [(0, 1, 1), (1, 0, -2)]).unwrap();
/// let result = BellmanFord::new(&g).with_negative_cycle_check(true).run(0);
/// assert!(matches!(result, Err(Error::NegativeCycle { .. })));
/// ```
pub struct BellmanFord<'a, G> {
    graph: &'a G,
    check_negative_cycle: bool,
}

impl<'a, G> BellmanFord<'a, G>
where
    G: AdjacencyList,
{
    /// Prepares a run over `graph` without negative-cycle validation
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            check_negative_cycle: false,
        }
    }

    /// If enabled, an additional relaxation round is run after `n - 1` rounds and
    /// [`Error::NegativeCycle`] is reported if it still improves a distance
    pub fn with_negative_cycle_check(mut self, check: bool) -> Self {
        self.set_negative_cycle_check(check);
        self
    }

    /// See [`BellmanFord::with_negative_cycle_check`]
    pub fn set_negative_cycle_check(&mut self, check: bool) {
        self.check_negative_cycle = check;
    }

    /// Relaxes every edge once; returns the target of the last improved edge, if any
    fn relaxation_round(&self, tree: &mut ShortestPathTree<G::Weight>) -> Option<Node> {
        let mut improved = None;
        for WeightedEdge(u, v, w) in self.graph.weighted_edges() {
            if tree.relax(u, v, w) {
                improved = Some(v);
            }
        }
        improved
    }

    /// Computes the shortest distances and a shortest path tree from `start`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidIndex`] if `start` is out of range and, only if enabled,
    /// [`Error::NegativeCycle`] if a negative cycle is reachable from `start`.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(n = self.graph.number_of_nodes(), start = start)
    )]
    pub fn run(&self, start: Node) -> Result<ShortestPathTree<G::Weight>> {
        self.graph.validate_node(start)?;

        let n = self.graph.number_of_nodes();
        let mut tree = ShortestPathTree::with_source(n, start);

        let mut rounds: NumNodes = 0;
        let mut converged = false;
        while rounds + 1 < n {
            rounds += 1;
            if self.relaxation_round(&mut tree).is_none() {
                converged = true;
                break;
            }
        }

        if self.check_negative_cycle && !converged {
            rounds += 1;
            if let Some(node) = self.relaxation_round(&mut tree) {
                tracing::debug!(rounds, node, "distance still improves, negative cycle");
                return Err(Error::NegativeCycle { node });
            }
        }

        tracing::debug!(rounds, converged, "bellman-ford finished");
        tree.set_rounds(rounds);
        Ok(tree)
    }

    /// Returns the distance and nodes of a shortest path from `start` to `end`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidIndex`] if a node is out of range and [`Error::NoPathExists`] if
    /// `end` is unreachable from `start`; see also [`BellmanFord::run`].
    pub fn shortest_path(&self, start: Node, end: Node) -> Result<(G::Weight, Vec<Node>)> {
        self.graph.validate_node(end)?;
        self.run(start)?.shortest_path(end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn sssp_instance() {
        let graph = fixtures::sssp_instance();
        let bf = BellmanFord::new(&graph);

        assert_eq!(bf.shortest_path(0, 2), Ok((7, vec![0, 3, 4, 2])));
        assert_eq!(
            bf.run(0).unwrap().distances(),
            vec![Some(0), Some(5), Some(7), Some(4), Some(6)]
        );
        assert_eq!(
            bf.run(1).unwrap().distances(),
            vec![Some(2), Some(0), Some(3), Some(6), Some(5)]
        );
    }

    #[test]
    fn negative_weights() {
        let graph: AdjArray =
            AdjArray::try_from_edges(4, [(0, 1, 2), (0, 2, 5), (2, 1, -4), (1, 3, 1)]).unwrap();
        let tree = graph.bellman_ford(0).unwrap();
        assert_eq!(tree.shortest_path(3), Ok((2, vec![0, 2, 1, 3])));
    }

    #[test]
    fn unreachable_nodes() {
        let graph: AdjArray = AdjArray::try_from_edges(3, [(1, 2, -3), (1, 0, 1)]).unwrap();
        let tree = graph.bellman_ford(0).unwrap();
        assert_eq!(tree.distances(), vec![Some(0), None, None]);
        assert_eq!(
            tree.path_to(2),
            Err(Error::NoPathExists { start: 0, end: 2 })
        );
        assert!(matches!(
            graph.bellman_ford(3),
            Err(Error::InvalidIndex { node: 3, .. })
        ));
    }

    #[test]
    fn stops_after_first_quiet_round() {
        // edges are relaxed in source order, so one round settles the whole chain
        let graph: AdjArray =
            AdjArray::try_from_edges(5, [(0, 1, 1), (1, 2, 1), (2, 3, 1), (3, 4, 1)]).unwrap();
        let tree = graph.bellman_ford(0).unwrap();
        assert_eq!(tree.distances(), vec![Some(0), Some(1), Some(2), Some(3), Some(4)]);
        assert_eq!(tree.rounds(), 2);

        let checked = BellmanFord::new(&graph)
            .with_negative_cycle_check(true)
            .run(0)
            .unwrap();
        assert_eq!(checked.rounds(), 2);

        assert_eq!(graph.bellman_ford(4).unwrap().rounds(), 1);
    }

    #[test]
    fn runs_all_rounds_against_edge_order() {
        // every round only advances one node along the chain 4 -> 3 -> 2 -> 1 -> 0
        let graph: AdjArray =
            AdjArray::try_from_edges(5, [(1, 0, 1), (2, 1, 1), (3, 2, 1), (4, 3, 1)]).unwrap();
        let tree = graph.bellman_ford(4).unwrap();
        assert_eq!(tree.distances(), vec![Some(4), Some(3), Some(2), Some(1), Some(0)]);
        assert_eq!(tree.rounds(), 4);
        assert_eq!(tree.path_to(0), Ok(vec![4, 3, 2, 1, 0]));

        let checked = BellmanFord::new(&graph)
            .with_negative_cycle_check(true)
            .run(4)
            .unwrap();
        assert_eq!(checked.rounds(), 5);
        assert_eq!(checked.distances(), tree.distances());

        assert_eq!(graph.dijkstra(4).unwrap().rounds(), 0);
    }

    #[test]
    fn negative_cycle_check() {
        let graph: AdjArray =
            AdjArray::try_from_edges(4, [(0, 1, 1), (1, 2, -1), (2, 1, -1), (2, 3, 1)]).unwrap();

        assert!(graph.bellman_ford(0).is_ok());
        assert!(matches!(
            BellmanFord::new(&graph)
                .with_negative_cycle_check(true)
                .run(0),
            Err(Error::NegativeCycle { .. })
        ));

        // the cycle is not reachable from 3
        let mut bf = BellmanFord::new(&graph);
        bf.set_negative_cycle_check(true);
        assert_eq!(bf.run(3).unwrap().number_of_reached_nodes(), 1);

        let graph: AdjArray = AdjArray::try_from_edges(1, [(0, 0, -1)]).unwrap();
        assert!(matches!(
            BellmanFord::new(&graph).with_negative_cycle_check(true).run(0),
            Err(Error::NegativeCycle { node: 0 })
        ));
    }

    #[test]
    fn agrees_with_dijkstra() {
        let rng = &mut Pcg64Mcg::seed_from_u64(19);

        for n in [5, 20, 60] {
            for p in [0.05, 0.2] {
                let graph = fixtures::random_weighted_graph(rng, n, p, 0..50);
                for start in [0, n / 2, n - 1] {
                    let dijkstra = graph.dijkstra(start).unwrap();
                    let bellman_ford = BellmanFord::new(&graph)
                        .with_negative_cycle_check(true)
                        .run(start)
                        .unwrap();

                    assert_eq!(dijkstra.distances(), bellman_ford.distances());

                    for v in graph.vertices() {
                        if let Ok((d, path)) = bellman_ford.shortest_path(v) {
                            let weight: i64 = path
                                .windows(2)
                                .map(|e| graph.edge_weight(e[0], e[1]).unwrap())
                                .sum();
                            assert_eq!(weight, d);
                        }
                    }
                }
            }
        }
    }
}
