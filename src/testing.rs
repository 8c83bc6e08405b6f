/// Every graph representation should implement the basic ops consistently with its edge list
macro_rules! test_graph_ops {
    ($env:ident, $graph:ident, ($($trait:ident),*)) => {
        #[cfg(test)]
        mod $env {
            use crate::{ops::*, repr::*, testing::test_graph_ops, *};
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;
            use itertools::Itertools;

            /// Creates a list of at most `m_ub` random, distinct edges for nodes `0..n`
            fn random_edges<R: Rng>(
                rng: &mut R,
                n: NumNodes,
                m_ub: NumEdges,
            ) -> Vec<WeightedEdge<i64>> {
                let mut edges: Vec<WeightedEdge<i64>> = (0..m_ub).map(|_| {
                    let u = rng.random_range(0..n);
                    let v = rng.random_range(0..n);
                    WeightedEdge(u, v, rng.random_range(-5..20))
                }).collect_vec();
                edges.sort_unstable_by_key(|e| e.unweighted());
                edges.dedup_by_key(|e| e.unweighted());

                edges
            }

            $(
                test_graph_ops!($graph: $trait);
            )*
        }
    };
    ($graph:ident: GraphFromScratch) => {
        #[test]
        fn graph_from_scratch() {
            for n in 0..50 {
                let graph = <$graph<i64>>::try_from_edges(n, Vec::<Edge>::new()).unwrap();

                assert_eq!(graph.number_of_edges(), 0);
                assert_eq!(graph.number_of_nodes(), n);

                assert_eq!(graph.vertices_range().len(), n as usize);
                assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());

                assert!(<$graph<i64>>::try_from_edges(n, [(0, n)]).is_err());
            }
        }
    };
    ($graph:ident: AdjacencyList) => {
        #[test]
        fn test_adjacency_list() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10 as NumNodes, 20, 50] {
                for m_ub in [n * 2, n * 5, n * 10] {
                    for _ in 0..10 {
                        let edges = random_edges(rng, n, m_ub as NumEdges);

                        let mut adj_matrix = vec![vec![false; n as usize]; n as usize];
                        for e in &edges {
                            adj_matrix[e.source() as usize][e.target() as usize] = true;
                        }

                        let graph = <$graph<i64>>::try_from_edges(n, edges.iter()).unwrap();

                        assert_eq!(graph.number_of_nodes(), n);
                        assert_eq!(graph.number_of_edges(), edges.len() as NumEdges);
                        assert_eq!(
                            edges.iter().map(|e| e.unweighted()).collect_vec(),
                            graph.ordered_edges()
                        );

                        for u in 0..n {
                            let nbs = graph.neighbors_of(u).sorted().collect_vec();
                            let expected = (0..n)
                                .filter(|&v| adj_matrix[u as usize][v as usize])
                                .collect_vec();
                            assert_eq!(nbs, expected);
                            assert_eq!(graph.degree_of(u), expected.len() as NumNodes);
                        }
                    }
                }
            }
        }
    };
    ($graph:ident: EdgeWeight) => {
        #[test]
        fn test_edge_weight() {
            let rng = &mut Pcg64Mcg::seed_from_u64(4);

            for n in [10 as NumNodes, 20] {
                let edges = random_edges(rng, n, n * 4);
                let graph = <$graph<i64>>::try_from_edges(n, edges.iter()).unwrap();

                for e in &edges {
                    assert!(graph.has_edge(e.source(), e.target()));
                    assert_eq!(graph.edge_weight(e.source(), e.target()), Some(e.weight()));
                }

                let missing = (0..n)
                    .cartesian_product(0..n)
                    .filter(|&(u, v)| !graph.has_edge(u, v))
                    .count();
                assert_eq!(missing + edges.len(), (n * n) as usize);
            }
        }
    };
    ($graph:ident: Transpose) => {
        #[test]
        fn test_transpose() {
            let rng = &mut Pcg64Mcg::seed_from_u64(5);

            for n in [10 as NumNodes, 20] {
                let edges = random_edges(rng, n, n * 4);
                let graph = <$graph<i64>>::try_from_edges(n, edges.iter()).unwrap();
                let transposed = graph.transposed();

                assert_eq!(graph.number_of_edges(), transposed.number_of_edges());
                for WeightedEdge(u, v, w) in graph.weighted_edges() {
                    assert_eq!(transposed.edge_weight(v, u), Some(w));
                }
            }
        }
    };
}

pub(crate) use test_graph_ops;

/// Random weighted graphs and fixed instances shared by the algorithm tests
#[cfg(test)]
pub(crate) mod fixtures {
    use rand::Rng;

    use crate::{ops::*, repr::*, *};

    /// `G(n,p)`-style random directed graph without self-loops; every edge gets a weight drawn
    /// uniformly from `weights`.
    pub fn random_weighted_graph<R: Rng>(
        rng: &mut R,
        n: NumNodes,
        p: f64,
        weights: std::ops::Range<i64>,
    ) -> AdjArray {
        let mut edges = Vec::new();
        for u in 0..n {
            for v in 0..n {
                if u != v && rng.random_bool(p) {
                    edges.push(WeightedEdge(u, v, rng.random_range(weights.clone())));
                }
            }
        }
        AdjArray::try_from_edges(n, edges).unwrap()
    }

    /// 5 nodes; shortest `0 -> 2` has distance 7 via `[0, 3, 4, 2]`
    pub fn sssp_instance() -> AdjArray {
        AdjArray::try_from_edges(
            5,
            [
                (0, 1, 6),
                (0, 2, 10),
                (0, 3, 4),
                (1, 0, 2),
                (1, 2, 3),
                (1, 4, 5),
                (3, 1, 1),
                (3, 4, 2),
                (4, 2, 1),
            ],
        )
        .unwrap()
    }

    /// 4 nodes; shortest `0 -> 3` has distance 5 via `[0, 2, 3]`, node 0 is unreachable
    pub fn apsp_instance() -> AdjArray {
        AdjArray::try_from_edges(
            4,
            [
                (0, 1, 6),
                (0, 2, 3),
                (0, 3, 12),
                (1, 2, 9),
                (1, 3, 5),
                (2, 3, 2),
                (3, 1, 4),
                (3, 2, 1),
            ],
        )
        .unwrap()
    }

    /// 7 nodes; SCCs `{0, 1, 4, 6}, {2, 3}, {5}`
    pub fn scc_instance() -> AdjArray {
        AdjArray::try_from_edges(
            7,
            [
                (0, 1),
                (0, 6),
                (1, 4),
                (2, 3),
                (2, 5),
                (3, 2),
                (3, 5),
                (4, 0),
                (4, 5),
                (6, 4),
            ],
        )
        .unwrap()
    }

    /// 6 nodes; `5` has no path back to `0`
    pub fn bfs_instance() -> AdjArray {
        AdjArray::try_from_edges(
            6,
            [
                (0, 1),
                (0, 2),
                (1, 3),
                (2, 4),
                (3, 0),
                (3, 4),
                (4, 3),
                (4, 5),
            ],
        )
        .unwrap()
    }
}
