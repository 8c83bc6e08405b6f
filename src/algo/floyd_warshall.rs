use num::Zero;

use super::{traversal::walk_parents, *};

/// All-pairs shortest paths via Floyd-Warshall in `O(n^3)` time and `O(n^2)` space.
///
/// Besides the distance matrix, a predecessor matrix is maintained: `predecessor[i][j]` is the
/// node preceding `j` on the best known path from `i`. Initially this is `i` for every direct
/// edge and on the diagonal. Whenever the path `i -> j` improves via `k`, it takes over
/// `predecessor[k][j]`.
///
/// A prefix whose weight does not fit into the weight type counts as unreached, just like in
/// the single-source algorithms. Afterwards, every entry whose predecessor chain runs into such
/// an unreached node is reset to unreached as well.
///
/// Negative edge weights are supported. With a negative cycle, distances through it are
/// meaningless; [`FloydWarshall::has_negative_cycle`] reports this case.
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// let g: AdjArray = AdjArray::try_from_edges(3, [(0, 1, 2), (1, 2, 2), (0, 2, 5)]).unwrap();
/// let apsp = g.floyd_warshall();
///
/// assert_eq!(apsp.shortest_path(0, 2), Ok((4, vec![0, 1, 2])));
/// assert_eq!(apsp.distance(2, 0), Ok(None));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloydWarshall<W> {
    n: NumNodes,
    distances: Vec<W>,
    predecessors: Vec<Node>,
}

impl<W: Weight> FloydWarshall<W> {
    /// Computes all shortest distances of `graph`. Parallel edges contribute their minimum
    /// weight; a negative self-loop lowers the diagonal entry below zero.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(n = graph.number_of_nodes(), m = graph.number_of_edges())
    )]
    pub fn new<G>(graph: &G) -> Self
    where
        G: AdjacencyList<Weight = W>,
    {
        let n = graph.number_of_nodes();
        let size = n as usize;

        let mut distances = vec![W::infinity(); size * size];
        let mut predecessors = vec![INVALID_NODE; size * size];

        for i in 0..size {
            distances[i * size + i] = W::zero();
            predecessors[i * size + i] = i as Node;
        }

        for WeightedEdge(u, v, w) in graph.weighted_edges() {
            let idx = u as usize * size + v as usize;
            if w < distances[idx] {
                distances[idx] = w;
                predecessors[idx] = u;
            }
        }

        for k in 0..size {
            for i in 0..size {
                let d_ik = distances[i * size + k];
                if d_ik.is_infinite() {
                    continue;
                }

                for j in 0..size {
                    let d_kj = distances[k * size + j];
                    if d_kj.is_infinite() {
                        continue;
                    }

                    if let Some(candidate) = d_ik.extend(d_kj) {
                        if candidate < distances[i * size + j] {
                            distances[i * size + j] = candidate;
                            predecessors[i * size + j] = predecessors[k * size + j];
                        }
                    }
                }
            }
        }

        let mut apsp = Self {
            n,
            distances,
            predecessors,
        };
        apsp.drop_broken_chains();

        tracing::debug!(
            negative_cycle = apsp.has_negative_cycle(),
            "floyd-warshall finished"
        );

        apsp
    }

    /// Resets every finite entry `(i, j)` whose predecessors, followed from `j`, run into a node
    /// unreached from `i`. Chains that cycle (negative cycles) are kept.
    fn drop_broken_chains(&mut self) {
        let n = self.n as usize;
        let mut intact = NodeBitSet::new(self.n);
        let mut broken = NodeBitSet::new(self.n);
        let mut chain = Vec::with_capacity(n);
        let mut dropped = 0usize;

        for i in 0..self.n {
            let row = self.row_range(i);
            intact.clear_all();
            broken.clear_all();
            intact.set_bit(i);

            for j in 0..self.n {
                chain.clear();
                let mut current = j;
                let is_broken = loop {
                    if current == INVALID_NODE || broken.get_bit(current) {
                        break true;
                    }
                    if intact.get_bit(current) || chain.len() > n {
                        break false;
                    }
                    chain.push(current);
                    current = self.predecessors[row.start + current as usize];
                };

                for &u in &chain {
                    if !is_broken {
                        intact.set_bit(u);
                        continue;
                    }

                    broken.set_bit(u);
                    let idx = row.start + u as usize;
                    if !self.distances[idx].is_infinite() {
                        dropped += 1;
                    }
                    self.distances[idx] = W::infinity();
                    self.predecessors[idx] = INVALID_NODE;
                }
            }
        }

        if dropped > 0 {
            tracing::debug!(dropped, "reset entries with overflowing prefixes");
        }
    }

    #[inline]
    fn row_range(&self, i: Node) -> std::ops::Range<usize> {
        let begin = i as usize * self.n as usize;
        begin..begin + self.n as usize
    }

    /// Returns the number of nodes of the underlying graph
    pub fn number_of_nodes(&self) -> NumNodes {
        self.n
    }

    /// Returns the shortest distance from `i` to `j`, or `None` if `j` is unreachable from `i`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidIndex`] if a node is out of range.
    pub fn distance(&self, i: Node, j: Node) -> Result<Option<W>> {
        validate_node_bound(i, self.n)?;
        validate_node_bound(j, self.n)?;
        let d = self.distances[self.row_range(i)][j as usize];
        Ok((!d.is_infinite()).then_some(d))
    }

    /// Returns the distances from `i` to every node, `None` for unreachable ones.
    ///
    /// # Errors
    /// Returns [`Error::InvalidIndex`] if `i` is out of range.
    pub fn distances_from(&self, i: Node) -> Result<Vec<Option<W>>> {
        validate_node_bound(i, self.n)?;
        Ok(finite_distances(&self.distances[self.row_range(i)]))
    }

    /// Returns *true* if any node lies on a cycle of negative total weight, i.e. if any
    /// diagonal entry became negative
    pub fn has_negative_cycle(&self) -> bool {
        (0..self.n).any(|i| {
            self.distances[i as usize * self.n as usize + i as usize].is_negative_weight()
        })
    }

    /// Returns the distance and nodes of a shortest path from `start` to `end`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidIndex`] if a node is out of range, [`Error::NoPathExists`] if
    /// `end` is unreachable from `start`, and [`Error::NegativeCycle`] if the predecessors
    /// do not lead back to `start` within `n` steps.
    pub fn shortest_path(&self, start: Node, end: Node) -> Result<(W, Vec<Node>)> {
        validate_node_bound(start, self.n)?;
        validate_node_bound(end, self.n)?;

        let row = self.row_range(start);
        let path = walk_parents(&self.predecessors[row.clone()], start, end)?;
        Ok((self.distances[row][end as usize], path))
    }
}
