/*!
# Bipartite Graph Check

A graph is bipartite iff its nodes can be colored with two colors such that no edge joins two
nodes of the same color. The check proceeds in two steps:
- a DFS restarting at every uncolored node (in increasing order) colors roots [`Color::Left`] and
  every tree child in the color opposite to its parent,
- afterwards every edge is validated; the graph is bipartite iff no edge joins equal colors.

A two-coloring is stored as a [`NodeBitSet`] containing exactly the nodes on the right side.

Colors only propagate along stored edges, so undirected graphs are expected to store each edge
in both directions (see [`try_from_undirected_edges`]). A coloring reported as valid is always
valid.

[`try_from_undirected_edges`]: crate::ops::GraphFromScratch::try_from_undirected_edges
*/

use std::{convert::Infallible, ops::ControlFlow};

use super::{traversal::*, *};

/// Side of a node in a two-coloring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Color of every DFS root; nodes not contained in the bipartition set
    Left,
    /// Nodes contained in the bipartition set
    Right,
}

impl Color {
    /// Returns the other color
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Color::Left => Color::Right,
            Color::Right => Color::Left,
        }
    }
}

/// A two-coloring of the nodes `0..n`
pub trait Bipartition {
    /// Number of nodes the coloring assigns a color to
    fn number_of_colored_nodes(&self) -> NumNodes;

    /// Returns `true` if the node is on the right side of the partition.
    /// ** Panics if `u` is not colored **
    fn is_on_right_side(&self, u: Node) -> bool;

    /// Returns `true` if the node is on the left side of the partition.
    /// ** Panics if `u` is not colored **
    #[inline]
    fn is_on_left_side(&self, u: Node) -> bool {
        !self.is_on_right_side(u)
    }

    /// Returns the color of `u`
    /// ** Panics if `u` is not colored **
    #[inline]
    fn color(&self, u: Node) -> Color {
        if self.is_on_right_side(u) {
            Color::Right
        } else {
            Color::Left
        }
    }
}

impl Bipartition for NodeBitSet {
    fn number_of_colored_nodes(&self) -> NumNodes {
        self.number_of_bits() as NumNodes
    }

    #[inline]
    fn is_on_right_side(&self, u: Node) -> bool {
        self.get_bit(u)
    }
}

/// Puts every tree child on the side opposite to its parent; roots stay left
struct Painter {
    right_side: NodeBitSet,
}

impl DfsVisitor for Painter {
    type Break = Infallible;

    fn discover(&mut self, u: Node, parent: Option<Node>) -> ControlFlow<Infallible> {
        if let Some(p) = parent {
            if self.right_side.is_on_left_side(p) {
                self.right_side.set_bit(u);
            }
        }
        ControlFlow::Continue(())
    }
}

/// Result of the two-coloring of a graph.
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// let square: AdjArray =
///     AdjArray::try_from_undirected_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
/// let check = BipartiteCheck::new(&square);
///
/// assert!(check.is_bipartite());
/// assert_eq!(check.color_of(2), Ok(Color::Left));
/// assert_eq!(check.color_of(3), Ok(Color::Right));
/// ```
pub struct BipartiteCheck {
    right_side: NodeBitSet,
    is_bipartite: bool,
}

impl BipartiteCheck {
    /// Colors `graph` and validates the coloring
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(n = graph.number_of_nodes(), m = graph.number_of_edges())
    )]
    pub fn new<G: IndexedAdjacencyList>(graph: &G) -> Self {
        let mut painter = Painter {
            right_side: NodeBitSet::new(graph.number_of_nodes()),
        };
        let _ = DepthFirstSearch::for_graph(graph).run_all(graph, &mut painter);

        let right_side = painter.right_side;
        let is_bipartite = graph.is_bipartition(&right_side);

        tracing::debug!(is_bipartite, "coloring validated");

        Self {
            right_side,
            is_bipartite,
        }
    }

    /// Returns *true* if no edge joins two nodes of the same color
    pub fn is_bipartite(&self) -> bool {
        self.is_bipartite
    }

    /// Returns the computed coloring as the set of nodes on the right side. If the graph is not
    /// bipartite, at least one edge joins nodes of equal color.
    pub fn coloring(&self) -> &NodeBitSet {
        &self.right_side
    }

    /// Returns the color of `u`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidIndex`] if `u` is out of range.
    pub fn color_of(&self, u: Node) -> Result<Color> {
        validate_node_bound(u, self.right_side.number_of_colored_nodes())?;
        Ok(self.right_side.color(u))
    }

    /// Returns the coloring if it is a valid bipartition
    pub fn into_bipartition(self) -> Option<NodeBitSet> {
        self.is_bipartite.then_some(self.right_side)
    }
}

/// A trait for testing and computing bipartitions in graphs.
pub trait BipartiteTest: IndexedAdjacencyList {
    /// Tests whether `bipartition` colors every node and no edge joins equal colors.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g: AdjArray = AdjArray::try_from_undirected_edges(3, [(0, 1), (1, 2)]).unwrap();
    ///
    /// assert!(g.is_bipartition(&NodeBitSet::new_with_bits_set(3, vec![0 as Node, 2])));
    /// assert!(!g.is_bipartition(&NodeBitSet::new_with_bits_set(3, vec![2 as Node])));
    /// ```
    fn is_bipartition<B: Bipartition>(&self, bipartition: &B) -> bool {
        bipartition.number_of_colored_nodes() >= self.number_of_nodes()
            && self
                .edges()
                .all(|Edge(u, v)| bipartition.is_on_left_side(u) != bipartition.is_on_left_side(v))
    }

    /// Computes a valid bipartition (the nodes on the right side) of the graph, if one exists.
    /// Returns `None` if the graph is not bipartite.
    fn compute_bipartition(&self) -> Option<NodeBitSet> {
        BipartiteCheck::new(self).into_bipartition()
    }

    /// Tests whether the graph is bipartite.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let triangle: AdjArray =
    ///     AdjArray::try_from_undirected_edges(3, [(0, 1), (1, 2), (2, 0)]).unwrap();
    /// assert!(!triangle.is_bipartite());
    /// ```
    fn is_bipartite(&self) -> bool {
        BipartiteCheck::new(self).is_bipartite()
    }
}

impl<G> BipartiteTest for G where G: IndexedAdjacencyList {}
