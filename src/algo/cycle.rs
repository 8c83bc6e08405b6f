/*!
# Cycle Detection

A directed graph contains a cycle iff a DFS finds a back-edge, i.e. an edge into a node that is
still `InProgress`. For undirected graphs (every edge stored in both directions) the edge back to
the immediate DFS parent is the reverse of a tree edge and must be ignored.
*/

use std::ops::ControlFlow;

use super::{traversal::*, *};

/// Visitor stopping at the first back-edge
struct BackEdgeFinder {
    undirected: bool,
}

impl DfsVisitor for BackEdgeFinder {
    type Break = Edge;

    fn edge(
        &mut self,
        u: Node,
        v: Node,
        kind: EdgeKind,
        parent_of_u: Option<Node>,
    ) -> ControlFlow<Edge> {
        if kind != EdgeKind::Back || (self.undirected && parent_of_u == Some(v)) {
            ControlFlow::Continue(())
        } else {
            ControlFlow::Break(Edge(u, v))
        }
    }
}

#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(n = graph.number_of_nodes(), undirected = undirected)
)]
fn find_back_edge<G: IndexedAdjacencyList>(graph: &G, undirected: bool) -> Option<Edge> {
    let mut visitor = BackEdgeFinder { undirected };
    match DepthFirstSearch::for_graph(graph).run_all(graph, &mut visitor) {
        ControlFlow::Break(edge) => {
            tracing::debug!(%edge, "found back-edge");
            Some(edge)
        }
        ControlFlow::Continue(()) => None,
    }
}

/// Tests graphs for cycles using a full-graph DFS
pub trait CycleDetection: IndexedAdjacencyList {
    /// Returns the first back-edge `(u, v)` found by a full-graph DFS, if any.
    /// The edge closes a directed cycle through `v` and `u`.
    fn find_back_edge(&self) -> Option<Edge> {
        find_back_edge(self, false)
    }

    /// Returns *true* if the directed graph contains a cycle (self-loops included).
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g: AdjArray = AdjArray::try_from_edges(3, [(0, 1), (1, 2)]).unwrap();
    /// assert!(!g.contains_cycle());
    ///
    /// let g: AdjArray = AdjArray::try_from_edges(3, [(0, 1), (1, 2), (2, 0)]).unwrap();
    /// assert!(g.contains_cycle());
    /// ```
    fn contains_cycle(&self) -> bool {
        self.find_back_edge().is_some()
    }

    /// Returns *true* if the graph, interpreted as undirected (each edge `{u, v}` stored as
    /// `(u, v)` and `(v, u)`), contains a cycle. The edge back to the DFS parent is ignored.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g: AdjArray = AdjArray::try_from_undirected_edges(3, [(0, 1), (1, 2)]).unwrap();
    /// assert!(!g.contains_undirected_cycle());
    /// assert!(g.contains_cycle());
    /// ```
    fn contains_undirected_cycle(&self) -> bool {
        find_back_edge(self, true).is_some()
    }
}

impl<G> CycleDetection for G where G: IndexedAdjacencyList {}
