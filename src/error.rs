use thiserror::Error;

use crate::{Node, NumNodes};

/// The generic Error type covering every failure this library reports.
///
/// Only genuinely exceptional outcomes are errors. The absence of a cycle or of a component, or
/// an unreached node in a distance vector, are regular return values.
///
/// # Examples
///
/// ```rust
/// use wgraphs::{prelude::*, algo::*, Error};
///
/// let graph = AdjArray::<i64>::try_from_edges(3, [(0, 1), (1, 2)]).unwrap();
///
/// match graph.bfs_shortest_path(2, 0) {
///     Err(Error::NoPathExists { start, end }) => assert_eq!((start, end), (2, 0)),
///     other => panic!("unexpected result {other:?}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An edge or a query referenced a node outside of `0..n`.
    #[error("node {node} is out of range for a graph with {number_of_nodes} nodes")]
    InvalidIndex {
        /// The offending node
        node: Node,
        /// Number of nodes of the graph
        number_of_nodes: NumNodes,
    },

    /// A path query found the target unreached from the start.
    #[error("no path exists from node {start} to node {end}")]
    NoPathExists {
        /// Start of the requested path
        start: Node,
        /// End of the requested path
        end: Node,
    },

    /// A topological order was requested for a graph containing a directed cycle.
    #[error("graph contains a cycle through node {node}, no topological order exists")]
    CyclicGraph {
        /// Target of the back-edge that closed the cycle
        node: Node,
    },

    /// An opt-in validation found a cycle of negative total weight.
    #[error("a negative-weight cycle is reachable via node {node}")]
    NegativeCycle {
        /// A node whose distance still decreased after the relaxation limit
        node: Node,
    },
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
