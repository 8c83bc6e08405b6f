use std::fmt::{Debug, Display};

use crate::{Node, weight::Weight};

/// A directed edge `u -> v` without a weight.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

/// A directed edge `u -> v` carrying a weight.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeightedEdge<W>(pub Node, pub Node, pub W);

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl<W: Display> Display for WeightedEdge<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{};{})", self.0, self.1, self.2)
    }
}

impl<W: Display> Debug for WeightedEdge<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Normalizes the edge such that the endpoint with smaller value comes first
    pub fn normalized(&self) -> Self {
        Edge(self.0.min(self.1), self.0.max(self.1))
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
        Edge(self.1, self.0)
    }

    /// Attaches a weight to the edge
    pub fn with_weight<W>(self, weight: W) -> WeightedEdge<W> {
        WeightedEdge(self.0, self.1, weight)
    }
}

impl<W: Copy> WeightedEdge<W> {
    /// Source of the edge
    pub fn source(&self) -> Node {
        self.0
    }

    /// Target of the edge
    pub fn target(&self) -> Node {
        self.1
    }

    /// Weight of the edge
    pub fn weight(&self) -> W {
        self.2
    }

    /// Drops the weight
    pub fn unweighted(&self) -> Edge {
        Edge(self.0, self.1)
    }

    /// Reverses the edge by switching the endpoints; the weight is kept
    pub fn reverse(&self) -> Self {
        WeightedEdge(self.1, self.0, self.2)
    }
}

impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&(Node, Node)> for Edge {
    fn from(value: &(Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&Edge> for Edge {
    fn from(value: &Edge) -> Self {
        *value
    }
}

// Unweighted input gets unit weight so that BFS hop counts and shortest-path distances coincide.
impl<W: Weight> From<Edge> for WeightedEdge<W> {
    fn from(value: Edge) -> Self {
        WeightedEdge(value.0, value.1, W::unit())
    }
}

impl<W: Weight> From<(Node, Node)> for WeightedEdge<W> {
    fn from(value: (Node, Node)) -> Self {
        WeightedEdge(value.0, value.1, W::unit())
    }
}

impl<W: Weight> From<&(Node, Node)> for WeightedEdge<W> {
    fn from(value: &(Node, Node)) -> Self {
        WeightedEdge(value.0, value.1, W::unit())
    }
}

impl<W: Weight> From<(Node, Node, W)> for WeightedEdge<W> {
    fn from(value: (Node, Node, W)) -> Self {
        WeightedEdge(value.0, value.1, value.2)
    }
}

impl<W: Weight> From<&(Node, Node, W)> for WeightedEdge<W> {
    fn from(value: &(Node, Node, W)) -> Self {
        WeightedEdge(value.0, value.1, value.2)
    }
}

impl<W: Weight> From<&WeightedEdge<W>> for WeightedEdge<W> {
    fn from(value: &WeightedEdge<W>) -> Self {
        *value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions() {
        let e: WeightedEdge<i64> = (1, 2).into();
        assert_eq!(e, WeightedEdge(1, 2, 1));

        let e: WeightedEdge<i32> = (3, 0, -7).into();
        assert_eq!(e.reverse(), WeightedEdge(0, 3, -7));
        assert_eq!(e.unweighted(), Edge(3, 0));

        assert_eq!(Edge(4, 2).normalized(), Edge(2, 4));
        assert!(Edge(5, 5).is_loop());
        assert_eq!(format!("{:?}", WeightedEdge(0, 1, 3)), "(0,1;3)");
    }
}
