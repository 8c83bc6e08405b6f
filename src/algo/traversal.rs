/*!
Graph traversal primitives shared by all other algorithms.

This module provides:
- [`NodeState`], the three-state coloring `Unvisited -> InProgress -> Finished` of a DFS run,
- [`DepthFirstSearch`], an explicit-stack DFS engine reporting discovery, classified edges and
  completion of nodes to a [`DfsVisitor`],
- BFS iterators (with and without predecessor tracking) and the [`BfsTree`] built from them,
- a high-level [`Traversal`] trait that exposes traversal algorithms directly as methods on
  graph data structures.
*/

use std::{collections::VecDeque, marker::PhantomData, ops::ControlFlow};

use super::*;

/// State of a node within a single DFS run.
///
/// `InProgress` marks nodes on the current DFS path (the simulated recursion stack); an edge into
/// such a node is a back-edge and closes a cycle. `Finished` marks nodes whose complete subtree
/// has been explored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NodeState {
    /// Not yet reached by the current run
    #[default]
    Unvisited,
    /// Discovered but not all outgoing edges are explored yet
    InProgress,
    /// All outgoing edges are explored
    Finished,
}

/// Classification of an edge `(u, v)` at the moment the DFS inspects it from `u`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeKind {
    /// `v` was unvisited and is explored next as a child of `u`
    Tree,
    /// `v` is on the current DFS path
    Back,
    /// `v` has already been finished
    ForwardOrCross,
}

impl EdgeKind {
    fn classify(target: NodeState) -> Self {
        match target {
            NodeState::Unvisited => EdgeKind::Tree,
            NodeState::InProgress => EdgeKind::Back,
            NodeState::Finished => EdgeKind::ForwardOrCross,
        }
    }
}

/// Callbacks of a [`DepthFirstSearch`] run.
///
/// Every callback may stop the run by returning [`ControlFlow::Break`]; the value is handed back
/// to the caller of the run. All callbacks default to doing nothing.
pub trait DfsVisitor {
    /// Value returned when the visitor aborts the search
    type Break;

    /// `u` changed from `Unvisited` to `InProgress`; `parent` is `None` for roots
    fn discover(&mut self, _u: Node, _parent: Option<Node>) -> ControlFlow<Self::Break> {
        ControlFlow::Continue(())
    }

    /// The edge `(u, v)` is inspected. `parent_of_u` is the node `u` was discovered from.
    /// For [`EdgeKind::Tree`], `v` is discovered right after this call.
    fn edge(
        &mut self,
        _u: Node,
        _v: Node,
        _kind: EdgeKind,
        _parent_of_u: Option<Node>,
    ) -> ControlFlow<Self::Break> {
        ControlFlow::Continue(())
    }

    /// All out-edges of `u` were processed and `u` changed to `Finished`
    fn finish(&mut self, _u: Node) -> ControlFlow<Self::Break> {
        ControlFlow::Continue(())
    }
}

/// Visitor recording the order in which nodes finish
#[derive(Debug, Clone, Default)]
pub struct FinishOrder {
    pub order: Vec<Node>,
}

impl DfsVisitor for FinishOrder {
    type Break = std::convert::Infallible;

    fn finish(&mut self, u: Node) -> ControlFlow<Self::Break> {
        self.order.push(u);
        ControlFlow::Continue(())
    }
}

/// One simulated recursive call of the DFS
#[derive(Debug, Clone, Copy)]
struct StackFrame {
    node: Node,
    parent: Option<Node>,
    next_neighbor: NumNodes,
    degree: NumNodes,
}

/// Depth-first search engine with an explicit call stack.
///
/// DFS is typically described recursively. For large graphs this overflows the stack, so the
/// recursion is simulated by `call_stack`, where each frame remembers the position within the
/// neighborhood of its node. Neighbors are processed in adjacency order, hence the traversal
/// order is exactly the one of the recursive formulation.
///
/// The engine owns the [`NodeState`] of every node but only borrows the graph per run. States
/// persist across runs until [`DepthFirstSearch::reset`] is called, which allows both a
/// full-graph traversal (restarting at every unvisited node) and multi-phase algorithms that
/// reuse one state vector on different graphs over the same node set.
#[derive(Debug, Clone)]
pub struct DepthFirstSearch {
    states: Vec<NodeState>,
    call_stack: Vec<StackFrame>,
}

impl DepthFirstSearch {
    /// Creates an engine for graphs with `n` nodes; all nodes start `Unvisited`
    pub fn new(n: NumNodes) -> Self {
        Self {
            states: vec![NodeState::Unvisited; n as usize],
            call_stack: Vec::with_capacity(32),
        }
    }

    /// Creates an engine matching the node count of `graph`
    pub fn for_graph<G: GraphNodeOrder>(graph: &G) -> Self {
        Self::new(graph.number_of_nodes())
    }

    /// Returns the current state of `u`
    /// ** Panics if `u >= n` **
    pub fn state_of(&self, u: Node) -> NodeState {
        self.states[u as usize]
    }

    /// Returns the states of all nodes
    pub fn states(&self) -> &[NodeState] {
        &self.states
    }

    /// Marks every node as `Unvisited` again
    pub fn reset(&mut self) {
        self.states.fill(NodeState::Unvisited);
        self.call_stack.clear();
    }

    /// Runs a DFS from `root` over all nodes reachable from it that are still `Unvisited`.
    /// Does nothing if `root` itself was already visited.
    ///
    /// If the visitor breaks, the run stops immediately and the break value is returned; nodes
    /// on the DFS path at that time stay `InProgress`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidIndex`] if `root` is not a node of `graph`.
    pub fn run_from<G, V>(
        &mut self,
        graph: &G,
        root: Node,
        visitor: &mut V,
    ) -> Result<ControlFlow<V::Break>>
    where
        G: IndexedAdjacencyList,
        V: DfsVisitor,
    {
        graph.validate_node(root)?;
        debug_assert_eq!(graph.len(), self.states.len());

        if self.states[root as usize] != NodeState::Unvisited {
            return Ok(ControlFlow::Continue(()));
        }

        Ok(self.search(graph, root, visitor))
    }

    /// Runs DFS from every `Unvisited` node of `roots` in the given order
    /// ** Panics if any root is `>= n` **
    pub fn run_from_each<G, V, I>(
        &mut self,
        graph: &G,
        roots: I,
        visitor: &mut V,
    ) -> ControlFlow<V::Break>
    where
        G: IndexedAdjacencyList,
        V: DfsVisitor,
        I: IntoIterator<Item = Node>,
    {
        debug_assert_eq!(graph.len(), self.states.len());

        for root in roots {
            if self.states[root as usize] == NodeState::Unvisited {
                self.search(graph, root, visitor)?;
            }
        }
        ControlFlow::Continue(())
    }

    /// Runs a full-graph DFS, restarting at every `Unvisited` node in increasing order
    pub fn run_all<G, V>(&mut self, graph: &G, visitor: &mut V) -> ControlFlow<V::Break>
    where
        G: IndexedAdjacencyList,
        V: DfsVisitor,
    {
        self.run_from_each(graph, graph.vertices_range(), visitor)
    }

    fn enter<V: DfsVisitor>(
        &mut self,
        degree: NumNodes,
        node: Node,
        parent: Option<Node>,
        visitor: &mut V,
    ) -> ControlFlow<V::Break> {
        debug_assert_eq!(self.states[node as usize], NodeState::Unvisited);
        self.states[node as usize] = NodeState::InProgress;
        self.call_stack.push(StackFrame {
            node,
            parent,
            next_neighbor: 0,
            degree,
        });
        visitor.discover(node, parent)
    }

    fn search<G, V>(&mut self, graph: &G, root: Node, visitor: &mut V) -> ControlFlow<V::Break>
    where
        G: IndexedAdjacencyList,
        V: DfsVisitor,
    {
        let flow = self.search_inner(graph, root, visitor);
        if flow.is_break() {
            self.call_stack.clear();
        }
        flow
    }

    fn search_inner<G, V>(
        &mut self,
        graph: &G,
        root: Node,
        visitor: &mut V,
    ) -> ControlFlow<V::Break>
    where
        G: IndexedAdjacencyList,
        V: DfsVisitor,
    {
        self.enter(graph.degree_of(root), root, None, visitor)?;

        while let Some(frame) = self.call_stack.last_mut() {
            let u = frame.node;

            if frame.next_neighbor < frame.degree {
                let v = graph.ith_neighbor(u, frame.next_neighbor);
                frame.next_neighbor += 1;
                let parent = frame.parent;

                let kind = EdgeKind::classify(self.states[v as usize]);
                visitor.edge(u, v, kind, parent)?;

                if kind == EdgeKind::Tree {
                    self.enter(graph.degree_of(v), v, Some(u), visitor)?;
                }
            } else {
                self.call_stack.pop();
                self.states[u as usize] = NodeState::Finished;
                visitor.finish(u)?;
            }
        }

        ControlFlow::Continue(())
    }
}

/// Item type of the BFS iterators: a visited node, optionally together with the node that
/// discovered it. Implemented by [`Node`] (no discoverer) and [`PredecessorOfNode`].
pub trait SequencedItem: Clone + Copy {
    /// Item for `item` discovered via the edge `(predecessor, item)`
    fn new_with_predecessor(predecessor: Node, item: Node) -> Self;

    /// Item for a root of the search
    fn new_without_predecessor(item: Node) -> Self;

    /// The visited node
    fn item(&self) -> Node;

    /// The discovering node; `None` for roots and untracked items
    fn predecessor(&self) -> Option<Node>;

    /// Returns `(predecessor, item)`
    fn predecessor_with_item(&self) -> (Option<Node>, Node) {
        (self.predecessor(), self.item())
    }
}

impl SequencedItem for Node {
    fn new_with_predecessor(_: Node, item: Node) -> Self {
        item
    }
    fn new_without_predecessor(item: Node) -> Self {
        item
    }
    fn item(&self) -> Node {
        *self
    }
    fn predecessor(&self) -> Option<Node> {
        None
    }
}

/// `(predecessor, node)`; a root is stored as `(node, node)`.
pub type PredecessorOfNode = (Node, Node);

impl SequencedItem for PredecessorOfNode {
    fn new_with_predecessor(predecessor: Node, item: Node) -> Self {
        (predecessor, item)
    }
    fn new_without_predecessor(item: Node) -> Self {
        (item, item)
    }
    fn item(&self) -> Node {
        self.1
    }
    fn predecessor(&self) -> Option<Node> {
        if self.0 == self.1 { None } else { Some(self.0) }
    }
}

/// Breadth-first search iterator.
///
/// Nodes are yielded in non-decreasing hop distance from the start. A node is marked as
/// discovered when it is enqueued, so its predecessor is the first node that discovered it;
/// ties are broken by adjacency order.
pub struct BreadthFirstSearch<'a, G, I>
where
    G: AdjacencyList,
    I: SequencedItem,
{
    graph: &'a G,
    discovered: NodeBitSet,
    queue: VecDeque<I>,
    stop_at: Option<Node>,
    _item: PhantomData<I>,
}

/// BFS iterator yielding plain nodes
pub type BFS<'a, G> = BreadthFirstSearch<'a, G, Node>;

/// BFS iterator yielding `(predecessor, node)` pairs, i.e. the edges of the BFS tree
pub type BFSWithPredecessor<'a, G> = BreadthFirstSearch<'a, G, PredecessorOfNode>;

impl<G, I> Iterator for BreadthFirstSearch<'_, G, I>
where
    G: AdjacencyList,
    I: SequencedItem,
{
    type Item = I;

    fn next(&mut self) -> Option<Self::Item> {
        let popped = self.queue.pop_front()?;
        let u = popped.item();

        if self.stop_at == Some(u) {
            self.queue.clear();
        } else {
            for v in self.graph.neighbors_of(u) {
                if !self.discovered.set_bit(v) {
                    self.queue.push_back(I::new_with_predecessor(u, v));
                }
            }
        }

        Some(popped)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (
            self.queue.len(),
            Some(self.queue.len() + self.graph.len() - self.discovered.cardinality() as usize),
        )
    }
}

impl<'a, G, I> BreadthFirstSearch<'a, G, I>
where
    G: AdjacencyList,
    I: SequencedItem,
{
    /// Creates a new BFS iterator starting from `start`.
    /// ** Panics if `start >= n` **
    pub fn new(graph: &'a G, start: Node) -> Self {
        let mut discovered = NodeBitSet::new(graph.number_of_nodes());
        discovered.set_bit(start);
        Self {
            graph,
            discovered,
            queue: VecDeque::from(vec![I::new_without_predecessor(start)]),
            stop_at: None,
            _item: PhantomData,
        }
    }

    /// Creates a new BFS iterator starting from `start`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidIndex`] if `start` is not a node of `graph`.
    pub fn try_new(graph: &'a G, start: Node) -> Result<Self> {
        graph.validate_node(start)?;
        Ok(Self::new(graph, start))
    }

    /// Returns *true* if `u` has been discovered (i.e. enqueued) so far
    pub fn did_discover_node(&self, u: Node) -> bool {
        self.discovered.get_bit(u)
    }

    /// Once the iterator is exhausted, continues the search at the smallest undiscovered node.
    /// Returns *false* if every node has been discovered.
    pub fn try_restart_at_unvisited(&mut self) -> bool {
        debug_assert!(self.queue.is_empty());
        match self.discovered.iter_cleared_bits().next() {
            None => false,
            Some(x) => {
                self.discovered.set_bit(x);
                self.queue.push_back(I::new_without_predecessor(x));
                true
            }
        }
    }

    /// The search ends right after yielding `stopper`
    pub fn set_stop_at(&mut self, stopper: Node) {
        self.stop_at = Some(stopper);
    }

    /// Builder-variant of [`BreadthFirstSearch::set_stop_at`]
    pub fn stop_at(mut self, stopper: Node) -> Self {
        self.set_stop_at(stopper);
        self
    }
}

/// Hop distances and first-discovery parents of a BFS from a single start node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BfsTree {
    start: Node,
    distances: Vec<NumNodes>,
    parents: Vec<Node>,
}

impl BfsTree {
    /// Runs a BFS from `start` over `graph`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidIndex`] if `start` is not a node of `graph`.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(n = graph.number_of_nodes(), start = start)
    )]
    pub fn new<G: AdjacencyList>(graph: &G, start: Node) -> Result<Self> {
        let bfs = BFSWithPredecessor::try_new(graph, start)?;

        let mut distances = vec![INVALID_NODE; graph.len()];
        let mut parents = vec![INVALID_NODE; graph.len()];
        distances[start as usize] = 0;
        parents[start as usize] = start;

        let mut reached: NumNodes = 0;
        for item in bfs {
            reached += 1;
            if let Some(p) = item.predecessor() {
                parents[item.item() as usize] = p;
                distances[item.item() as usize] = distances[p as usize] + 1;
            }
        }

        tracing::debug!(reached, "bfs finished");

        Ok(Self {
            start,
            distances,
            parents,
        })
    }

    /// The start node of the search
    pub fn start(&self) -> Node {
        self.start
    }

    /// Returns the minimum number of edges on any path from the start to `v`,
    /// or `None` if `v` is unreachable.
    ///
    /// # Errors
    /// Returns [`Error::InvalidIndex`] if `v` is out of range.
    pub fn distance_to(&self, v: Node) -> Result<Option<NumNodes>> {
        validate_node_bound(v, self.distances.len() as NumNodes)?;
        let d = self.distances[v as usize];
        Ok((d != INVALID_NODE).then_some(d))
    }

    /// Returns the hop distance of every node, `None` for unreachable ones
    pub fn distances(&self) -> Vec<Option<NumNodes>> {
        self.distances
            .iter()
            .map(|&d| (d != INVALID_NODE).then_some(d))
            .collect()
    }

    /// Returns the BFS parent of `v`; the start is its own parent, unreachable nodes have none
    ///
    /// # Errors
    /// Returns [`Error::InvalidIndex`] if `v` is out of range.
    pub fn parent_of(&self, v: Node) -> Result<Option<Node>> {
        validate_node_bound(v, self.parents.len() as NumNodes)?;
        let p = self.parents[v as usize];
        Ok((p != INVALID_NODE).then_some(p))
    }

    /// Returns a shortest path (fewest edges) from the start to `end`, both included.
    ///
    /// # Errors
    /// Returns [`Error::InvalidIndex`] if `end` is out of range and [`Error::NoPathExists`] if
    /// `end` is unreachable.
    pub fn path_to(&self, end: Node) -> Result<Vec<Node>> {
        validate_node_bound(end, self.parents.len() as NumNodes)?;
        walk_parents(&self.parents, self.start, end)
    }
}

/// Reconstructs `start -> end` by following `parents` from `end`; `INVALID_NODE` marks unreached
/// nodes. A walk that does not arrive at `start` within `n` steps can only be caused by a
/// negative cycle and yields [`Error::NegativeCycle`]. A walk that runs into an unreached node
/// after leaving `end` yields [`Error::NoPathExists`].
pub(crate) fn walk_parents(parents: &[Node], start: Node, end: Node) -> Result<Vec<Node>> {
    if parents[end as usize] == INVALID_NODE {
        tracing::debug!(start, end, "target unreached");
        return Err(Error::NoPathExists { start, end });
    }

    let mut path = vec![end];
    let mut current = end;
    while current != start {
        current = parents[current as usize];
        if current == INVALID_NODE {
            tracing::debug!(start, end, "parent chain is broken");
            return Err(Error::NoPathExists { start, end });
        }
        path.push(current);
        if path.len() > parents.len() {
            tracing::debug!(start, end, "parent walk does not terminate");
            return Err(Error::NegativeCycle { node: end });
        }
    }

    path.reverse();
    Ok(path)
}

/// Provides convenient traversal methods (BFS, DFS finish order, BFS shortest paths)
pub trait Traversal: AdjacencyList {
    /// Iterates over all nodes reachable from `start` in BFS order.
    /// ** Panics if `start >= n` **
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g: AdjArray = AdjArray::try_from_edges(3, [(0, 2), (0, 1), (1, 2)]).unwrap();
    ///
    /// let order: Vec<_> = g.bfs(0).collect();
    /// assert_eq!(order, vec![0, 2, 1]);
    /// ```
    fn bfs(&self, start: Node) -> BFS<'_, Self> {
        BFS::new(self, start)
    }

    /// Like [`Traversal::bfs`], but every item also carries the node that discovered it.
    /// ** Panics if `start >= n` **
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g: AdjArray = AdjArray::try_from_edges(2, [(0, 1)]).unwrap();
    ///
    /// let mut it = g.bfs_with_predecessor(0);
    /// assert_eq!(it.next().unwrap().item(), 0);
    /// assert_eq!(it.next().unwrap().predecessor(), Some(0));
    /// ```
    fn bfs_with_predecessor(&self, start: Node) -> BFSWithPredecessor<'_, Self> {
        BFSWithPredecessor::new(self, start)
    }

    /// Computes hop distances and BFS parents from `start`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidIndex`] if `start` is out of range.
    fn bfs_tree(&self, start: Node) -> Result<BfsTree> {
        BfsTree::new(self, start)
    }

    /// Computes a path with the fewest edges from `start` to `end` (both included).
    ///
    /// # Errors
    /// Returns [`Error::InvalidIndex`] if a node is out of range and [`Error::NoPathExists`] if
    /// `end` is unreachable from `start`.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g: AdjArray = AdjArray::try_from_edges(3, [(0, 1), (1, 2)]).unwrap();
    ///
    /// assert_eq!(g.bfs_shortest_path(0, 2), Ok(vec![0, 1, 2]));
    /// assert_eq!(g.bfs_shortest_path(2, 0), Err(Error::NoPathExists { start: 2, end: 0 }));
    /// ```
    fn bfs_shortest_path(&self, start: Node, end: Node) -> Result<Vec<Node>> {
        self.validate_node(end)?;
        self.bfs_tree(start)?.path_to(end)
    }

    /// Returns all nodes in the order a full-graph DFS finishes them.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g: AdjArray = AdjArray::try_from_edges(4, [(0, 1), (1, 2), (3, 1)]).unwrap();
    /// assert_eq!(g.dfs_finish_order(), vec![2, 1, 0, 3]);
    /// ```
    fn dfs_finish_order(&self) -> Vec<Node>
    where
        Self: IndexedAdjacencyList,
    {
        let mut visitor = FinishOrder::default();
        let _ = DepthFirstSearch::for_graph(self).run_all(self, &mut visitor);
        visitor.order
    }
}

impl<G> Traversal for G where G: AdjacencyList {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures;
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    /// Records every event of a DFS run
    #[derive(Default)]
    struct Recorder {
        events: Vec<(char, Node, Node)>,
    }

    impl DfsVisitor for Recorder {
        type Break = ();

        fn discover(&mut self, u: Node, parent: Option<Node>) -> ControlFlow<()> {
            self.events.push(('d', u, parent.unwrap_or(INVALID_NODE)));
            ControlFlow::Continue(())
        }

        fn edge(&mut self, u: Node, v: Node, kind: EdgeKind, _: Option<Node>) -> ControlFlow<()> {
            let c = match kind {
                EdgeKind::Tree => 't',
                EdgeKind::Back => 'b',
                EdgeKind::ForwardOrCross => 'c',
            };
            self.events.push((c, u, v));
            ControlFlow::Continue(())
        }

        fn finish(&mut self, u: Node) -> ControlFlow<()> {
            self.events.push(('f', u, u));
            ControlFlow::Continue(())
        }
    }

    #[test]
    fn bfs_order() {
        //  / 2 --- \
        // 1         4 - 3
        //  \ 0 - 5 /
        let graph: AdjArray =
            AdjArray::try_from_edges(6, [(1, 2), (1, 0), (4, 3), (0, 5), (2, 4), (5, 4)])
                .unwrap();

        assert_eq!(graph.bfs(1).collect_vec(), vec![1, 2, 0, 4, 5, 3]);
        assert_eq!(BFS::new(&graph, 5).collect_vec(), vec![5, 4, 3]);
    }

    #[test]
    fn bfs_with_predecessor() {
        let graph: AdjArray =
            AdjArray::try_from_edges(6, [(1, 2), (1, 0), (4, 3), (0, 5), (2, 4), (5, 4)])
                .unwrap();

        let edges = graph
            .bfs_with_predecessor(1)
            .map(|x| x.predecessor_with_item())
            .collect_vec();
        assert_eq!(
            edges,
            vec![
                (None, 1),
                (Some(1), 2),
                (Some(1), 0),
                (Some(2), 4),
                (Some(0), 5),
                (Some(4), 3)
            ]
        );
    }

    #[test]
    fn test_stopper() {
        let graph: AdjArray = AdjArray::try_from_edges(4, [(0, 1), (1, 2), (2, 3)]).unwrap();
        assert_eq!(graph.bfs(0).collect_vec(), vec![0, 1, 2, 3]);

        assert_eq!(graph.bfs(0).stop_at(1).collect_vec(), vec![0, 1]);
    }

    #[test]
    fn bfs_restart() {
        let graph: AdjArray = AdjArray::try_from_edges(5, [(0, 1), (2, 3)]).unwrap();
        let mut bfs = graph.bfs(0);

        let mut components = Vec::new();
        loop {
            components.push(bfs.by_ref().collect_vec());
            if !bfs.try_restart_at_unvisited() {
                break;
            }
        }
        assert_eq!(components, vec![vec![0, 1], vec![2, 3], vec![4]]);
        assert!((0..5).all(|u| bfs.did_discover_node(u)));
    }

    #[test]
    fn bfs_discovered_nodes() {
        let graph: AdjArray = AdjArray::try_from_edges(4, [(0, 1), (1, 2)]).unwrap();
        let mut bfs = graph.bfs(3);

        assert!(bfs.did_discover_node(3));
        assert!(!bfs.did_discover_node(0));
        assert_eq!(bfs.size_hint(), (1, Some(4)));

        assert_eq!(bfs.by_ref().collect_vec(), vec![3]);
        assert!(bfs.try_restart_at_unvisited());
        assert_eq!(bfs.by_ref().collect_vec(), vec![0, 1, 2]);
        assert!(!bfs.try_restart_at_unvisited());
    }

    #[test]
    fn broken_parent_chains() {
        // 3 claims parent 1, but 1 was never reached
        let parents = vec![0, INVALID_NODE, INVALID_NODE, 1];
        assert_eq!(
            walk_parents(&parents, 0, 3),
            Err(Error::NoPathExists { start: 0, end: 3 })
        );
        assert_eq!(
            walk_parents(&parents, 0, 2),
            Err(Error::NoPathExists { start: 0, end: 2 })
        );

        let cyclic = vec![0, 2, 1];
        assert_eq!(
            walk_parents(&cyclic, 0, 1),
            Err(Error::NegativeCycle { node: 1 })
        );
        assert_eq!(walk_parents(&[0, 0, 1], 0, 2), Ok(vec![0, 1, 2]));
    }

    #[test]
    fn bfs_tree() {
        let graph = fixtures::bfs_instance();
        let tree = graph.bfs_tree(0).unwrap();

        assert_eq!(
            tree.distances(),
            vec![Some(0), Some(1), Some(1), Some(2), Some(2), Some(3)]
        );
        assert_eq!(tree.parent_of(4), Ok(Some(2)));
        assert_eq!(tree.parent_of(0), Ok(Some(0)));
        assert_eq!(tree.path_to(4), Ok(vec![0, 2, 4]));
        assert_eq!(tree.path_to(5), Ok(vec![0, 2, 4, 5]));
        assert_eq!(tree.path_to(0), Ok(vec![0]));
        assert!(matches!(
            tree.distance_to(6),
            Err(Error::InvalidIndex { node: 6, .. })
        ));
    }

    #[test]
    fn bfs_no_path() {
        let graph = fixtures::bfs_instance();

        assert_eq!(
            graph.bfs_shortest_path(5, 0),
            Err(Error::NoPathExists { start: 5, end: 0 })
        );

        let tree = graph.bfs_tree(5).unwrap();
        assert_eq!(tree.distance_to(0), Ok(None));
        assert_eq!(tree.parent_of(0), Ok(None));

        assert!(matches!(
            graph.bfs_shortest_path(9, 0),
            Err(Error::InvalidIndex { node: 9, .. })
        ));
        assert!(matches!(
            graph.bfs_shortest_path(0, 9),
            Err(Error::InvalidIndex { node: 9, .. })
        ));
    }

    #[test]
    fn bfs_distances_are_minimal() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);

        for _ in 0..20 {
            let graph = fixtures::random_weighted_graph(rng, 30, 0.08, 1..2);
            let tree = graph.bfs_tree(0).unwrap();

            // Bellman-style fixpoint on hop counts as reference
            let mut reference = vec![None; graph.len()];
            reference[0] = Some(0);
            for _ in 0..graph.len() {
                for Edge(u, v) in graph.edges() {
                    if let Some(du) = reference[u as usize] {
                        if reference[v as usize].is_none_or(|dv| du + 1 < dv) {
                            reference[v as usize] = Some(du + 1);
                        }
                    }
                }
            }

            assert_eq!(tree.distances(), reference);

            for v in graph.vertices() {
                if let Ok(path) = tree.path_to(v) {
                    assert_eq!(path.len() as NumNodes, tree.distance_to(v).unwrap().unwrap() + 1);
                    for (a, b) in path.iter().tuple_windows() {
                        assert!(graph.has_edge(*a, *b));
                    }
                }
            }
        }
    }

    #[test]
    fn dfs_events() {
        let graph: AdjArray =
            AdjArray::try_from_edges(4, [(0, 1), (1, 2), (2, 0), (0, 2), (3, 2)]).unwrap();

        let mut dfs = DepthFirstSearch::for_graph(&graph);
        let mut rec = Recorder::default();
        assert!(dfs.run_all(&graph, &mut rec).is_continue());

        assert_eq!(
            rec.events,
            vec![
                ('d', 0, INVALID_NODE),
                ('t', 0, 1),
                ('d', 1, 0),
                ('t', 1, 2),
                ('d', 2, 1),
                ('b', 2, 0),
                ('f', 2, 2),
                ('f', 1, 1),
                ('c', 0, 2),
                ('f', 0, 0),
                ('d', 3, INVALID_NODE),
                ('c', 3, 2),
                ('f', 3, 3),
            ]
        );
        assert!(dfs.states().iter().all(|&s| s == NodeState::Finished));

        dfs.reset();
        assert!(dfs.states().iter().all(|&s| s == NodeState::Unvisited));
    }

    #[test]
    fn dfs_abort_and_roots() {
        struct StopAt(Node);
        impl DfsVisitor for StopAt {
            type Break = Node;
            fn discover(&mut self, u: Node, _: Option<Node>) -> ControlFlow<Node> {
                if u == self.0 {
                    ControlFlow::Break(u)
                } else {
                    ControlFlow::Continue(())
                }
            }
        }

        let graph: AdjArray = AdjArray::try_from_edges(4, [(0, 1), (1, 2), (2, 3)]).unwrap();
        let mut dfs = DepthFirstSearch::for_graph(&graph);

        assert_eq!(
            dfs.run_from(&graph, 0, &mut StopAt(2)),
            Ok(ControlFlow::Break(2))
        );
        assert_eq!(dfs.state_of(1), NodeState::InProgress);
        assert_eq!(dfs.state_of(3), NodeState::Unvisited);

        dfs.reset();
        let mut order = FinishOrder::default();
        assert!(dfs.run_from_each(&graph, [2, 0], &mut order).is_continue());
        assert_eq!(order.order, vec![3, 2, 1, 0]);

        assert!(matches!(
            dfs.run_from(&graph, 4, &mut order),
            Err(Error::InvalidIndex { node: 4, .. })
        ));
    }

    #[test]
    fn dfs_deep_path() {
        // a recursive DFS would overflow the stack here
        let n: Node = 100_000;
        let graph: AdjArray = AdjArray::try_from_edges(n, (0..n - 1).map(|u| (u, u + 1))).unwrap();
        let order = graph.dfs_finish_order();
        assert_eq!(order, (0..n).rev().collect_vec());
    }
}
