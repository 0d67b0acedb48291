//! A rooted tree stored as a directed graph.

mod from_graph;
pub use self::from_graph::Rejected;

use crate::containers::{FifoQueue, TraversalContainer};
use crate::graph::*;

/// A directed graph with a single root, where every other vertex has exactly one parent.
///
/// Edges point from parents to children.
/// The tree owns its graph.
/// [to_graph](Tree::to_graph) lends it out read-only,
/// so the graph can not be changed behind the tree's back.
///
/// A parent index answers [parent](Tree::parent) in $O(1)$.
///
/// ```
/// use graphkit::tree::Tree;
///
/// let mut t = Tree::new("A");
/// t.add_child(&"A", "B").unwrap();
/// t.add_child(&"B", "C").unwrap();
/// assert_eq!(t.height(), 2);
/// assert_eq!(t.depth(&"C"), Ok(2));
/// assert!(t.add_child(&"C", "A").is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Tree<V: Vertex> {
    root: V,
    graph: Graph<V>,
    parents: HashMap<V, V, RandomState>,
}

impl<V: Vertex> Tree<V> {
    /// A tree of a lonely root.
    pub fn new(root: V) -> Self {
        let mut graph = Graph::with_config(GraphConfig::new().directed(true).weighted(false));
        graph.add_vertex(root.clone());
        Self {
            root,
            graph,
            parents: HashMap::with_hasher(RandomState::new()),
        }
    }

    pub fn root(&self) -> &V {
        &self.root
    }

    /// Hangs a new vertex `child` under `parent`.
    ///
    /// Fails with
    /// * [VertexNotFound](GraphError::VertexNotFound) if `parent` is absent,
    /// * [InvalidArgument](GraphError::InvalidArgument) if `child` is already a child of `parent`,
    /// * [Cycle](GraphError::Cycle) if `child` is anywhere else in the tree,
    ///   because a second parent would close a cycle.
    pub fn add_child(&mut self, parent: &V, child: V) -> Result<()> {
        if !self.graph.has_vertex(parent) {
            return Err(GraphError::VertexNotFound(format!(
                "parent vertex {:?} does not exist in tree",
                parent
            )));
        }
        if self.graph.has_vertex(&child) {
            if self.graph.has_edge(parent, &child) {
                return Err(GraphError::InvalidArgument(format!(
                    "child vertex {:?} already exists in tree",
                    child
                )));
            }
            return Err(GraphError::Cycle(format!(
                "adding edge ({:?}, {:?}) would create a cycle in tree",
                parent, child
            )));
        }
        self.graph.add_vertex(child.clone());
        self.graph.add_edge(parent.clone(), child.clone(), 1.0)?;
        self.parents.insert(child, parent.clone());
        Ok(())
    }

    /// Removes `node` together with all its descendants.
    ///
    /// Removing the root empties the tree.
    pub fn remove_subtree(&mut self, node: &V) -> Result<()> {
        self.expect_vertex(node)?;
        let doomed = self.subtree(node);
        for v in doomed.iter() {
            self.parents.remove(v);
            self.graph.remove_vertex(v)?;
        }
        tracing::debug!(?node, removed = doomed.len(), "removed subtree");
        Ok(())
    }

    /// `None` for the root.
    pub fn parent(&self, vertex: &V) -> Result<Option<&V>> {
        self.expect_vertex(vertex)?;
        Ok(self.parents.get(vertex))
    }

    pub fn children(&self, vertex: &V) -> Result<VertexSet<V>> {
        self.expect_vertex(vertex)?;
        self.graph.neighbors(vertex)
    }

    pub fn is_leaf(&self, vertex: &V) -> Result<bool> {
        self.expect_vertex(vertex)?;
        Ok(self.graph.iter_neighbors(vertex).next().is_none())
    }

    pub fn is_root(&self, vertex: &V) -> Result<bool> {
        self.expect_vertex(vertex)?;
        Ok(*vertex == self.root)
    }

    /// The longest distance from the root to a leaf.
    ///
    /// A lonely root, as well as an emptied tree, has height 0.
    pub fn height(&self) -> usize {
        let mut queue = FifoQueue::new();
        if self.graph.has_vertex(&self.root) {
            queue.push((&self.root, 0));
        }
        let mut max_depth = 0;
        while let Ok((v, depth)) = queue.pop() {
            max_depth = max_depth.max(depth);
            queue.extend_from(self.graph.iter_neighbors(v).map(|c| (c, depth + 1)));
        }
        max_depth
    }

    /// The distance from the root, found by climbing the parent index.
    pub fn depth(&self, vertex: &V) -> Result<usize> {
        self.expect_vertex(vertex)?;
        let mut current = vertex;
        let mut depth = 0;
        while *current != self.root {
            match self.parents.get(current) {
                Some(p) if depth < self.parents.len() => {
                    current = p;
                    depth += 1;
                }
                _ => {
                    return Err(GraphError::InvalidGraph(format!(
                        "vertex {:?} is not connected to root",
                        vertex
                    )));
                }
            }
        }
        Ok(depth)
    }

    /// The underlying directed graph, without copying.
    pub fn to_graph(&self) -> &Graph<V> {
        &self.graph
    }

    pub fn into_graph(self) -> Graph<V> {
        self.graph
    }

    pub fn has_vertex(&self, vertex: &V) -> bool {
        self.graph.has_vertex(vertex)
    }

    pub fn vertices(&self) -> VertexSet<V> {
        self.graph.vertices()
    }

    /// Edges as `(parent, child)` pairs.
    pub fn edges(&self) -> HashSet<(V, V), RandomState> {
        self.graph.edge_pairs()
    }

    /// Same as [children](Tree::children).
    pub fn neighbors(&self, vertex: &V) -> Result<VertexSet<V>> {
        self.children(vertex)
    }

    pub fn has_edge(&self, source: &V, target: &V) -> bool {
        self.graph.has_edge(source, target)
    }

    pub fn num_vertices(&self) -> usize {
        self.graph.num_vertices()
    }

    pub fn num_edges(&self) -> usize {
        self.graph.num_edges()
    }

    /// `node` followed by its descendants, breadth first.
    fn subtree(&self, node: &V) -> Vec<V> {
        let mut queue = FifoQueue::new();
        queue.push(node);
        let mut res = vec![];
        while let Ok(v) = queue.pop() {
            queue.extend_from(self.graph.iter_neighbors(v));
            res.push(v.clone());
        }
        res
    }

    fn expect_vertex(&self, vertex: &V) -> Result<()> {
        if self.graph.has_vertex(vertex) {
            Ok(())
        } else {
            Err(GraphError::VertexNotFound(format!(
                "vertex {:?} does not exist in tree",
                vertex
            )))
        }
    }
}

impl<V: Vertex> GraphLike<V> for Tree<V> {
    fn vertices(&self) -> VertexSet<V> {
        Tree::vertices(self)
    }

    fn edge_pairs(&self) -> HashSet<(V, V), RandomState> {
        Tree::edges(self)
    }

    fn neighbors(&self, vertex: &V) -> Result<VertexSet<V>> {
        self.children(vertex)
    }

    fn has_edge(&self, source: &V, target: &V) -> bool {
        Tree::has_edge(self, source, target)
    }

    fn as_graph(&self) -> &Graph<V> {
        &self.graph
    }
}
