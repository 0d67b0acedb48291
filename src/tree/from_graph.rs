use super::Tree;
use crate::containers::{FifoQueue, TraversalContainer};
use crate::graph::*;

/// A graph refused by [Tree::from_graph], handed back untouched.
#[derive(Debug, thiserror::Error)]
#[error("{error}")]
pub struct Rejected<V: Vertex> {
    pub error: GraphError,
    pub graph: Graph<V>,
}

impl<V: Vertex> Rejected<V> {
    pub fn into_graph(self) -> Graph<V> {
        self.graph
    }
}

impl<V: Vertex> From<Rejected<V>> for GraphError {
    fn from(x: Rejected<V>) -> Self {
        x.error
    }
}

impl<V: Vertex> Tree<V> {
    /// Adopts a directed graph as a tree rooted at `root`.
    ///
    /// Checks, in this order, that
    /// 1. the graph is directed,
    /// 2. it has exactly one edge fewer than vertices,
    /// 3. `root` is in it,
    /// 4. a breadth-first walk from `root` meets every vertex exactly once.
    ///
    /// On failure the graph comes back inside [Rejected].
    /// `?` turns that into the plain [GraphError], dropping the graph.
    pub fn from_graph(graph: Graph<V>, root: V) -> std::result::Result<Self, Rejected<V>> {
        match parent_index(&graph, &root) {
            Ok(parents) => {
                tracing::debug!(?root, vertices = graph.num_vertices(), "adopted graph as tree");
                Ok(Self {
                    root,
                    graph,
                    parents,
                })
            }
            Err(error) => Err(Rejected { error, graph }),
        }
    }

    /// Runs the checks of [from_graph](Tree::from_graph) without adopting anything.
    pub fn validate(graph: &Graph<V>, root: &V) -> Result<()> {
        parent_index(graph, root).map(|_| ())
    }
}

/// Maps every non-root vertex to its predecessor in a breadth-first walk from `root`.
fn parent_index<V: Vertex>(graph: &Graph<V>, root: &V) -> Result<HashMap<V, V, RandomState>> {
    if !graph.is_directed() {
        return Err(GraphError::InvalidArgument(
            "graph must be directed to convert to tree".to_string(),
        ));
    }
    let vertices = graph.num_vertices();
    let edges = graph.num_edges();
    if edges + 1 != vertices {
        return Err(GraphError::InvalidGraph(format!(
            "graph does not have tree property: \
             {} vertices need {} edges to be connected and free of cycles, found {}",
            vertices,
            vertices.saturating_sub(1),
            edges
        )));
    }
    if !graph.has_vertex(root) {
        return Err(GraphError::VertexNotFound(format!(
            "root vertex {:?} does not exist in graph",
            root
        )));
    }

    let mut parents = HashMap::with_hasher(RandomState::new());
    let mut visited: VertexSet<&V> = VertexSet::default();
    visited.insert(root);
    let mut queue = FifoQueue::new();
    queue.push(root);
    while let Ok(v) = queue.pop() {
        for child in graph.iter_neighbors(v) {
            if !visited.insert(child) {
                return Err(GraphError::Cycle(format!(
                    "vertex {:?} is reached twice, graph contains a cycle",
                    child
                )));
            }
            parents.insert(child.clone(), v.clone());
            queue.push(child);
        }
    }
    if visited.len() != vertices {
        return Err(GraphError::DisconnectedGraph(format!(
            "graph is not connected: {} vertices are not reachable from root {:?}",
            vertices - visited.len(),
            root
        )));
    }
    Ok(parents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::representation::tests::Ops;
    use crate::test_util::*;
    use petgraph::graphmap::DiGraphMap;
    use petgraph::visit::Bfs;
    use quickcheck_macros::*;

    fn directed(edges: &[(&'static str, &'static str)]) -> Graph<&'static str> {
        let mut g = Graph::directed();
        for (s, t) in edges {
            g.add_vertex(*s);
            g.add_vertex(*t);
            g.add_edge(*s, *t, 1.0).unwrap();
        }
        g
    }

    fn error_of<V: Vertex>(
        res: std::result::Result<Tree<V>, Rejected<V>>,
    ) -> Option<GraphError> {
        res.err().map(GraphError::from)
    }

    #[test]
    fn adopting_a_tree() {
        init_tracing();
        let g = directed(&[("A", "B"), ("A", "C"), ("C", "D")]);
        assert_eq!(Tree::validate(&g, &"A"), Ok(()));
        let t = Tree::from_graph(g, "A").unwrap();
        assert_eq!(t.root(), &"A");
        assert_eq!(t.parent(&"D"), Ok(Some(&"C")));
        assert_eq!(t.parent(&"A"), Ok(None));
        assert_eq!(t.depth(&"D"), Ok(2));
        assert_eq!(t.height(), 2);
        assert_eq!(t.children(&"A"), Ok(set_of(["B", "C"])));
    }

    #[test]
    fn lonely_vertex_is_a_tree() {
        let mut g = Graph::directed();
        g.add_vertex(7);
        let t = Tree::from_graph(g, 7).unwrap();
        assert_eq!(t.height(), 0);
        assert_eq!(t.num_vertices(), 1);
    }

    #[test]
    fn undirected_graphs_are_rejected() {
        let mut g = Graph::undirected();
        g.add_vertex("A");
        let err = error_of(Tree::from_graph(g, "A")).unwrap();
        assert!(matches!(err, GraphError::InvalidArgument(_)));
        assert!(err.message().contains("must be directed"));
    }

    #[test]
    fn a_cycle_breaks_the_edge_count() {
        let g = directed(&[("A", "B"), ("B", "C"), ("C", "A")]);
        let err = error_of(Tree::from_graph(g, "A")).unwrap();
        assert!(matches!(err, GraphError::InvalidGraph(_)));
        assert!(err.message().contains("does not have tree property"));
        assert!(err.message().contains("cycle"));
    }

    #[test]
    fn empty_graph_is_no_tree() {
        let g: Graph<u8> = Graph::directed();
        assert!(matches!(
            error_of(Tree::from_graph(g, 0)),
            Some(GraphError::InvalidGraph(_))
        ));
    }

    #[test]
    fn absent_root() {
        let g = directed(&[("A", "B")]);
        assert!(matches!(
            Tree::validate(&g, &"Z"),
            Err(GraphError::VertexNotFound(_))
        ));
        assert!(matches!(
            error_of(Tree::from_graph(g, "Z")),
            Some(GraphError::VertexNotFound(_))
        ));
    }

    #[test]
    fn wrong_root_leaves_vertices_behind() {
        let g = directed(&[("A", "B"), ("A", "C")]);
        let err = error_of(Tree::from_graph(g, "B")).unwrap();
        assert!(matches!(err, GraphError::DisconnectedGraph(_)));
        assert!(err.message().contains("not connected"));
    }

    #[test]
    fn right_edge_count_but_a_cycle_aside() {
        // A -> B, and C <-> D off to the side
        let g = directed(&[("A", "B"), ("C", "D"), ("D", "C")]);
        assert!(matches!(
            error_of(Tree::from_graph(g, "A")),
            Some(GraphError::DisconnectedGraph(_))
        ));
    }

    #[test]
    fn right_edge_count_but_two_parents() {
        // D has parents B and C, E is unreachable
        let mut g = directed(&[("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")]);
        g.add_vertex("E");
        assert!(matches!(
            error_of(Tree::from_graph(g, "A")),
            Some(GraphError::Cycle(_))
        ));
    }

    #[test]
    fn rejected_graphs_come_back_intact() {
        let mut undirected = Graph::undirected();
        undirected.add_vertex("A");
        let mut two_parents = directed(&[("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")]);
        two_parents.add_vertex("E");
        let cases = [
            (undirected, "A"),
            (directed(&[("A", "B"), ("B", "A")]), "A"),
            (directed(&[("A", "B")]), "Z"),
            (two_parents, "A"),
            (directed(&[("A", "B"), ("A", "C")]), "B"),
        ];
        for (g, root) in cases {
            let before = g.clone();
            let rejected = Tree::from_graph(g, root).unwrap_err();
            assert_eq!(Tree::validate(&rejected.graph, &root), Err(rejected.error.clone()));
            assert_eq!(rejected.to_string(), rejected.error.to_string());
            assert_eq!(rejected.into_graph(), before);
        }
    }

    #[test]
    fn a_rejected_graph_can_be_fixed_and_adopted() {
        let mut g = Graph::directed();
        for v in 0..3 {
            g.add_vertex(v);
        }
        g.add_edge(0, 1, 1.0).unwrap();
        g.add_edge(2, 1, 1.0).unwrap();

        let rejected = Tree::from_graph(g, 0).unwrap_err();
        assert!(matches!(rejected.error, GraphError::DisconnectedGraph(_)));
        let mut g = rejected.into_graph();
        g.remove_edge(&2, &1).unwrap();
        g.add_edge(0, 2, 1.0).unwrap();
        let t = Tree::from_graph(g, 0).unwrap();
        assert_eq!(t.children(&0), Ok(set_of([1, 2])));
    }

    #[test]
    fn question_mark_keeps_the_error_kind() {
        fn adopt(g: Graph<u8>) -> Result<Tree<u8>> {
            Ok(Tree::from_graph(g, 0)?)
        }
        assert!(matches!(
            adopt(Graph::undirected()),
            Err(GraphError::InvalidArgument(_))
        ));
    }

    #[test]
    fn round_trip() {
        let mut t = Tree::new(0u32);
        t.add_child(&0, 1).unwrap();
        t.add_child(&0, 2).unwrap();
        t.add_child(&2, 3).unwrap();
        let back = Tree::from_graph(t.to_graph().clone(), 0).unwrap();
        assert_eq!(back, t);
        let graph = t.into_graph();
        assert_eq!(back.into_graph(), graph);
    }

    #[quickcheck]
    fn adopts_exactly_the_trees(ops: Ops) {
        let mut g = Graph::directed();
        ops.apply_to_graph(&mut g);

        let mut oracle = DiGraphMap::<u8, ()>::new();
        for v in g.iter_vertices() {
            oracle.add_node(*v);
        }
        for e in g.edges() {
            oracle.add_edge(*e.source(), *e.target(), ());
        }
        let root = g.iter_vertices().min().copied().unwrap_or(0);
        let mut reached = 0;
        if oracle.contains_node(root) {
            let mut bfs = Bfs::new(&oracle, root);
            while bfs.next(&oracle).is_some() {
                reached += 1;
            }
        }
        let is_tree = oracle.edge_count() + 1 == oracle.node_count()
            && reached == oracle.node_count()
            && !petgraph::algo::is_cyclic_directed(&oracle);

        let before = g.clone();
        match Tree::from_graph(g, root) {
            Ok(t) => {
                assert!(is_tree, "{:?}", ops);
                assert_eq!(t.num_vertices(), t.parents.len() + 1);
                for (child, parent) in t.parents.iter() {
                    assert!(oracle.contains_edge(*parent, *child));
                }
            }
            Err(rejected) => {
                assert!(!is_tree, "{:?}: {}", ops, rejected);
                assert_eq!(rejected.graph, before);
            }
        }
    }
}
