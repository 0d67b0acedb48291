use crate::graph::*;

/// A directed or undirected graph over any [Vertex] type.
///
/// The graph validates requests and delegates storage to a [GraphRepresentation].
/// Every check is done before anything is touched,
/// so a failed call leaves the graph exactly as it was.
///
/// ```
/// use graphkit::graph::*;
///
/// let mut g = Graph::new();
/// g.add_vertex("A");
/// g.add_vertex("B");
/// g.add_edge("A", "B", 5.0).unwrap();
/// assert!(g.has_edge(&"B", &"A"));
/// assert_eq!(g.get_edge(&"A", &"B").unwrap().weight(), 5.0);
/// ```
pub struct Graph<V: Vertex> {
    config: GraphConfig,
    repr: Box<dyn GraphRepresentation<V>>,
}

impl<V: Vertex> Default for Graph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex> Graph<V> {
    /// An undirected, weighted graph stored in an adjacency list.
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    pub fn directed() -> Self {
        Self::with_config(GraphConfig::default().directed(true))
    }

    pub fn undirected() -> Self {
        Self::with_config(GraphConfig::default().directed(false))
    }

    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            config,
            repr: config.representation.create(config.directed),
        }
    }

    pub fn config(&self) -> GraphConfig {
        self.config
    }

    pub fn is_directed(&self) -> bool {
        self.config.directed
    }

    pub fn is_weighted(&self) -> bool {
        self.config.weighted
    }

    pub fn representation(&self) -> Representation {
        self.repr.kind()
    }

    /// Adds a vertex and returns whether it was absent.
    /// Adding a present vertex changes nothing.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        self.repr.add_vertex(vertex)
    }

    /// Removes a vertex and every edge incident to it.
    pub fn remove_vertex(&mut self, vertex: &V) -> Result<()> {
        self.expect_vertex(vertex, "removal")?;
        self.repr.remove_vertex(vertex);
        tracing::debug!(?vertex, "removed vertex");
        Ok(())
    }

    /// Adds an edge with no metadata.
    ///
    /// Both endpoints must be present.
    /// Adding a present edge changes nothing, whatever its weight.
    /// An undirected edge is traversable both ways.
    pub fn add_edge(&mut self, source: V, target: V, weight: f64) -> Result<()> {
        self.add_edge_with_metadata(source, target, weight, Metadata::new())
    }

    pub fn add_edge_with_metadata(
        &mut self,
        source: V,
        target: V,
        weight: f64,
        metadata: Metadata,
    ) -> Result<()> {
        self.expect_vertex(&source, "edge addition")?;
        self.expect_vertex(&target, "edge addition")?;
        if self.repr.add_edge(&source, &target, weight, metadata) {
            tracing::debug!(?source, ?target, weight, "added edge");
        }
        Ok(())
    }

    pub fn remove_edge(&mut self, source: &V, target: &V) -> Result<()> {
        self.expect_vertex(source, "edge removal")?;
        self.expect_vertex(target, "edge removal")?;
        if !self.repr.remove_edge(source, target) {
            return Err(GraphError::edge_not_found(source, target));
        }
        tracing::debug!(?source, ?target, "removed edge");
        Ok(())
    }

    pub fn has_vertex(&self, vertex: &V) -> bool {
        self.repr.has_vertex(vertex)
    }

    /// For undirected graphs, either orientation matches.
    pub fn has_edge(&self, source: &V, target: &V) -> bool {
        self.repr.has_edge(source, target)
    }

    /// The edge from `source` to `target`.
    /// Undirected edges come back in canonical form whichever orientation is asked.
    pub fn get_edge(&self, source: &V, target: &V) -> Result<&Edge<V>> {
        self.repr
            .edge_data(source, target)
            .ok_or_else(|| GraphError::edge_not_found(source, target))
    }

    pub fn vertices(&self) -> VertexSet<V> {
        self.repr.vertices().cloned().collect()
    }

    /// Iterates over vertices without any specific order.
    pub fn iter_vertices(&self) -> Box<dyn Iterator<Item = &V> + '_> {
        self.repr.vertices()
    }

    /// Every edge, once, including undirected ones.
    ///
    /// Returned edges share metadata with the stored ones.
    pub fn edges(&self) -> EdgeSet<V> {
        self.repr.edges().cloned().collect()
    }

    pub fn num_vertices(&self) -> usize {
        self.repr.vertex_count()
    }

    pub fn num_edges(&self) -> usize {
        if self.is_directed() {
            return self.repr.edges().count();
        }
        let (loops, others) = self
            .repr
            .edges()
            .fold((0, 0), |(loops, others), e| {
                if e.source() == e.target() {
                    (loops + 1, others)
                } else {
                    (loops, others + 1)
                }
            });
        loops + others / 2
    }

    /// Targets of out-going edges, or all adjacent vertices for undirected graphs.
    pub fn neighbors(&self, vertex: &V) -> Result<VertexSet<V>> {
        self.expect_vertex(vertex, "getting neighbors")?;
        Ok(self.repr.neighbors(vertex).cloned().collect())
    }

    /// Iterates over neighbors without any specific order.
    /// An unknown vertex has no neighbors.
    pub fn iter_neighbors(&self, vertex: &V) -> Box<dyn Iterator<Item = &V> + '_> {
        self.repr.neighbors(vertex)
    }

    /// Number of neighbors, i.e., the out-degree for directed graphs.
    pub fn degree(&self, vertex: &V) -> Result<usize> {
        self.expect_vertex(vertex, "getting degree")?;
        Ok(self.repr.neighbors(vertex).count())
    }

    /// Number of edges entering `vertex`. Directed graphs only.
    ///
    /// This scans every edge.
    pub fn in_degree(&self, vertex: &V) -> Result<usize> {
        self.expect_directed("in_degree")?;
        self.expect_vertex(vertex, "getting in-degree")?;
        Ok(self.repr.edges().filter(|e| e.target() == vertex).count())
    }

    /// Number of edges leaving `vertex`. Directed graphs only.
    ///
    /// This scans every edge.
    pub fn out_degree(&self, vertex: &V) -> Result<usize> {
        self.expect_directed("out_degree")?;
        self.expect_vertex(vertex, "getting out-degree")?;
        Ok(self.repr.edges().filter(|e| e.source() == vertex).count())
    }

    /// Moves every vertex and edge into a fresh storage of kind `target`.
    ///
    /// Weights and metadata handles move along,
    /// so converting there and back again restores the graph exactly.
    pub fn convert_representation(&mut self, target: Representation) {
        if self.repr.kind() == target {
            return;
        }
        let fresh = self.rebuild(target, false);
        tracing::debug!(
            from = %self.repr.kind(),
            to = %target,
            vertices = fresh.vertex_count(),
            "converted representation"
        );
        self.repr = fresh;
        self.config.representation = target;
    }

    pub fn debug(&self) -> GraphDebug<'_, V> {
        GraphDebug::new(self)
    }

    fn rebuild(&self, kind: Representation, detach: bool) -> Box<dyn GraphRepresentation<V>> {
        let mut fresh = kind.create(self.is_directed());
        for v in self.repr.vertices() {
            fresh.add_vertex(v.clone());
        }
        for e in self.repr.edges() {
            let metadata = if detach {
                e.metadata().detached()
            } else {
                e.metadata().clone()
            };
            // the mirror half of an undirected edge is refused as a duplicate
            fresh.add_edge(e.source(), e.target(), e.weight(), metadata);
        }
        fresh
    }

    fn expect_vertex(&self, vertex: &V, operation: &str) -> Result<()> {
        if self.repr.has_vertex(vertex) {
            Ok(())
        } else {
            Err(GraphError::vertex_not_found(vertex, operation))
        }
    }

    fn expect_directed(&self, operation: &str) -> Result<()> {
        if self.is_directed() {
            Ok(())
        } else {
            Err(GraphError::InvalidArgument(format!(
                "{}() only works on directed graphs, use degree() for undirected graphs",
                operation
            )))
        }
    }
}

/// A deep copy: metadata of the copy is detached from the original.
impl<V: Vertex> Clone for Graph<V> {
    fn clone(&self) -> Self {
        Self {
            config: self.config,
            repr: self.rebuild(self.repr.kind(), true),
        }
    }
}

/// Graphs are equal when they agree on directedness, vertices, edges and metadata.
/// Storages may differ.
impl<V: Vertex> PartialEq for Graph<V> {
    fn eq(&self, other: &Self) -> bool {
        if self.is_directed() != other.is_directed()
            || self.num_vertices() != other.num_vertices()
            || self.num_edges() != other.num_edges()
        {
            return false;
        }
        if self.repr.vertices().any(|v| !other.has_vertex(v)) {
            return false;
        }
        self.repr.edges().all(|e| {
            other
                .repr
                .edge_data(e.source(), e.target())
                .map_or(false, |o| o == e && o.metadata() == e.metadata())
        })
    }
}

impl<V: Vertex> std::fmt::Debug for Graph<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Graph({}, {}) {{",
            if self.is_directed() {
                "directed"
            } else {
                "undirected"
            },
            self.representation()
        )?;
        write!(f, "{:?}", self.debug().indent(2, 2))?;
        writeln!(f, "}}")
    }
}

impl<V: Vertex> GraphLike<V> for Graph<V> {
    fn vertices(&self) -> VertexSet<V> {
        Graph::vertices(self)
    }

    fn edge_pairs(&self) -> HashSet<(V, V), RandomState> {
        self.repr
            .edges()
            .map(|e| (e.source().clone(), e.target().clone()))
            .collect()
    }

    fn neighbors(&self, vertex: &V) -> Result<VertexSet<V>> {
        Graph::neighbors(self, vertex)
    }

    fn has_edge(&self, source: &V, target: &V) -> bool {
        Graph::has_edge(self, source, target)
    }

    fn as_graph(&self) -> &Graph<V> {
        self
    }
}
