use crate::graph::*;

/// Storage behind a [Graph].
///
/// Implementations own every vertex and edge.
/// They do no validation beyond returning `false` for requests that can not be honored;
/// error reporting is up to the facade.
///
/// For undirected storages, an edge between two distinct vertices is stored under both
/// orientations, and both halves hold the same canonical [Edge].
/// A self-loop is stored once.
pub trait GraphRepresentation<V: Vertex> {
    fn kind(&self) -> Representation;
    fn is_directed(&self) -> bool;

    /// Adds a vertex and returns whether it was absent.
    fn add_vertex(&mut self, vertex: V) -> bool;
    /// Removes a vertex with every edge incident to it, in either direction.
    /// Returns whether the vertex was present.
    fn remove_vertex(&mut self, vertex: &V) -> bool;
    /// Adds an edge and returns `true`,
    /// or returns `false` without touching anything if either endpoint is absent
    /// or the edge already exists.
    fn add_edge(&mut self, source: &V, target: &V, weight: f64, metadata: Metadata) -> bool;
    /// Removes an edge, both halves for undirected storages, and returns whether it was present.
    fn remove_edge(&mut self, source: &V, target: &V) -> bool;

    fn has_vertex(&self, vertex: &V) -> bool;
    fn has_edge(&self, source: &V, target: &V) -> bool;
    fn vertex_count(&self) -> usize;
    /// Iterates over vertices without any specific order.
    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_>;
    /// Iterates over stored edges without any specific order.
    ///
    /// An undirected edge between distinct vertices shows up once per orientation.
    fn edges(&self) -> Box<dyn Iterator<Item = &Edge<V>> + '_>;
    /// Iterates over targets of out-going edges.
    /// An unknown vertex has no neighbors.
    fn neighbors(&self, vertex: &V) -> Box<dyn Iterator<Item = &V> + '_>;
    fn edge_data(&self, source: &V, target: &V) -> Option<&Edge<V>>;
}

/// Read-only access shared by graphs and trees.
pub trait GraphLike<V: Vertex> {
    fn vertices(&self) -> VertexSet<V>;
    /// Edges as `(source, target)` pairs.
    fn edge_pairs(&self) -> HashSet<(V, V), RandomState>;
    fn neighbors(&self, vertex: &V) -> Result<VertexSet<V>>;
    fn has_edge(&self, source: &V, target: &V) -> bool;
    /// The underlying graph.
    fn as_graph(&self) -> &Graph<V>;
}
