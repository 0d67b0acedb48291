use crate::graph::*;
use bimap::BiHashMap;

/// A storage of a dense square matrix of edges.
///
/// Vertices are mapped to contiguous indices of rows and columns.
/// Removing a vertex removes its row and its column,
/// and then shifts every greater index down by one.
///
/// Suits dense graphs.
///
/// | operation       | complexity                                  |
/// | --------------- | ------------------------------------------- |
/// | `add_vertex`    | $O(\|V\|)$, $O(\|V\|^2)$ when reallocating  |
/// | `remove_vertex` | $O(\|V\|^2)$                                |
/// | `add_edge`      | $O(1)$                                      |
/// | `remove_edge`   | $O(1)$                                      |
/// | `has_edge`      | $O(1)$                                      |
/// | `neighbors`     | $O(\|V\|)$                                  |
pub struct AdjacencyMatrix<V>
where
    V: Vertex,
{
    directed: bool,
    indices: BiHashMap<V, usize, RandomState, RandomState>,
    matrix: Vec<Vec<Option<Edge<V>>>>,
}

impl<V: Vertex> AdjacencyMatrix<V> {
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            indices: BiHashMap::with_hashers(RandomState::new(), RandomState::new()),
            matrix: vec![],
        }
    }

    /// Row and column of a vertex.
    pub fn index_of(&self, vertex: &V) -> Option<usize> {
        self.indices.get_by_left(vertex).copied()
    }

    fn cell(&self, source: &V, target: &V) -> Option<(usize, usize)> {
        match (self.index_of(source), self.index_of(target)) {
            (Some(s), Some(t)) => Some((s, t)),
            _ => None,
        }
    }

    fn shift_indices_after(&mut self, removed: usize) {
        let mut shifted: Vec<(V, usize)> = self
            .indices
            .iter()
            .filter(|(_, idx)| **idx > removed)
            .map(|(v, idx)| (v.clone(), *idx))
            .collect();
        // ascending, so that every target index has just been vacated
        shifted.sort_unstable_by_key(|(_, idx)| *idx);
        for (v, idx) in shifted {
            self.indices.insert(v, idx - 1);
        }
    }
}

impl<V: Vertex> GraphRepresentation<V> for AdjacencyMatrix<V> {
    fn kind(&self) -> Representation {
        Representation::AdjacencyMatrix
    }

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn add_vertex(&mut self, vertex: V) -> bool {
        if self.indices.contains_left(&vertex) {
            return false;
        }
        let idx = self.matrix.len();
        tracing::trace!(?vertex, idx, "adjacency matrix: add vertex");
        for row in self.matrix.iter_mut() {
            row.push(None);
        }
        self.matrix.push((0..=idx).map(|_| None).collect());
        self.indices.insert(vertex, idx);
        true
    }

    fn remove_vertex(&mut self, vertex: &V) -> bool {
        let Some((_, idx)) = self.indices.remove_by_left(vertex) else {
            return false;
        };
        tracing::trace!(?vertex, idx, "adjacency matrix: remove vertex");
        self.matrix.remove(idx);
        for row in self.matrix.iter_mut() {
            row.remove(idx);
        }
        self.shift_indices_after(idx);
        true
    }

    fn add_edge(&mut self, source: &V, target: &V, weight: f64, metadata: Metadata) -> bool {
        let Some((s, t)) = self.cell(source, target) else {
            return false;
        };
        if self.matrix[s][t].is_some() {
            return false;
        }
        tracing::trace!(?source, ?target, weight, "adjacency matrix: add edge");
        let edge = Edge::new(
            source.clone(),
            target.clone(),
            weight,
            metadata,
            self.directed,
        );
        if !self.directed && s != t {
            self.matrix[t][s] = Some(edge.clone());
        }
        self.matrix[s][t] = Some(edge);
        true
    }

    fn remove_edge(&mut self, source: &V, target: &V) -> bool {
        let Some((s, t)) = self.cell(source, target) else {
            return false;
        };
        if self.matrix[s][t].take().is_none() {
            return false;
        }
        tracing::trace!(?source, ?target, "adjacency matrix: remove edge");
        if !self.directed {
            self.matrix[t][s] = None;
        }
        true
    }

    fn has_vertex(&self, vertex: &V) -> bool {
        self.indices.contains_left(vertex)
    }

    fn has_edge(&self, source: &V, target: &V) -> bool {
        self.edge_data(source, target).is_some()
    }

    fn vertex_count(&self) -> usize {
        self.indices.len()
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_> {
        Box::new(self.indices.left_values())
    }

    fn edges(&self) -> Box<dyn Iterator<Item = &Edge<V>> + '_> {
        Box::new(self.matrix.iter().flatten().flatten())
    }

    fn neighbors(&self, vertex: &V) -> Box<dyn Iterator<Item = &V> + '_> {
        let Some(row) = self.index_of(vertex).map(|s| &self.matrix[s]) else {
            return Box::new(std::iter::empty());
        };
        let it = row
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_some())
            .filter_map(move |(t, _)| self.indices.get_by_right(&t));
        Box::new(it)
    }

    fn edge_data(&self, source: &V, target: &V) -> Option<&Edge<V>> {
        self.cell(source, target)
            .and_then(|(s, t)| self.matrix[s][t].as_ref())
    }
}

impl<V: Vertex> std::fmt::Debug for AdjacencyMatrix<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "AdjacencyMatrix {{")?;
        for (s, row) in self.matrix.iter().enumerate() {
            let Some(v) = self.indices.get_by_right(&s) else {
                continue;
            };
            writeln!(f, "{}: {:?}", s, v)?;
            for (t, e) in row.iter().enumerate() {
                if let Some(e) = e {
                    writeln!(f, "  -> {} weighs {}", t, e.weight())?;
                }
            }
        }
        writeln!(f, "}}")?;
        Ok(())
    }
}
