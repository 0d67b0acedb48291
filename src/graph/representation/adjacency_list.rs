use crate::graph::*;

/// A storage of nested hash maps, from sources to targets to edges.
///
/// Suits sparse graphs.
///
/// | operation       | complexity                                                   |
/// | --------------- | ------------------------------------------------------------ |
/// | `add_vertex`    | $O(1)$                                                       |
/// | `remove_vertex` | $O(deg)$ if undirected, $O(\|V\|)$ if directed               |
/// | `add_edge`      | $O(1)$                                                       |
/// | `remove_edge`   | $O(1)$                                                       |
/// | `has_edge`      | $O(1)$                                                       |
/// | `neighbors`     | $O(1)$ to start, $O(1)$ on each call to `.next`              |
pub struct AdjacencyList<V> {
    directed: bool,
    adjacency: HashMap<V, HashMap<V, Edge<V>, RandomState>, RandomState>,
}

impl<V: Vertex> AdjacencyList<V> {
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            adjacency: HashMap::with_hasher(RandomState::new()),
        }
    }
}

impl<V: Vertex> GraphRepresentation<V> for AdjacencyList<V> {
    fn kind(&self) -> Representation {
        Representation::AdjacencyList
    }

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn add_vertex(&mut self, vertex: V) -> bool {
        if self.adjacency.contains_key(&vertex) {
            return false;
        }
        tracing::trace!(?vertex, "adjacency list: add vertex");
        self.adjacency
            .insert(vertex, HashMap::with_hasher(RandomState::new()));
        true
    }

    fn remove_vertex(&mut self, vertex: &V) -> bool {
        let Some(out_edges) = self.adjacency.remove(vertex) else {
            return false;
        };
        tracing::trace!(?vertex, degree = out_edges.len(), "adjacency list: remove vertex");
        if self.directed {
            for targets in self.adjacency.values_mut() {
                targets.remove(vertex);
            }
        } else {
            // mirrors live exactly under the neighbors
            for neighbor in out_edges.keys() {
                if let Some(targets) = self.adjacency.get_mut(neighbor) {
                    targets.remove(vertex);
                }
            }
        }
        true
    }

    fn add_edge(&mut self, source: &V, target: &V, weight: f64, metadata: Metadata) -> bool {
        if !self.adjacency.contains_key(source)
            || !self.adjacency.contains_key(target)
            || self.has_edge(source, target)
        {
            return false;
        }
        let edge = Edge::new(
            source.clone(),
            target.clone(),
            weight,
            metadata,
            self.directed,
        );
        if !self.directed && source != target {
            if let Some(targets) = self.adjacency.get_mut(target) {
                targets.insert(source.clone(), edge.clone());
            }
        }
        if let Some(targets) = self.adjacency.get_mut(source) {
            targets.insert(target.clone(), edge);
        }
        tracing::trace!(?source, ?target, weight, "adjacency list: add edge");
        true
    }

    fn remove_edge(&mut self, source: &V, target: &V) -> bool {
        let removed = self
            .adjacency
            .get_mut(source)
            .and_then(|targets| targets.remove(target))
            .is_some();
        if removed && !self.directed {
            if let Some(targets) = self.adjacency.get_mut(target) {
                targets.remove(source);
            }
        }
        if removed {
            tracing::trace!(?source, ?target, "adjacency list: remove edge");
        }
        removed
    }

    fn has_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    fn has_edge(&self, source: &V, target: &V) -> bool {
        self.edge_data(source, target).is_some()
    }

    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_> {
        Box::new(self.adjacency.keys())
    }

    fn edges(&self) -> Box<dyn Iterator<Item = &Edge<V>> + '_> {
        Box::new(self.adjacency.values().flat_map(|targets| targets.values()))
    }

    fn neighbors(&self, vertex: &V) -> Box<dyn Iterator<Item = &V> + '_> {
        match self.adjacency.get(vertex) {
            Some(targets) => Box::new(targets.keys()),
            None => Box::new(std::iter::empty()),
        }
    }

    fn edge_data(&self, source: &V, target: &V) -> Option<&Edge<V>> {
        self.adjacency
            .get(source)
            .and_then(|targets| targets.get(target))
    }
}

impl<V: Vertex> std::fmt::Debug for AdjacencyList<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "AdjacencyList {{")?;
        for (v, targets) in self.adjacency.iter() {
            writeln!(f, "{:?}:", v)?;
            for (t, e) in targets.iter() {
                writeln!(f, "  -> {:?} weighs {}", t, e.weight())?;
            }
        }
        writeln!(f, "}}")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::*;
    use crate::graph::*;
    use quickcheck_macros::*;

    #[test]
    fn undirected_mirrors_share_one_edge() {
        let mut g = AdjacencyList::new(false);
        assert!(g.add_vertex("A"));
        assert!(g.add_vertex("B"));
        assert!(!g.add_vertex("A"));
        let meta: Metadata = [("road", "A1")].into_iter().collect();
        assert!(g.add_edge(&"B", &"A", 2.5, meta));
        assert!(!g.add_edge(&"A", &"B", 9.0, Metadata::new()));

        let ab = g.edge_data(&"A", &"B").unwrap();
        let ba = g.edge_data(&"B", &"A").unwrap();
        assert_eq!(ab, ba);
        assert_eq!(ab.endpoints(), (&"A", &"B"));
        assert_eq!(ab.weight(), 2.5);
        assert!(ab.metadata().shares_with(ba.metadata()));
        assert_eq!(g.edges().count(), 2);

        assert!(g.remove_edge(&"A", &"B"));
        assert!(!g.has_edge(&"B", &"A"));
        assert!(!g.remove_edge(&"A", &"B"));
    }

    #[test]
    fn edges_need_both_endpoints() {
        let mut g = AdjacencyList::new(true);
        g.add_vertex(1);
        assert!(!g.add_edge(&1, &2, 1.0, Metadata::new()));
        assert!(!g.add_edge(&2, &1, 1.0, Metadata::new()));
        assert_eq!(g.edges().count(), 0);
    }

    #[test]
    fn self_loops_are_stored_once() {
        let mut g = AdjacencyList::new(false);
        g.add_vertex('x');
        assert!(g.add_edge(&'x', &'x', 1.0, Metadata::new()));
        assert_eq!(g.edges().count(), 1);
        assert_eq!(g.neighbors(&'x').collect::<Vec<_>>(), vec![&'x']);
        assert!(g.remove_vertex(&'x'));
        assert_eq!(g.vertex_count(), 0);
    }

    #[test]
    fn removing_a_vertex_cascades_both_ways() {
        let mut g = AdjacencyList::new(true);
        for v in 0..4 {
            g.add_vertex(v);
        }
        g.add_edge(&0, &1, 1.0, Metadata::new());
        g.add_edge(&2, &1, 1.0, Metadata::new());
        g.add_edge(&1, &3, 1.0, Metadata::new());
        g.add_edge(&3, &0, 1.0, Metadata::new());
        assert!(g.remove_vertex(&1));
        assert!(!g.remove_vertex(&1));
        let left: Vec<_> = g.edges().map(|e| (*e.source(), *e.target())).collect();
        assert_eq!(left, vec![(3, 0)]);
        assert_eq!(g.neighbors(&1).count(), 0);
    }

    #[test]
    fn debug_lists_targets_per_vertex() {
        let mut g = AdjacencyList::new(true);
        g.add_vertex("A");
        g.add_vertex("B");
        g.add_edge(&"A", &"B", 2.5, Metadata::new());
        let text = format!("{:?}", g);
        assert!(text.starts_with("AdjacencyList {\n"));
        assert!(text.ends_with("}\n"));
        assert!(text.contains("\"A\":\n  -> \"B\" weighs 2.5\n"));
        assert!(text.contains("\"B\":\n"));
    }

    #[quickcheck]
    fn directed_matches_petgraph(ops: Ops) {
        let mut trial = AdjacencyList::new(true);
        let oracle = ops.apply_directed(&mut trial);
        assert_same_as_oracle(&trial, &oracle);
    }

    #[quickcheck]
    fn undirected_matches_petgraph(ops: Ops) {
        let mut trial = AdjacencyList::new(false);
        let oracle = ops.apply_undirected(&mut trial);
        assert_same_as_oracle(&trial, &oracle);
    }
}
