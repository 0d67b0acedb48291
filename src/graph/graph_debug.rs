use crate::graph::*;

/// Multi-line dump of a [Graph], one block per vertex.
///
/// A vertex line is followed by one line per out-going edge, `--weight-> target`,
/// with the edge metadata appended when there is any.
/// Undirected edges show up under both endpoints.
pub struct GraphDebug<'a, V: Vertex> {
    graph: &'a Graph<V>,
    margin: usize,
    step: usize,
}

impl<'a, V: Vertex> GraphDebug<'a, V> {
    pub fn new(graph: &'a Graph<V>) -> Self {
        Self {
            graph,
            margin: 0,
            step: 2,
        }
    }

    /// `margin` spaces before vertices, `margin + step` before edges.
    pub fn indent(self, margin: usize, step: usize) -> Self {
        Self {
            margin,
            step,
            ..self
        }
    }
}

impl<V: Vertex> std::fmt::Debug for GraphDebug<'_, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let edge_margin = self.margin + self.step;
        for v in self.graph.iter_vertices() {
            writeln!(f, "{:w$}{:?}", "", v, w = self.margin)?;
            let out_edges = self
                .graph
                .iter_neighbors(v)
                .filter_map(|t| self.graph.get_edge(v, t).ok().map(|e| (t, e)));
            for (t, e) in out_edges {
                write!(f, "{:w$}--{}-> {:?}", "", e.weight(), t, w = edge_margin)?;
                if !e.metadata().is_empty() {
                    write!(f, " {:?}", e.metadata())?;
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
