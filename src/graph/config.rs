use crate::graph::*;
use std::str::FromStr;

/// Which storage backs a [Graph].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Representation {
    #[default]
    AdjacencyList,
    AdjacencyMatrix,
}

impl Representation {
    pub const ALL: [Representation; 2] = [
        Representation::AdjacencyList,
        Representation::AdjacencyMatrix,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Representation::AdjacencyList => "adjacency_list",
            Representation::AdjacencyMatrix => "adjacency_matrix",
        }
    }

    /// A fresh, empty storage of this kind.
    pub fn create<V: Vertex>(&self, directed: bool) -> Box<dyn GraphRepresentation<V>> {
        match self {
            Representation::AdjacencyList => Box::new(AdjacencyList::new(directed)),
            Representation::AdjacencyMatrix => Box::new(AdjacencyMatrix::new(directed)),
        }
    }
}

impl std::fmt::Display for Representation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Representation {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .find(|r| r.name() == s)
            .copied()
            .ok_or_else(|| {
                GraphError::InvalidArgument(format!(
                    "invalid representation '{}', must be one of: {}",
                    s,
                    Self::ALL.map(|r| r.name()).join(", ")
                ))
            })
    }
}

/// How to build a [Graph].
///
/// Defaults to an undirected, weighted graph stored in an adjacency list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GraphConfig {
    pub directed: bool,
    /// Informational only: edges always carry a weight.
    pub weighted: bool,
    pub representation: Representation,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            directed: false,
            weighted: true,
            representation: Representation::AdjacencyList,
        }
    }
}

impl GraphConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    pub fn weighted(mut self, weighted: bool) -> Self {
        self.weighted = weighted;
        self
    }

    pub fn representation(mut self, representation: Representation) -> Self {
        self.representation = representation;
        self
    }

    /// Picks the storage by its name, `adjacency_list` or `adjacency_matrix`.
    pub fn with_representation_name(self, name: &str) -> Result<Self> {
        Ok(self.representation(name.parse()?))
    }
}
