//! Vertices, edges, storages and the [Graph] facade.
//!
//! # Storages
//!
//! | operation       | [AdjacencyList]   | [AdjacencyMatrix]        |
//! | --------------- | ----------------- | ------------------------ |
//! | `add_vertex`    | $O(1)$            | $O(\|V\|^2)$ in the worst case, due to matrix growth |
//! | `remove_vertex` | $O(\|V\|)$        | $O(\|V\|^2)$, due to row/column removal and reindexing |
//! | `add_edge`      | $O(1)$            | $O(1)$                   |
//! | `remove_edge`   | $O(1)$            | $O(1)$                   |
//! | `has_edge`      | $O(1)$            | $O(1)$                   |
//! | `neighbors`     | $O(1)$ to start   | $O(\|V\|)$               |

mod vertex;
pub use self::vertex::*;
mod edge;
pub use self::edge::*;
mod r#trait;
pub use self::r#trait::*;
mod config;
pub use self::config::*;
pub mod representation;
pub use self::representation::{AdjacencyList, AdjacencyMatrix};
mod base;
pub use self::base::*;
mod graph_debug;
pub use self::graph_debug::*;

pub(crate) use crate::{GraphError, Result};
pub(crate) use ahash::RandomState;
pub(crate) use std::collections::{HashMap, HashSet};

/// A set of vertices, hashed by `ahash`.
pub type VertexSet<V> = HashSet<V, RandomState>;
/// A set of edges, hashed by `ahash`.
pub type EdgeSet<V> = HashSet<Edge<V>, RandomState>;
