//! Storages implementing [GraphRepresentation](crate::graph::GraphRepresentation).

mod adjacency_list;
pub use self::adjacency_list::*;
mod adjacency_matrix;
pub use self::adjacency_matrix::*;
