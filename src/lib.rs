//! An in-memory graph with two interchangeable storages and a rooted tree on top of it.
//!
//! # Graphs and representations
//!
//! [`Graph`](graph::Graph) is a facade.
//! It validates every mutation and then hands storage over to a
//! [`GraphRepresentation`](graph::GraphRepresentation),
//! which is either an adjacency list or an adjacency matrix.
//! Both storages behave identically from the outside,
//! and a graph may swap one for the other at any time without losing data.
//!
//! Vertices are plain values.
//! Any type implementing [`Vertex`](graph::Vertex) will do,
//! and the crate implements it for strings, integers, chars and small tuples.
//!
//! # Trees
//!
//! [`Tree`](tree::Tree) is a directed graph constrained to a single root
//! where every other vertex has exactly one parent.
//! It owns its graph and lends it out read-only by [`Tree::to_graph`](tree::Tree::to_graph).
//! A directed graph can be checked and turned into a tree by
//! [`Tree::from_graph`](tree::Tree::from_graph).
//!
//! # Threads
//!
//! Nothing here is `Send` or `Sync`.
//! Edge metadata is shared between the two halves of an undirected edge by `Rc`,
//! so graphs are meant to live on one thread.

mod error;
pub use self::error::*;

pub mod containers;
pub mod graph;
pub mod tree;

#[cfg(test)]
pub(crate) mod test_util;
