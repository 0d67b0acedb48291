use super::Vertex;
use crate::{GraphError, Result};
use ahash::RandomState;
use std::cell::RefCell;
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};
use std::hash::{Hash, Hasher};
use std::rc::Rc;

/// Fixed seeds so that the hash fallback orders vertices the same way on every call.
const CANONICAL_SEEDS: [u64; 4] = [
    0x243f_6a88_85a3_08d3,
    0x1319_8a2e_0370_7344,
    0xa409_3822_299f_31d0,
    0x082e_fa98_ec4e_6c89,
];

/// A metadata value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    List(Vec<Value>),
}

impl From<bool> for Value {
    fn from(x: bool) -> Self {
        Value::Bool(x)
    }
}

impl From<i64> for Value {
    fn from(x: i64) -> Self {
        Value::Int(x)
    }
}

impl From<i32> for Value {
    fn from(x: i32) -> Self {
        Value::Int(x.into())
    }
}

impl From<u32> for Value {
    fn from(x: u32) -> Self {
        Value::Int(x.into())
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(x: &str) -> Self {
        Value::Text(x.to_string())
    }
}

impl From<String> for Value {
    fn from(x: String) -> Self {
        Value::Text(x)
    }
}

impl From<Vec<Value>> for Value {
    fn from(x: Vec<Value>) -> Self {
        Value::List(x)
    }
}

/// Free-form annotations on an edge.
///
/// `Metadata` is a handle.
/// Cloning it yields another handle onto the same map,
/// so annotations written through one clone are visible through all of them.
/// This is how both halves of an undirected edge see the same annotations.
/// Use [`Metadata::detached`] for an independent copy.
///
/// Metadata never takes part in edge equality or hashing.
#[derive(Clone, Default)]
pub struct Metadata(Rc<RefCell<HashMap<String, Value, RandomState>>>);

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<Value> {
        self.0.borrow().get(key).cloned()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.borrow().contains_key(key)
    }

    /// Inserts an annotation and returns the replaced one, if any.
    pub fn insert<K, T>(&self, key: K, value: T) -> Option<Value>
    where
        K: Into<String>,
        T: Into<Value>,
    {
        self.0.borrow_mut().insert(key.into(), value.into())
    }

    pub fn remove(&self, key: &str) -> Option<Value> {
        self.0.borrow_mut().remove(key)
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// A sorted copy of the current annotations.
    pub fn snapshot(&self) -> BTreeMap<String, Value> {
        self.0
            .borrow()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// An independent copy of the current annotations.
    pub fn detached(&self) -> Self {
        let map = self.0.borrow().clone();
        Self(Rc::new(RefCell::new(map)))
    }

    /// Whether both handles refer to the same map.
    pub fn shares_with(&self, other: &Metadata) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for Metadata {
    fn eq(&self, other: &Self) -> bool {
        self.shares_with(other) || *self.0.borrow() == *other.0.borrow()
    }
}

impl std::fmt::Debug for Metadata {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.snapshot())
    }
}

impl<K, T> FromIterator<(K, T)> for Metadata
where
    K: Into<String>,
    T: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        let map = iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self(Rc::new(RefCell::new(map)))
    }
}

/// A weighted connection between two vertices.
///
/// Undirected edges are canonicalized once, on construction:
/// the lesser endpoint becomes the source,
/// so `Edge::undirected(a, b) == Edge::undirected(b, a)` and both hash alike.
/// Endpoints are compared by [`Vertex::order`] if the vertex type supports it,
/// and by a fixed-seed hash otherwise.
/// Self-loops are kept as they are.
///
/// Equality and hashing cover source, target, weight and directedness.
/// Weights are compared by their bit patterns.
#[derive(Clone)]
pub struct Edge<V> {
    source: V,
    target: V,
    weight: f64,
    metadata: Metadata,
    directed: bool,
}

impl<V: Vertex> Edge<V> {
    pub fn new(source: V, target: V, weight: f64, metadata: Metadata, directed: bool) -> Self {
        let (source, target) =
            if !directed && source != target && canonical_order(&source, &target).is_gt() {
                (target, source)
            } else {
                (source, target)
            };
        Self {
            source,
            target,
            weight,
            metadata,
            directed,
        }
    }

    /// A directed edge with weight 1 and no metadata.
    pub fn directed(source: V, target: V) -> Self {
        Self::new(source, target, 1.0, Metadata::new(), true)
    }

    /// An undirected edge with weight 1 and no metadata.
    pub fn undirected(source: V, target: V) -> Self {
        Self::new(source, target, 1.0, Metadata::new(), false)
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn has_vertex(&self, vertex: &V) -> bool {
        self.source == *vertex || self.target == *vertex
    }

    /// The endpoint opposite to `vertex`.
    pub fn other_vertex(&self, vertex: &V) -> Result<&V> {
        if self.source == *vertex {
            Ok(&self.target)
        } else if self.target == *vertex {
            Ok(&self.source)
        } else {
            Err(GraphError::NotPartOfEdge(format!(
                "vertex {:?} is not part of this edge",
                vertex
            )))
        }
    }
}

impl<V> Edge<V> {
    pub fn source(&self) -> &V {
        &self.source
    }

    pub fn target(&self) -> &V {
        &self.target
    }

    pub fn endpoints(&self) -> (&V, &V) {
        (&self.source, &self.target)
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }
}

fn canonical_order<V: Vertex>(a: &V, b: &V) -> Ordering {
    a.order(b).unwrap_or_else(|| {
        let hasher = RandomState::with_seeds(
            CANONICAL_SEEDS[0],
            CANONICAL_SEEDS[1],
            CANONICAL_SEEDS[2],
            CANONICAL_SEEDS[3],
        );
        hasher.hash_one(a).cmp(&hasher.hash_one(b))
    })
}

impl<V: PartialEq> PartialEq for Edge<V> {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
            && self.target == other.target
            && self.weight.to_bits() == other.weight.to_bits()
            && self.directed == other.directed
    }
}

impl<V: Eq> Eq for Edge<V> {}

impl<V: Hash> Hash for Edge<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.source.hash(state);
        self.target.hash(state);
        self.weight.to_bits().hash(state);
        self.directed.hash(state);
    }
}

impl<V: std::fmt::Debug> std::fmt::Debug for Edge<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Edge")
            .field("source", &self.source)
            .field("target", &self.target)
            .field("weight", &self.weight)
            .field("metadata", &self.metadata)
            .field("directed", &self.directed)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;
    use std::collections::HashSet;

    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    struct Opaque(u16);

    impl Vertex for Opaque {}

    fn hash_of<T: Hash>(x: &T) -> u64 {
        RandomState::with_seeds(1, 2, 3, 4).hash_one(x)
    }

    #[test]
    fn directed_edges_keep_their_orientation() {
        let e = Edge::directed("B", "A");
        assert_eq!(e.endpoints(), (&"B", &"A"));
        assert_eq!(e.weight(), 1.0);
        assert!(e.is_directed());
        assert!(e.metadata().is_empty());
        assert_ne!(Edge::directed("A", "B"), Edge::directed("B", "A"));
    }

    #[test]
    fn undirected_edges_are_canonical() {
        let ab = Edge::undirected("A", "B");
        let ba = Edge::undirected("B", "A");
        assert_eq!(ba.endpoints(), (&"A", &"B"));
        assert_eq!(ab, ba);
        assert_eq!(hash_of(&ab), hash_of(&ba));
        let set: HashSet<_> = [ab, ba].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn self_loops_are_left_alone() {
        let e = Edge::undirected(7, 7);
        assert_eq!(e.endpoints(), (&7, &7));
    }

    #[test]
    fn metadata_is_not_part_of_identity() {
        let plain = Edge::undirected("A", "B");
        let annotated = Edge::undirected("A", "B")
            .with_metadata([("extra", "data")].into_iter().collect());
        assert_eq!(plain, annotated);
        assert_eq!(hash_of(&plain), hash_of(&annotated));
        assert_ne!(plain, Edge::undirected("A", "B").with_weight(2.0));
        assert_ne!(plain, Edge::directed("A", "B"));
    }

    #[test]
    fn metadata_mutates_in_place() {
        let meta: Metadata = [("type", "highway")].into_iter().collect();
        let e = Edge::new("A", "B", 2.0, meta.clone(), true);
        e.metadata().insert("speed_limit", 65);
        assert_eq!(meta.get("speed_limit"), Some(Value::Int(65)));
        assert_eq!(e.metadata().get("type"), Some(Value::from("highway")));
        assert!(e.metadata().shares_with(&meta));

        let copy = meta.detached();
        copy.insert("lanes", 4);
        assert!(!meta.contains_key("lanes"));
        assert!(!copy.shares_with(&meta));
    }

    #[test]
    fn other_vertex() {
        let e = Edge::directed('x', 'y');
        assert_eq!(e.other_vertex(&'x'), Ok(&'y'));
        assert_eq!(e.other_vertex(&'y'), Ok(&'x'));
        assert!(e.has_vertex(&'x'));
        assert!(!e.has_vertex(&'z'));
        assert!(matches!(
            e.other_vertex(&'z'),
            Err(GraphError::NotPartOfEdge(_))
        ));
    }

    #[quickcheck]
    fn undirected_normalization_is_order_free(a: i32, b: i32, w: u8) {
        let w = f64::from(w) / 4.0;
        let x = Edge::undirected(a, b).with_weight(w);
        let y = Edge::undirected(b, a).with_weight(w);
        assert_eq!(x, y);
        assert_eq!(hash_of(&x), hash_of(&y));
        assert!(x.source() <= x.target());
    }

    #[quickcheck]
    fn hash_fallback_is_order_free(a: u16, b: u16) {
        let x = Edge::undirected(Opaque(a), Opaque(b));
        let y = Edge::undirected(Opaque(b), Opaque(a));
        assert_eq!(x, y);
        assert_eq!(hash_of(&x), hash_of(&y));
    }

    #[quickcheck]
    fn directed_edges_are_asymmetric(a: i32, b: i32) -> bool {
        a == b || Edge::directed(a, b) != Edge::directed(b, a)
    }
}
