use std::cmp::Ordering;
use std::fmt::Debug;
use std::hash::Hash;

/// Values usable as vertices.
///
/// Vertices are identified by value: two equal values are the same vertex.
/// Being `Eq + Hash` is all a graph needs.
///
/// [`order`](Vertex::order) is used to canonicalize undirected edges.
/// Types with a natural total order should return it;
/// the default says "not comparable", and edges fall back to ordering by hash.
pub trait Vertex: Clone + Eq + Hash + Debug + 'static {
    fn order(&self, _other: &Self) -> Option<Ordering> {
        None
    }
}

macro_rules! ordered_vertex {
    ($($t:ty),* $(,)?) => {
        $(
            impl Vertex for $t {
                fn order(&self, other: &Self) -> Option<Ordering> {
                    Some(self.cmp(other))
                }
            }
        )*
    };
}

ordered_vertex!(
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    char,
    bool,
    String,
    &'static str,
    (),
);

impl<A, B> Vertex for (A, B)
where
    A: Vertex + Ord,
    B: Vertex + Ord,
{
    fn order(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<A, B, C> Vertex for (A, B, C)
where
    A: Vertex + Ord,
    B: Vertex + Ord,
    C: Vertex + Ord,
{
    fn order(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T, const N: usize> Vertex for [T; N]
where
    T: Vertex + Ord,
{
    fn order(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
