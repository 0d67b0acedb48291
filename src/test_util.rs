use crate::graph::VertexSet;

/// Installs a fmt subscriber writing into the test harness, once per process.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

pub fn set_of<V, I>(items: I) -> VertexSet<V>
where
    V: std::hash::Hash + Eq,
    I: IntoIterator<Item = V>,
{
    items.into_iter().collect()
}
