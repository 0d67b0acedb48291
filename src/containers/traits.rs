use crate::Result;

/// A pool of items waiting to be visited.
///
/// Implementations differ only in which item [pop](TraversalContainer::pop) hands out next.
pub trait TraversalContainer<T> {
    fn push(&mut self, item: T);
    /// Takes the next item out, or fails with [EmptyContainer](crate::GraphError::EmptyContainer).
    fn pop(&mut self) -> Result<T>;
    /// The item [pop](TraversalContainer::pop) would hand out.
    fn peek(&self) -> Option<&T>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn extend_from<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
        Self: Sized,
    {
        for x in items {
            self.push(x);
        }
    }
}
