use super::TraversalContainer;
use crate::{GraphError, Result};
use ahash::RandomState;
use keyed_priority_queue::KeyedPriorityQueue;
use std::cmp::Reverse;
use std::collections::HashMap;

/// Lowest priority first. Drives best-first traversals.
///
/// Priorities are computed from items by a key function.
/// Items of equal priority come out in insertion order.
///
/// ```
/// use graphkit::containers::*;
///
/// let mut pq = PriorityQueue::with_key(|x: &(u32, &str)| x.0);
/// pq.push((3, "low"));
/// pq.push((1, "high"));
/// pq.push((2, "medium"));
/// assert_eq!(pq.pop(), Ok((1, "high")));
/// assert_eq!(pq.pop(), Ok((2, "medium")));
/// ```
pub struct PriorityQueue<T, P, F = fn(&T) -> P>
where
    P: Ord,
    F: Fn(&T) -> P,
{
    key: F,
    order: KeyedPriorityQueue<u64, Reverse<(P, u64)>, RandomState>,
    items: HashMap<u64, T, RandomState>,
    next_seq: u64,
}

impl<T, P, F> PriorityQueue<T, P, F>
where
    P: Ord,
    F: Fn(&T) -> P,
{
    pub fn with_key(key: F) -> Self {
        Self {
            key,
            order: KeyedPriorityQueue::with_capacity_and_hasher(0, RandomState::new()),
            items: HashMap::with_hasher(RandomState::new()),
            next_seq: 0,
        }
    }
}

impl<T> PriorityQueue<T, T>
where
    T: Ord + Clone,
{
    /// Items are their own priorities.
    pub fn new() -> Self {
        Self::with_key(T::clone)
    }
}

impl<T> Default for PriorityQueue<T, T>
where
    T: Ord + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P, F> TraversalContainer<T> for PriorityQueue<T, P, F>
where
    P: Ord,
    F: Fn(&T) -> P,
{
    fn push(&mut self, item: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        let priority = (self.key)(&item);
        self.order.push(seq, Reverse((priority, seq)));
        self.items.insert(seq, item);
    }

    fn pop(&mut self) -> Result<T> {
        self.order
            .pop()
            .and_then(|(seq, _)| self.items.remove(&seq))
            .ok_or(GraphError::EmptyContainer("priority queue"))
    }

    fn peek(&self) -> Option<&T> {
        self.order.peek().and_then(|(seq, _)| self.items.get(seq))
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}
