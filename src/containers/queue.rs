use super::TraversalContainer;
use crate::{GraphError, Result};
use std::collections::VecDeque;

/// First in, first out. Drives breadth-first traversals.
#[derive(Debug, Clone)]
pub struct FifoQueue<T>(VecDeque<T>);

/// Last in, first out. Drives depth-first traversals.
#[derive(Debug, Clone)]
pub struct LifoStack<T>(Vec<T>);

impl<T> FifoQueue<T> {
    pub fn new() -> Self {
        Self(VecDeque::new())
    }
}

impl<T> Default for FifoQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TraversalContainer<T> for FifoQueue<T> {
    fn push(&mut self, item: T) {
        self.0.push_back(item);
    }

    fn pop(&mut self) -> Result<T> {
        self.0
            .pop_front()
            .ok_or(GraphError::EmptyContainer("FIFO queue"))
    }

    fn peek(&self) -> Option<&T> {
        self.0.front()
    }

    fn len(&self) -> usize {
        self.0.len()
    }
}

impl<T> LifoStack<T> {
    pub fn new() -> Self {
        Self(Vec::new())
    }
}

impl<T> Default for LifoStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TraversalContainer<T> for LifoStack<T> {
    fn push(&mut self, item: T) {
        self.0.push(item);
    }

    fn pop(&mut self) -> Result<T> {
        self.0.pop().ok_or(GraphError::EmptyContainer("LIFO stack"))
    }

    fn peek(&self) -> Option<&T> {
        self.0.last()
    }

    fn len(&self) -> usize {
        self.0.len()
    }
}
