//! First-in first-out queue used as the BFS frontier.

use std::collections::VecDeque;
use std::fmt;

/// A strict FIFO queue.
///
/// [`dequeue`](Self::dequeue) reports an empty queue as an error instead of
/// returning a placeholder item, so "no item" can never be confused with an
/// item that happens to look like one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FifoQueue<T> {
    items: VecDeque<T>,
}

impl<T> Default for FifoQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FifoQueue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Create an empty queue with room for `cap` items.
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(cap),
        }
    }

    /// Append `item` to the back.
    #[inline]
    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Remove and return the front item.
    #[inline]
    pub fn dequeue(&mut self) -> Result<T, QueueError> {
        self.items.pop_front().ok_or(QueueError::Empty)
    }

    /// The front item, without removing it.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.items.front()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T> FromIterator<T> for FifoQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for FifoQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

/// Errors returned by [`FifoQueue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// `dequeue` was called with no items left.
    Empty,
}

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "dequeue on an empty queue"),
        }
    }
}

impl std::error::Error for QueueError {}
