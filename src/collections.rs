//! Minimal containers used by the board and the turn engine.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Growable LIFO pile. The last pushed item is the first one popped.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> FromIterator<T> for Stack<T> {
    /// The last item yielded ends up on top.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

/// Ring-buffer queue of turn order. The front is the next one to act.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rotation<T> {
    queue: VecDeque<T>,
}

impl<T> Rotation<T> {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }

    pub fn peek(&self) -> Option<&T> {
        self.queue.front()
    }

    /// Removes and returns the front entry.
    pub fn serve(&mut self) -> Option<T> {
        self.queue.pop_front()
    }

    /// Queues an entry at the back.
    pub fn append(&mut self, item: T) {
        self.queue.push_back(item);
    }

    /// Moves the front entry to the back without acting on it.
    pub fn pass(&mut self) -> Option<&T> {
        let front = self.queue.pop_front()?;
        self.queue.push_back(front);
        self.queue.back()
    }

    /// Inverts the whole order in place.
    pub fn reverse(&mut self) {
        self.queue.make_contiguous().reverse();
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Entries from front to back.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.queue.iter()
    }
}

impl<T> FromIterator<T> for Rotation<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            queue: iter.into_iter().collect(),
        }
    }
}
