//! Stack fixture.

/// A bounded stack of named items.
///
/// [`peek`](Stack::peek) hands out a reference to the stored item, so tests
/// can check it is the pushed instance rather than an equal copy.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Stack {
    items: Vec<String>,
    capacity: usize,
}

impl Stack {
    /// Creates an empty stack holding at most `capacity` items.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Pushes an item, returning false when the stack is full.
    pub fn push(&mut self, item: impl Into<String>) -> bool {
        if self.items.len() >= self.capacity {
            return false;
        }
        self.items.push(item.into());
        true
    }

    pub fn pop(&mut self) -> Option<String> {
        self.items.pop()
    }

    pub fn peek(&self) -> Option<&String> {
        self.items.last()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
