
use super::base::StackLike;
use super::error::StackError;
use super::slots::Slots;

use std::fmt::{self, Debug, Formatter};

/// Growable LIFO stack over a contiguous buffer.
///
/// The buffer doubles when a push finds it full and halves when a pop
/// leaves it exactly one quarter full. Both resizes are O(n), but a
/// sequence of `m` pushes and pops costs O(m) in total, and the
/// buffer is never more than four times larger than the live
/// contents (once it has shrunk at least once).
///
/// Every push and pop bumps an internal version counter. A [`Cursor`]
/// remembers the version it was created at and refuses to advance
/// once the stack has changed underneath it.
#[derive(Clone)]
pub struct DynamicStack<T> {
  slots: Slots<T>,
  version: u64,
}

/// A detached, top-to-bottom position in a [`DynamicStack`].
///
/// Unlike [`DynamicStack::iter`], a cursor does not borrow the stack
/// between steps, so the owner is free to push and pop while a
/// traversal is open. Any such mutation invalidates the cursor and
/// the next [`Cursor::advance`] fails with
/// [`StackError::ConcurrentModification`].
#[derive(Debug, Clone)]
pub struct Cursor {
  version: u64,
  remaining: usize,
}

/// By-value iterator over a [`DynamicStack`], from the top.
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
  stack: DynamicStack<T>,
}

impl<T> DynamicStack<T> {
  pub const DEFAULT_CAPACITY: usize = 10;

  pub fn new() -> Self {
    Self::default()
  }

  /// An empty stack with room for `capacity` elements before the
  /// first reallocation.
  pub fn with_capacity(capacity: usize) -> Self {
    Self {
      slots: Slots::with_capacity(capacity),
      version: 0,
    }
  }

  pub fn len(&self) -> usize {
    self.slots.len()
  }

  pub fn capacity(&self) -> usize {
    self.slots.capacity()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Pushes onto the top of the stack, doubling the buffer first if
  /// it is full.
  ///
  /// # Panics
  ///
  /// Panics if the stack already holds the maximum number of
  /// elements addressable for `T`.
  pub fn push(&mut self, element: T) {
    if self.slots.is_full() {
      self.grow();
    }
    if self.slots.push_within_capacity(element).is_err() {
      panic!("capacity overflow");
    }
    self.bump_version();
  }

  /// Removes and returns the top of the stack. The buffer is halved
  /// afterward if it is left exactly one quarter full.
  pub fn pop(&mut self) -> Result<T, StackError> {
    let element = self.slots.pop().ok_or(StackError::EmptyContainer)?;
    self.bump_version();
    let len = self.len();
    if len > 0 && len == self.capacity() / 4 {
      self.resize(self.capacity() / 2);
    }
    Ok(element)
  }

  pub fn peek(&self) -> Option<&T> {
    self.slots.peek()
  }

  /// Iterates from the top of the stack.
  pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + '_ {
    self.slots.iter()
  }

  /// A cursor positioned above the current top of the stack.
  pub fn cursor(&self) -> Cursor {
    Cursor {
      version: self.version,
      remaining: self.len(),
    }
  }

  fn grow(&mut self) {
    let max_capacity = Slots::<T>::max_capacity();
    let new_capacity = self.capacity().saturating_mul(2).clamp(1, max_capacity);
    self.resize(new_capacity);
  }

  fn resize(&mut self, new_capacity: usize) {
    tracing::debug!(len = self.len(), old_capacity = self.capacity(), new_capacity, "resizing stack");
    self.slots.reallocate(new_capacity);
  }

  fn bump_version(&mut self) {
    self.version = self.version.wrapping_add(1);
  }
}

impl Cursor {
  /// Returns the next element, from the top down, or `None` once the
  /// bottom has been passed.
  ///
  /// The cursor must be advanced against the same stack that created
  /// it. Fails if that stack has been pushed or popped since the
  /// cursor was created, even if the traversal had already finished.
  pub fn advance<'s, T>(&mut self, stack: &'s DynamicStack<T>) -> Result<Option<&'s T>, StackError> {
    if self.version != stack.version {
      return Err(StackError::ConcurrentModification);
    }
    let Some(index) = self.remaining.checked_sub(1) else {
      return Ok(None);
    };
    self.remaining = index;
    Ok(stack.slots.get(index))
  }

  /// Number of elements this cursor has yet to visit.
  pub fn remaining(&self) -> usize {
    self.remaining
  }
}

impl<T> StackLike<T> for DynamicStack<T> {
  fn len(&self) -> usize {
    DynamicStack::len(self)
  }

  fn push(&mut self, element: T) -> Result<(), StackError> {
    DynamicStack::push(self, element);
    Ok(())
  }

  fn pop(&mut self) -> Result<T, StackError> {
    DynamicStack::pop(self)
  }

  fn peek(&self) -> Option<&T> {
    DynamicStack::peek(self)
  }
}

impl<T> Default for DynamicStack<T> {
  fn default() -> Self {
    Self::with_capacity(Self::DEFAULT_CAPACITY)
  }
}

/// Converts a vector to a stack, where the top of the stack is at the
/// end. The capacity matches the length of the vector.
impl<T> From<Vec<T>> for DynamicStack<T> {
  fn from(elements: Vec<T>) -> Self {
    Self {
      slots: Slots::from(elements),
      version: 0,
    }
  }
}

/// Stacks compare by their live elements only. Capacity and version
/// are ignored.
impl<T: PartialEq> PartialEq for DynamicStack<T> {
  fn eq(&self, other: &Self) -> bool {
    self.len() == other.len() && self.iter().eq(other.iter())
  }
}

impl<T: Eq> Eq for DynamicStack<T> {}

impl<T: Debug> Debug for DynamicStack<T> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.debug_struct("DynamicStack")
      .field("top_down", &self.iter().collect::<Vec<_>>())
      .field("capacity", &self.capacity())
      .finish()
  }
}

impl<T> Iterator for IntoIter<T> {
  type Item = T;

  fn next(&mut self) -> Option<T> {
    self.stack.slots.pop()
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    let len = self.stack.len();
    (len, Some(len))
  }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for DynamicStack<T> {
  type Item = T;
  type IntoIter = IntoIter<T>;

  /// Iterates (by value) from the top of the stack.
  fn into_iter(self) -> Self::IntoIter {
    IntoIter { stack: self }
  }
}
