
use super::base::StackLike;
use super::error::StackError;
use super::slots::Slots;

use std::fmt::{self, Debug, Formatter};

/// Array-backed stack whose capacity is fixed at construction.
///
/// Pushing onto a full stack fails with
/// [`StackError::ContainerFull`] and leaves the stack untouched.
#[derive(Clone)]
pub struct FixedCapacityStack<T> {
  slots: Slots<T>,
}

impl<T> FixedCapacityStack<T> {
  pub fn with_capacity(capacity: usize) -> Self {
    Self { slots: Slots::with_capacity(capacity) }
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

  pub fn is_full(&self) -> bool {
    self.slots.is_full()
  }

  pub fn push(&mut self, element: T) -> Result<(), StackError> {
    self.slots.push_within_capacity(element)
      .map_err(|_| StackError::ContainerFull { capacity: self.capacity() })
  }

  pub fn pop(&mut self) -> Result<T, StackError> {
    self.slots.pop().ok_or(StackError::EmptyContainer)
  }

  pub fn peek(&self) -> Option<&T> {
    self.slots.peek()
  }

  /// Iterates from the top of the stack.
  pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + '_ {
    self.slots.iter()
  }
}

impl<T> StackLike<T> for FixedCapacityStack<T> {
  fn len(&self) -> usize {
    FixedCapacityStack::len(self)
  }

  fn push(&mut self, element: T) -> Result<(), StackError> {
    FixedCapacityStack::push(self, element)
  }

  fn pop(&mut self) -> Result<T, StackError> {
    FixedCapacityStack::pop(self)
  }

  fn peek(&self) -> Option<&T> {
    FixedCapacityStack::peek(self)
  }
}

impl<T: Debug> Debug for FixedCapacityStack<T> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.debug_struct("FixedCapacityStack")
      .field("top_down", &self.iter().collect::<Vec<_>>())
      .field("capacity", &self.capacity())
      .finish()
  }
}
