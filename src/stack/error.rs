
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum StackError {
  #[error("Cannot pop from an empty stack.")]
  EmptyContainer,
  #[error("Stack is full, capacity is {capacity}.")]
  ContainerFull {
    capacity: usize,
  },
  #[error("Stack was modified while a cursor was traversing it.")]
  ConcurrentModification,
  #[error("Not enough stack elements, expected at least {expected} but found {actual}.")]
  NotEnoughElements {
    expected: usize,
    actual: usize,
  },
}
