
use super::error::StackError;

/// A stack-like structure, capable of pushing and popping elements
/// from the top.
///
/// Every storage variant in this crate implements this trait, so
/// generic code can drive a [`DynamicStack`](super::DynamicStack), a
/// [`FixedCapacityStack`](super::FixedCapacityStack), or a
/// [`LinkedStack`](super::LinkedStack) interchangeably.
pub trait StackLike<T> {
  /// Returns the length of the stack, in elements.
  fn len(&self) -> usize;

  /// Pushes a single element onto the top of the stack. Only
  /// bounded stacks can fail here, with
  /// [`StackError::ContainerFull`].
  fn push(&mut self, element: T) -> Result<(), StackError>;

  /// Pops a single element from the stack. Returns
  /// [`StackError::EmptyContainer`] if the stack is empty.
  fn pop(&mut self) -> Result<T, StackError>;

  /// Returns a reference to the top of the stack, if any.
  fn peek(&self) -> Option<&T>;

  /// As [`StackLike::pop`], but with no result value. Use this
  /// function if you don't plan to use the result and don't care if
  /// the `pop` call fails due to an empty stack.
  fn pop_and_discard(&mut self) {
    let _ = self.pop();
  }

  /// Returns true if the stack is empty.
  fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Pushes several elements onto the stack in the order we see them
  /// in the iterable. That is, the final element of the iterable will
  /// be at the top of the stack, after this method has executed.
  ///
  /// Stops at the first element that could not be pushed. Elements
  /// pushed before the failure remain on the stack.
  fn push_several(&mut self, elements: impl IntoIterator<Item = T>) -> Result<(), StackError> {
    for element in elements {
      self.push(element)?;
    }
    Ok(())
  }

  /// Pops `count` elements off the stack and returns those elements,
  /// with the former top of the stack at the end of the vector. In
  /// case of a [`StackError`], `self` will NOT be modified.
  fn pop_several(&mut self, count: usize) -> Result<Vec<T>, StackError> {
    self.check_stack_size(count)?;
    let mut result = Vec::with_capacity(count);
    for _ in 0..count {
      result.push(self.pop()?);
    }
    result.reverse();
    Ok(result)
  }

  /// Pops all elements off the stack and returns them, bottom first.
  fn pop_all(&mut self) -> Vec<T> {
    let mut result = Vec::with_capacity(self.len());
    while let Ok(element) = self.pop() {
      result.push(element);
    }
    result.reverse();
    result
  }

  /// Asserts that the stack has size at least `expected` but does not
  /// pop anything.
  fn check_stack_size(&self, expected: usize) -> Result<(), StackError> {
    let actual = self.len();
    if actual < expected {
      Err(StackError::NotEnoughElements { expected, actual })
    } else {
      Ok(())
    }
  }
}
