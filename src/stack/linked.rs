
use super::base::StackLike;
use super::error::StackError;

use std::fmt::{self, Debug, Formatter};

/// Stack of singly-linked nodes.
///
/// The stack owns the top node and every node owns the node beneath
/// it. Push and pop are O(1) and memory use is always proportional to
/// the number of elements.
pub struct LinkedStack<T> {
  head: Link<T>,
  len: usize,
}

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
  element: T,
  next: Link<T>,
}

/// Borrowing iterator over a [`LinkedStack`], from the top.
pub struct Iter<'a, T> {
  next: Option<&'a Node<T>>,
  remaining: usize,
}

/// By-value iterator over a [`LinkedStack`], from the top.
pub struct IntoIter<T> {
  stack: LinkedStack<T>,
}

impl<T> LinkedStack<T> {
  pub fn new() -> Self {
    Self { head: None, len: 0 }
  }

  pub fn len(&self) -> usize {
    self.len
  }

  pub fn is_empty(&self) -> bool {
    self.head.is_none()
  }

  pub fn push(&mut self, element: T) {
    let next = self.head.take();
    self.head = Some(Box::new(Node { element, next }));
    self.len += 1;
  }

  pub fn pop(&mut self) -> Result<T, StackError> {
    let node = self.head.take().ok_or(StackError::EmptyContainer)?;
    self.head = node.next;
    self.len -= 1;
    Ok(node.element)
  }

  pub fn peek(&self) -> Option<&T> {
    self.head.as_deref().map(|node| &node.element)
  }

  pub fn iter(&self) -> Iter<'_, T> {
    Iter { next: self.head.as_deref(), remaining: self.len }
  }
}

// The default drop glue would recurse once per node.
impl<T> Drop for LinkedStack<T> {
  fn drop(&mut self) {
    let mut link = self.head.take();
    while let Some(mut node) = link {
      link = node.next.take();
    }
  }
}

impl<T> StackLike<T> for LinkedStack<T> {
  fn len(&self) -> usize {
    LinkedStack::len(self)
  }

  fn push(&mut self, element: T) -> Result<(), StackError> {
    LinkedStack::push(self, element);
    Ok(())
  }

  fn pop(&mut self) -> Result<T, StackError> {
    LinkedStack::pop(self)
  }

  fn peek(&self) -> Option<&T> {
    LinkedStack::peek(self)
  }
}

impl<T> Default for LinkedStack<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T: Debug> Debug for LinkedStack<T> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(self.iter()).finish()
  }
}

/// Builds a stack whose top is the final element of the iterator.
impl<T> FromIterator<T> for LinkedStack<T> {
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
    let mut stack = Self::new();
    for element in iter {
      stack.push(element);
    }
    stack
  }
}

impl<'a, T> Iterator for Iter<'a, T> {
  type Item = &'a T;

  fn next(&mut self) -> Option<&'a T> {
    let node = self.next?;
    self.next = node.next.as_deref();
    self.remaining -= 1;
    Some(&node.element)
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.remaining, Some(self.remaining))
  }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<T> Iterator for IntoIter<T> {
  type Item = T;

  fn next(&mut self) -> Option<T> {
    self.stack.pop().ok()
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.stack.len(), Some(self.stack.len()))
  }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for LinkedStack<T> {
  type Item = T;
  type IntoIter = IntoIter<T>;

  fn into_iter(self) -> Self::IntoIter {
    IntoIter { stack: self }
  }
}

impl<'a, T> IntoIterator for &'a LinkedStack<T> {
  type Item = &'a T;
  type IntoIter = Iter<'a, T>;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}
