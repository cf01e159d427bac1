
//! Contiguous slot storage shared by the array-backed stacks.

use std::mem;

/// A fixed-size buffer of optional slots, filled from the bottom.
///
/// Slots below `len` are always occupied and slots at or above `len`
/// are always `None`. Removing an element moves it out of its slot,
/// so the buffer never keeps a popped value alive.
#[derive(Clone)]
pub(super) struct Slots<T> {
  slots: Box<[Option<T>]>,
  len: usize,
}

impl<T> Slots<T> {
  pub fn with_capacity(capacity: usize) -> Self {
    Self {
      slots: empty_slots(capacity),
      len: 0,
    }
  }

  /// The largest capacity we are willing to allocate for this
  /// element type.
  pub fn max_capacity() -> usize {
    isize::MAX as usize / mem::size_of::<Option<T>>().max(1)
  }

  pub fn len(&self) -> usize {
    self.len
  }

  pub fn capacity(&self) -> usize {
    self.slots.len()
  }

  pub fn is_full(&self) -> bool {
    self.len == self.capacity()
  }

  /// Stores `element` in the first free slot, or hands it back if
  /// every slot is taken.
  pub fn push_within_capacity(&mut self, element: T) -> Result<(), T> {
    if self.is_full() {
      return Err(element);
    }
    self.slots[self.len] = Some(element);
    self.len += 1;
    Ok(())
  }

  pub fn pop(&mut self) -> Option<T> {
    let top = self.len.checked_sub(1)?;
    let element = self.slots[top].take();
    self.len = top;
    element
  }

  pub fn peek(&self) -> Option<&T> {
    let top = self.len.checked_sub(1)?;
    self.slots[top].as_ref()
  }

  /// Returns the element at `index`, counting from the bottom.
  pub fn get(&self, index: usize) -> Option<&T> {
    self.live().get(index)?.as_ref()
  }

  /// Iterates from the top of the stack.
  pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + '_ {
    self.live().iter().rev().flatten()
  }

  /// Moves every live element into a fresh buffer of
  /// `new_capacity` slots. `new_capacity` must be at least `len`.
  pub fn reallocate(&mut self, new_capacity: usize) {
    debug_assert!(new_capacity >= self.len, "reallocation would drop live elements");
    let mut slots = empty_slots(new_capacity);
    for (new_slot, old_slot) in slots.iter_mut().zip(self.slots[..self.len].iter_mut()) {
      *new_slot = old_slot.take();
    }
    self.slots = slots;
  }

  fn live(&self) -> &[Option<T>] {
    &self.slots[..self.len]
  }
}

impl<T> From<Vec<T>> for Slots<T> {
  fn from(elements: Vec<T>) -> Self {
    let len = elements.len();
    Self {
      slots: elements.into_iter().map(Some).collect(),
      len,
    }
  }
}

fn empty_slots<T>(capacity: usize) -> Box<[Option<T>]> {
  std::iter::repeat_with(|| None).take(capacity).collect()
}
