
use std::fmt::{self, Display, Formatter};

/// Thin wrapper around `usize` that represents a byte position in an
/// input expression. Used for error reporting.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SourceOffset(pub usize);

impl Display for SourceOffset {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

/// Iterates over the characters of `input` together with their
/// positions.
pub fn positioned_chars(input: &str) -> impl Iterator<Item = (SourceOffset, char)> + '_ {
  input.char_indices().map(|(i, c)| (SourceOffset(i), c))
}

/// The number of characters in `input` before `offset`, for pointing
/// at the offending character in a terminal.
pub fn column_of(input: &str, offset: SourceOffset) -> usize {
  input.get(..offset.0).map_or(0, |prefix| prefix.chars().count())
}

/// The offset one past the final byte of `input`.
pub fn end_of(input: &str) -> SourceOffset {
  SourceOffset(input.len())
}
