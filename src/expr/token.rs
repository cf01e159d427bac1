
//! Character classification shared by the expression algorithms.

use super::operator::BinaryOperator;

/// The three bracket families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BracketKind {
  /// `(` and `)`
  Paren,
  /// `[` and `]`
  Square,
  /// `{` and `}`
  Curly,
}

/// The category of a single input character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
  Operand(char),
  Operator(BinaryOperator),
  Open(BracketKind),
  Close(BracketKind),
  Whitespace,
  Other(char),
}

impl CharClass {
  pub fn of(c: char) -> CharClass {
    if let Some(op) = BinaryOperator::from_symbol(c) {
      return CharClass::Operator(op);
    }
    match c {
      '(' => CharClass::Open(BracketKind::Paren),
      '[' => CharClass::Open(BracketKind::Square),
      '{' => CharClass::Open(BracketKind::Curly),
      ')' => CharClass::Close(BracketKind::Paren),
      ']' => CharClass::Close(BracketKind::Square),
      '}' => CharClass::Close(BracketKind::Curly),
      c if c.is_whitespace() => CharClass::Whitespace,
      c if c.is_alphanumeric() => CharClass::Operand(c),
      c => CharClass::Other(c),
    }
  }
}

/// The numeric value of `c` if it is an ASCII decimal digit.
pub fn digit_value(c: char) -> Option<u32> {
  c.to_digit(10)
}
