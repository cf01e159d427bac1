
//! The four binary arithmetic operators and their precedences.

use phf::phf_map;

use std::fmt::{self, Display, Formatter};

/// A binary, infix, left-associative arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
  Add,
  Subtract,
  Multiply,
  Divide,
}

/// The precedence of an operator. Higher values bind more tightly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Precedence(u8);

static OPERATOR_TABLE: phf::Map<char, BinaryOperator> = phf_map! {
  '+' => BinaryOperator::Add,
  '-' => BinaryOperator::Subtract,
  '*' => BinaryOperator::Multiply,
  '/' => BinaryOperator::Divide,
};

impl Precedence {
  pub const ADDITIVE: Precedence = Precedence(1);
  pub const MULTIPLICATIVE: Precedence = Precedence(2);
}

impl BinaryOperator {
  pub const ALL: [BinaryOperator; 4] = [
    BinaryOperator::Add,
    BinaryOperator::Subtract,
    BinaryOperator::Multiply,
    BinaryOperator::Divide,
  ];

  /// Looks up the operator written as `symbol`, if any.
  pub fn from_symbol(symbol: char) -> Option<BinaryOperator> {
    OPERATOR_TABLE.get(&symbol).copied()
  }

  pub fn symbol(self) -> char {
    match self {
      BinaryOperator::Add => '+',
      BinaryOperator::Subtract => '-',
      BinaryOperator::Multiply => '*',
      BinaryOperator::Divide => '/',
    }
  }

  pub fn precedence(self) -> Precedence {
    match self {
      BinaryOperator::Add | BinaryOperator::Subtract => Precedence::ADDITIVE,
      BinaryOperator::Multiply | BinaryOperator::Divide => Precedence::MULTIPLICATIVE,
    }
  }

  /// Whether `self`, sitting on the operator stack, must be emitted
  /// before `incoming` is pushed. All operators associate to the
  /// left, so ties are resolved by emitting the stacked operator.
  pub fn yields_to(self, incoming: BinaryOperator) -> bool {
    incoming.precedence() <= self.precedence()
  }
}

impl Display for BinaryOperator {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.symbol())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_symbol_lookup() {
    for op in BinaryOperator::ALL {
      assert_eq!(BinaryOperator::from_symbol(op.symbol()), Some(op));
    }
    assert_eq!(BinaryOperator::from_symbol('^'), None);
    assert_eq!(BinaryOperator::from_symbol('('), None);
  }

  #[test]
  fn test_precedence_order() {
    assert!(Precedence::MULTIPLICATIVE > Precedence::ADDITIVE);
    assert_eq!(BinaryOperator::Divide.precedence(), BinaryOperator::Multiply.precedence());
    assert_eq!(BinaryOperator::Subtract.precedence(), BinaryOperator::Add.precedence());
  }

  #[test]
  fn test_yields_to() {
    // Equal precedence: left associative.
    assert!(BinaryOperator::Subtract.yields_to(BinaryOperator::Add));
    assert!(BinaryOperator::Divide.yields_to(BinaryOperator::Multiply));
    // Higher precedence on the stack.
    assert!(BinaryOperator::Multiply.yields_to(BinaryOperator::Add));
    // Lower precedence on the stack.
    assert!(!BinaryOperator::Add.yields_to(BinaryOperator::Divide));
  }
}
