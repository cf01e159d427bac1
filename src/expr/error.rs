
use super::source::SourceOffset;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ExprError {
  #[error("Malformed expression at position {position}: {reason}")]
  MalformedExpression {
    position: SourceOffset,
    reason: Malformed,
  },
  #[error("Invalid token '{token}' at position {position}")]
  InvalidToken {
    token: char,
    position: SourceOffset,
  },
  #[error("Arithmetic error at position {position}: {reason}")]
  Arithmetic {
    position: SourceOffset,
    reason: ArithmeticError,
  },
}

/// Why an expression was structurally invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Malformed {
  #[error("closing parenthesis has no matching opening parenthesis")]
  UnmatchedClosingParen,
  #[error("opening parenthesis is never closed")]
  UnclosedParen,
  #[error("operator is missing an operand")]
  MissingOperand,
  #[error("closing parenthesis has no operator to apply")]
  MissingOperator,
  #[error("{count} operand(s) left over")]
  LeftoverOperands {
    count: usize,
  },
  #[error("{count} operator(s) left over")]
  LeftoverOperators {
    count: usize,
  },
  #[error("no closing parenthesis groups the expression")]
  Ungrouped,
  #[error("expression is empty")]
  Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArithmeticError {
  #[error("division by zero")]
  DivisionByZero,
  #[error("integer overflow")]
  Overflow,
}

impl ExprError {
  pub fn malformed(position: SourceOffset, reason: Malformed) -> Self {
    ExprError::MalformedExpression { position, reason }
  }

  pub fn invalid_token(token: char, position: SourceOffset) -> Self {
    ExprError::InvalidToken { token, position }
  }

  /// The position in the input at which the error was detected.
  pub fn position(&self) -> SourceOffset {
    match self {
      ExprError::MalformedExpression { position, .. } => *position,
      ExprError::InvalidToken { position, .. } => *position,
      ExprError::Arithmetic { position, .. } => *position,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_messages_carry_context() {
    let err = ExprError::invalid_token('x', SourceOffset(4));
    assert_eq!(err.to_string(), "Invalid token 'x' at position 4");
    let err = ExprError::malformed(SourceOffset(2), Malformed::LeftoverOperands { count: 3 });
    assert_eq!(err.to_string(), "Malformed expression at position 2: 3 operand(s) left over");
    assert_eq!(err.position(), SourceOffset(2));
  }
}
