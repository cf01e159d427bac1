
//! Postfix (Reverse Polish) evaluation.
//!
//! Operands are single decimal digits. Whitespace between tokens is
//! allowed and ignored.

use super::error::{ArithmeticError, ExprError, Malformed};
use super::operator::BinaryOperator;
use super::source::{end_of, positioned_chars, SourceOffset};
use super::token::{digit_value, CharClass};
use crate::stack::DynamicStack;

/// A number type the postfix evaluator can compute with.
pub trait Operand: Copy {
  fn from_digit(digit: u32) -> Self;

  /// Computes `left op right`.
  fn apply(op: BinaryOperator, left: Self, right: Self) -> Result<Self, ArithmeticError>;
}

/// Integer arithmetic. Division truncates toward zero; overflow and
/// division by zero are errors.
impl Operand for i64 {
  fn from_digit(digit: u32) -> Self {
    i64::from(digit)
  }

  fn apply(op: BinaryOperator, left: Self, right: Self) -> Result<Self, ArithmeticError> {
    let result = match op {
      BinaryOperator::Add => left.checked_add(right),
      BinaryOperator::Subtract => left.checked_sub(right),
      BinaryOperator::Multiply => left.checked_mul(right),
      BinaryOperator::Divide => {
        if right == 0 {
          return Err(ArithmeticError::DivisionByZero);
        }
        left.checked_div(right)
      }
    };
    result.ok_or(ArithmeticError::Overflow)
  }
}

/// Floating-point arithmetic, following IEEE 754. Division by zero
/// produces an infinity or NaN rather than an error.
impl Operand for f64 {
  fn from_digit(digit: u32) -> Self {
    f64::from(digit)
  }

  fn apply(op: BinaryOperator, left: Self, right: Self) -> Result<Self, ArithmeticError> {
    Ok(match op {
      BinaryOperator::Add => left + right,
      BinaryOperator::Subtract => left - right,
      BinaryOperator::Multiply => left * right,
      BinaryOperator::Divide => left / right,
    })
  }
}

/// Evaluates a postfix expression with integer arithmetic.
///
/// ```text
/// evaluate("12+3-5+") == Ok(5)
/// evaluate("72/")     == Ok(3)
/// ```
pub fn evaluate(expression: &str) -> Result<i64, ExprError> {
  evaluate_as(expression)
}

/// Evaluates a postfix expression with floating-point arithmetic, so
/// division keeps its fractional part.
pub fn evaluate_float(expression: &str) -> Result<f64, ExprError> {
  evaluate_as(expression)
}

/// Evaluates a postfix expression in the number type `N`.
pub fn evaluate_as<N: Operand>(expression: &str) -> Result<N, ExprError> {
  let mut operands: DynamicStack<N> = DynamicStack::new();
  for (position, c) in positioned_chars(expression) {
    match CharClass::of(c) {
      CharClass::Operator(op) => {
        let right = operands.pop().map_err(|_| missing_operand(position))?;
        let left = operands.pop().map_err(|_| missing_operand(position))?;
        let result = N::apply(op, left, right)
          .map_err(|reason| ExprError::Arithmetic { position, reason })?;
        operands.push(result);
      }
      CharClass::Whitespace => {}
      _ => {
        let digit = digit_value(c).ok_or(ExprError::invalid_token(c, position))?;
        operands.push(N::from_digit(digit));
      }
    }
  }
  sole_result(operands, end_of(expression))
}

/// Takes the single value left on `operands` at the end of an
/// evaluation.
pub(super) fn sole_result<N>(mut operands: DynamicStack<N>, end: SourceOffset) -> Result<N, ExprError> {
  match operands.len() {
    0 => Err(ExprError::malformed(end, Malformed::Empty)),
    1 => operands.pop().map_err(|_| ExprError::malformed(end, Malformed::Empty)),
    n => Err(ExprError::malformed(end, Malformed::LeftoverOperands { count: n - 1 })),
  }
}

fn missing_operand(position: SourceOffset) -> ExprError {
  ExprError::malformed(position, Malformed::MissingOperand)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::expr::operator::Precedence;
  use crate::expr::shunting_yard::to_postfix;

  use approx::assert_relative_eq;
  use proptest::prelude::*;

  #[test]
  fn test_evaluate() {
    assert_eq!(evaluate("12+"), Ok(3));
    assert_eq!(evaluate("12+3-"), Ok(0));
    assert_eq!(evaluate("12+3-5+"), Ok(5));
    assert_eq!(evaluate("7"), Ok(7));
  }

  #[test]
  fn test_operand_order() {
    assert_eq!(evaluate("93-"), Ok(6));
    assert_eq!(evaluate("82/"), Ok(4));
    assert_eq!(evaluate("28/"), Ok(0));
  }

  #[test]
  fn test_whitespace_is_skipped() {
    assert_eq!(evaluate(" 1 2 + 3 * "), Ok(9));
  }

  #[test]
  fn test_integer_division_truncates_toward_zero() {
    assert_eq!(evaluate("72/"), Ok(3));
    assert_eq!(evaluate("07-2/"), Ok(-3));
  }

  #[test]
  fn test_float_division_keeps_fraction() {
    assert_relative_eq!(evaluate_float("72/").unwrap(), 3.5);
    assert_relative_eq!(evaluate_float("07-2/").unwrap(), -3.5);
    assert_relative_eq!(evaluate_float("12+3-5+").unwrap(), 5.0);
  }

  #[test]
  fn test_float_division_by_zero() {
    assert!(evaluate_float("10/").unwrap().is_infinite());
    assert!(evaluate_float("00/").unwrap().is_nan());
  }

  #[test]
  fn test_integer_division_by_zero() {
    assert_eq!(
      evaluate("10/"),
      Err(ExprError::Arithmetic { position: SourceOffset(2), reason: ArithmeticError::DivisionByZero }),
    );
  }

  #[test]
  fn test_integer_overflow() {
    // 9^21 does not fit in an i64.
    let mut expression = String::from("9");
    for _ in 0..20 {
      expression.push_str("9*");
    }
    assert!(matches!(
      evaluate(&expression),
      Err(ExprError::Arithmetic { reason: ArithmeticError::Overflow, .. }),
    ));
  }

  #[test]
  fn test_invalid_token() {
    assert_eq!(evaluate("12a+"), Err(ExprError::invalid_token('a', SourceOffset(2))));
    assert_eq!(evaluate("1(2+"), Err(ExprError::invalid_token('(', SourceOffset(1))));
  }

  #[test]
  fn test_missing_operand() {
    assert_eq!(evaluate("1+"), Err(ExprError::malformed(SourceOffset(1), Malformed::MissingOperand)));
    assert_eq!(evaluate("+"), Err(ExprError::malformed(SourceOffset(0), Malformed::MissingOperand)));
  }

  #[test]
  fn test_leftover_operands() {
    assert_eq!(
      evaluate("123+"),
      Err(ExprError::malformed(SourceOffset(4), Malformed::LeftoverOperands { count: 1 })),
    );
  }

  #[test]
  fn test_empty() {
    assert_eq!(evaluate(""), Err(ExprError::malformed(SourceOffset(0), Malformed::Empty)));
    assert_eq!(evaluate("   "), Err(ExprError::malformed(SourceOffset(3), Malformed::Empty)));
  }

  #[test]
  fn test_evaluates_translated_infix() {
    let postfix = to_postfix("((1 + 2) - 3 * (8 / 4)) + 5").unwrap();
    assert_eq!(postfix, "12+384/*-5+");
    assert_eq!(evaluate(&postfix), Ok(2));
  }

  #[test]
  fn test_evaluates_translated_infix_without_parentheses() {
    let cases = [("8 - 3 - 2", 3), ("8 / 2 / 2", 2), ("1 + 2 * 3 - 4 / 2", 5), ("9 - 2 * 3 + 1", 4)];
    for (infix, expected) in cases {
      let postfix = to_postfix(infix).unwrap();
      assert_eq!(evaluate(&postfix), Ok(expected), "{infix:?} translated to {postfix:?}");
    }
  }

  /// A random infix expression over single digits. It renders with as
  /// few parentheses as precedence and left associativity allow, and
  /// its value is computed directly by recursion over the tree.
  #[derive(Debug, Clone)]
  enum Infix {
    Digit(u32),
    Binary(Box<Infix>, BinaryOperator, Box<Infix>),
  }

  impl Infix {
    fn render(&self) -> String {
      match self {
        Infix::Digit(d) => d.to_string(),
        Infix::Binary(left, op, right) => {
          let left = left.render_operand(op.precedence(), false);
          let right = right.render_operand(op.precedence(), true);
          format!("{left} {op} {right}")
        }
      }
    }

    /// Renders `self` as an operand of an operator with precedence
    /// `parent`.
    fn render_operand(&self, parent: Precedence, on_right: bool) -> String {
      match self {
        Infix::Binary(_, op, _) if op.precedence() < parent || (on_right && op.precedence() == parent) => {
          format!("({})", self.render())
        }
        _ => self.render(),
      }
    }

    fn value(&self) -> f64 {
      match self {
        Infix::Digit(d) => f64::from(*d),
        Infix::Binary(left, op, right) => {
          let (left, right) = (left.value(), right.value());
          match op {
            BinaryOperator::Add => left + right,
            BinaryOperator::Subtract => left - right,
            BinaryOperator::Multiply => left * right,
            BinaryOperator::Divide => left / right,
          }
        }
      }
    }
  }

  fn infix() -> impl Strategy<Value = Infix> {
    let leaf = (0u32..10).prop_map(Infix::Digit);
    leaf.prop_recursive(4, 16, 2, |inner| {
      (inner.clone(), prop::sample::select(BinaryOperator::ALL.to_vec()), inner)
        .prop_map(|(left, op, right)| Infix::Binary(Box::new(left), op, Box::new(right)))
    })
  }

  #[test]
  fn test_infix_renders_minimal_parentheses() {
    let digit = |d| Box::new(Infix::Digit(d));
    let sub = |l, r| Box::new(Infix::Binary(l, BinaryOperator::Subtract, r));
    let tree = Infix::Binary(sub(digit(8), sub(digit(3), digit(2))), BinaryOperator::Multiply, digit(4));
    assert_eq!(tree.render(), "(8 - (3 - 2)) * 4");
    let tree = Infix::Binary(sub(digit(8), digit(3)), BinaryOperator::Subtract, digit(2));
    assert_eq!(tree.render(), "8 - 3 - 2");
  }

  proptest! {
    #[test]
    fn postfix_round_trip_matches_direct_evaluation(expr in infix()) {
      let postfix = to_postfix(&expr.render()).unwrap();
      let expected = expr.value();
      let actual = evaluate_float(&postfix).unwrap();
      if expected.is_nan() {
        prop_assert!(actual.is_nan());
      } else {
        prop_assert_eq!(actual, expected);
      }
    }
  }
}
