
//! Restores the left parentheses of an expression that only spells
//! out its right parentheses.

use super::error::{ExprError, Malformed};
use super::operator::BinaryOperator;
use super::postfix::sole_result;
use super::source::{end_of, positioned_chars};
use super::token::{BracketKind, CharClass};
use crate::stack::DynamicStack;

/// Inserts the missing left parentheses into `expression`.
///
/// Each `)` combines the two most recent operands (digits or already
/// parenthesized groups) with the most recent operator. Whitespace and
/// any other character are ignored. The result is the single group
/// left at the end, so input without any `)` is rejected.
///
/// ```text
/// reconstruct("1+2)*3-4)*5-6)))") == "((1+2)*((3-4)*(5-6)))"
/// ```
pub fn reconstruct(expression: &str) -> Result<String, ExprError> {
  let mut operands: DynamicStack<String> = DynamicStack::new();
  let mut operators: DynamicStack<BinaryOperator> = DynamicStack::new();
  let mut grouped = false;
  for (position, c) in positioned_chars(expression) {
    match CharClass::of(c) {
      CharClass::Operand(d) if d.is_ascii_digit() => {
        operands.push(d.to_string());
      }
      CharClass::Operator(op) => {
        operators.push(op);
      }
      CharClass::Close(BracketKind::Paren) => {
        if operands.len() < 2 {
          return Err(ExprError::malformed(position, Malformed::MissingOperand));
        }
        let op = operators.pop()
          .map_err(|_| ExprError::malformed(position, Malformed::MissingOperator))?;
        let right = operands.pop().map_err(|_| ExprError::malformed(position, Malformed::MissingOperand))?;
        let left = operands.pop().map_err(|_| ExprError::malformed(position, Malformed::MissingOperand))?;
        operands.push(format!("({left}{op}{right})"));
        grouped = true;
      }
      _ => {
        tracing::trace!(%position, character = %c, "skipping character");
      }
    }
  }

  let end = end_of(expression);
  if !operators.is_empty() {
    return Err(ExprError::malformed(end, Malformed::LeftoverOperators { count: operators.len() }));
  }
  let result = sole_result(operands, end)?;
  if !grouped {
    return Err(ExprError::malformed(end, Malformed::Ungrouped));
  }
  Ok(result)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::expr::source::SourceOffset;

  use itertools::Itertools;

  #[test]
  fn test_reconstruct() {
    assert_eq!(reconstruct("1+2)*3-4)*5-6)))"), Ok(String::from("((1+2)*((3-4)*(5-6)))")));
    assert_eq!(reconstruct("1+2)"), Ok(String::from("(1+2)")));
  }

  #[test]
  fn test_operand_after_group() {
    assert_eq!(reconstruct("1+2)*3)"), Ok(String::from("((1+2)*3)")));
    assert_eq!(reconstruct("1*2+3))"), Ok(String::from("(1*(2+3))")));
  }

  #[test]
  fn test_ignores_other_characters() {
    assert_eq!(reconstruct("1+2)*3-4)*(5-6)))"), Ok(String::from("((1+2)*((3-4)*(5-6)))")));
    assert_eq!(reconstruct(" 1 + 2 ) "), Ok(String::from("(1+2)")));
  }

  #[test]
  fn test_lone_operand_is_not_a_group() {
    assert_eq!(reconstruct("7"), Err(ExprError::malformed(SourceOffset(1), Malformed::Ungrouped)));
    assert_eq!(reconstruct(" 7 "), Err(ExprError::malformed(SourceOffset(3), Malformed::Ungrouped)));
  }

  #[test]
  fn test_closing_paren_without_operands() {
    assert_eq!(reconstruct("1+)"), Err(ExprError::malformed(SourceOffset(2), Malformed::MissingOperand)));
    assert_eq!(reconstruct(")"), Err(ExprError::malformed(SourceOffset(0), Malformed::MissingOperand)));
  }

  #[test]
  fn test_closing_paren_without_operator() {
    assert_eq!(reconstruct("12)"), Err(ExprError::malformed(SourceOffset(2), Malformed::MissingOperator)));
  }

  #[test]
  fn test_missing_closing_parens() {
    assert_eq!(
      reconstruct("1+2)*3"),
      Err(ExprError::malformed(SourceOffset(6), Malformed::LeftoverOperators { count: 1 })),
    );
    assert_eq!(
      reconstruct("1+2)3"),
      Err(ExprError::malformed(SourceOffset(5), Malformed::LeftoverOperands { count: 1 })),
    );
  }

  #[test]
  fn test_empty() {
    assert_eq!(reconstruct(""), Err(ExprError::malformed(SourceOffset(0), Malformed::Empty)));
  }

  #[test]
  fn test_preserves_operands_and_operators() {
    let input = "1+2)*3-4)*5-6)))";
    let output = reconstruct(input).unwrap();
    let significant = |s: &str| s.chars().filter(|c| !"()".contains(*c)).collect::<String>();
    assert_eq!(significant(&output), significant(input));
    let (open, close) = output.chars().fold((0, 0), |(open, close), c| match c {
      '(' => (open + 1, close),
      ')' => (open, close + 1),
      _ => (open, close),
    });
    assert_eq!(open, 5);
    assert_eq!(close, input.chars().filter(|c| *c == ')').count());
    // Every operator sits in its own group.
    assert_eq!(output.chars().filter(|c| "+-*/".contains(*c)).count(), open);
    assert!(output.chars().tuple_windows().all(|(a, b)| !(a == '(' && b == ')')));
  }
}
