
//! Dijkstra's two-stack evaluation of fully parenthesized infix
//! expressions.

use super::error::{ExprError, Malformed};
use super::operator::BinaryOperator;
use super::postfix::{sole_result, Operand};
use super::source::{end_of, positioned_chars, SourceOffset};
use super::token::{digit_value, BracketKind, CharClass};
use crate::stack::DynamicStack;

/// Evaluates a fully parenthesized expression such as
/// `"(1+((2+3)*(4*5)))"`.
///
/// Every operator must be enclosed in its own pair of parentheses;
/// precedence plays no role. Left parentheses and whitespace are not
/// significant, so the input may also omit its left parentheses.
pub fn calculate(expression: &str) -> Result<f64, ExprError> {
  let mut operands: DynamicStack<f64> = DynamicStack::new();
  let mut operators: DynamicStack<BinaryOperator> = DynamicStack::new();
  for (position, c) in positioned_chars(expression) {
    match CharClass::of(c) {
      CharClass::Operator(op) => {
        operators.push(op);
      }
      CharClass::Close(BracketKind::Paren) => {
        let op = operators.pop()
          .map_err(|_| ExprError::malformed(position, Malformed::MissingOperator))?;
        let right = operands.pop().map_err(|_| missing_operand(position))?;
        let left = operands.pop().map_err(|_| missing_operand(position))?;
        // Floating arithmetic never fails.
        let result = f64::apply(op, left, right)
          .map_err(|reason| ExprError::Arithmetic { position, reason })?;
        operands.push(result);
      }
      CharClass::Open(BracketKind::Paren) | CharClass::Whitespace => {}
      _ => {
        let digit = digit_value(c).ok_or(ExprError::invalid_token(c, position))?;
        operands.push(f64::from_digit(digit));
      }
    }
  }

  let end = end_of(expression);
  if !operators.is_empty() {
    return Err(ExprError::malformed(end, Malformed::LeftoverOperators { count: operators.len() }));
  }
  sole_result(operands, end)
}

fn missing_operand(position: SourceOffset) -> ExprError {
  ExprError::malformed(position, Malformed::MissingOperand)
}
