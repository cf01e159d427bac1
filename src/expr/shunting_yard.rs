
//! Infix to postfix translation with the shunting yard algorithm.
//!
//! Operands and operators are single characters. Only parentheses
//! group; square and curly brackets are skipped along with
//! whitespace and any other unrecognized character.

use super::error::{ExprError, Malformed};
use super::operator::BinaryOperator;
use super::source::{positioned_chars, SourceOffset};
use super::token::{BracketKind, CharClass};
use crate::stack::{DynamicStack, StackLike};

#[derive(Clone, Copy, Debug)]
enum OpStackValue {
  Operator(BinaryOperator),
  OpenParen(SourceOffset),
}

/// Converts an infix expression to postfix (Reverse Polish) form.
///
/// ```text
/// to_postfix("A + B * C + D")   == "ABC*+D+"
/// to_postfix("(A + B) * C - D") == "AB+C*D-"
/// ```
pub fn to_postfix(expression: &str) -> Result<String, ExprError> {
  let mut output = String::with_capacity(expression.len());
  let mut operator_stack: DynamicStack<OpStackValue> = DynamicStack::new();
  for (position, c) in positioned_chars(expression) {
    match CharClass::of(c) {
      CharClass::Operand(operand) => {
        output.push(operand);
      }
      CharClass::Open(BracketKind::Paren) => {
        operator_stack.push(OpStackValue::OpenParen(position));
      }
      CharClass::Close(BracketKind::Paren) => {
        // Pop operators until we hit the matching paren.
        loop {
          match operator_stack.pop() {
            Ok(OpStackValue::Operator(op)) => output.push(op.symbol()),
            Ok(OpStackValue::OpenParen(_)) => break,
            Err(_) => return Err(ExprError::malformed(position, Malformed::UnmatchedClosingParen)),
          }
        }
      }
      CharClass::Operator(op) => {
        // Pop operators until we hit one with lower precedence.
        while let Some(&OpStackValue::Operator(stack_op)) = operator_stack.peek() {
          if !stack_op.yields_to(op) {
            break;
          }
          operator_stack.pop_and_discard();
          output.push(stack_op.symbol());
        }
        operator_stack.push(OpStackValue::Operator(op));
      }
      _ => {
        tracing::trace!(%position, character = %c, "skipping character");
      }
    }
  }

  // Pop and emit remaining operators.
  while let Ok(stack_value) = operator_stack.pop() {
    match stack_value {
      OpStackValue::Operator(op) => output.push(op.symbol()),
      OpStackValue::OpenParen(position) => return Err(ExprError::malformed(position, Malformed::UnclosedParen)),
    }
  }
  Ok(output)
}
