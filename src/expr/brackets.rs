
//! Bracket balance validation.

use super::source::{positioned_chars, SourceOffset};
use super::token::{BracketKind, CharClass};
use crate::stack::DynamicStack;

/// What to do with characters that are not brackets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BracketPolicy {
  /// Non-bracket characters are skipped, so `"(a + b)"` is balanced.
  #[default]
  IgnoreOthers,
  /// Any non-bracket character makes the expression unbalanced.
  RejectOthers,
}

/// Checks that every opening bracket in an expression is closed by a
/// bracket of the same family, in properly nested order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BracketValidator {
  policy: BracketPolicy,
}

impl BracketValidator {
  pub const fn new(policy: BracketPolicy) -> Self {
    Self { policy }
  }

  pub fn policy(&self) -> BracketPolicy {
    self.policy
  }

  pub fn is_balanced(&self, expression: &str) -> bool {
    self.find_imbalance(expression).is_none()
  }

  /// Returns the position of the first character that makes
  /// `expression` unbalanced, or `None` if it is balanced. An opening
  /// bracket that is never closed is reported at its own position.
  pub fn find_imbalance(&self, expression: &str) -> Option<SourceOffset> {
    let mut pending: DynamicStack<(BracketKind, SourceOffset)> = DynamicStack::new();
    for (position, c) in positioned_chars(expression) {
      match CharClass::of(c) {
        CharClass::Open(kind) => {
          pending.push((kind, position));
        }
        CharClass::Close(kind) => {
          let Ok((open_kind, open_position)) = pending.pop() else {
            tracing::trace!(%position, bracket = %c, "closing bracket with nothing open");
            return Some(position);
          };
          if open_kind != kind {
            tracing::trace!(%position, %open_position, bracket = %c, "mismatched bracket");
            return Some(position);
          }
        }
        _ => {
          if self.policy == BracketPolicy::RejectOthers {
            tracing::trace!(%position, character = %c, "non-bracket character rejected");
            return Some(position);
          }
        }
      }
    }
    pending.pop().ok().map(|(_, position)| position)
  }
}

/// Checks `expression` with the default [`BracketPolicy`].
pub fn is_balanced(expression: &str) -> bool {
  BracketValidator::default().is_balanced(expression)
}
