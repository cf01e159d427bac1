
//! Stack-driven expression algorithms.
//!
//! Every algorithm scans its input once, left to right, with one or
//! two [`DynamicStack`](crate::stack::DynamicStack)s as working
//! storage. Operands are single characters and the only operators are
//! the four binary ones in [`BinaryOperator`].

pub mod brackets;
pub mod calculator;
mod error;
pub mod infix;
pub mod operator;
pub mod postfix;
pub mod shunting_yard;
pub mod source;
pub mod token;

pub use brackets::{is_balanced, BracketPolicy, BracketValidator};
pub use calculator::calculate;
pub use error::{ArithmeticError, ExprError, Malformed};
pub use infix::reconstruct;
pub use operator::{BinaryOperator, Precedence};
pub use postfix::{evaluate, evaluate_as, evaluate_float, Operand};
pub use shunting_yard::to_postfix;
pub use source::SourceOffset;
