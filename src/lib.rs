
pub mod expr;
pub mod stack;
