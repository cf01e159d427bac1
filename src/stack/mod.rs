
//! LIFO containers.
//!
//! [`DynamicStack`] is the workhorse used by the expression
//! algorithms. [`FixedCapacityStack`] and [`LinkedStack`] offer the
//! same interface over bounded and node-based storage.

pub mod base;
mod dynamic;
mod error;
mod fixed;
mod linked;
mod slots;

pub use base::StackLike;
pub use dynamic::{Cursor, DynamicStack};
pub use error::StackError;
pub use fixed::FixedCapacityStack;
pub use linked::LinkedStack;

pub mod iter {
  pub use super::dynamic::IntoIter as DynamicIntoIter;
  pub use super::linked::{IntoIter as LinkedIntoIter, Iter as LinkedIter};
}
