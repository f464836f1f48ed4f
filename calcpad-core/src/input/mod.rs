//! Keypad input
//!
//! The key vocabulary and the buffer that accumulates digits into an
//! operand before it is finalized.

pub mod accumulator;
pub mod key;

pub use accumulator::{OperandBuffer, MAX_OPERAND_LEN};
pub use key::{Key, Operator};
