//! Calculator state machine
//!
//! Consumes one key at a time and produces the next state plus at most one
//! display command. Every key sequence is accepted.

pub mod effects;
pub mod machine;

pub use effects::{DisplayCommand, ENTRY_ROW, RESULT_ROW};
pub use machine::{Calculator, CalculatorState, Phase};
