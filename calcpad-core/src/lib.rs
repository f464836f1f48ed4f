//! Board-agnostic core logic for the keypad calculator firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Key vocabulary and the operand accumulator
//! - Calculator state machine
//! - Evaluator (four functions, zero-divisor policy)
//! - Display and keypad traits
//! - In-memory screen buffer
//! - Configuration types and parser

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod eval;
pub mod input;
pub mod screen;
pub mod state;
pub mod traits;

pub use eval::evaluate;
pub use input::{Key, OperandBuffer, Operator};
pub use screen::Screen;
pub use state::{Calculator, CalculatorState, DisplayCommand, Phase};
