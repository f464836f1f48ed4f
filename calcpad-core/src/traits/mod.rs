//! Hardware abstraction traits
//!
//! These traits define the interface between the calculator logic
//! and hardware-specific implementations.

pub mod display;
pub mod keypad;

pub use display::{DisplayError, DisplayExt, TextDisplay};
pub use keypad::KeySource;
