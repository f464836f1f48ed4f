//! Calcpad Hardware Abstraction Layer
//!
//! This crate defines the digital I/O traits the keypad, LCD and I/O bank
//! drivers are written against. Chip-specific glue (the RP2040 firmware)
//! implements them for its pin types, and host tests implement them with
//! mock pins.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  calcpad-firmware (RP2040 + Embassy)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  calcpad-drivers (keypad, LCD, I/O)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  calcpad-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;

pub use gpio::{InputPin, Level, OutputPin};
