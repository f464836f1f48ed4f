//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in calcpad-core for the calculator board's peripherals:
//!
//! - Keypad (4x4 membrane matrix)
//! - Character LCD (HD44780, 4-bit bus)
//! - Digital I/O bank

#![no_std]
#![deny(unsafe_code)]

pub mod io;
pub mod keypad;
pub mod lcd;

#[cfg(test)]
pub(crate) mod mock;
