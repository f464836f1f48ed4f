//! Digital I/O

pub mod bank;

pub use bank::IoBank;
