//! Operand accumulator
//!
//! Buffers digit characters as text. Parsing is deferred until the operand
//! is finalized by an operator or `=`.

use heapless::String;

/// Hard upper bound on operand length in characters
pub const MAX_OPERAND_LEN: usize = 20;

/// Bounded text buffer for the operand currently being typed
///
/// Only ASCII digits are accepted, so the content always parses to a
/// finite number when non-empty. Pushing past the limit is a silent no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperandBuffer {
    text: String<MAX_OPERAND_LEN>,
    limit: usize,
}

impl Default for OperandBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl OperandBuffer {
    /// Create an empty buffer holding up to [`MAX_OPERAND_LEN`] digits
    pub const fn new() -> Self {
        Self {
            text: String::new(),
            limit: MAX_OPERAND_LEN,
        }
    }

    /// Create an empty buffer with a smaller digit limit
    ///
    /// The limit is clamped to `1..=MAX_OPERAND_LEN`.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            text: String::new(),
            limit: limit.clamp(1, MAX_OPERAND_LEN),
        }
    }

    /// Append a digit
    ///
    /// Returns `false` (and leaves the buffer unchanged) when the buffer is
    /// full or `digit` is not `'0'..='9'`.
    pub fn push(&mut self, digit: char) -> bool {
        if !digit.is_ascii_digit() || self.is_full() {
            return false;
        }
        self.text.push(digit).is_ok()
    }

    /// Current buffered text
    pub fn as_str(&self) -> &str {
        self.text.as_str()
    }

    /// Clear the buffer
    pub fn reset(&mut self) {
        self.text.clear();
    }

    /// Numeric value of the buffered text; empty parses as 0
    pub fn value(&self) -> f32 {
        if self.text.is_empty() {
            return 0.0;
        }
        // Digits only, so parsing cannot fail; 0.0 keeps this total anyway.
        self.text.parse::<f32>().unwrap_or(0.0)
    }

    /// Number of buffered digits
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if no digits are buffered
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Maximum number of digits this buffer accepts
    pub fn capacity(&self) -> usize {
        self.limit
    }

    /// Check if another digit would be rejected
    pub fn is_full(&self) -> bool {
        self.text.len() >= self.limit
    }
}
