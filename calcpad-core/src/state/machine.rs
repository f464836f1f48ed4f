//! State machine definition
//!
//! All display output is a function of the current state and a key.

use super::effects::DisplayCommand;
use crate::eval::evaluate;
use crate::input::{Key, OperandBuffer, Operator};

/// Numeric state of the calculator
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CalculatorState {
    /// Operand finalized by the last operator key
    pub first_operand: f32,
    /// Operand finalized by the last `=`
    pub second_operand: f32,
    /// Operator awaiting its second operand
    pub pending_operator: Option<Operator>,
    /// Last evaluated result
    pub result: f32,
}

impl CalculatorState {
    /// Startup state: all zero, no operator
    pub const INITIAL: Self = Self {
        first_operand: 0.0,
        second_operand: 0.0,
        pending_operator: None,
        result: 0.0,
    };

    /// Which operand is being typed
    pub fn phase(&self) -> Phase {
        match self.pending_operator {
            None => Phase::AwaitingFirstOperand,
            Some(op) => Phase::AwaitingSecondOperand(op),
        }
    }
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::INITIAL
    }
}

/// Phase derived from which fields are set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// No operator pending; digits build the first operand
    AwaitingFirstOperand,
    /// Operator pending; digits build the second operand
    AwaitingSecondOperand(Operator),
}

/// Keypad calculator
///
/// Owns the operand buffer and numeric state. Call [`Calculator::handle_key`]
/// once per key press and apply the returned command to the display.
#[derive(Debug, Clone)]
pub struct Calculator {
    state: CalculatorState,
    input: OperandBuffer,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Create a calculator accepting operands of up to 20 digits
    pub const fn new() -> Self {
        Self {
            state: CalculatorState::INITIAL,
            input: OperandBuffer::new(),
        }
    }

    /// Create a calculator with a shorter operand limit
    pub fn with_input_limit(limit: usize) -> Self {
        Self {
            state: CalculatorState::INITIAL,
            input: OperandBuffer::with_limit(limit),
        }
    }

    /// Current numeric state
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Text of the operand being typed
    pub fn input(&self) -> &str {
        self.input.as_str()
    }

    /// Current phase
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Process a raw keypad character
    ///
    /// Characters outside the key vocabulary are ignored.
    pub fn handle_char(&mut self, c: char) -> Option<DisplayCommand> {
        Key::from_char(c).and_then(|key| self.handle_key(key))
    }

    /// Process a key and return the display command it produces, if any
    pub fn handle_key(&mut self, key: Key) -> Option<DisplayCommand> {
        match key {
            Key::Digit(_) => {
                if self.input.push(key.as_char()) {
                    Some(DisplayCommand::entry(self.input.as_str()))
                } else {
                    // Buffer full: digit dropped, display untouched
                    None
                }
            }
            Key::Operator(op) => {
                // A second operator press overwrites the first
                self.state.first_operand = self.input.value();
                self.state.pending_operator = Some(op);
                self.input.reset();
                Some(DisplayCommand::Clear)
            }
            Key::Equals => {
                self.state.second_operand = self.input.value();
                self.state.result = evaluate(
                    self.state.first_operand,
                    self.state.pending_operator,
                    self.state.second_operand,
                );
                self.state.pending_operator = None;
                self.input.reset();
                Some(DisplayCommand::result(self.state.result))
            }
            Key::Clear => {
                self.state = CalculatorState::INITIAL;
                self.input.reset();
                Some(DisplayCommand::Clear)
            }
        }
    }
}
