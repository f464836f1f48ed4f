//! Configuration type definitions

use heapless::String;

use crate::input::MAX_OPERAND_LEN;
use crate::screen::{DEFAULT_COLS, DEFAULT_ROWS, MAX_COLS, MAX_ROWS};
use crate::state::ENTRY_ROW;

/// Maximum banner line length in characters
pub const MAX_BANNER_LEN: usize = 32;

/// Fewest display rows that fit both the result and the entry line
pub const MIN_DISPLAY_ROWS: u8 = ENTRY_ROW + 1;

/// Keypad matrix rows
pub const KEYPAD_ROWS: usize = 4;

/// Keypad matrix columns
pub const KEYPAD_COLS: usize = 4;

/// Keypad layout, `[row][col]`
pub type KeypadLayout = [[char; KEYPAD_COLS]; KEYPAD_ROWS];

/// Layout of the board's 4x4 membrane keypad
pub const DEFAULT_LAYOUT: KeypadLayout = [
    ['7', '8', '9', '/'],
    ['4', '5', '6', 'x'],
    ['1', '2', '3', '-'],
    ['C', '0', '=', '+'],
];

/// Calculator behaviour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CalculatorConfig {
    /// Maximum digits per operand (1-20)
    pub input_capacity: u8,
    /// Keypad poll period in milliseconds
    pub poll_interval_ms: u32,
    /// How long the startup banner stays up, in milliseconds
    pub settle_ms: u32,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            input_capacity: MAX_OPERAND_LEN as u8,
            poll_interval_ms: 100,
            settle_ms: 1000,
        }
    }
}

/// Character LCD geometry and startup banner
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayConfig {
    /// Visible columns
    pub cols: u8,
    /// Visible rows
    pub rows: u8,
    /// Banner first line
    pub banner_top: String<MAX_BANNER_LEN>,
    /// Banner second line
    pub banner_bottom: String<MAX_BANNER_LEN>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        let mut banner_top = String::new();
        let _ = banner_top.push_str("Calculadora Básica");
        let mut banner_bottom = String::new();
        let _ = banner_bottom.push_str("Aguarde...");
        Self {
            cols: DEFAULT_COLS,
            rows: DEFAULT_ROWS,
            banner_top,
            banner_bottom,
        }
    }
}

/// Keypad matrix layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeypadConfig {
    /// Character under each key
    pub layout: KeypadLayout,
}

impl Default for KeypadConfig {
    fn default() -> Self {
        Self {
            layout: DEFAULT_LAYOUT,
        }
    }
}

/// Complete firmware configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CalcpadConfig {
    pub calculator: CalculatorConfig,
    pub display: DisplayConfig,
    pub keypad: KeypadConfig,
}

impl CalcpadConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Check value ranges
    pub fn is_valid(&self) -> bool {
        let calc = &self.calculator;
        (1..=MAX_OPERAND_LEN as u8).contains(&calc.input_capacity)
            && calc.poll_interval_ms > 0
            && (1..=MAX_COLS as u8).contains(&self.display.cols)
            && (MIN_DISPLAY_ROWS..=MAX_ROWS as u8).contains(&self.display.rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Key;

    #[test]
    fn test_defaults() {
        let config = CalcpadConfig::new();
        assert_eq!(config.calculator.input_capacity, 20);
        assert_eq!(config.calculator.poll_interval_ms, 100);
        assert_eq!(config.calculator.settle_ms, 1000);
        assert_eq!(config.display.cols, 16);
        assert_eq!(config.display.rows, 2);
        assert_eq!(config.display.banner_top.as_str(), "Calculadora Básica");
        assert_eq!(config.display.banner_bottom.as_str(), "Aguarde...");
        assert!(config.is_valid());
    }

    #[test]
    fn test_default_layout_is_all_keys() {
        for row in DEFAULT_LAYOUT {
            for c in row {
                assert!(Key::from_char(c).is_some(), "{:?} is not a key", c);
            }
        }
    }

    #[test]
    fn test_invalid_ranges() {
        let mut config = CalcpadConfig::new();
        config.calculator.input_capacity = 21;
        assert!(!config.is_valid());

        let mut config = CalcpadConfig::new();
        config.display.rows = 5;
        assert!(!config.is_valid());

        // Entry line would have nowhere to go
        let mut config = CalcpadConfig::new();
        config.display.rows = 1;
        assert!(!config.is_valid());

        let mut config = CalcpadConfig::new();
        config.calculator.poll_interval_ms = 0;
        assert!(!config.is_valid());
    }
}
