//! Display side effects of a transition

use core::fmt::Write;

use heapless::String;

/// Row showing the last result ("Resultado: ...")
pub const RESULT_ROW: u8 = 0;

/// Row showing the operand being typed ("Entrada: ...")
pub const ENTRY_ROW: u8 = 1;

/// Capacity of a display command's text
///
/// Wide enough for the result prefix plus any finite `f32` with two
/// decimals. The display clips to its own width.
pub const COMMAND_TEXT_LEN: usize = 64;

const ENTRY_PREFIX: &str = "Entrada: ";
const RESULT_PREFIX: &str = "Resultado: ";

/// A single display operation requested by the state machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayCommand {
    /// Clear every row
    Clear,
    /// Write text starting at (row, col)
    Write {
        row: u8,
        col: u8,
        text: String<COMMAND_TEXT_LEN>,
    },
}

impl DisplayCommand {
    /// `Entrada: <digits>` on the entry row
    pub fn entry(digits: &str) -> Self {
        let mut text = String::new();
        let _ = text.push_str(ENTRY_PREFIX);
        let _ = text.push_str(digits);
        DisplayCommand::Write {
            row: ENTRY_ROW,
            col: 0,
            text,
        }
    }

    /// `Resultado: <value>` with two decimals on the result row
    pub fn result(value: f32) -> Self {
        let mut text = String::new();
        // Cannot overflow: prefix + sign + 39 integer digits + ".00" < 64
        let _ = write!(text, "{}{:.2}", RESULT_PREFIX, value);
        DisplayCommand::Write {
            row: RESULT_ROW,
            col: 0,
            text,
        }
    }

    /// Text carried by a write command
    pub fn text(&self) -> Option<&str> {
        match self {
            DisplayCommand::Write { text, .. } => Some(text.as_str()),
            DisplayCommand::Clear => None,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for DisplayCommand {
    fn format(&self, f: defmt::Formatter) {
        match self {
            DisplayCommand::Clear => defmt::write!(f, "Clear"),
            DisplayCommand::Write { row, col, text } => {
                defmt::write!(f, "Write({}, {}, {})", row, col, text.as_str())
            }
        }
    }
}
