//! Character display trait

use crate::state::DisplayCommand;

/// Errors that can occur when driving a display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Row or column outside the display
    InvalidCoordinates,
    /// Display used before initialization
    NotInitialized,
}

/// Trait for row/column text displays
///
/// Rows and columns are 0-based. Text running past the last column is
/// clipped by the implementation.
pub trait TextDisplay {
    /// Clear every row
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Write text starting at a position
    ///
    /// - `row`: Row number
    /// - `col`: Column number
    /// - `text`: Text to display
    fn write_text(&mut self, row: u8, col: u8, text: &str) -> Result<(), DisplayError>;

    /// Display dimensions as (columns, rows)
    fn dimensions(&self) -> (u8, u8);
}

/// Helpers built on [`TextDisplay`]
pub trait DisplayExt: TextDisplay {
    /// Apply a command produced by the calculator
    fn apply(&mut self, command: &DisplayCommand) -> Result<(), DisplayError> {
        match command {
            DisplayCommand::Clear => self.clear(),
            DisplayCommand::Write { row, col, text } => self.write_text(*row, *col, text),
        }
    }

    /// Show two lines from the first column, clearing first
    fn show_lines(&mut self, top: &str, bottom: &str) -> Result<(), DisplayError> {
        self.clear()?;
        self.write_text(0, 0, top)?;
        self.write_text(1, 0, bottom)
    }
}

impl<T: TextDisplay> DisplayExt for T {}
