//! Screen buffer
//!
//! Character buffer mirroring a text-mode LCD. The firmware keeps one as a
//! shadow copy of the panel for logging; tests use it as the display.

use crate::traits::{DisplayError, TextDisplay};

/// Maximum character rows supported (4-line HD44780 modules)
pub const MAX_ROWS: usize = 4;

/// Maximum character columns supported
pub const MAX_COLS: usize = 20;

/// Default geometry: 16x2 module
pub const DEFAULT_ROWS: u8 = 2;
pub const DEFAULT_COLS: u8 = 16;

/// Map a character to the byte a HD44780 (ROM A00) can show
///
/// ASCII passes through, accented Latin vowels lose their accent,
/// everything else becomes `?`.
pub fn lcd_char(c: char) -> u8 {
    if c.is_ascii() && !c.is_ascii_control() {
        return c as u8;
    }
    let plain = match c {
        'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
        'Á' | 'À' | 'Â' | 'Ã' | 'Ä' => 'A',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'É' | 'È' | 'Ê' | 'Ë' => 'E',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'Í' | 'Ì' | 'Î' | 'Ï' => 'I',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
        'Ó' | 'Ò' | 'Ô' | 'Õ' | 'Ö' => 'O',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'Ú' | 'Ù' | 'Û' | 'Ü' => 'U',
        'ç' => 'c',
        'Ç' => 'C',
        'ñ' => 'n',
        'Ñ' => 'N',
        _ => '?',
    };
    plain as u8
}

/// Text-mode screen buffer
#[derive(Clone, PartialEq, Eq)]
pub struct Screen {
    cells: [[u8; MAX_COLS]; MAX_ROWS],
    rows: u8,
    cols: u8,
    dirty: bool,
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen {
    /// Create a blank 16x2 screen
    pub const fn new() -> Self {
        Self {
            cells: [[b' '; MAX_COLS]; MAX_ROWS],
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            dirty: true,
        }
    }

    /// Create a blank screen with the given geometry
    ///
    /// Dimensions are clamped to [`MAX_COLS`] x [`MAX_ROWS`].
    pub fn with_size(cols: u8, rows: u8) -> Self {
        Self {
            cols: cols.clamp(1, MAX_COLS as u8),
            rows: rows.clamp(1, MAX_ROWS as u8),
            ..Self::new()
        }
    }

    /// Full-width content of a row, including trailing blanks
    pub fn line(&self, row: usize) -> Option<&str> {
        if row >= self.rows as usize {
            return None;
        }
        let cells = &self.cells[row][..self.cols as usize];
        // Cells only ever hold printable ASCII
        Some(core::str::from_utf8(cells).unwrap_or(""))
    }

    /// Content of a row with trailing blanks removed
    pub fn text(&self, row: usize) -> Option<&str> {
        self.line(row).map(str::trim_end)
    }

    /// All rows, full width
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        (0..self.rows as usize).filter_map(move |row| self.line(row))
    }

    /// Check if screen changed since last [`Screen::mark_clean`]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark screen as clean (after rendering)
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }
}

impl TextDisplay for Screen {
    fn clear(&mut self) -> Result<(), DisplayError> {
        for row in &mut self.cells {
            row.fill(b' ');
        }
        self.dirty = true;
        Ok(())
    }

    fn write_text(&mut self, row: u8, col: u8, text: &str) -> Result<(), DisplayError> {
        if row >= self.rows || col >= self.cols {
            return Err(DisplayError::InvalidCoordinates);
        }
        let cells = &mut self.cells[row as usize][col as usize..self.cols as usize];
        for (cell, c) in cells.iter_mut().zip(text.chars()) {
            *cell = lcd_char(c);
        }
        self.dirty = true;
        Ok(())
    }

    fn dimensions(&self) -> (u8, u8) {
        (self.cols, self.rows)
    }
}

impl core::fmt::Debug for Screen {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.lines()).finish()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Screen {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Screen[");
        for (i, line) in self.lines().enumerate() {
            if i > 0 {
                defmt::write!(f, ", ");
            }
            defmt::write!(f, "{}", line);
        }
        defmt::write!(f, "]");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Calculator;
    use crate::traits::DisplayExt;

    fn run(screen: &mut Screen, calc: &mut Calculator, keys: &str) {
        for c in keys.chars() {
            if let Some(cmd) = calc.handle_char(c) {
                screen.apply(&cmd).unwrap();
            }
        }
    }

    #[test]
    fn test_new_screen_is_blank() {
        let screen = Screen::new();
        assert_eq!(screen.dimensions(), (16, 2));
        assert_eq!(screen.line(0), Some("                "));
        assert_eq!(screen.text(1), Some(""));
        assert_eq!(screen.line(2), None);
    }

    #[test]
    fn test_write_overlays_from_column() {
        let mut screen = Screen::new();
        screen.write_text(0, 0, "abcdef").unwrap();
        screen.write_text(0, 2, "XY").unwrap();
        assert_eq!(screen.text(0), Some("abXYef"));
    }

    #[test]
    fn test_write_clips_at_right_edge() {
        let mut screen = Screen::new();
        screen.write_text(1, 0, "Resultado: 12345678.00").unwrap();
        assert_eq!(screen.line(1), Some("Resultado: 12345"));
    }

    #[test]
    fn test_invalid_coordinates() {
        let mut screen = Screen::new();
        assert_eq!(
            screen.write_text(2, 0, "x"),
            Err(DisplayError::InvalidCoordinates)
        );
        assert_eq!(
            screen.write_text(0, 16, "x"),
            Err(DisplayError::InvalidCoordinates)
        );
    }

    #[test]
    fn test_accents_are_transliterated() {
        let mut screen = Screen::with_size(20, 4);
        screen.write_text(0, 0, "Calculadora Básica").unwrap();
        assert_eq!(screen.text(0), Some("Calculadora Basica"));
        screen.write_text(1, 0, "→").unwrap();
        assert_eq!(screen.text(1), Some("?"));
    }

    #[test]
    fn test_dirty_tracking() {
        let mut screen = Screen::new();
        assert!(screen.is_dirty());
        screen.mark_clean();
        assert!(!screen.is_dirty());
        screen.clear().unwrap();
        assert!(screen.is_dirty());
    }

    #[test]
    fn test_show_lines() {
        let mut screen = Screen::new();
        screen.write_text(1, 0, "old text here").unwrap();
        screen.show_lines("Calculadora", "Aguarde...").unwrap();
        assert_eq!(screen.text(0), Some("Calculadora"));
        assert_eq!(screen.text(1), Some("Aguarde..."));
    }

    #[test]
    fn test_calculator_session() {
        let mut screen = Screen::new();
        let mut calc = Calculator::new();

        run(&mut screen, &mut calc, "5");
        assert_eq!(screen.text(1), Some("Entrada: 5"));

        run(&mut screen, &mut calc, "+");
        assert_eq!(screen.text(0), Some(""));
        assert_eq!(screen.text(1), Some(""));

        run(&mut screen, &mut calc, "3=");
        assert_eq!(screen.text(0), Some("Resultado: 8.00"));
        assert_eq!(screen.text(1), Some("Entrada: 3"));

        run(&mut screen, &mut calc, "C");
        assert_eq!(screen.text(0), Some(""));
        assert_eq!(screen.text(1), Some(""));
    }

    #[test]
    fn test_smallest_accepted_geometry_takes_every_command() {
        use crate::config::MIN_DISPLAY_ROWS;

        let mut screen = Screen::with_size(1, MIN_DISPLAY_ROWS);
        let mut calc = Calculator::new();
        run(&mut screen, &mut calc, "12+34=5x6C7/8=");
        assert_eq!(screen.text(0), Some("R"));
        assert_eq!(screen.text(1), Some("E"));
    }

    #[test]
    fn test_single_row_rejects_entry_line() {
        let mut screen = Screen::with_size(16, 1);
        let mut calc = Calculator::new();
        let cmd = calc.handle_char('5').unwrap();
        assert_eq!(screen.apply(&cmd), Err(DisplayError::InvalidCoordinates));
    }

    #[test]
    fn test_result_stays_until_overwritten() {
        let mut screen = Screen::new();
        let mut calc = Calculator::new();

        run(&mut screen, &mut calc, "9/0=");
        assert_eq!(screen.text(0), Some("Resultado: 0.00"));

        run(&mut screen, &mut calc, "4");
        assert_eq!(screen.text(0), Some("Resultado: 0.00"));
        assert_eq!(screen.text(1), Some("Entrada: 4"));
    }
}
