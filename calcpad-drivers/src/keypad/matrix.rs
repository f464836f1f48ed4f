//! 4x4 membrane keypad
//!
//! Rows are outputs, idle high. Columns are inputs with pull-ups. Scanning
//! drives one row low at a time; a pressed key pulls its column low.

use calcpad_core::config::{KeypadLayout, DEFAULT_LAYOUT, KEYPAD_COLS, KEYPAD_ROWS};
use calcpad_core::traits::KeySource;
use calcpad_hal::{InputPin, OutputPin};

/// Matrix keypad scanner with press-edge detection
pub struct MatrixKeypad<R, C> {
    rows: [R; KEYPAD_ROWS],
    cols: [C; KEYPAD_COLS],
    layout: KeypadLayout,
    /// Key seen on the previous scan
    last: Option<char>,
}

impl<R: OutputPin, C: InputPin> MatrixKeypad<R, C> {
    /// Create a scanner with the given layout
    pub fn new(rows: [R; KEYPAD_ROWS], cols: [C; KEYPAD_COLS], layout: KeypadLayout) -> Self {
        let mut keypad = Self {
            rows,
            cols,
            layout,
            last: None,
        };
        keypad.release_rows();
        keypad
    }

    /// Create a scanner with the board's default layout
    pub fn with_default_layout(rows: [R; KEYPAD_ROWS], cols: [C; KEYPAD_COLS]) -> Self {
        Self::new(rows, cols, DEFAULT_LAYOUT)
    }

    fn release_rows(&mut self) {
        for row in &mut self.rows {
            row.set_high();
        }
    }

    /// Return the key currently held down, if any
    ///
    /// With several keys down, the first in row-major order wins.
    pub fn scan(&mut self) -> Option<char> {
        let mut found = None;

        for r in 0..KEYPAD_ROWS {
            self.rows[r].set_low();
            let hit = self.cols.iter().position(|col| col.is_low());
            self.rows[r].set_high();

            if let Some(c) = hit {
                found = Some(self.layout[r][c]);
                break;
            }
        }

        found
    }

    /// Key seen on the last scan
    pub fn held(&self) -> Option<char> {
        self.last
    }
}

impl<R: OutputPin, C: InputPin> KeySource for MatrixKeypad<R, C> {
    /// Report a key once when it goes down
    ///
    /// Holding a key yields `None` on later polls; pressing a different key
    /// while one is held reports the new key.
    fn poll(&mut self) -> Option<char> {
        let current = self.scan();
        let pressed = if current != self.last { current } else { None };
        self.last = current;
        pressed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    /// Electrical model of the matrix: which row is driven and which key is down
    struct Matrix {
        row_low: [Cell<bool>; KEYPAD_ROWS],
        pressed: Cell<Option<(usize, usize)>>,
    }

    impl Matrix {
        fn new() -> Self {
            Self {
                row_low: Default::default(),
                pressed: Cell::new(None),
            }
        }

        fn press(&self, row: usize, col: usize) {
            self.pressed.set(Some((row, col)));
        }

        fn release(&self) {
            self.pressed.set(None);
        }
    }

    struct RowPin<'a> {
        matrix: &'a Matrix,
        row: usize,
    }

    impl OutputPin for RowPin<'_> {
        fn set_high(&mut self) {
            self.matrix.row_low[self.row].set(false);
        }

        fn set_low(&mut self) {
            self.matrix.row_low[self.row].set(true);
        }

        fn is_set_high(&self) -> bool {
            !self.matrix.row_low[self.row].get()
        }
    }

    struct ColPin<'a> {
        matrix: &'a Matrix,
        col: usize,
    }

    impl InputPin for ColPin<'_> {
        fn is_high(&self) -> bool {
            match self.matrix.pressed.get() {
                Some((r, c)) if c == self.col => !self.matrix.row_low[r].get(),
                _ => true,
            }
        }
    }

    fn keypad(matrix: &Matrix) -> MatrixKeypad<RowPin<'_>, ColPin<'_>> {
        let rows = core::array::from_fn(|row| RowPin { matrix, row });
        let cols = core::array::from_fn(|col| ColPin { matrix, col });
        MatrixKeypad::with_default_layout(rows, cols)
    }

    #[test]
    fn test_rows_idle_high() {
        let matrix = Matrix::new();
        let mut kp = keypad(&matrix);
        kp.scan();
        assert!(matrix.row_low.iter().all(|r| !r.get()));
    }

    #[test]
    fn test_scan_layout() {
        let matrix = Matrix::new();
        let mut kp = keypad(&matrix);

        assert_eq!(kp.scan(), None);

        for (r, row) in DEFAULT_LAYOUT.iter().enumerate() {
            for (c, &ch) in row.iter().enumerate() {
                matrix.press(r, c);
                assert_eq!(kp.scan(), Some(ch));
            }
        }
    }

    #[test]
    fn test_held_key_reported_once() {
        let matrix = Matrix::new();
        let mut kp = keypad(&matrix);

        matrix.press(0, 0);
        assert_eq!(kp.poll(), Some('7'));
        assert_eq!(kp.poll(), None);
        assert_eq!(kp.poll(), None);
        assert_eq!(kp.held(), Some('7'));

        matrix.release();
        assert_eq!(kp.poll(), None);
        assert_eq!(kp.held(), None);

        matrix.press(0, 0);
        assert_eq!(kp.poll(), Some('7'));
    }

    #[test]
    fn test_key_change_while_held() {
        let matrix = Matrix::new();
        let mut kp = keypad(&matrix);

        matrix.press(3, 3);
        assert_eq!(kp.poll(), Some('+'));
        matrix.press(3, 2);
        assert_eq!(kp.poll(), Some('='));
    }

    #[test]
    fn test_custom_layout() {
        let matrix = Matrix::new();
        let rows = core::array::from_fn(|row| RowPin { matrix: &matrix, row });
        let cols = core::array::from_fn(|col| ColPin { matrix: &matrix, col });
        let layout = [
            ['1', '2', '3', '+'],
            ['4', '5', '6', '-'],
            ['7', '8', '9', 'x'],
            ['C', '0', '=', '/'],
        ];
        let mut kp = MatrixKeypad::new(rows, cols, layout);

        matrix.press(0, 0);
        assert_eq!(kp.poll(), Some('1'));
    }
}
