//! HD44780 character LCD on a 4-bit parallel bus
//!
//! Write-only wiring (R/W tied to ground), so the driver waits out the
//! datasheet execution times instead of polling the busy flag.

use calcpad_core::screen::{lcd_char, MAX_COLS, MAX_ROWS};
use calcpad_core::traits::{DisplayError, TextDisplay};
use calcpad_hal::{Level, OutputPin};
use embedded_hal::delay::DelayNs;

// Instructions
const CMD_CLEAR: u8 = 0x01;
const CMD_ENTRY_MODE: u8 = 0x04;
const CMD_DISPLAY_CONTROL: u8 = 0x08;
const CMD_FUNCTION_SET: u8 = 0x20;
const CMD_SET_DDRAM: u8 = 0x80;

// Flags
const ENTRY_INCREMENT: u8 = 0x02;
const DISPLAY_ON: u8 = 0x04;
const FUNCTION_2_LINE: u8 = 0x08;

/// DDRAM address of the first column of each row
const ROW_OFFSETS: [u8; MAX_ROWS] = [0x00, 0x40, 0x14, 0x54];

/// Execution time of most instructions
const EXEC_US: u32 = 50;
/// Execution time of clear and return-home
const CLEAR_US: u32 = 2_000;

/// Control and data lines of a 4-bit bus
pub struct Hd44780Pins<P> {
    pub rs: P,
    pub en: P,
    pub d4: P,
    pub d5: P,
    pub d6: P,
    pub d7: P,
}

/// HD44780-compatible character LCD
pub struct Hd44780<P, D> {
    pins: Hd44780Pins<P>,
    delay: D,
    cols: u8,
    rows: u8,
    initialized: bool,
}

impl<P: OutputPin, D: DelayNs> Hd44780<P, D> {
    /// Create a driver for a `cols` x `rows` module
    ///
    /// Call [`Hd44780::init`] before writing.
    pub fn new(pins: Hd44780Pins<P>, delay: D, cols: u8, rows: u8) -> Self {
        Self {
            pins,
            delay,
            cols: cols.clamp(1, MAX_COLS as u8),
            rows: rows.clamp(1, MAX_ROWS as u8),
            initialized: false,
        }
    }

    /// Run the power-on initialization sequence
    ///
    /// Leaves the display on, cursor hidden, cleared, writing left to right.
    pub fn init(&mut self) {
        self.pins.rs.set_low();
        self.pins.en.set_low();
        self.delay.delay_ms(50);

        // Force 8-bit mode three times, then switch to 4-bit
        self.write_nibble(0x03);
        self.delay.delay_us(4_500);
        self.write_nibble(0x03);
        self.delay.delay_us(4_500);
        self.write_nibble(0x03);
        self.delay.delay_us(150);
        self.write_nibble(0x02);

        let lines = if self.rows > 1 { FUNCTION_2_LINE } else { 0 };
        self.command(CMD_FUNCTION_SET | lines);
        self.command(CMD_DISPLAY_CONTROL | DISPLAY_ON);
        self.command(CMD_CLEAR);
        self.delay.delay_us(CLEAR_US);
        self.command(CMD_ENTRY_MODE | ENTRY_INCREMENT);

        self.initialized = true;
    }

    /// Check if [`Hd44780::init`] has run
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Release the pins and delay
    pub fn release(self) -> (Hd44780Pins<P>, D) {
        (self.pins, self.delay)
    }

    /// Move the cursor to (row, col)
    pub fn set_cursor(&mut self, row: u8, col: u8) -> Result<(), DisplayError> {
        if row >= self.rows || col >= self.cols {
            return Err(DisplayError::InvalidCoordinates);
        }
        self.command(CMD_SET_DDRAM | (ROW_OFFSETS[row as usize] + col));
        Ok(())
    }

    fn pulse_enable(&mut self) {
        self.pins.en.set_high();
        self.delay.delay_us(1);
        self.pins.en.set_low();
        self.delay.delay_us(EXEC_US);
    }

    fn write_nibble(&mut self, nibble: u8) {
        self.pins.d4.set_level(Level::from(nibble & 0x01 != 0));
        self.pins.d5.set_level(Level::from(nibble & 0x02 != 0));
        self.pins.d6.set_level(Level::from(nibble & 0x04 != 0));
        self.pins.d7.set_level(Level::from(nibble & 0x08 != 0));
        self.pulse_enable();
    }

    fn write_byte(&mut self, byte: u8, data: bool) {
        self.pins.rs.set_level(Level::from(data));
        self.write_nibble(byte >> 4);
        self.write_nibble(byte & 0x0F);
    }

    fn command(&mut self, cmd: u8) {
        self.write_byte(cmd, false);
    }

    fn data(&mut self, byte: u8) {
        self.write_byte(byte, true);
    }
}

impl<P: OutputPin, D: DelayNs> TextDisplay for Hd44780<P, D> {
    fn clear(&mut self) -> Result<(), DisplayError> {
        if !self.initialized {
            return Err(DisplayError::NotInitialized);
        }
        self.command(CMD_CLEAR);
        self.delay.delay_us(CLEAR_US);
        Ok(())
    }

    fn write_text(&mut self, row: u8, col: u8, text: &str) -> Result<(), DisplayError> {
        if !self.initialized {
            return Err(DisplayError::NotInitialized);
        }
        self.set_cursor(row, col)?;
        let room = (self.cols - col) as usize;
        for c in text.chars().take(room) {
            self.data(lcd_char(c));
        }
        Ok(())
    }

    fn dimensions(&self) -> (u8, u8) {
        (self.cols, self.rows)
    }
}
