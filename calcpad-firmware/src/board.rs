//! Board wiring
//!
//! Adapts embassy-rp pins to the calcpad-hal traits and fixes the pin
//! assignment of the calculator board (Raspberry Pi Pico):
//!
//! | Function         | GPIO              |
//! |------------------|-------------------|
//! | LCD RS, EN       | 7, 6              |
//! | LCD D4-D7        | 5, 4, 3, 2        |
//! | Keypad rows      | 10, 11, 12, 13    |
//! | Keypad columns   | 14, 15, 16, 17    |
//! | Digital inputs   | 18, 19, 20, 21    |
//! | Digital outputs  | 0, 1, 8, 9        |
//! | Analog input     | 26 (ADC0)         |

use embassy_rp::gpio::{Input, Level, Output, Pin, Pull};
use embassy_rp::Peri;
use embassy_time::Delay;

use calcpad_drivers::io::IoBank;
use calcpad_drivers::keypad::MatrixKeypad;
use calcpad_drivers::lcd::Hd44780;

/// Pins per direction on the digital I/O bank
pub const IO_PINS: usize = 4;

/// Push-pull output pin
pub struct BoardOutput(Output<'static>);

impl BoardOutput {
    /// Output starting low
    pub fn new(pin: Peri<'static, impl Pin>) -> Self {
        Self(Output::new(pin, Level::Low))
    }

    /// Output starting high (idle keypad rows)
    pub fn new_high(pin: Peri<'static, impl Pin>) -> Self {
        Self(Output::new(pin, Level::High))
    }
}

impl calcpad_hal::OutputPin for BoardOutput {
    fn set_high(&mut self) {
        self.0.set_high();
    }

    fn set_low(&mut self) {
        self.0.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.0.is_set_high()
    }
}

/// Input pin
pub struct BoardInput(Input<'static>);

impl BoardInput {
    /// Input with pull-up (keypad columns)
    pub fn pull_up(pin: Peri<'static, impl Pin>) -> Self {
        Self(Input::new(pin, Pull::Up))
    }

    /// Input with pull-down (digital inputs read 0 when open)
    pub fn pull_down(pin: Peri<'static, impl Pin>) -> Self {
        Self(Input::new(pin, Pull::Down))
    }
}

impl calcpad_hal::InputPin for BoardInput {
    fn is_high(&self) -> bool {
        self.0.is_high()
    }
}

/// Keypad as wired on the board
pub type Keypad = MatrixKeypad<BoardOutput, BoardInput>;

/// LCD as wired on the board
pub type Lcd = Hd44780<BoardOutput, Delay>;

/// Digital I/O bank as wired on the board
pub type Io = IoBank<BoardInput, BoardOutput, IO_PINS>;
