//! Test doubles shared by the driver tests

use core::cell::Cell;

use calcpad_hal::{InputPin, OutputPin};

/// Standalone pin whose level can be read and forced from the test
#[derive(Default)]
pub struct MockPin {
    high: Cell<bool>,
}

impl MockPin {
    pub fn new(high: bool) -> Self {
        Self {
            high: Cell::new(high),
        }
    }

    /// Force the level seen by `InputPin::is_high`
    pub fn force(&self, high: bool) {
        self.high.set(high);
    }
}

impl OutputPin for MockPin {
    fn set_high(&mut self) {
        self.high.set(true);
    }

    fn set_low(&mut self) {
        self.high.set(false);
    }

    fn is_set_high(&self) -> bool {
        self.high.get()
    }
}

impl InputPin for MockPin {
    fn is_high(&self) -> bool {
        self.high.get()
    }
}

/// Delay that only accumulates the requested time
#[derive(Default)]
pub struct MockDelay {
    pub total_ns: u64,
}

impl embedded_hal::delay::DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
    }
}
