//! General-purpose digital I/O bank
//!
//! Up to eight inputs and eight outputs exchanged as packed bytes, bit 0
//! first. The poll loop refreshes the bank every tick.

use calcpad_hal::{InputPin, Level, OutputPin};

/// Bank of `N` inputs and `N` outputs (N <= 8)
pub struct IoBank<I, O, const N: usize> {
    inputs: [I; N],
    outputs: [O; N],
    last_inputs: u8,
    last_outputs: u8,
}

impl<I: InputPin, O: OutputPin, const N: usize> IoBank<I, O, N> {
    /// Create a bank with all outputs driven low
    pub fn new(inputs: [I; N], outputs: [O; N]) -> Self {
        const { assert!(N <= 8, "IoBank holds at most 8 pins per direction") };

        let mut bank = Self {
            inputs,
            outputs,
            last_inputs: 0,
            last_outputs: 0,
        };
        bank.write_outputs(0);
        bank
    }

    fn write_outputs(&mut self, outputs: u8) {
        for (bit, pin) in self.outputs.iter_mut().enumerate() {
            pin.set_level(Level::from(outputs & (1 << bit) != 0));
        }
        self.last_outputs = outputs;
    }

    fn read_inputs(&self) -> u8 {
        self.inputs
            .iter()
            .enumerate()
            .filter(|(_, pin)| pin.is_high())
            .fold(0, |acc, (bit, _)| acc | (1 << bit))
    }

    /// Drive `outputs` and return the packed input levels
    pub fn refresh(&mut self, outputs: u8) -> u8 {
        self.write_outputs(outputs);
        self.last_inputs = self.read_inputs();
        self.last_inputs
    }

    /// Input level captured by the last refresh
    pub fn input(&self, bit: usize) -> bool {
        bit < N && self.last_inputs & (1 << bit) != 0
    }

    /// Inputs captured by the last refresh
    pub fn inputs(&self) -> u8 {
        self.last_inputs
    }

    /// Outputs written by the last refresh
    pub fn outputs(&self) -> u8 {
        self.last_outputs
    }
}
