//! Keypad poll task
//!
//! One periodic loop drives the whole calculator: read a key, step the
//! state machine, mirror the resulting command onto the LCD, then refresh
//! the digital I/O bank.

use defmt::*;
use embassy_time::{Duration, Ticker};

use calcpad_core::traits::{DisplayExt, KeySource};
use calcpad_core::{Calculator, Key, Screen};

use crate::board::{Io, Keypad, Lcd};

/// Everything the poll loop owns
pub struct Panel {
    pub keypad: Keypad,
    pub lcd: Lcd,
    pub io: Io,
    pub calculator: Calculator,
    /// Shadow copy of the LCD contents for logging
    pub screen: Screen,
}

/// Poll task
///
/// Runs every `interval_ms`. No key pressed means no display traffic.
#[embassy_executor::task]
pub async fn poll_task(mut panel: Panel, interval_ms: u32) {
    info!("Poll task started ({}ms)", interval_ms);

    let mut ticker = Ticker::every(Duration::from_millis(interval_ms as u64));
    let mut last_inputs = panel.io.inputs();

    loop {
        if let Some(c) = panel.keypad.poll() {
            match Key::from_char(c) {
                Some(key) => {
                    debug!("Key {}", key);
                    if let Some(cmd) = panel.calculator.handle_key(key) {
                        if let Err(e) = panel.lcd.apply(&cmd) {
                            warn!("LCD write failed: {}", e);
                        }
                        if let Err(e) = panel.screen.apply(&cmd) {
                            warn!("Shadow screen write failed: {}", e);
                        }
                    }
                }
                None => debug!("Ignoring key '{}'", c),
            }
        }

        if panel.screen.is_dirty() {
            for (row, line) in panel.screen.lines().enumerate() {
                debug!("LCD[{}] |{}|", row, line);
            }
            panel.screen.mark_clean();
        }

        let inputs = panel.io.refresh(0);
        if inputs != last_inputs {
            debug!("Inputs {=u8:04b}", inputs);
            last_inputs = inputs;
        }

        ticker.next().await;
    }
}
