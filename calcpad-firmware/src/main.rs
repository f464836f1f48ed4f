//! Calcpad - Keypad Calculator Firmware
//!
//! Four-function calculator for RP2040 boards with a 4x4 matrix keypad
//! and an HD44780 character LCD. Configuration is embedded from
//! calcpad.toml at build time.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel, Config as AdcConfig, InterruptHandler as AdcInterruptHandler};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::Pull;
use embassy_time::{Delay, Timer};
use {defmt_rtt as _, panic_probe as _};

use calcpad_core::config::{parse_config, CalcpadConfig};
use calcpad_core::traits::{DisplayExt, TextDisplay};
use calcpad_core::{Calculator, Screen};
use calcpad_drivers::io::IoBank;
use calcpad_drivers::keypad::MatrixKeypad;
use calcpad_drivers::lcd::{Hd44780, Hd44780Pins};

use crate::board::{BoardInput, BoardOutput};

mod board;
mod tasks;

/// Embedded configuration (compiled into firmware)
/// Edit calcpad.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../calcpad.toml");

bind_interrupts!(struct Irqs {
    ADC_IRQ_FIFO => AdcInterruptHandler;
});

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Calcpad firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = load_config();

    // LCD (4-bit bus)
    let pins = Hd44780Pins {
        rs: BoardOutput::new(p.PIN_7),
        en: BoardOutput::new(p.PIN_6),
        d4: BoardOutput::new(p.PIN_5),
        d5: BoardOutput::new(p.PIN_4),
        d6: BoardOutput::new(p.PIN_3),
        d7: BoardOutput::new(p.PIN_2),
    };
    let mut lcd = Hd44780::new(pins, Delay, config.display.cols, config.display.rows);
    lcd.init();
    info!(
        "LCD initialized ({}x{})",
        config.display.cols, config.display.rows
    );

    if let Err(e) = lcd.show_lines(&config.display.banner_top, &config.display.banner_bottom) {
        warn!("Failed to show banner: {}", e);
    }

    // Keypad: rows are driven, columns pulled up
    let keypad = MatrixKeypad::new(
        [
            BoardOutput::new_high(p.PIN_10),
            BoardOutput::new_high(p.PIN_11),
            BoardOutput::new_high(p.PIN_12),
            BoardOutput::new_high(p.PIN_13),
        ],
        [
            BoardInput::pull_up(p.PIN_14),
            BoardInput::pull_up(p.PIN_15),
            BoardInput::pull_up(p.PIN_16),
            BoardInput::pull_up(p.PIN_17),
        ],
        config.keypad.layout,
    );
    info!("Keypad initialized");

    let io = IoBank::new(
        [
            BoardInput::pull_down(p.PIN_18),
            BoardInput::pull_down(p.PIN_19),
            BoardInput::pull_down(p.PIN_20),
            BoardInput::pull_down(p.PIN_21),
        ],
        [
            BoardOutput::new(p.PIN_0),
            BoardOutput::new(p.PIN_1),
            BoardOutput::new(p.PIN_8),
            BoardOutput::new(p.PIN_9),
        ],
    );
    info!("Digital I/O initialized");

    // Analog input is not used by the calculator; a failed read is only logged
    let mut adc = Adc::new(p.ADC, Irqs, AdcConfig::default());
    let mut analog = Channel::new_pin(p.PIN_26, Pull::None);
    match adc.read(&mut analog).await {
        Ok(raw) => info!("ADC initialized (ch0 = {})", raw),
        Err(e) => error!("ADC initialization failed: {:?}", Debug2Format(&e)),
    }

    Timer::after_millis(config.calculator.settle_ms as u64).await;

    if let Err(e) = lcd.clear() {
        warn!("Failed to clear LCD: {}", e);
    }

    let panel = tasks::Panel {
        keypad,
        lcd,
        io,
        calculator: Calculator::with_input_limit(config.calculator.input_capacity as usize),
        screen: Screen::with_size(config.display.cols, config.display.rows),
    };

    spawner
        .spawn(tasks::poll_task(panel, config.calculator.poll_interval_ms))
        .unwrap();

    info!("Calculator ready");

    loop {
        Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}

/// Parse the embedded configuration
///
/// Falls back to built-in defaults if calcpad.toml does not parse. build.rs
/// rejects invalid files, so this only happens if the two drift apart.
fn load_config() -> CalcpadConfig {
    match parse_config(EMBEDDED_CONFIG) {
        Ok(config) if config.is_valid() => {
            info!("Parsed embedded configuration successfully");
            config
        }
        Ok(_) => {
            error!("Embedded configuration out of range, using defaults");
            CalcpadConfig::default()
        }
        Err(e) => {
            error!("Failed to parse embedded config: {}", e);
            CalcpadConfig::default()
        }
    }
}
