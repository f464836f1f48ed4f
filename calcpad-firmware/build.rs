//! Build script for calcpad-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates calcpad.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Characters the keypad layout may contain
const KEY_CHARS: &str = "0123456789+-x/=C";

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    // Places .boot2 at the start of flash
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
}

/// Validate calcpad.toml at compile time
///
/// The firmware's own parser only understands a subset of TOML, so this
/// also rejects constructs it would choke on at boot.
fn validate_config() {
    println!("cargo:rerun-if-changed=calcpad.toml");

    let config_path = Path::new("calcpad.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: calcpad.toml not found!                                  ║\n\
            ║                                                                  ║\n\
            ║  The firmware embeds calcpad.toml from the crate directory.      ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read calcpad.toml                              ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in calcpad.toml                      ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                {}\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let mut errors = Vec::new();
    validate_sections(&config, &mut errors);
    validate_calculator(&config, &mut errors);
    validate_display(&config, &mut errors);
    validate_keypad(&config, &mut errors);

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid configuration in calcpad.toml                    ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    println!("cargo:warning=calcpad.toml validated successfully");
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Only the three known sections may appear, and no top-level keys
fn validate_sections(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(root) = config.as_table() else {
        return;
    };
    for (name, value) in root {
        match (name.as_str(), value) {
            ("calculator" | "display" | "keypad", toml::Value::Table(_)) => {}
            ("calculator" | "display" | "keypad", _) => {
                errors.push(format!("[{}] must be a table", name));
            }
            _ => errors.push(format!("unknown section or key '{}'", name)),
        }
    }
}

fn check_range(
    table: &toml::value::Table,
    section: &str,
    key: &str,
    min: i64,
    max: i64,
    errors: &mut Vec<String>,
) {
    match table.get(key) {
        None => {}
        Some(toml::Value::Integer(n)) if (min..=max).contains(n) => {}
        Some(toml::Value::Integer(_)) => {
            errors.push(format!("[{}] {} must be {}-{}", section, key, min, max));
        }
        Some(_) => errors.push(format!("[{}] {} must be an integer", section, key)),
    }
}

fn validate_calculator(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(toml::Value::Table(calc)) = config.get("calculator") else {
        return;
    };
    check_range(calc, "calculator", "input_capacity", 1, 20, errors);
    check_range(calc, "calculator", "poll_interval_ms", 10, 1000, errors);
    check_range(calc, "calculator", "settle_ms", 0, 10_000, errors);
}

fn validate_display(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(toml::Value::Table(display)) = config.get("display") else {
        return;
    };
    check_range(display, "display", "cols", 1, 20, errors);
    // Result and entry lines need two rows
    check_range(display, "display", "rows", 2, 4, errors);

    for key in ["banner_top", "banner_bottom"] {
        match display.get(key) {
            None => {}
            Some(toml::Value::String(s)) => {
                if s.len() > 32 {
                    errors.push(format!("[display] {} longer than 32 bytes", key));
                }
                if s.contains('"') || s.contains('\\') {
                    errors.push(format!("[display] {} may not contain quotes or escapes", key));
                }
            }
            Some(_) => errors.push(format!("[display] {} must be a string", key)),
        }
    }
}

fn validate_keypad(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(toml::Value::Table(keypad)) = config.get("keypad") else {
        return;
    };
    let rows = match keypad.get("layout") {
        None => return,
        Some(toml::Value::Array(rows)) => rows,
        Some(_) => {
            errors.push("[keypad] layout must be an array of strings".to_string());
            return;
        }
    };

    if rows.len() != 4 {
        errors.push(format!("[keypad] layout needs 4 rows, found {}", rows.len()));
    }
    for (i, row) in rows.iter().enumerate() {
        let Some(row) = row.as_str() else {
            errors.push(format!("[keypad] layout row {} must be a string", i));
            continue;
        };
        if row.chars().count() != 4 {
            errors.push(format!("[keypad] layout row {} needs 4 keys", i));
        }
        for c in row.chars().filter(|c| !KEY_CHARS.contains(*c)) {
            errors.push(format!("[keypad] layout row {} has unknown key '{}'", i, c));
        }
    }
}
