//! Simple TOML parser for calculator configuration
//!
//! This is a minimal TOML parser that handles only the subset needed for
//! the Calcpad configuration file. It does NOT support all of TOML.
//!
//! Supported features:
//! - Key = value pairs (string, integer)
//! - Single-line arrays of strings: layout = ["789/", "456x"]
//! - [section] headers
//! - Comments (# ...)
//!
//! NOT supported:
//! - Multi-line strings or arrays
//! - Escape sequences inside strings
//! - Floats, booleans, datetimes, inline tables
//!
//! Unknown keys are ignored so older firmware accepts newer files.

use heapless::{String, Vec};

use super::types::{CalcpadConfig, KEYPAD_COLS, KEYPAD_ROWS, MAX_BANNER_LEN, MIN_DISPLAY_ROWS};
use crate::input::{Key, MAX_OPERAND_LEN};
use crate::screen::{MAX_COLS, MAX_ROWS};

/// Largest array accepted by the parser
const MAX_ARRAY_ITEMS: usize = 8;

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Unknown or malformed section header (line number)
    InvalidSection(usize),
    /// Line is not `key = value` (line number)
    InvalidLine(usize),
    /// Value has the wrong type or cannot be parsed (line number)
    InvalidValue(usize),
    /// Value outside its allowed range (line number)
    OutOfRange(usize),
    /// Keypad layout contains a character that is not a key (line number)
    InvalidKey(usize),
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Calculator,
    Display,
    Keypad,
}

/// A parsed right-hand side
#[derive(Debug, PartialEq)]
enum Value<'a> {
    Integer(i64),
    Str(&'a str),
    Array(Vec<&'a str, MAX_ARRAY_ITEMS>),
}

/// Parse TOML configuration into CalcpadConfig
///
/// Keys missing from the input keep their default values.
pub fn parse_config(input: &str) -> Result<CalcpadConfig, ConfigError> {
    let mut config = CalcpadConfig::default();
    let mut section = Section::Root;

    for (index, line) in input.lines().enumerate() {
        let line_no = index + 1;
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with('[') {
            section = parse_section_header(line).ok_or(ConfigError::InvalidSection(line_no))?;
            continue;
        }

        let (key, raw) = split_key_value(line).ok_or(ConfigError::InvalidLine(line_no))?;
        let value = parse_value(raw).ok_or(ConfigError::InvalidValue(line_no))?;
        apply_value(&mut config, section, key, value, line_no)?;
    }

    Ok(config)
}

/// Parse a `[section]` header, allowing a trailing comment
fn parse_section_header(line: &str) -> Option<Section> {
    let end = line.find(']')?;
    let rest = line[end + 1..].trim();
    if !rest.is_empty() && !rest.starts_with('#') {
        return None;
    }
    match line[1..end].trim() {
        "calculator" => Some(Section::Calculator),
        "display" => Some(Section::Display),
        "keypad" => Some(Section::Keypad),
        _ => None,
    }
}

fn split_key_value(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    if key.is_empty() || !key.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_') {
        return None;
    }
    Some((key, value.trim()))
}

/// Parse a quoted string at the start of `raw`, returning it and the remainder
fn parse_string(raw: &str) -> Option<(&str, &str)> {
    let inner = raw.strip_prefix('"')?;
    let end = inner.find('"')?;
    Some((&inner[..end], &inner[end + 1..]))
}

fn is_trailing_comment(rest: &str) -> bool {
    let rest = rest.trim();
    rest.is_empty() || rest.starts_with('#')
}

fn parse_value(raw: &str) -> Option<Value<'_>> {
    if raw.starts_with('"') {
        let (s, rest) = parse_string(raw)?;
        return is_trailing_comment(rest).then_some(Value::Str(s));
    }

    if let Some(body) = raw.strip_prefix('[') {
        let mut items = Vec::new();
        let mut rest = body.trim_start();
        loop {
            if let Some(after) = rest.strip_prefix(']') {
                return is_trailing_comment(after).then_some(Value::Array(items));
            }
            let (item, after) = parse_string(rest)?;
            items.push(item).ok()?;
            rest = after.trim_start();
            if let Some(after) = rest.strip_prefix(',') {
                rest = after.trim_start();
            } else if !rest.starts_with(']') {
                return None;
            }
        }
    }

    let number = raw.split('#').next()?.trim();
    number.parse::<i64>().ok().map(Value::Integer)
}

fn integer_in(value: &Value<'_>, min: i64, max: i64, line_no: usize) -> Result<i64, ConfigError> {
    match value {
        Value::Integer(n) if (min..=max).contains(n) => Ok(*n),
        Value::Integer(_) => Err(ConfigError::OutOfRange(line_no)),
        _ => Err(ConfigError::InvalidValue(line_no)),
    }
}

fn banner_line(value: &Value<'_>, line_no: usize) -> Result<String<MAX_BANNER_LEN>, ConfigError> {
    let Value::Str(s) = value else {
        return Err(ConfigError::InvalidValue(line_no));
    };
    let mut line = String::new();
    // Banner is measured in bytes; accented characters take two
    line.push_str(s).map_err(|_| ConfigError::OutOfRange(line_no))?;
    Ok(line)
}

fn apply_value(
    config: &mut CalcpadConfig,
    section: Section,
    key: &str,
    value: Value<'_>,
    line_no: usize,
) -> Result<(), ConfigError> {
    match (section, key) {
        (Section::Calculator, "input_capacity") => {
            config.calculator.input_capacity =
                integer_in(&value, 1, MAX_OPERAND_LEN as i64, line_no)? as u8;
        }
        (Section::Calculator, "poll_interval_ms") => {
            config.calculator.poll_interval_ms = integer_in(&value, 10, 1000, line_no)? as u32;
        }
        (Section::Calculator, "settle_ms") => {
            config.calculator.settle_ms = integer_in(&value, 0, 10_000, line_no)? as u32;
        }
        (Section::Display, "cols") => {
            config.display.cols = integer_in(&value, 1, MAX_COLS as i64, line_no)? as u8;
        }
        (Section::Display, "rows") => {
            config.display.rows =
                integer_in(&value, MIN_DISPLAY_ROWS as i64, MAX_ROWS as i64, line_no)? as u8;
        }
        (Section::Display, "banner_top") => {
            config.display.banner_top = banner_line(&value, line_no)?;
        }
        (Section::Display, "banner_bottom") => {
            config.display.banner_bottom = banner_line(&value, line_no)?;
        }
        (Section::Keypad, "layout") => {
            let Value::Array(rows) = value else {
                return Err(ConfigError::InvalidValue(line_no));
            };
            if rows.len() != KEYPAD_ROWS {
                return Err(ConfigError::OutOfRange(line_no));
            }
            for (r, row) in rows.iter().enumerate() {
                if row.chars().count() != KEYPAD_COLS {
                    return Err(ConfigError::OutOfRange(line_no));
                }
                for (c, ch) in row.chars().enumerate() {
                    if Key::from_char(ch).is_none() {
                        return Err(ConfigError::InvalidKey(line_no));
                    }
                    config.keypad.layout[r][c] = ch;
                }
            }
        }
        _ => {
            // Unknown key - ignore
        }
    }
    Ok(())
}
