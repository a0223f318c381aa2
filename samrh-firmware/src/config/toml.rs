//! Line-based parser for `sequencer.toml`
//!
//! Handles only the subset the sequencer configuration needs:
//!
//! - `[section]` headers (`readiness`, `motion`, `actuator`, `serial`)
//! - `key = value` pairs with integer or boolean values
//! - Comments (`# ...`), including trailing ones
//!
//! The full file has already been checked by `build.rs`, so this parser
//! only guards against drift between the two.

use samrh_hal::spi::{Mode, SpiConfig};

use super::FirmwareConfig;

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Unknown or malformed section header
    InvalidSection,
    /// Key not valid in its section, or a line without `=`
    InvalidKey,
    /// Value of the wrong type or out of range
    InvalidValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Readiness,
    Motion,
    Actuator,
    Serial,
}

/// Parse the configuration text
pub fn parse_config(input: &str) -> Result<FirmwareConfig, ParseError> {
    let mut config = FirmwareConfig::default();
    let mut section = Section::Root;
    let mut spi_frequency = config.spi.frequency;
    let mut spi_mode = Mode::Mode0;

    for line in input.lines() {
        let line = strip_comment(line).trim();
        if line.is_empty() {
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') {
            section = parse_section_header(&line[1..line.len() - 1])?;
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or(ParseError::InvalidKey)?;
        match section {
            Section::Root => return Err(ParseError::InvalidKey),
            Section::Readiness => {
                let flag = match key {
                    "configured" => &mut config.readiness.configured,
                    "self_test_performed" => &mut config.readiness.self_test_performed,
                    "homed" => &mut config.readiness.homed,
                    "reference_position_set" => &mut config.readiness.reference_position_set,
                    _ => return Err(ParseError::InvalidKey),
                };
                *flag = parse_bool(value)?;
            }
            Section::Motion => match key {
                "position_limit_deg" => config.sequencer.position_limit_deg = parse_int(value)?,
                "units" => config.sequencer.motion_units = parse_int(value)?,
                "unit_budget" => config.sequencer.unit_budget = parse_int(value)?,
                _ => return Err(ParseError::InvalidKey),
            },
            Section::Actuator => match key {
                "default_duty" => config.sequencer.default_duty = parse_int(value)?,
                "spi_frequency" => spi_frequency = parse_int(value)?,
                "spi_mode" => spi_mode = parse_mode(value)?,
                _ => return Err(ParseError::InvalidKey),
            },
            Section::Serial => match key {
                "baudrate" => config.serial.baudrate = parse_int(value)?,
                _ => return Err(ParseError::InvalidKey),
            },
        }
    }

    config.spi = SpiConfig::with_mode(spi_frequency, spi_mode);
    Ok(config)
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

fn parse_section_header(header: &str) -> Result<Section, ParseError> {
    match header.trim() {
        "readiness" => Ok(Section::Readiness),
        "motion" => Ok(Section::Motion),
        "actuator" => Ok(Section::Actuator),
        "serial" => Ok(Section::Serial),
        _ => Err(ParseError::InvalidSection),
    }
}

/// Parse "key = value" line
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once('=')?;
    let (key, value) = (key.trim(), value.trim());
    if key.is_empty() || value.is_empty() {
        return None;
    }
    Some((key, value))
}

fn parse_int<T: core::str::FromStr>(value: &str) -> Result<T, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidValue)
}

fn parse_bool(value: &str) -> Result<bool, ParseError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ParseError::InvalidValue),
    }
}

fn parse_mode(value: &str) -> Result<Mode, ParseError> {
    match value {
        "0" => Ok(Mode::Mode0),
        "1" => Ok(Mode::Mode1),
        "2" => Ok(Mode::Mode2),
        "3" => Ok(Mode::Mode3),
        _ => Err(ParseError::InvalidValue),
    }
}
