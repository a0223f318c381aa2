//! Boot configuration
//!
//! The configuration is compiled into the image from `sequencer.toml` and
//! parsed once at boot. Anything that fails to parse or validate falls back
//! to the built-in defaults.

pub mod toml;

use defmt::*;

use samrh_core::config::{ReadinessFlags, SequencerConfig};
use samrh_hal::spi::SpiConfig;
use samrh_hal::uart::UartConfig;

pub use self::toml::{parse_config, ParseError};

/// Embedded configuration (compiled into firmware)
/// Edit sequencer.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../../sequencer.toml");

/// Everything the firmware needs to bring up the sequencer
#[derive(Debug, Clone, Copy, Default)]
pub struct FirmwareConfig {
    pub sequencer: SequencerConfig,
    pub readiness: ReadinessFlags,
    pub serial: UartConfig,
    pub spi: SpiConfig,
}

/// Parse the embedded configuration, falling back to defaults
pub fn load() -> FirmwareConfig {
    let mut config = match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            error!("Embedded config rejected ({}), using defaults", e);
            return FirmwareConfig::default();
        }
    };

    if let Err(e) = config.sequencer.validate() {
        error!("Invalid sequencer config ({}), using defaults", e);
        config.sequencer = SequencerConfig::default();
    }

    if !config.readiness.all_ready() || !config.readiness.configured {
        warn!("Readiness flags not all set; Initialization will refuse to proceed");
    }

    config
}
