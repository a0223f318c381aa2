//! Drive electronics SPI

use embassy_rp::spi::{Config, Phase as RpPhase, Polarity as RpPolarity};
use embedded_hal::spi::SpiBus as HalSpiBus;
use samrh_hal::spi::{Phase, Polarity, SpiConfig};
use samrh_hal::SpiBus;

/// Write-only view of an `embedded-hal` SPI bus
///
/// Chip select is left to the bus owner; duty bytes are plain writes.
pub struct DriveSpi<B> {
    bus: B,
}

impl<B> DriveSpi<B> {
    pub fn new(bus: B) -> Self {
        Self { bus }
    }
}

impl<B: HalSpiBus<u8>> SpiBus for DriveSpi<B> {
    type Error = B::Error;

    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.bus.write(data)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.bus.flush()
    }
}

/// Convert a board-agnostic SPI configuration to embassy-rp's
pub fn spi_config(config: &SpiConfig) -> Config {
    let mut rp = Config::default();
    rp.frequency = config.frequency;
    rp.polarity = match config.polarity {
        Polarity::IdleLow => RpPolarity::IdleLow,
        Polarity::IdleHigh => RpPolarity::IdleHigh,
    };
    rp.phase = match config.phase {
        Phase::CaptureOnFirstTransition => RpPhase::CaptureOnFirstTransition,
        Phase::CaptureOnSecondTransition => RpPhase::CaptureOnSecondTransition,
    };
    rp
}
