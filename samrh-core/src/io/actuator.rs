//! Duty-cycle output to the drive electronics

use samrh_hal::SpiBus;
use samrh_protocol::DutySelector;

use crate::sequencer::SequencerError;

/// Drive electronics on an SPI bus
pub struct Actuator<S> {
    bus: S,
    default_duty: u8,
}

impl<S: SpiBus> Actuator<S> {
    /// Wrap a bus; `default_duty` follows every selector byte
    pub fn new(bus: S, default_duty: u8) -> Self {
        Self { bus, default_duty }
    }

    /// Release the bus
    pub fn into_inner(self) -> S {
        self.bus
    }

    /// Borrow the bus
    #[cfg(test)]
    pub fn bus(&self) -> &S {
        &self.bus
    }

    /// Send the selector byte (if any) and then the default duty byte
    pub fn apply_duty(&mut self, selector: Option<DutySelector>) -> Result<(), SequencerError> {
        if let Some(selector) = selector {
            self.write(selector.to_byte())?;
        }
        self.write(self.default_duty)?;
        self.bus.flush().map_err(|_| SequencerError::Actuator)
    }

    fn write(&mut self, byte: u8) -> Result<(), SequencerError> {
        self.bus.write(&[byte]).map_err(|_| SequencerError::Actuator)
    }
}
