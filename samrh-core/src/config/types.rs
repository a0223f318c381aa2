//! Configuration type definitions

use samrh_protocol::DEFAULT_DUTY_BYTE;

/// Upper bound for any setpoint axis (degrees, inclusive)
pub const DEFAULT_POSITION_LIMIT_DEG: i32 = 360;

/// Number of timed units in one motion phase
pub const DEFAULT_MOTION_UNITS: u8 = 10;

/// Counter ticks per motion unit (one second on a 1 MHz counter)
pub const DEFAULT_UNIT_BUDGET: u32 = 1_000_000;

/// Errors in a [`SequencerConfig`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Motion phase has no units
    NoMotionUnits,
    /// Unit budget of zero would never poll for input
    ZeroUnitBudget,
    /// Position limit below zero rejects every angle
    NegativePositionLimit,
}

/// Sequencer tuning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SequencerConfig {
    /// Setpoints above this value are rejected
    pub position_limit_deg: i32,
    /// Timed units per motion phase
    pub motion_units: u8,
    /// Counter ticks per unit
    pub unit_budget: u32,
    /// Duty byte sent after every selector
    pub default_duty: u8,
}

impl Default for SequencerConfig {
    fn default() -> Self {
        Self {
            position_limit_deg: DEFAULT_POSITION_LIMIT_DEG,
            motion_units: DEFAULT_MOTION_UNITS,
            unit_budget: DEFAULT_UNIT_BUDGET,
            default_duty: DEFAULT_DUTY_BYTE,
        }
    }
}

impl SequencerConfig {
    /// Check that the configuration can drive a motion phase
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.motion_units == 0 {
            return Err(ConfigError::NoMotionUnits);
        }
        if self.unit_budget == 0 {
            return Err(ConfigError::ZeroUnitBudget);
        }
        if self.position_limit_deg < 0 {
            return Err(ConfigError::NegativePositionLimit);
        }
        Ok(())
    }
}

/// Machine readiness preconditions
///
/// Supplied by the board at start-up. The sequencer only reads them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ReadinessFlags {
    /// Machine configuration is present
    pub configured: bool,
    /// Self-test has passed
    pub self_test_performed: bool,
    /// Axes are homed
    pub homed: bool,
    /// Reference position is set
    pub reference_position_set: bool,
}

impl Default for ReadinessFlags {
    fn default() -> Self {
        Self {
            configured: true,
            self_test_performed: true,
            homed: true,
            reference_position_set: true,
        }
    }
}

impl ReadinessFlags {
    /// Check the initialization preconditions
    pub fn all_ready(&self) -> bool {
        self.self_test_performed && self.homed && self.reference_position_set
    }
}
