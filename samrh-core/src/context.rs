//! Sequencer context
//!
//! Everything the handlers share lives here and is owned by the
//! [`Sequencer`](crate::Sequencer): configuration, readiness flags, the
//! error flag and the last accepted setpoint.

use samrh_protocol::Command;

use crate::config::{ReadinessFlags, SequencerConfig};
use crate::setpoint::Setpoint;

/// Result of the most recent motion phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotionReport {
    /// Units that ran to completion
    pub units_completed: u8,
    /// Command that cut the phase short, if any
    pub interrupted_by: Option<Command>,
}

impl MotionReport {
    /// Check if every configured unit ran
    pub fn is_complete(&self) -> bool {
        self.interrupted_by.is_none()
    }
}

/// Shared sequencer state
#[derive(Debug, Clone)]
pub struct Context {
    /// Tuning values
    pub config: SequencerConfig,
    /// Machine preconditions
    pub readiness: ReadinessFlags,
    error_flag: bool,
    setpoint: Option<Setpoint>,
    last_motion: Option<MotionReport>,
}

impl Default for Context {
    fn default() -> Self {
        Self::new(SequencerConfig::default(), ReadinessFlags::default())
    }
}

impl Context {
    /// Create a context with the error flag down and no setpoint
    pub fn new(config: SequencerConfig, readiness: ReadinessFlags) -> Self {
        Self {
            config,
            readiness,
            error_flag: false,
            setpoint: None,
            last_motion: None,
        }
    }

    /// Check if a protocol error is pending
    pub fn error_flag(&self) -> bool {
        self.error_flag
    }

    /// Record a protocol error
    pub fn raise_error(&mut self) {
        self.error_flag = true;
    }

    /// Clear the protocol error
    pub fn clear_error(&mut self) {
        self.error_flag = false;
    }

    /// Last setpoint that passed validation
    pub fn setpoint(&self) -> Option<Setpoint> {
        self.setpoint
    }

    /// Replace the setpoint
    pub fn set_setpoint(&mut self, setpoint: Setpoint) {
        self.setpoint = Some(setpoint);
    }

    /// Outcome of the last motion phase
    pub fn last_motion(&self) -> Option<MotionReport> {
        self.last_motion
    }

    pub(crate) fn record_motion(&mut self, report: MotionReport) {
        self.last_motion = Some(report);
    }
}
