//! Board-agnostic control sequencer for the actuator platform
//!
//! This crate contains all control logic that does not depend on a specific
//! board:
//!
//! - The six-state machine and its transition rules
//! - Setpoint validation
//! - The sequencer that runs one state handler per step, including the
//!   interruptible timed motion loop
//! - Terminal and actuator adapters over the `samrh-hal` traits
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod context;
pub mod io;
pub mod sequencer;
pub mod setpoint;
pub mod state;

#[cfg(test)]
mod mock;

pub use context::{Context, MotionReport};
pub use sequencer::{Sequencer, SequencerError};
pub use state::{State, Transition};
