//! Configuration types
//!
//! Board-agnostic configuration consumed by the sequencer. Boards fill these
//! in from their own configuration source.

pub mod types;

pub use types::*;
