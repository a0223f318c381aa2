//! Inter-task communication
//!
//! The control loop runs in the main task; everything else learns about
//! it through these statics.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use samrh_core::State;

/// State the sequencer entered on its last step
pub static STATE: Signal<CriticalSectionRawMutex, State> = Signal::new();
