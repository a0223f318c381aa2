//! Embassy async tasks
//!
//! The sequencer itself runs in the main task; these run on the interrupt
//! executor and preempt it.

pub mod status;

pub use status::status_task;
