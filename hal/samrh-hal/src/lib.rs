//! SAMRH Hardware Abstraction Layer
//!
//! Peripheral traits consumed by the control sequencer. Chip-specific crates
//! (such as `samrh-hal-rp2040`) implement them, and the core crate only ever
//! talks to hardware through these traits.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  samrh-core (sequencer, handlers)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  samrh-hal (this crate - traits)        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │  samrh-hal-   │
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`uart::UartTx`], [`uart::UartRx`] - Operator serial link
//! - [`spi::SpiBus`] - Duty-cycle write path to the drive electronics
//! - [`counter::Counter`] - Elapsed-time source for timed motion units

#![no_std]
#![deny(unsafe_code)]

pub mod counter;
pub mod spi;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use counter::Counter;
pub use spi::SpiBus;
pub use uart::{Uart, UartRx, UartTx};
