//! RP2040 bindings for the SAMRH peripheral traits
//!
//! Thin adapters from embassy-rp drivers to the blocking `samrh-hal`
//! traits:
//!
//! - [`SerialPort`] - operator link over a buffered UART
//! - [`DriveSpi`] - duty-cycle writes over a blocking SPI bus
//! - [`TickCounter`] - elapsed-time source backed by `embassy-time`
//!
//! Plus conversions from the board-agnostic UART/SPI configuration types
//! to embassy-rp's.

#![no_std]
#![deny(unsafe_code)]

pub mod counter;
pub mod spi;
pub mod uart;

pub use counter::TickCounter;
pub use spi::{spi_config, DriveSpi};
pub use uart::{uart_config, SerialPort};
