//! Adapters between the sequencer and the peripheral traits
//!
//! [`Terminal`] turns a raw UART into the operator's command stream;
//! [`Actuator`] turns an SPI bus into duty-cycle commands.

pub mod actuator;
pub mod terminal;

pub use actuator::Actuator;
pub use terminal::Terminal;
