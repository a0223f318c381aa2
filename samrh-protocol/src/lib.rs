//! Operator Command Protocol
//!
//! This crate defines the human-readable ASCII protocol spoken over the
//! operator serial link, plus the single-byte commands written to the drive
//! electronics.
//!
//! # Protocol Overview
//!
//! Operator → controller tokens:
//! ```text
//! ┌──────────────┬────────┬──────────────────────────────────────┐
//! │ Token        │ Length │ Meaning                              │
//! ├──────────────┼────────┼──────────────────────────────────────┤
//! │ "start"      │ 5B     │ Enter the state machine              │
//! │ n m s p r e  │ 1B     │ Menu commands                        │
//! │ 1 .. 6       │ 1B     │ Maintenance actions                  │
//! │ 2 / 4        │ 1B     │ Duty-cycle divider                   │
//! │ "000".."999" │ 3B     │ Zero-padded angle in degrees         │
//! └──────────────┴────────┴──────────────────────────────────────┘
//! ```
//!
//! Controller → drive electronics: one duty byte per SPI write.

#![no_std]
#![deny(unsafe_code)]

pub mod command;
pub mod duty;
pub mod maintenance;
pub mod messages;
pub mod numeral;

pub use command::{is_start_word, Command, START_WORD};
pub use duty::{DutySelector, DEFAULT_DUTY_BYTE};
pub use maintenance::MaintenanceAction;
pub use messages::Prompt;
pub use numeral::{Numeral, NUMERAL_LEN};
