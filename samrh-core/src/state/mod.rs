//! State machine for the control sequencer
//!
//! The state graph is explicit, finite and deterministic. Handlers that only
//! read one command delegate their decision to the pure functions in
//! [`rules`], which keeps the graph testable without any I/O.

pub mod machine;
pub mod rules;

pub use machine::{State, Transition};
