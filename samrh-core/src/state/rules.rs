//! Transition rules for the single-command states
//!
//! Each function maps the command read by a handler (plus whatever context
//! the rule needs) to the next [`Transition`]. Raising the error flag on
//! entry to [`State::Error`] is the sequencer's job, not the rules'.

use samrh_protocol::Command;

use super::machine::{State, Transition};
use crate::config::ReadinessFlags;

/// Start-up: `n` proceeds only on a configured machine
pub fn start_up(command: Command, readiness: &ReadinessFlags) -> Transition {
    use State::*;

    match command {
        Command::Next if readiness.configured => Transition::to(Initialization, StartUp),
        Command::Maintenance => Transition::to(Maintenance, StartUp),
        _ => Transition::to(Error, StartUp),
    }
}

/// Initialization: `n` proceeds only when self-test, homing and reference
/// position are all done
pub fn initialization(command: Command, readiness: &ReadinessFlags) -> Transition {
    use State::*;

    match command {
        Command::Next if readiness.all_ready() => Transition::to(StandBy, Initialization),
        Command::Maintenance => Transition::to(Maintenance, Initialization),
        _ => Transition::to(Error, Initialization),
    }
}

/// Stand-by menu choices that do not start the setpoint workflow
///
/// Returns `None` for `n`, which the handler expands into the setpoint
/// prompts.
pub fn stand_by(command: Command, previous: State) -> Option<Transition> {
    use State::*;

    match command {
        Command::Next => None,
        Command::Maintenance => Some(Transition::to(Maintenance, StandBy)),
        _ => Some(Transition::stay(StandBy, previous)),
    }
}

/// Maintenance menu with a selector outside `1`-`6`: silently re-enter
pub fn maintenance_unknown(previous: State) -> Transition {
    Transition::stay(State::Maintenance, previous)
}

/// After a maintenance action: `r` re-enters, `e` returns to `previous`,
/// anything else is a protocol error
pub fn maintenance_exit(command: Command, previous: State) -> Transition {
    use State::*;

    match command {
        Command::Restart => Transition::stay(Maintenance, previous),
        Command::Exit => Transition::to(previous, previous),
        _ => Transition::to(Error, Maintenance),
    }
}

/// Error recovery
///
/// `error_flag` is sampled after the handler has already cleared it, so `r`
/// always restarts.
pub fn error_recovery(command: Command, error_flag: bool, previous: State) -> Transition {
    use State::*;

    match command {
        Command::Restart if !error_flag => Transition::to(StartUp, StartUp),
        Command::Maintenance => Transition::to(Maintenance, Error),
        _ => Transition::stay(Error, previous),
    }
}
