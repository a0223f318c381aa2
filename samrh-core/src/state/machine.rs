//! State and transition definitions

use samrh_protocol::Prompt;

/// Sequencer states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// Power-on entry point, waits for the operator to proceed
    StartUp,
    /// Readiness checks before accepting setpoints
    Initialization,
    /// Idle, accepts a new setpoint
    StandBy,
    /// Timed motion towards the accepted setpoint
    Operation,
    /// Diagnostic submenu; returns to the recorded previous state
    Maintenance,
    /// Protocol error; waits for restart or maintenance
    Error,
}

impl State {
    /// Name printed in the state banner
    pub fn name(&self) -> &'static str {
        match self {
            State::StartUp => "start_up",
            State::Initialization => "initialization",
            State::StandBy => "stand_by",
            State::Operation => "operation",
            State::Maintenance => "maintenance",
            State::Error => "error",
        }
    }

    /// Menu printed after the banner
    pub fn menu(&self) -> Prompt {
        match self {
            State::StartUp => Prompt::StartUpMenu,
            State::Initialization => Prompt::InitializationMenu,
            State::StandBy => Prompt::StandByMenu,
            State::Operation => Prompt::OperationMenu,
            State::Maintenance => Prompt::MaintenanceMenu,
            State::Error => Prompt::ErrorMenu,
        }
    }
}

/// Outcome of one handler invocation
///
/// A handler always produces both fields; "no transition" is expressed as
/// [`Transition::stay`], never as an unset state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Transition {
    /// State whose handler runs next
    pub next: State,
    /// State to resume after a diversion
    pub previous: State,
}

impl Transition {
    /// Move to `next`, recording `previous`
    pub const fn to(next: State, previous: State) -> Self {
        Self { next, previous }
    }

    /// Re-run `current` with `previous` left as it is
    pub const fn stay(current: State, previous: State) -> Self {
        Self {
            next: current,
            previous,
        }
    }
}
