//! Error handler

use samrh_hal::{Counter, SpiBus, Uart};
use samrh_protocol::Prompt;

use super::{Sequencer, SequencerError};
use crate::state::{rules, State, Transition};

impl<U: Uart, S: SpiBus, C: Counter> Sequencer<U, S, C> {
    pub(super) fn error(&mut self) -> Result<Transition, SequencerError> {
        self.terminal.banner(State::Error)?;
        let command = self.terminal.read_command()?;
        self.terminal.prompt(Prompt::Newline)?;

        self.context.clear_error();
        Ok(rules::error_recovery(
            command,
            self.context.error_flag(),
            self.previous,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::*;
    use crate::state::{State, Transition};

    #[test]
    fn test_restart_clears_flag() {
        let mut seq = sequencer_at(&["r"], State::Error, State::Initialization);
        seq.context.raise_error();
        let t = seq.step().unwrap();
        assert_eq!(t, Transition::to(State::StartUp, State::StartUp));
        assert!(!seq.context().error_flag());
    }

    #[test]
    fn test_maintenance_from_error() {
        let mut seq = sequencer_at(&["m", "2", "e"], State::Error, State::StandBy);
        seq.context.raise_error();
        assert_eq!(
            seq.step().unwrap(),
            Transition::to(State::Maintenance, State::Error)
        );
        // Returning to Error raises the flag again
        assert_eq!(
            seq.step().unwrap(),
            Transition::to(State::Error, State::Error)
        );
        assert!(seq.context().error_flag());
    }

    #[test]
    fn test_other_input_stays() {
        let mut seq = sequencer_at(&["x"], State::Error, State::StandBy);
        let t = seq.step().unwrap();
        assert_eq!(t, Transition::stay(State::Error, State::StandBy));
        assert!(!seq.context().error_flag());
    }
}
