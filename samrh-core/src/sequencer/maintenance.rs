//! Maintenance handler

use samrh_hal::{Counter, SpiBus, Uart};
use samrh_protocol::{MaintenanceAction, Prompt};

use super::{Sequencer, SequencerError};
use crate::state::{rules, State, Transition};

impl<U: Uart, S: SpiBus, C: Counter> Sequencer<U, S, C> {
    pub(super) fn maintenance(&mut self) -> Result<Transition, SequencerError> {
        self.terminal.banner(State::Maintenance)?;
        let [key] = self.terminal.read_token::<1>()?;
        self.terminal.prompt(Prompt::Newline)?;

        let Some(action) = MaintenanceAction::from_key(key) else {
            return Ok(rules::maintenance_unknown(self.previous));
        };
        self.terminal.print(action.acknowledgement())?;

        self.terminal.prompt(Prompt::MaintenanceNext)?;
        let command = self.terminal.read_command()?;
        self.terminal.prompt(Prompt::Newline)?;
        Ok(rules::maintenance_exit(command, self.previous))
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::*;
    use crate::state::{State, Transition};
    use samrh_protocol::MaintenanceAction;

    #[test]
    fn test_every_action_acknowledges() {
        for action in MaintenanceAction::ALL {
            let key = [action.key()];
            let key = core::str::from_utf8(&key).unwrap();

            let mut seq = sequencer_at(&[key, "r"], State::Maintenance, State::StandBy);
            let t = seq.step().unwrap();
            assert_eq!(t, Transition::stay(State::Maintenance, State::StandBy));
            let (uart, _, _) = seq.into_parts();
            assert!(uart.output().contains(action.acknowledgement()));

            let mut seq = sequencer_at(&[key, "e"], State::Maintenance, State::Initialization);
            let t = seq.step().unwrap();
            assert_eq!(t, Transition::to(State::Initialization, State::Initialization));
            assert!(!seq.context().error_flag());
        }
    }

    #[test]
    fn test_bad_exit_key_is_error() {
        let mut seq = sequencer_at(&["3", "x"], State::Maintenance, State::StandBy);
        let t = seq.step().unwrap();
        assert_eq!(t, Transition::to(State::Error, State::Maintenance));
        assert!(seq.context().error_flag());
    }

    #[test]
    fn test_unknown_selector_reenters() {
        let mut seq = sequencer_at(&["9", "1", "e"], State::Maintenance, State::StartUp);
        let t = seq.step().unwrap();
        assert_eq!(t, Transition::stay(State::Maintenance, State::StartUp));
        assert!(!seq.context().error_flag());

        let t = seq.step().unwrap();
        assert_eq!(t, Transition::to(State::StartUp, State::StartUp));
    }
}
