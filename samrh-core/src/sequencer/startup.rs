//! StartUp and Initialization handlers

use samrh_hal::{Counter, SpiBus, Uart};
use samrh_protocol::Prompt;

use super::{Sequencer, SequencerError};
use crate::state::{rules, State, Transition};

impl<U: Uart, S: SpiBus, C: Counter> Sequencer<U, S, C> {
    pub(super) fn start_up(&mut self) -> Result<Transition, SequencerError> {
        self.terminal.banner(State::StartUp)?;
        let command = self.terminal.read_command()?;
        self.terminal.prompt(Prompt::Newline)?;
        Ok(rules::start_up(command, &self.context.readiness))
    }

    pub(super) fn initialization(&mut self) -> Result<Transition, SequencerError> {
        self.terminal.banner(State::Initialization)?;
        let command = self.terminal.read_command()?;
        self.terminal.prompt(Prompt::Newline)?;
        Ok(rules::initialization(command, &self.context.readiness))
    }
}
