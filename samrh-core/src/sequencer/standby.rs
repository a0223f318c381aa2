//! StandBy handler: setpoint acceptance

use samrh_hal::{Counter, SpiBus, Uart};
use samrh_protocol::{Command, DutySelector, Prompt};

use super::{Sequencer, SequencerError};
use crate::setpoint::{check_bound, Axis, Setpoint};
use crate::state::{rules, State, Transition};

impl<U: Uart, S: SpiBus, C: Counter> Sequencer<U, S, C> {
    pub(super) fn stand_by(&mut self) -> Result<Transition, SequencerError> {
        self.terminal.banner(State::StandBy)?;
        let command = self.terminal.read_command()?;
        self.terminal.prompt(Prompt::Newline)?;

        match rules::stand_by(command, self.previous) {
            Some(transition) => Ok(transition),
            None => self.accept_setpoint(),
        }
    }

    /// Read the three angles, confirm the start and set the duty divider
    fn accept_setpoint(&mut self) -> Result<Transition, SequencerError> {
        let limit = self.context.config.position_limit_deg;
        self.terminal.prompt(Prompt::SetpointIntro)?;

        let mut setpoint = Setpoint::default();
        for axis in Axis::ALL {
            self.terminal.print_fmt(format_args!("{}: ", axis.label()))?;
            let numeral = self.terminal.read_numeral()?;
            self.terminal.prompt(Prompt::Newline)?;

            match check_bound(axis, numeral, limit) {
                Ok(value) => setpoint.set(axis, value),
                Err(err) => {
                    self.terminal.print_fmt(format_args!(
                        "Error Out of Range: {} > {} degrees\n",
                        err.axis.label(),
                        err.limit
                    ))?;
                    return Ok(Transition::to(State::StandBy, State::StandBy));
                }
            }
        }

        self.terminal.prompt(Prompt::StartConfirm)?;
        let confirm = self.terminal.read_command()?;
        self.terminal.prompt(Prompt::Newline)?;
        let transition = if confirm == Command::StartStop {
            self.terminal.prompt(Prompt::DriversEnabled)?;
            Transition::to(State::Operation, State::StandBy)
        } else {
            self.terminal.prompt(Prompt::StartNotReceived)?;
            Transition::to(State::Error, State::StandBy)
        };

        // Duty is written whatever the confirmation was
        self.terminal.prompt(Prompt::DutyDivider)?;
        let [key] = self.terminal.read_token::<1>()?;
        self.terminal.prompt(Prompt::Newline)?;
        self.actuator.apply_duty(DutySelector::from_key(key))?;

        self.context.set_setpoint(setpoint);
        Ok(transition)
    }
}
