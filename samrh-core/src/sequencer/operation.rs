//! Operation handler: the timed motion phase
//!
//! Motion runs as a fixed number of units. Each unit lasts until the
//! counter reaches the unit budget; while it runs the terminal is polled
//! and `p` or `s` cuts the phase short. This is the only place the
//! sequencer waits without blocking on a read.

use samrh_hal::{Counter, SpiBus, Uart};
use samrh_protocol::{Command, Prompt};

use super::{Sequencer, SequencerError};
use crate::context::MotionReport;
use crate::setpoint::Axis;
use crate::state::{State, Transition};

impl<U: Uart, S: SpiBus, C: Counter> Sequencer<U, S, C> {
    pub(super) fn operation(&mut self) -> Result<Transition, SequencerError> {
        self.terminal.banner(State::Operation)?;
        if let Some(target) = self.context.setpoint() {
            self.terminal.print("Target:")?;
            for axis in Axis::ALL {
                self.terminal
                    .print_fmt(format_args!(" {} {}", axis.label(), target.get(axis)))?;
            }
            self.terminal.prompt(Prompt::Newline)?;
        }

        // Stale keystroke from the confirmation line
        if self.terminal.input_ready()? {
            self.terminal.read_byte()?;
        }

        let budget = self.context.config.unit_budget;
        let mut report = MotionReport {
            units_completed: 0,
            interrupted_by: None,
        };

        for unit in 1..=self.context.config.motion_units {
            if let Some(command) = self.run_unit(budget)? {
                let notice = match command {
                    Command::NewPoint => Prompt::NewPointReceived,
                    _ => Prompt::StopReceived,
                };
                self.terminal.prompt(notice)?;
                self.terminal.discard_input()?;
                report.interrupted_by = Some(command);
                break;
            }
            report.units_completed = unit;
            self.terminal
                .print_fmt(format_args!("Setting point: {}\n", unit))?;
        }

        self.context.record_motion(report);
        Ok(Transition::to(State::StandBy, State::Operation))
    }

    /// Run one unit, returning the command that interrupted it
    fn run_unit(&mut self, budget: u32) -> Result<Option<Command>, SequencerError> {
        self.counter.start();
        while !self.counter.expired(budget) {
            if !self.terminal.input_ready()? {
                continue;
            }
            let command = Command::from_byte(self.terminal.read_byte()?);
            if command.interrupts_motion() {
                self.counter.stop();
                return Ok(Some(command));
            }
        }
        self.counter.stop();
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::*;
    use crate::context::MotionReport;
    use crate::mock::ScriptedUart;
    use crate::state::{State, Transition};
    use samrh_protocol::Command;

    #[test]
    fn test_runs_every_unit() {
        let mut seq = sequencer_at(&[], State::Operation, State::StandBy);
        let t = seq.step().unwrap();
        assert_eq!(t, Transition::to(State::StandBy, State::Operation));

        let report = seq.context().last_motion().unwrap();
        assert_eq!(report.units_completed, 10);
        assert!(report.is_complete());

        let (uart, _, counter) = seq.into_parts();
        assert_eq!(counter.starts(), 10);
        assert_eq!(counter.stops(), 10);
        let mut reports = uart
            .output()
            .lines()
            .filter_map(|line| line.strip_prefix("Setting point: "));
        for unit in 1..=10u32 {
            assert_eq!(reports.next().and_then(|k| k.parse().ok()), Some(unit));
        }
        assert_eq!(reports.next(), None);
        // Entry drain plus three polls per unit
        assert_eq!(uart.polls(), 1 + 10 * (BUDGET - 1));
    }

    #[test]
    fn test_interrupt_halts_in_unit() {
        for (key, command) in [(b'p', Command::NewPoint), (b's', Command::StartStop)] {
            for unit in 1..=10u32 {
                let uart = ScriptedUart::new(&[]).inject_after_polls(poll_in_unit(unit), key);
                let mut seq = sequencer_with(uart, Default::default());
                seq.current = State::Operation;
                seq.previous = State::StandBy;

                let t = seq.step().unwrap();
                assert_eq!(t, Transition::to(State::StandBy, State::Operation));
                assert_eq!(
                    seq.context().last_motion(),
                    Some(MotionReport {
                        units_completed: (unit - 1) as u8,
                        interrupted_by: Some(command),
                    })
                );
                let (_, _, counter) = seq.into_parts();
                assert_eq!(counter.starts(), unit);
                assert!(!counter.is_running());
            }
        }
    }

    #[test]
    fn test_other_keys_are_ignored() {
        let uart = ScriptedUart::new(&[])
            .inject_after_polls(poll_in_unit(2), b'x')
            .inject_after_polls(poll_in_unit(4), b'n');
        let mut seq = sequencer_with(uart, Default::default());
        seq.current = State::Operation;
        seq.step().unwrap();
        assert_eq!(seq.context().last_motion().unwrap().units_completed, 10);
    }

    #[test]
    fn test_entry_drain_and_discard() {
        // `q` is drained on entry; the extra `p`s are discarded after the stop
        let uart = ScriptedUart::new(&["q"])
            .inject_after_polls(poll_in_unit(1), b's')
            .inject_after_polls(poll_in_unit(1), b'p')
            .inject_after_polls(poll_in_unit(1), b'p');
        let mut seq = sequencer_with(uart, Default::default());
        seq.current = State::Operation;
        seq.step().unwrap();

        let report = seq.context().last_motion().unwrap();
        assert_eq!(report.units_completed, 0);
        assert_eq!(report.interrupted_by, Some(Command::StartStop));
        let (uart, _, _) = seq.into_parts();
        assert_eq!(uart.remaining(), 0);
        assert!(uart.output().contains("\nStopping command received\n"));
    }

    #[test]
    fn test_target_is_printed() {
        let mut seq = sequencer(&["n", "045", "090", "030", "s", "2"]);
        seq.current = State::StandBy;
        seq.step().unwrap();
        seq.step().unwrap();
        let (uart, _, _) = seq.into_parts();
        assert!(uart.output().contains("Target: czt 45 zetat 90 xit 30\n"));
    }
}
