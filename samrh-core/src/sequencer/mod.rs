//! Control sequencer
//!
//! Owns the peripherals and the [`Context`], and runs the handler of the
//! current state once per [`Sequencer::step`]. Handlers are split across
//! the submodules by state; each returns a [`Transition`] that `step`
//! applies.
//!
//! Entering [`State::Error`] from any other state raises the context's
//! error flag. The flag is cleared again by the error handler before it
//! evaluates the operator's answer.

mod maintenance;
mod operation;
mod recovery;
mod standby;
mod startup;

use core::convert::Infallible;

use samrh_hal::{Counter, SpiBus, Uart};
use samrh_protocol::{is_start_word, Prompt, START_WORD};

use crate::context::Context;
use crate::io::{Actuator, Terminal};
use crate::state::{State, Transition};

/// Errors from the sequencer's collaborators
///
/// Operator mistakes are never errors here; they are state transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SequencerError {
    /// Operator serial link failed
    Serial,
    /// Write to the drive electronics failed
    Actuator,
}

/// Six-state control sequencer
pub struct Sequencer<U, S, C> {
    terminal: Terminal<U>,
    actuator: Actuator<S>,
    counter: C,
    context: Context,
    current: State,
    previous: State,
}

impl<U: Uart, S: SpiBus, C: Counter> Sequencer<U, S, C> {
    /// Create a sequencer positioned at [`State::StartUp`]
    pub fn new(uart: U, spi: S, counter: C, context: Context) -> Self {
        let default_duty = context.config.default_duty;
        Self {
            terminal: Terminal::new(uart),
            actuator: Actuator::new(spi, default_duty),
            counter,
            context,
            current: State::StartUp,
            previous: State::StartUp,
        }
    }

    /// State whose handler runs on the next step
    pub fn current(&self) -> State {
        self.current
    }

    /// State to resume after a diversion
    pub fn previous(&self) -> State {
        self.previous
    }

    /// Shared state
    pub fn context(&self) -> &Context {
        &self.context
    }

    /// Release the peripherals
    pub fn into_parts(self) -> (U, S, C) {
        (
            self.terminal.into_inner(),
            self.actuator.into_inner(),
            self.counter,
        )
    }

    /// Block until the operator types the start word
    pub fn await_start(&mut self) -> Result<(), SequencerError> {
        loop {
            self.terminal.prompt(Prompt::StartWord)?;
            let token = self.terminal.read_token::<{ START_WORD.len() }>()?;
            self.terminal.prompt(Prompt::Newline)?;
            if is_start_word(&token) {
                return Ok(());
            }
        }
    }

    /// Run the current state's handler once and apply its transition
    ///
    /// On error `current` and `previous` are left unchanged, so the step can
    /// be retried. Input the handler already consumed is not replayed, and
    /// the setpoint is only stored once the duty write succeeds.
    pub fn step(&mut self) -> Result<Transition, SequencerError> {
        let transition = match self.current {
            State::StartUp => self.start_up()?,
            State::Initialization => self.initialization()?,
            State::StandBy => self.stand_by()?,
            State::Operation => self.operation()?,
            State::Maintenance => self.maintenance()?,
            State::Error => self.error()?,
        };
        self.terminal.flush()?;
        self.apply(transition);
        Ok(transition)
    }

    /// Step forever; only returns if a collaborator fails
    pub fn run(&mut self) -> Result<Infallible, SequencerError> {
        loop {
            self.step()?;
        }
    }

    fn apply(&mut self, transition: Transition) {
        if transition.next == State::Error && self.current != State::Error {
            self.context.raise_error();
        }
        self.current = transition.next;
        self.previous = transition.previous;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ReadinessFlags, SequencerConfig};
    use crate::mock::{RecordingSpi, ScriptedUart, SteppingCounter};
    use crate::setpoint::Setpoint;
    use samrh_protocol::Command;

    pub(super) type TestSequencer = Sequencer<ScriptedUart, RecordingSpi, SteppingCounter>;

    /// Ticks per unit in tests; each unit polls for input `BUDGET - 1` times
    pub(super) const BUDGET: u32 = 4;

    pub(super) fn config() -> SequencerConfig {
        SequencerConfig {
            unit_budget: BUDGET,
            ..Default::default()
        }
    }

    pub(super) fn sequencer_with(uart: ScriptedUart, readiness: ReadinessFlags) -> TestSequencer {
        Sequencer::new(
            uart,
            RecordingSpi::new(),
            SteppingCounter::new(),
            Context::new(config(), readiness),
        )
    }

    pub(super) fn sequencer(script: &[&str]) -> TestSequencer {
        sequencer_with(ScriptedUart::new(script), ReadinessFlags::default())
    }

    /// Sequencer already sitting in `state` with `previous` recorded
    pub(super) fn sequencer_at(script: &[&str], state: State, previous: State) -> TestSequencer {
        let mut seq = sequencer(script);
        seq.current = state;
        seq.previous = previous;
        seq
    }

    /// `is_ready` poll count at which a key lands inside unit `unit`
    ///
    /// The first poll is the operation handler's entry drain.
    pub(super) fn poll_in_unit(unit: u32) -> u32 {
        1 + (BUDGET - 1) * (unit - 1) + 1
    }

    #[test]
    fn test_starts_at_start_up() {
        let seq = sequencer(&[]);
        assert_eq!(seq.current(), State::StartUp);
        assert_eq!(seq.previous(), State::StartUp);
        assert!(!seq.context().error_flag());
    }

    #[test]
    fn test_await_start_reprompts() {
        let mut seq = sequencer(&["stop!", "start"]);
        seq.await_start().unwrap();
        let (uart, _, _) = seq.into_parts();
        assert_eq!(uart.output().matches("Enter start").count(), 2);
        assert_eq!(uart.remaining(), 0);
    }

    #[test]
    fn test_failed_step_keeps_state() {
        let mut seq = sequencer(&[]);
        assert_eq!(seq.step(), Err(SequencerError::Serial));
        assert_eq!(seq.current(), State::StartUp);
    }

    #[test]
    fn test_entering_error_raises_flag() {
        let mut seq = sequencer(&["x"]);
        let t = seq.step().unwrap();
        assert_eq!(t, Transition::to(State::Error, State::StartUp));
        assert!(seq.context().error_flag());
    }

    #[test]
    fn test_end_to_end_interrupted_at_unit_three() {
        let uart = ScriptedUart::new(&["start", "n", "n", "n", "045", "090", "030", "s", "2"])
            .inject_after_polls(poll_in_unit(3), b's');
        let mut seq = sequencer_with(uart, ReadinessFlags::default());

        seq.await_start().unwrap();
        assert_eq!(seq.step().unwrap().next, State::Initialization);
        assert_eq!(seq.step().unwrap().next, State::StandBy);

        let t = seq.step().unwrap();
        assert_eq!(t, Transition::to(State::Operation, State::StandBy));
        assert_eq!(
            seq.context().setpoint(),
            Some(Setpoint { czt: 45, zetat: 90, xit: 30 })
        );

        let t = seq.step().unwrap();
        assert_eq!(t, Transition::to(State::StandBy, State::Operation));
        let report = seq.context().last_motion().unwrap();
        assert_eq!(report.units_completed, 2);
        assert_eq!(report.interrupted_by, Some(Command::StartStop));

        let (uart, spi, counter) = seq.into_parts();
        assert_eq!(spi.written(), &[0x02, 0x04]);
        assert_eq!(counter.starts(), 3);
        assert!(!counter.is_running());
        assert!(uart.output().contains("Setting point: 2\n"));
        assert!(!uart.output().contains("Setting point: 3\n"));
        assert!(uart.output().contains("Stopping command received"));
    }

    #[test]
    fn test_error_restart_after_any_cause() {
        // StartUp error, Initialization error, stand-by refusal, maintenance typo
        let cases: [(&[&str], State); 4] = [
            (&["x"], State::StartUp),
            (&["n", "q"], State::Initialization),
            (&["n", "n", "n", "045", "090", "030", "x", "4"], State::StandBy),
            (&["m", "1", "z"], State::Maintenance),
        ];

        for (script, cause) in cases {
            let mut tokens: heapless::Vec<&str, 12> = heapless::Vec::new();
            tokens.extend_from_slice(script).unwrap();
            tokens.push("r").unwrap();
            let mut seq = sequencer(&tokens);

            while seq.current() != State::Error {
                seq.step().unwrap();
            }
            assert_eq!(seq.previous(), cause);
            assert!(seq.context().error_flag());

            let t = seq.step().unwrap();
            assert_eq!(t, Transition::to(State::StartUp, State::StartUp));
            assert!(!seq.context().error_flag());
        }
    }
}
