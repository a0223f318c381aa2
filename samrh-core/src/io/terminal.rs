//! Operator terminal over a UART

use core::fmt::{self, Write as _};

use heapless::String;
use samrh_hal::Uart;
use samrh_protocol::{Command, Numeral, Prompt, NUMERAL_LEN};

use crate::sequencer::SequencerError;
use crate::state::State;

/// Longest formatted line
const LINE_CAPACITY: usize = 80;

/// Operator command stream and message output
///
/// Tokens are read with blocking reads. Line terminators left over from a
/// previous token are skipped before a new token starts.
pub struct Terminal<U> {
    uart: U,
}

impl<U: Uart> Terminal<U> {
    /// Wrap a UART
    pub fn new(uart: U) -> Self {
        Self { uart }
    }

    /// Release the UART
    pub fn into_inner(self) -> U {
        self.uart
    }

    /// Borrow the UART
    #[cfg(test)]
    pub fn uart(&self) -> &U {
        &self.uart
    }

    /// Read an `N`-byte token, blocking until it is complete
    pub fn read_token<const N: usize>(&mut self) -> Result<[u8; N], SequencerError> {
        let mut token = [0u8; N];
        if N == 0 {
            return Ok(token);
        }

        token[0] = loop {
            let byte = self.read_byte()?;
            if !matches!(byte, b'\r' | b'\n') {
                break byte;
            }
        };
        self.uart
            .read_exact(&mut token[1..])
            .map_err(|_| SequencerError::Serial)?;
        Ok(token)
    }

    /// Read a one-byte menu command
    pub fn read_command(&mut self) -> Result<Command, SequencerError> {
        let [byte] = self.read_token::<1>()?;
        Ok(Command::from_byte(byte))
    }

    /// Read a three-byte angle
    pub fn read_numeral(&mut self) -> Result<Numeral, SequencerError> {
        let raw = self.read_token::<NUMERAL_LEN>()?;
        Ok(Numeral::from_raw(raw))
    }

    /// Read whatever byte is next, without skipping anything
    pub fn read_byte(&mut self) -> Result<u8, SequencerError> {
        self.uart.read_byte().map_err(|_| SequencerError::Serial)
    }

    /// Check for pending input without blocking
    pub fn input_ready(&mut self) -> Result<bool, SequencerError> {
        self.uart.is_ready().map_err(|_| SequencerError::Serial)
    }

    /// Drop every byte that is already waiting
    pub fn discard_input(&mut self) -> Result<(), SequencerError> {
        while self.input_ready()? {
            self.read_byte()?;
        }
        Ok(())
    }

    /// Print raw text
    pub fn print(&mut self, text: &str) -> Result<(), SequencerError> {
        self.uart
            .write_blocking(text.as_bytes())
            .map_err(|_| SequencerError::Serial)
    }

    /// Print a fixed prompt
    pub fn prompt(&mut self, prompt: Prompt) -> Result<(), SequencerError> {
        self.print(prompt.text())
    }

    /// Print formatted text
    ///
    /// Text is staged in a line buffer and written out whenever the buffer
    /// fills, so output of any length goes through intact.
    pub fn print_fmt(&mut self, args: fmt::Arguments<'_>) -> Result<(), SequencerError> {
        let mut writer = LineWriter {
            uart: &mut self.uart,
            line: String::new(),
        };
        writer
            .write_fmt(args)
            .and_then(|()| writer.flush_line())
            .map_err(|_| SequencerError::Serial)
    }

    /// Print the state banner followed by the state's menu
    pub fn banner(&mut self, state: State) -> Result<(), SequencerError> {
        self.print_fmt(format_args!("Current State: {}\n", state.name()))?;
        self.prompt(state.menu())
    }

    /// Flush pending output
    pub fn flush(&mut self) -> Result<(), SequencerError> {
        self.uart.flush().map_err(|_| SequencerError::Serial)
    }
}

/// Buffered formatter over a UART
struct LineWriter<'a, U> {
    uart: &'a mut U,
    line: String<LINE_CAPACITY>,
}

impl<U: Uart> LineWriter<'_, U> {
    fn flush_line(&mut self) -> fmt::Result {
        self.uart
            .write_blocking(self.line.as_bytes())
            .map_err(|_| fmt::Error)?;
        self.line.clear();
        Ok(())
    }
}

impl<U: Uart> fmt::Write for LineWriter<'_, U> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for ch in s.chars() {
            if self.line.push(ch).is_err() {
                self.flush_line()?;
                self.line.push(ch).map_err(|_| fmt::Error)?;
            }
        }
        Ok(())
    }
}
