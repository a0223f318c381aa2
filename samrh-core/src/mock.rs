//! Scripted peripherals for host tests

use heapless::{Deque, String, Vec};
use samrh_hal::{Counter, SpiBus, UartRx, UartTx};

/// Mock peripheral failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockError {
    /// Script ran out; a real UART would block forever
    Exhausted,
    /// Configured to fail
    Fault,
}

/// UART that replays a fixed operator script
///
/// Bytes queued with [`ScriptedUart::inject_after_polls`] only appear once
/// `is_ready` has been polled that many times, which lets tests place an
/// interrupting key inside a specific motion unit.
pub struct ScriptedUart {
    input: Deque<u8, 256>,
    injections: Vec<(u32, u8), 8>,
    polls: u32,
    output: String<8192>,
}

impl ScriptedUart {
    pub fn new(script: &[&str]) -> Self {
        let mut input = Deque::new();
        for token in script {
            for &byte in token.as_bytes() {
                input.push_back(byte).unwrap();
            }
        }
        Self {
            input,
            injections: Vec::new(),
            polls: 0,
            output: String::new(),
        }
    }

    /// Make `byte` readable on the `polls`-th call to `is_ready`
    pub fn inject_after_polls(mut self, polls: u32, byte: u8) -> Self {
        self.injections.push((polls, byte)).unwrap();
        self
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn remaining(&self) -> usize {
        self.input.len()
    }

    pub fn polls(&self) -> u32 {
        self.polls
    }
}

impl UartRx for ScriptedUart {
    type Error = MockError;

    fn read_blocking(&mut self, buf: &mut [u8]) -> Result<usize, MockError> {
        if self.input.is_empty() {
            return Err(MockError::Exhausted);
        }
        let mut n = 0;
        while n < buf.len() {
            match self.input.pop_front() {
                Some(byte) => {
                    buf[n] = byte;
                    n += 1;
                }
                None => break,
            }
        }
        Ok(n)
    }

    fn is_ready(&mut self) -> Result<bool, MockError> {
        self.polls += 1;
        let polls = self.polls;
        let mut i = 0;
        while i < self.injections.len() {
            if self.injections[i].0 <= polls {
                let (_, byte) = self.injections.swap_remove(i);
                self.input.push_back(byte).unwrap();
            } else {
                i += 1;
            }
        }
        Ok(!self.input.is_empty())
    }
}

impl UartTx for ScriptedUart {
    type Error = MockError;

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), MockError> {
        let text = core::str::from_utf8(data).map_err(|_| MockError::Fault)?;
        // Long sessions only keep the head of the transcript
        let _ = self.output.push_str(text);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), MockError> {
        Ok(())
    }
}

/// SPI bus that records every byte written
pub struct RecordingSpi {
    written: Vec<u8, 64>,
    fail: bool,
}

impl RecordingSpi {
    pub fn new() -> Self {
        Self {
            written: Vec::new(),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            written: Vec::new(),
            fail: true,
        }
    }

    pub fn written(&self) -> &[u8] {
        &self.written
    }
}

impl SpiBus for RecordingSpi {
    type Error = MockError;

    fn write(&mut self, data: &[u8]) -> Result<(), MockError> {
        if self.fail {
            return Err(MockError::Fault);
        }
        self.written
            .extend_from_slice(data)
            .map_err(|_| MockError::Fault)
    }

    fn flush(&mut self) -> Result<(), MockError> {
        Ok(())
    }
}

/// Counter that advances by one tick every time it is read
#[derive(Default)]
pub struct SteppingCounter {
    value: u32,
    running: bool,
    starts: u32,
    stops: u32,
}

impl SteppingCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starts(&self) -> u32 {
        self.starts
    }

    pub fn stops(&self) -> u32 {
        self.stops
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

impl Counter for SteppingCounter {
    fn start(&mut self) {
        self.value = 0;
        self.running = true;
        self.starts += 1;
    }

    fn stop(&mut self) {
        self.running = false;
        self.stops += 1;
    }

    fn count(&mut self) -> u32 {
        if self.running {
            self.value += 1;
        }
        self.value
    }
}
