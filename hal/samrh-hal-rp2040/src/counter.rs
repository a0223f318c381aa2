//! Elapsed-time counter on the embassy time driver
//!
//! Counts microseconds, so a 1 MHz unit budget maps directly onto it.

use embassy_time::Instant;
use samrh_hal::Counter;

/// Microsecond counter backed by [`Instant`]
#[derive(Debug, Default)]
pub struct TickCounter {
    started: Option<Instant>,
    frozen: u32,
}

impl TickCounter {
    pub const fn new() -> Self {
        Self {
            started: None,
            frozen: 0,
        }
    }

    fn elapsed(started: Instant) -> u32 {
        u32::try_from(started.elapsed().as_micros()).unwrap_or(u32::MAX)
    }
}

impl Counter for TickCounter {
    fn start(&mut self) {
        self.frozen = 0;
        self.started = Some(Instant::now());
    }

    fn stop(&mut self) {
        if let Some(started) = self.started.take() {
            self.frozen = Self::elapsed(started);
        }
    }

    fn count(&mut self) -> u32 {
        match self.started {
            Some(started) => Self::elapsed(started),
            None => self.frozen,
        }
    }
}
