//! Status task
//!
//! Blinks the status LED as a heartbeat and logs every state change the
//! control loop publishes. Spawned on the interrupt executor, so the
//! heartbeat keeps its period while the sequencer blocks on input.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_rp::gpio::Output;
use embassy_time::{Duration, Ticker};

use samrh_core::State;

use crate::channels::STATE;

/// Heartbeat period in milliseconds
pub const HEARTBEAT_INTERVAL_MS: u64 = 500;

#[embassy_executor::task]
pub async fn status_task(mut led: Output<'static>) {
    info!("Status task started");

    let mut ticker = Ticker::every(Duration::from_millis(HEARTBEAT_INTERVAL_MS));
    let mut last = State::StartUp;

    loop {
        match select(ticker.next(), STATE.wait()).await {
            Either::First(()) => {
                led.toggle();
                trace!("heartbeat");
            }
            Either::Second(state) => {
                if state != last {
                    info!("State: {} -> {}", last.name(), state.name());
                    last = state;
                }
            }
        }
    }
}
