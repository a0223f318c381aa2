//! SAMRH - Actuator Control Sequencer Firmware
//!
//! Main firmware binary for RP2040-based drive boards. Brings up the
//! operator UART, the drive SPI bus and the status LED, then runs the
//! six-state control sequencer in the main task.
//!
//! The sequencer blocks the thread executor while it waits for operator
//! input or runs a motion phase, so the status task lives on an interrupt
//! executor that preempts it.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::{InterruptExecutor, Spawner};
use embassy_futures::yield_now;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::interrupt;
use embassy_rp::interrupt::{InterruptExt, Priority};
use embassy_rp::peripherals::UART0;
use embassy_rp::spi::Spi;
use embassy_rp::uart::{BufferedInterruptHandler, Uart};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use samrh_core::{Context, Sequencer};
use samrh_hal_rp2040::{spi_config, uart_config, DriveSpi, SerialPort, TickCounter};

use crate::channels::STATE;

mod channels;
mod config;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 256]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 256]> = StaticCell::new();

/// Executor for tasks that must keep running while the sequencer blocks
static EXECUTOR_STATUS: InterruptExecutor = InterruptExecutor::new();

#[interrupt]
unsafe fn SWI_IRQ_1() {
    EXECUTOR_STATUS.on_interrupt()
}

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("SAMRH firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = config::load();
    info!(
        "Configuration loaded: {} units of {} ticks, limit {} deg",
        config.sequencer.motion_units,
        config.sequencer.unit_budget,
        config.sequencer.position_limit_deg
    );

    // Operator terminal on UART0 (GPIO0 TX, GPIO1 RX)
    let tx_buf = TX_BUF.init([0u8; 256]);
    let rx_buf = RX_BUF.init([0u8; 256]);
    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config(&config.serial));
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (tx, rx) = uart.split();
    info!("UART initialized at {} baud", config.serial.baudrate);

    // Drive electronics on SPI0 (GPIO18 SCK, GPIO19 MOSI, GPIO16 MISO)
    let spi = Spi::new_blocking(p.SPI0, p.PIN_18, p.PIN_19, p.PIN_16, spi_config(&config.spi));
    info!("SPI initialized at {} Hz", config.spi.frequency);

    // Lowest interrupt priority, so UART interrupts still preempt it
    interrupt::SWI_IRQ_1.set_priority(Priority::P3);
    let status_spawner = EXECUTOR_STATUS.start(interrupt::SWI_IRQ_1);
    let led = Output::new(p.PIN_25, Level::Low);
    status_spawner.spawn(tasks::status_task(led)).unwrap();

    let mut sequencer = Sequencer::new(
        SerialPort::new(rx, tx),
        DriveSpi::new(spi),
        TickCounter::new(),
        Context::new(config.sequencer, config.readiness),
    );

    while let Err(e) = sequencer.await_start() {
        warn!("Start gate failed: {}", e);
        yield_now().await;
    }
    info!("Start word received, running sequencer");
    STATE.signal(sequencer.current());

    loop {
        match sequencer.step() {
            Ok(transition) => STATE.signal(transition.next),
            Err(e) => warn!("Step in {} failed: {}", sequencer.current().name(), e),
        }
        yield_now().await;
    }
}
