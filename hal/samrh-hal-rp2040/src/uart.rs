//! Operator serial port
//!
//! Any `embedded-io` reader/writer pair works. On the RP2040 that is the
//! two halves of a split `BufferedUart`, whose interrupt-fed ring buffer
//! makes [`UartRx::is_ready`] a cheap check.

use embassy_rp::uart::{Config, DataBits as RpDataBits, Parity as RpParity, StopBits as RpStopBits};
use embedded_io::{Read, ReadReady, Write};
use samrh_hal::uart::{DataBits, Parity, StopBits, UartConfig};
use samrh_hal::{UartRx, UartTx};

/// Serial port built from separate receive and transmit halves
pub struct SerialPort<Rx, Tx> {
    rx: Rx,
    tx: Tx,
}

impl<Rx, Tx> SerialPort<Rx, Tx> {
    pub fn new(rx: Rx, tx: Tx) -> Self {
        Self { rx, tx }
    }
}

impl<Rx: Read + ReadReady, Tx> UartRx for SerialPort<Rx, Tx> {
    type Error = Rx::Error;

    fn read_blocking(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        self.rx.read(buf)
    }

    fn is_ready(&mut self) -> Result<bool, Self::Error> {
        self.rx.read_ready()
    }
}

impl<Rx, Tx: Write> UartTx for SerialPort<Rx, Tx> {
    type Error = Tx::Error;

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.tx.write_all(data)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.tx.flush()
    }
}

/// Convert a board-agnostic UART configuration to embassy-rp's
pub fn uart_config(config: &UartConfig) -> Config {
    let mut rp = Config::default();
    rp.baudrate = config.baudrate;
    rp.data_bits = match config.data_bits {
        DataBits::Seven => RpDataBits::DataBits7,
        DataBits::Eight => RpDataBits::DataBits8,
    };
    rp.parity = match config.parity {
        Parity::None => RpParity::ParityNone,
        Parity::Even => RpParity::ParityEven,
        Parity::Odd => RpParity::ParityOdd,
    };
    rp.stop_bits = match config.stop_bits {
        StopBits::One => RpStopBits::STOP1,
        StopBits::Two => RpStopBits::STOP2,
    };
    rp
}
