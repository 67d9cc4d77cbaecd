use std::{fmt, io::Write, time::Duration};

use log::info;
use serialport::{DataBits, FlowControl, Parity, SerialPort, StopBits};

use super::Transport;
use crate::{
    constants::{DEFAULT_SERIAL_BAUDRATE, SUPPORTED_BAUDRATES},
    error::Error,
};

/// Serial line settings. Defaults to 9600 bps, 8N1, no flow control.
#[derive(Debug, Clone, PartialEq)]
pub struct SerialConfig {
    /// Line speed (bps), one of the supported baud rates
    pub baud_rate: u32,
    pub data_bits: DataBits,
    pub parity: Parity,
    pub stop_bits: StopBits,
    /// I/O timeout
    pub timeout: Duration,
}

impl Default for SerialConfig {
    fn default() -> Self {
        Self {
            baud_rate: DEFAULT_SERIAL_BAUDRATE,
            data_bits: DataBits::Eight,
            parity: Parity::None,
            stop_bits: StopBits::One,
            timeout: Duration::from_secs(1),
        }
    }
}

impl SerialConfig {
    /// Copies and returns [SerialConfig] with desired line speed (bps)
    pub fn with_baud_rate(&self, baud_rate: u32) -> Self {
        let mut s = self.clone();
        s.baud_rate = baud_rate;
        s
    }

    /// Copies and returns [SerialConfig] with desired [Parity]
    pub fn with_parity(&self, parity: Parity) -> Self {
        let mut s = self.clone();
        s.parity = parity;
        s
    }

    /// Copies and returns [SerialConfig] with desired [StopBits]
    pub fn with_stop_bits(&self, stop_bits: StopBits) -> Self {
        let mut s = self.clone();
        s.stop_bits = stop_bits;
        s
    }

    pub fn validate(&self) -> Result<(), Error> {
        if SUPPORTED_BAUDRATES.contains(&self.baud_rate) {
            Ok(())
        } else {
            Err(Error::UnsupportedBaudRate(self.baud_rate))
        }
    }
}

impl fmt::Display for SerialConfig {
    /// Usual `<baud> <data bits><parity><stop bits>` notation, like `9600 8N1`
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let data_bits = match self.data_bits {
            DataBits::Five => 5,
            DataBits::Six => 6,
            DataBits::Seven => 7,
            DataBits::Eight => 8,
        };
        let parity = match self.parity {
            Parity::None => 'N',
            Parity::Odd => 'O',
            Parity::Even => 'E',
        };
        let stop_bits = match self.stop_bits {
            StopBits::One => 1,
            StopBits::Two => 2,
        };
        write!(f, "{} {}{}{}", self.baud_rate, data_bits, parity, stop_bits)
    }
}

/// [SerialTransport] writes sentences to a serial port. The line is
/// configured on opening and put in raw mode, so sentences go out
/// byte for byte (no `\n` to `\r\n` translation).
pub struct SerialTransport {
    port: Box<dyn SerialPort>,
}

impl SerialTransport {
    /// Opens and configures the serial port at `path`
    pub fn open(path: &str, cfg: &SerialConfig) -> Result<Self, Error> {
        cfg.validate()?;

        let port = serialport::new(path, cfg.baud_rate)
            .data_bits(cfg.data_bits)
            .parity(cfg.parity)
            .stop_bits(cfg.stop_bits)
            .flow_control(FlowControl::None)
            .timeout(cfg.timeout)
            .open()?;

        info!("{} - serial port settings: {}", path, cfg);
        Ok(Self { port })
    }
}

impl Transport for SerialTransport {
    fn send(&mut self, sentence: &str) -> std::io::Result<()> {
        self.port.write_all(sentence.as_bytes())?;
        self.port.flush()
    }
}
