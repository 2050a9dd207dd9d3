//! Serial link to the adapter
//!
//! Raw 8N1 at the configured speed, no flow control.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use keybridge_input::WireEvent;
use serialport::{DataBits, FlowControl, Parity, StopBits};
use thiserror::Error;
use tracing::{debug, info};

/// Write timeout on the serial link
pub const WRITE_TIMEOUT_MS: u64 = 500;

#[derive(Debug, Error)]
pub enum SerialPortError {
    #[error("Failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: serialport::Error,
    },

    #[error("Write failed: {0}")]
    Write(#[from] io::Error),
}

pub struct SerialPort {
    port: Box<dyn serialport::SerialPort>,
    path: PathBuf,
}

impl SerialPort {
    /// Open a serial device at `baud`, 8N1
    pub fn open(path: impl AsRef<Path>, baud: u32) -> Result<Self, SerialPortError> {
        let path = path.as_ref().to_path_buf();

        info!("Opening serial port {}", path.display());
        let port = serialport::new(path.to_string_lossy(), baud)
            .data_bits(DataBits::Eight)
            .parity(Parity::None)
            .stop_bits(StopBits::One)
            .flow_control(FlowControl::None)
            .timeout(Duration::from_millis(WRITE_TIMEOUT_MS))
            .open()
            .map_err(|source| SerialPortError::Open {
                path: path.clone(),
                source,
            })?;
        debug!("{} set to {} baud 8N1", path.display(), baud);

        Ok(Self { port, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn send(&mut self, event: WireEvent) -> Result<(), SerialPortError> {
        debug!("Sending {:?}", event);
        self.port.write_all(&event.encode())?;
        self.port.flush()?;
        Ok(())
    }

    /// Tell the adapter to open all keys
    pub fn send_reset(&mut self) -> Result<(), SerialPortError> {
        self.send(WireEvent::Reset)
    }
}

impl Write for SerialPort {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.port.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.port.flush()
    }
}
