//! Serial device access.
//!
//! The device is opened once and split into a read half and a write half so the
//! reader task and the writer loop each own one direction.

use log::debug;
use tokio::io::{self, ReadHalf, WriteHalf};
use tokio_serial::{SerialPortBuilderExt, SerialStream};

use crate::config::BridgeConfig;
use crate::error::{BridgeError, Result};

pub type SerialReader = ReadHalf<SerialStream>;
pub type SerialWriter = WriteHalf<SerialStream>;

pub fn open(config: &BridgeConfig) -> Result<SerialStream> {
    debug!("Opening {} at {} baud", config.path, config.baud_rate);

    tokio_serial::new(&config.path, config.baud_rate)
        .open_native_async()
        .map_err(|source| BridgeError::Open {
            path: config.path.clone(),
            baud_rate: config.baud_rate,
            source,
        })
}

pub fn open_split(config: &BridgeConfig) -> Result<(SerialReader, SerialWriter)> {
    let stream = open(config)?;
    Ok(io::split(stream))
}
