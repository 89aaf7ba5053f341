use std::{io, string::FromUtf8Error};

use thiserror::Error;
use tokio::task::JoinError;

pub type Result<T> = std::result::Result<T, BridgeError>;

#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("failed to open serial device {path} at {baud_rate} baud: {source}")]
    Open {
        path: String,
        baud_rate: u32,
        #[source]
        source: tokio_serial::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Bytes from the device were not valid UTF-8 and escaping was not requested.
    #[error("received non-UTF-8 line {line:?}: {source}")]
    Decode {
        line: Vec<u8>,
        #[source]
        source: FromUtf8Error,
    },

    #[error("serial device {path} closed the connection")]
    SerialClosed { path: String },

    #[error("failed to encode event: {0}")]
    Json(#[from] serde_json::Error),

    #[error("reader task failed: {0}")]
    ReaderTask(#[from] JoinError),
}
