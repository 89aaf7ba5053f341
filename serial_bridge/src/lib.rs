//! Line-oriented bridge between a terminal and a serial device.

pub mod bridge;
pub mod config;
pub mod console;
pub mod error;
pub mod port;
pub mod render;

pub use bridge::{run, run_with, BridgeSummary};
pub use config::{BridgeConfig, OutputFormat, RenderMode};
pub use error::{BridgeError, Result};
