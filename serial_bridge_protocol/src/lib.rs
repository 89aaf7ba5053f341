use serde::{Deserialize, Serialize};

/// One record of bridge activity, written as a JSON line in `--json` mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SerialEvent {
    Opened { path: String, baud_rate: u32 },
    /// A line received from the device, without its terminator.
    Line { path: String, line: String },
    Closed { path: String },
}
