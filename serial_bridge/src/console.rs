use serial_bridge_protocol::SerialEvent;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::config::{BridgeConfig, OutputFormat, RenderMode};
use crate::error::Result;
use crate::render::{render_body, render_line};

/// Console side of the bridge: renders device lines and flushes each one.
pub struct Console<W> {
    out: W,
    path: String,
    render: RenderMode,
    output: OutputFormat,
}

impl<W: AsyncWrite + Unpin> Console<W> {
    pub fn new(out: W, config: &BridgeConfig) -> Self {
        Self {
            out,
            path: config.path.clone(),
            render: config.render,
            output: config.output,
        }
    }

    /// Writes one line received from the device and flushes it.
    pub async fn line(&mut self, raw: &[u8]) -> Result<()> {
        match self.output {
            OutputFormat::Plain => {
                let text = render_line(raw, self.render)?;
                self.out.write_all(text.as_bytes()).await?;
                self.out.flush().await?;
            }
            OutputFormat::Json => {
                let event = SerialEvent::Line {
                    path: self.path.clone(),
                    line: render_body(raw, self.render)?,
                };
                self.event(&event).await?;
            }
        }
        Ok(())
    }

    /// Writes a lifecycle event. Only the JSON format carries these.
    pub async fn event(&mut self, event: &SerialEvent) -> Result<()> {
        if self.output != OutputFormat::Json {
            return Ok(());
        }

        let mut payload = serde_json::to_vec(event)?;
        payload.push(b'\n');
        self.out.write_all(&payload).await?;
        self.out.flush().await?;
        Ok(())
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}
