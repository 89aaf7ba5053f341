//! Line relay between the console and the serial device.
//!
//! The reader loop runs as its own task and owns the device's read half plus
//! the console output. The writer loop runs on the caller's task and owns the
//! device's write half. When console input ends the reader is cancelled
//! through a oneshot signal and joined.

use log::{debug, info};
use serial_bridge_protocol::SerialEvent;
use tokio::{
    io::{self, AsyncBufRead, AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader},
    select, spawn,
    sync::oneshot,
};

use crate::config::BridgeConfig;
use crate::console::Console;
use crate::error::{BridgeError, Result};
use crate::port;
use crate::render::split_terminator;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BridgeSummary {
    pub lines_received: u64,
    pub lines_sent: u64,
}

/// Relays device lines to the console until `shutdown` fires.
///
/// Returns the console and the number of lines relayed. Ends with an error on
/// any I/O or decode failure, or when the device reaches end of stream.
/// Cancellation is observed while waiting on the device and while writing to
/// the console, so a stalled console cannot hold the reader open.
pub async fn reader_loop<R, W>(
    serial: R,
    mut console: Console<W>,
    mut shutdown: oneshot::Receiver<()>,
) -> Result<(Console<W>, u64)>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut serial = BufReader::new(serial);
    let mut line = Vec::new();
    let mut count = 0;

    loop {
        line.clear();
        let relayed = select! {
            _ = &mut shutdown => None,
            n = relay_line(&mut serial, &mut line, &mut console) => Some(n?),
        };

        match relayed {
            None => {
                debug!("Reader cancelled after {count} lines");
                return Ok((console, count));
            }
            Some(0) => {
                return Err(BridgeError::SerialClosed {
                    path: console.path().to_string(),
                });
            }
            Some(_) => count += 1,
        }
    }
}

/// Reads one line from the device and writes it to the console.
/// Returns 0 at end of stream.
async fn relay_line<R, W>(
    serial: &mut R,
    line: &mut Vec<u8>,
    console: &mut Console<W>,
) -> Result<usize>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let n = serial.read_until(b'\n', line).await?;
    if n > 0 {
        console.line(&line[..]).await?;
    }
    Ok(n)
}

/// Forwards console lines to the device, each with exactly one `\n` appended.
///
/// Returns the number of lines sent once input reaches end of stream.
pub async fn writer_loop<R, W>(mut input: R, mut serial: W) -> Result<u64>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut line = Vec::new();
    let mut frame = Vec::new();
    let mut count = 0;

    loop {
        line.clear();
        if input.read_until(b'\n', &mut line).await? == 0 {
            debug!("End of input after {count} lines");
            return Ok(count);
        }

        let (body, _) = split_terminator(&line);
        frame.clear();
        frame.extend_from_slice(body);
        frame.push(b'\n');

        serial.write_all(&frame).await?;
        serial.flush().await?;
        debug!("Sent {} bytes", frame.len());
        count += 1;
    }
}

/// Runs both directions over already opened streams.
pub async fn run_with<SR, SW, I, O>(
    config: &BridgeConfig,
    serial_rx: SR,
    serial_tx: SW,
    input: I,
    output: O,
) -> Result<BridgeSummary>
where
    SR: AsyncRead + Unpin + Send + 'static,
    SW: AsyncWrite + Unpin,
    I: AsyncBufRead + Unpin,
    O: AsyncWrite + Unpin + Send + 'static,
{
    let mut console = Console::new(output, config);
    console
        .event(&SerialEvent::Opened {
            path: config.path.clone(),
            baud_rate: config.baud_rate,
        })
        .await?;

    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    let mut reader = spawn(reader_loop(serial_rx, console, shutdown_rx));

    let writer = writer_loop(input, serial_tx);
    tokio::pin!(writer);

    let lines_sent = select! {
        sent = &mut writer => sent,
        joined = &mut reader => {
            // shutdown_tx is still held, so the reader can only have stopped on an error
            return match joined? {
                Err(e) => Err(e),
                Ok(_) => Err(BridgeError::SerialClosed { path: config.path.clone() }),
            };
        }
    };

    // Join the reader on the writer's error path too; the writer's error wins.
    let _ = shutdown_tx.send(());
    let joined = reader.await;
    let lines_sent = lines_sent?;
    let (mut console, lines_received) = joined??;

    console
        .event(&SerialEvent::Closed {
            path: config.path.clone(),
        })
        .await?;

    Ok(BridgeSummary {
        lines_received,
        lines_sent,
    })
}

/// Opens the configured device and bridges it to this process's stdin/stdout.
pub async fn run(config: &BridgeConfig) -> Result<BridgeSummary> {
    let (serial_rx, serial_tx) = port::open_split(config)?;
    info!("Bridging {} at {} baud", config.path, config.baud_rate);

    run_with(
        config,
        serial_rx,
        serial_tx,
        BufReader::new(io::stdin()),
        io::stdout(),
    )
    .await
}
