use std::fmt::Write;

use crate::config::RenderMode;
use crate::error::{BridgeError, Result};

/// Splits a line into its body and its `\n` or `\r\n` terminator.
pub fn split_terminator(line: &[u8]) -> (&[u8], &[u8]) {
    let body_len = match line {
        [.., b'\r', b'\n'] => line.len() - 2,
        [.., b'\n'] => line.len() - 1,
        _ => line.len(),
    };
    line.split_at(body_len)
}

/// Renders a device line for the console, keeping its terminator.
pub fn render_line(line: &[u8], mode: RenderMode) -> Result<String> {
    match mode {
        RenderMode::Strict => decode(line),
        RenderMode::Escape => {
            let (body, terminator) = split_terminator(line);
            let mut s = escape(body);
            // terminator is ASCII
            s.extend(terminator.iter().map(|&b| b as char));
            Ok(s)
        }
    }
}

/// Renders a device line without its terminator.
pub fn render_body(line: &[u8], mode: RenderMode) -> Result<String> {
    let (body, _) = split_terminator(line);
    match mode {
        RenderMode::Strict => decode(body),
        RenderMode::Escape => Ok(escape(body)),
    }
}

fn decode(bytes: &[u8]) -> Result<String> {
    String::from_utf8(bytes.to_vec()).map_err(|source| BridgeError::Decode {
        line: bytes.to_vec(),
        source,
    })
}

/// Two-character escape for the control bytes devices commonly emit.
fn short_escape(b: u8) -> Option<char> {
    match b {
        b'\x1b' => Some('e'),
        b'\n' => Some('n'),
        b'\r' => Some('r'),
        b'\t' => Some('t'),
        b'\0' => Some('0'),
        b'\\' => Some('\\'),
        _ => None,
    }
}

/// Printable ASCII passes through; everything else becomes `\<c>` or `\xNN`.
pub fn escape(data: &[u8]) -> String {
    let mut s = String::with_capacity(data.len());
    for &b in data {
        if let Some(c) = short_escape(b) {
            s.push('\\');
            s.push(c);
        } else if b.is_ascii_graphic() || b == b' ' {
            s.push(b as char);
        } else {
            // writing to a String cannot fail
            let _ = write!(s, "\\x{b:02X}");
        }
    }
    s
}
