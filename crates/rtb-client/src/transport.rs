//! Line-oriented transport seam.
//!
//! The server delivers exactly one message per line and expects one command
//! per line back. Anything that can read or write lines (stdio, a pipe, a
//! socket, an in-memory buffer) plugs in through these two traits; blanket
//! implementations cover every [`BufRead`] and [`Write`].
//!
//! Records are decoded lossily: bytes that are not UTF-8 become U+FFFD, so a
//! garbled record reaches the dispatcher instead of failing the stream.

use std::io::{self, BufRead, Write};

/// A blocking source of newline-terminated records.
pub trait LineSource {
    /// Reads the next record, or `None` once the input is exhausted.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error when the read fails.
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

/// A sink accepting one newline-terminated record per call.
pub trait LineSink {
    /// Writes `line` followed by a newline and flushes it.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error when the write or flush fails.
    fn send_line(&mut self, line: &str) -> io::Result<()>;
}

impl<R: BufRead + ?Sized> LineSource for R {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut record = Vec::new();
        match self.read_until(b'\n', &mut record)? {
            0 => Ok(None),
            _ => Ok(Some(String::from_utf8_lossy(&record).into_owned())),
        }
    }
}

impl<W: Write + ?Sized> LineSink for W {
    fn send_line(&mut self, line: &str) -> io::Result<()> {
        self.write_all(line.as_bytes())?;
        self.write_all(b"\n")?;
        self.flush()
    }
}
