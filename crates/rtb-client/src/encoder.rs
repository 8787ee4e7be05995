//! Gated transmission of robot commands.

use std::fmt;
use std::io;

use rtb_protocol::{Command, Gate};
use tracing::{trace, warn};

use crate::transport::LineSink;

/// Which gates are open at the moment a command is issued.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Clearance {
    /// The session has begun and not yet ended.
    pub active: bool,
    /// The robot is taking part in a match.
    pub alive: bool,
    /// The server runs at the debug level.
    pub debug: bool,
}

impl Clearance {
    /// Whether a command behind `gate` may be sent.
    #[must_use]
    pub const fn permits(self, gate: Gate) -> bool {
        match gate {
            Gate::Active => self.active,
            Gate::Alive => self.alive,
            Gate::Debug => self.active && self.debug,
        }
    }
}

/// Outcome of [`CommandEncoder::send`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// The command was written and flushed.
    Sent,
    /// The command's gate was closed; nothing was written.
    Suppressed,
    /// The sink has failed; nothing was written.
    Dropped,
}

/// Formats commands and writes them to the sink when their gate is open.
///
/// The first write failure is retained and every later command is dropped,
/// so the dispatcher can end the session once the current handler returns.
pub struct CommandEncoder<'io> {
    sink: Box<dyn LineSink + 'io>,
    broken: bool,
    failure: Option<io::Error>,
}

impl<'io> CommandEncoder<'io> {
    /// Wraps `sink`.
    pub fn new(sink: impl LineSink + 'io) -> Self {
        Self {
            sink: Box::new(sink),
            broken: false,
            failure: None,
        }
    }

    /// Sends `command` if `clearance` opens its gate.
    pub fn send(&mut self, clearance: Clearance, command: &Command) -> Delivery {
        if self.broken {
            trace!(command = command.keyword(), "sink failed; command dropped");
            return Delivery::Dropped;
        }
        if !clearance.permits(command.gate()) {
            trace!(
                command = command.keyword(),
                gate = ?command.gate(),
                "gate closed; command suppressed"
            );
            return Delivery::Suppressed;
        }
        let line = command.to_string();
        match self.sink.send_line(&line) {
            Ok(()) => {
                trace!(line = %line, "sent");
                Delivery::Sent
            }
            Err(error) => {
                warn!(command = command.keyword(), error = %error, "failed to write command");
                self.broken = true;
                self.failure = Some(error);
                Delivery::Dropped
            }
        }
    }

    /// Writes `command` regardless of gates, reporting any I/O failure.
    ///
    /// Used for the handshake, which precedes any lifecycle state.
    pub(crate) fn send_ungated(&mut self, command: &Command) -> io::Result<()> {
        let line = command.to_string();
        self.sink.send_line(&line)?;
        trace!(line = %line, "sent");
        Ok(())
    }

    /// Whether a write has failed.
    #[must_use]
    pub const fn is_broken(&self) -> bool {
        self.broken
    }

    /// Removes and returns the retained write failure, if any.
    ///
    /// The encoder keeps dropping commands afterwards.
    pub fn take_failure(&mut self) -> Option<io::Error> {
        self.failure.take()
    }
}

impl fmt::Debug for CommandEncoder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandEncoder")
            .field("broken", &self.is_broken())
            .finish_non_exhaustive()
    }
}
