//! The blocking read loop.

use std::fmt;

use rtb_config::RobotProfile;
use tracing::{info, warn};

use crate::error::ClientError;
use crate::handler::RobotHandler;
use crate::session::{Flow, Session};
use crate::transport::{LineSink, LineSource};

/// Why a session stopped reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// The server sent `ExitRobot`.
    Exited,
    /// The input stream ended before `ExitRobot`.
    InputClosed,
    /// Reading from the input stream failed.
    ReadFailed,
    /// Writing a command failed.
    WriteFailed,
}

impl EndReason {
    /// Whether the session ended without a transport fault.
    #[must_use]
    pub const fn is_clean(self) -> bool {
        matches!(self, Self::Exited | Self::InputClosed)
    }
}

impl fmt::Display for EndReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Exited => "server requested exit",
            Self::InputClosed => "input closed",
            Self::ReadFailed => "read failed",
            Self::WriteFailed => "write failed",
        })
    }
}

/// Summary of a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionReport {
    lines_read: u64,
    end: EndReason,
}

impl SessionReport {
    /// Number of lines read from the server.
    #[must_use]
    pub const fn lines_read(&self) -> u64 {
        self.lines_read
    }

    /// Why the session ended.
    #[must_use]
    pub const fn end(&self) -> EndReason {
        self.end
    }
}

impl Session<'_> {
    /// Feeds lines from `source` through [`Session::dispatch`] until the
    /// session ends or the input is exhausted.
    ///
    /// Call [`Session::begin`] first; an inactive session reads nothing.
    pub fn run_with<S, H>(&mut self, source: &mut S, handler: &mut H) -> SessionReport
    where
        S: LineSource + ?Sized,
        H: RobotHandler + ?Sized,
    {
        let mut lines_read = 0_u64;
        let end = loop {
            if !self.is_active() {
                break self.stopped_reason();
            }
            match source.next_line() {
                Ok(Some(line)) => {
                    lines_read = lines_read.saturating_add(1);
                    if self.dispatch(&line, handler) == Flow::Stop {
                        break self.stopped_reason();
                    }
                }
                Ok(None) => {
                    info!("server closed the input stream");
                    self.end();
                    break EndReason::InputClosed;
                }
                Err(error) => {
                    warn!(error = %error, "failed to read from server");
                    self.end();
                    break EndReason::ReadFailed;
                }
            }
        };
        if let Some(error) = self.take_write_failure() {
            warn!(error = %error, "command stream failed");
        }
        info!(lines_read, reason = %end, "session finished");
        SessionReport { lines_read, end }
    }

    fn stopped_reason(&self) -> EndReason {
        if self.write_failed() {
            EndReason::WriteFailed
        } else {
            EndReason::Exited
        }
    }
}

/// Runs a complete session: handshake, then dispatch until it ends.
///
/// # Errors
///
/// Returns [`ClientError`] when the session cannot start. Failures after
/// the handshake end the session and are reported in the
/// [`SessionReport`] instead.
pub fn run<S, W, H>(
    profile: RobotProfile,
    source: &mut S,
    sink: W,
    handler: &mut H,
) -> Result<SessionReport, ClientError>
where
    S: LineSource + ?Sized,
    W: LineSink,
    H: RobotHandler + ?Sized,
{
    let mut session = Session::new(profile, sink);
    session.begin()?;
    Ok(session.run_with(source, handler))
}
