//! Errors raised while starting a session.
//!
//! Everything that can go wrong once the session is running (malformed lines,
//! gate violations, a lost transport) is absorbed by the dispatcher and
//! reported through [`crate::SessionReport`] instead. I/O errors are wrapped
//! in `Arc` to satisfy the `result_large_err` Clippy lint.

use std::io;
use std::sync::Arc;

use rtb_config::ConnectionMode;
use thiserror::Error;

/// Errors that prevent a session from starting.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The profile asks for a communication mode the client cannot drive.
    #[error("unsupported communication mode: {mode:?}")]
    UnsupportedMode {
        /// Mode requested by the profile.
        mode: ConnectionMode,
    },

    /// The handshake could not be written to the server.
    #[error("failed to send handshake: {source}")]
    Handshake {
        /// Underlying I/O error.
        #[source]
        source: Arc<io::Error>,
    },

    /// [`crate::Session::begin`] was called on a session that already began.
    #[error("session already started")]
    AlreadyStarted,
}

impl ClientError {
    pub(crate) fn handshake(source: io::Error) -> Self {
        Self::Handshake {
            source: Arc::new(source),
        }
    }
}

#[cfg(test)]
mod tests;
