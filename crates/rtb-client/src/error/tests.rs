//! Unit tests for client errors.

use std::error::Error as _;
use std::io;

use super::*;

#[test]
fn unsupported_mode_names_the_mode() {
    let error = ClientError::UnsupportedMode {
        mode: ConnectionMode::Signal,
    };
    assert_eq!(error.to_string(), "unsupported communication mode: Signal");
}

#[test]
fn handshake_failure_keeps_its_source() {
    let error = ClientError::handshake(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
    assert!(error.to_string().contains("pipe closed"));
    assert!(error.source().is_some());
}
