//! Wire vocabulary for the RealTimeBattle robot protocol.
//!
//! The game server talks to every robot over the robot's standard streams,
//! one whitespace-separated message per line. This crate owns the two halves
//! of that vocabulary without doing any I/O itself:
//!
//! - [`Message`] decodes a line sent by the server into a typed value.
//! - [`Command`] renders a robot request into the exact line the server
//!   expects, and reports which lifecycle [`Gate`] must be open before it may
//!   be sent.
//!
//! The numeric code tables shared by both directions live in [`codes`].
//!
//! # Example
//!
//! ```
//! use rtb_protocol::{Command, Message, RotateTarget};
//!
//! let message = Message::parse("Coordinates 10 20 0.5")
//!     .expect("well-formed line")
//!     .expect("known keyword");
//! assert_eq!(
//!     message,
//!     Message::Coordinates { x: 10.0, y: 20.0, angle: 0.5 }
//! );
//!
//! let command = Command::Rotate {
//!     target: RotateTarget::CANNON | RotateTarget::RADAR,
//!     velocity: 1.0,
//! };
//! assert_eq!(command.to_string(), "Rotate 6 1.000000");
//! ```

pub mod codes;
pub mod command;
pub mod error;
pub mod message;

pub use self::codes::{
    DEBUG_SENTINEL, GameOption, ObjectKind, RobotOption, RotateTarget, WarningKind,
    normalize_angle,
};
pub use self::command::{Command, Gate};
pub use self::error::ParseError;
pub use self::message::{Keyword, Message};
