//! Protocol dispatcher and command encoder for RealTimeBattle robots.
//!
//! A robot process reads one server message per line from its input and
//! answers with one command per line on its output. This crate drives that
//! conversation:
//!
//! - [`Session`] owns the lifecycle flags (active, alive), the announced game
//!   options, the robot snapshot and the radar table, and offers one gated
//!   method per robot command. Commands whose gate is closed are silently
//!   dropped.
//! - [`RobotHandler`] is the capability trait a robot implements; every
//!   notification has a do-nothing default.
//! - [`run`] sends the handshake and loops over a [`LineSource`] until the
//!   server says `ExitRobot`, the input closes, or the transport fails.
//!
//! # Example
//!
//! ```
//! use rtb_client::{EndReason, RobotHandler, Session, run};
//! use rtb_config::RobotProfile;
//!
//! struct Spinner;
//!
//! impl RobotHandler for Spinner {
//!     fn on_game_starts(&mut self, session: &mut Session<'_>) -> bool {
//!         session.accelerate(1.0);
//!         true
//!     }
//! }
//!
//! let mut input = "Initialize 1\nGameStarts\nExitRobot\n".as_bytes();
//! let mut output = Vec::new();
//! let report = run(RobotProfile::new("spinner"), &mut input, &mut output, &mut Spinner)
//!     .expect("blocking mode is supported");
//!
//! assert_eq!(report.end(), EndReason::Exited);
//! let output = String::from_utf8(output).expect("ascii output");
//! assert_eq!(
//!     output,
//!     "RobotOption 3 0\nName spinner\nColour 4080ff ff8040\nAccelerate 1.000000\n"
//! );
//! ```

mod encoder;
mod error;
mod handler;
mod run;
mod session;
mod state;
mod transport;

pub use self::encoder::{Clearance, CommandEncoder, Delivery};
pub use self::error::ClientError;
pub use self::handler::RobotHandler;
pub use self::run::{EndReason, SessionReport, run};
pub use self::session::{Flow, Session};
pub use self::state::{GameOptions, Lifecycle, RadarSlot, RadarTable, RobotState};
pub use self::transport::{LineSink, LineSource};

#[cfg(test)]
mod tests;
