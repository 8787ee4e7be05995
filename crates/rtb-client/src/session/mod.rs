//! The session context shared by the dispatcher and the robot's handlers.
//!
//! A [`Session`] owns every piece of protocol state: the lifecycle flags, the
//! announced game options, the robot snapshot, the radar table and the
//! command encoder. Handlers receive it by mutable reference, read state
//! through accessors and issue commands through the gated command methods,
//! each of which returns the [`Delivery`] of its line.
//! Only the dispatcher (see [`Session::dispatch`]) mutates the model.

mod dispatch;

use std::io;

use rtb_config::RobotProfile;
use rtb_protocol::{Command, GameOption, ObjectKind, RobotOption, RotateTarget};
use tracing::info;

use crate::encoder::{Clearance, CommandEncoder, Delivery};
use crate::error::ClientError;
use crate::state::{GameOptions, Lifecycle, RadarSlot, RadarTable, RobotState};
use crate::transport::LineSink;

pub use self::dispatch::Flow;

/// Handshake value for [`RobotOption::UseNonBlocking`] in blocking mode.
const BLOCKING: i32 = 0;

/// Protocol state plus the outbound half of the connection.
#[derive(Debug)]
pub struct Session<'io> {
    profile: RobotProfile,
    lifecycle: Lifecycle,
    options: GameOptions,
    robot: RobotState,
    radar: RadarTable,
    encoder: CommandEncoder<'io>,
}

impl<'io> Session<'io> {
    /// Creates an inactive session writing commands to `sink`.
    pub fn new(profile: RobotProfile, sink: impl LineSink + 'io) -> Self {
        Self {
            profile,
            lifecycle: Lifecycle::default(),
            options: GameOptions::default(),
            robot: RobotState::default(),
            radar: RadarTable::default(),
            encoder: CommandEncoder::new(sink),
        }
    }

    /// Activates the session and sends the communication-mode handshake.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::UnsupportedMode`] when the profile asks for a
    /// mode other than blocking, [`ClientError::AlreadyStarted`] when called
    /// twice, and [`ClientError::Handshake`] when the handshake cannot be
    /// written.
    pub fn begin(&mut self) -> Result<(), ClientError> {
        let mode = self.profile.mode();
        if !mode.is_supported() {
            return Err(ClientError::UnsupportedMode { mode });
        }
        if self.lifecycle.is_active() {
            return Err(ClientError::AlreadyStarted);
        }
        self.encoder
            .send_ungated(&Command::RobotOption {
                option: RobotOption::UseNonBlocking,
                value: BLOCKING,
            })
            .map_err(ClientError::handshake)?;
        self.lifecycle.begin();
        info!(robot = self.profile.name(), "session started");
        Ok(())
    }

    /// Between session start and `ExitRobot` (or transport loss).
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.lifecycle.is_active()
    }

    /// Inside a match and not yet dead.
    #[must_use]
    pub const fn is_alive(&self) -> bool {
        self.lifecycle.is_alive()
    }

    /// Announced value of `option`, zero when never announced.
    #[must_use]
    pub fn option(&self, option: GameOption) -> f64 {
        self.options.get(option)
    }

    /// Whether the server runs at the debug level.
    #[must_use]
    pub fn is_debug(&self) -> bool {
        self.options.is_debug()
    }

    /// Latest robot snapshot.
    #[must_use]
    pub const fn robot(&self) -> &RobotState {
        &self.robot
    }

    /// Radar slot for `kind`; `None` unless `kind` is a radar category.
    #[must_use]
    pub fn radar(&self, kind: ObjectKind) -> Option<&RadarSlot> {
        self.radar.slot(kind)
    }

    /// Identity and connection settings.
    #[must_use]
    pub const fn profile(&self) -> &RobotProfile {
        &self.profile
    }

    /// Whether a command write has failed.
    #[must_use]
    pub const fn write_failed(&self) -> bool {
        self.encoder.is_broken()
    }

    /// Declares a robot option. Requires an active session.
    pub fn robot_option(&mut self, option: RobotOption, value: i32) -> Delivery {
        self.issue(&Command::RobotOption { option, value })
    }

    /// Declares the robot's name, optionally joining `team`. Requires an
    /// active session.
    pub fn name(&mut self, name: &str, team: Option<&str>) -> Delivery {
        self.issue(&Command::Name {
            name: name.to_owned(),
            team: team.map(str::to_owned),
        })
    }

    /// Declares home and away colours. Requires an active session.
    pub fn colour(&mut self, home: &str, away: &str) -> Delivery {
        self.issue(&Command::Colour {
            home: home.to_owned(),
            away: away.to_owned(),
        })
    }

    /// Rotates `target` at `velocity` (rad/s). Requires a live robot.
    pub fn rotate(&mut self, target: RotateTarget, velocity: f64) -> Delivery {
        self.issue(&Command::Rotate { target, velocity })
    }

    /// Rotates `target` to the robot-relative `angle`. Requires a live robot.
    pub fn rotate_to(&mut self, target: RotateTarget, velocity: f64, angle: f64) -> Delivery {
        self.issue(&Command::RotateTo {
            target,
            velocity,
            angle,
        })
    }

    /// Rotates `target` by `angle`. Requires a live robot.
    pub fn rotate_amount(&mut self, target: RotateTarget, velocity: f64, angle: f64) -> Delivery {
        self.issue(&Command::RotateAmount {
            target,
            velocity,
            angle,
        })
    }

    /// Sweeps `target` between `left` and `right`. Requires a live robot.
    pub fn sweep(
        &mut self,
        target: RotateTarget,
        velocity: f64,
        left: f64,
        right: f64,
    ) -> Delivery {
        self.issue(&Command::Sweep {
            target,
            velocity,
            left,
            right,
        })
    }

    /// Accelerates by `value`. Requires a live robot.
    pub fn accelerate(&mut self, value: f64) -> Delivery {
        self.issue(&Command::Accelerate { value })
    }

    /// Brakes with `portion` between 0 and 1. Requires a live robot.
    pub fn brake(&mut self, portion: f64) -> Delivery {
        self.issue(&Command::Brake { portion })
    }

    /// Fires a shot carrying `energy`. Requires a live robot.
    pub fn shoot(&mut self, energy: f64) -> Delivery {
        self.issue(&Command::Shoot { energy })
    }

    /// Prints `message` on the server console. Requires an active session.
    pub fn print(&mut self, message: &str) -> Delivery {
        self.issue(&Command::Print {
            message: message.to_owned(),
        })
    }

    /// Prints a debug message. Requires an active session in debug mode.
    pub fn debug(&mut self, message: &str) -> Delivery {
        self.issue(&Command::Debug {
            message: message.to_owned(),
        })
    }

    /// Draws a debug line. Requires an active session in debug mode.
    pub fn debug_line(
        &mut self,
        angle1: f64,
        distance1: f64,
        angle2: f64,
        distance2: f64,
    ) -> Delivery {
        self.issue(&Command::DebugLine {
            angle1,
            distance1,
            angle2,
            distance2,
        })
    }

    /// Draws a debug circle. Requires an active session in debug mode.
    pub fn debug_circle(&mut self, angle: f64, distance: f64, radius: f64) -> Delivery {
        self.issue(&Command::DebugCircle {
            angle,
            distance,
            radius,
        })
    }

    pub(crate) const fn end(&mut self) {
        self.lifecycle.end();
    }

    pub(crate) fn take_write_failure(&mut self) -> Option<io::Error> {
        self.encoder.take_failure()
    }

    fn clearance(&self) -> Clearance {
        Clearance {
            active: self.is_active(),
            alive: self.is_alive(),
            debug: self.is_debug(),
        }
    }

    fn issue(&mut self, command: &Command) -> Delivery {
        let clearance = self.clearance();
        self.encoder.send(clearance, command)
    }

    fn declare_identity(&mut self) {
        let name = self.profile.name().to_owned();
        let team = self.profile.team().map(str::to_owned);
        let home = self.profile.home_colour().to_owned();
        let away = self.profile.away_colour().to_owned();
        self.name(&name, team.as_deref());
        self.colour(&home, &away);
    }
}
