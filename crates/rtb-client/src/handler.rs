//! Notification points a robot implements to react to the server.

use rtb_protocol::{GameOption, ObjectKind, RotateTarget, WarningKind};

use crate::session::Session;

/// One notification per inbound message kind, plus a raw-line escape hatch.
///
/// Every method receives the [`Session`] (for state reads and commands) and
/// the decoded arguments, and returns whether it fully handled the message.
/// The dispatcher updates its own state *before* calling the matching
/// method, so handlers always observe the post-message model.
///
/// Only two notifications have default behaviour that a `true` return
/// suppresses: [`RobotHandler::raw_line`] skips structured parsing and the
/// first [`RobotHandler::on_initialize`] skips the automatic name and colour
/// declaration. Every method defaults to `false`.
#[expect(unused_variables, reason = "default notifications ignore their arguments")]
pub trait RobotHandler {
    /// Sees every line before it is parsed; `true` skips parsing.
    fn raw_line(&mut self, session: &mut Session<'_>, line: &str) -> bool {
        false
    }

    /// `Initialize`; `first` marks the first sequence of the session.
    fn on_initialize(&mut self, session: &mut Session<'_>, first: bool) -> bool {
        false
    }

    /// `YourName`.
    fn on_your_name(&mut self, session: &mut Session<'_>, name: &str) -> bool {
        false
    }

    /// `YourColour`.
    fn on_your_colour(&mut self, session: &mut Session<'_>, colour: &str) -> bool {
        false
    }

    /// `GameOption`, after the value has been stored.
    fn on_game_option(&mut self, session: &mut Session<'_>, option: GameOption, value: f64) -> bool {
        false
    }

    /// `GameStarts`, after the robot became alive.
    fn on_game_starts(&mut self, session: &mut Session<'_>) -> bool {
        false
    }

    /// `Radar`.
    fn on_radar(
        &mut self,
        session: &mut Session<'_>,
        distance: f64,
        object: ObjectKind,
        angle: f64,
    ) -> bool {
        false
    }

    /// `Info`, after time, speed and cannon angle were stored.
    fn on_info(&mut self, session: &mut Session<'_>, time: f64, speed: f64, cannon_angle: f64) -> bool {
        false
    }

    /// `Coordinates`, after position and heading were stored.
    fn on_coordinates(&mut self, session: &mut Session<'_>, x: f64, y: f64, angle: f64) -> bool {
        false
    }

    /// `RobotInfo`, after the robot radar slot was updated.
    fn on_robot_info(&mut self, session: &mut Session<'_>, energy: f64, teammate: bool) -> bool {
        false
    }

    /// `RotationReached`.
    fn on_rotation_reached(&mut self, session: &mut Session<'_>, target: RotateTarget) -> bool {
        false
    }

    /// `Energy`, after the energy level was stored.
    fn on_energy(&mut self, session: &mut Session<'_>, energy: f64) -> bool {
        false
    }

    /// `RobotsLeft`.
    fn on_robots_left(&mut self, session: &mut Session<'_>, count: u32) -> bool {
        false
    }

    /// `Collision`.
    fn on_collision(&mut self, session: &mut Session<'_>, object: ObjectKind, angle: f64) -> bool {
        false
    }

    /// `Warning`, or a line the dispatcher could not decode
    /// ([`WarningKind::IllegalMessage`] with the offending line).
    fn on_warning(&mut self, session: &mut Session<'_>, kind: WarningKind, message: &str) -> bool {
        false
    }

    /// `Dead`, after the robot stopped being alive.
    fn on_dead(&mut self, session: &mut Session<'_>) -> bool {
        false
    }

    /// `GameFinishes`, after the robot stopped being alive.
    fn on_game_finishes(&mut self, session: &mut Session<'_>) -> bool {
        false
    }

    /// `ExitRobot`, after the session became inactive.
    fn on_exit_robot(&mut self, session: &mut Session<'_>) -> bool {
        false
    }
}

/// A robot that relies entirely on default behaviour.
impl RobotHandler for () {}
