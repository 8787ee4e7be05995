//! Inbound dispatch: parse, update the model, notify the handler.

use rtb_protocol::{Message, WarningKind};
use tracing::{debug, info, trace, warn};

use super::Session;
use crate::handler::RobotHandler;

/// Whether the read loop should keep going after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next line.
    Continue,
    /// The session is over.
    Stop,
}

impl Session<'_> {
    /// Processes one inbound line.
    ///
    /// The raw line is offered to [`RobotHandler::raw_line`] first. Unless
    /// that hook consumes it, the line is decoded, the model is updated and
    /// the matching notification runs. Undecodable lines are reported to
    /// [`RobotHandler::on_warning`] as [`WarningKind::IllegalMessage`];
    /// unknown keywords and blank lines are ignored.
    ///
    /// A write failure during dispatch ends the session. Lines arriving
    /// after the session ended are not dispatched.
    pub fn dispatch<H: RobotHandler + ?Sized>(&mut self, line: &str, handler: &mut H) -> Flow {
        if !self.is_active() {
            trace!("session inactive; line not dispatched");
            return Flow::Stop;
        }
        let line = line.trim_end_matches(['\r', '\n']);
        debug!(line, "received");

        if !handler.raw_line(self, line) {
            match Message::parse(line) {
                Ok(Some(message)) => self.apply(message, handler),
                Ok(None) => trace!(line, "unrecognised line ignored"),
                Err(error) => {
                    warn!(line, error = %error, "illegal message");
                    handler.on_warning(self, WarningKind::IllegalMessage, line);
                }
            }
        }

        if self.encoder.is_broken() && self.is_active() {
            warn!("command stream lost; ending session");
            self.lifecycle.end();
        }
        if self.is_active() {
            Flow::Continue
        } else {
            Flow::Stop
        }
    }

    fn apply<H: RobotHandler + ?Sized>(&mut self, message: Message, handler: &mut H) {
        match message {
            Message::Initialize { first } => {
                self.lifecycle.leave_match();
                if !handler.on_initialize(self, first) && first {
                    self.declare_identity();
                }
            }
            Message::YourName { name } => {
                handler.on_your_name(self, &name);
            }
            Message::YourColour { colour } => {
                handler.on_your_colour(self, &colour);
            }
            Message::GameOption { option, value } => {
                if !self.options.set(option, value) {
                    debug!(?option, value, "unknown game option not stored");
                }
                handler.on_game_option(self, option, value);
            }
            Message::GameStarts => {
                self.lifecycle.enter_match();
                info!("match started");
                handler.on_game_starts(self);
            }
            Message::Radar {
                distance,
                object,
                angle,
            } => {
                if self.profile.tracks_sightings() {
                    self.radar
                        .record_sighting(&self.robot, object, distance, angle);
                }
                handler.on_radar(self, distance, object, angle);
            }
            Message::Info {
                time,
                speed,
                cannon_angle,
            } => {
                self.robot.update_info(time, speed, cannon_angle);
                handler.on_info(self, time, speed, cannon_angle);
            }
            Message::Coordinates { x, y, angle } => {
                self.robot.update_coordinates(x, y, angle);
                handler.on_coordinates(self, x, y, angle);
            }
            Message::RobotInfo { energy, teammate } => {
                self.radar.record_robot_info(energy, teammate);
                handler.on_robot_info(self, energy, teammate);
            }
            Message::RotationReached { target } => {
                handler.on_rotation_reached(self, target);
            }
            Message::Energy { energy } => {
                self.robot.update_energy(energy);
                handler.on_energy(self, energy);
            }
            Message::RobotsLeft { count } => {
                handler.on_robots_left(self, count);
            }
            Message::Collision { object, angle } => {
                handler.on_collision(self, object, angle);
            }
            Message::Warning { kind, message } => {
                debug!(?kind, message = message.as_str(), "server warning");
                handler.on_warning(self, kind, &message);
            }
            Message::Dead => {
                self.lifecycle.leave_match();
                info!("robot died");
                handler.on_dead(self);
            }
            Message::GameFinishes => {
                self.lifecycle.leave_match();
                info!("match finished");
                handler.on_game_finishes(self);
            }
            Message::ExitRobot => {
                self.lifecycle.end();
                info!("session ended by server");
                handler.on_exit_robot(self);
            }
        }
    }
}
