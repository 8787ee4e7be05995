//! Encoding of robot-to-server commands.
//!
//! Each [`Command`] renders as exactly one wire line (without the trailing
//! newline) through its [`Display`] implementation. Floating-point arguments
//! use six decimals; masks and option codes are plain integers. Line
//! terminators inside free text are rendered as spaces.

use std::fmt::{self, Display};

use crate::codes::{RobotOption, RotateTarget};

/// Lifecycle condition a command needs before it may be transmitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gate {
    /// Between session start and session end.
    Active,
    /// While taking part in a match.
    Alive,
    /// While active and the server runs at the debug level.
    Debug,
}

/// A request sent from the robot to the server.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Declare a robot option.
    RobotOption {
        /// Option being declared.
        option: RobotOption,
        /// Option value.
        value: i32,
    },
    /// Declare the robot's name, optionally with a team.
    Name {
        /// Display name.
        name: String,
        /// Team name; `None` for a lone robot.
        team: Option<String>,
    },
    /// Declare preferred colours.
    Colour {
        /// Home colour (hex RGB).
        home: String,
        /// Away colour (hex RGB).
        away: String,
    },
    /// Rotate parts at a constant angular velocity.
    Rotate {
        /// Parts to rotate.
        target: RotateTarget,
        /// Angular velocity (rad/s).
        velocity: f64,
    },
    /// Rotate parts to an absolute angle relative to the robot.
    RotateTo {
        /// Parts to rotate.
        target: RotateTarget,
        /// Angular velocity (rad/s).
        velocity: f64,
        /// Destination angle (rad).
        angle: f64,
    },
    /// Rotate parts by a relative amount.
    RotateAmount {
        /// Parts to rotate.
        target: RotateTarget,
        /// Angular velocity (rad/s).
        velocity: f64,
        /// Rotation amount (rad).
        angle: f64,
    },
    /// Sweep parts back and forth between two angles.
    Sweep {
        /// Parts to sweep.
        target: RotateTarget,
        /// Angular velocity (rad/s).
        velocity: f64,
        /// Left bound relative to the robot (rad).
        left: f64,
        /// Right bound relative to the robot (rad).
        right: f64,
    },
    /// Change speed.
    Accelerate {
        /// Acceleration.
        value: f64,
    },
    /// Brake.
    Brake {
        /// Braking portion, 0 (none) to 1 (full).
        portion: f64,
    },
    /// Fire the cannon.
    Shoot {
        /// Energy put into the shot.
        energy: f64,
    },
    /// Write a message to the server console.
    Print {
        /// Message text.
        message: String,
    },
    /// Write a debug message.
    Debug {
        /// Message text.
        message: String,
    },
    /// Draw a debug line between two points given in robot-relative polar
    /// coordinates.
    DebugLine {
        /// Angle of the first point (rad).
        angle1: f64,
        /// Distance of the first point.
        distance1: f64,
        /// Angle of the second point (rad).
        angle2: f64,
        /// Distance of the second point.
        distance2: f64,
    },
    /// Draw a debug circle centred on a robot-relative polar point.
    DebugCircle {
        /// Angle of the centre (rad).
        angle: f64,
        /// Distance of the centre.
        distance: f64,
        /// Circle radius.
        radius: f64,
    },
}

impl Command {
    /// The gate that must be open for this command to be sent.
    #[must_use]
    pub const fn gate(&self) -> Gate {
        match self {
            Self::RobotOption { .. } | Self::Name { .. } | Self::Colour { .. } | Self::Print { .. } => {
                Gate::Active
            }
            Self::Rotate { .. }
            | Self::RotateTo { .. }
            | Self::RotateAmount { .. }
            | Self::Sweep { .. }
            | Self::Accelerate { .. }
            | Self::Brake { .. }
            | Self::Shoot { .. } => Gate::Alive,
            Self::Debug { .. } | Self::DebugLine { .. } | Self::DebugCircle { .. } => Gate::Debug,
        }
    }

    /// Wire keyword of this command.
    #[must_use]
    pub const fn keyword(&self) -> &'static str {
        match self {
            Self::RobotOption { .. } => "RobotOption",
            Self::Name { .. } => "Name",
            Self::Colour { .. } => "Colour",
            Self::Rotate { .. } => "Rotate",
            Self::RotateTo { .. } => "RotateTo",
            Self::RotateAmount { .. } => "RotateAmount",
            Self::Sweep { .. } => "Sweep",
            Self::Accelerate { .. } => "Accelerate",
            Self::Brake { .. } => "Brake",
            Self::Shoot { .. } => "Shoot",
            Self::Print { .. } => "Print",
            Self::Debug { .. } => "Debug",
            Self::DebugLine { .. } => "DebugLine",
            Self::DebugCircle { .. } => "DebugCircle",
        }
    }
}

impl Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = self.keyword();
        match self {
            Self::RobotOption { option, value } => write!(f, "{keyword} {} {value}", option.code()),
            Self::Name {
                name,
                team: Some(team),
            } => write!(f, "{keyword} {} Team: {}", OneLine(name), OneLine(team)),
            Self::Name { name, team: None } => write!(f, "{keyword} {}", OneLine(name)),
            Self::Colour { home, away } => {
                write!(f, "{keyword} {} {}", OneLine(home), OneLine(away))
            }
            Self::Rotate { target, velocity } => {
                write!(f, "{keyword} {} {velocity:.6}", target.bits())
            }
            Self::RotateTo {
                target,
                velocity,
                angle,
            }
            | Self::RotateAmount {
                target,
                velocity,
                angle,
            } => write!(f, "{keyword} {} {velocity:.6} {angle:.6}", target.bits()),
            Self::Sweep {
                target,
                velocity,
                left,
                right,
            } => write!(
                f,
                "{keyword} {} {velocity:.6} {left:.6} {right:.6}",
                target.bits()
            ),
            Self::Accelerate { value } => write!(f, "{keyword} {value:.6}"),
            Self::Brake { portion } => write!(f, "{keyword} {portion:.6}"),
            Self::Shoot { energy } => write!(f, "{keyword} {energy:.6}"),
            Self::Print { message } | Self::Debug { message } => {
                write!(f, "{keyword} {}", OneLine(message))
            }
            Self::DebugLine {
                angle1,
                distance1,
                angle2,
                distance2,
            } => write!(
                f,
                "{keyword} {angle1:.6} {distance1:.6} {angle2:.6} {distance2:.6}"
            ),
            Self::DebugCircle {
                angle,
                distance,
                radius,
            } => write!(f, "{keyword} {angle:.6} {distance:.6} {radius:.6}"),
        }
    }
}

/// Free text that must stay on one wire line.
struct OneLine<'a>(&'a str);

impl Display for OneLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pieces = self.0.split(['\r', '\n']);
        if let Some(first) = pieces.next() {
            f.write_str(first)?;
        }
        for piece in pieces {
            f.write_str(" ")?;
            f.write_str(piece)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
