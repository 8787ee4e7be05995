//! Decoding of server-to-robot lines.
//!
//! A line is a keyword followed by positional arguments separated by
//! whitespace. Keywords are matched case-sensitively. The final argument of
//! `YourName`, `YourColour` and `Warning` is free text and runs to the end of
//! the line. Tokens after the last expected argument are ignored.

use std::str::FromStr;

use strum::{Display, EnumString};

use crate::codes::{GameOption, ObjectKind, RotateTarget, WarningKind};
use crate::error::ParseError;

/// Leading keyword of a server line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display)]
pub enum Keyword {
    /// Session (re)initialisation.
    Initialize,
    /// Server-assigned robot name.
    YourName,
    /// Server-assigned robot colour.
    YourColour,
    /// One game option announcement.
    GameOption,
    /// A match begins.
    GameStarts,
    /// Radar sighting.
    Radar,
    /// Time, speed and cannon angle update.
    Info,
    /// Position and heading update.
    Coordinates,
    /// Energy and team membership of the last sighted robot.
    RobotInfo,
    /// A requested rotation finished.
    RotationReached,
    /// Own energy level.
    Energy,
    /// Robots still alive in the match.
    RobotsLeft,
    /// The robot collided with something.
    Collision,
    /// Server warning.
    Warning,
    /// The robot died.
    Dead,
    /// The match ended.
    GameFinishes,
    /// The session ended.
    ExitRobot,
}

/// A decoded server line.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Session (re)initialisation; `first` is set for the first sequence.
    Initialize {
        /// Whether this is the first initialisation of the session.
        first: bool,
    },
    /// Name the server assigned to this robot.
    YourName {
        /// Assigned name.
        name: String,
    },
    /// Colour the server assigned to this robot.
    YourColour {
        /// Assigned colour.
        colour: String,
    },
    /// Value of one game option.
    GameOption {
        /// Option key.
        option: GameOption,
        /// Announced value.
        value: f64,
    },
    /// A match begins.
    GameStarts,
    /// The radar saw an object.
    Radar {
        /// Distance to the object.
        distance: f64,
        /// What was seen.
        object: ObjectKind,
        /// Radar angle relative to the robot (rad).
        angle: f64,
    },
    /// Periodic status update.
    Info {
        /// Game time (s).
        time: f64,
        /// Current speed.
        speed: f64,
        /// Cannon angle relative to the robot (rad).
        cannon_angle: f64,
    },
    /// Position and heading update.
    Coordinates {
        /// X position.
        x: f64,
        /// Y position.
        y: f64,
        /// Heading (rad).
        angle: f64,
    },
    /// Detail about the robot the radar last saw.
    RobotInfo {
        /// Its energy level.
        energy: f64,
        /// Whether it is on this robot's team.
        teammate: bool,
    },
    /// A rotation requested with `RotateTo`/`RotateAmount` finished.
    RotationReached {
        /// Parts whose rotation finished.
        target: RotateTarget,
    },
    /// Own energy level.
    Energy {
        /// Energy level.
        energy: f64,
    },
    /// Robots still alive in the match.
    RobotsLeft {
        /// Number of robots.
        count: u32,
    },
    /// The robot collided with an object.
    Collision {
        /// What was hit.
        object: ObjectKind,
        /// Angle of impact relative to the robot (rad).
        angle: f64,
    },
    /// Server warning.
    Warning {
        /// Warning classification.
        kind: WarningKind,
        /// Free text accompanying the warning.
        message: String,
    },
    /// The robot died.
    Dead,
    /// The match ended.
    GameFinishes,
    /// The session ended.
    ExitRobot,
}

impl Message {
    /// Decodes one server line.
    ///
    /// Returns `Ok(None)` for blank lines and unknown keywords so newer
    /// servers can extend the protocol without breaking older robots.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] when a known keyword lacks a required argument
    /// or a numeric argument does not parse.
    pub fn parse(line: &str) -> Result<Option<Self>, ParseError> {
        let mut cursor = Cursor { rest: line.trim() };
        let Some(keyword) = cursor.token().and_then(|word| Keyword::from_str(word).ok()) else {
            return Ok(None);
        };
        let mut args = Arguments { keyword, cursor };
        args.decode().map(Some)
    }

    /// Keyword this message is sent under.
    #[must_use]
    pub const fn keyword(&self) -> Keyword {
        match self {
            Self::Initialize { .. } => Keyword::Initialize,
            Self::YourName { .. } => Keyword::YourName,
            Self::YourColour { .. } => Keyword::YourColour,
            Self::GameOption { .. } => Keyword::GameOption,
            Self::GameStarts => Keyword::GameStarts,
            Self::Radar { .. } => Keyword::Radar,
            Self::Info { .. } => Keyword::Info,
            Self::Coordinates { .. } => Keyword::Coordinates,
            Self::RobotInfo { .. } => Keyword::RobotInfo,
            Self::RotationReached { .. } => Keyword::RotationReached,
            Self::Energy { .. } => Keyword::Energy,
            Self::RobotsLeft { .. } => Keyword::RobotsLeft,
            Self::Collision { .. } => Keyword::Collision,
            Self::Warning { .. } => Keyword::Warning,
            Self::Dead => Keyword::Dead,
            Self::GameFinishes => Keyword::GameFinishes,
            Self::ExitRobot => Keyword::ExitRobot,
        }
    }
}

struct Cursor<'a> {
    rest: &'a str,
}

impl<'a> Cursor<'a> {
    fn token(&mut self) -> Option<&'a str> {
        let trimmed = self.rest.trim_start();
        if trimmed.is_empty() {
            self.rest = trimmed;
            return None;
        }
        let end = trimmed
            .find(char::is_whitespace)
            .unwrap_or(trimmed.len());
        let (token, rest) = trimmed.split_at(end);
        self.rest = rest;
        Some(token)
    }

    fn remainder(&mut self) -> &'a str {
        let text = self.rest.trim();
        self.rest = "";
        text
    }
}

struct Arguments<'a> {
    keyword: Keyword,
    cursor: Cursor<'a>,
}

impl Arguments<'_> {
    fn decode(&mut self) -> Result<Message, ParseError> {
        let message = match self.keyword {
            Keyword::Initialize => Message::Initialize {
                first: self.int("first")? != 0,
            },
            Keyword::YourName => Message::YourName {
                name: self.text("name")?,
            },
            Keyword::YourColour => Message::YourColour {
                colour: self.text("colour")?,
            },
            Keyword::GameOption => Message::GameOption {
                option: GameOption::from_code(self.int("option")?),
                value: self.float("value")?,
            },
            Keyword::GameStarts => Message::GameStarts,
            Keyword::Radar => Message::Radar {
                distance: self.float("distance")?,
                object: ObjectKind::from_code(self.int("object")?),
                angle: self.float("angle")?,
            },
            Keyword::Info => Message::Info {
                time: self.float("time")?,
                speed: self.float("speed")?,
                cannon_angle: self.float("cannon angle")?,
            },
            Keyword::Coordinates => Message::Coordinates {
                x: self.float("x")?,
                y: self.float("y")?,
                angle: self.float("angle")?,
            },
            Keyword::RobotInfo => Message::RobotInfo {
                energy: self.float("energy")?,
                teammate: self.int("teammate")? != 0,
            },
            Keyword::RotationReached => Message::RotationReached {
                target: RotateTarget::from_code(i64::from(self.int("target")?)),
            },
            Keyword::Energy => Message::Energy {
                energy: self.float("energy")?,
            },
            Keyword::RobotsLeft => Message::RobotsLeft {
                count: self.number("count")?,
            },
            Keyword::Collision => Message::Collision {
                object: ObjectKind::from_code(self.int("object")?),
                angle: self.float("angle")?,
            },
            Keyword::Warning => Message::Warning {
                kind: WarningKind::from_code(self.int("kind")?),
                message: self.cursor.remainder().to_owned(),
            },
            Keyword::Dead => Message::Dead,
            Keyword::GameFinishes => Message::GameFinishes,
            Keyword::ExitRobot => Message::ExitRobot,
        };
        Ok(message)
    }

    fn number<T: FromStr>(&mut self, argument: &'static str) -> Result<T, ParseError> {
        let token = self.cursor.token().ok_or(ParseError::MissingArgument {
            keyword: self.keyword,
            argument,
        })?;
        token.parse().map_err(|_| ParseError::InvalidNumber {
            keyword: self.keyword,
            argument,
            token: token.to_owned(),
        })
    }

    fn int(&mut self, argument: &'static str) -> Result<i32, ParseError> {
        self.number(argument)
    }

    fn float(&mut self, argument: &'static str) -> Result<f64, ParseError> {
        self.number(argument)
    }

    fn text(&mut self, argument: &'static str) -> Result<String, ParseError> {
        let text = self.cursor.remainder();
        if text.is_empty() {
            return Err(ParseError::MissingArgument {
                keyword: self.keyword,
                argument,
            });
        }
        Ok(text.to_owned())
    }
}
