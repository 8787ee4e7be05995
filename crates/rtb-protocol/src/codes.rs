//! Numeric code tables shared by inbound messages and outbound commands.
//!
//! The server transmits every enumerated value as a bare integer. Codes the
//! server may extend in future protocol revisions decode into an `Unknown`
//! variant carrying the raw code instead of failing.

use std::f64::consts::{PI, TAU};

use bitflags::bitflags;

/// Debug-level option value at which the server accepts debug drawing.
pub const DEBUG_SENTINEL: i64 = 5;

/// Game options announced by the server once per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameOption {
    /// Maximum body rotation speed (rad/s).
    RobotMaxRotate,
    /// Maximum cannon rotation speed (rad/s).
    RobotCannonMaxRotate,
    /// Maximum radar rotation speed (rad/s).
    RobotRadarMaxRotate,
    /// Maximum acceleration.
    RobotMaxAcceleration,
    /// Minimum (most negative) acceleration.
    RobotMinAcceleration,
    /// Energy at match start.
    RobotStartEnergy,
    /// Energy ceiling.
    RobotMaxEnergy,
    /// Number of distinct energy levels reported.
    RobotEnergyLevels,
    /// Shot travel speed.
    ShotSpeed,
    /// Smallest energy a shot may carry.
    ShotMinEnergy,
    /// Largest energy a shot may carry.
    ShotMaxEnergy,
    /// Shot energy regained per second.
    ShotEnergyIncrease,
    /// Match timeout in seconds.
    Timeout,
    /// Server debug level; see [`DEBUG_SENTINEL`].
    DebugLevel,
    /// Whether the server sends `Coordinates` messages.
    SendRobotCoordinates,
    /// A code outside the known table.
    Unknown(i32),
}

impl GameOption {
    /// Number of known option keys.
    pub const COUNT: usize = 15;

    /// Every known option key in wire-code order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::RobotMaxRotate,
        Self::RobotCannonMaxRotate,
        Self::RobotRadarMaxRotate,
        Self::RobotMaxAcceleration,
        Self::RobotMinAcceleration,
        Self::RobotStartEnergy,
        Self::RobotMaxEnergy,
        Self::RobotEnergyLevels,
        Self::ShotSpeed,
        Self::ShotMinEnergy,
        Self::ShotMaxEnergy,
        Self::ShotEnergyIncrease,
        Self::Timeout,
        Self::DebugLevel,
        Self::SendRobotCoordinates,
    ];

    /// Decodes a wire code.
    #[must_use]
    pub fn from_code(code: i32) -> Self {
        usize::try_from(code)
            .ok()
            .and_then(|index| Self::ALL.get(index).copied())
            .unwrap_or(Self::Unknown(code))
    }

    /// Position of this key in [`Self::ALL`], or `None` for unknown codes.
    #[must_use]
    pub fn index(self) -> Option<usize> {
        Self::ALL.iter().position(|known| *known == self)
    }

    /// Wire code of this key.
    #[must_use]
    pub fn code(self) -> i32 {
        match self {
            Self::Unknown(code) => code,
            known => known
                .index()
                .and_then(|index| i32::try_from(index).ok())
                .unwrap_or(-1),
        }
    }
}

/// Options a robot may declare with `RobotOption`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RobotOption {
    /// Ask the server to raise a signal when input is pending.
    SendSignal,
    /// Ask for `RotationReached` notifications (value is a target mask).
    SendRotationReached,
    /// Choose which signal the server raises.
    Signal,
    /// Declare whether the robot reads its input without blocking.
    UseNonBlocking,
}

impl RobotOption {
    /// Wire code of this option.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::SendSignal => 0,
            Self::SendRotationReached => 1,
            Self::Signal => 2,
            Self::UseNonBlocking => 3,
        }
    }
}

/// Classification carried by a `Warning` message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarningKind {
    /// Server did not classify the warning, or used a code this client does
    /// not know.
    Unknown,
    /// The robot is using too much processing time.
    ProcessTimeLow,
    /// The robot (or the server, when raised locally) saw a malformed line.
    IllegalMessage,
    /// The robot declared an option the server does not know.
    UnknownOption,
    /// The robot used a keyword the server no longer supports.
    ObsoleteKeyword,
    /// The robot never declared its name.
    NameNotGiven,
    /// The robot never declared its colours.
    ColourNotGiven,
}

impl WarningKind {
    /// Decodes a wire code.
    #[must_use]
    pub const fn from_code(code: i32) -> Self {
        match code {
            1 => Self::ProcessTimeLow,
            2 => Self::IllegalMessage,
            3 => Self::UnknownOption,
            4 => Self::ObsoleteKeyword,
            5 => Self::NameNotGiven,
            6 => Self::ColourNotGiven,
            _ => Self::Unknown,
        }
    }
}

/// Kinds of object the radar or a collision can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    /// Another robot.
    Robot,
    /// A shot in flight.
    Shot,
    /// An arena wall.
    Wall,
    /// An energy cookie.
    Cookie,
    /// A mine.
    Mine,
    /// Nothing was hit.
    NoObject,
    /// A code outside the known table.
    Unknown(i32),
}

impl ObjectKind {
    /// Number of radar categories.
    pub const CATEGORY_COUNT: usize = 5;

    /// Radar categories in wire-code order.
    pub const CATEGORIES: [Self; Self::CATEGORY_COUNT] =
        [Self::Robot, Self::Shot, Self::Wall, Self::Cookie, Self::Mine];

    /// Decodes a wire code.
    #[must_use]
    pub fn from_code(code: i32) -> Self {
        if code == -1 {
            return Self::NoObject;
        }
        usize::try_from(code)
            .ok()
            .and_then(|index| Self::CATEGORIES.get(index).copied())
            .unwrap_or(Self::Unknown(code))
    }

    /// Radar slot of this kind, or `None` when it is not a radar category.
    #[must_use]
    pub fn category_index(self) -> Option<usize> {
        Self::CATEGORIES.iter().position(|known| *known == self)
    }
}

bitflags! {
    /// Parts of the robot a rotation command applies to.
    ///
    /// Parts combine, so `CANNON | RADAR` turns both in one command.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct RotateTarget: u8 {
        /// The robot body.
        const ROBOT = 1;
        /// The cannon.
        const CANNON = 2;
        /// The radar.
        const RADAR = 4;
    }
}

impl RotateTarget {
    /// Decodes a wire mask, dropping bits outside the known parts.
    ///
    /// Negative codes name no part.
    #[must_use]
    pub fn from_code(code: i64) -> Self {
        if code < 0 {
            return Self::empty();
        }
        Self::from_bits_truncate(u8::try_from(code & 0xff).unwrap_or_default())
    }
}

/// Folds an angle in radians into `(-π, π]`.
#[must_use]
#[expect(clippy::float_arithmetic, reason = "angle folding is arithmetic")]
pub fn normalize_angle(radians: f64) -> f64 {
    let folded = radians.rem_euclid(TAU);
    if folded > PI { folded - TAU } else { folded }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0, GameOption::RobotMaxRotate)]
    #[case(13, GameOption::DebugLevel)]
    #[case(14, GameOption::SendRobotCoordinates)]
    #[case(15, GameOption::Unknown(15))]
    #[case(-3, GameOption::Unknown(-3))]
    fn game_option_codes_decode(#[case] code: i32, #[case] expected: GameOption) {
        assert_eq!(GameOption::from_code(code), expected);
        assert_eq!(GameOption::from_code(code).code(), code);
    }

    #[test]
    fn unknown_game_options_have_no_index() {
        assert_eq!(GameOption::Unknown(40).index(), None);
        assert_eq!(GameOption::Timeout.index(), Some(12));
    }

    #[rstest]
    #[case(-1, ObjectKind::NoObject)]
    #[case(0, ObjectKind::Robot)]
    #[case(4, ObjectKind::Mine)]
    #[case(9, ObjectKind::Unknown(9))]
    fn object_codes_decode(#[case] code: i32, #[case] expected: ObjectKind) {
        assert_eq!(ObjectKind::from_code(code), expected);
    }

    #[test]
    fn only_radar_categories_have_slots() {
        assert_eq!(ObjectKind::Wall.category_index(), Some(2));
        assert_eq!(ObjectKind::NoObject.category_index(), None);
        assert_eq!(ObjectKind::Unknown(7).category_index(), None);
    }

    #[rstest]
    #[case(2, WarningKind::IllegalMessage)]
    #[case(6, WarningKind::ColourNotGiven)]
    #[case(0, WarningKind::Unknown)]
    #[case(99, WarningKind::Unknown)]
    fn warning_codes_decode(#[case] code: i32, #[case] expected: WarningKind) {
        assert_eq!(WarningKind::from_code(code), expected);
    }

    #[test]
    fn rotate_target_ignores_unknown_bits() {
        assert_eq!(
            RotateTarget::from_code(6 | 8),
            RotateTarget::CANNON | RotateTarget::RADAR
        );
        assert_eq!(RotateTarget::from_code(7), RotateTarget::all());
    }

    #[rstest]
    #[case(-1)]
    #[case(-8)]
    #[case(i64::MIN)]
    fn negative_rotate_targets_are_empty(#[case] code: i64) {
        assert_eq!(RotateTarget::from_code(code), RotateTarget::empty());
    }

    #[test]
    fn handshake_option_code_matches_protocol() {
        assert_eq!(RobotOption::UseNonBlocking.code(), 3);
    }

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(TAU + 0.5, 0.5)]
    #[case(-0.5, -0.5)]
    #[case(PI, PI)]
    #[case(3.0 * PI / 2.0, -PI / 2.0)]
    fn angles_fold_into_half_open_range(#[case] input: f64, #[case] expected: f64) {
        assert!((normalize_angle(input) - expected).abs() < 1e-9);
    }
}
