//! Identity and connection settings a robot declares to the server.

use clap::ValueEnum;

use crate::defaults::{DEFAULT_AWAY_COLOUR, DEFAULT_HOME_COLOUR, DEFAULT_ROBOT_NAME};

/// How the robot wants the server to deliver messages.
///
/// Only [`ConnectionMode::Blocking`] is implemented; the other modes exist so
/// a caller can ask for them and receive a clear "unsupported" failure.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, ValueEnum)]
pub enum ConnectionMode {
    /// The robot blocks on its input stream waiting for the next line.
    #[default]
    Blocking,
    /// The server raises a signal when a line is pending.
    Signal,
    /// The robot multiplexes its input with `select`.
    Select,
}

impl ConnectionMode {
    /// Whether the session layer can drive this mode.
    #[must_use]
    pub const fn is_supported(self) -> bool {
        matches!(self, Self::Blocking)
    }
}

/// Robot identity and connection preferences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RobotProfile {
    name: String,
    team: Option<String>,
    home_colour: String,
    away_colour: String,
    mode: ConnectionMode,
    track_sightings: bool,
}

impl RobotProfile {
    /// Creates a lone blocking-mode robot with the default colours.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            team: None,
            home_colour: String::from(DEFAULT_HOME_COLOUR),
            away_colour: String::from(DEFAULT_AWAY_COLOUR),
            mode: ConnectionMode::Blocking,
            track_sightings: false,
        }
    }

    /// Joins a team. Blank team names leave the robot on its own.
    #[must_use]
    pub fn with_team(mut self, team: impl Into<String>) -> Self {
        let team = team.into();
        let trimmed = team.trim();
        self.team = (!trimmed.is_empty()).then(|| trimmed.to_owned());
        self
    }

    /// Sets the home and away colours.
    #[must_use]
    pub fn with_colours(mut self, home: impl Into<String>, away: impl Into<String>) -> Self {
        self.home_colour = home.into();
        self.away_colour = away.into();
        self
    }

    /// Selects the communication mode.
    #[must_use]
    pub const fn with_mode(mut self, mode: ConnectionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Caches the derived position of every radar sighting.
    #[must_use]
    pub const fn with_sighting_tracking(mut self, enabled: bool) -> Self {
        self.track_sightings = enabled;
        self
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Team name, if any.
    #[must_use]
    pub fn team(&self) -> Option<&str> {
        self.team.as_deref()
    }

    /// Home colour.
    #[must_use]
    pub fn home_colour(&self) -> &str {
        self.home_colour.as_str()
    }

    /// Away colour.
    #[must_use]
    pub fn away_colour(&self) -> &str {
        self.away_colour.as_str()
    }

    /// Communication mode.
    #[must_use]
    pub const fn mode(&self) -> ConnectionMode {
        self.mode
    }

    /// Whether radar sightings are cached with a derived position.
    #[must_use]
    pub const fn tracks_sightings(&self) -> bool {
        self.track_sightings
    }
}

impl Default for RobotProfile {
    fn default() -> Self {
        Self::new(DEFAULT_ROBOT_NAME)
    }
}
