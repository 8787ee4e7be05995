//! Configuration shared by RealTimeBattle robot binaries.
//!
//! The game server launches a robot executable without arguments and talks to
//! it over stdin/stdout, so every setting here can come from three layers,
//! highest precedence first:
//!
//! 1. command-line flags (`--name`, `--team`, ...),
//! 2. `RTB_*` environment variables,
//! 3. the built-in defaults (`DEFAULT_*` constants).
//!
//! [`Config`] bundles the robot's [`RobotProfile`] with the logging settings
//! consumed by the binary's telemetry layer.

mod defaults;
mod logging;
mod profile;

use std::ffi::OsString;

use clap::Parser;
use thiserror::Error;

pub use self::defaults::{
    DEFAULT_AWAY_COLOUR, DEFAULT_HOME_COLOUR, DEFAULT_LOG_FILTER, DEFAULT_ROBOT_NAME,
    default_log_filter, default_log_format,
};
pub use self::logging::{LogFormat, LogFormatParseError};
pub use self::profile::{ConnectionMode, RobotProfile};

/// Environment variable overriding the robot name.
pub const ENV_ROBOT_NAME: &str = "RTB_ROBOT_NAME";
/// Environment variable setting the team.
pub const ENV_TEAM: &str = "RTB_TEAM";
/// Environment variable overriding the home colour.
pub const ENV_HOME_COLOUR: &str = "RTB_HOME_COLOUR";
/// Environment variable overriding the away colour.
pub const ENV_AWAY_COLOUR: &str = "RTB_AWAY_COLOUR";
/// Environment variable selecting the communication mode.
pub const ENV_MODE: &str = "RTB_MODE";
/// Environment variable enabling sighting tracking.
pub const ENV_TRACK_SIGHTINGS: &str = "RTB_TRACK_SIGHTINGS";
/// Environment variable overriding the log filter.
pub const ENV_LOG_FILTER: &str = "RTB_LOG_FILTER";
/// Environment variable overriding the log format.
pub const ENV_LOG_FORMAT: &str = "RTB_LOG_FORMAT";

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Arguments or environment values were rejected.
    #[error("failed to load configuration: {0}")]
    Cli(#[from] clap::Error),
}

/// Runtime configuration for a robot process.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "rtb-robot", about = "RealTimeBattle robot")]
pub struct Config {
    /// Name declared to the server.
    #[arg(long, env = ENV_ROBOT_NAME, default_value = DEFAULT_ROBOT_NAME)]
    name: String,
    /// Team to join; omit for a lone robot.
    #[arg(long, env = ENV_TEAM)]
    team: Option<String>,
    /// Home colour as six hex digits.
    #[arg(long, env = ENV_HOME_COLOUR, default_value = DEFAULT_HOME_COLOUR)]
    home_colour: String,
    /// Away colour as six hex digits.
    #[arg(long, env = ENV_AWAY_COLOUR, default_value = DEFAULT_AWAY_COLOUR)]
    away_colour: String,
    /// How the server delivers messages.
    #[arg(long, env = ENV_MODE, value_enum, default_value_t = ConnectionMode::Blocking)]
    mode: ConnectionMode,
    /// Cache the derived position of radar sightings.
    #[arg(long, env = ENV_TRACK_SIGHTINGS)]
    track_sightings: bool,
    /// Tracing filter expression (for example `debug` or `rtb_client=trace`).
    #[arg(long, env = ENV_LOG_FILTER, default_value = DEFAULT_LOG_FILTER)]
    log_filter: String,
    /// Log output format: `json` or `compact`.
    #[arg(long, env = ENV_LOG_FORMAT, default_value_t = default_log_format())]
    log_format: LogFormat,
}

impl Config {
    /// Loads configuration from the process arguments and environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Cli`] when a flag or environment value is
    /// invalid, or when help/version output was requested.
    pub fn load() -> Result<Self, ConfigError> {
        Self::try_parse().map_err(ConfigError::from)
    }

    /// Loads configuration from an explicit argument list (program name
    /// first) and the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Cli`] when a flag or environment value is
    /// invalid.
    pub fn load_from_iter<I, T>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::try_parse_from(args).map_err(ConfigError::from)
    }

    /// Robot identity and connection settings.
    #[must_use]
    pub fn profile(&self) -> RobotProfile {
        let profile = RobotProfile::new(self.name.as_str())
            .with_colours(self.home_colour.as_str(), self.away_colour.as_str())
            .with_mode(self.mode)
            .with_sighting_tracking(self.track_sightings);
        match self.team.as_deref() {
            Some(team) => profile.with_team(team),
            None => profile,
        }
    }

    /// Tracing filter expression.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        self.log_filter.as_str()
    }

    /// Log output format.
    #[must_use]
    pub const fn log_format(&self) -> LogFormat {
        self.log_format
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: String::from(DEFAULT_ROBOT_NAME),
            team: None,
            home_colour: String::from(DEFAULT_HOME_COLOUR),
            away_colour: String::from(DEFAULT_AWAY_COLOUR),
            mode: ConnectionMode::Blocking,
            track_sightings: false,
            log_filter: String::from(DEFAULT_LOG_FILTER),
            log_format: default_log_format(),
        }
    }
}
