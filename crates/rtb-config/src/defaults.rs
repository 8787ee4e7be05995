use crate::logging::LogFormat;

/// Name declared when none is configured.
pub const DEFAULT_ROBOT_NAME: &str = "rtb-sentry";

/// Home colour (hex RGB) declared when none is configured.
pub const DEFAULT_HOME_COLOUR: &str = "4080ff";

/// Away colour (hex RGB) declared when none is configured.
pub const DEFAULT_AWAY_COLOUR: &str = "ff8040";

/// Default log filter expression used by the binaries.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Default log filter expression used by the binaries.
#[must_use]
pub const fn default_log_filter() -> &'static str {
    DEFAULT_LOG_FILTER
}

/// Default logging format for the binaries.
#[must_use]
pub const fn default_log_format() -> LogFormat {
    LogFormat::Json
}
