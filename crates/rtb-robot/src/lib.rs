//! Reference RealTimeBattle robot process.
//!
//! [`run`] is the whole program behind the `rtb-sentry` binary: it loads
//! [`Config`] from arguments and `RTB_*` variables, installs telemetry on
//! standard error, and plays a [`Sentry`] over the given streams until the
//! server lets it go.

mod sentry;
pub mod telemetry;

use std::ffi::OsString;
use std::io::{BufRead, Write};
use std::process::ExitCode;

use rtb_config::{Config, ConfigError};
use tracing::error;

pub use self::sentry::Sentry;

/// Runs a robot process over `stdin`/`stdout`, reporting failures on
/// `stderr`.
///
/// Returns success when the session ended normally or the server closed the
/// input, and failure when configuration, telemetry or the transport failed.
/// `--help` and `--version` output goes to `stdout` and counts as success.
pub fn run<I, R, W, E>(args: I, stdin: &mut R, stdout: &mut W, stderr: &mut E) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    R: BufRead,
    W: Write,
    E: Write,
{
    let config = match Config::load_from_iter(args) {
        Ok(config) => config,
        Err(ConfigError::Cli(error)) => return report_cli_error(&error, stdout, stderr),
    };

    if let Err(error) = telemetry::initialise(&config) {
        let _ = writeln!(stderr, "{error}");
        return ExitCode::FAILURE;
    }

    let mut sentry = Sentry::default();
    match rtb_client::run(config.profile(), stdin, &mut *stdout, &mut sentry) {
        Ok(report) if report.end().is_clean() => ExitCode::SUCCESS,
        Ok(report) => {
            let _ = writeln!(stderr, "session ended: {}", report.end());
            ExitCode::FAILURE
        }
        Err(failure) => {
            error!(error = %failure, "session failed to start");
            let _ = writeln!(stderr, "{failure}");
            ExitCode::FAILURE
        }
    }
}

fn report_cli_error<W: Write, E: Write>(
    error: &clap::Error,
    stdout: &mut W,
    stderr: &mut E,
) -> ExitCode {
    let rendered = error.render();
    if error.use_stderr() {
        let _ = write!(stderr, "{rendered}");
        ExitCode::FAILURE
    } else {
        let _ = write!(stdout, "{rendered}");
        ExitCode::SUCCESS
    }
}

