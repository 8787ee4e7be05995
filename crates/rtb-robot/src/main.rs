//! Entry point for the `rtb-sentry` robot.
//!
//! The game server starts the robot with piped standard streams; the process
//! exits once the server sends `ExitRobot` or closes the pipe.

use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();
    rtb_robot::run(std::env::args_os(), &mut stdin, &mut stdout, &mut stderr)
}
