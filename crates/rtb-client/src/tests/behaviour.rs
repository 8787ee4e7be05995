//! Behaviour-driven tests for the session lifecycle.

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use rtb_config::RobotProfile;
use rtb_protocol::WarningKind;

use super::{Recorder, SharedBuffer};
use crate::session::Session;

// ---------------------------------------------------------------------------
// Test world
// ---------------------------------------------------------------------------

#[derive(Default)]
struct SessionWorld {
    buffer: SharedBuffer,
    session: Option<Session<'static>>,
    recorder: Recorder,
}

impl SessionWorld {
    fn session(&mut self) -> &mut Session<'static> {
        self.session.as_mut().expect("session not started")
    }
}

#[fixture]
fn world() -> SessionWorld {
    SessionWorld::default()
}

// ---------------------------------------------------------------------------
// Given steps
// ---------------------------------------------------------------------------

#[given("a started session for robot {name}")]
fn given_started_session(world: &mut SessionWorld, name: String) {
    let profile = RobotProfile::new(name.trim_matches('"'));
    let mut session = Session::new(profile, world.buffer.clone());
    session.begin().expect("blocking mode starts");
    world.buffer.clear();
    world.session = Some(session);
}

// ---------------------------------------------------------------------------
// When steps
// ---------------------------------------------------------------------------

#[when("the server sends {line}")]
fn when_server_sends(world: &mut SessionWorld, line: String) {
    let session = world.session.as_mut().expect("session not started");
    session.dispatch(line.trim_matches('"'), &mut world.recorder);
}

#[when("the robot shoots with energy {energy}")]
fn when_robot_shoots(world: &mut SessionWorld, energy: f64) {
    world.session().shoot(energy);
}

// ---------------------------------------------------------------------------
// Then steps
// ---------------------------------------------------------------------------

#[then("the robot sent {line}")]
fn then_robot_sent(world: &mut SessionWorld, line: String) {
    let expected = line.trim_matches('"');
    let sent = world.buffer.lines();
    assert!(
        sent.iter().any(|candidate| candidate == expected),
        "expected '{expected}' in {sent:?}"
    );
}

#[then("nothing was sent after the handshake")]
fn then_nothing_sent(world: &mut SessionWorld) {
    assert!(world.buffer.lines().is_empty());
}

#[then("the robot is alive")]
fn then_alive(world: &mut SessionWorld) {
    assert!(world.session().is_alive());
}

#[then("the robot is not alive")]
fn then_not_alive(world: &mut SessionWorld) {
    assert!(!world.session().is_alive());
}

#[then("the session is active")]
fn then_active(world: &mut SessionWorld) {
    assert!(world.session().is_active());
}

#[then("the session is inactive")]
fn then_inactive(world: &mut SessionWorld) {
    assert!(!world.session().is_active());
}

#[then("an illegal message warning was raised")]
fn then_illegal_message(world: &mut SessionWorld) {
    assert!(
        world
            .recorder
            .warnings
            .iter()
            .any(|(kind, _)| *kind == WarningKind::IllegalMessage),
        "warnings: {:?}",
        world.recorder.warnings
    );
}

// ---------------------------------------------------------------------------
// Scenario registration
// ---------------------------------------------------------------------------

#[scenario(
    path = "tests/features/session_lifecycle.feature",
    name = "A match runs from start to death"
)]
fn match_from_start_to_death(world: SessionWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/session_lifecycle.feature",
    name = "Commands outside a match are dropped"
)]
fn commands_outside_a_match(world: SessionWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/session_lifecycle.feature",
    name = "Malformed lines are reported and skipped"
)]
fn malformed_lines_are_skipped(world: SessionWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/session_lifecycle.feature",
    name = "The server ends the session"
)]
fn server_ends_the_session(world: SessionWorld) {
    let _ = world;
}
