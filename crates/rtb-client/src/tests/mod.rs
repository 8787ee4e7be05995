//! Crate-level session tests and shared fixtures.

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use mockall::{Sequence, mock};
use rtb_config::RobotProfile;
use rtb_protocol::{ObjectKind, WarningKind};

use crate::error::ClientError;
use crate::handler::RobotHandler;
use crate::run::{EndReason, run};
use crate::session::Session;
use crate::transport::{LineSink, LineSource};

mod behaviour;

/// Cloneable in-memory sink so a test keeps a view of what the session wrote.
#[derive(Clone, Default)]
pub(crate) struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl SharedBuffer {
    pub(crate) fn lines(&self) -> Vec<String> {
        String::from_utf8_lossy(&self.0.borrow())
            .lines()
            .map(str::to_owned)
            .collect()
    }

    pub(crate) fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Records every notification it receives.
#[derive(Debug, Default)]
pub(crate) struct Recorder {
    pub(crate) events: Vec<String>,
    pub(crate) warnings: Vec<(WarningKind, String)>,
    pub(crate) claim_initialize: bool,
    pub(crate) claim_raw_lines: bool,
}

impl RobotHandler for Recorder {
    fn raw_line(&mut self, _session: &mut Session<'_>, _line: &str) -> bool {
        self.claim_raw_lines
    }

    fn on_initialize(&mut self, _session: &mut Session<'_>, first: bool) -> bool {
        self.events.push(format!("initialize {first}"));
        self.claim_initialize
    }

    fn on_game_starts(&mut self, session: &mut Session<'_>) -> bool {
        self.events.push(format!("game starts alive={}", session.is_alive()));
        false
    }

    fn on_radar(
        &mut self,
        _session: &mut Session<'_>,
        _distance: f64,
        object: ObjectKind,
        _angle: f64,
    ) -> bool {
        self.events.push(format!("radar {object:?}"));
        false
    }

    fn on_energy(&mut self, session: &mut Session<'_>, energy: f64) -> bool {
        let stored = session.robot().energy();
        self.events.push(format!("energy {energy} stored {stored}"));
        false
    }

    fn on_warning(&mut self, _session: &mut Session<'_>, kind: WarningKind, message: &str) -> bool {
        self.warnings.push((kind, message.to_owned()));
        false
    }

    fn on_dead(&mut self, _session: &mut Session<'_>) -> bool {
        self.events.push(String::from("dead"));
        false
    }

    fn on_exit_robot(&mut self, session: &mut Session<'_>) -> bool {
        self.events.push(format!("exit active={}", session.is_active()));
        false
    }
}

mock! {
    Sink {}
    impl LineSink for Sink {
        fn send_line(&mut self, line: &str) -> io::Result<()>;
    }
}

mock! {
    Source {}
    impl LineSource for Source {
        fn next_line(&mut self) -> io::Result<Option<String>>;
    }
}

fn broken_pipe() -> io::Error {
    io::Error::from(io::ErrorKind::BrokenPipe)
}

#[test]
fn scripted_conversation_produces_the_expected_trace() {
    let buffer = SharedBuffer::default();
    let mut session = Session::new(RobotProfile::new("tracer"), buffer.clone());
    session.begin().expect("blocking mode");
    let mut recorder = Recorder::default();

    let script = [
        "Initialize 1",
        "GameStarts",
        "Coordinates 10 20 0.5",
        "Energy 42",
        "Dead",
        "GameFinishes",
        "ExitRobot",
    ];
    let mut active = Vec::new();
    let mut alive = Vec::new();
    for line in script {
        session.dispatch(line, &mut recorder);
        active.push(session.is_active());
        alive.push(session.is_alive());
    }

    assert_eq!(active, [true, true, true, true, true, true, false]);
    assert_eq!(alive, [false, true, true, true, false, false, false]);
    let robot = session.robot();
    assert!((robot.x() - 10.0).abs() < f64::EPSILON);
    assert!((robot.y() - 20.0).abs() < f64::EPSILON);
    assert!((robot.angle() - 0.5).abs() < f64::EPSILON);
    assert!((robot.energy() - 42.0).abs() < f64::EPSILON);
    assert_eq!(
        recorder.events,
        [
            "initialize true",
            "game starts alive=true",
            "energy 42 stored 42",
            "dead",
            "exit active=false",
        ]
    );
}

#[test]
fn run_drives_a_session_to_exit() {
    let buffer = SharedBuffer::default();
    let mut input = "Initialize 1\nYourName ignored\nGameStarts\nRadar 5 2 0.1\nExitRobot\nGameStarts\n"
        .as_bytes();
    let mut recorder = Recorder::default();

    let report = run(
        RobotProfile::new("tank").with_team("red"),
        &mut input,
        buffer.clone(),
        &mut recorder,
    )
    .expect("session should start");

    assert_eq!(report.end(), EndReason::Exited);
    assert_eq!(report.lines_read(), 5);
    assert_eq!(
        buffer.lines(),
        ["RobotOption 3 0", "Name tank Team: red", "Colour 4080ff ff8040"]
    );
    assert!(recorder.events.contains(&String::from("radar Wall")));
}

#[test]
fn undecodable_bytes_do_not_end_the_session() {
    let mut input: &[u8] = b"Initialize 1\nYourName caf\xe9\nGameStarts\nExitRobot\n";
    let mut recorder = Recorder::default();

    let report = run(RobotProfile::new("tank"), &mut input, io::sink(), &mut recorder)
        .expect("session should start");

    assert_eq!(report.end(), EndReason::Exited);
    assert_eq!(report.lines_read(), 4);
    assert!(recorder.events.contains(&String::from("game starts alive=true")));
    assert!(recorder.events.contains(&String::from("exit active=false")));
}

#[test]
fn closed_input_ends_the_session_cleanly() {
    let mut input = "Initialize 1\nGameStarts\n".as_bytes();
    let report = run(RobotProfile::default(), &mut input, io::sink(), &mut ())
        .expect("session should start");
    assert_eq!(report.end(), EndReason::InputClosed);
    assert!(report.end().is_clean());
    assert_eq!(report.lines_read(), 2);
}

#[test]
fn unsupported_modes_are_refused_before_the_handshake() {
    let buffer = SharedBuffer::default();
    let profile = RobotProfile::default().with_mode(rtb_config::ConnectionMode::Select);
    let mut input = "Initialize 1\n".as_bytes();

    let error = run(profile, &mut input, buffer.clone(), &mut ()).expect_err("select mode");

    assert!(matches!(error, ClientError::UnsupportedMode { .. }));
    assert!(buffer.lines().is_empty());
}

#[test]
fn handshake_write_failure_is_an_error() {
    let mut sink = MockSink::new();
    sink.expect_send_line()
        .times(1)
        .returning(|_| Err(broken_pipe()));
    let mut source = MockSource::new();
    source.expect_next_line().never();

    let error = run(RobotProfile::default(), &mut source, sink, &mut ()).expect_err("handshake");

    assert!(matches!(error, ClientError::Handshake { .. }));
}

#[test]
fn write_failure_mid_session_ends_it() {
    let mut sink = MockSink::new();
    sink.expect_send_line()
        .withf(|line| line.starts_with("RobotOption"))
        .times(1)
        .returning(|_| Ok(()));
    sink.expect_send_line()
        .withf(|line| line.starts_with("Name"))
        .times(1)
        .returning(|_| Err(broken_pipe()));

    let mut source = MockSource::new();
    let mut sequence = Sequence::new();
    source
        .expect_next_line()
        .times(1)
        .in_sequence(&mut sequence)
        .returning(|| Ok(Some(String::from("Initialize 1\n"))));

    let report = run(RobotProfile::default(), &mut source, sink, &mut ()).expect("handshake");

    assert_eq!(report.end(), EndReason::WriteFailed);
    assert!(!report.end().is_clean());
    assert_eq!(report.lines_read(), 1);
}

#[test]
fn read_failure_ends_the_session() {
    let mut source = MockSource::new();
    let mut sequence = Sequence::new();
    source
        .expect_next_line()
        .times(1)
        .in_sequence(&mut sequence)
        .returning(|| Ok(Some(String::from("GameStarts\n"))));
    source
        .expect_next_line()
        .times(1)
        .in_sequence(&mut sequence)
        .returning(|| Err(io::Error::from(io::ErrorKind::UnexpectedEof)));

    let report = run(RobotProfile::default(), &mut source, io::sink(), &mut ()).expect("handshake");

    assert_eq!(report.end(), EndReason::ReadFailed);
    assert_eq!(report.lines_read(), 1);
}
