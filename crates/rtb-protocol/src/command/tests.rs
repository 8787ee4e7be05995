//! Unit tests for command encoding.

use rstest::rstest;

use super::*;

#[rstest]
#[case::handshake(
    Command::RobotOption { option: RobotOption::UseNonBlocking, value: 0 },
    "RobotOption 3 0"
)]
#[case::lone_name(
    Command::Name { name: String::from("sentry"), team: None },
    "Name sentry"
)]
#[case::team_name(
    Command::Name { name: String::from("sentry"), team: Some(String::from("blue")) },
    "Name sentry Team: blue"
)]
#[case::colour(
    Command::Colour { home: String::from("ff0000"), away: String::from("00ff00") },
    "Colour ff0000 00ff00"
)]
#[case::rotate(
    Command::Rotate { target: RotateTarget::ROBOT, velocity: 0.5 },
    "Rotate 1 0.500000"
)]
#[case::rotate_to(
    Command::RotateTo { target: RotateTarget::CANNON, velocity: 1.0, angle: -0.25 },
    "RotateTo 2 1.000000 -0.250000"
)]
#[case::rotate_amount(
    Command::RotateAmount { target: RotateTarget::RADAR, velocity: 2.0, angle: 3.0 },
    "RotateAmount 4 2.000000 3.000000"
)]
#[case::sweep(
    Command::Sweep {
        target: RotateTarget::CANNON.union(RotateTarget::RADAR),
        velocity: 1.5,
        left: -0.5,
        right: 0.5,
    },
    "Sweep 6 1.500000 -0.500000 0.500000"
)]
#[case::accelerate(Command::Accelerate { value: 0.3 }, "Accelerate 0.300000")]
#[case::brake(Command::Brake { portion: 1.0 }, "Brake 1.000000")]
#[case::shoot(Command::Shoot { energy: 10.0 }, "Shoot 10.000000")]
#[case::print(
    Command::Print { message: String::from("hello arena") },
    "Print hello arena"
)]
#[case::debug(Command::Debug { message: String::from("tick") }, "Debug tick")]
#[case::debug_line(
    Command::DebugLine { angle1: 0.0, distance1: 1.0, angle2: 0.5, distance2: 2.0 },
    "DebugLine 0.000000 1.000000 0.500000 2.000000"
)]
#[case::debug_circle(
    Command::DebugCircle { angle: 0.1, distance: 5.0, radius: 0.5 },
    "DebugCircle 0.100000 5.000000 0.500000"
)]
#[case::print_with_newline(
    Command::Print { message: String::from("a\nShoot 1") },
    "Print a Shoot 1"
)]
#[case::debug_with_crlf(
    Command::Debug { message: String::from("tick\r\ntock") },
    "Debug tick  tock"
)]
#[case::team_with_newline(
    Command::Name { name: String::from("sen\ntry"), team: Some(String::from("bl\rue")) },
    "Name sen try Team: bl ue"
)]
#[case::colour_with_newline(
    Command::Colour { home: String::from("ff0000\n"), away: String::from("00ff00") },
    "Colour ff0000  00ff00"
)]
fn commands_render_wire_lines(#[case] command: Command, #[case] expected: &str) {
    let rendered = command.to_string();
    assert_eq!(rendered, expected);
    assert!(!rendered.contains(['\r', '\n']));
}

#[rstest]
#[case(Command::RobotOption { option: RobotOption::SendRotationReached, value: 1 }, Gate::Active)]
#[case(Command::Print { message: String::new() }, Gate::Active)]
#[case(Command::Shoot { energy: 1.0 }, Gate::Alive)]
#[case(Command::Brake { portion: 0.0 }, Gate::Alive)]
#[case(Command::Sweep { target: RotateTarget::RADAR, velocity: 1.0, left: 0.0, right: 1.0 }, Gate::Alive)]
#[case(Command::Debug { message: String::new() }, Gate::Debug)]
#[case(Command::DebugCircle { angle: 0.0, distance: 0.0, radius: 1.0 }, Gate::Debug)]
fn commands_report_their_gate(#[case] command: Command, #[case] expected: Gate) {
    assert_eq!(command.gate(), expected);
}

#[test]
fn full_rotation_mask_renders_all_bits() {
    let command = Command::Rotate {
        target: RotateTarget::all(),
        velocity: -1.0,
    };
    assert_eq!(command.to_string(), "Rotate 7 -1.000000");
}
