//! A small reference robot built on [`RobotHandler`].

use std::f64::consts::{FRAC_PI_2, PI};

use rtb_client::{Delivery, RobotHandler, Session};
use rtb_protocol::{GameOption, ObjectKind, RotateTarget, WarningKind, normalize_angle};
use tracing::{debug, warn};

/// Acceleration requested at the start of every match.
const CRUISE_ACCELERATION: f64 = 0.5;
/// Rotation speed used when no limit was announced (rad/s).
const FALLBACK_ROTATION: f64 = 1.0;

/// Sweeps its radar, drives forward, shoots at enemies and turns away from
/// walls.
///
/// A `Radar` sighting of a robot points the cannon at it; the `RobotInfo`
/// that follows decides whether to fire, so teammates are spared. Only
/// shots that reach the server are counted.
#[derive(Debug, Default)]
pub struct Sentry {
    target_in_sight: bool,
    shots_fired: u32,
    deaths: u32,
}

impl Sentry {
    /// Shots fired across the whole session.
    #[must_use]
    pub const fn shots_fired(&self) -> u32 {
        self.shots_fired
    }

    /// Matches in which the robot died.
    #[must_use]
    pub const fn deaths(&self) -> u32 {
        self.deaths
    }
}

fn rotation_speed(session: &Session<'_>, option: GameOption) -> f64 {
    let limit = session.option(option);
    if limit > 0.0 { limit } else { FALLBACK_ROTATION }
}

impl RobotHandler for Sentry {
    fn on_game_starts(&mut self, session: &mut Session<'_>) -> bool {
        self.target_in_sight = false;
        let speed = rotation_speed(session, GameOption::RobotRadarMaxRotate);
        session.sweep(RotateTarget::RADAR, speed, -FRAC_PI_2, FRAC_PI_2);
        session.accelerate(CRUISE_ACCELERATION);
        true
    }

    fn on_radar(
        &mut self,
        session: &mut Session<'_>,
        distance: f64,
        object: ObjectKind,
        angle: f64,
    ) -> bool {
        self.target_in_sight = object == ObjectKind::Robot;
        if self.target_in_sight {
            debug!(distance, angle, "robot sighted");
            let speed = rotation_speed(session, GameOption::RobotCannonMaxRotate);
            session.rotate_to(RotateTarget::CANNON, speed, normalize_angle(angle));
        }
        true
    }

    fn on_robot_info(&mut self, session: &mut Session<'_>, _energy: f64, teammate: bool) -> bool {
        if self.target_in_sight && !teammate {
            let energy = session.option(GameOption::ShotMinEnergy);
            if session.shoot(energy) == Delivery::Sent {
                self.shots_fired = self.shots_fired.saturating_add(1);
            }
        }
        self.target_in_sight = false;
        true
    }

    fn on_collision(&mut self, session: &mut Session<'_>, object: ObjectKind, _angle: f64) -> bool {
        if object == ObjectKind::Wall {
            let speed = rotation_speed(session, GameOption::RobotMaxRotate);
            session.rotate_amount(RotateTarget::ROBOT, speed, PI);
        }
        true
    }

    fn on_warning(&mut self, _session: &mut Session<'_>, kind: WarningKind, message: &str) -> bool {
        warn!(?kind, message, "server warning");
        true
    }

    fn on_dead(&mut self, session: &mut Session<'_>) -> bool {
        self.deaths = self.deaths.saturating_add(1);
        session.print("sentry down");
        true
    }
}
