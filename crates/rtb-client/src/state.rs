//! The dispatcher's model of the session, the robot and the arena.
//!
//! Only the dispatcher mutates these values. Handlers see them through the
//! read-only accessors on [`crate::Session`].

use rtb_protocol::{DEBUG_SENTINEL, GameOption, ObjectKind};

/// Whether the robot is connected and whether it is fighting.
///
/// `alive` implies `active`; the transition methods keep that invariant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lifecycle {
    active: bool,
    alive: bool,
}

impl Lifecycle {
    /// Between session start and session end.
    #[must_use]
    pub const fn is_active(self) -> bool {
        self.active
    }

    /// Inside a match and not yet dead.
    #[must_use]
    pub const fn is_alive(self) -> bool {
        self.alive
    }

    pub(crate) const fn begin(&mut self) {
        self.active = true;
        self.alive = false;
    }

    pub(crate) const fn enter_match(&mut self) {
        self.alive = self.active;
    }

    pub(crate) const fn leave_match(&mut self) {
        self.alive = false;
    }

    pub(crate) const fn end(&mut self) {
        self.active = false;
        self.alive = false;
    }
}

/// Game options announced by the server; unannounced options read as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GameOptions {
    values: [f64; GameOption::COUNT],
}

impl GameOptions {
    /// Value of `option`, or zero when it was never announced or is unknown.
    #[must_use]
    pub fn get(&self, option: GameOption) -> f64 {
        option
            .index()
            .and_then(|index| self.values.get(index))
            .copied()
            .unwrap_or_default()
    }

    /// Whether the server runs at the debug level.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "the server compares the integer part of the debug level"
    )]
    pub fn is_debug(&self) -> bool {
        self.get(GameOption::DebugLevel) as i64 == DEBUG_SENTINEL
    }

    /// Stores `value`; returns `false` when `option` has no slot.
    pub(crate) fn set(&mut self, option: GameOption, value: f64) -> bool {
        match option.index().and_then(|index| self.values.get_mut(index)) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }
}

/// Latest reported values for the robot itself.
///
/// Each message type refreshes only its own fields.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RobotState {
    time: f64,
    energy: f64,
    x: f64,
    y: f64,
    angle: f64,
    speed: f64,
    cannon: f64,
}

impl RobotState {
    /// Game time from the last `Info`.
    #[must_use]
    pub const fn time(&self) -> f64 {
        self.time
    }

    /// Energy from the last `Energy`.
    #[must_use]
    pub const fn energy(&self) -> f64 {
        self.energy
    }

    /// X position from the last `Coordinates`.
    #[must_use]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// Y position from the last `Coordinates`.
    #[must_use]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Heading (rad) from the last `Coordinates`.
    #[must_use]
    pub const fn angle(&self) -> f64 {
        self.angle
    }

    /// Speed from the last `Info`.
    #[must_use]
    pub const fn speed(&self) -> f64 {
        self.speed
    }

    /// Cannon angle relative to the robot from the last `Info`.
    #[must_use]
    pub const fn cannon(&self) -> f64 {
        self.cannon
    }

    pub(crate) const fn update_info(&mut self, time: f64, speed: f64, cannon: f64) {
        self.time = time;
        self.speed = speed;
        self.cannon = cannon;
    }

    pub(crate) const fn update_coordinates(&mut self, x: f64, y: f64, angle: f64) {
        self.x = x;
        self.y = y;
        self.angle = angle;
    }

    pub(crate) const fn update_energy(&mut self, energy: f64) {
        self.energy = energy;
    }
}

/// Last-known data for one radar category.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RadarSlot {
    x: f64,
    y: f64,
    energy: f64,
    teammate: bool,
}

impl RadarSlot {
    /// X position of the last sighting (tracked sessions only).
    #[must_use]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// Y position of the last sighting (tracked sessions only).
    #[must_use]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Energy of the last sighted robot (robot slot only).
    #[must_use]
    pub const fn energy(&self) -> f64 {
        self.energy
    }

    /// Whether the last sighted robot is a teammate (robot slot only).
    #[must_use]
    pub const fn teammate(&self) -> bool {
        self.teammate
    }
}

/// One [`RadarSlot`] per radar category.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RadarTable {
    slots: [RadarSlot; ObjectKind::CATEGORY_COUNT],
}

impl RadarTable {
    /// Slot for `kind`, or `None` when `kind` is not a radar category.
    #[must_use]
    pub fn slot(&self, kind: ObjectKind) -> Option<&RadarSlot> {
        kind.category_index()
            .and_then(|index| self.slots.get(index))
    }

    fn slot_mut(&mut self, kind: ObjectKind) -> Option<&mut RadarSlot> {
        kind.category_index()
            .and_then(|index| self.slots.get_mut(index))
    }

    /// Merges robot detail into the robot slot, keeping its position.
    pub(crate) fn record_robot_info(&mut self, energy: f64, teammate: bool) {
        if let Some(slot) = self.slot_mut(ObjectKind::Robot) {
            slot.energy = energy;
            slot.teammate = teammate;
        }
    }

    /// Stores the absolute position of a sighting seen from `robot`.
    #[expect(clippy::float_arithmetic, reason = "polar to cartesian conversion")]
    pub(crate) fn record_sighting(
        &mut self,
        robot: &RobotState,
        kind: ObjectKind,
        distance: f64,
        radar_angle: f64,
    ) {
        if let Some(slot) = self.slot_mut(kind) {
            let bearing = robot.angle() + radar_angle;
            slot.x = distance.mul_add(bearing.cos(), robot.x());
            slot.y = distance.mul_add(bearing.sin(), robot.y());
        }
    }
}
