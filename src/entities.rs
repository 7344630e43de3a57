/// Game entity types: plain data plus the motion rules each entity owns.

use std::ops::RangeInclusive;

use crate::config::{
    HOSTILE_SIZE, PLAYER_HEIGHT, PLAYER_WIDTH, PROJECTILE_HEIGHT, PROJECTILE_SPEED,
    PROJECTILE_WIDTH, WINGMAN_OFFSET_X, WINGMAN_OFFSET_Y, WINGMAN_SHOT_HEADING, WINGMAN_SIZE,
};

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Axis-aligned box in world units; `(x, y)` is the top-left corner and y grows
/// downwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Strict overlap on both axes; touching edges do not count.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }

    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px <= self.x + self.w && py >= self.y && py <= self.y + self.h
    }
}

// ── Projectiles ───────────────────────────────────────────────────────────────

/// Effect tags carried by a projectile.  Read by the collision pass and the
/// renderer; they never change how a projectile moves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Effects {
    pub electric: bool,
    pub split: bool,
    /// Area damage around the first hostile hit.
    pub aoe: bool,
    pub homing: bool,
    /// Survives hits instead of being consumed by the first one.
    pub piercing: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Projectile {
    pub x: f32,
    pub y: f32,
    pub speed: f32,
    /// Radians, 0 = straight up, positive turns clockwise on screen.
    pub angle: f32,
    pub effects: Effects,
}

impl Projectile {
    pub fn new(x: f32, y: f32, speed: f32, angle: f32, effects: Effects) -> Self {
        Self { x, y, speed, angle, effects }
    }

    /// Untagged projectile at base speed heading straight up.
    pub fn seed(x: f32, y: f32) -> Self {
        Self::new(x, y, PROJECTILE_SPEED, 0.0, Effects::default())
    }

    /// Move one tick along the heading (screen y is inverted).
    pub fn advance(&mut self) {
        self.x += self.angle.sin() * self.speed;
        self.y -= self.angle.cos() * self.speed;
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, PROJECTILE_WIDTH, PROJECTILE_HEIGHT)
    }

    /// True once the box lies entirely outside `[0, width] × [0, height]`.
    pub fn is_offscreen(&self, width: f32, height: f32) -> bool {
        self.x + PROJECTILE_WIDTH < 0.0
            || self.x > width
            || self.y + PROJECTILE_HEIGHT < 0.0
            || self.y > height
    }
}

// ── Hostiles ──────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HostileKind {
    Normal,
    Fast,
    Strong,
}

/// How a hostile is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    Square,
    Circle,
    Triangle,
}

impl HostileKind {
    pub const ALL: [HostileKind; 3] = [HostileKind::Normal, HostileKind::Fast, HostileKind::Strong];

    /// Speed range a freshly spawned hostile draws from (world units per tick).
    pub fn speed_range(self) -> RangeInclusive<f32> {
        match self {
            HostileKind::Normal => 2.0..=4.0,
            HostileKind::Fast => 4.0..=6.0,
            HostileKind::Strong => 1.0..=2.5,
        }
    }

    /// Score awarded for a direct kill.
    pub fn score(self) -> u32 {
        match self {
            HostileKind::Normal => 10,
            HostileKind::Fast => 20,
            HostileKind::Strong => 30,
        }
    }

    pub fn shape(self) -> Shape {
        match self {
            HostileKind::Normal => Shape::Square,
            HostileKind::Fast => Shape::Circle,
            HostileKind::Strong => Shape::Triangle,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Hostile {
    pub x: f32,
    pub y: f32,
    pub kind: HostileKind,
    pub speed: f32,
}

impl Hostile {
    /// A hostile placed just above the top edge at column `x`.
    pub fn new(kind: HostileKind, x: f32, speed: f32) -> Self {
        Self { x, y: -HOSTILE_SIZE, kind, speed }
    }

    pub fn score(&self) -> u32 {
        self.kind.score()
    }

    pub fn advance(&mut self) {
        self.y += self.speed;
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, HOSTILE_SIZE, HOSTILE_SIZE)
    }

    pub fn is_below(&self, height: f32) -> bool {
        self.y > height
    }
}

// ── Support craft ─────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Wingman {
    pub side: Side,
    pub x: f32,
    pub y: f32,
    pub fire_interval: u64,
    pub last_fire: u64,
}

impl Wingman {
    pub fn new(side: Side, fire_interval: u64) -> Self {
        Self { side, x: 0.0, y: 0.0, fire_interval, last_fire: 0 }
    }

    /// Snap into formation next to the player.
    pub fn update(&mut self, player_x: f32, player_y: f32) {
        let dx = match self.side {
            Side::Left => -WINGMAN_OFFSET_X,
            Side::Right => WINGMAN_OFFSET_X,
        };
        self.x = player_x + dx;
        self.y = player_y + WINGMAN_OFFSET_Y;
    }

    /// Emit one tagged projectile if the fire interval has elapsed.
    pub fn try_fire(&mut self, now: u64) -> Option<Projectile> {
        if now.saturating_sub(self.last_fire) <= self.fire_interval {
            return None;
        }
        self.last_fire = now;
        let effects = match self.side {
            Side::Left => Effects { aoe: true, ..Effects::default() },
            Side::Right => Effects { homing: true, ..Effects::default() },
        };
        Some(Projectile::new(self.x, self.y, PROJECTILE_SPEED, WINGMAN_SHOT_HEADING, effects))
    }

    pub fn rect(&self) -> Rect {
        Rect::new(
            self.x - WINGMAN_SIZE / 2.0,
            self.y - WINGMAN_SIZE / 2.0,
            WINGMAN_SIZE,
            WINGMAN_SIZE,
        )
    }
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
}

impl Player {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, PLAYER_WIDTH, PLAYER_HEIGHT)
    }

    /// Spawn point of the player's own shots: top centre of the ship.
    pub fn nose(&self) -> (f32, f32) {
        (self.x + (PLAYER_WIDTH - PROJECTILE_WIDTH) / 2.0, self.y)
    }
}

// ── Session status ────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// A hostile reached the player.
    Defeat,
    /// The score cap was reached.
    Victory,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    /// Gameplay frozen while the player picks one of the offered equipment.
    ChoosingEquipment,
    GameOver(Outcome),
}
