//! Tunables and fixed gameplay constants.
//!
//! Fixed values (entity sizes, speeds, intervals) live here as constants;
//! everything a caller may want to change per session goes through
//! `GameConfig`.

// ── Entity geometry ───────────────────────────────────────────────────────────

pub const PLAYER_WIDTH: f32 = 40.0;
pub const PLAYER_HEIGHT: f32 = 40.0;
/// Distance of the player's top edge from the bottom of the play area at start.
pub const PLAYER_START_MARGIN: f32 = 100.0;

pub const PROJECTILE_WIDTH: f32 = 5.0;
pub const PROJECTILE_HEIGHT: f32 = 10.0;
pub const PROJECTILE_SPEED: f32 = 5.0;

pub const HOSTILE_SIZE: f32 = 40.0;

pub const WINGMAN_SIZE: f32 = 30.0;
pub const WINGMAN_OFFSET_X: f32 = 40.0;
pub const WINGMAN_OFFSET_Y: f32 = 20.0;
/// Wingmen fire sideways (heading −π/2).
pub const WINGMAN_SHOT_HEADING: f32 = -std::f32::consts::FRAC_PI_2;

// ── Equipment & collision ─────────────────────────────────────────────────────

/// Split Arrow fans out at ±30°.
pub const SPLIT_SPREAD: f32 = std::f32::consts::PI / 6.0;
pub const AOE_RADIUS: f32 = 100.0;
/// Number of options presented per equipment offer.
pub const OFFER_SIZE: usize = 2;

// ── Timers (milliseconds) ─────────────────────────────────────────────────────

pub const FIRE_INTERVAL: u64 = 500;
pub const SPAWN_INTERVAL: u64 = 2000;
pub const WINGMAN_FIRE_INTERVAL: u64 = 1000;

/// Score needed per equipment offer.  Debug builds use a smaller step so
/// offers show up quickly while testing by hand.
pub const SCORE_PER_EQUIPMENT: u32 = if cfg!(debug_assertions) { 30 } else { 100 };

/// Per-session tunables.
#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    /// Play-area width in world units.
    pub width: f32,
    /// Play-area height in world units.
    pub height: f32,
    /// Hard score cap; reaching it wins the session.
    pub max_score: u32,
    pub score_per_equipment: u32,
    pub max_equipments: usize,
    pub fire_interval: u64,
    pub spawn_interval: u64,
    pub wingman_fire_interval: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 480.0,
            height: 800.0,
            max_score: 9999,
            score_per_equipment: SCORE_PER_EQUIPMENT,
            max_equipments: 6,
            fire_interval: FIRE_INTERVAL,
            spawn_interval: SPAWN_INTERVAL,
            wingman_fire_interval: WINGMAN_FIRE_INTERVAL,
        }
    }
}
