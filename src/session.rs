/// The game session: owns every entity and drives the per-frame update.
///
/// State machine:
///
/// ```text
///   Playing ──score crosses a threshold──▶ ChoosingEquipment
///      ▲                                        │
///      └──────────── valid choice ──────────────┘
///   Playing ──hostile touches player──▶ GameOver(Defeat)
///   Playing ──score reaches the cap───▶ GameOver(Victory)
///   GameOver ──restart──▶ fresh session
/// ```
///
/// Timestamps come from the driver; nothing here reads a clock.  All
/// randomness is injected so callers control determinism.

use log::{debug, info, warn};
use rand::Rng;

use crate::collision;
use crate::config::{GameConfig, PLAYER_HEIGHT, PLAYER_START_MARGIN, PLAYER_WIDTH};
use crate::entities::{GameStatus, Outcome, Player, Projectile, Side, Wingman};
use crate::equipment::{self, Equipment};
use crate::layout;
use crate::spawner::HostileSpawner;

#[derive(Clone, Debug)]
pub struct GameSession {
    pub config: GameConfig,
    pub player: Player,
    pub score: u32,
    pub projectiles: Vec<Projectile>,
    pub spawner: HostileSpawner,
    /// Granted equipment in acquisition order.
    pub equipments: Vec<Equipment>,
    pub wingmen: Vec<Wingman>,
    /// Options on the table while `status == ChoosingEquipment`.
    pub offered: Vec<Equipment>,
    pub status: GameStatus,
    pub last_fire: u64,
    pub last_equipment_score: u32,
}

impl GameSession {
    pub fn new(config: GameConfig) -> Self {
        let player = Player {
            x: (config.width - PLAYER_WIDTH) / 2.0,
            y: config.height - PLAYER_START_MARGIN,
        };
        let spawner = HostileSpawner::new(config.spawn_interval, config.width, config.height);
        Self {
            config,
            player,
            score: 0,
            projectiles: Vec::new(),
            spawner,
            equipments: Vec::new(),
            wingmen: Vec::new(),
            offered: Vec::new(),
            status: GameStatus::Playing,
            last_fire: 0,
            last_equipment_score: 0,
        }
    }

    /// Back to construction-time defaults, keeping the configuration.
    pub fn reset(&mut self) {
        info!("session reset (final score {})", self.score);
        *self = GameSession::new(self.config.clone());
    }

    // ── Per-frame update ──────────────────────────────────────────────────────

    /// Advance the simulation to `now`.  Does nothing unless playing.
    pub fn update(&mut self, now: u64, rng: &mut impl Rng) {
        if self.status != GameStatus::Playing {
            return;
        }

        // ── 1. Spawn & move hostiles ─────────────────────────────────────────
        self.spawner.update(now, rng);

        // ── 2. Auto-fire through the equipment chain ─────────────────────────
        self.fire(now);

        // ── 3. Wingmen follow and fire on their own cadence ──────────────────
        self.fire_wingmen(now);

        // ── 4. Move projectiles, drop the ones that left the screen ──────────
        let (width, height) = (self.config.width, self.config.height);
        for projectile in &mut self.projectiles {
            projectile.advance();
        }
        self.projectiles.retain(|p| !p.is_offscreen(width, height));

        // ── 5. Projectiles ↔ hostiles ────────────────────────────────────────
        collision::resolve_projectile_hits(self, rng);

        // ── 6. Hostiles ↔ player ─────────────────────────────────────────────
        if self.status == GameStatus::Playing && collision::player_hit(self) {
            info!("player hit, game over with score {}", self.score);
            self.status = GameStatus::GameOver(Outcome::Defeat);
        }
    }

    /// Fire one seed projectile from the player's nose if the fire interval
    /// has elapsed, folded through every granted equipment in order.
    /// Returns how many projectiles were added.
    pub fn fire(&mut self, now: u64) -> usize {
        if now.saturating_sub(self.last_fire) <= self.config.fire_interval {
            return 0;
        }
        self.last_fire = now;

        let (x, y) = self.player.nose();
        let equipments = self.equipments.clone();
        let batch = equipment::apply_all(&equipments, self, Projectile::seed(x, y));
        let added = batch.len();
        self.projectiles.extend(batch);
        added
    }

    fn fire_wingmen(&mut self, now: u64) {
        for wingman in &mut self.wingmen {
            wingman.update(self.player.x, self.player.y);
            if let Some(projectile) = wingman.try_fire(now) {
                self.projectiles.push(projectile);
            }
        }
    }

    /// Attach a support craft on `side`.  At most one per side; returns
    /// `false` when one is already flying there.
    pub fn register_wingman(&mut self, side: Side) -> bool {
        if self.wingmen.iter().any(|w| w.side == side) {
            return false;
        }
        let mut wingman = Wingman::new(side, self.config.wingman_fire_interval);
        wingman.update(self.player.x, self.player.y);
        debug!("{side:?} wingman joined");
        self.wingmen.push(wingman);
        true
    }

    // ── Scoring & equipment offers ────────────────────────────────────────────

    /// Add points, clamped to `max_score`.  Reaching the cap wins; otherwise
    /// crossing a new multiple of `score_per_equipment` opens an offer.
    pub fn add_score(&mut self, points: u32, rng: &mut impl Rng) {
        self.score = self.score.saturating_add(points).min(self.config.max_score);

        if self.score >= self.config.max_score {
            if !matches!(self.status, GameStatus::GameOver(_)) {
                info!("score cap {} reached, victory", self.config.max_score);
                self.offered.clear();
                self.status = GameStatus::GameOver(Outcome::Victory);
            }
            return;
        }
        self.maybe_offer_equipment(rng);
    }

    fn maybe_offer_equipment(&mut self, rng: &mut impl Rng) {
        if self.status != GameStatus::Playing
            || self.equipments.len() >= self.config.max_equipments
        {
            return;
        }
        let step = self.config.score_per_equipment.max(1);
        if self.score / step <= self.last_equipment_score / step {
            return;
        }
        self.offered = equipment::draw_offer(rng);
        info!(
            "equipment offer at score {}: {:?}",
            self.score,
            self.offered.iter().map(|e| e.name).collect::<Vec<_>>()
        );
        self.status = GameStatus::ChoosingEquipment;
    }

    /// Pick offered option `index` and resume play.  Returns `false` (and
    /// changes nothing) if no offer is open or the index is out of range.
    pub fn choose_equipment(&mut self, index: usize) -> bool {
        if self.status != GameStatus::ChoosingEquipment {
            return false;
        }
        let Some(chosen) = self.offered.get(index).copied() else {
            warn!("equipment choice {index} ignored, {} on offer", self.offered.len());
            return false;
        };
        self.grant(chosen);
        self.last_equipment_score = self.score;
        self.offered.clear();
        self.status = GameStatus::Playing;
        true
    }

    /// Append `equipment` to the held list.  Silently refused beyond
    /// `max_equipments` or for a second copy of a one-per-side support craft.
    pub fn grant(&mut self, equipment: Equipment) -> bool {
        if self.equipments.len() >= self.config.max_equipments {
            info!("{} not granted, equipment slots full", equipment.name);
            return false;
        }
        if equipment.kind.support_side().is_some() && self.equipments.contains(&equipment) {
            info!("{} already held, grant ignored", equipment.name);
            return false;
        }
        info!("granted {}", equipment.name);
        self.equipments.push(equipment);
        if let Some(side) = equipment.kind.support_side() {
            self.register_wingman(side);
        }
        true
    }

    // ── Pointer input ─────────────────────────────────────────────────────────

    /// Tap: picks an offered equipment or presses restart, depending on state.
    pub fn pointer_start(&mut self, x: f32, y: f32) {
        match self.status {
            GameStatus::ChoosingEquipment => {
                if let Some(index) = layout::choice_at(&self.config, x, y) {
                    self.choose_equipment(index);
                }
            }
            GameStatus::GameOver(_) => {
                if layout::restart_rect(&self.config).contains(x, y) {
                    self.reset();
                }
            }
            GameStatus::Playing => {}
        }
    }

    /// Drag: centre the player under the pointer, kept fully on screen.
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        if self.status != GameStatus::Playing {
            return;
        }
        let max_x = (self.config.width - PLAYER_WIDTH).max(0.0);
        let max_y = (self.config.height - PLAYER_HEIGHT).max(0.0);
        self.player.x = (x - PLAYER_WIDTH / 2.0).clamp(0.0, max_x);
        self.player.y = (y - PLAYER_HEIGHT / 2.0).clamp(0.0, max_y);
    }

    /// Lift: choices and restart already fired on touch-down.
    pub fn pointer_end(&mut self) {}

    pub fn is_game_over(&self) -> bool {
        matches!(self.status, GameStatus::GameOver(_))
    }
}
