/// Timed hostile factory.  Owns the live hostile set for a session.

use log::debug;
use rand::Rng;

use crate::config::HOSTILE_SIZE;
use crate::entities::{Hostile, HostileKind};

#[derive(Clone, Debug)]
pub struct HostileSpawner {
    pub hostiles: Vec<Hostile>,
    pub interval: u64,
    pub last_spawn: u64,
    width: f32,
    height: f32,
}

impl HostileSpawner {
    pub fn new(interval: u64, width: f32, height: f32) -> Self {
        Self {
            hostiles: Vec::new(),
            interval,
            last_spawn: 0,
            width,
            height,
        }
    }

    /// Spawn at most one hostile if the interval has passed, then advance every
    /// hostile and drop those that fell past the bottom edge.
    ///
    /// Spawning is gated on `now` alone, never on frame delta.
    pub fn update(&mut self, now: u64, rng: &mut impl Rng) {
        if now.saturating_sub(self.last_spawn) > self.interval {
            let hostile = spawn_hostile(self.width, rng);
            debug!(
                "spawned {:?} hostile at x={:.1} speed={:.2}",
                hostile.kind, hostile.x, hostile.speed
            );
            self.hostiles.push(hostile);
            self.last_spawn = now;
        }

        for hostile in &mut self.hostiles {
            hostile.advance();
        }
        let height = self.height;
        self.hostiles.retain(|h| !h.is_below(height));
    }

    pub fn clear(&mut self) {
        self.hostiles.clear();
        self.last_spawn = 0;
    }
}

/// Uniform kind, uniform column, speed uniform within the kind's range.
pub fn spawn_hostile(width: f32, rng: &mut impl Rng) -> Hostile {
    let kind = HostileKind::ALL[rng.gen_range(0..HostileKind::ALL.len())];
    let x = rng.gen_range(0.0..=(width - HOSTILE_SIZE).max(0.0));
    let speed = rng.gen_range(kind.speed_range());
    Hostile::new(kind, x, speed)
}
