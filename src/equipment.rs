/// Equipment: named transforms applied to every freshly fired projectile.
///
/// Each equipment holds a plain function `(session, projectile) -> batch`.
/// Adding a new upgrade means adding an `EquipmentKind` variant and its
/// transform below; nothing dispatches on the kind at fire time.

use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::{OFFER_SIZE, SPLIT_SPREAD};
use crate::entities::{Effects, Projectile, Side};
use crate::session::GameSession;

pub type Transform = fn(&mut GameSession, Projectile) -> Vec<Projectile>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EquipmentKind {
    SplitArrow,
    ElectricKnife,
    PiercingLance,
    LeftWingman,
    RightWingman,
}

/// Everything an offer can draw from.
pub const POOL: [EquipmentKind; 5] = [
    EquipmentKind::SplitArrow,
    EquipmentKind::ElectricKnife,
    EquipmentKind::PiercingLance,
    EquipmentKind::LeftWingman,
    EquipmentKind::RightWingman,
];

impl EquipmentKind {
    pub fn equipment(self) -> Equipment {
        let (name, transform): (&'static str, Transform) = match self {
            EquipmentKind::SplitArrow => ("Split Arrow", split_arrow),
            EquipmentKind::ElectricKnife => ("Electric Knife", electric_knife),
            EquipmentKind::PiercingLance => ("Piercing Lance", piercing_lance),
            EquipmentKind::LeftWingman => ("Left Wingman", left_wingman),
            EquipmentKind::RightWingman => ("Right Wingman", right_wingman),
        };
        Equipment { kind: self, name, transform }
    }

    /// The side this equipment occupies, for one-per-side support craft.
    pub fn support_side(self) -> Option<Side> {
        match self {
            EquipmentKind::LeftWingman => Some(Side::Left),
            EquipmentKind::RightWingman => Some(Side::Right),
            _ => None,
        }
    }
}

/// An immutable, granted-or-offered upgrade.
#[derive(Clone, Copy)]
pub struct Equipment {
    pub kind: EquipmentKind,
    pub name: &'static str,
    transform: Transform,
}

impl Equipment {
    pub fn apply(&self, session: &mut GameSession, projectile: Projectile) -> Vec<Projectile> {
        (self.transform)(session, projectile)
    }
}

impl PartialEq for Equipment {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

impl fmt::Debug for Equipment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Equipment")
            .field("kind", &self.kind)
            .field("name", &self.name)
            .finish()
    }
}

// ── Transforms ────────────────────────────────────────────────────────────────

fn split_arrow(_session: &mut GameSession, projectile: Projectile) -> Vec<Projectile> {
    let effects = Effects { split: true, ..projectile.effects };
    [-SPLIT_SPREAD, 0.0, SPLIT_SPREAD]
        .iter()
        .map(|offset| {
            Projectile::new(
                projectile.x,
                projectile.y,
                projectile.speed,
                projectile.angle + offset,
                effects,
            )
        })
        .collect()
}

fn electric_knife(_session: &mut GameSession, mut projectile: Projectile) -> Vec<Projectile> {
    projectile.effects.electric = true;
    vec![projectile]
}

fn piercing_lance(_session: &mut GameSession, mut projectile: Projectile) -> Vec<Projectile> {
    projectile.effects.piercing = true;
    vec![projectile]
}

fn left_wingman(session: &mut GameSession, projectile: Projectile) -> Vec<Projectile> {
    session.register_wingman(Side::Left);
    vec![projectile]
}

fn right_wingman(session: &mut GameSession, projectile: Projectile) -> Vec<Projectile> {
    session.register_wingman(Side::Right);
    vec![projectile]
}

// ── Composition ───────────────────────────────────────────────────────────────

/// Fold `seed` through `equipments` in order.  Each stage consumes the whole
/// batch produced by the previous one.
pub fn apply_all(
    equipments: &[Equipment],
    session: &mut GameSession,
    seed: Projectile,
) -> Vec<Projectile> {
    let mut batch = vec![seed];
    for equipment in equipments {
        batch = batch
            .into_iter()
            .flat_map(|p| equipment.apply(session, p))
            .collect();
    }
    batch
}

/// Draw `OFFER_SIZE` distinct equipment from the pool.
pub fn draw_offer(rng: &mut impl Rng) -> Vec<Equipment> {
    POOL.choose_multiple(rng, OFFER_SIZE)
        .map(|kind| kind.equipment())
        .collect()
}
