/// Collision & scoring pass.
///
/// Both containers are walked back to front with explicit indices so that
/// removing the current element never disturbs the elements still to visit.

use log::debug;
use rand::Rng;

use crate::config::AOE_RADIUS;
use crate::entities::{GameStatus, Hostile};
use crate::session::GameSession;

/// Resolve every projectile against every hostile for this frame.
///
/// A hit removes the hostile and scores it.  Area projectiles also clear the
/// neighbourhood at half score.  Non-piercing projectiles are consumed by
/// their first hit.
pub fn resolve_projectile_hits(session: &mut GameSession, rng: &mut impl Rng) {
    let mut i = session.projectiles.len();
    while i > 0 {
        i -= 1;
        if matches!(session.status, GameStatus::GameOver(_)) {
            return;
        }
        let projectile = session.projectiles[i].clone();
        let bounds = projectile.rect();

        let mut j = session.spawner.hostiles.len();
        while j > 0 {
            j -= 1;
            // Area damage may have shrunk the set under us.
            if j >= session.spawner.hostiles.len() {
                j = session.spawner.hostiles.len();
                continue;
            }
            if !bounds.overlaps(&session.spawner.hostiles[j].rect()) {
                continue;
            }

            let hostile = session.spawner.hostiles.remove(j);
            debug!("{:?} hostile destroyed at ({:.1}, {:.1})", hostile.kind, hostile.x, hostile.y);
            session.add_score(hostile.score(), rng);
            if matches!(session.status, GameStatus::GameOver(_)) {
                return;
            }

            if projectile.effects.aoe {
                area_damage(session, projectile.x, projectile.y, rng);
            }
            if !projectile.effects.piercing {
                session.projectiles.remove(i);
                break;
            }
        }
    }
}

/// Remove every hostile within `AOE_RADIUS` of `(x, y)`, awarding half score
/// (rounded down) for each.  Distances use raw positions, not box centres.
/// Stops as soon as the session is over.
pub fn area_damage(session: &mut GameSession, x: f32, y: f32, rng: &mut impl Rng) {
    let mut j = session.spawner.hostiles.len();
    while j > 0 {
        j -= 1;
        if matches!(session.status, GameStatus::GameOver(_)) {
            return;
        }
        if within_blast(&session.spawner.hostiles[j], x, y) {
            let hostile = session.spawner.hostiles.remove(j);
            debug!("{:?} hostile caught in blast", hostile.kind);
            session.add_score(hostile.score() / 2, rng);
        }
    }
}

fn within_blast(hostile: &Hostile, x: f32, y: f32) -> bool {
    (hostile.x - x).hypot(hostile.y - y) <= AOE_RADIUS
}

/// True if any live hostile overlaps the player.
pub fn player_hit(session: &GameSession) -> bool {
    let player = session.player.rect();
    session
        .spawner
        .hostiles
        .iter()
        .any(|h| h.rect().overlaps(&player))
}
