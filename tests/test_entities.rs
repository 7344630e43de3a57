use std::f32::consts::{FRAC_PI_2, PI};

use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rstest::rstest;

use volley_shooter::entities::*;
use volley_shooter::spawner::{spawn_hostile, HostileSpawner};

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

// ── Rect ──────────────────────────────────────────────────────────────────────

#[test]
fn rects_overlap_when_both_axes_intersect() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    assert!(a.overlaps(&Rect::new(5.0, 5.0, 10.0, 10.0)));
    assert!(!a.overlaps(&Rect::new(5.0, 20.0, 10.0, 10.0)));
    assert!(!a.overlaps(&Rect::new(20.0, 5.0, 10.0, 10.0)));
}

#[test]
fn touching_edges_do_not_overlap() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    assert!(!a.overlaps(&Rect::new(10.0, 0.0, 10.0, 10.0)));
    assert!(!a.overlaps(&Rect::new(0.0, 10.0, 10.0, 10.0)));
}

// ── Projectile ────────────────────────────────────────────────────────────────

#[test]
fn projectile_heading_zero_moves_straight_up() {
    let mut p = Projectile::seed(10.0, 100.0);
    p.advance();
    assert_relative_eq!(p.x, 10.0);
    assert_relative_eq!(p.y, 95.0);
}

#[rstest]
#[case(0.0)]
#[case(FRAC_PI_2)]
#[case(-FRAC_PI_2)]
#[case(PI / 6.0)]
#[case(2.5)]
fn projectile_advance_follows_heading(#[case] angle: f32) {
    let mut p = Projectile::new(50.0, 60.0, 5.0, angle, Effects::default());
    p.advance();
    assert_relative_eq!(p.x, 50.0 + 5.0 * angle.sin(), epsilon = 1e-4);
    assert_relative_eq!(p.y, 60.0 - 5.0 * angle.cos(), epsilon = 1e-4);
}

#[test]
fn projectile_offscreen_on_each_side() {
    let at = |x, y| Projectile::seed(x, y);
    // box is 5 × 10
    assert!(at(-5.5, 100.0).is_offscreen(480.0, 800.0));
    assert!(!at(-4.0, 100.0).is_offscreen(480.0, 800.0));
    assert!(at(481.0, 100.0).is_offscreen(480.0, 800.0));
    assert!(!at(479.0, 100.0).is_offscreen(480.0, 800.0));
    assert!(at(100.0, -11.0).is_offscreen(480.0, 800.0));
    assert!(!at(100.0, -9.0).is_offscreen(480.0, 800.0));
    assert!(at(100.0, 801.0).is_offscreen(480.0, 800.0));
    assert!(!at(100.0, 799.0).is_offscreen(480.0, 800.0));
}

// ── Hostiles ──────────────────────────────────────────────────────────────────

#[rstest]
#[case(HostileKind::Normal, 10, 2.0, 4.0, Shape::Square)]
#[case(HostileKind::Fast, 20, 4.0, 6.0, Shape::Circle)]
#[case(HostileKind::Strong, 30, 1.0, 2.5, Shape::Triangle)]
fn hostile_kind_table(
    #[case] kind: HostileKind,
    #[case] score: u32,
    #[case] min_speed: f32,
    #[case] max_speed: f32,
    #[case] shape: Shape,
) {
    assert_eq!(kind.score(), score);
    assert_eq!(*kind.speed_range().start(), min_speed);
    assert_eq!(*kind.speed_range().end(), max_speed);
    assert_eq!(kind.shape(), shape);
}

#[test]
fn spawned_hostiles_respect_their_kind() {
    let mut rng = seeded_rng();
    let mut seen = std::collections::HashSet::new();
    for _ in 0..300 {
        let h = spawn_hostile(480.0, &mut rng);
        assert!(h.kind.speed_range().contains(&h.speed), "{h:?}");
        assert!(h.x >= 0.0 && h.x <= 440.0);
        assert_eq!(h.y, -40.0);
        assert_eq!(h.score(), h.kind.score());
        seen.insert(h.kind);
    }
    assert_eq!(seen.len(), 3);
}

#[test]
fn hostile_moves_straight_down() {
    let mut h = Hostile::new(HostileKind::Normal, 100.0, 3.0);
    h.advance();
    assert_eq!(h.x, 100.0);
    assert_eq!(h.y, -37.0);
}

// ── Spawner ───────────────────────────────────────────────────────────────────

#[test]
fn spawner_waits_for_interval() {
    let mut spawner = HostileSpawner::new(2000, 480.0, 800.0);
    let mut rng = seeded_rng();
    spawner.update(2000, &mut rng);
    assert!(spawner.hostiles.is_empty());
    spawner.update(2001, &mut rng);
    assert_eq!(spawner.hostiles.len(), 1);
    assert_eq!(spawner.last_spawn, 2001);
    spawner.update(2500, &mut rng);
    assert_eq!(spawner.hostiles.len(), 1);
}

#[test]
fn spawner_spawns_once_per_call_regardless_of_gap() {
    let mut spawner = HostileSpawner::new(2000, 480.0, 800.0);
    let mut rng = seeded_rng();
    spawner.update(100_000, &mut rng);
    assert_eq!(spawner.hostiles.len(), 1);
}

#[test]
fn spawned_hostile_advances_in_the_same_update() {
    let mut spawner = HostileSpawner::new(2000, 480.0, 800.0);
    spawner.update(2001, &mut seeded_rng());
    let h = &spawner.hostiles[0];
    assert_relative_eq!(h.y, -40.0 + h.speed);
}

#[test]
fn spawner_drops_hostiles_past_bottom() {
    let mut spawner = HostileSpawner::new(2000, 480.0, 800.0);
    let mut leaving = Hostile::new(HostileKind::Normal, 10.0, 2.0);
    leaving.y = 799.0;
    let mut staying = Hostile::new(HostileKind::Normal, 100.0, 2.0);
    staying.y = 798.0;
    spawner.hostiles.push(leaving);
    spawner.hostiles.push(staying);

    spawner.update(10, &mut seeded_rng());
    assert_eq!(spawner.hostiles.len(), 1);
    assert_eq!(spawner.hostiles[0].x, 100.0);
    assert_eq!(spawner.hostiles[0].y, 800.0);
}

// ── Wingman ───────────────────────────────────────────────────────────────────

#[test]
fn wingman_snaps_beside_player() {
    let mut left = Wingman::new(Side::Left, 1000);
    let mut right = Wingman::new(Side::Right, 1000);
    left.update(100.0, 600.0);
    right.update(100.0, 600.0);
    assert_eq!((left.x, left.y), (60.0, 620.0));
    assert_eq!((right.x, right.y), (140.0, 620.0));
}

#[test]
fn wingman_fires_on_its_own_cadence() {
    let mut w = Wingman::new(Side::Left, 1000);
    assert!(w.try_fire(1000).is_none());
    let shot = w.try_fire(1001).expect("interval elapsed");
    assert!(shot.effects.aoe);
    assert!(!shot.effects.homing);
    assert!(w.try_fire(1500).is_none());
    assert!(w.try_fire(2002).is_some());
}

#[test]
fn right_wingman_fires_homing_shots() {
    let mut w = Wingman::new(Side::Right, 1000);
    w.update(200.0, 600.0);
    let shot = w.try_fire(5000).expect("interval elapsed");
    assert!(shot.effects.homing);
    assert!(!shot.effects.aoe);
    assert_eq!((shot.x, shot.y), (240.0, 620.0));
}

// ── Player ────────────────────────────────────────────────────────────────────

#[test]
fn player_nose_is_top_centre() {
    let p = Player { x: 100.0, y: 500.0 };
    assert_eq!(p.nose(), (117.5, 500.0));
}
