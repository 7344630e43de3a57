use std::collections::HashSet;
use std::f32::consts::PI;

use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

use volley_shooter::config::GameConfig;
use volley_shooter::entities::{Effects, Projectile, Side};
use volley_shooter::equipment::*;
use volley_shooter::session::GameSession;

fn make_session() -> GameSession {
    GameSession::new(GameConfig::default())
}

fn shot() -> Projectile {
    Projectile::new(100.0, 200.0, 5.0, 0.2, Effects::default())
}

// ── Individual transforms ─────────────────────────────────────────────────────

#[test]
fn split_arrow_fans_into_three() {
    let mut session = make_session();
    let mut input = shot();
    input.effects.electric = true;

    let out = EquipmentKind::SplitArrow.equipment().apply(&mut session, input);
    assert_eq!(out.len(), 3);
    let offsets = [-PI / 6.0, 0.0, PI / 6.0];
    for (p, offset) in out.iter().zip(offsets) {
        assert_relative_eq!(p.angle, 0.2 + offset, epsilon = 1e-6);
        assert_eq!((p.x, p.y, p.speed), (100.0, 200.0, 5.0));
        assert!(p.effects.split);
        assert!(p.effects.electric, "inherited tags survive the split");
    }
}

#[test]
fn electric_knife_tags_without_changing_count() {
    let mut session = make_session();
    let out = EquipmentKind::ElectricKnife.equipment().apply(&mut session, shot());
    assert_eq!(out.len(), 1);
    assert!(out[0].effects.electric);
    assert_eq!(out[0].angle, 0.2);
    assert!(!out[0].effects.split);
}

#[test]
fn piercing_lance_tags_piercing() {
    let mut session = make_session();
    let out = EquipmentKind::PiercingLance.equipment().apply(&mut session, shot());
    assert_eq!(out.len(), 1);
    assert!(out[0].effects.piercing);
}

#[test]
fn wingman_equipment_registers_once_per_side() {
    let mut session = make_session();
    let left = EquipmentKind::LeftWingman.equipment();

    let out = left.apply(&mut session, shot());
    assert_eq!(out, vec![shot()]);
    left.apply(&mut session, shot());
    assert_eq!(session.wingmen.len(), 1);
    assert_eq!(session.wingmen[0].side, Side::Left);

    EquipmentKind::RightWingman.equipment().apply(&mut session, shot());
    assert_eq!(session.wingmen.len(), 2);
}

#[test]
fn only_wingmen_claim_a_side() {
    assert_eq!(EquipmentKind::LeftWingman.support_side(), Some(Side::Left));
    assert_eq!(EquipmentKind::RightWingman.support_side(), Some(Side::Right));
    assert_eq!(EquipmentKind::SplitArrow.support_side(), None);
    assert_eq!(EquipmentKind::ElectricKnife.support_side(), None);
    assert_eq!(EquipmentKind::PiercingLance.support_side(), None);
}

// ── Composition ───────────────────────────────────────────────────────────────

#[test]
fn empty_chain_passes_seed_through() {
    let mut session = make_session();
    let out = apply_all(&[], &mut session, shot());
    assert_eq!(out, vec![shot()]);
}

#[test]
fn split_fans_out_an_earlier_tag() {
    let mut session = make_session();
    let chain = [
        EquipmentKind::ElectricKnife.equipment(),
        EquipmentKind::SplitArrow.equipment(),
    ];
    let out = apply_all(&chain, &mut session, shot());
    assert_eq!(out.len(), 3);
    assert!(out.iter().all(|p| p.effects.electric && p.effects.split));
}

#[test]
fn each_stage_consumes_the_whole_batch() {
    let mut session = make_session();
    let chain = [
        EquipmentKind::SplitArrow.equipment(),
        EquipmentKind::SplitArrow.equipment(),
        EquipmentKind::PiercingLance.equipment(),
    ];
    let out = apply_all(&chain, &mut session, shot());
    assert_eq!(out.len(), 9);
    assert!(out.iter().all(|p| p.effects.piercing));
    // Double split covers -60° .. +60° around the seed heading.
    let min = out.iter().map(|p| p.angle).fold(f32::INFINITY, f32::min);
    let max = out.iter().map(|p| p.angle).fold(f32::NEG_INFINITY, f32::max);
    assert_relative_eq!(min, 0.2 - PI / 3.0, epsilon = 1e-5);
    assert_relative_eq!(max, 0.2 + PI / 3.0, epsilon = 1e-5);
}

// ── Offers ────────────────────────────────────────────────────────────────────

#[test]
fn offer_draws_two_distinct_from_pool() {
    for seed in 0..50 {
        let offer = draw_offer(&mut StdRng::seed_from_u64(seed));
        assert_eq!(offer.len(), 2);
        assert_ne!(offer[0].kind, offer[1].kind);
        assert!(offer.iter().all(|e| POOL.contains(&e.kind)));
    }
}

#[test]
fn offers_eventually_cover_the_pool() {
    let mut rng = StdRng::seed_from_u64(7);
    let seen: HashSet<_> = (0..100)
        .flat_map(|_| draw_offer(&mut rng))
        .map(|e| e.kind)
        .collect();
    assert_eq!(seen.len(), POOL.len());
}

#[test]
fn equipment_equality_is_by_kind() {
    assert_eq!(
        EquipmentKind::SplitArrow.equipment(),
        EquipmentKind::SplitArrow.equipment()
    );
    assert_ne!(
        EquipmentKind::SplitArrow.equipment(),
        EquipmentKind::ElectricKnife.equipment()
    );
    assert_eq!(EquipmentKind::SplitArrow.equipment().name, "Split Arrow");
}
