//! Path: native/arcade_collision/src/pipeline/systems/player_bullets.rs
//! Summary: プレイヤー弾 vs 防御側（円-円判定・クリティカル・爆発弾・チェーン・貫通）

use arcade_core::body::circles_overlap;
use arcade_core::constants::{CRIT_PARTICLES, HIT_PARTICLES};
use arcade_core::config::IndexedSide;

use super::{area, chain, damage};
use crate::pipeline::frame::Frame;
use crate::sink::{EffectSink, ParticleKind};
use crate::world::{BulletOwner, DefenderRef};

fn is_live_player_bullet<S: EffectSink>(f: &Frame<'_, S>, bi: usize) -> bool {
    let bullets = &f.bodies.bullets;
    bullets.bodies[bi].alive && bullets.owner[bi] == BulletOwner::Player && bullets.damage[bi] > 0
}

pub(crate) fn run<S: EffectSink>(f: &mut Frame<'_, S>) {
    match f.config.indexed_side {
        IndexedSide::Defenders => bullets_query_defenders(f),
        IndexedSide::Attackers => defenders_query_bullets(f),
    }
}

/// 弾丸ごとに防御側グリッドをクエリする
fn bullets_query_defenders<S: EffectSink>(f: &mut Frame<'_, S>) {
    let margin = f.config.bullet_query_margin;
    for bi in 0..f.bodies.bullets.len() {
        if !is_live_player_bullet(f, bi) {
            continue;
        }
        let q = f.bodies.bullets.bodies[bi].aabb.expanded(margin);
        f.defender_grid.query_into(q.x, q.y, q.w, q.h, &mut f.scratch.candidates);
        for k in 0..f.scratch.candidates.len() {
            let r = f.scratch.candidates[k];
            if strike(f, bi, r) {
                break;
            }
        }
    }
}

/// 防御側ごとに弾丸グリッドをクエリする（弾丸の AABB は登録時にマージン済み）
fn defenders_query_bullets<S: EffectSink>(f: &mut Frame<'_, S>) {
    for r in f.bodies.defender_refs() {
        let body = *f.bodies.defender(r);
        if !body.alive {
            continue;
        }
        let a = body.aabb;
        f.bullet_grid.query_into(a.x, a.y, a.w, a.h, &mut f.scratch.bullet_candidates);
        for k in 0..f.scratch.bullet_candidates.len() {
            let bi = f.scratch.bullet_candidates[k] as usize;
            if !is_live_player_bullet(f, bi) {
                continue;
            }
            strike(f, bi, r);
            if !f.bodies.is_defender_alive(r) {
                break;
            }
        }
    }
}

/// 弾丸 `bi` と候補 `candidate` の 1 回分の判定。弾丸が消えたら true。
fn strike<S: EffectSink>(f: &mut Frame<'_, S>, bi: usize, candidate: DefenderRef) -> bool {
    let bullet = f.bodies.bullets.bodies[bi];
    if !bullet.alive {
        return true;
    }
    let cand_body = *f.bodies.defender(candidate);
    if !cand_body.alive || !circles_overlap(&bullet, &cand_body) {
        return false;
    }

    // ボス本体は弾の中心直下のパーツに解決する
    let (bx, by) = bullet.center();
    let target_ref = f.bodies.resolve_boss_target(candidate, bx, by);
    let target = *f.bodies.defender(target_ref);
    if !target.alive || f.bodies.bullets.hits[bi].contains(target.id) {
        return false;
    }

    let (tx, ty) = target.center();
    let mut dmg = f.bodies.bullets.damage[bi] as f32 * f.mods.effective_damage_multiplier();
    if f.rng.roll(f.mods.crit_chance) {
        dmg = damage::ceil_damage(dmg * f.mods.effective_crit_multiplier()) as f32;
        f.sink.spawn_particles(tx, ty, ParticleKind::Crit, CRIT_PARTICLES);
        f.report.crits += 1;
    }
    let amount = damage::ceil_damage(dmg);

    if !damage::apply(f, target_ref, amount) {
        f.sink.spawn_particles(tx, ty, ParticleKind::Hit, HIT_PARTICLES);
    }

    if f.mods.explosive_rounds {
        let radius = f.config.explosive_radius;
        let splash = damage::ceil_damage(amount as f32 * f.config.explosive_damage_fraction);
        f.sink.spawn_explosion(tx, ty, radius);
        area::apply(f, tx, ty, radius, splash);
    }

    chain::run(f, target_ref, amount);

    // 貫通数は最初の命中で確定する
    let pierce = f.mods.effective_pierce();
    let left = *f.bodies.bullets.pierce_left[bi].get_or_insert(pierce);
    if left == 0 {
        f.bodies.bullets.kill(bi);
        f.sink.destroy(&bullet);
        f.report.bullets_spent += 1;
        return true;
    }
    f.bodies.bullets.pierce_left[bi] = Some(left - 1);
    f.bodies.bullets.hits[bi].insert(target.id);
    false
}
