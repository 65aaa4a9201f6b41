//! Path: native/arcade_collision/src/pipeline/systems/damage.rs
//! Summary: ダメージ適用と撃破ルーティング（防御側: 直撃・範囲・チェーン・トゲ / プレイヤー: 被弾・接触）

use arcade_core::constants::{DODGE_PARTICLES, PART_EXPLOSION_SIZE};
use arcade_core::entity_params::{BossParams, EnemyParams};

use crate::pipeline::frame::Frame;
use crate::sink::{EffectSink, ParticleKind};
use crate::world::DefenderRef;

/// 倍率適用後のダメージを切り上げる。0.6 * 10 のような浮動小数点誤差で
/// 1 多くならないよう、整数に十分近い値はその整数にそろえる。
pub(crate) fn ceil_damage(v: f32) -> u32 {
    if !(v.is_finite() && v > 0.0) {
        return 0;
    }
    let nearest = v.round();
    if (v - nearest).abs() < 1e-3 {
        nearest as u32
    } else {
        v.ceil() as u32
    }
}

/// `r` に `amount` を与え、撃破したら true。
/// 死亡はその場でカタログに反映する（同フレームの後続判定は alive で短絡する）。
pub(crate) fn apply<S: EffectSink>(f: &mut Frame<'_, S>, r: DefenderRef, amount: u32) -> bool {
    let body = *f.bodies.defender(r);
    debug_assert!(body.kind.is_defender());
    if !body.alive || amount == 0 {
        return false;
    }
    f.report.damage_dealt += amount as u64;
    if !f.sink.damage(&body, amount) {
        return false;
    }

    f.bodies.kill_defender(r);
    let (x, y) = body.center();
    match r {
        DefenderRef::Part(_) => {
            f.sink.on_boss_part_destroyed(&body);
            f.sink.spawn_explosion(x, y, PART_EXPLOSION_SIZE);
            f.report.parts_destroyed += 1;
        }
        DefenderRef::Enemy(i) => {
            let size = EnemyParams::get(f.bodies.enemies.kind_ids[i as usize]).explosion_size;
            f.sink.on_kill(&body);
            f.sink.spawn_explosion(x, y, size);
            f.report.kills += 1;
        }
        DefenderRef::Boss(i) => {
            let size = BossParams::get(f.bodies.bosses.kind_ids[i as usize]).explosion_size;
            f.sink.on_kill(&body);
            f.sink.spawn_explosion(x, y, size);
            f.report.kills += 1;
        }
    }
    true
}

/// プレイヤーへの被弾・接触ダメージ。フェーズ判定は呼び出し側で済ませておく。
pub(crate) fn hurt_player<S: EffectSink>(f: &mut Frame<'_, S>, amount: u32) {
    f.sink.on_player_hit(amount);
    f.report.player_hits += 1;
    f.report.damage_taken = f.report.damage_taken.saturating_add(amount);
    let ratio = f.mods.damage_to_charge;
    if ratio.is_finite() && ratio > 0.0 {
        f.sink.on_charge(amount as f32 * ratio);
    }
}

/// フェーズ（回避）判定。成功したら回避パーティクルを出して true
pub(crate) fn phase_dodge<S: EffectSink>(f: &mut Frame<'_, S>, x: f32, y: f32) -> bool {
    if f.rng.roll(f.mods.phase_chance) {
        f.sink.spawn_particles(x, y, ParticleKind::Dodge, DODGE_PARTICLES);
        f.report.dodges += 1;
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ceil_damage_ignores_float_noise() {
        assert_eq!(ceil_damage(10.0 * 0.6), 6);
        assert_eq!(ceil_damage(3.0 * 0.5), 2);
        assert_eq!(ceil_damage(2.1), 3);
        assert_eq!(ceil_damage(0.0), 0);
        assert_eq!(ceil_damage(f32::NAN), 0);
    }
}
