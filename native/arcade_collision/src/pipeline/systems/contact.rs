//! Path: native/arcade_collision/src/pipeline/systems/contact.rs
//! Summary: 敵・ボス本体とプレイヤーの接触（トゲ反射 / フェーズ / 接触ダメージ）

use arcade_core::body::circles_overlap_prechecked;
use arcade_core::constants::THORNS_PARTICLES;
use arcade_core::entity_params::{BossParams, EnemyParams};

use super::damage;
use crate::pipeline::frame::Frame;
use crate::sink::{EffectSink, ParticleKind};
use crate::world::DefenderRef;

pub(crate) fn run<S: EffectSink>(f: &mut Frame<'_, S>) {
    if !f.bodies.player.body.alive {
        return;
    }
    for i in 0..f.bodies.enemies.len() {
        let contact = EnemyParams::get(f.bodies.enemies.kind_ids[i]).contact_damage;
        touch(f, DefenderRef::Enemy(i as u32), contact);
    }
    for i in 0..f.bodies.bosses.len() {
        let contact = BossParams::get(f.bodies.bosses.kind_ids[i]).contact_damage;
        touch(f, DefenderRef::Boss(i as u32), contact);
    }
}

fn touch<S: EffectSink>(f: &mut Frame<'_, S>, r: DefenderRef, contact_damage: u32) {
    let player = f.bodies.player.body;
    let body = *f.bodies.defender(r);
    if !player.alive || !body.alive || !circles_overlap_prechecked(&body, &player) {
        return;
    }

    // トゲ: プレイヤーは無傷、触れた側にダメージ（フェーズ判定なし）
    if f.mods.thorns {
        let (ex, ey) = body.center();
        f.sink.spawn_particles(ex, ey, ParticleKind::Thorns, THORNS_PARTICLES);
        f.report.thorns_procs += 1;
        let amount = f.config.thorns_damage;
        damage::apply(f, r, amount);
        return;
    }

    let (px, py) = player.center();
    if damage::phase_dodge(f, px, py) {
        return;
    }
    damage::hurt_player(f, contact_damage);
}
