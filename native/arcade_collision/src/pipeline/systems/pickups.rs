//! Path: native/arcade_collision/src/pipeline/systems/pickups.rs
//! Summary: パワーアップ（磁石による吸い寄せ + 収集 + 種類ごとの効果）

use arcade_core::body::{circles_overlap, dist_sq};
use arcade_core::constants::PICKUP_PARTICLES;
use arcade_core::power_up::PowerUpKind;

use super::area;
use crate::pipeline::frame::Frame;
use crate::sink::{EffectSink, ParticleKind};

pub(crate) fn run<S: EffectSink>(f: &mut Frame<'_, S>) {
    let player = f.bodies.player.body;
    if !player.alive {
        return;
    }
    let (px, py) = player.center();
    let magnet = f.mods.magnet_active();
    let range_sq = f.mods.magnet_range * f.mods.magnet_range;
    let step = f.config.magnet_pull_speed * f.dt;

    for i in 0..f.bodies.power_ups.len() {
        if !f.bodies.power_ups.bodies[i].alive {
            continue;
        }

        // 磁石: 範囲内ならプレイヤーへ近づける（行き過ぎない）
        if magnet {
            let (cx, cy) = f.bodies.power_ups.bodies[i].center();
            let d_sq = dist_sq(px, py, cx, cy);
            if d_sq <= range_sq && d_sq > 0.0 {
                let dist = d_sq.sqrt();
                let move_by = step.min(dist);
                let dx = (px - cx) / dist * move_by;
                let dy = (py - cy) / dist * move_by;
                f.bodies.power_ups.bodies[i].aabb.translate(dx, dy);
            }
        }

        let body = f.bodies.power_ups.bodies[i];
        if !circles_overlap(&body, &player) {
            continue;
        }
        let kind = f.bodies.power_ups.kinds[i];
        let value = f.bodies.power_ups.value[i];
        match kind {
            PowerUpKind::Health => f.sink.heal_player(value),
            PowerUpKind::Charge => f.sink.on_charge(value as f32),
            PowerUpKind::Bomb => {
                let radius = f.config.bomb_radius;
                f.sink.spawn_explosion(px, py, radius);
                area::apply(f, px, py, radius, value);
            }
            PowerUpKind::Score => f.sink.add_score(value),
            PowerUpKind::Perk => f.sink.grant_perk(value),
        }

        f.bodies.power_ups.kill(i);
        f.sink.destroy(&body);
        let (cx, cy) = body.center();
        f.sink.spawn_particles(cx, cy, ParticleKind::Pickup, PICKUP_PARTICLES);
        f.sink.on_pickup(kind);
        f.report.pickups += 1;
    }
}
