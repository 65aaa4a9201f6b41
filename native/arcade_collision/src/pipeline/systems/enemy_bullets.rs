//! Path: native/arcade_collision/src/pipeline/systems/enemy_bullets.rs
//! Summary: 敵弾 vs プレイヤー（リフレクト → 円-円判定 → フェーズ → 被弾）

use arcade_core::body::{circles_overlap_prechecked, dist_sq};
use arcade_core::constants::REFLECT_PARTICLES;

use super::damage;
use crate::pipeline::frame::Frame;
use crate::sink::{EffectSink, ParticleKind};
use crate::world::BulletOwner;

pub(crate) fn run<S: EffectSink>(f: &mut Frame<'_, S>) {
    let player = f.bodies.player.body;
    if !player.alive {
        return;
    }
    let (px, py) = player.center();
    let reflect_r_sq = f.config.reflect_radius * f.config.reflect_radius;

    for bi in 0..f.bodies.bullets.len() {
        let bullet = f.bodies.bullets.bodies[bi];
        if !bullet.alive || f.bodies.bullets.owner[bi] != BulletOwner::Enemy {
            continue;
        }
        let (bx, by) = bullet.center();

        // リフレクト: 半径内の敵弾を反転させてプレイヤー弾にする（ダメージなし）
        if f.mods.reflect_active && dist_sq(bx, by, px, py) <= reflect_r_sq {
            let bullets = &mut f.bodies.bullets;
            bullets.velocities_x[bi] = -bullets.velocities_x[bi];
            bullets.velocities_y[bi] = -bullets.velocities_y[bi];
            bullets.owner[bi] = BulletOwner::Player;
            f.sink.spawn_particles(bx, by, ParticleKind::Reflect, REFLECT_PARTICLES);
            f.report.reflected += 1;
            continue;
        }

        if !circles_overlap_prechecked(&bullet, &player) {
            continue;
        }
        // 当たった敵弾は回避しても消える
        f.bodies.bullets.kill(bi);
        f.sink.destroy(&bullet);
        if damage::phase_dodge(f, px, py) {
            continue;
        }
        let amount = f.config.enemy_bullet_damage;
        damage::hurt_player(f, amount);
    }
}
