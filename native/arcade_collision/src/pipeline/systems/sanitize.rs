//! Path: native/arcade_collision/src/pipeline/systems/sanitize.rs
//! Summary: NaN / inf を含むボディを即座に無効化する（グリッドにも判定にも流さない）

use arcade_core::body::Body;
use arcade_core::entity_params::{BossParams, EnemyParams};

use crate::pipeline::frame::Frame;
use crate::sink::EffectSink;

fn deactivate<S: EffectSink>(f: &mut Frame<'_, S>, body: &Body, what: &str) {
    log::warn!(
        "sanitize: deactivating {} {:?} with invalid geometry aabb={:?} scale={}",
        what,
        body.id,
        body.aabb,
        body.scale
    );
    f.sink.destroy(body);
    f.report.invalid_bodies += 1;
}

pub(crate) fn run<S: EffectSink>(f: &mut Frame<'_, S>) {
    let player = f.bodies.player.body;
    if player.alive && !player.has_valid_geometry() {
        f.bodies.player.body.alive = false;
        deactivate(f, &player, "player");
    }

    for i in 0..f.bodies.enemies.len() {
        let b = f.bodies.enemies.bodies[i];
        if b.alive && !b.has_valid_geometry() {
            let name = EnemyParams::get(f.bodies.enemies.kind_ids[i]).name;
            f.bodies.enemies.kill(i);
            deactivate(f, &b, name);
        }
    }

    // パーツを先に見る（本体の kill はパーツを黙って消すため）
    for p in 0..f.bodies.bosses.parts.len() {
        let b = f.bodies.bosses.parts[p];
        if b.alive && !b.has_valid_geometry() {
            f.bodies.bosses.kill_part(p);
            deactivate(f, &b, "boss part");
        }
    }
    for i in 0..f.bodies.bosses.len() {
        let b = f.bodies.bosses.bodies[i];
        if b.alive && !b.has_valid_geometry() {
            let name = BossParams::get(f.bodies.bosses.kind_ids[i]).name;
            f.bodies.bosses.kill(i);
            deactivate(f, &b, name);
        }
    }

    for i in 0..f.bodies.bullets.len() {
        let b = f.bodies.bullets.bodies[i];
        if b.alive && !(b.has_valid_geometry() && f.bodies.bullets.has_valid_motion(i)) {
            f.bodies.bullets.kill(i);
            deactivate(f, &b, "bullet");
        }
    }

    for i in 0..f.bodies.power_ups.len() {
        let b = f.bodies.power_ups.bodies[i];
        if b.alive && !b.has_valid_geometry() {
            f.bodies.power_ups.kill(i);
            deactivate(f, &b, "power-up");
        }
    }

    // 床はボディではないので sink には通知しない
    for z in 0..f.bodies.fire_zones.len() {
        if f.bodies.fire_zones.alive[z] && !f.bodies.fire_zones.is_valid(z) {
            log::warn!("sanitize: deactivating fire zone {} with invalid geometry", z);
            f.bodies.fire_zones.kill(z);
            f.report.invalid_bodies += 1;
        }
    }
}
