//! Path: native/arcade_collision/src/pipeline/systems/fire_trail.rs
//! Summary: ファイアトレイル（一定間隔でプレイヤー後方に床の生成を要求）

use crate::pipeline::frame::Frame;
use crate::sink::{EffectSink, FireZoneSpawn};

pub(crate) fn run<S: EffectSink>(f: &mut Frame<'_, S>, timer: &mut f32) {
    let Some(params) = f.mods.fire_trail else {
        *timer = 0.0;
        return;
    };
    let player = &f.bodies.player;
    if !player.body.alive || !(params.interval.is_finite() && params.interval > 0.0) {
        return;
    }

    *timer += f.dt;
    if *timer < params.interval {
        return;
    }
    // 大きな dt でも 1 フレームに置くのは 1 枚まで
    *timer = (*timer - params.interval).min(params.interval);

    let (mut x, mut y) = player.body.center();
    let (vx, vy) = (player.velocity_x, player.velocity_y);
    let speed = (vx * vx + vy * vy).sqrt();
    if speed.is_finite() && speed > 0.001 {
        // 進行方向の反対側に半径分ずらす
        x -= vx / speed * params.radius;
        y -= vy / speed * params.radius;
    }

    f.sink.spawn_fire_zone(FireZoneSpawn {
        x,
        y,
        radius: params.radius,
        damage: params.damage,
        tick_interval: params.tick_interval,
        lifetime: params.lifetime,
    });
    f.report.fire_zones_spawned += 1;
}
