//! Path: native/arcade_collision/src/pipeline/systems/fire_zones.rs
//! Summary: 継続ダメージ床の寿命減衰と定期ダメージ

use super::area;
use crate::pipeline::frame::Frame;
use crate::sink::EffectSink;

/// 1 フレームに入るティックは最大 1 回
pub(crate) fn run<S: EffectSink>(f: &mut Frame<'_, S>) {
    let dt = f.dt;
    for z in 0..f.bodies.fire_zones.len() {
        if !f.bodies.fire_zones.alive[z] {
            continue;
        }
        let zones = &mut f.bodies.fire_zones;
        zones.lifetime[z] -= dt;
        zones.tick_timer[z] -= dt;
        if zones.tick_timer[z] <= 0.0 {
            zones.tick_timer[z] = zones.tick_interval[z];
            let (x, y, radius, damage) =
                (zones.positions_x[z], zones.positions_y[z], zones.radius[z], zones.damage[z]);
            area::apply(f, x, y, radius, damage);
        }
        if f.bodies.fire_zones.lifetime[z] <= 0.0 {
            f.bodies.fire_zones.kill(z);
        }
    }
}
