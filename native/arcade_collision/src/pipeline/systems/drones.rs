//! Path: native/arcade_collision/src/pipeline/systems/drones.rs
//! Summary: 周回ドローン（個別クールダウン・最近接防御側へミサイルを要求）

use std::f32::consts::TAU;

use super::targeting;
use crate::pipeline::frame::Frame;
use crate::sink::{DroneMissile, EffectSink};

/// ドローン数が変わったらクールダウンを `cooldown * i / n` でずらして振り直す
fn restagger(cooldowns: &mut Vec<f32>, n: usize, cooldown: f32) {
    cooldowns.clear();
    cooldowns.extend((0..n).map(|i| cooldown * i as f32 / n as f32));
}

pub(crate) fn run<S: EffectSink>(f: &mut Frame<'_, S>, cooldowns: &mut Vec<f32>) {
    let n = f.mods.effective_drone_count();
    if n != cooldowns.len() {
        restagger(cooldowns, n, f.config.drone_cooldown);
    }
    let player = f.bodies.player.body;
    if n == 0 || !player.alive {
        return;
    }
    let (px, py) = player.center();
    let orbit = f.config.drone_orbit_radius;
    let range = f.config.drone_range;
    let speed = f.config.drone_missile_speed;

    for (i, cd) in cooldowns.iter_mut().enumerate() {
        *cd = (*cd - f.dt).max(0.0);
        if *cd > 0.0 {
            continue;
        }
        let angle = TAU * i as f32 / n as f32;
        let ox = px + angle.cos() * orbit;
        let oy = py + angle.sin() * orbit;

        let grid = if f.defenders_indexed() { Some(&mut *f.defender_grid) } else { None };
        // 標的がいなければ待機のまま（次フレームで再探索）
        let Some(t) =
            targeting::nearest_defender(f.bodies, grid, &mut f.scratch.nearby, ox, oy, range, &[])
        else {
            continue;
        };
        let target = f.bodies.defender(t);
        let (tx, ty) = target.center();
        let (dx, dy) = (tx - ox, ty - oy);
        let len = (dx * dx + dy * dy).sqrt();
        let (vx, vy) = if len > 0.001 { (dx / len * speed, dy / len * speed) } else { (0.0, -speed) };

        f.sink.spawn_drone_missile(DroneMissile {
            slot: i as u8,
            x: ox,
            y: oy,
            vx,
            vy,
            target: target.id,
            damage: f.config.drone_damage,
        });
        *cd = f.config.drone_cooldown;
        f.report.drone_shots += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cooldowns_are_staggered_evenly() {
        let mut cds = Vec::new();
        restagger(&mut cds, 4, 1.2);
        assert_eq!(cds.len(), 4);
        assert_eq!(cds[0], 0.0);
        assert!((cds[1] - 0.3).abs() < 1e-6);
        assert!((cds[3] - 0.9).abs() < 1e-6);
    }
}
