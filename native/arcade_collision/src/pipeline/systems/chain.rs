//! Path: native/arcade_collision/src/pipeline/systems/chain.rs
//! Summary: チェーンライトニング（直撃点から最近接の未命中防御側へ連鎖）

use arcade_core::constants::LIGHTNING_PARTICLES;

use super::{damage, targeting};
use crate::pipeline::frame::Frame;
use crate::sink::{EffectSink, ParticleKind};
use crate::world::DefenderRef;

/// `first` への直撃（`hit_damage`）を起点に最大 `chain_lightning_targets` 回跳ぶ
pub(crate) fn run<S: EffectSink>(f: &mut Frame<'_, S>, first: DefenderRef, hit_damage: u32) {
    let hops = f.mods.effective_chain_targets();
    if hops == 0 {
        return;
    }
    let amount = damage::ceil_damage(hit_damage as f32 * f.config.chain_damage_fraction);
    let radius = f.config.chain_radius;

    f.scratch.chain.clear();
    f.scratch.chain.push(first);
    let (mut x, mut y) = f.bodies.defender(first).center();

    for _ in 0..hops {
        let grid = if f.defenders_indexed() { Some(&mut *f.defender_grid) } else { None };
        let next = targeting::nearest_defender(
            f.bodies,
            grid,
            &mut f.scratch.nearby,
            x,
            y,
            radius,
            &f.scratch.chain,
        );
        let Some(next) = next else {
            break;
        };
        f.scratch.chain.push(next);
        let (nx, ny) = f.bodies.defender(next).center();
        f.sink.spawn_particles(nx, ny, ParticleKind::Lightning, LIGHTNING_PARTICLES);
        damage::apply(f, next, amount);
        f.report.chain_hops += 1;
        x = nx;
        y = ny;
    }
}
