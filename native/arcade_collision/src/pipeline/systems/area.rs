//! Path: native/arcade_collision/src/pipeline/systems/area.rs
//! Summary: 範囲ダメージ（爆発弾・ボム・ファイアゾーン共通）

use arcade_core::body::dist_sq;

use super::damage;
use crate::pipeline::frame::Frame;
use crate::sink::EffectSink;

/// 中心から `radius` 以内（境界を含む）の生存防御側すべてに `amount` を与える。
/// 範囲が小さく呼び出しも稀なのでグリッドは使わず全走査する。命中数を返す。
pub(crate) fn apply<S: EffectSink>(
    f: &mut Frame<'_, S>,
    x: f32,
    y: f32,
    radius: f32,
    amount: u32,
) -> u32 {
    if !(radius.is_finite() && radius >= 0.0) {
        return 0;
    }
    let r_sq = radius * radius;
    let mut hits = 0;
    for r in f.bodies.defender_refs() {
        let body = f.bodies.defender(r);
        if !body.alive {
            continue;
        }
        let (cx, cy) = body.center();
        if dist_sq(x, y, cx, cy) <= r_sq {
            damage::apply(f, r, amount);
            hits += 1;
        }
    }
    f.report.aoe_hits += hits;
    hits
}
