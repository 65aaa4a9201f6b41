//! Path: native/arcade_collision/src/pipeline/systems/targeting.rs
//! Summary: 最近接の生存防御側の探索（グリッドがあれば候補を絞り、なければ全走査）

use arcade_core::body::dist_sq;
use arcade_core::physics::spatial_grid::SpatialGrid;

use crate::world::{BodyCatalog, DefenderRef};

/// (x, y) から `radius` 以内（境界含む）で最も近い生存防御側。`exclude` は除外。
/// `grid` が None のときは全防御側を走査する。
pub(crate) fn nearest_defender(
    bodies: &BodyCatalog,
    grid: Option<&mut SpatialGrid<DefenderRef>>,
    buf: &mut Vec<DefenderRef>,
    x: f32,
    y: f32,
    radius: f32,
    exclude: &[DefenderRef],
) -> Option<DefenderRef> {
    let r_sq = radius * radius;
    let pick = |best: Option<(DefenderRef, f32)>, r: DefenderRef| {
        let body = bodies.defender(r);
        if !body.alive || exclude.contains(&r) {
            return best;
        }
        let (cx, cy) = body.center();
        let d = dist_sq(x, y, cx, cy);
        if d > r_sq {
            return best;
        }
        match best {
            Some((_, bd)) if bd <= d => best,
            _ => Some((r, d)),
        }
    };

    let best = match grid {
        Some(grid) => {
            grid.query_into(x - radius, y - radius, radius * 2.0, radius * 2.0, buf);
            buf.iter().copied().fold(None, pick)
        }
        None => bodies.defender_refs().fold(None, pick),
    };
    best.map(|(r, _)| r)
}
