//! Path: native/arcade_collision/src/pipeline/systems/rebuild.rs
//! Summary: 毎フレームのグリッド再構築（生存ボディのみ・登録側は IndexedSide で選ぶ）

use arcade_core::config::IndexedSide;

use crate::pipeline::frame::Frame;
use crate::sink::EffectSink;
use crate::world::BulletOwner;

pub(crate) fn run<S: EffectSink>(f: &mut Frame<'_, S>) {
    f.defender_grid.clear();
    f.bullet_grid.clear();

    match f.config.indexed_side {
        IndexedSide::Defenders => {
            for r in f.bodies.defender_refs() {
                let body = f.bodies.defender(r);
                if body.alive {
                    f.defender_grid.insert(r, body.aabb);
                }
            }
        }
        IndexedSide::Attackers => {
            // クエリ側ではなく登録側でマージンを足す（判定ペアは Defenders モードと同じ）
            let margin = f.config.bullet_query_margin;
            let bullets = &f.bodies.bullets;
            for i in 0..bullets.len() {
                let b = &bullets.bodies[i];
                if b.alive && bullets.owner[i] == BulletOwner::Player && bullets.damage[i] > 0 {
                    f.bullet_grid.insert(i as u32, b.aabb.expanded(margin));
                }
            }
        }
    }
}
