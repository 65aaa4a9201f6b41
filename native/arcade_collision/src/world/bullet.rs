//! Path: native/arcade_collision/src/world/bullet.rs
//! Summary: 弾丸 SoA（BulletWorld）。所有側・残り貫通数・命中済み集合を持つ

use arcade_core::body::{Aabb, Body, BodyId, BodyKind};

use super::HitSet;

/// 弾丸をどちらの陣営が撃ったか（リフレクトでプレイヤー側に移る）
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BulletOwner {
    Player,
    Enemy,
}

/// 弾丸 SoA（Structure of Arrays）
#[derive(Default)]
pub struct BulletWorld {
    pub bodies:       Vec<Body>,
    pub velocities_x: Vec<f32>,
    pub velocities_y: Vec<f32>,
    pub damage:       Vec<u32>,
    pub owner:        Vec<BulletOwner>,
    /// 最初の命中時に ModifierSet の貫通数で初期化される（None = まだ当たっていない）
    pub pierce_left:  Vec<Option<u8>>,
    /// 既に命中した防御側 ID（同じ相手には二度当たらない）
    pub hits:         Vec<HitSet>,
    pub count:        usize,
    /// 空きスロットのインデックススタック（O(1) でスロットを取得・返却）
    free_list:        Vec<usize>,
}

impl BulletWorld {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn spawn(
        &mut self,
        id: BodyId,
        aabb: Aabb,
        vx: f32,
        vy: f32,
        damage: u32,
        owner: BulletOwner,
    ) -> usize {
        let body = Body::new(id, BodyKind::Bullet, aabb);
        let i = if let Some(i) = self.free_list.pop() {
            // 再利用スロットは命中履歴をリセットする
            self.bodies[i]       = body;
            self.velocities_x[i] = vx;
            self.velocities_y[i] = vy;
            self.damage[i]       = damage;
            self.owner[i]        = owner;
            self.pierce_left[i]  = None;
            self.hits[i].clear();
            i
        } else {
            self.bodies.push(body);
            self.velocities_x.push(vx);
            self.velocities_y.push(vy);
            self.damage.push(damage);
            self.owner.push(owner);
            self.pierce_left.push(None);
            self.hits.push(HitSet::new());
            self.bodies.len() - 1
        };
        self.count += 1;
        i
    }

    pub fn kill(&mut self, i: usize) -> bool {
        match self.bodies.get_mut(i) {
            Some(b) if b.alive => {
                b.alive = false;
                self.hits[i].clear();
                self.pierce_left[i] = None;
                self.count = self.count.saturating_sub(1);
                self.free_list.push(i);
                true
            }
            _ => false,
        }
    }

    pub fn has_valid_motion(&self, i: usize) -> bool {
        self.velocities_x[i].is_finite() && self.velocities_y[i].is_finite()
    }
}
