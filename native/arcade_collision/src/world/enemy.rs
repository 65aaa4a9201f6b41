//! Path: native/arcade_collision/src/world/enemy.rs
//! Summary: 敵 SoA（EnemyWorld）

use arcade_core::body::{Aabb, Body, BodyId, BodyKind};

/// 敵 SoA（Structure of Arrays）
#[derive(Clone, Default)]
pub struct EnemyWorld {
    pub bodies:   Vec<Body>,
    /// `EnemyParams` の ID
    pub kind_ids: Vec<u8>,
    pub count:    usize,
    /// 空きスロットのインデックススタック（O(1) でスロットを取得・返却）
    free_list:    Vec<usize>,
}

impl EnemyWorld {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn spawn(&mut self, id: BodyId, aabb: Aabb, kind_id: u8) -> usize {
        let body = Body::new(id, BodyKind::Enemy, aabb);
        let i = if let Some(i) = self.free_list.pop() {
            // O(1): フリーリストから再利用
            self.bodies[i]   = body;
            self.kind_ids[i] = kind_id;
            i
        } else {
            self.bodies.push(body);
            self.kind_ids.push(kind_id);
            self.bodies.len() - 1
        };
        self.count += 1;
        i
    }

    /// alive → dead の遷移は一度だけ（二度目以降は false）
    pub fn kill(&mut self, i: usize) -> bool {
        match self.bodies.get_mut(i) {
            Some(b) if b.alive => {
                b.alive = false;
                self.count = self.count.saturating_sub(1);
                self.free_list.push(i);
                true
            }
            _ => false,
        }
    }
}
