//! Path: native/arcade_collision/src/world/boss.rs
//! Summary: ボス SoA（BossWorld）。本体とパーツを別アリーナで持つ

use arcade_core::body::{Aabb, Body, BodyId, BodyKind};

/// ボス本体とパーツ。パーツは個別に被弾・破壊でき、本体の撃破とは別イベントになる。
#[derive(Clone, Default)]
pub struct BossWorld {
    pub bodies:     Vec<Body>,
    /// `BossParams` の ID
    pub kind_ids:   Vec<u8>,
    pub count:      usize,
    free_list:      Vec<usize>,
    pub parts:      Vec<Body>,
    /// パーツの持ち主（`bodies` のインデックス）
    pub part_owner: Vec<usize>,
    part_free_list: Vec<usize>,
}

impl BossWorld {
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
        let body = Body::new(id, BodyKind::Boss, aabb);
        let i = if let Some(i) = self.free_list.pop() {
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

    pub fn spawn_part(&mut self, owner: usize, id: BodyId, aabb: Aabb) -> usize {
        let body = Body::new(id, BodyKind::BossPart, aabb);
        if let Some(i) = self.part_free_list.pop() {
            self.parts[i]      = body;
            self.part_owner[i] = owner;
            i
        } else {
            self.parts.push(body);
            self.part_owner.push(owner);
            self.parts.len() - 1
        }
    }

    /// ボス本体を撃破する。残っているパーツも一緒に消える（パーツ破壊イベントは出さない）。
    pub fn kill(&mut self, i: usize) -> bool {
        match self.bodies.get_mut(i) {
            Some(b) if b.alive => {
                b.alive = false;
                self.count = self.count.saturating_sub(1);
                self.free_list.push(i);
            }
            _ => return false,
        }
        for p in 0..self.parts.len() {
            if self.part_owner[p] == i {
                self.kill_part(p);
            }
        }
        true
    }

    pub fn kill_part(&mut self, p: usize) -> bool {
        match self.parts.get_mut(p) {
            Some(b) if b.alive => {
                b.alive = false;
                self.part_free_list.push(p);
                true
            }
            _ => false,
        }
    }

    /// 点 (x, y) を含む生存パーツ（ボス `i` のもの）
    pub fn part_at(&self, i: usize, x: f32, y: f32) -> Option<usize> {
        (0..self.parts.len()).find(|&p| {
            self.part_owner[p] == i && self.parts[p].alive && self.parts[p].aabb.contains_point(x, y)
        })
    }

    pub fn live_parts_of(&self, i: usize) -> usize {
        (0..self.parts.len())
            .filter(|&p| self.part_owner[p] == i && self.parts[p].alive)
            .count()
    }
}
