//! Path: native/arcade_collision/src/world/hit_set.rs
//! Summary: 弾丸ごとの命中済み ID 集合（固定容量・ヒープ確保なし）

use arcade_core::body::BodyId;
use arcade_core::constants::HIT_SET_CAPACITY;

/// 貫通数は MAX_PIERCE でクランプされるので、容量 MAX_PIERCE + 1 で溢れない。
/// 要素数が小さいため線形探索で十分。
#[derive(Clone, Copy, Debug)]
pub struct HitSet {
    ids: [BodyId; HIT_SET_CAPACITY],
    len: u8,
}

impl Default for HitSet {
    fn default() -> Self {
        Self { ids: [BodyId::default(); HIT_SET_CAPACITY], len: 0 }
    }
}

impl HitSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len() == HIT_SET_CAPACITY
    }

    pub fn contains(&self, id: BodyId) -> bool {
        self.as_slice().contains(&id)
    }

    /// 追加できたら true。既に含まれている・満杯なら false
    pub fn insert(&mut self, id: BodyId) -> bool {
        if self.contains(id) || self.is_full() {
            return false;
        }
        self.ids[self.len()] = id;
        self.len += 1;
        true
    }

    pub fn clear(&mut self) {
        self.len = 0;
    }

    pub fn as_slice(&self) -> &[BodyId] {
        &self.ids[..self.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_is_idempotent_and_bounded() {
        let mut set = HitSet::new();
        assert!(set.insert(BodyId(5)));
        assert!(!set.insert(BodyId(5)));
        for i in 0..(HIT_SET_CAPACITY as u32 + 4) {
            set.insert(BodyId(100 + i));
        }
        assert!(set.is_full());
        assert_eq!(set.len(), HIT_SET_CAPACITY);
        assert!(set.contains(BodyId(5)));
        set.clear();
        assert!(set.is_empty());
        assert!(!set.contains(BodyId(5)));
    }
}
