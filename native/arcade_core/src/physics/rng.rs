//! Path: native/arcade_core/src/physics/rng.rs
//! Summary: 決定論的 LCG 乱数ジェネレータ（クリティカル・フェーズ判定用に注入する）

/// シード付き LCG。パイプラインへ明示的に渡し、同じシードなら同じ判定列になる。
#[derive(Clone, Debug)]
pub struct SimpleRng(u64);

impl SimpleRng {
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    pub fn next_u32(&mut self) -> u32 {
        self.0 = self.0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.0 >> 33) as u32
    }

    /// [0, 1) の一様乱数
    pub fn next_f32(&mut self) -> f32 {
        // 上位 24bit だけ使い、1.0 ちょうどを返さない
        (self.next_u32() >> 8) as f32 / (1u32 << 24) as f32
    }

    /// 確率 `chance` で true。0 以下は常に false、1 以上は常に true（乱数を消費しない）
    pub fn roll(&mut self, chance: f32) -> bool {
        if !(chance > 0.0) {
            return false;
        }
        if chance >= 1.0 {
            return true;
        }
        self.next_f32() < chance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic_reproducibility() {
        let mut rng = SimpleRng::new(12345);
        let a: Vec<u32> = (0..10).map(|_| rng.next_u32()).collect();
        let mut rng2 = SimpleRng::new(12345);
        let b: Vec<u32> = (0..10).map(|_| rng2.next_u32()).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn next_f32_in_half_open_range() {
        let mut rng = SimpleRng::new(999);
        for _ in 0..1000 {
            let f = rng.next_f32();
            assert!((0.0..1.0).contains(&f));
        }
    }

    #[test]
    fn roll_extremes_are_exact() {
        let mut rng = SimpleRng::new(7);
        assert!((0..500).all(|_| rng.roll(1.0)));
        assert!((0..500).all(|_| !rng.roll(0.0)));
        assert!(!rng.roll(f32::NAN));
    }

    #[test]
    fn roll_rate_tracks_chance() {
        let mut rng = SimpleRng::new(42);
        let hits = (0..10_000).filter(|_| rng.roll(0.25)).count();
        assert!((2_000..3_000).contains(&hits), "hits = {hits}");
    }
}
