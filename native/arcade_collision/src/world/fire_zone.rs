//! Path: native/arcade_collision/src/world/fire_zone.rs
//! Summary: ファイアトレイルの継続ダメージ床（FireZoneWorld）

/// ホストが `EffectSink::spawn_fire_zone` を受けて登録する床。
/// ダメージ判定と寿命の減衰はパイプラインが毎フレーム行う。
#[derive(Default)]
pub struct FireZoneWorld {
    pub positions_x:   Vec<f32>,
    pub positions_y:   Vec<f32>,
    pub radius:        Vec<f32>,
    pub damage:        Vec<u32>,
    pub tick_interval: Vec<f32>,
    /// 次のダメージ判定までの残り時間
    pub tick_timer:    Vec<f32>,
    pub lifetime:      Vec<f32>,
    pub alive:         Vec<bool>,
    pub count:         usize,
    free_list:         Vec<usize>,
}

impl FireZoneWorld {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.positions_x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions_x.is_empty()
    }

    /// 置いた直後のフレームで一度目の判定が入る（tick_timer = 0）
    pub fn spawn(&mut self, x: f32, y: f32, radius: f32, damage: u32, tick_interval: f32, lifetime: f32) -> usize {
        let i = if let Some(i) = self.free_list.pop() {
            self.positions_x[i]   = x;
            self.positions_y[i]   = y;
            self.radius[i]        = radius;
            self.damage[i]        = damage;
            self.tick_interval[i] = tick_interval;
            self.tick_timer[i]    = 0.0;
            self.lifetime[i]      = lifetime;
            self.alive[i]         = true;
            i
        } else {
            self.positions_x.push(x);
            self.positions_y.push(y);
            self.radius.push(radius);
            self.damage.push(damage);
            self.tick_interval.push(tick_interval);
            self.tick_timer.push(0.0);
            self.lifetime.push(lifetime);
            self.alive.push(true);
            self.positions_x.len() - 1
        };
        self.count += 1;
        i
    }

    pub fn kill(&mut self, i: usize) -> bool {
        if self.alive.get(i).copied().unwrap_or(false) {
            self.alive[i] = false;
            self.count = self.count.saturating_sub(1);
            self.free_list.push(i);
            true
        } else {
            false
        }
    }

    pub fn is_valid(&self, i: usize) -> bool {
        self.positions_x[i].is_finite()
            && self.positions_y[i].is_finite()
            && self.radius[i].is_finite()
            && self.tick_interval[i].is_finite()
            && self.lifetime[i].is_finite()
    }
}
