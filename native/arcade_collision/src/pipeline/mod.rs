//! Path: native/arcade_collision/src/pipeline/mod.rs
//! Summary: CollisionPipeline 本体（フレーム順序・再利用ストレージ・フレーム時間計測）

mod frame;
mod systems;

use arcade_core::config::{CollisionConfig, ConfigError};
use arcade_core::modifier::ModifierSet;
use arcade_core::physics::rng::SimpleRng;
use arcade_core::physics::spatial_grid::SpatialGrid;

use crate::sink::EffectSink;
use crate::world::{BodyCatalog, DefenderRef};
use frame::{Frame, Scratch};

/// 1 フレームの集計。ホストの HUD・デバッグ表示・ベンチ用
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameReport {
    pub kills:              u32,
    pub parts_destroyed:    u32,
    pub damage_dealt:       u64,
    pub crits:              u32,
    /// 貫通を使い切って消えた弾
    pub bullets_spent:      u32,
    pub player_hits:        u32,
    pub damage_taken:       u32,
    pub dodges:             u32,
    pub reflected:          u32,
    pub thorns_procs:       u32,
    pub pickups:            u32,
    pub aoe_hits:           u32,
    pub chain_hops:         u32,
    pub drone_shots:        u32,
    pub fire_zones_spawned: u32,
    pub invalid_bodies:     u32,
}

pub struct CollisionPipeline {
    config:             CollisionConfig,
    defender_grid:      SpatialGrid<DefenderRef>,
    bullet_grid:        SpatialGrid<u32>,
    scratch:            Scratch,
    /// ドローンごとの残りクールダウン（秒）
    drone_cooldowns:    Vec<f32>,
    fire_trail_timer:   f32,
    frame_id:           u64,
    /// 起動からの累計被ダメージ
    damage_taken:       u64,
    last_frame_time_ms: f64,
}

impl CollisionPipeline {
    pub fn new(config: CollisionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let defender_grid =
            SpatialGrid::new(config.cell_size, config.world_width, config.world_height);
        let bullet_grid =
            SpatialGrid::new(config.cell_size, config.world_width, config.world_height);
        Ok(Self {
            config,
            defender_grid,
            bullet_grid,
            scratch: Scratch::default(),
            drone_cooldowns: Vec::new(),
            fire_trail_timer: 0.0,
            frame_id: 0,
            damage_taken: 0,
            last_frame_time_ms: 0.0,
        })
    }

    pub fn config(&self) -> &CollisionConfig {
        &self.config
    }

    pub fn frame_id(&self) -> u64 {
        self.frame_id
    }

    pub fn damage_taken(&self) -> u64 {
        self.damage_taken
    }

    pub fn last_frame_time_ms(&self) -> f64 {
        self.last_frame_time_ms
    }

    /// ワールドサイズの変更。セル数が変わったときだけグリッドを再確保する。
    pub fn resize_world(&mut self, width: f32, height: f32) -> Result<(), ConfigError> {
        let mut next = self.config.clone();
        next.world_width = width;
        next.world_height = height;
        next.validate()?;
        self.config = next;
        self.defender_grid.resize(width, height);
        self.bullet_grid.resize(width, height);
        Ok(())
    }

    /// 1 フレーム分の衝突判定とダメージ解決。1 ティックに 1 回呼ぶ。
    pub fn resolve_frame<S: EffectSink>(
        &mut self,
        dt: f32,
        bodies: &mut BodyCatalog,
        mods: &ModifierSet,
        sink: &mut S,
        rng: &mut SimpleRng,
    ) -> FrameReport {
        let t_start = std::time::Instant::now();
        self.frame_id += 1;
        // trace にしておき、RUST_LOG=trace のときだけ毎フレーム出力する
        log::trace!("resolve_frame: dt={} frame_id={}", dt, self.frame_id);

        let dt = if dt.is_finite() && dt >= 0.0 {
            dt
        } else {
            log::warn!("resolve_frame: ignoring invalid dt={}", dt);
            0.0
        };

        let mut f = Frame {
            dt,
            config: &self.config,
            mods,
            bodies: &mut *bodies,
            sink: &mut *sink,
            rng: &mut *rng,
            defender_grid: &mut self.defender_grid,
            bullet_grid: &mut self.bullet_grid,
            scratch: &mut self.scratch,
            report: FrameReport::default(),
        };

        systems::sanitize::run(&mut f);
        systems::rebuild::run(&mut f);
        systems::player_bullets::run(&mut f);
        systems::enemy_bullets::run(&mut f);
        systems::contact::run(&mut f);
        systems::pickups::run(&mut f);
        systems::fire_zones::run(&mut f);
        systems::drones::run(&mut f, &mut self.drone_cooldowns);
        systems::fire_trail::run(&mut f, &mut self.fire_trail_timer);

        let report = f.report;
        self.damage_taken = self.damage_taken.saturating_add(report.damage_taken as u64);

        let elapsed_ms = t_start.elapsed().as_secs_f64() * 1000.0;
        self.last_frame_time_ms = elapsed_ms;
        if elapsed_ms > self.config.frame_budget_ms {
            log::warn!(
                "resolve_frame: budget exceeded {:.2}ms (budget {:.2}ms) frame_id={} defenders={} bullets={}",
                elapsed_ms,
                self.config.frame_budget_ms,
                self.frame_id,
                bodies.live_defender_count(),
                bodies.bullets.count,
            );
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcade_core::body::Aabb;

    #[test]
    fn rejects_invalid_config() {
        let config = CollisionConfig { cell_size: 0.0, ..CollisionConfig::default() };
        assert!(matches!(
            CollisionPipeline::new(config),
            Err(ConfigError::InvalidCellSize(_))
        ));
    }

    #[test]
    fn resize_keeps_previous_config_on_error() {
        let mut p = CollisionPipeline::new(CollisionConfig::default()).unwrap();
        assert!(p.resize_world(-1.0, 100.0).is_err());
        assert_eq!(p.config().world_width, CollisionConfig::default().world_width);
        p.resize_world(800.0, 600.0).unwrap();
        assert_eq!(p.config().world_width, 800.0);
    }

    #[test]
    fn oversized_world_is_an_error_not_a_panic() {
        let config = CollisionConfig { world_width: 1e30, world_height: 1e30, ..CollisionConfig::default() };
        assert!(matches!(
            CollisionPipeline::new(config),
            Err(ConfigError::GridTooLarge { .. })
        ));

        let mut p = CollisionPipeline::new(CollisionConfig::default()).unwrap();
        assert!(matches!(p.resize_world(1e30, 1e30), Err(ConfigError::GridTooLarge { .. })));
        assert_eq!(p.config().world_width, CollisionConfig::default().world_width);
    }

    #[test]
    fn empty_frame_counts_frames_and_reports_nothing() {
        let mut p = CollisionPipeline::new(CollisionConfig::default()).unwrap();
        let mut bodies = BodyCatalog::new(Aabb::new(100.0, 100.0, 32.0, 32.0));
        let mut sink = crate::sink::EffectLedger::default();
        let mut rng = SimpleRng::new(1);
        let report = p.resolve_frame(1.0 / 60.0, &mut bodies, &ModifierSet::default(), &mut sink, &mut rng);
        assert_eq!(report, FrameReport::default());
        assert_eq!(p.frame_id(), 1);
        assert!(sink.events().is_empty());
    }
}
