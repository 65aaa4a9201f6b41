//! Path: native/arcade_core/src/config.rs
//! Summary: 衝突パイプラインの調整値（serde で読み込み・検証）

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;
use crate::physics::spatial_grid::grid_dims;

/// グリッドに登録する側（敵が弾より桁違いに多いレベルでは Attackers を選ぶ）
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndexedSide {
    /// 敵・ボス・ボスパーツを登録し、弾丸からクエリする
    #[default]
    Defenders,
    /// プレイヤー弾を登録し、防御側からクエリする
    Attackers,
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("cell size must be a positive finite number (got {0})")]
    InvalidCellSize(f32),
    #[error("world size must be positive and finite (got {width}x{height})")]
    InvalidWorldSize { width: f32, height: f32 },
    #[error("`{field}` must be non-negative and finite")]
    NegativeValue { field: &'static str },
    #[error("`{field}` must lie in [0, 1]")]
    FractionOutOfRange { field: &'static str },
    #[error("grid of {cols}x{rows} cells exceeds the cap of {}", MAX_GRID_CELLS)]
    GridTooLarge { cols: usize, rows: usize },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollisionConfig {
    pub cell_size:                 f32,
    pub world_width:               f32,
    pub world_height:              f32,
    pub indexed_side:              IndexedSide,
    pub bullet_query_margin:       f32,
    pub reflect_radius:            f32,
    pub enemy_bullet_damage:       u32,
    pub thorns_damage:             u32,
    pub magnet_pull_speed:         f32,
    pub bomb_radius:               f32,
    pub explosive_radius:          f32,
    pub explosive_damage_fraction: f32,
    pub chain_radius:              f32,
    pub chain_damage_fraction:     f32,
    pub drone_cooldown:            f32,
    pub drone_orbit_radius:        f32,
    pub drone_range:               f32,
    pub drone_damage:              u32,
    pub drone_missile_speed:       f32,
    pub frame_budget_ms:           f64,
}

impl Default for CollisionConfig {
    fn default() -> Self {
        Self {
            cell_size:                 CELL_SIZE,
            world_width:               WORLD_WIDTH,
            world_height:              WORLD_HEIGHT,
            indexed_side:              IndexedSide::Defenders,
            bullet_query_margin:       BULLET_QUERY_MARGIN,
            reflect_radius:            REFLECT_RADIUS,
            enemy_bullet_damage:       ENEMY_BULLET_DAMAGE,
            thorns_damage:             THORNS_DAMAGE,
            magnet_pull_speed:         MAGNET_PULL_SPEED,
            bomb_radius:               BOMB_RADIUS,
            explosive_radius:          EXPLOSIVE_RADIUS,
            explosive_damage_fraction: EXPLOSIVE_DAMAGE_FRACTION,
            chain_radius:              CHAIN_RADIUS,
            chain_damage_fraction:     CHAIN_DAMAGE_FRACTION,
            drone_cooldown:            DRONE_COOLDOWN,
            drone_orbit_radius:        DRONE_ORBIT_RADIUS,
            drone_range:               DRONE_RANGE,
            drone_damage:              DRONE_DAMAGE,
            drone_missile_speed:       DRONE_MISSILE_SPEED,
            frame_budget_ms:           FRAME_BUDGET_MS,
        }
    }
}

impl CollisionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            return Err(ConfigError::InvalidCellSize(self.cell_size));
        }
        let world_ok = |v: f32| v.is_finite() && v > 0.0;
        if !world_ok(self.world_width) || !world_ok(self.world_height) {
            return Err(ConfigError::InvalidWorldSize {
                width:  self.world_width,
                height: self.world_height,
            });
        }
        let (cols, rows) = grid_dims(self.world_width, self.world_height, self.cell_size);
        if cols.checked_mul(rows).map_or(true, |n| n > MAX_GRID_CELLS) {
            return Err(ConfigError::GridTooLarge { cols, rows });
        }

        let non_negative = [
            ("bullet_query_margin", self.bullet_query_margin),
            ("reflect_radius", self.reflect_radius),
            ("magnet_pull_speed", self.magnet_pull_speed),
            ("bomb_radius", self.bomb_radius),
            ("explosive_radius", self.explosive_radius),
            ("chain_radius", self.chain_radius),
            ("drone_cooldown", self.drone_cooldown),
            ("drone_orbit_radius", self.drone_orbit_radius),
            ("drone_range", self.drone_range),
            ("drone_missile_speed", self.drone_missile_speed),
        ];
        for (field, v) in non_negative {
            if !(v.is_finite() && v >= 0.0) {
                return Err(ConfigError::NegativeValue { field });
            }
        }
        if !(self.frame_budget_ms.is_finite() && self.frame_budget_ms >= 0.0) {
            return Err(ConfigError::NegativeValue { field: "frame_budget_ms" });
        }

        let fractions = [
            ("explosive_damage_fraction", self.explosive_damage_fraction),
            ("chain_damage_fraction", self.chain_damage_fraction),
        ];
        for (field, v) in fractions {
            if !(0.0..=1.0).contains(&v) {
                return Err(ConfigError::FractionOutOfRange { field });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(CollisionConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_bad_cell_size() {
        let cfg = CollisionConfig { cell_size: 0.0, ..Default::default() };
        assert_eq!(cfg.validate(), Err(ConfigError::InvalidCellSize(0.0)));
    }

    #[test]
    fn rejects_world_too_large_for_the_grid() {
        let cfg = CollisionConfig { world_width: 1e30, world_height: 1e30, ..Default::default() };
        assert!(matches!(cfg.validate(), Err(ConfigError::GridTooLarge { .. })));

        // 各軸は収まっても総セル数で弾く
        let cfg = CollisionConfig { world_width: 1.2e9, world_height: 1.2e9, ..Default::default() };
        assert!(matches!(cfg.validate(), Err(ConfigError::GridTooLarge { .. })));

        let cfg = CollisionConfig { cell_size: 1.0, world_width: 1000.0, world_height: 1000.0, ..Default::default() };
        assert_eq!(cfg.validate(), Ok(()));
    }

    #[test]
    fn rejects_negative_radius_and_bad_fraction() {
        let cfg = CollisionConfig { chain_radius: -1.0, ..Default::default() };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::NegativeValue { field: "chain_radius" })
        );
        let cfg = CollisionConfig { explosive_damage_fraction: 1.5, ..Default::default() };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::FractionOutOfRange { field: "explosive_damage_fraction" })
        );
    }

    #[test]
    fn loads_from_json_with_defaults() {
        let cfg: CollisionConfig = serde_json::from_str(
            r#"{ "cell_size": 64.0, "world_width": 800.0, "world_height": 600.0, "indexed_side": "attackers" }"#,
        )
        .unwrap();
        assert_eq!(cfg.indexed_side, IndexedSide::Attackers);
        assert_eq!(cfg.reflect_radius, REFLECT_RADIUS);
        assert!(cfg.validate().is_ok());
    }
}
