//! Path: native/arcade_core/src/modifier.rs
//! Summary: パーク（ModifierSet）のフレーム単位スナップショット
//!
//! ホストがアンロック済みパークから毎フレーム組み立て、パイプラインには
//! `&ModifierSet` で渡す。フレーム中に変更されることはない。

use serde::{Deserialize, Serialize};

use crate::constants::{MAX_CHAIN_TARGETS, MAX_DRONES, MAX_PIERCE};

/// ファイアトレイル（プレイヤー後方に一定間隔で置く継続ダメージ床）
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FireTrailParams {
    /// 床を落とす間隔（秒）
    pub interval:      f32,
    pub radius:        f32,
    /// 1 ティックあたりのダメージ
    pub damage:        u32,
    /// ダメージ判定の間隔（秒）
    pub tick_interval: f32,
    /// 床の寿命（秒）
    pub lifetime:      f32,
}

impl Default for FireTrailParams {
    fn default() -> Self {
        Self {
            interval:      0.25,
            radius:        28.0,
            damage:        1,
            tick_interval: 0.5,
            lifetime:      2.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModifierSet {
    pub damage_multiplier:       f32,
    /// 0.0〜1.0
    pub crit_chance:             f32,
    pub crit_multiplier:         f32,
    /// 最初のヒット後に追加で貫通できる体数
    pub pierce_count:            u8,
    /// 被弾・接触を無効化する確率（0.0〜1.0）
    pub phase_chance:            f32,
    /// 0 なら磁石なし
    pub magnet_range:            f32,
    pub explosive_rounds:        bool,
    pub reflect_active:          bool,
    pub thorns:                  bool,
    pub chain_lightning_targets: u8,
    pub drone_count:             u8,
    pub fire_trail:              Option<FireTrailParams>,
    /// 被ダメージをチャージメーターへ変換する割合（0 なら変換しない）
    pub damage_to_charge:        f32,
}

impl Default for ModifierSet {
    fn default() -> Self {
        Self {
            damage_multiplier:       1.0,
            crit_chance:             0.0,
            crit_multiplier:         2.0,
            pierce_count:            0,
            phase_chance:            0.0,
            magnet_range:            0.0,
            explosive_rounds:        false,
            reflect_active:          false,
            thorns:                  false,
            chain_lightning_targets: 0,
            drone_count:             0,
            fire_trail:              None,
            damage_to_charge:        0.0,
        }
    }
}

impl ModifierSet {
    /// HitSet の容量を超えないようにクランプした貫通数
    pub fn effective_pierce(&self) -> u8 {
        self.pierce_count.min(MAX_PIERCE)
    }

    pub fn effective_chain_targets(&self) -> usize {
        (self.chain_lightning_targets as usize).min(MAX_CHAIN_TARGETS)
    }

    pub fn effective_drone_count(&self) -> usize {
        (self.drone_count as usize).min(MAX_DRONES)
    }

    /// 非有限・負の倍率は 0 として扱う（NaN をダメージ計算に流さない）
    pub fn effective_damage_multiplier(&self) -> f32 {
        if self.damage_multiplier.is_finite() {
            self.damage_multiplier.max(0.0)
        } else {
            0.0
        }
    }

    pub fn effective_crit_multiplier(&self) -> f32 {
        if self.crit_multiplier.is_finite() {
            self.crit_multiplier.max(1.0)
        } else {
            1.0
        }
    }

    pub fn magnet_active(&self) -> bool {
        self.magnet_range.is_finite() && self.magnet_range > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_neutral() {
        let m = ModifierSet::default();
        assert_eq!(m.effective_damage_multiplier(), 1.0);
        assert_eq!(m.effective_pierce(), 0);
        assert!(!m.magnet_active());
        assert!(m.fire_trail.is_none());
    }

    #[test]
    fn counts_are_clamped() {
        let m = ModifierSet {
            pierce_count: 200,
            chain_lightning_targets: 200,
            drone_count: 200,
            ..Default::default()
        };
        assert_eq!(m.effective_pierce(), MAX_PIERCE);
        assert_eq!(m.effective_chain_targets(), MAX_CHAIN_TARGETS);
        assert_eq!(m.effective_drone_count(), MAX_DRONES);
    }

    #[test]
    fn bad_multipliers_are_defused() {
        let m = ModifierSet {
            damage_multiplier: f32::NAN,
            crit_multiplier: -3.0,
            ..Default::default()
        };
        assert_eq!(m.effective_damage_multiplier(), 0.0);
        assert_eq!(m.effective_crit_multiplier(), 1.0);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let m: ModifierSet =
            serde_json::from_str(r#"{ "pierce_count": 2, "fire_trail": { "radius": 40.0 } }"#)
                .unwrap();
        assert_eq!(m.pierce_count, 2);
        assert_eq!(m.damage_multiplier, 1.0);
        let trail = m.fire_trail.unwrap();
        assert_eq!(trail.radius, 40.0);
        assert_eq!(trail.interval, FireTrailParams::default().interval);
    }
}
