//! Path: native/arcade_collision/src/pipeline/frame.rs
//! Summary: 1 フレーム分の作業コンテキスト（協調オブジェクトと再利用バッファへの借用）

use arcade_core::config::{CollisionConfig, IndexedSide};
use arcade_core::modifier::ModifierSet;
use arcade_core::physics::rng::SimpleRng;
use arcade_core::physics::spatial_grid::SpatialGrid;

use super::FrameReport;
use crate::sink::EffectSink;
use crate::world::{BodyCatalog, DefenderRef};

/// フレームをまたいで再利用する作業バッファ
#[derive(Default)]
pub(crate) struct Scratch {
    /// 弾丸 → 防御側クエリの結果
    pub candidates:        Vec<DefenderRef>,
    /// 防御側 → 弾丸クエリの結果（Attackers モード）
    pub bullet_candidates: Vec<u32>,
    /// 最近接探索用
    pub nearby:            Vec<DefenderRef>,
    /// 現在のチェーンで既に撃った相手
    pub chain:             Vec<DefenderRef>,
}

pub(crate) struct Frame<'a, S: EffectSink> {
    pub dt:            f32,
    pub config:        &'a CollisionConfig,
    pub mods:          &'a ModifierSet,
    pub bodies:        &'a mut BodyCatalog,
    pub sink:          &'a mut S,
    pub rng:           &'a mut SimpleRng,
    pub defender_grid: &'a mut SpatialGrid<DefenderRef>,
    pub bullet_grid:   &'a mut SpatialGrid<u32>,
    pub scratch:       &'a mut Scratch,
    pub report:        FrameReport,
}

impl<S: EffectSink> Frame<'_, S> {
    pub fn defenders_indexed(&self) -> bool {
        self.config.indexed_side == IndexedSide::Defenders
    }
}
