//! Path: native/arcade_collision/src/sink/mod.rs
//! Summary: パイプラインが結果を通知する EffectSink トレイトと付随データ型
//!
//! パイプラインはスコア・VFX・オーディオを所有しない。ダメージの適用と
//! 撃破判定（HP）はホスト側が持ち、`damage` の戻り値で死亡を伝える。

mod ledger;

pub use ledger::EffectLedger;

use arcade_core::body::{Body, BodyId};
use arcade_core::power_up::PowerUpKind;

/// パーティクル種別（色・形はホストのレンダラが決める）
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum ParticleKind {
    Hit,
    Crit,
    Dodge,
    Reflect,
    Pickup,
    Lightning,
    Thorns,
}

/// ドローンが撃つミサイル。弾丸としての登録はホストが行う。
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct DroneMissile {
    /// 周回スロット番号
    pub slot:   u8,
    pub x:      f32,
    pub y:      f32,
    pub vx:     f32,
    pub vy:     f32,
    pub target: BodyId,
    pub damage: u32,
}

/// ファイアトレイルが置く床。ホストが `FireZoneWorld::spawn` で登録する。
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct FireZoneSpawn {
    pub x:             f32,
    pub y:             f32,
    pub radius:        f32,
    pub damage:        u32,
    pub tick_interval: f32,
    pub lifetime:      f32,
}

pub trait EffectSink {
    /// `target` に `amount` のダメージを与え、死亡したら true
    fn damage(&mut self, target: &Body, amount: u32) -> bool;
    /// 弾丸・パワーアップの消滅、または無効ジオメトリによる除去
    fn destroy(&mut self, body: &Body);
    fn spawn_explosion(&mut self, x: f32, y: f32, size: f32);
    fn spawn_particles(&mut self, x: f32, y: f32, kind: ParticleKind, count: u32);
    /// 敵・ボス本体の撃破
    fn on_kill(&mut self, body: &Body);
    /// ボスパーツ単体の破壊（本体の `on_kill` とは別）
    fn on_boss_part_destroyed(&mut self, part: &Body);
    fn on_player_hit(&mut self, amount: u32);

    fn on_pickup(&mut self, _kind: PowerUpKind) {}
    fn heal_player(&mut self, _amount: u32) {}
    fn on_charge(&mut self, _amount: f32) {}
    fn add_score(&mut self, _value: u32) {}
    fn grant_perk(&mut self, _perk_id: u32) {}
    fn spawn_drone_missile(&mut self, _missile: DroneMissile) {}
    fn spawn_fire_zone(&mut self, _zone: FireZoneSpawn) {}
}
