//! Path: native/arcade_collision/src/world/frame_event.rs
//! Summary: フレーム内で発生したゲームイベント（EffectLedger が記録する）

use arcade_core::body::{BodyId, BodyKind};
use arcade_core::power_up::PowerUpKind;

use crate::sink::{DroneMissile, FireZoneSpawn, ParticleKind};

/// EffectSink への呼び出しをそのまま記録したもの。ホストは drain して
/// スコア・VFX・オーディオ側へ配る。
#[derive(Debug, Clone, PartialEq)]
pub enum FrameEvent {
    Damaged           { target: BodyId, amount: u32, died: bool },
    Destroyed         { id: BodyId, kind: BodyKind },
    Explosion         { x: f32, y: f32, size: f32 },
    Particles         { x: f32, y: f32, kind: ParticleKind, count: u32 },
    Killed            { id: BodyId, kind: BodyKind },
    BossPartDestroyed { id: BodyId },
    PlayerHit         { amount: u32 },
    Pickup            { kind: PowerUpKind },
    Healed            { amount: u32 },
    Charged           { amount: f32 },
    Scored            { value: u32 },
    PerkGranted       { perk_id: u32 },
    DroneMissile(DroneMissile),
    FireZone(FireZoneSpawn),
}
