//! Path: native/arcade_collision/src/world/player.rs
//! Summary: プレイヤー状態（ボディ・速度）

use arcade_core::body::{Aabb, Body, BodyId, BodyKind};

/// プレイヤー状態。HP はホスト（EffectSink 側）が持つ。
#[derive(Clone, Debug)]
pub struct PlayerState {
    pub body:       Body,
    /// ファイアトレイルの「後方」判定に使う
    pub velocity_x: f32,
    pub velocity_y: f32,
}

impl PlayerState {
    pub fn new(id: BodyId, aabb: Aabb) -> Self {
        Self {
            body: Body::new(id, BodyKind::Player, aabb),
            velocity_x: 0.0,
            velocity_y: 0.0,
        }
    }
}
