//! Path: native/arcade_core/src/power_up.rs
//! Summary: パワーアップ種類（閉じたタグ）と PowerUpWorld

use crate::body::{Aabb, Body, BodyId, BodyKind};

/// パワーアップの種類。効果の適用はパイプライン側で網羅的に match する。
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[repr(u8)]
pub enum PowerUpKind {
    #[default]
    Health = 0, // HP 回復（value = 回復量）
    Charge = 1, // チャージメーター加算（value = 加算量）
    Bomb   = 2, // プレイヤー中心の範囲攻撃（value = ダメージ）
    Score  = 3, // スコア加算（value = 点数）
    Perk   = 4, // パーク付与（value = パーク ID、次フレームの ModifierSet に反映）
}

/// パワーアップ SoA（Structure of Arrays）
///
/// フリーリストにより kill されたスロットを O(1) で再利用する。
#[derive(Default)]
pub struct PowerUpWorld {
    pub bodies: Vec<Body>,
    pub kinds:  Vec<PowerUpKind>,
    pub value:  Vec<u32>,
    pub count:  usize,
    /// kill 時にインデックスを積み、spawn 時に pop して再利用する
    free_list:  Vec<usize>,
}

impl PowerUpWorld {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// パワーアップをスポーンしてスロット番号を返す。空きスロットがあれば再利用する。
    pub fn spawn(&mut self, id: BodyId, aabb: Aabb, kind: PowerUpKind, value: u32) -> usize {
        let body = Body::new(id, BodyKind::PowerUp, aabb);
        let i = if let Some(i) = self.free_list.pop() {
            self.bodies[i] = body;
            self.kinds[i]  = kind;
            self.value[i]  = value;
            i
        } else {
            self.bodies.push(body);
            self.kinds.push(kind);
            self.value.push(value);
            self.bodies.len() - 1
        };
        self.count += 1;
        i
    }

    /// パワーアップを消去し、スロットをフリーリストに返却する。
    /// 既に死んでいるスロットには何もしない（false を返す）。
    pub fn kill(&mut self, i: usize) -> bool {
        match self.bodies.get_mut(i) {
            Some(b) if b.alive => {
                b.alive = false;
                self.count = self.count.saturating_sub(1);
                self.free_list.push(i);
                true
            }
            _ => false,
        }
    }
}
