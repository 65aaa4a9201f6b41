//! Path: native/arcade_core/src/entity_params.rs
//! Summary: 敵・ボスの ID ベースパラメータテーブル（接触ダメージ・パーツ配置）
//!
//! enum を増やさずに u8 ID でパラメータを参照する。未知の ID は
//! パニックせず既定エントリ（ID 0）にフォールバックする。

use crate::constants::{CONTACT_DAMAGE_BOSS, CONTACT_DAMAGE_MINI_BOSS, CONTACT_DAMAGE_NORMAL};

/// 敵のパラメータ（ID で参照）
#[derive(Clone, Copy, Debug)]
pub struct EnemyParams {
    /// プレイヤーに触れたときのダメージ
    pub contact_damage: u32,
    /// 撃破時の爆発サイズ
    pub explosion_size: f32,
    /// ログ表示用の種別名
    pub name:           &'static str,
}

pub const ENEMY_ID_GRUNT:     u8 = 0;
pub const ENEMY_ID_DART:      u8 = 1;
pub const ENEMY_ID_BRUTE:     u8 = 2;
pub const ENEMY_ID_MINI_BOSS: u8 = 3;

static ENEMY_TABLE: [EnemyParams; 4] = [
    EnemyParams { contact_damage: CONTACT_DAMAGE_NORMAL,    explosion_size: 32.0, name: "grunt" },
    EnemyParams { contact_damage: CONTACT_DAMAGE_NORMAL,    explosion_size: 24.0, name: "dart" },
    EnemyParams { contact_damage: CONTACT_DAMAGE_NORMAL,    explosion_size: 48.0, name: "brute" },
    EnemyParams { contact_damage: CONTACT_DAMAGE_MINI_BOSS, explosion_size: 72.0, name: "mini_boss" },
];

impl EnemyParams {
    pub fn get(id: u8) -> &'static EnemyParams {
        ENEMY_TABLE.get(id as usize).unwrap_or(&ENEMY_TABLE[0])
    }
}

// ─── BossParams ────────────────────────────────────────────────

/// ボスパーツの配置（ボス AABB 左上からのオフセットとサイズ）
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PartLayout {
    pub dx: f32,
    pub dy: f32,
    pub w:  f32,
    pub h:  f32,
}

#[derive(Clone, Copy, Debug)]
pub struct BossParams {
    pub contact_damage: u32,
    pub explosion_size: f32,
    /// 個別に破壊できるパーツ（砲台・装甲など）
    pub parts:          &'static [PartLayout],
    /// ログ表示用のボス名
    pub name:           &'static str,
}

pub const BOSS_ID_DREADNOUGHT: u8 = 0;
pub const BOSS_ID_HIVE_QUEEN:  u8 = 1;
pub const BOSS_ID_WARDEN:      u8 = 2;

static DREADNOUGHT_PARTS: [PartLayout; 3] = [
    PartLayout { dx: 8.0,   dy: 40.0, w: 32.0, h: 32.0 }, // 左砲台
    PartLayout { dx: 152.0, dy: 40.0, w: 32.0, h: 32.0 }, // 右砲台
    PartLayout { dx: 80.0,  dy: 96.0, w: 32.0, h: 24.0 }, // コア装甲
];
static HIVE_QUEEN_PARTS: [PartLayout; 2] = [
    PartLayout { dx: 0.0,  dy: 0.0, w: 40.0, h: 40.0 },
    PartLayout { dx: 88.0, dy: 0.0, w: 40.0, h: 40.0 },
];

static BOSS_TABLE: [BossParams; 3] = [
    BossParams { contact_damage: CONTACT_DAMAGE_BOSS, explosion_size: 160.0, parts: &DREADNOUGHT_PARTS, name: "Dreadnought" },
    BossParams { contact_damage: CONTACT_DAMAGE_BOSS, explosion_size: 128.0, parts: &HIVE_QUEEN_PARTS,  name: "Hive Queen" },
    BossParams { contact_damage: CONTACT_DAMAGE_BOSS, explosion_size: 128.0, parts: &[],                name: "Warden" },
];

impl BossParams {
    pub fn get(id: u8) -> &'static BossParams {
        BOSS_TABLE.get(id as usize).unwrap_or(&BOSS_TABLE[0])
    }
}
