//! Path: native/arcade_core/src/constants.rs
//! Summary: ワールドサイズ・グリッドセル・接触ダメージ・パーク既定値などの定数定義

// World extents (grid is sized from these unless the host resizes)
pub const WORLD_WIDTH:  f32 = 1280.0;
pub const WORLD_HEIGHT: f32 = 720.0;

// Uniform grid cell size
pub const CELL_SIZE: f32 = 120.0;
/// セル総数の上限（ワールド / セルサイズ比が大きすぎる設定は validate で弾く）
pub const MAX_GRID_CELLS: usize = 1 << 20;

// Frame budget（超過時は warn ログ）
pub const FRAME_BUDGET_MS: f64 = 1000.0 / 60.0;

/// 弾丸 AABB を広げてクエリするマージン（scale > 1 の円が AABB をはみ出す分を吸収）
pub const BULLET_QUERY_MARGIN: f32 = 16.0;

// Contact damage
pub const CONTACT_DAMAGE_NORMAL:    u32 = 1;
pub const CONTACT_DAMAGE_BOSS:      u32 = 2;
pub const CONTACT_DAMAGE_MINI_BOSS: u32 = 1;
/// 敵弾がプレイヤーに当たったときのダメージ（常に 1）
pub const ENEMY_BULLET_DAMAGE:      u32 = 1;

// Reflect / thorns
pub const REFLECT_RADIUS: f32 = 96.0;
pub const THORNS_DAMAGE:  u32 = 3;

// Magnet: 宝石が飛んでくる速さ
pub const MAGNET_PULL_SPEED: f32 = 300.0;

// Explosive rounds
pub const EXPLOSIVE_RADIUS:          f32 = 64.0;
pub const EXPLOSIVE_DAMAGE_FRACTION: f32 = 0.5;

// Bomb pickup
pub const BOMB_RADIUS: f32 = 220.0;

// Chain lightning
pub const CHAIN_RADIUS:          f32 = 160.0;
pub const CHAIN_DAMAGE_FRACTION: f32 = 0.6;
pub const MAX_CHAIN_TARGETS:     usize = 8;

// Drones
pub const DRONE_COOLDOWN:      f32 = 1.2;
pub const DRONE_ORBIT_RADIUS:  f32 = 48.0;
pub const DRONE_RANGE:         f32 = 480.0;
pub const DRONE_DAMAGE:        u32 = 2;
pub const DRONE_MISSILE_SPEED: f32 = 360.0;
pub const MAX_DRONES:          usize = 8;

/// 貫通数の上限（HitSet の容量は MAX_PIERCE + 1）
pub const MAX_PIERCE: u8 = 8;
pub const HIT_SET_CAPACITY: usize = MAX_PIERCE as usize + 1;

// Particle counts
pub const CRIT_PARTICLES:      u32 = 6;
pub const DODGE_PARTICLES:     u32 = 8;
pub const REFLECT_PARTICLES:   u32 = 4;
pub const PICKUP_PARTICLES:    u32 = 6;
pub const LIGHTNING_PARTICLES: u32 = 5;
pub const THORNS_PARTICLES:    u32 = 4;
pub const HIT_PARTICLES:       u32 = 3;

/// ボスパーツ破壊時の爆発サイズ
pub const PART_EXPLOSION_SIZE: f32 = 48.0;
