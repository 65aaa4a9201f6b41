//! Path: native/arcade_collision/src/pipeline/systems/mod.rs
//! Summary: フレーム内の各処理段（resolve_frame から順に呼ばれる）

pub(super) mod area;
pub(super) mod chain;
pub(super) mod contact;
pub(super) mod damage;
pub(super) mod drones;
pub(super) mod enemy_bullets;
pub(super) mod fire_trail;
pub(super) mod fire_zones;
pub(super) mod pickups;
pub(super) mod player_bullets;
pub(super) mod rebuild;
pub(super) mod sanitize;
pub(super) mod targeting;
