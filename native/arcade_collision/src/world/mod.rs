//! Path: native/arcade_collision/src/world/mod.rs
//! Summary: ワールド型（PlayerState, EnemyWorld, BossWorld, BulletWorld, FireZoneWorld, BodyCatalog）

mod body_catalog;
mod boss;
mod bullet;
mod enemy;
mod fire_zone;
mod frame_event;
mod hit_set;
mod player;

pub use body_catalog::{BodyCatalog, DefenderRef};
pub use boss::BossWorld;
pub use bullet::{BulletOwner, BulletWorld};
pub use enemy::EnemyWorld;
pub use fire_zone::FireZoneWorld;
pub use frame_event::FrameEvent;
pub use hit_set::HitSet;
pub use player::PlayerState;
