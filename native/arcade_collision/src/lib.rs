//! Path: native/arcade_collision/src/lib.rs
//! Summary: モジュール宣言と pub use のみ（ホストはここから API を使う）

pub mod pipeline;
pub mod sink;
pub mod world;

pub use arcade_core::body::{Aabb, Body, BodyId, BodyKind};
pub use arcade_core::config::{CollisionConfig, ConfigError, IndexedSide};
pub use arcade_core::modifier::{FireTrailParams, ModifierSet};
pub use arcade_core::physics::rng::SimpleRng;
pub use arcade_core::power_up::PowerUpKind;
pub use pipeline::{CollisionPipeline, FrameReport};
pub use sink::{DroneMissile, EffectLedger, EffectSink, FireZoneSpawn, ParticleKind};
pub use world::{
    BodyCatalog, BossWorld, BulletOwner, BulletWorld, DefenderRef, EnemyWorld, FireZoneWorld,
    FrameEvent, HitSet, PlayerState,
};
