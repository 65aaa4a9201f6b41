//! Path: native/arcade_core/src/physics/mod.rs
//! Summary: 物理モジュール（一様グリッド・RNG）

pub mod rng;
pub mod spatial_grid;
