//! Path: native/arcade_core/src/lib.rs
//! Summary: 衝突コア共通ロジック（定数・ボディ幾何・グリッド・RNG・パーク・設定）

pub mod body;
pub mod config;
pub mod constants;
pub mod entity_params;
pub mod modifier;
pub mod physics;
pub mod power_up;
