//! Path: native/arcade_collision/src/sink/ledger.rs
//! Summary: HP 表とイベント記録を持つ EffectSink 実装（ホスト用アダプタ兼テストダブル）

use arcade_core::body::{Body, BodyId};
use arcade_core::power_up::PowerUpKind;
use rustc_hash::FxHashMap;

use super::{DroneMissile, EffectSink, FireZoneSpawn, ParticleKind};
use crate::world::FrameEvent;

/// ボディごとの HP を持ち、受け取った通知を `FrameEvent` として貯める。
/// HP が未登録のボディは `default_hp` から始まる。
pub struct EffectLedger {
    hp:                FxHashMap<BodyId, i32>,
    default_hp:        i32,
    pub player_hp:     i32,
    pub player_max_hp: i32,
    pub score:         u64,
    pub charge:        f32,
    events:            Vec<FrameEvent>,
}

impl EffectLedger {
    pub fn new(default_hp: i32, player_max_hp: i32) -> Self {
        Self {
            hp: FxHashMap::default(),
            default_hp,
            player_hp: player_max_hp,
            player_max_hp,
            score: 0,
            charge: 0.0,
            events: Vec::new(),
        }
    }

    pub fn set_hp(&mut self, id: BodyId, hp: i32) {
        self.hp.insert(id, hp);
    }

    pub fn hp(&self, id: BodyId) -> i32 {
        self.hp.get(&id).copied().unwrap_or(self.default_hp)
    }

    pub fn events(&self) -> &[FrameEvent] {
        &self.events
    }

    /// 貯まったイベントを取り出す（ホストはフレームごとに呼ぶ）
    pub fn drain_events(&mut self) -> Vec<FrameEvent> {
        self.events.drain(..).collect()
    }

    pub fn count_events(&self, pred: impl Fn(&FrameEvent) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }
}

impl Default for EffectLedger {
    fn default() -> Self {
        Self::new(1, 10)
    }
}

impl EffectSink for EffectLedger {
    fn damage(&mut self, target: &Body, amount: u32) -> bool {
        let hp = self.hp.entry(target.id).or_insert(self.default_hp);
        *hp = hp.saturating_sub(i32::try_from(amount).unwrap_or(i32::MAX));
        let died = *hp <= 0;
        self.events.push(FrameEvent::Damaged { target: target.id, amount, died });
        died
    }

    fn destroy(&mut self, body: &Body) {
        self.hp.remove(&body.id);
        self.events.push(FrameEvent::Destroyed { id: body.id, kind: body.kind });
    }

    fn spawn_explosion(&mut self, x: f32, y: f32, size: f32) {
        self.events.push(FrameEvent::Explosion { x, y, size });
    }

    fn spawn_particles(&mut self, x: f32, y: f32, kind: ParticleKind, count: u32) {
        self.events.push(FrameEvent::Particles { x, y, kind, count });
    }

    fn on_kill(&mut self, body: &Body) {
        self.events.push(FrameEvent::Killed { id: body.id, kind: body.kind });
    }

    fn on_boss_part_destroyed(&mut self, part: &Body) {
        self.events.push(FrameEvent::BossPartDestroyed { id: part.id });
    }

    fn on_player_hit(&mut self, amount: u32) {
        let amount_i = i32::try_from(amount).unwrap_or(i32::MAX);
        self.player_hp = self.player_hp.saturating_sub(amount_i).max(0);
        self.events.push(FrameEvent::PlayerHit { amount });
    }

    fn on_pickup(&mut self, kind: PowerUpKind) {
        self.events.push(FrameEvent::Pickup { kind });
    }

    fn heal_player(&mut self, amount: u32) {
        let amount_i = i32::try_from(amount).unwrap_or(i32::MAX);
        // 最大 HP を超えない
        self.player_hp = self.player_hp.saturating_add(amount_i).min(self.player_max_hp);
        self.events.push(FrameEvent::Healed { amount });
    }

    fn on_charge(&mut self, amount: f32) {
        self.charge += amount;
        self.events.push(FrameEvent::Charged { amount });
    }

    fn add_score(&mut self, value: u32) {
        self.score += value as u64;
        self.events.push(FrameEvent::Scored { value });
    }

    fn grant_perk(&mut self, perk_id: u32) {
        self.events.push(FrameEvent::PerkGranted { perk_id });
    }

    fn spawn_drone_missile(&mut self, missile: DroneMissile) {
        self.events.push(FrameEvent::DroneMissile(missile));
    }

    fn spawn_fire_zone(&mut self, zone: FireZoneSpawn) {
        self.events.push(FrameEvent::FireZone(zone));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcade_core::body::{Aabb, BodyKind};

    fn enemy(id: u32) -> Body {
        Body::new(BodyId(id), BodyKind::Enemy, Aabb::new(0.0, 0.0, 10.0, 10.0))
    }

    #[test]
    fn damage_reports_death_once_hp_runs_out() {
        let mut ledger = EffectLedger::new(5, 10);
        let e = enemy(1);
        assert!(!ledger.damage(&e, 3));
        assert_eq!(ledger.hp(e.id), 2);
        assert!(ledger.damage(&e, 3));
        assert_eq!(ledger.count_events(|ev| matches!(ev, FrameEvent::Damaged { died: true, .. })), 1);
    }

    #[test]
    fn per_body_hp_overrides_default() {
        let mut ledger = EffectLedger::new(1, 10);
        ledger.set_hp(BodyId(7), 100);
        assert!(!ledger.damage(&enemy(7), 50));
        assert!(ledger.damage(&enemy(8), 1));
    }

    #[test]
    fn heal_is_capped_at_max() {
        let mut ledger = EffectLedger::new(1, 10);
        ledger.on_player_hit(4);
        assert_eq!(ledger.player_hp, 6);
        ledger.heal_player(20);
        assert_eq!(ledger.player_hp, 10);
        ledger.on_player_hit(50);
        assert_eq!(ledger.player_hp, 0);
    }

    #[test]
    fn drain_empties_the_buffer() {
        let mut ledger = EffectLedger::default();
        ledger.add_score(30);
        ledger.on_charge(0.5);
        let events = ledger.drain_events();
        assert_eq!(events.len(), 2);
        assert!(ledger.events().is_empty());
        assert_eq!(ledger.score, 30);
    }
}
