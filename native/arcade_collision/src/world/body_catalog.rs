//! Path: native/arcade_collision/src/world/body_catalog.rs
//! Summary: 種類別ワールドをまとめた BodyCatalog と防御側参照（DefenderRef）

use arcade_core::body::{Aabb, Body, BodyId};
use arcade_core::entity_params::BossParams;
use arcade_core::power_up::{PowerUpKind, PowerUpWorld};

use super::{BossWorld, BulletOwner, BulletWorld, EnemyWorld, FireZoneWorld, PlayerState};

/// グリッドに登録される防御側ボディへの参照（ワールド内スロット番号）
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum DefenderRef {
    Enemy(u32),
    Boss(u32),
    Part(u32),
}

/// ホストが所有するボディ一式。パイプラインは alive フラグの遷移・
/// 磁石による移動・リフレクトによる速度反転だけを書き込む。
pub struct BodyCatalog {
    pub player:     PlayerState,
    pub enemies:    EnemyWorld,
    pub bosses:     BossWorld,
    pub bullets:    BulletWorld,
    pub power_ups:  PowerUpWorld,
    pub fire_zones: FireZoneWorld,
    next_id:        u32,
}

impl BodyCatalog {
    /// プレイヤーは常に `BodyId(0)`
    pub fn new(player_aabb: Aabb) -> Self {
        Self {
            player:     PlayerState::new(BodyId(0), player_aabb),
            enemies:    EnemyWorld::new(),
            bosses:     BossWorld::new(),
            bullets:    BulletWorld::new(),
            power_ups:  PowerUpWorld::new(),
            fire_zones: FireZoneWorld::new(),
            next_id:    1,
        }
    }

    fn alloc_id(&mut self) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    pub fn spawn_enemy(&mut self, aabb: Aabb, kind_id: u8) -> BodyId {
        let id = self.alloc_id();
        self.enemies.spawn(id, aabb, kind_id);
        id
    }

    /// ボス本体と `BossParams` のパーツ配置をまとめてスポーンする
    pub fn spawn_boss(&mut self, aabb: Aabb, kind_id: u8) -> BodyId {
        let id = self.alloc_id();
        let owner = self.bosses.spawn(id, aabb, kind_id);
        for layout in BossParams::get(kind_id).parts {
            let part_id = self.alloc_id();
            let part_aabb = Aabb::new(aabb.x + layout.dx, aabb.y + layout.dy, layout.w, layout.h);
            self.bosses.spawn_part(owner, part_id, part_aabb);
        }
        id
    }

    pub fn spawn_bullet(
        &mut self,
        aabb: Aabb,
        vx: f32,
        vy: f32,
        damage: u32,
        owner: BulletOwner,
    ) -> BodyId {
        let id = self.alloc_id();
        self.bullets.spawn(id, aabb, vx, vy, damage, owner);
        id
    }

    pub fn spawn_power_up(&mut self, aabb: Aabb, kind: PowerUpKind, value: u32) -> BodyId {
        let id = self.alloc_id();
        self.power_ups.spawn(id, aabb, kind, value);
        id
    }

    /// 防御側スロット全体を走査する参照列。`self` を借用しないので走査中に書き込める。
    pub fn defender_refs(&self) -> impl Iterator<Item = DefenderRef> {
        let enemies = self.enemies.len() as u32;
        let bosses = self.bosses.len() as u32;
        let parts = self.bosses.parts.len() as u32;
        (0..enemies)
            .map(DefenderRef::Enemy)
            .chain((0..bosses).map(DefenderRef::Boss))
            .chain((0..parts).map(DefenderRef::Part))
    }

    pub fn defender(&self, r: DefenderRef) -> &Body {
        match r {
            DefenderRef::Enemy(i) => &self.enemies.bodies[i as usize],
            DefenderRef::Boss(i) => &self.bosses.bodies[i as usize],
            DefenderRef::Part(i) => &self.bosses.parts[i as usize],
        }
    }

    pub fn is_defender_alive(&self, r: DefenderRef) -> bool {
        self.defender(r).alive
    }

    /// 防御側を即座に死亡扱いにする（同フレーム内の以降の判定は全て短絡する）
    pub fn kill_defender(&mut self, r: DefenderRef) -> bool {
        match r {
            DefenderRef::Enemy(i) => self.enemies.kill(i as usize),
            DefenderRef::Boss(i) => self.bosses.kill(i as usize),
            DefenderRef::Part(i) => self.bosses.kill_part(i as usize),
        }
    }

    /// ボス候補を弾の中心直下のパーツに解決する（パーツがなければ本体のまま）
    pub fn resolve_boss_target(&self, r: DefenderRef, x: f32, y: f32) -> DefenderRef {
        match r {
            DefenderRef::Boss(i) => self
                .bosses
                .part_at(i as usize, x, y)
                .map(|p| DefenderRef::Part(p as u32))
                .unwrap_or(r),
            _ => r,
        }
    }

    pub fn live_defender_count(&self) -> usize {
        self.enemies.count
            + self.bosses.count
            + self.bosses.parts.iter().filter(|p| p.alive).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcade_core::entity_params::{BOSS_ID_DREADNOUGHT, ENEMY_ID_GRUNT};

    #[test]
    fn ids_are_unique_across_kinds() {
        let mut c = BodyCatalog::new(Aabb::new(0.0, 0.0, 32.0, 32.0));
        let e = c.spawn_enemy(Aabb::new(0.0, 0.0, 10.0, 10.0), ENEMY_ID_GRUNT);
        let b = c.spawn_boss(Aabb::new(100.0, 100.0, 192.0, 128.0), BOSS_ID_DREADNOUGHT);
        let s = c.spawn_bullet(Aabb::new(0.0, 0.0, 4.0, 4.0), 0.0, 0.0, 1, BulletOwner::Player);
        let mut ids = vec![c.player.body.id, e, b, s];
        ids.extend(c.bosses.parts.iter().map(|p| p.id));
        let n = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), n);
        assert_eq!(c.bosses.parts.len(), 3);
    }

    #[test]
    fn defender_refs_cover_every_slot() {
        let mut c = BodyCatalog::new(Aabb::new(0.0, 0.0, 32.0, 32.0));
        c.spawn_enemy(Aabb::new(0.0, 0.0, 10.0, 10.0), ENEMY_ID_GRUNT);
        c.spawn_enemy(Aabb::new(20.0, 0.0, 10.0, 10.0), ENEMY_ID_GRUNT);
        c.spawn_boss(Aabb::new(100.0, 100.0, 192.0, 128.0), BOSS_ID_DREADNOUGHT);
        let refs: Vec<_> = c.defender_refs().collect();
        assert_eq!(refs.len(), 2 + 1 + 3);
        assert_eq!(refs[0], DefenderRef::Enemy(0));
        assert_eq!(refs[2], DefenderRef::Boss(0));
        assert_eq!(c.live_defender_count(), 6);
    }

    #[test]
    fn boss_candidate_resolves_to_part_under_point() {
        let mut c = BodyCatalog::new(Aabb::new(0.0, 0.0, 32.0, 32.0));
        c.spawn_boss(Aabb::new(0.0, 0.0, 192.0, 128.0), BOSS_ID_DREADNOUGHT);
        // 左砲台は (8, 40) から 32x32
        assert_eq!(c.resolve_boss_target(DefenderRef::Boss(0), 20.0, 50.0), DefenderRef::Part(0));
        assert_eq!(c.resolve_boss_target(DefenderRef::Boss(0), 100.0, 10.0), DefenderRef::Boss(0));
        assert!(c.kill_defender(DefenderRef::Part(0)));
        assert_eq!(c.resolve_boss_target(DefenderRef::Boss(0), 20.0, 50.0), DefenderRef::Boss(0));
    }
}
