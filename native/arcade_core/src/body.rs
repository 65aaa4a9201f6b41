//! Path: native/arcade_core/src/body.rs
//! Summary: ボディ ID・種類・AABB・Body レコードと幾何ユーティリティ

/// カタログ内で一意なボディ ID
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, PartialOrd, Ord)]
pub struct BodyId(pub u32);

/// ボディの種類
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[repr(u8)]
pub enum BodyKind {
    Player   = 0,
    Enemy    = 1,
    Bullet   = 2,
    Boss     = 3,
    BossPart = 4,
    PowerUp  = 5,
}

impl BodyKind {
    /// グリッドに登録される防御側（被弾する側）か
    pub fn is_defender(self) -> bool {
        matches!(self, Self::Enemy | Self::Boss | Self::BossPart)
    }
}

/// 軸並行バウンディングボックス（x, y は左上）
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Aabb {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.w * 0.5, self.y + self.h * 0.5)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.w.is_finite() && self.h.is_finite()
    }

    /// 重なり判定（辺が接するだけの場合は重ならない扱い）
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.x < other.x + other.w
            && other.x < self.x + self.w
            && self.y < other.y + other.h
            && other.y < self.y + self.h
    }

    /// 点が AABB 内にあるか（境界を含む）
    pub fn contains_point(&self, px: f32, py: f32) -> bool {
        px >= self.x && px <= self.x + self.w && py >= self.y && py <= self.y + self.h
    }

    /// 四辺を `margin` だけ広げた AABB
    pub fn expanded(&self, margin: f32) -> Self {
        Self {
            x: self.x - margin,
            y: self.y - margin,
            w: self.w + margin * 2.0,
            h: self.h + margin * 2.0,
        }
    }

    /// `(dx, dy)` だけ平行移動
    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.x += dx;
        self.y += dy;
    }
}

/// 衝突判定の対象となるボディ
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Body {
    pub id:    BodyId,
    pub kind:  BodyKind,
    pub aabb:  Aabb,
    pub scale: f32,
    pub alive: bool,
}

impl Body {
    pub fn new(id: BodyId, kind: BodyKind, aabb: Aabb) -> Self {
        Self { id, kind, aabb, scale: 1.0, alive: true }
    }

    pub fn center(&self) -> (f32, f32) {
        self.aabb.center()
    }

    /// 有効半径 = min(w, h) * scale / 2
    pub fn radius(&self) -> f32 {
        self.aabb.w.min(self.aabb.h) * self.scale * 0.5
    }

    /// NaN / inf を含むジオメトリは即座に無効化する対象
    pub fn has_valid_geometry(&self) -> bool {
        self.aabb.is_finite() && self.scale.is_finite()
    }
}

/// 二乗距離（sqrt を避けて高速化）
#[inline]
pub fn dist_sq(x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    let dx = x1 - x2;
    let dy = y1 - y2;
    dx * dx + dy * dy
}

/// 円-円判定（接しているだけでは当たらない）
#[inline]
pub fn circles_overlap(a: &Body, b: &Body) -> bool {
    let (ax, ay) = a.center();
    let (bx, by) = b.center();
    let hit_r = a.radius() + b.radius();
    dist_sq(ax, ay, bx, by) < hit_r * hit_r
}

/// 軸ごとの安価な事前棄却を挟んでから円-円判定する
#[inline]
pub fn circles_overlap_prechecked(a: &Body, b: &Body) -> bool {
    let (ax, ay) = a.center();
    let (bx, by) = b.center();
    let hit_r = a.radius() + b.radius();
    let dx = ax - bx;
    let dy = ay - by;
    if dx.abs() > hit_r || dy.abs() > hit_r {
        return false;
    }
    dx * dx + dy * dy < hit_r * hit_r
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(x: f32, y: f32, w: f32, h: f32) -> Body {
        Body::new(BodyId(1), BodyKind::Enemy, Aabb::new(x, y, w, h))
    }

    #[test]
    fn radius_uses_shorter_side_and_scale() {
        let mut b = body(0.0, 0.0, 40.0, 20.0);
        assert!((b.radius() - 10.0).abs() < 0.001);
        b.scale = 2.0;
        assert!((b.radius() - 20.0).abs() < 0.001);
    }

    #[test]
    fn touching_edges_do_not_overlap() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let b = Aabb::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&b));
        assert!(a.overlaps(&Aabb::new(9.0, 9.0, 5.0, 5.0)));
    }

    #[test]
    fn precheck_agrees_with_exact_test() {
        let a = body(0.0, 0.0, 20.0, 20.0);
        for &(x, y) in &[(15.0, 0.0), (19.0, 19.0), (30.0, 0.0), (0.0, 14.0), (-25.0, 5.0)] {
            let b = body(x, y, 20.0, 20.0);
            assert_eq!(circles_overlap(&a, &b), circles_overlap_prechecked(&a, &b));
        }
    }

    #[test]
    fn nan_geometry_is_invalid() {
        let mut b = body(f32::NAN, 0.0, 10.0, 10.0);
        assert!(!b.has_valid_geometry());
        b.aabb.x = 0.0;
        b.scale = f32::INFINITY;
        assert!(!b.has_valid_geometry());
    }
}
