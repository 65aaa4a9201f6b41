//! Path: native/arcade_core/src/physics/spatial_grid.rs
//! Summary: 一様グリッドによる空間分割（AABB 挿入・矩形クエリ・重複排除）
//!
//! 毎フレーム clear → insert で作り直す前提。セル配列はワールドサイズが
//! 変わってセル数が変化したときだけ再確保する。クエリの重複排除は
//! 世代スタンプ配列で行い、呼び出しごとのアロケーションはない。

use crate::body::Aabb;
use crate::constants::MAX_GRID_CELLS;

fn axis_cells(extent: f32, cell_size: f32) -> usize {
    if !extent.is_finite() || extent <= 0.0 || !(cell_size.is_finite() && cell_size > 0.0) {
        return 1;
    }
    // f32 -> usize は飽和キャスト
    ((extent / cell_size).ceil() as usize).saturating_add(1)
}

/// ワールドサイズに対する (列数, 行数)。上限の判定は呼び出し側で行う。
pub fn grid_dims(width: f32, height: f32, cell_size: f32) -> (usize, usize) {
    (axis_cells(width, cell_size), axis_cells(height, cell_size))
}

pub struct SpatialGrid<T: Copy> {
    cell_size: f32,
    cols:      usize,
    rows:      usize,
    /// セルごとの要素インデックス（`items` への添字）
    cells:     Vec<Vec<u32>>,
    items:     Vec<T>,
    bounds:    Vec<Aabb>,
    /// 要素ごとの最終訪問世代。`stamp` と一致すれば今回のクエリで訪問済み
    stamps:    Vec<u32>,
    stamp:     u32,
    /// `query` が返す再利用バッファ
    result:    Vec<T>,
}

impl<T: Copy> SpatialGrid<T> {
    /// `cell_size` は正の有限値であること（`CollisionConfig::validate` で保証）
    pub fn new(cell_size: f32, width: f32, height: f32) -> Self {
        let mut grid = Self {
            cell_size,
            cols:   0,
            rows:   0,
            cells:  Vec::new(),
            items:  Vec::new(),
            bounds: Vec::new(),
            stamps: Vec::new(),
            stamp:  0,
            result: Vec::new(),
        };
        grid.resize(width, height);
        grid
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// 登録済み要素数
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// ワールドサイズからセル数を再計算する。
    /// セル総数が変わったときだけ再確保し、同サイズのフレームでは何もしない。
    pub fn resize(&mut self, width: f32, height: f32) {
        let (mut cols, mut rows) = grid_dims(width, height, self.cell_size);
        if cols.checked_mul(rows).map_or(true, |n| n > MAX_GRID_CELLS) {
            // 範囲外の要素は端のセルに寄せられるので、縮めても判定は壊れない
            log::warn!("spatial grid: {}x{} cells exceeds cap {}, clamping", cols, rows, MAX_GRID_CELLS);
            cols = cols.min(MAX_GRID_CELLS);
            rows = rows.min(MAX_GRID_CELLS / cols).max(1);
        }
        if cols == self.cols && rows == self.rows {
            return;
        }
        self.cols = cols;
        self.rows = rows;
        let n = cols * rows;
        if n != self.cells.len() {
            log::debug!("spatial grid realloc: {}x{} cells (was {})", cols, rows, self.cells.len());
            self.cells = vec![Vec::new(); n];
        }
        self.clear();
    }

    /// 全セルを空にする（容量は保持）。O(セル総数)
    pub fn clear(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.clear();
        }
        self.items.clear();
        self.bounds.clear();
        self.stamps.clear();
    }

    /// AABB が跨ぐ全セルに `item` を追加する。非有限な AABB は登録しない。
    pub fn insert(&mut self, item: T, aabb: Aabb) -> bool {
        if !aabb.is_finite() {
            return false;
        }
        let (c0, c1, r0, r1) = self.cell_range(&aabb);
        let idx = self.items.len() as u32;
        self.items.push(item);
        self.bounds.push(aabb);
        self.stamps.push(0);
        for r in r0..=r1 {
            let row = r * self.cols;
            for c in c0..=c1 {
                self.cells[row + c].push(idx);
            }
        }
        true
    }

    /// 矩形と重なる要素を内部バッファに集めて返す（重複なし・セル走査順）
    pub fn query(&mut self, x: f32, y: f32, w: f32, h: f32) -> &[T] {
        let mut buf = std::mem::take(&mut self.result);
        self.query_into(x, y, w, h, &mut buf);
        self.result = buf;
        &self.result
    }

    /// 矩形と重なる要素を `buf` に書き込む（アロケーションなし）。
    /// 呼び出し前に `buf` をクリアする必要はない（内部で `clear()` する）。
    pub fn query_into(&mut self, x: f32, y: f32, w: f32, h: f32, buf: &mut Vec<T>) {
        buf.clear();
        let rect = Aabb::new(x, y, w, h);
        if !rect.is_finite() || self.items.is_empty() {
            return;
        }
        let stamp = self.next_stamp();
        let (c0, c1, r0, r1) = self.cell_range(&rect);
        for r in r0..=r1 {
            let row = r * self.cols;
            for c in c0..=c1 {
                for &idx in &self.cells[row + c] {
                    let i = idx as usize;
                    if self.stamps[i] == stamp {
                        continue;
                    }
                    self.stamps[i] = stamp;
                    if self.bounds[i].overlaps(&rect) {
                        buf.push(self.items[i]);
                    }
                }
            }
        }
    }

    fn next_stamp(&mut self) -> u32 {
        if self.stamp == u32::MAX {
            self.stamps.iter_mut().for_each(|s| *s = 0);
            self.stamp = 0;
        }
        self.stamp += 1;
        self.stamp
    }

    /// グリッド範囲にクランプしたセル範囲 (c0, c1, r0, r1)
    fn cell_range(&self, aabb: &Aabb) -> (usize, usize, usize, usize) {
        let c0 = self.clamp_axis(aabb.x, self.cols);
        let c1 = self.clamp_axis(aabb.x + aabb.w.max(0.0), self.cols);
        let r0 = self.clamp_axis(aabb.y, self.rows);
        let r1 = self.clamp_axis(aabb.y + aabb.h.max(0.0), self.rows);
        (c0, c1, r0, r1)
    }

    fn clamp_axis(&self, v: f32, n: usize) -> usize {
        let cell = (v / self.cell_size).floor();
        if cell <= 0.0 {
            0
        } else {
            (cell as usize).min(n - 1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sorted(mut v: Vec<u32>) -> Vec<u32> {
        v.sort_unstable();
        v
    }

    #[test]
    fn dimensions_follow_cell_size() {
        let grid: SpatialGrid<u32> = SpatialGrid::new(120.0, 800.0, 600.0);
        assert_eq!(grid.cols(), 8);
        assert_eq!(grid.rows(), 6);
    }

    #[test]
    fn oversized_world_is_clamped_to_cell_cap() {
        let mut grid: SpatialGrid<u32> = SpatialGrid::new(120.0, 1e30, 1e30);
        assert!(grid.cols() * grid.rows() <= MAX_GRID_CELLS);
        assert!(grid.insert(1, Aabb::new(1e6, 1e6, 10.0, 10.0)));
        assert_eq!(grid.query(1e6, 1e6, 10.0, 10.0), &[1]);
    }

    #[test]
    fn corner_scenario() {
        let mut grid = SpatialGrid::new(120.0, 800.0, 600.0);
        grid.insert(1u32, Aabb::new(0.0, 0.0, 40.0, 40.0));
        grid.insert(2u32, Aabb::new(760.0, 560.0, 40.0, 40.0));
        grid.insert(3u32, Aabb::new(400.0, 300.0, 40.0, 40.0));

        assert_eq!(grid.query(0.0, 0.0, 100.0, 100.0), &[1]);
        assert_eq!(sorted(grid.query(0.0, 0.0, 420.0, 320.0).to_vec()), vec![1, 3]);
        assert_eq!(grid.query(700.0, 500.0, 200.0, 200.0), &[2]);
    }

    #[test]
    fn body_spanning_many_cells_is_returned_once() {
        let mut grid = SpatialGrid::new(50.0, 500.0, 500.0);
        grid.insert(7u32, Aabb::new(10.0, 10.0, 300.0, 300.0));
        let mut buf = Vec::new();
        grid.query_into(0.0, 0.0, 500.0, 500.0, &mut buf);
        assert_eq!(buf, vec![7]);
    }

    #[test]
    fn clear_empties_every_query() {
        let mut grid = SpatialGrid::new(64.0, 640.0, 480.0);
        for i in 0..20u32 {
            grid.insert(i, Aabb::new(i as f32 * 30.0, i as f32 * 20.0, 16.0, 16.0));
        }
        grid.clear();
        assert!(grid.is_empty());
        assert!(grid.query(-1000.0, -1000.0, 5000.0, 5000.0).is_empty());
    }

    #[test]
    fn out_of_bounds_ranges_are_clamped() {
        let mut grid = SpatialGrid::new(100.0, 300.0, 300.0);
        grid.insert(1u32, Aabb::new(-500.0, -500.0, 20.0, 20.0));
        grid.insert(2u32, Aabb::new(5000.0, 5000.0, 20.0, 20.0));
        assert_eq!(grid.query(-510.0, -510.0, 40.0, 40.0), &[1]);
        assert_eq!(grid.query(4990.0, 4990.0, 40.0, 40.0), &[2]);
        assert!(grid.query(150.0, 150.0, 10.0, 10.0).is_empty());
    }

    #[test]
    fn non_finite_input_is_rejected() {
        let mut grid = SpatialGrid::new(100.0, 300.0, 300.0);
        assert!(!grid.insert(1u32, Aabb::new(f32::NAN, 0.0, 10.0, 10.0)));
        assert!(grid.is_empty());
        grid.insert(2u32, Aabb::new(0.0, 0.0, 10.0, 10.0));
        assert!(grid.query(f32::NAN, 0.0, 10.0, 10.0).is_empty());
    }

    #[test]
    fn resize_keeps_cells_when_count_is_unchanged() {
        let mut grid: SpatialGrid<u32> = SpatialGrid::new(100.0, 400.0, 200.0);
        let cells_ptr = grid.cells.as_ptr();
        grid.resize(400.0, 200.0);
        assert_eq!(grid.cells.as_ptr(), cells_ptr);
        // 5x3 → 3x5: セル総数は同じなので再確保しない
        grid.resize(200.0, 400.0);
        assert_eq!((grid.cols(), grid.rows()), (3, 5));
        assert_eq!(grid.cells.as_ptr(), cells_ptr);
        grid.resize(900.0, 900.0);
        assert_eq!(grid.cells.len(), 100);
    }

    proptest! {
        #[test]
        fn query_matches_brute_force(
            boxes in prop::collection::vec((-100.0f32..900.0, -100.0f32..700.0, 0.5f32..250.0, 0.5f32..250.0), 0..60),
            q in (-150.0f32..900.0, -150.0f32..700.0, 0.0f32..400.0, 0.0f32..400.0),
        ) {
            let mut grid = SpatialGrid::new(120.0, 800.0, 600.0);
            for (i, &(x, y, w, h)) in boxes.iter().enumerate() {
                grid.insert(i as u32, Aabb::new(x, y, w, h));
            }
            let rect = Aabb::new(q.0, q.1, q.2, q.3);
            let expected: Vec<u32> = boxes
                .iter()
                .enumerate()
                .filter(|(_, b)| Aabb::new(b.0, b.1, b.2, b.3).overlaps(&rect))
                .map(|(i, _)| i as u32)
                .collect();
            let got = sorted(grid.query(q.0, q.1, q.2, q.3).to_vec());
            prop_assert_eq!(got, expected);
        }
    }
}
