// ==========================================
// 重機日常点検システム - 帳票罫線定義
// ==========================================
// 罫線は矩形範囲への操作列として表す。操作は定義順に適用し、
// 同じ辺への後続操作が先行操作を上書きする（後勝ち）
// ==========================================

use crate::report::grid::SheetGrid;

/// 1つの辺に対する操作
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EdgeAction {
    /// 細罫線を引く
    Set,
    /// 罫線を消す
    Clear,
    /// 現状を維持する
    Keep,
}

/// 矩形範囲 (閉区間) への罫線操作
#[derive(Debug, Clone, Copy)]
pub struct BorderOp {
    pub rows: (u32, u32),
    pub cols: (u16, u16),
    pub top: EdgeAction,
    pub left: EdgeAction,
    pub bottom: EdgeAction,
    pub right: EdgeAction,
}

impl BorderOp {
    pub const fn new(rows: (u32, u32), cols: (u16, u16)) -> Self {
        Self {
            rows,
            cols,
            top: EdgeAction::Keep,
            left: EdgeAction::Keep,
            bottom: EdgeAction::Keep,
            right: EdgeAction::Keep,
        }
    }

    pub const fn top(mut self, action: EdgeAction) -> Self {
        self.top = action;
        self
    }

    pub const fn left(mut self, action: EdgeAction) -> Self {
        self.left = action;
        self
    }

    pub const fn bottom(mut self, action: EdgeAction) -> Self {
        self.bottom = action;
        self
    }

    pub const fn right(mut self, action: EdgeAction) -> Self {
        self.right = action;
        self
    }
}

use EdgeAction::{Clear, Set};

/// 作業開始前点検表の罫線操作列
///
/// 様式の見た目を決める唯一の情報源。順序に意味があるため
/// 並べ替えてはならない。
pub const BORDER_OPS: &[BorderOp] = &[
    // 点検グリッド本体の外周
    BorderOp::new((9, 9), (1, 69)).top(Set).left(Clear).bottom(Clear).right(Clear),
    BorderOp::new((10, 24), (1, 69)).top(Set),
    BorderOp::new((9, 31), (1, 1)).left(Set),
    BorderOp::new((31, 31), (1, 69)).bottom(Set),
    BorderOp::new((9, 31), (69, 69)).right(Set),
    // 本体の縦仕切り（★列・項目名・点検ポイントの境界）
    BorderOp::new((10, 23), (1, 1)).right(Set),
    BorderOp::new((10, 23), (17, 17)).right(Set),
    BorderOp::new((10, 23), (38, 38)).right(Set),
    // 機械情報ヘッダ欄（所有会社名〜作業所長確認）の横線
    BorderOp::new((2, 3), (38, 64)).bottom(Set),
    BorderOp::new((5, 5), (38, 64)).bottom(Set),
    BorderOp::new((2, 2), (38, 38)).bottom(Clear),
    // 機械情報ヘッダ欄の縦仕切り
    BorderOp::new((3, 5), (38, 38)).right(Set),
    BorderOp::new((3, 5), (49, 49)).right(Set),
    BorderOp::new((3, 5), (56, 56)).right(Set),
    BorderOp::new((3, 5), (60, 60)).right(Set),
    BorderOp::new((3, 5), (64, 64)).right(Set),
    BorderOp::new((3, 5), (65, 65)).right(Set),
    BorderOp::new((3, 5), (69, 69)).right(Set),
    // 凡例ブロックの横線
    BorderOp::new((25, 26), (1, 37)).bottom(Set),
    // 確認欄・補修記録の横線
    BorderOp::new((27, 30), (37, 69)).bottom(Set),
    // 確認欄の縦仕切り
    BorderOp::new((27, 27), (38, 38)).right(Set),
    BorderOp::new((27, 27), (48, 48)).right(Set),
    BorderOp::new((27, 27), (58, 58)).right(Set),
    // 補修記録の縦仕切り
    BorderOp::new((28, 31), (57, 57)).right(Set),
    BorderOp::new((28, 31), (60, 60)).right(Set),
    BorderOp::new((28, 31), (63, 63)).right(Set),
    BorderOp::new((28, 31), (66, 66)).right(Set),
    // 機械情報ヘッダ左端は右線のみ残す
    BorderOp::new((3, 5), (38, 38)).right(Set).top(Clear).left(Clear).bottom(Clear),
    BorderOp::new((3, 3), (38, 38)).right(Set).top(Clear).left(Clear).bottom(Clear),
    // 引用法令・注記ブロックの枠
    BorderOp::new((3, 4), (1, 1)).left(Set),
    BorderOp::new((3, 3), (1, 25)).top(Set),
    BorderOp::new((4, 4), (1, 25)).bottom(Set),
    BorderOp::new((3, 4), (25, 25)).right(Set),
    // 作業所長確認欄の横線
    BorderOp::new((2, 3), (66, 69)).bottom(Set),
    BorderOp::new((5, 5), (66, 69)).bottom(Set),
    // グリッドヘッダ行の縦仕切り
    BorderOp::new((9, 9), (17, 17)).right(Set),
    BorderOp::new((9, 9), (38, 38)).right(Set),
    // 日付列の縦仕切り
    BorderOp::new((9, 26), (38, 68)).right(Set),
    // 点検者ラベル列の両側
    BorderOp::new((24, 26), (38, 38)).left(Set).right(Set),
    // 点検者欄の下線
    BorderOp::new((26, 26), (38, 69)).bottom(Set),
    // 凡例内の仕切り
    BorderOp::new((24, 25), (7, 7)).right(Set),
    // 画像添付欄の内側の線を一度引いてから消す（様式改定の名残）
    BorderOp::new((27, 31), (10, 10)).right(Set),
    BorderOp::new((27, 31), (10, 10)).right(Clear),
    // 画像添付欄の右端
    BorderOp::new((27, 31), (36, 36)).right(Set),
];

/// 罫線操作列をグリッドへ適用する
pub fn apply_borders(grid: &mut SheetGrid) {
    for op in BORDER_OPS {
        for row in op.rows.0..=op.rows.1 {
            for col in op.cols.0..=op.cols.1 {
                let border = &mut grid.cell_mut(row, col).border;
                apply_edge(&mut border.top, op.top);
                apply_edge(&mut border.left, op.left);
                apply_edge(&mut border.bottom, op.bottom);
                apply_edge(&mut border.right, op.right);
            }
        }
    }
}

fn apply_edge(edge: &mut bool, action: EdgeAction) {
    match action {
        EdgeAction::Set => *edge = true,
        EdgeAction::Clear => *edge = false,
        EdgeAction::Keep => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bordered_grid() -> SheetGrid {
        let mut grid = SheetGrid::new();
        apply_borders(&mut grid);
        grid
    }

    #[test]
    fn test_clear_after_set_wins() {
        let grid = bordered_grid();
        // (27,10) は右線を引いた後に消している
        let border = grid.cell(27, 10).expect("cell exists").border;
        assert!(!border.right);
    }

    #[test]
    fn test_header_band_left_edge_keeps_only_right() {
        let grid = bordered_grid();
        let border = grid.cell(3, 38).expect("cell exists").border;
        assert!(border.right);
        assert!(!border.top);
        assert!(!border.left);
        assert!(!border.bottom);
    }

    #[test]
    fn test_body_corner_edges() {
        let grid = bordered_grid();
        let top_left = grid.cell(9, 1).expect("cell exists").border;
        assert!(top_left.top);
        assert!(top_left.left);
        assert!(!top_left.bottom);
        let bottom_left = grid.cell(31, 1).expect("cell exists").border;
        assert!(bottom_left.bottom);
        assert!(bottom_left.left);
        let bottom_right = grid.cell(31, 69).expect("cell exists").border;
        assert!(bottom_right.bottom);
        assert!(bottom_right.right);
    }

    #[test]
    fn test_machine_header_top_cell_bottom_cleared() {
        let grid = bordered_grid();
        let border = grid.cell(2, 38).expect("cell exists").border;
        assert!(!border.bottom);
        // 隣の列は下線が残る
        let neighbor = grid.cell(2, 39).expect("cell exists").border;
        assert!(neighbor.bottom);
    }

    #[test]
    fn test_ops_touch_no_cell_outside_form() {
        let grid = bordered_grid();
        for (&(row, col), _) in grid.cells() {
            assert!(row >= 2 && row <= 31, "行 {} が様式の外", row);
            assert!(col >= 1 && col <= 69, "列 {} が様式の外", col);
        }
    }
}
