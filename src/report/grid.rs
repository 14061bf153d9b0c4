// ==========================================
// 重機日常点検システム - 帳票グリッド
// ==========================================
// 書き出し前の中間表現。セルの値・書式・罫線と結合範囲を
// 1 起点の座標で保持し、決定的な順序で列挙できる
// ==========================================

use std::collections::BTreeMap;

use crate::report::style::CellStyle;

// ==========================================
// セルの構成要素
// ==========================================

/// セル四辺の罫線の有無
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EdgeSet {
    pub top: bool,
    pub left: bool,
    pub bottom: bool,
    pub right: bool,
}

/// グリッド上の1セル。値・書式・罫線は独立に設定できる
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CellSpec {
    pub value: Option<String>,
    pub style: Option<CellStyle>,
    pub border: EdgeSet,
}

/// セル結合の範囲（閉区間）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MergeRange {
    pub first_row: u32,
    pub first_col: u16,
    pub last_row: u32,
    pub last_col: u16,
}

impl MergeRange {
    /// 指定セルがこの結合範囲に含まれるか
    pub fn contains(&self, row: u32, col: u16) -> bool {
        (self.first_row..=self.last_row).contains(&row)
            && (self.first_col..=self.last_col).contains(&col)
    }

    /// 指定セルが結合範囲の左上（値を保持するセル）か
    pub fn is_anchor(&self, row: u32, col: u16) -> bool {
        row == self.first_row && col == self.first_col
    }
}

// ==========================================
// シートグリッド
// ==========================================

/// 1シート分のセル集合
///
/// BTreeMap を使うことで走査順が (行, 列) の昇順に固定され、
/// 同じリクエストから常に同じワークブックが得られる。
#[derive(Debug, Clone, Default)]
pub struct SheetGrid {
    cells: BTreeMap<(u32, u16), CellSpec>,
    merges: Vec<MergeRange>,
}

impl SheetGrid {
    pub fn new() -> Self {
        Self::default()
    }

    /// セルへ値と書式を書き込む。既存の値・書式は上書きする
    pub fn write(&mut self, row: u32, col: u16, value: impl Into<String>, style: CellStyle) {
        let cell = self.cell_mut(row, col);
        cell.value = Some(value.into());
        cell.style = Some(style);
    }

    /// 値を消去し、書式を設定し直す。セルは空欄へ戻る
    pub fn clear_value(&mut self, row: u32, col: u16, style: CellStyle) {
        let cell = self.cell_mut(row, col);
        cell.value = None;
        cell.style = Some(style);
    }

    /// セル結合を登録する。同一範囲の重複登録は無視する
    pub fn merge(&mut self, first_row: u32, first_col: u16, last_row: u32, last_col: u16) {
        let range = MergeRange { first_row, first_col, last_row, last_col };
        if !self.merges.contains(&range) {
            self.merges.push(range);
        }
    }

    /// 結合範囲を登録し、左上セルへ値と書式を書き込む
    pub fn merge_write(
        &mut self,
        first_row: u32,
        first_col: u16,
        last_row: u32,
        last_col: u16,
        value: impl Into<String>,
        style: CellStyle,
    ) {
        self.merge(first_row, first_col, last_row, last_col);
        self.write(first_row, first_col, value, style);
    }

    /// セルを取得し、なければ空セルを作る
    pub fn cell_mut(&mut self, row: u32, col: u16) -> &mut CellSpec {
        self.cells.entry((row, col)).or_default()
    }

    pub fn cell(&self, row: u32, col: u16) -> Option<&CellSpec> {
        self.cells.get(&(row, col))
    }

    /// セルの値を参照する
    pub fn value(&self, row: u32, col: u16) -> Option<&str> {
        self.cells.get(&(row, col)).and_then(|c| c.value.as_deref())
    }

    /// (行, 列) 昇順でセルを列挙する
    pub fn cells(&self) -> impl Iterator<Item = (&(u32, u16), &CellSpec)> {
        self.cells.iter()
    }

    pub fn merges(&self) -> &[MergeRange] {
        &self.merges
    }

    /// 指定セルを含む結合範囲を探す
    pub fn merge_at(&self, row: u32, col: u16) -> Option<&MergeRange> {
        self.merges.iter().find(|m| m.contains(row, col))
    }

    /// 指定セルがいずれかの結合範囲に含まれるか
    pub fn has_merge(&self, row: u32, col: u16) -> bool {
        self.merge_at(row, col).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::style::{ALIGN_CENTER, CellStyle, FILL_PASS_GREEN, FONT_10};

    #[test]
    fn test_write_then_read_back() {
        let mut grid = SheetGrid::new();
        grid.write(3, 5, "テスト", CellStyle::new(FONT_10, ALIGN_CENTER));
        assert_eq!(grid.value(3, 5), Some("テスト"));
        assert_eq!(grid.value(3, 6), None);
    }

    #[test]
    fn test_duplicate_merge_registered_once() {
        let mut grid = SheetGrid::new();
        grid.merge(24, 40, 26, 40);
        grid.merge(24, 40, 26, 40);
        assert_eq!(grid.merges().len(), 1);
        assert!(grid.has_merge(25, 40));
        assert!(!grid.has_merge(25, 41));
    }

    #[test]
    fn test_clear_value_removes_value_and_fill() {
        let mut grid = SheetGrid::new();
        grid.write(10, 44, "⚪", CellStyle::filled(FONT_10, ALIGN_CENTER, FILL_PASS_GREEN));
        grid.clear_value(10, 44, CellStyle::new(FONT_10, ALIGN_CENTER));

        let cell = grid.cell(10, 44).expect("cell exists");
        assert!(cell.value.is_none());
        assert!(cell.style.is_some());
        assert_eq!(cell.style.and_then(|s| s.fill), None);
    }

    #[test]
    fn test_clear_value_on_fresh_cell_is_style_only() {
        let mut grid = SheetGrid::new();
        grid.clear_value(10, 39, CellStyle::new(FONT_10, ALIGN_CENTER));
        let cell = grid.cell(10, 39).expect("cell exists");
        assert!(cell.value.is_none());
        assert!(cell.style.is_some());
    }

    #[test]
    fn test_cell_mut_creates_default() {
        let mut grid = SheetGrid::new();
        grid.cell_mut(9, 1).border.top = true;
        let cell = grid.cell(9, 1).expect("cell exists");
        assert!(cell.border.top);
        assert!(!cell.border.bottom);
        assert!(cell.value.is_none());
    }

    #[test]
    fn test_cells_iterate_in_row_major_order() {
        let mut grid = SheetGrid::new();
        grid.write(2, 9, "b", CellStyle::new(FONT_10, ALIGN_CENTER));
        grid.write(1, 30, "a", CellStyle::new(FONT_10, ALIGN_CENTER));
        grid.write(2, 3, "c", CellStyle::new(FONT_10, ALIGN_CENTER));
        let keys: Vec<_> = grid.cells().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec![(1, 30), (2, 3), (2, 9)]);
    }
}
