// ==========================================
// 重機日常点検システム - 帳票レイアウト定義
// ==========================================
// 作業開始前点検表の固定様式。行・列はすべて 1 起点で、
// ワークブックへ書き出す直前にのみ 0 起点へ変換する
// ==========================================

/// シート名（タブ名）。様式は機種によらず共通
pub const SHEET_TITLE: &str = "油圧ｼｮﾍﾞﾙ";

// ==========================================
// 列の配置
// ==========================================

/// ★（法的要求事項マーク）を置く列
pub const MARK_COL: u16 = 1;
/// 点検項目名の列
pub const ITEM_NAME_COL: u16 = 2;
/// 点検ポイントの列
pub const CHECK_POINT_COL: u16 = 18;
/// 「点検者」縦書きラベルの列。日付列はこの右隣から始まる
pub const INSPECTOR_LABEL_COL: u16 = 38;
/// 罫線で囲む本体の右端列（31日の列）
pub const LAST_COL: u16 = 69;

// ==========================================
// 行の配置
// ==========================================

/// 表題「○月度 ○○ 作業開始前点検表」の行
pub const TITLE_ROW: u32 = 5;
/// 点検項目・点検ポイント・日付ヘッダの行
pub const GRID_HEADER_ROW: u32 = 9;
/// 点検項目の先頭行
pub const FIRST_ITEM_ROW: u32 = 10;
/// 様式に収まる点検項目の上限。超過分は描画しない
pub const MAX_ITEMS: usize = 14;
/// 点検者名（縦書き）の上端行
pub const INSPECTOR_TOP_ROW: u32 = 24;
/// 点検者名（縦書き）の下端行
pub const INSPECTOR_BOTTOM_ROW: u32 = 26;
/// 元請点検責任者確認欄の行
pub const CONFIRM_ROW: u32 = 27;
/// 補修記録ヘッダの行
pub const REPAIR_HEADER_ROW: u32 = 28;
/// 罫線で囲む本体の最終行
pub const LAST_ROW: u32 = 31;

/// 日付から記入列を求める
///
/// 1〜31日はヘッダ「1」〜「31」の直下（AM=39列 〜 BR=69列）に
/// 対応する。様式の範囲外の日付には列が存在しない。
///
/// # 引数
/// * `day` - 点検日（日のみ）
///
/// # 戻り値
/// * 記入列（1起点）。範囲外は None
pub fn day_column(day: i32) -> Option<u16> {
    if (1..=31).contains(&day) {
        Some((INSPECTOR_LABEL_COL as i32 + day) as u16)
    } else {
        None
    }
}

// ==========================================
// 列幅・行高
// ==========================================

/// 列幅の定義。(開始列, 終了列, 幅) の閉区間
pub const COLUMN_WIDTHS: &[(u16, u16, f64)] = &[
    (1, 1, 5.0),   // ★マーク列
    (2, 37, 3.3),  // 項目名〜点検ポイントの細列
    (38, 38, 6.7), // 点検者ラベル列
    (39, 70, 4.5), // 日付列
];

/// 行高の定義。(開始行, 終了行, 高さ) の閉区間
pub const ROW_HEIGHTS: &[(u32, u32, f64)] = &[
    (1, 4, 24.0),  // 工事名・引用法令
    (5, 5, 43.0),  // 表題
    (6, 6, 18.0),
    (7, 7, 31.0),  // 注意書き
    (8, 8, 9.0),
    (9, 26, 32.0), // 点検グリッド本体
    (27, 27, 72.0), // 確認欄・画像添付
    (28, 31, 37.0), // 補修記録
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_column_maps_into_date_band() {
        assert_eq!(day_column(1), Some(39));
        assert_eq!(day_column(15), Some(53));
        assert_eq!(day_column(31), Some(69));
    }

    #[test]
    fn test_day_column_rejects_out_of_range() {
        assert_eq!(day_column(0), None);
        assert_eq!(day_column(-3), None);
        assert_eq!(day_column(32), None);
    }

    #[test]
    fn test_last_day_column_matches_body_edge() {
        assert_eq!(day_column(31), Some(LAST_COL));
    }
}
