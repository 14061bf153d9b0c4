// ==========================================
// 重機日常点検システム - 点検表生成エンジン
// ==========================================
// リクエストを固定様式のグリッドへ展開し、xlsx として
// 書き出す。状態を持たず、同じ入力からは同じ出力を返す
// ==========================================

use std::path::Path;

use rust_xlsxwriter::{
    Color, DocProperties, ExcelDateTime, Format, FormatAlign, FormatBorder, FormatUnderline,
    Workbook,
};
use tracing::{debug, info, warn};

use crate::domain::machine::{citation_for, machine_name_for_title};
use crate::domain::types::CheckStatus;
use crate::domain::ReportRequest;
use crate::report::borders::apply_borders;
use crate::report::error::{ReportError, ReportResult};
use crate::report::grid::{CellSpec, SheetGrid};
use crate::report::layout::{
    day_column, CHECK_POINT_COL, COLUMN_WIDTHS, CONFIRM_ROW, FIRST_ITEM_ROW, GRID_HEADER_ROW,
    INSPECTOR_BOTTOM_ROW, INSPECTOR_LABEL_COL, INSPECTOR_TOP_ROW, ITEM_NAME_COL, LAST_ROW,
    MARK_COL, MAX_ITEMS, REPAIR_HEADER_ROW, ROW_HEIGHTS, SHEET_TITLE, TITLE_ROW,
};
use crate::report::style::{
    CellStyle, HAlign, VAlign, ALIGN_CENTER, ALIGN_CENTER_WRAP, ALIGN_LEFT_BOTTOM,
    ALIGN_LEFT_CENTER, FILL_FAIL_RED, FILL_HEADER_GRAY, FILL_PASS_GREEN, FONT_10, FONT_11_BOLD,
    FONT_12, FONT_14, FONT_14_BOLD, FONT_16, FONT_16_BOLD_UNDERLINE, FONT_18, FONT_18_BOLD,
    FONT_26_BOLD_ITALIC, FONT_FAMILY,
};

/// 法的要求事項の印
pub const REQUIRED_MARK: &str = "★";
/// 良好の印
pub const PASS_MARK: &str = "⚪";
/// 不良の印
pub const FAIL_MARK: &str = "×";

// ==========================================
// 生成エンジン本体
// ==========================================

/// 作業開始前点検表の生成エンジン
#[derive(Debug, Default)]
pub struct ReportGenerator;

impl ReportGenerator {
    pub fn new() -> Self {
        Self
    }

    /// 点検表を生成してファイルへ保存する
    pub fn render_to_file(&self, request: &ReportRequest, path: &Path) -> ReportResult<()> {
        let mut workbook = self.render(request)?;
        workbook.save(path)?;
        info!(path = %path.display(), "帳票ファイルを保存");
        Ok(())
    }

    /// 点検表を生成してバイト列で返す
    pub fn render_to_buffer(&self, request: &ReportRequest) -> ReportResult<Vec<u8>> {
        let mut workbook = self.render(request)?;
        Ok(workbook.save_to_buffer()?)
    }

    /// リクエストをグリッドへ展開する
    ///
    /// 値・書式・結合を先に書き切り、罫線は最後にまとめて適用する。
    pub fn build_grid(&self, request: &ReportRequest) -> SheetGrid {
        let mut grid = SheetGrid::new();
        self.write_header(&mut grid, request);
        self.write_grid_header(&mut grid);
        self.write_item_rows(&mut grid, request);
        self.write_legend_and_inspectors(&mut grid, request);
        self.write_confirmation_row(&mut grid, request);
        self.write_repair_block(&mut grid);
        apply_borders(&mut grid);
        grid
    }

    fn render(&self, request: &ReportRequest) -> ReportResult<Workbook> {
        debug!(
            machine_type = %request.machine_type,
            year = request.year,
            month = request.month,
            item_count = request.items.len(),
            record_count = request.records.len(),
            "帳票グリッドを構築"
        );
        let grid = self.build_grid(request);
        self.materialize(&grid, request)
    }

    // ==========================================
    // ヘッダ部（1〜7行目）
    // ==========================================

    fn write_header(&self, grid: &mut SheetGrid, request: &ReportRequest) {
        // 工事名
        grid.write(1, 1, "工事名", CellStyle::new(FONT_18, ALIGN_LEFT_CENTER));
        grid.merge_write(1, 4, 1, 5, "：", CellStyle::new(FONT_14, ALIGN_CENTER));
        if !request.site_name.is_empty() {
            grid.write(1, 6, request.site_name.as_str(), CellStyle::new(FONT_18, ALIGN_LEFT_CENTER));
        }

        // 引用法令と★の注記
        let citation = citation_for(&request.machine_type);
        grid.write(3, 1, citation.row3, CellStyle::new(FONT_14, ALIGN_LEFT_CENTER));
        if let Some(row4) = citation.row4 {
            grid.write(4, 1, row4, CellStyle::new(FONT_14, ALIGN_LEFT_CENTER));
        }
        grid.write(3, 10, "・★は法的要求事項", CellStyle::new(FONT_14, ALIGN_LEFT_CENTER));
        grid.write(
            4,
            10,
            "・その他は点検すべき事項とみなした箇所",
            CellStyle::new(FONT_14, ALIGN_LEFT_CENTER),
        );

        // 機械情報欄の見出し
        let label_style = CellStyle::new(FONT_11_BOLD, ALIGN_CENTER);
        grid.merge_write(3, 39, 3, 49, "所有会社名", label_style);
        grid.merge_write(3, 50, 3, 56, "取扱責任者（点検者）", label_style);
        grid.merge_write(3, 57, 3, 60, "型式", label_style);
        grid.merge_write(3, 61, 3, 64, "機械番号", label_style);
        grid.merge_write(3, 66, 3, 69, "作業所長確認", label_style);

        // 機械情報欄の値
        let value_style = CellStyle::new(FONT_16, ALIGN_CENTER);
        grid.merge_write(4, 39, 5, 49, request.company_name.as_str(), value_style);
        grid.merge_write(4, 50, 5, 56, request.responsible_person.as_str(), value_style);
        grid.merge_write(4, 57, 5, 60, request.machine_model.as_str(), value_style);
        grid.merge_write(4, 61, 5, 64, request.machine_unit.as_str(), value_style);
        grid.merge(4, 66, 5, 69);

        // 表題
        let title = format!(
            "{}月度　{}　作業開始前点検表",
            request.month,
            machine_name_for_title(&request.machine_type)
        );
        grid.write(TITLE_ROW, 1, title, CellStyle::new(FONT_26_BOLD_ITALIC, ALIGN_LEFT_BOTTOM));

        // 注意書き
        grid.write(
            7,
            1,
            "※点検時、作業時問わず異常を認めたときは、元請点検責任者に報告及び速やかに補修その他必要な措置を取ること",
            CellStyle::new(FONT_16_BOLD_UNDERLINE, ALIGN_LEFT_BOTTOM),
        );
    }

    // ==========================================
    // グリッドヘッダ（9行目）
    // ==========================================

    fn write_grid_header(&self, grid: &mut SheetGrid) {
        let header_style = CellStyle::filled(FONT_14_BOLD, ALIGN_CENTER, FILL_HEADER_GRAY);
        grid.merge_write(GRID_HEADER_ROW, 1, GRID_HEADER_ROW, 17, "点検項目", header_style);
        grid.merge_write(GRID_HEADER_ROW, 18, GRID_HEADER_ROW, 38, "点検ポイント", header_style);

        let day_style = CellStyle::filled(FONT_11_BOLD, ALIGN_CENTER, FILL_HEADER_GRAY);
        for day in 1..=31u16 {
            grid.write(GRID_HEADER_ROW, INSPECTOR_LABEL_COL + day, day.to_string(), day_style);
        }
    }

    // ==========================================
    // 点検項目行（10〜23行目）
    // ==========================================

    fn write_item_rows(&self, grid: &mut SheetGrid, request: &ReportRequest) {
        if request.items.len() > MAX_ITEMS {
            warn!(
                item_count = request.items.len(),
                max_items = MAX_ITEMS,
                "点検項目が様式の行数を超えたため超過分を無視します"
            );
        }

        for (index, item) in request.items.iter().take(MAX_ITEMS).enumerate() {
            let row = FIRST_ITEM_ROW + index as u32;
            if item.is_required {
                grid.write(row, MARK_COL, REQUIRED_MARK, CellStyle::new(FONT_14, ALIGN_CENTER));
            }
            grid.write(row, ITEM_NAME_COL, item.name.as_str(), CellStyle::new(FONT_14, ALIGN_LEFT_CENTER));
            grid.write(
                row,
                CHECK_POINT_COL,
                item.check_point.as_str(),
                CellStyle::new(FONT_14, ALIGN_LEFT_CENTER),
            );

            for record in &request.records {
                let Some(col) = day_column(record.day) else {
                    continue;
                };
                let Some(result) = record.results.get(&item.code) else {
                    continue;
                };
                // 同じ日の記録は後勝ちで、未記入も印と塗り色を打ち消す
                match result.is_good {
                    CheckStatus::Pass => {
                        grid.write(row, col, PASS_MARK, CellStyle::filled(FONT_10, ALIGN_CENTER, FILL_PASS_GREEN));
                    }
                    CheckStatus::Fail => {
                        grid.write(row, col, FAIL_MARK, CellStyle::filled(FONT_10, ALIGN_CENTER, FILL_FAIL_RED));
                    }
                    CheckStatus::Unset => {
                        grid.clear_value(row, col, CellStyle::new(FONT_10, ALIGN_CENTER));
                    }
                }
            }
        }
    }

    // ==========================================
    // 凡例と点検者欄（24〜26行目）
    // ==========================================

    fn write_legend_and_inspectors(&self, grid: &mut SheetGrid, request: &ReportRequest) {
        let legend_style = CellStyle::new(FONT_14, ALIGN_LEFT_CENTER);
        grid.write(INSPECTOR_TOP_ROW, 1, "１．点検時", legend_style);
        grid.write(
            INSPECTOR_TOP_ROW,
            9,
            "良好…○　要調整、修理…×（使用禁止）　・該当なし…－",
            legend_style,
        );
        grid.write(25, 2, "チェック記号", legend_style);
        grid.write(25, 9, "調整または補修したとき…×を○で囲む", legend_style);
        grid.write(
            INSPECTOR_BOTTOM_ROW,
            1,
            "２．元請点検責任者は、毎月上旬・中旬・下旬毎に１回点検状況を確認すること。",
            legend_style,
        );

        grid.merge_write(
            INSPECTOR_TOP_ROW,
            INSPECTOR_LABEL_COL,
            INSPECTOR_BOTTOM_ROW,
            INSPECTOR_LABEL_COL,
            "点\n検\n者",
            CellStyle::new(FONT_12, ALIGN_CENTER_WRAP),
        );

        for record in &request.records {
            let Some(col) = day_column(record.day) else {
                warn!(day = record.day, "日付が様式の範囲外のため記録を無視します");
                continue;
            };
            // 点検者名を1文字ずつ縦に並べる
            let vertical: Vec<String> =
                record.inspector_name.chars().map(String::from).collect();
            grid.merge_write(
                INSPECTOR_TOP_ROW,
                col,
                INSPECTOR_BOTTOM_ROW,
                col,
                vertical.join("\n"),
                CellStyle::new(FONT_10, ALIGN_CENTER_WRAP),
            );
        }
    }

    // ==========================================
    // 元請点検責任者確認欄（27行目）
    // ==========================================

    fn write_confirmation_row(&self, grid: &mut SheetGrid, request: &ReportRequest) {
        grid.merge_write(
            CONFIRM_ROW,
            37,
            CONFIRM_ROW,
            38,
            "元請点検\n責任者\n確認欄",
            CellStyle::new(FONT_10, ALIGN_CENTER_WRAP),
        );

        // 上旬・中旬・下旬の3区画に同じ確認者名を入れる
        let inspector_style = CellStyle::new(FONT_16, ALIGN_CENTER);
        let inspector = request.prime_contractor_inspector.as_str();
        grid.merge_write(CONFIRM_ROW, 39, CONFIRM_ROW, 46, inspector, inspector_style);
        grid.merge_write(CONFIRM_ROW, 49, CONFIRM_ROW, 56, inspector, inspector_style);
        grid.merge_write(CONFIRM_ROW, 59, CONFIRM_ROW, 67, inspector, inspector_style);
        grid.merge(CONFIRM_ROW, 47, CONFIRM_ROW, 48);
        grid.merge(CONFIRM_ROW, 57, CONFIRM_ROW, 58);
        grid.merge(CONFIRM_ROW, 68, CONFIRM_ROW, 69);
    }

    // ==========================================
    // 補修記録と画像添付欄（27〜31行目）
    // ==========================================

    fn write_repair_block(&self, grid: &mut SheetGrid) {
        let header_style = CellStyle::new(FONT_11_BOLD, ALIGN_CENTER);
        grid.merge_write(REPAIR_HEADER_ROW, 37, REPAIR_HEADER_ROW, 57, "補修内容", header_style);
        grid.merge_write(REPAIR_HEADER_ROW, 58, REPAIR_HEADER_ROW, 60, "補修日", header_style);
        grid.merge_write(REPAIR_HEADER_ROW, 61, REPAIR_HEADER_ROW, 63, "補修者", header_style);
        grid.merge_write(
            REPAIR_HEADER_ROW,
            64,
            REPAIR_HEADER_ROW,
            66,
            "元請点検\n責任者",
            CellStyle::new(FONT_11_BOLD, ALIGN_CENTER_WRAP),
        );
        grid.merge_write(REPAIR_HEADER_ROW, 67, REPAIR_HEADER_ROW, 69, "作業所長", header_style);

        // 記入用の空行
        for row in (REPAIR_HEADER_ROW + 1)..=LAST_ROW {
            grid.merge(row, 37, row, 57);
            grid.merge(row, 58, row, 60);
            grid.merge(row, 61, row, 63);
            grid.merge(row, 64, row, 66);
            grid.merge(row, 67, row, 69);
        }

        grid.merge_write(
            CONFIRM_ROW,
            1,
            LAST_ROW,
            36,
            "※重機画像添付※",
            CellStyle::new(FONT_18_BOLD, ALIGN_CENTER),
        );
    }

    // ==========================================
    // ワークブックへの書き出し
    // ==========================================

    fn materialize(&self, grid: &SheetGrid, request: &ReportRequest) -> ReportResult<Workbook> {
        let mut workbook = Workbook::new();

        // 生成日時を対象月の初日に固定し、同一リクエストから同一バイト列を得る。
        // 年月は範囲検査付きで変換し、桁あふれはエラーにする
        let year = u16::try_from(request.year)
            .map_err(|_| ReportError::DataFormat(format!("year を日付へ変換できません: {}", request.year)))?;
        let month = u8::try_from(request.month)
            .map_err(|_| ReportError::DataFormat(format!("month を日付へ変換できません: {}", request.month)))?;
        let created = ExcelDateTime::from_ymd(year, month, 1)?;
        let properties = DocProperties::new()
            .set_title("作業開始前点検表")
            .set_creation_datetime(&created);
        workbook.set_properties(&properties);

        let worksheet = workbook.add_worksheet();
        worksheet.set_name(SHEET_TITLE)?;

        for &(first, last, width) in COLUMN_WIDTHS {
            for col in first..=last {
                worksheet.set_column_width(col - 1, width)?;
            }
        }
        for &(first, last, height) in ROW_HEIGHTS {
            for row in first..=last {
                worksheet.set_row_height(row - 1, height)?;
            }
        }

        // 結合範囲を先に登録する。値と書式は左上セルのものを使う
        for merge in grid.merges() {
            let anchor = grid.cell(merge.first_row, merge.first_col);
            let value = anchor.and_then(|c| c.value.as_deref()).unwrap_or("");
            let format = build_format(anchor);
            worksheet.merge_range(
                merge.first_row - 1,
                merge.first_col - 1,
                merge.last_row - 1,
                merge.last_col - 1,
                value,
                &format,
            )?;
        }

        // 左上セルは結合登録で書き込み済みのため飛ばす。
        // 結合内のその他のセルも書式（罫線）だけは個別に持つ
        for (&(row, col), spec) in grid.cells() {
            let is_merge_anchor = grid.merge_at(row, col).map_or(false, |m| m.is_anchor(row, col));
            if is_merge_anchor {
                continue;
            }
            let format = build_format(Some(spec));
            match &spec.value {
                Some(value) => {
                    worksheet.write_with_format(row - 1, col - 1, value.as_str(), &format)?;
                }
                None => {
                    worksheet.write_blank(row - 1, col - 1, &format)?;
                }
            }
        }

        Ok(workbook)
    }
}

/// セル指定を rust_xlsxwriter の書式へ変換する
fn build_format(spec: Option<&CellSpec>) -> Format {
    let mut format = Format::new().set_font_name(FONT_FAMILY);
    let Some(spec) = spec else {
        return format;
    };
    if let Some(style) = spec.style {
        format = format.set_font_size(style.font.size);
        if style.font.bold {
            format = format.set_bold();
        }
        if style.font.italic {
            format = format.set_italic();
        }
        if style.font.underline {
            format = format.set_underline(FormatUnderline::Single);
        }
        format = match style.align.horizontal {
            HAlign::Left => format.set_align(FormatAlign::Left),
            HAlign::Center => format.set_align(FormatAlign::Center),
        };
        format = match style.align.vertical {
            VAlign::Center => format.set_align(FormatAlign::VerticalCenter),
            VAlign::Bottom => format.set_align(FormatAlign::Bottom),
        };
        if style.align.wrap {
            format = format.set_text_wrap();
        }
        if let Some(fill) = style.fill {
            format = format.set_background_color(Color::RGB(fill));
        }
    }
    if spec.border.top {
        format = format.set_border_top(FormatBorder::Thin);
    }
    if spec.border.left {
        format = format.set_border_left(FormatBorder::Thin);
    }
    if spec.border.bottom {
        format = format.set_border_bottom(FormatBorder::Thin);
    }
    if spec.border.right {
        format = format.set_border_right(FormatBorder::Thin);
    }
    format
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::inspection::{DailyRecord, InspectionItem};
    use std::collections::HashMap;

    fn minimal_request() -> ReportRequest {
        ReportRequest {
            machine_type: "油圧ショベル（バックホウ）".to_string(),
            machine_model: "ZX120（コンマ45）".to_string(),
            machine_unit: "1号機".to_string(),
            site_name: "○○地区造成工事".to_string(),
            company_name: "株式会社テスト建機".to_string(),
            responsible_person: "佐藤".to_string(),
            prime_contractor_inspector: "鈴木".to_string(),
            year: 2025,
            month: 4,
            items: vec![InspectionItem {
                code: "engine_oil".to_string(),
                name: "エンジンオイル".to_string(),
                check_point: "量・汚れ".to_string(),
                is_required: true,
            }],
            records: Vec::new(),
        }
    }

    #[test]
    fn test_title_contains_month_and_machine_name() {
        let grid = ReportGenerator::new().build_grid(&minimal_request());
        assert_eq!(grid.value(TITLE_ROW, 1), Some("4月度　油圧ショベル　作業開始前点検表"));
    }

    #[test]
    fn test_pass_mark_lands_under_day_header() {
        let mut request = minimal_request();
        let mut results = HashMap::new();
        results.insert(
            "engine_oil".to_string(),
            crate::domain::inspection::CheckResult { is_good: CheckStatus::Pass },
        );
        request.records.push(DailyRecord {
            day: 15,
            inspector_name: "山田".to_string(),
            results,
        });

        let grid = ReportGenerator::new().build_grid(&request);
        let col = day_column(15).expect("day 15 in range");
        assert_eq!(grid.value(FIRST_ITEM_ROW, col), Some(PASS_MARK));
        let cell = grid.cell(FIRST_ITEM_ROW, col).expect("cell exists");
        assert_eq!(cell.style.and_then(|s| s.fill), Some(FILL_PASS_GREEN));
    }

    #[test]
    fn test_out_of_range_day_writes_nothing() {
        let mut request = minimal_request();
        request.records.push(DailyRecord {
            day: 0,
            inspector_name: "山田".to_string(),
            results: HashMap::new(),
        });
        let grid = ReportGenerator::new().build_grid(&request);
        // 日付列の帯には項目行の書き込みがない
        for col in 39..=69u16 {
            assert_eq!(grid.value(FIRST_ITEM_ROW, col), None);
        }
    }
}
