// ==========================================
// 重機日常点検システム - リクエスト検証
// ==========================================
// 様式に載せられないリクエストを生成前に弾く。
// 日付の範囲外や未知の項目コードはここでは弾かず、
// 描画時に無視する（様式の空欄として扱う）
// ==========================================

use std::collections::HashSet;

use crate::api::error::{ApiError, ApiResult};
use crate::domain::ReportRequest;

/// 対象年の下限
pub const YEAR_MIN: i32 = 1900;
/// 対象年の上限
pub const YEAR_MAX: i32 = 9999;

/// 帳票リクエストを検証する
///
/// # 戻り値
/// - `Ok(())`: 生成に進んでよい
/// - `Err(ApiError::DataFormat)`: 内容に不備がある
pub fn validate_report_request(request: &ReportRequest) -> ApiResult<()> {
    if !(1..=12).contains(&request.month) {
        return Err(ApiError::DataFormat(format!(
            "month は 1〜12 で指定してください: {}",
            request.month
        )));
    }
    if !(YEAR_MIN..=YEAR_MAX).contains(&request.year) {
        return Err(ApiError::DataFormat(format!(
            "year は {}〜{} で指定してください: {}",
            YEAR_MIN, YEAR_MAX, request.year
        )));
    }

    let mut seen = HashSet::new();
    for item in &request.items {
        if !seen.insert(item.code.as_str()) {
            return Err(ApiError::DataFormat(format!(
                "点検項目コードが重複しています: {}",
                item.code
            )));
        }
    }

    Ok(())
}

/// JSON文字列からリクエストを読み取り、検証まで行う
pub fn parse_report_request(json: &str) -> ApiResult<ReportRequest> {
    let request: ReportRequest = serde_json::from_str(json)
        .map_err(|e| ApiError::DataFormat(format!("リクエストを解釈できません: {}", e)))?;
    validate_report_request(&request)?;
    Ok(request)
}
