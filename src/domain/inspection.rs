// ==========================================
// 重機日常点検システム - 帳票リクエスト実体
// ==========================================
// フロントエンドと同じ snake_case 表現で授受する
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::types::CheckStatus;

// ==========================================
// 点検項目 (Inspection Item)
// ==========================================

/// 点検項目の定義。様式の1行に対応する
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectionItem {
    /// 項目コード（リクエスト内で一意）
    pub code: String,
    /// 点検項目名
    pub name: String,
    /// 点検ポイント
    pub check_point: String,
    /// 法的要求事項かどうか（様式では★印）
    #[serde(default)]
    pub is_required: bool,
}

// ==========================================
// 日次記録 (Daily Record)
// ==========================================

/// 結果欄の1マス分
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckResult {
    /// 良否。許容表現は取り込み時に正規化される
    #[serde(default)]
    pub is_good: CheckStatus,
}

/// 1日分の点検記録
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyRecord {
    /// 日。1〜31以外は様式の外になるため描画時に無視される
    pub day: i32,
    /// 点検者名
    #[serde(default)]
    pub inspector_name: String,
    /// 項目コード → 結果
    #[serde(default)]
    pub results: HashMap<String, CheckResult>,
}

// ==========================================
// 帳票リクエスト (Report Request)
// ==========================================

/// 帳票生成リクエスト
///
/// 生成に必要な情報をすべて値で持ち、外部状態に依存しない
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRequest {
    /// 機種名（法的根拠と表題の機種名はここから決まる）
    pub machine_type: String,
    /// 型式
    pub machine_model: String,
    /// 機械番号
    pub machine_unit: String,
    /// 工事名（空なら欄は未記入のまま）
    #[serde(default)]
    pub site_name: String,
    /// 所有会社名
    pub company_name: String,
    /// 取扱責任者（点検者）
    pub responsible_person: String,
    /// 元請点検責任者
    pub prime_contractor_inspector: String,
    /// 対象年
    pub year: i32,
    /// 対象月（1〜12）
    pub month: u32,
    /// 点検項目（様式に入るのは先頭14項目）
    #[serde(default)]
    pub items: Vec<InspectionItem>,
    /// 日毎の記録
    #[serde(default)]
    pub records: Vec<DailyRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_parses_permissive_results() {
        let json = r#"{
            "machine_type": "油圧ショベル（コベルコ）",
            "machine_model": "SK200（新型）",
            "machine_unit": "1号機",
            "site_name": "○○造成工事",
            "company_name": "△△建機リース",
            "responsible_person": "山田太郎",
            "prime_contractor_inspector": "佐藤次郎",
            "year": 2025,
            "month": 1,
            "items": [
                {"code": "engine_oil", "name": "エンジンオイル量", "check_point": "適量か", "is_required": true}
            ],
            "records": [
                {"day": 1, "inspector_name": "山田", "results": {"engine_oil": {"is_good": "1"}}},
                {"day": 2, "inspector_name": "山田", "results": {"engine_oil": {"is_good": false}}},
                {"day": 3, "inspector_name": "山田", "results": {"engine_oil": {}}}
            ]
        }"#;

        let request: ReportRequest = serde_json::from_str(json).expect("parse request");
        assert_eq!(request.items.len(), 1);
        assert_eq!(
            request.records[0].results["engine_oil"].is_good,
            CheckStatus::Pass
        );
        assert_eq!(
            request.records[1].results["engine_oil"].is_good,
            CheckStatus::Fail
        );
        assert_eq!(
            request.records[2].results["engine_oil"].is_good,
            CheckStatus::Unset
        );
    }

    #[test]
    fn test_request_missing_required_field_fails() {
        // machine_type がない
        let json = r#"{
            "machine_model": "SK200",
            "machine_unit": "1号機",
            "company_name": "△△建機リース",
            "responsible_person": "山田太郎",
            "prime_contractor_inspector": "佐藤次郎",
            "year": 2025,
            "month": 1
        }"#;
        assert!(serde_json::from_str::<ReportRequest>(json).is_err());
    }

    #[test]
    fn test_request_defaults_for_optional_fields() {
        let json = r#"{
            "machine_type": "ブルドーザー",
            "machine_model": "D61",
            "machine_unit": "2号機",
            "company_name": "△△建機リース",
            "responsible_person": "山田太郎",
            "prime_contractor_inspector": "佐藤次郎",
            "year": 2025,
            "month": 6
        }"#;
        let request: ReportRequest = serde_json::from_str(json).expect("parse request");
        assert!(request.site_name.is_empty());
        assert!(request.items.is_empty());
        assert!(request.records.is_empty());
    }
}
