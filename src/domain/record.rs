// ==========================================
// 重機日常点検システム - 点検記録台帳の実体
// ==========================================
// 端末同期APIと同じ camelCase 表現で授受する。
// 時刻は ISO-8601 文字列のまま持ち、新旧判定は辞書順比較で行う
// ==========================================

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ==========================================
// 点検記録 (Inspection Record)
// ==========================================

/// 保存済みの点検記録
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectionRecord {
    /// 記録ID（端末側で採番した不透明なID）
    pub id: String,
    /// 対象機械のID
    pub machine_id: String,
    /// 現場名
    #[serde(default)]
    pub site_name: String,
    /// 点検者名
    pub inspector_name: String,
    /// 点検日 (YYYY-MM-DD)
    pub inspection_date: String,
    /// 結果ペイロード。ストアは中身に関知しない
    #[serde(default)]
    pub results: Value,
    /// 作成時刻 (ISO-8601)
    #[serde(default)]
    pub created_at: String,
    /// 更新時刻 (ISO-8601)
    #[serde(default)]
    pub updated_at: String,
}

/// 新規作成ペイロード。時刻はストア側で付与する
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInspectionRecord {
    pub id: String,
    pub machine_id: String,
    #[serde(default)]
    pub site_name: String,
    pub inspector_name: String,
    pub inspection_date: String,
    #[serde(default)]
    pub results: Value,
}

/// 更新ペイロード。対象IDは呼び出しで指定する
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordUpdate {
    pub machine_id: String,
    #[serde(default)]
    pub site_name: String,
    pub inspector_name: String,
    pub inspection_date: String,
    #[serde(default)]
    pub results: Value,
}

// ==========================================
// マスタ項目 (Master Entry)
// ==========================================

/// マスタの1項目。表示順は追加順に採番される
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MasterEntry {
    pub name: String,
    pub sort_order: i64,
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_wire_shape_is_camel_case() {
        let json = r#"{
            "id": "rec-001",
            "machineId": "excavator_01",
            "siteName": "○○造成工事",
            "inspectorName": "山田",
            "inspectionDate": "2025-01-15",
            "results": {"engine_oil": {"is_good": true}},
            "createdAt": "2025-01-15T08:00:00",
            "updatedAt": "2025-01-15T08:30:00"
        }"#;
        let record: InspectionRecord = serde_json::from_str(json).expect("parse record");
        assert_eq!(record.machine_id, "excavator_01");
        assert_eq!(record.updated_at, "2025-01-15T08:30:00");

        let encoded = serde_json::to_string(&record).expect("serialize record");
        assert!(encoded.contains("\"machineId\""));
        assert!(encoded.contains("\"inspectionDate\""));
    }

    #[test]
    fn test_record_timestamps_default_to_empty() {
        let json = r#"{
            "id": "rec-002",
            "machineId": "excavator_01",
            "inspectorName": "山田",
            "inspectionDate": "2025-01-16",
            "results": {}
        }"#;
        let record: InspectionRecord = serde_json::from_str(json).expect("parse record");
        assert!(record.created_at.is_empty());
        assert!(record.updated_at.is_empty());
        assert!(record.site_name.is_empty());
    }
}
