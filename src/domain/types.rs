// ==========================================
// 重機日常点検システム - 領域型定義
// ==========================================
// 点検結果の三値表現とマスタ種別
// 外部表現の揺れは境界でここの正規形へ揃える
// ==========================================

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

// ==========================================
// 点検結果 (Check Status)
// ==========================================
// 三値: 良好 / 不良 / 未記入
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckStatus {
    Pass,
    Fail,
    #[default]
    Unset,
}

impl CheckStatus {
    /// 外部入力の許容表現から正規化する
    ///
    /// # 引数
    /// - value: JSON値。true / "true" / "1" / 1 は良好、
    ///   false / "false" / "0" / 0 は不良
    ///
    /// # 戻り値
    /// - 上記いずれにも該当しない値は Unset
    pub fn from_permissive(value: &Value) -> Self {
        match value {
            Value::Bool(true) => CheckStatus::Pass,
            Value::Bool(false) => CheckStatus::Fail,
            Value::String(s) if s == "true" || s == "1" => CheckStatus::Pass,
            Value::String(s) if s == "false" || s == "0" => CheckStatus::Fail,
            Value::Number(n) if n.as_i64() == Some(1) => CheckStatus::Pass,
            Value::Number(n) if n.as_i64() == Some(0) => CheckStatus::Fail,
            _ => CheckStatus::Unset,
        }
    }
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckStatus::Pass => write!(f, "PASS"),
            CheckStatus::Fail => write!(f, "FAIL"),
            CheckStatus::Unset => write!(f, "UNSET"),
        }
    }
}

// 正規形は true / false / null で書き出す
impl Serialize for CheckStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            CheckStatus::Pass => serializer.serialize_bool(true),
            CheckStatus::Fail => serializer.serialize_bool(false),
            CheckStatus::Unset => serializer.serialize_none(),
        }
    }
}

// 境界アダプタ: 許容表現の正規化はこの一箇所に集約する
impl<'de> Deserialize<'de> for CheckStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(CheckStatus::from_permissive(&value))
    }
}

// ==========================================
// マスタ種別 (Master Kind)
// ==========================================
// 現場 / 点検者 / 所有会社 の3系統
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MasterKind {
    Site,
    Inspector,
    Company,
}

impl fmt::Display for MasterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MasterKind::Site => write!(f, "site"),
            MasterKind::Inspector => write!(f, "inspector"),
            MasterKind::Company => write!(f, "company"),
        }
    }
}

impl MasterKind {
    /// 文字列から種別を解析する（単数形・複数形とも可）
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "site" | "sites" => Some(MasterKind::Site),
            "inspector" | "inspectors" => Some(MasterKind::Inspector),
            "company" | "companies" => Some(MasterKind::Company),
            _ => None,
        }
    }

    /// 日本語ラベル
    pub fn label(&self) -> &'static str {
        match self {
            MasterKind::Site => "現場",
            MasterKind::Inspector => "点検者",
            MasterKind::Company => "所有会社",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_permissive_pass_forms() {
        for value in [json!(true), json!("true"), json!("1"), json!(1)] {
            assert_eq!(CheckStatus::from_permissive(&value), CheckStatus::Pass);
        }
    }

    #[test]
    fn test_permissive_fail_forms() {
        for value in [json!(false), json!("false"), json!("0"), json!(0)] {
            assert_eq!(CheckStatus::from_permissive(&value), CheckStatus::Fail);
        }
    }

    #[test]
    fn test_permissive_unknown_forms_are_unset() {
        for value in [json!(null), json!("yes"), json!(2), json!(1.5), json!([1])] {
            assert_eq!(CheckStatus::from_permissive(&value), CheckStatus::Unset);
        }
    }

    #[test]
    fn test_status_roundtrip_via_serde() {
        let statuses: Vec<CheckStatus> = serde_json::from_str(r#"[true, "1", false, "0", null, "?"]"#)
            .expect("deserialize statuses");
        assert_eq!(
            statuses,
            vec![
                CheckStatus::Pass,
                CheckStatus::Pass,
                CheckStatus::Fail,
                CheckStatus::Fail,
                CheckStatus::Unset,
                CheckStatus::Unset,
            ]
        );

        let encoded = serde_json::to_string(&statuses).expect("serialize statuses");
        assert_eq!(encoded, "[true,true,false,false,null,null]");
    }

    #[test]
    fn test_master_kind_parse() {
        assert_eq!(MasterKind::from_str("sites"), Some(MasterKind::Site));
        assert_eq!(MasterKind::from_str("inspector"), Some(MasterKind::Inspector));
        assert_eq!(MasterKind::from_str("companies"), Some(MasterKind::Company));
        assert_eq!(MasterKind::from_str("machines"), None);
    }
}
