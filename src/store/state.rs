// ==========================================
// 重機日常点検システム - 共有状態
// ==========================================
// 点検記録とマスタをプロセス内で保持する。永続化は
// 呼び出し側の責務で、この層はメモリ上の台帳に徹する
// ==========================================

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

use chrono::Local;

use crate::domain::record::{InspectionRecord, MasterEntry};
use crate::domain::types::MasterKind;

/// プロセス内の台帳本体
#[derive(Debug, Default)]
pub struct StoreState {
    /// 点検記録（ID引き）
    pub records: HashMap<String, InspectionRecord>,
    /// 種別ごとのマスタ一覧
    pub masters: BTreeMap<MasterKind, Vec<MasterEntry>>,
}

impl StoreState {
    /// ストア間で共有するための状態を作る
    pub fn shared() -> Arc<Mutex<StoreState>> {
        Arc::new(Mutex::new(StoreState::default()))
    }
}

/// 現在時刻を ISO-8601 文字列で返す
///
/// 記録の時刻はすべてこの形式で持ち、新旧判定は辞書順比較で行う
pub fn now_iso8601() -> String {
    Local::now().naive_local().format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_iso8601_shape() {
        let now = now_iso8601();
        // YYYY-MM-DDTHH:MM:SS.ffffff
        assert_eq!(now.len(), 26);
        assert_eq!(&now[4..5], "-");
        assert_eq!(&now[10..11], "T");
        assert_eq!(&now[19..20], ".");
    }

    #[test]
    fn test_iso8601_orders_lexicographically() {
        let earlier = "2025-01-15T08:00:00.000000";
        let later = "2025-01-15T08:00:01.000000";
        assert!(later > earlier);
        assert!("2025-02-01T00:00:00.000000" > earlier);
    }
}
