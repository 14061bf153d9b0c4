// ==========================================
// 重機日常点検システム - 端末同期マージ
// ==========================================
// 端末から届いた記録の束をLWW（更新時刻の新しい方優先）で
// 台帳へ取り込む。時刻は ISO-8601 文字列の辞書順で比較する
// ==========================================

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::record::InspectionRecord;
use crate::store::error::StoreResult;
use crate::store::record_store::InspectionRecordStore;
use crate::store::state::now_iso8601;

/// 同期マージの内訳
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncReport {
    /// 新規に取り込んだ件数
    pub created: usize,
    /// 台帳側を上書きした件数
    pub updated: usize,
    /// 台帳側が新しく、取り込まなかった件数
    pub conflicts: usize,
}

impl InspectionRecordStore {
    /// 端末からの記録を台帳へマージする
    ///
    /// # 引数
    /// * `incoming` - 端末側の記録（時刻は端末で付与済み）
    ///
    /// # 戻り値
    /// * マージの内訳と、マージ後の全記録（点検日の降順)
    pub fn sync_merge(
        &self,
        incoming: Vec<InspectionRecord>,
    ) -> StoreResult<(SyncReport, Vec<InspectionRecord>)> {
        let mut report = SyncReport::default();

        {
            let mut state = self.lock_state()?;
            for mut record in incoming {
                let stored_meta = state
                    .records
                    .get(&record.id)
                    .map(|stored| (stored.updated_at.clone(), stored.created_at.clone()));

                match stored_meta {
                    None => {
                        // 未知のIDは欠けた時刻だけを現在時刻で補完して取り込む
                        let now = now_iso8601();
                        if record.created_at.is_empty() {
                            record.created_at = now.clone();
                        }
                        if record.updated_at.is_empty() {
                            record.updated_at = now;
                        }
                        state.records.insert(record.id.clone(), record);
                        report.created += 1;
                    }
                    Some((stored_updated, stored_created)) => {
                        if record.updated_at > stored_updated {
                            // 作成時刻は台帳側のものを保つ
                            record.created_at = stored_created;
                            state.records.insert(record.id.clone(), record);
                            report.updated += 1;
                        } else {
                            report.conflicts += 1;
                        }
                    }
                }
            }
        }

        info!(
            created = report.created,
            updated = report.updated,
            conflicts = report.conflicts,
            "同期マージ完了"
        );
        Ok((report, self.list_all()?))
    }
}
