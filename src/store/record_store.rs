// ==========================================
// 重機日常点検システム - 点検記録ストア
// ==========================================

use std::sync::{Arc, Mutex, MutexGuard};

use tracing::info;

use crate::domain::record::{InspectionRecord, NewInspectionRecord, RecordUpdate};
use crate::store::error::{StoreError, StoreResult};
use crate::store::state::{now_iso8601, StoreState};

/// 点検記録のCRUDと同期マージを担うストア
///
/// 状態は `Arc<Mutex<StoreState>>` で共有し、複数のストアや
/// スレッドから同時に使える。
#[derive(Debug, Clone)]
pub struct InspectionRecordStore {
    state: Arc<Mutex<StoreState>>,
}

impl InspectionRecordStore {
    pub fn new(state: Arc<Mutex<StoreState>>) -> Self {
        Self { state }
    }

    /// 共有状態のロックを取得する
    pub(crate) fn lock_state(&self) -> StoreResult<MutexGuard<'_, StoreState>> {
        self.state.lock().map_err(|e| StoreError::Lock(e.to_string()))
    }

    /// 点検記録を新規登録する
    ///
    /// 作成時刻・更新時刻はストア側で付与する。
    ///
    /// # 戻り値
    /// * 登録された記録。IDが既存なら `Duplicate`
    pub fn create(&self, new_record: NewInspectionRecord) -> StoreResult<InspectionRecord> {
        let mut state = self.lock_state()?;
        if state.records.contains_key(&new_record.id) {
            return Err(StoreError::Duplicate(new_record.id));
        }

        let now = now_iso8601();
        let record = InspectionRecord {
            id: new_record.id,
            machine_id: new_record.machine_id,
            site_name: new_record.site_name,
            inspector_name: new_record.inspector_name,
            inspection_date: new_record.inspection_date,
            results: new_record.results,
            created_at: now.clone(),
            updated_at: now,
        };
        state.records.insert(record.id.clone(), record.clone());
        info!(record_id = %record.id, machine_id = %record.machine_id, "点検記録を登録");
        Ok(record)
    }

    /// IDで記録を引く
    pub fn find_by_id(&self, id: &str) -> StoreResult<Option<InspectionRecord>> {
        let state = self.lock_state()?;
        Ok(state.records.get(id).cloned())
    }

    /// 記録を更新する。更新時刻はストア側で付け直す
    pub fn update(&self, id: &str, update: RecordUpdate) -> StoreResult<InspectionRecord> {
        let mut state = self.lock_state()?;
        let record = state.records.get_mut(id).ok_or_else(|| StoreError::NotFound {
            entity: "点検記録",
            id: id.to_string(),
        })?;

        record.machine_id = update.machine_id;
        record.site_name = update.site_name;
        record.inspector_name = update.inspector_name;
        record.inspection_date = update.inspection_date;
        record.results = update.results;
        record.updated_at = now_iso8601();

        info!(record_id = %id, "点検記録を更新");
        Ok(record.clone())
    }

    /// 記録を削除する
    pub fn delete(&self, id: &str) -> StoreResult<()> {
        let mut state = self.lock_state()?;
        if state.records.remove(id).is_none() {
            return Err(StoreError::NotFound { entity: "点検記録", id: id.to_string() });
        }
        info!(record_id = %id, "点検記録を削除");
        Ok(())
    }

    /// 全記録を点検日の降順（同日は作成時刻の降順）で返す
    pub fn list_all(&self) -> StoreResult<Vec<InspectionRecord>> {
        let state = self.lock_state()?;
        let mut records: Vec<InspectionRecord> = state.records.values().cloned().collect();
        records.sort_by(|a, b| {
            b.inspection_date
                .cmp(&a.inspection_date)
                .then_with(|| b.created_at.cmp(&a.created_at))
        });
        Ok(records)
    }

    /// 登録件数
    pub fn count(&self) -> StoreResult<usize> {
        let state = self.lock_state()?;
        Ok(state.records.len())
    }
}
