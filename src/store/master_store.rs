// ==========================================
// 重機日常点検システム - マスタ一覧ストア
// ==========================================
// 現場・点検者・所有会社の選択肢を種別ごとに管理する。
// 現場マスタの削除はその現場の点検記録も道連れにする
// ==========================================

use std::sync::{Arc, Mutex, MutexGuard};

use tracing::info;

use crate::domain::record::MasterEntry;
use crate::domain::types::MasterKind;
use crate::store::error::{StoreError, StoreResult};
use crate::store::state::{now_iso8601, StoreState};

/// マスタ一覧のストア
#[derive(Debug, Clone)]
pub struct MasterListStore {
    state: Arc<Mutex<StoreState>>,
}

impl MasterListStore {
    pub fn new(state: Arc<Mutex<StoreState>>) -> Self {
        Self { state }
    }

    fn lock_state(&self) -> StoreResult<MutexGuard<'_, StoreState>> {
        self.state.lock().map_err(|e| StoreError::Lock(e.to_string()))
    }

    /// マスタ項目を追加する
    ///
    /// 名称は前後の空白を除いて扱う。同名の項目が既にあれば
    /// そのまま返す（冪等）。表示順は追加順に採番する。
    pub fn add(&self, kind: MasterKind, name: &str) -> StoreResult<MasterEntry> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::Validation(format!("{}の名称が空です", kind.label())));
        }

        let mut state = self.lock_state()?;
        let entries = state.masters.entry(kind).or_default();
        if let Some(existing) = entries.iter().find(|e| e.name == name) {
            return Ok(existing.clone());
        }

        let next_order = entries.iter().map(|e| e.sort_order).max().unwrap_or(0) + 1;
        let entry = MasterEntry {
            name: name.to_string(),
            sort_order: next_order,
            created_at: now_iso8601(),
        };
        entries.push(entry.clone());
        info!(kind = %kind, name = %entry.name, sort_order = entry.sort_order, "マスタ項目を追加");
        Ok(entry)
    }

    /// 種別のマスタ名称を表示順で返す
    pub fn list(&self, kind: MasterKind) -> StoreResult<Vec<String>> {
        let state = self.lock_state()?;
        let mut entries = state.masters.get(&kind).cloned().unwrap_or_default();
        entries.sort_by(|a, b| a.sort_order.cmp(&b.sort_order).then_with(|| a.name.cmp(&b.name)));
        Ok(entries.into_iter().map(|e| e.name).collect())
    }

    /// マスタ項目を削除する
    ///
    /// 現場マスタの場合は、その現場名を持つ点検記録も併せて
    /// 削除する。マスタに無い名称は NotFound を返し、記録には
    /// 触れない。
    ///
    /// # 戻り値
    /// * 道連れで削除した点検記録の件数
    pub fn remove(&self, kind: MasterKind, name: &str) -> StoreResult<usize> {
        let mut state = self.lock_state()?;

        let removed = match state.masters.get_mut(&kind) {
            Some(entries) => {
                let before = entries.len();
                entries.retain(|e| e.name != name);
                before - entries.len()
            }
            None => 0,
        };
        if removed == 0 {
            return Err(StoreError::NotFound { entity: kind.label(), id: name.to_string() });
        }

        let mut cascaded = 0;
        if kind == MasterKind::Site {
            let before = state.records.len();
            state.records.retain(|_, record| record.site_name != name);
            cascaded = before - state.records.len();
        }

        if cascaded > 0 {
            info!(site = %name, record_count = cascaded, "現場マスタ削除に伴い点検記録を削除");
        }
        info!(kind = %kind, name = %name, "マスタ項目を削除");
        Ok(cascaded)
    }
}
