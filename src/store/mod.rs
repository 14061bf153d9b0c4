// ==========================================
// 重機日常点検システム - 記録層
// ==========================================
// プロセス内台帳（点検記録・マスタ）とその操作。
// 永続化は呼び出し側の責務。帳票層はこの層に依存しない
// ==========================================

pub mod error;
pub mod master_store;
pub mod record_store;
pub mod state;
pub mod sync;

pub use error::{StoreError, StoreResult};
pub use master_store::MasterListStore;
pub use record_store::InspectionRecordStore;
pub use state::StoreState;
pub use sync::SyncReport;
