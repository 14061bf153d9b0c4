// ==========================================
// 重機日常点検システム - 領域モデル層
// ==========================================
// 帳票リクエスト・点検記録・機種ルールなど、
// 層をまたいで共有する型をここに集約する
// ==========================================

pub mod inspection;
pub mod machine;
pub mod record;
pub mod types;

pub use inspection::{CheckResult, DailyRecord, InspectionItem, ReportRequest};
pub use machine::{LegalCitation, MachineTypeRule, DEFAULT_CITATION, MACHINE_TYPE_RULES};
pub use record::{InspectionRecord, MasterEntry, NewInspectionRecord, RecordUpdate};
pub use types::{CheckStatus, MasterKind};
