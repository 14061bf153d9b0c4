// ==========================================
// 重機日常点検システム - 帳票層
// ==========================================
// 固定様式（レイアウト・書式・罫線）と生成エンジン。
// 記録層には依存せず、リクエスト1件だけを入力に取る
// ==========================================

pub mod borders;
pub mod error;
pub mod generator;
pub mod grid;
pub mod layout;
pub mod style;

pub use borders::{apply_borders, BorderOp, EdgeAction, BORDER_OPS};
pub use error::{ReportError, ReportResult};
pub use generator::ReportGenerator;
pub use grid::{CellSpec, EdgeSet, MergeRange, SheetGrid};
