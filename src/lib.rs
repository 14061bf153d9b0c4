// ==========================================
// 重機日常点検システム - コアライブラリ
// ==========================================
// 技術スタック: Rust + rust_xlsxwriter
// 役割: 作業開始前点検表の帳票生成と点検記録の同期管理
// ==========================================

// ==========================================
// モジュール宣言
// ==========================================

// 領域層 - 実体と型
pub mod domain;

// 帳票層 - レイアウトエンジン
pub mod report;

// 記録層 - 点検記録・マスタの保管と同期
pub mod store;

// 設定層 - システム設定
pub mod config;

// ログ基盤
pub mod logging;

// API層 - 業務インターフェース
pub mod api;

// ==========================================
// コア型の再エクスポート
// ==========================================

// 領域型
pub use domain::types::{CheckStatus, MasterKind};

// 領域実体
pub use domain::{
    DailyRecord, InspectionItem, InspectionRecord, MasterEntry, NewInspectionRecord,
    RecordUpdate, ReportRequest,
};

// 機種規則
pub use domain::machine::{machine_name_for_title, model_spec, MachineTypeRule};

// 帳票エンジン
pub use report::{ReportError, ReportGenerator, SheetGrid};

// 記録ストア
pub use store::{
    InspectionRecordStore, MasterListStore, StoreError, StoreState, SyncReport,
};

// API
pub use api::{ApiError, GeneratedReport, ReportApi};

// 設定
pub use config::AppConfig;

// ==========================================
// 定数定義
// ==========================================

// システムバージョン
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// システム名称
pub const APP_NAME: &str = "重機日常点検システム";

// ==========================================
// コンパイル時チェック
// ==========================================
