// ==========================================
// 重機日常点検システム - API層
// ==========================================
// 外側（CLI・上位アプリ）へ公開する操作の入口
// ==========================================

pub mod error;
pub mod report_api;
pub mod validator;

pub use error::{ApiError, ApiResult};
pub use report_api::{download_file_name, GeneratedReport, ReportApi};
pub use validator::{parse_report_request, validate_report_request};
