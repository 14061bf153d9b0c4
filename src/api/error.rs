// ==========================================
// 重機日常点検システム - API層エラー定義
// ==========================================
// 下位層の技術的なエラーを呼び出し側へ返せる形に変換する
// ==========================================

use thiserror::Error;

use crate::report::ReportError;
use crate::store::StoreError;

/// API層のエラー
#[derive(Debug, Error)]
pub enum ApiError {
    /// リクエスト内容の不備
    #[error("データ形式エラー: {0}")]
    DataFormat(String),

    /// 帳票ファイルの出力失敗
    #[error("帳票出力エラー: {0}")]
    Output(String),

    /// 対象が存在しない
    #[error("対象が見つかりません: {0}")]
    NotFound(String),

    /// 登録の重複
    #[error("重複しています: {0}")]
    Conflict(String),

    /// 内部エラー
    #[error("内部エラー: {0}")]
    Internal(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<ReportError> for ApiError {
    fn from(err: ReportError) -> Self {
        match err {
            ReportError::DataFormat(msg) => ApiError::DataFormat(msg),
            ReportError::Io(e) => ApiError::Output(e.to_string()),
            ReportError::Xlsx(e) => ApiError::Output(e.to_string()),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { entity, id } => {
                ApiError::NotFound(format!("{}(id={})", entity, id))
            }
            StoreError::Duplicate(id) => ApiError::Conflict(format!("記録ID {}", id)),
            StoreError::Validation(msg) => ApiError::DataFormat(msg),
            StoreError::Lock(msg) => ApiError::Internal(format!("ロック取得失敗: {}", msg)),
            StoreError::Other(e) => ApiError::Other(e),
        }
    }
}

/// API層の Result 型
pub type ApiResult<T> = Result<T, ApiError>;
