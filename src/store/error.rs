// ==========================================
// 重機日常点検システム - 記録層エラー定義
// ==========================================

use thiserror::Error;

/// 記録層で発生するエラー
#[derive(Debug, Error)]
pub enum StoreError {
    /// 指定された記録・マスタ項目が存在しない
    #[error("記録が見つかりません: {entity} id={id}")]
    NotFound { entity: &'static str, id: String },

    /// IDの重複登録
    #[error("記録IDが重複しています: {0}")]
    Duplicate(String),

    /// 入力内容の不備
    #[error("検証エラー: {0}")]
    Validation(String),

    /// 共有状態のロック取得失敗
    #[error("ロック取得失敗: {0}")]
    Lock(String),

    /// その他のエラー
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// 記録層の Result 型
pub type StoreResult<T> = Result<T, StoreError>;
