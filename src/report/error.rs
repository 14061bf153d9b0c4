// ==========================================
// 重機日常点検システム - 帳票層エラー定義
// ==========================================

use thiserror::Error;

/// 帳票生成で発生するエラー
#[derive(Debug, Error)]
pub enum ReportError {
    /// リクエスト内容が様式に載せられない
    #[error("データ形式エラー: {0}")]
    DataFormat(String),

    /// ファイル入出力の失敗
    #[error("入出力エラー: {0}")]
    Io(#[from] std::io::Error),

    /// ワークブック書き出しの失敗
    #[error("帳票書き出しエラー: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}

/// 帳票層の Result 型
pub type ReportResult<T> = Result<T, ReportError>;
