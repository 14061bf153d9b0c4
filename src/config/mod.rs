// ==========================================
// 重機日常点検システム - 設定層
// ==========================================
// 出力先など実行環境ごとの設定。設定ファイルが無い・壊れて
// いる場合は既定値で動く
// ==========================================

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// アプリケーション設定
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// 帳票ファイルの出力先ディレクトリ
    #[serde(default = "default_output_dir")]
    output_dir: PathBuf,
}

fn default_output_dir() -> PathBuf {
    env::temp_dir()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { output_dir: default_output_dir() }
    }
}

impl AppConfig {
    /// 既定の設定ファイルパス
    ///
    /// `<設定ディレクトリ>/kenki-inspection/config.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("kenki-inspection").join("config.json"))
    }

    /// 既定の場所から設定を読み込む。無ければ既定値
    pub fn load() -> Self {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Self::default(),
        }
    }

    /// 指定ファイルから設定を読み込む
    ///
    /// 読み込めない・解釈できない場合は警告を出して既定値に
    /// 落とす。設定の不備で帳票生成を止めない。
    pub fn load_from(path: &Path) -> Self {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "設定ファイルを読み込めないため既定値を使用");
                return Self::default();
            }
        };
        match serde_json::from_str(&text) {
            Ok(config) => {
                debug!(path = %path.display(), "設定ファイルを読み込み");
                config
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "設定ファイルを解釈できないため既定値を使用");
                Self::default()
            }
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// 出力先を差し替えた設定を作る
    pub fn with_output_dir(dir: impl Into<PathBuf>) -> Self {
        Self { output_dir: dir.into() }
    }
}
