// ==========================================
// 重機日常点検システム - 帳票生成API
// ==========================================
// 検証・出力先の決定・ファイル名の組み立てまでを担う
// 生成エンジンの外側。
// ==========================================

use std::fs;
use std::path::PathBuf;

use chrono::Local;
use tracing::{debug, info};
use uuid::Uuid;

use crate::api::error::{ApiError, ApiResult};
use crate::api::validator::{parse_report_request, validate_report_request};
use crate::config::AppConfig;
use crate::domain::machine::{model_spec, resolve_machine_type};
use crate::domain::ReportRequest;
use crate::report::ReportGenerator;

/// 生成済み帳票の情報
#[derive(Debug, Clone)]
pub struct GeneratedReport {
    /// 保存先のパス
    pub path: PathBuf,
    /// 利用者へ提示するダウンロード名
    pub download_name: String,
}

/// 帳票生成APIの入口
#[derive(Debug)]
pub struct ReportApi {
    config: AppConfig,
    generator: ReportGenerator,
}

impl ReportApi {
    pub fn new(config: AppConfig) -> Self {
        Self { config, generator: ReportGenerator::new() }
    }

    /// JSON文字列から帳票を生成する
    pub fn generate_from_json(&self, json: &str) -> ApiResult<GeneratedReport> {
        let request = parse_report_request(json)?;
        self.generate(&request)
    }

    /// リクエストから帳票を生成する
    ///
    /// # 戻り値
    /// * 保存先とダウンロード名。保存先は設定の出力ディレクトリ配下
    pub fn generate(&self, request: &ReportRequest) -> ApiResult<GeneratedReport> {
        validate_report_request(request)?;

        debug!(
            machine_type = %request.machine_type,
            type_id = resolve_machine_type(&request.machine_type).map(|r| r.type_id),
            model_spec = model_spec(&request.machine_model),
            year = request.year,
            month = request.month,
            "帳票生成を開始"
        );

        let path = self.output_path()?;
        self.generator.render_to_file(request, &path)?;

        let report = GeneratedReport { path, download_name: download_file_name(request) };
        info!(path = %report.path.display(), download_name = %report.download_name, "帳票を生成");
        Ok(report)
    }

    /// 出力先パスを決める
    ///
    /// ファイル名は時刻と乱数で一意にし、並行生成でも衝突しない
    fn output_path(&self) -> ApiResult<PathBuf> {
        let dir = self.config.output_dir();
        fs::create_dir_all(dir)
            .map_err(|e| ApiError::Output(format!("出力ディレクトリを作成できません: {}", e)))?;

        let stamp = Local::now().format("%Y%m%d_%H%M%S");
        let suffix = Uuid::new_v4().simple().to_string();
        Ok(dir.join(format!("inspection_report_{}_{}.xlsx", stamp, &suffix[..8])))
    }
}

/// 利用者へ提示するダウンロード名を組み立てる
///
/// 型式・機械番号の `/` は `_` へ置き換え、全角括弧は取り除く
pub fn download_file_name(request: &ReportRequest) -> String {
    let machine_info = format!("{}_{}", request.machine_model, request.machine_unit)
        .replace('/', "_")
        .replace('（', "")
        .replace('）', "");
    format!("点検表_{}_{}年{}月.xlsx", machine_info, request.year, request.month)
}
