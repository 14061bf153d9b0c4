// ==========================================
// 重機日常点検システム - CLI 主入口
// ==========================================
// リクエストJSONを読み、作業開始前点検表 (xlsx) を出力する
// 使い方: kenki-inspection <request.json> [output.xlsx]
// ==========================================

use std::path::PathBuf;
use std::process;

use kenki_inspection::api::{parse_report_request, ReportApi};
use kenki_inspection::config::AppConfig;
use kenki_inspection::report::ReportGenerator;
use kenki_inspection::{logging, APP_NAME, VERSION};

fn main() {
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{} - 点検表帳票エンジン", APP_NAME);
    tracing::info!("システムバージョン: {}", VERSION);
    tracing::info!("==================================================");

    let mut args = std::env::args().skip(1);
    let request_path = match args.next() {
        Some(path) => PathBuf::from(path),
        None => {
            eprintln!("使い方: kenki-inspection <request.json> [output.xlsx]");
            process::exit(2);
        }
    };
    let output_path = args.next().map(PathBuf::from);

    let json = match std::fs::read_to_string(&request_path) {
        Ok(json) => json,
        Err(e) => {
            tracing::error!(path = %request_path.display(), error = %e, "リクエストファイルを読み込めません");
            process::exit(1);
        }
    };

    match run(&json, output_path) {
        Ok(path) => {
            tracing::info!(path = %path.display(), "帳票生成完了");
            println!("{}", path.display());
        }
        Err(e) => {
            tracing::error!(error = %e, "帳票生成に失敗");
            process::exit(1);
        }
    }
}

/// 出力先の指定があれば直接そこへ、無ければ設定の出力先へ生成する
fn run(json: &str, output_path: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    match output_path {
        Some(path) => {
            let request = parse_report_request(json)?;
            ReportGenerator::new().render_to_file(&request, &path)?;
            Ok(path)
        }
        None => {
            let api = ReportApi::new(AppConfig::load());
            let report = api.generate_from_json(json)?;
            Ok(report.path)
        }
    }
}
