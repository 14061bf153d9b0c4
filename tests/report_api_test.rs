// ==========================================
// 帳票生成API結合テスト
// ==========================================
// 役割: 検証から出力先の決定・保存までの一連の流れを検証する
// ==========================================


#[cfg(test)]
mod report_api_test {
    use kenki_inspection::api::{download_file_name, ApiError, ReportApi};
    use kenki_inspection::{AppConfig, CheckStatus};

    use crate::test_helpers::{record_for_day, sample_request};

    fn api_in(dir: &std::path::Path) -> ReportApi {
        ReportApi::new(AppConfig::with_output_dir(dir))
    }

    #[test]
    fn test_generate_writes_into_configured_dir() {
        let dir = tempfile::tempdir().unwrap();
        let api = api_in(dir.path());

        let mut request = sample_request();
        request.records.push(record_for_day(5, "山田", &[("engine_oil", CheckStatus::Pass)]));
        let report = api.generate(&request).unwrap();

        assert!(report.path.starts_with(dir.path()));
        let name = report.path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("inspection_report_"));
        assert!(name.ends_with(".xlsx"));

        let bytes = std::fs::read(&report.path).unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_generate_twice_yields_distinct_paths() {
        let dir = tempfile::tempdir().unwrap();
        let api = api_in(dir.path());
        let request = sample_request();

        let first = api.generate(&request).unwrap();
        let second = api.generate(&request).unwrap();
        assert_ne!(first.path, second.path);
        assert!(first.path.exists());
        assert!(second.path.exists());
    }

    #[test]
    fn test_generate_from_json_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let api = api_in(dir.path());

        let json = serde_json::to_string(&sample_request()).unwrap();
        let report = api.generate_from_json(&json).unwrap();

        assert!(report.path.exists());
        assert_eq!(report.download_name, "点検表_ZX120コンマ45_1号機_2025年4月.xlsx");
    }

    #[test]
    fn test_download_name_sanitizes_model_and_unit() {
        let mut request = sample_request();
        request.machine_model = "PC78US/10（クレーン仕様）".to_string();
        request.machine_unit = "3号機".to_string();
        let name = download_file_name(&request);
        assert_eq!(name, "点検表_PC78US_10クレーン仕様_3号機_2025年4月.xlsx");
    }

    // ==========================================
    // 検証エラー
    // ==========================================

    #[test]
    fn test_generate_rejects_month_out_of_range() {
        let dir = tempfile::tempdir().unwrap();
        let api = api_in(dir.path());
        let mut request = sample_request();
        request.month = 13;

        let err = api.generate(&request).unwrap_err();
        assert!(matches!(err, ApiError::DataFormat(_)));
        // 出力ディレクトリにファイルは作られない
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_generate_rejects_year_out_of_range() {
        let dir = tempfile::tempdir().unwrap();
        let api = api_in(dir.path());
        let mut request = sample_request();
        request.year = 10000;
        assert!(matches!(api.generate(&request), Err(ApiError::DataFormat(_))));
    }

    #[test]
    fn test_generate_rejects_duplicate_item_codes() {
        let dir = tempfile::tempdir().unwrap();
        let api = api_in(dir.path());
        let mut request = sample_request();
        let duplicated = request.items[0].clone();
        request.items.push(duplicated);

        let err = api.generate(&request).unwrap_err();
        match err {
            ApiError::DataFormat(msg) => assert!(msg.contains("engine_oil")),
            _ => panic!("Expected DataFormat"),
        }
    }

    #[test]
    fn test_generate_from_json_rejects_broken_json() {
        let dir = tempfile::tempdir().unwrap();
        let api = api_in(dir.path());
        let err = api.generate_from_json("{ broken").unwrap_err();
        assert!(matches!(err, ApiError::DataFormat(_)));
    }
}
