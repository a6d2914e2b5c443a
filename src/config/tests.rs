use super::*;
use crate::sentiment::{AnalysisMode, Language};
use tempfile::tempdir;

#[test]
fn missing_file_yields_defaults() {
    let dir = tempdir().unwrap();
    let settings = load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(settings, AppSettings::default());
}

#[test]
fn saves_and_reloads_ui_preferences() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join(CONFIG_FILE_NAME);
    let mut settings = AppSettings::default();
    settings.ui.mode = AnalysisMode::Text;
    settings.ui.language = Language::Ru;
    settings.ui.last_file_dir = Some(std::path::PathBuf::from("docs"));
    save_to_path(&settings, &path).unwrap();

    let loaded = load_from(&path).unwrap();
    assert_eq!(loaded, settings);
    let leftovers = std::fs::read_dir(path.parent().unwrap())
        .unwrap()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_name().to_string_lossy().contains(".tmp-"))
        .count();
    assert_eq!(leftovers, 0);
}

#[test]
fn partial_file_fills_remaining_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(
        &path,
        r#"
[service]
base_url = "http://127.0.0.1:9000"

[ui]
mode = "single-text"
"#,
    )
    .unwrap();
    let loaded = load_from(&path).unwrap();
    assert_eq!(loaded.service.base_url, "http://127.0.0.1:9000");
    assert_eq!(loaded.service.text_path, "/api/analyze-sentiment");
    assert_eq!(loaded.ui.mode, AnalysisMode::Text);
    assert_eq!(loaded.ui.language, Language::En);
}

#[test]
fn out_of_range_values_are_clamped() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(
        &path,
        "[service]\nconnect_timeout_secs = 0\nread_timeout_secs = 100000\nmax_response_bytes = 1\n",
    )
    .unwrap();
    let loaded = load_from(&path).unwrap();
    assert_eq!(loaded.service.connect_timeout_secs, 1);
    assert_eq!(loaded.service.read_timeout_secs, 600);
    assert_eq!(loaded.service.max_response_bytes, 1024);
}

#[test]
fn invalid_toml_reports_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, "[ui\nmode = ").unwrap();
    let err = load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseToml { .. }));
    assert!(err.to_string().contains(CONFIG_FILE_NAME));
}

#[test]
fn default_endpoints_resolve_against_base() {
    let service = ServiceSettings::default();
    assert_eq!(
        service.endpoint(AnalysisMode::Lines).unwrap().as_str(),
        "https://functions.poehali.dev/87cb021e-3df1-4f71-b0d8-4df60822b25e"
    );
    assert_eq!(
        service.endpoint(AnalysisMode::Text).unwrap().as_str(),
        "https://functions.poehali.dev/api/analyze-sentiment"
    );
}

#[test]
fn absolute_mode_path_overrides_base() {
    let service = ServiceSettings {
        text_path: "http://localhost:8080/analyze".to_string(),
        ..ServiceSettings::default()
    };
    assert_eq!(
        service.endpoint(AnalysisMode::Text).unwrap().as_str(),
        "http://localhost:8080/analyze"
    );
}

#[test]
fn load_or_default_reads_from_app_dir() {
    let dir = tempdir().unwrap();
    let _guard = crate::app_dirs::ConfigBaseGuard::set(dir.path().to_path_buf());
    let mut settings = AppSettings::default();
    settings.ui.language = Language::Ru;
    save(&settings).unwrap();
    assert!(config_path().unwrap().starts_with(dir.path()));
    assert_eq!(load_or_default().unwrap().ui.language, Language::Ru);
}
