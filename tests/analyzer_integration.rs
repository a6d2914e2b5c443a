mod support;

use support::{http::serve_json_once, tonality_env::TonalityEnvGuard};

use std::time::{Duration, Instant};
use tonality::config::{self, AppSettings, ServiceSettings};
use tonality::egui_app::controller::EguiController;
use tonality::sentiment::{
    AnalysisMode, AnalysisOutcome, Language, Sentiment, SentimentStats, SentimentTone,
    format_confidence, split_lines,
};
use tonality::sentiment_api::{AnalysisClient, AnalysisRequest, AnalyzeError};

fn wait_for_idle(controller: &mut EguiController) {
    let deadline = Instant::now() + Duration::from_secs(10);
    while controller.analysis_in_progress() {
        assert!(Instant::now() < deadline, "analysis did not finish");
        controller.poll_background_jobs();
        std::thread::sleep(Duration::from_millis(10));
    }
}

#[test]
fn client_round_trip_through_local_service() {
    let body = r#"{"results":[
        {"line":"Отличный сервис","sentiment":"positive","confidence":0.95},
        {"line":"Так себе","sentiment":"neutral","confidence":0.55},
        {"line":"Ужасно","sentiment":"negative","confidence":0.873}
    ]}"#;
    let (url, request_rx) = serve_json_once(200, body);
    let lines = split_lines("Отличный сервис\r\n\r\n Так себе \nУжасно");
    let client = AnalysisClient::new(ServiceSettings::with_endpoint(url));

    let outcome = client.analyze(&AnalysisRequest::Lines(lines)).unwrap();

    let request = request_rx.recv_timeout(Duration::from_secs(5)).unwrap();
    assert!(request.starts_with("POST /analyze "));
    let AnalysisOutcome::Lines(results) = outcome else {
        panic!("expected line results");
    };
    let stats = SentimentStats::from_results(&results);
    assert_eq!(
        stats,
        SentimentStats {
            total: 3,
            positive: 1,
            negative: 1,
            neutral: 1,
        }
    );
    let last = &results[2];
    let descriptor = last.sentiment.descriptor(Language::Ru);
    assert_eq!(descriptor.label, "Негативный");
    assert_eq!(descriptor.tone, SentimentTone::Red);
    assert_eq!(format_confidence(last.confidence), "87%");
}

#[test]
fn client_rejects_unknown_sentiment_labels() {
    let (url, _) = serve_json_once(
        200,
        r#"{"results":[{"line":"x","sentiment":"ecstatic","confidence":0.9}]}"#,
    );
    let client = AnalysisClient::new(ServiceSettings::with_endpoint(url));
    let err = client
        .analyze(&AnalysisRequest::Lines(vec!["x".into()]))
        .unwrap_err();
    assert!(matches!(err, AnalyzeError::InvalidResponse(_)), "{err}");
}

#[test]
fn controller_uses_persisted_service_settings() {
    let temp = tempfile::tempdir().unwrap();
    let config_home = temp.path().join("config");
    std::fs::create_dir_all(&config_home).unwrap();
    let _env = TonalityEnvGuard::set_config_home(config_home);

    let (url, request_rx) = serve_json_once(200, r#"{"sentiment":"positive","confidence":0.7}"#);
    let mut settings = AppSettings::default();
    settings.service = ServiceSettings::with_endpoint(url);
    settings.ui.mode = AnalysisMode::Text;
    config::save(&settings).unwrap();

    let mut controller = EguiController::load().unwrap();
    assert_eq!(controller.ui.analyzer.mode, AnalysisMode::Text);
    controller.ui.analyzer.text = "What a lovely morning".into();
    assert!(controller.can_analyze());

    controller.analyze();
    assert!(!controller.can_analyze());
    wait_for_idle(&mut controller);

    let request = request_rx.recv_timeout(Duration::from_secs(5)).unwrap();
    assert!(request.ends_with(r#"{"text":"What a lovely morning"}"#));
    let single = controller.ui.results.single.clone().unwrap();
    assert_eq!(single.label, Sentiment::Positive.label(Language::En));
    assert_eq!(single.confidence, "70%");
    assert!(controller.can_analyze());

    controller.set_language(Language::Ru);
    let saved = config::load_or_default().unwrap();
    assert_eq!(saved.ui.language, Language::Ru);
}
