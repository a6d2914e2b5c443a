//! Library exports for the desktop app, the CLI and integration tests.
/// Application directory helpers.
pub mod app_dirs;
/// Persisted settings.
pub mod config;
/// Shared egui UI modules.
pub mod egui_app;
/// Shared HTTP agent helpers.
pub mod http_client;
/// Tracing setup.
pub mod logging;
/// Sentiment result model and local processing.
pub mod sentiment;
/// Client for the remote analysis service.
pub mod sentiment_api;
