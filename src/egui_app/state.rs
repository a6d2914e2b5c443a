//! Shared state types for the egui UI.

use std::path::PathBuf;

use egui::Color32;

use crate::egui_app::ui::style::{self, StatusTone};
use crate::egui_app::view_model::{ResultRowView, SingleResultView};
use crate::sentiment::{AnalysisMode, Language, SentimentStats};

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub status: StatusBarState,
    pub analyzer: AnalyzerUiState,
    pub results: ResultsUiState,
}

/// Status badge + text shown in the footer.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusBarState {
    pub text: String,
    pub badge_label: String,
    pub badge_color: Color32,
}

impl StatusBarState {
    pub fn idle() -> Self {
        Self {
            text: "Pick a file or paste text to analyze".into(),
            badge_label: StatusTone::Idle.label().into(),
            badge_color: style::status_badge_color(StatusTone::Idle),
        }
    }
}

impl Default for StatusBarState {
    fn default() -> Self {
        Self::idle()
    }
}

/// Input side of the analyzer card.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnalyzerUiState {
    pub mode: AnalysisMode,
    pub language: Language,
    /// File analyzed in line mode.
    pub selected_file: Option<PathBuf>,
    /// Free text analyzed in text mode.
    pub text: String,
    /// True while a request is in flight.
    pub loading: bool,
    /// Message for the last failed analysis.
    pub last_error: Option<String>,
}

impl AnalyzerUiState {
    /// Display name of the selected file.
    pub fn selected_file_name(&self) -> Option<String> {
        self.selected_file.as_ref().map(|path| {
            path.file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string())
        })
    }
}

/// Rendered results of the last successful analysis.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResultsUiState {
    /// Per-line rows in line mode.
    pub rows: Vec<ResultRowView>,
    /// Counts for the rows above.
    pub stats: Option<SentimentStats>,
    /// The single result in text mode.
    pub single: Option<SingleResultView>,
}

impl ResultsUiState {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() && self.single.is_none()
    }
}
