use super::*;
use crate::sentiment::{AnalysisMode, Language, decode_text, split_lines};
use crate::sentiment_api::AnalysisRequest;
use rfd::FileDialog;
use std::path::Path;

impl EguiController {
    /// True when the analyze action should be enabled.
    pub fn can_analyze(&self) -> bool {
        if self.jobs.analysis_in_progress() {
            return false;
        }
        match self.ui.analyzer.mode {
            AnalysisMode::Lines => self.ui.analyzer.selected_file.is_some(),
            AnalysisMode::Text => !self.ui.analyzer.text.trim().is_empty(),
        }
    }

    pub fn set_mode(&mut self, mode: AnalysisMode) {
        if self.ui.analyzer.mode == mode {
            return;
        }
        self.ui.analyzer.mode = mode;
        self.discard_results();
        self.settings.ui.mode = mode;
        self.persist_settings();
        self.set_status(format!("Mode: {}", mode.caption()), StatusTone::Idle);
    }

    pub fn set_language(&mut self, language: Language) {
        if self.ui.analyzer.language == language {
            return;
        }
        self.ui.analyzer.language = language;
        if let Some(outcome) = self.outcome.as_ref() {
            self.ui.results = view_model::results_state(outcome, language);
        }
        self.settings.ui.language = language;
        self.persist_settings();
    }

    /// Choose the file analyzed in line mode, dropping any previous results.
    pub fn select_file(&mut self, path: PathBuf) {
        self.discard_results();
        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            self.settings.ui.last_file_dir = Some(dir.to_path_buf());
            self.persist_settings();
        }
        tracing::info!("Selected {}", path.display());
        self.set_status(format!("Selected {}", display_name(&path)), StatusTone::Idle);
        self.ui.analyzer.selected_file = Some(path);
    }

    pub fn pick_file_via_dialog(&mut self) {
        let mut dialog = FileDialog::new()
            .set_title("Choose a text file")
            .add_filter("Text documents", &["txt", "doc", "docx"])
            .add_filter("All files", &["*"]);
        if let Some(dir) = self.settings.ui.last_file_dir.as_ref() {
            dialog = dialog.set_directory(dir);
        }
        if let Some(path) = dialog.pick_file() {
            self.select_file(path);
        }
    }

    /// Accept the first file dropped onto the window.
    pub fn handle_dropped_files(&mut self, paths: Vec<PathBuf>) {
        let Some(path) = paths.into_iter().find(|path| path.is_file()) else {
            return;
        };
        if self.ui.analyzer.mode != AnalysisMode::Lines {
            self.set_mode(AnalysisMode::Lines);
        }
        self.select_file(path);
    }

    /// Start an analysis of the current input on a background thread.
    pub fn analyze(&mut self) {
        if !self.can_analyze() {
            return;
        }
        let request = match self.build_request() {
            Ok(request) => request,
            Err(err) => {
                self.fail_analysis(err);
                return;
            }
        };
        self.clear_results();
        self.ui.analyzer.last_error = None;
        let count = match &request {
            AnalysisRequest::Lines(lines) => lines.len(),
            AnalysisRequest::Text(_) => 1,
        };
        let Some(request_id) = self.jobs.begin_analysis(self.client.clone(), request) else {
            return;
        };
        tracing::info!(request_id, count, mode = self.ui.analyzer.mode.as_str(), "Analysis started");
        self.ui.analyzer.loading = true;
        self.set_status("Analyzing…", StatusTone::Busy);
    }

    fn build_request(&self) -> Result<AnalysisRequest, String> {
        match self.ui.analyzer.mode {
            AnalysisMode::Lines => {
                let path = self
                    .ui
                    .analyzer
                    .selected_file
                    .as_ref()
                    .ok_or_else(|| "Choose a file first".to_string())?;
                let lines = read_file_lines(path)?;
                Ok(AnalysisRequest::Lines(lines))
            }
            AnalysisMode::Text => {
                let text = self.ui.analyzer.text.trim();
                if text.is_empty() {
                    return Err("Enter some text first".into());
                }
                Ok(AnalysisRequest::Text(text.to_string()))
            }
        }
    }

    pub(super) fn fail_analysis(&mut self, message: impl Into<String>) {
        let message = message.into();
        self.ui.analyzer.loading = false;
        self.set_status(format!("Analysis failed: {message}"), StatusTone::Error);
        self.ui.analyzer.last_error = Some(message);
    }

    pub(super) fn clear_results(&mut self) {
        self.outcome = None;
        self.ui.results = Default::default();
    }

    /// Clear results and errors; an in-flight request keeps running but its result is dropped.
    fn discard_results(&mut self) {
        if let Some(request_id) = self.jobs.abandon_analysis() {
            tracing::debug!(request_id, "Abandoned in-flight analysis");
        }
        self.ui.analyzer.loading = self.jobs.analysis_in_progress();
        self.ui.analyzer.last_error = None;
        self.clear_results();
    }
}

fn read_file_lines(path: &Path) -> Result<Vec<String>, String> {
    let bytes = std::fs::read(path)
        .map_err(|err| format!("Failed to read {}: {err}", path.display()))?;
    let decoded = decode_text(&bytes);
    if decoded.lossy {
        tracing::warn!(
            "{} is not valid UTF-8; invalid bytes were replaced",
            path.display()
        );
    }
    let lines = split_lines(&decoded.text);
    if lines.is_empty() {
        return Err(format!("{} has no non-empty lines", display_name(path)));
    }
    Ok(lines)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
