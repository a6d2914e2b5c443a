use super::jobs::{AnalysisFinish, AnalysisJobResult, JobMessage};
use super::*;
use crate::sentiment::SentimentStats;

impl EguiController {
    /// Drain finished background work; call once per frame.
    pub fn poll_background_jobs(&mut self) {
        loop {
            let message = match self.jobs.try_recv_message() {
                Ok(message) => message,
                Err(
                    std::sync::mpsc::TryRecvError::Empty
                    | std::sync::mpsc::TryRecvError::Disconnected,
                ) => break,
            };
            match message {
                JobMessage::AnalysisFinished(result) => self.handle_analysis_finished(result),
            }
        }
    }

    /// True while an analysis request is in flight.
    pub fn analysis_in_progress(&self) -> bool {
        self.jobs.analysis_in_progress()
    }

    pub(super) fn handle_analysis_finished(&mut self, message: AnalysisJobResult) {
        match self.jobs.finish_analysis(message.request_id) {
            AnalysisFinish::Current => {}
            AnalysisFinish::Abandoned => {
                tracing::debug!(
                    request_id = message.request_id,
                    "Dropping result of abandoned analysis"
                );
                self.ui.analyzer.loading = false;
                self.set_status("Ready", StatusTone::Idle);
                return;
            }
            AnalysisFinish::Unknown => {
                tracing::debug!(
                    request_id = message.request_id,
                    current = ?self.jobs.in_flight_request(),
                    "Dropping stale analysis result"
                );
                return;
            }
        }
        self.ui.analyzer.loading = false;
        match message.result {
            Ok(outcome) => {
                let language = self.ui.analyzer.language;
                self.ui.results = view_model::results_state(&outcome, language);
                let summary = match &outcome {
                    AnalysisOutcome::Lines(results) if results.is_empty() => {
                        "No results returned".to_string()
                    }
                    AnalysisOutcome::Lines(results) => {
                        let stats = SentimentStats::from_results(results);
                        format!(
                            "Analyzed {} lines: {} positive, {} negative, {} neutral",
                            stats.total, stats.positive, stats.negative, stats.neutral
                        )
                    }
                    AnalysisOutcome::Text(result) => {
                        format!("Text is {}", result.sentiment.label(language))
                    }
                };
                tracing::info!(request_id = message.request_id, "{summary}");
                self.outcome = Some(outcome);
                self.ui.analyzer.last_error = None;
                self.set_status(summary, StatusTone::Info);
            }
            Err(err) => {
                tracing::warn!(request_id = message.request_id, "Analysis failed: {err}");
                self.fail_analysis(err.to_string());
            }
        }
    }
}
