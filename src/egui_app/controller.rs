//! Maintains app state and bridges the analysis pipeline to the egui UI.

mod analyzer;
mod background_jobs;
pub(crate) mod jobs;
mod settings;


use std::path::PathBuf;

use crate::config::{self, AppSettings, ConfigError};
use crate::egui_app::state::UiState;
use crate::egui_app::ui::style::{self, StatusTone};
use crate::egui_app::view_model;
use crate::sentiment::AnalysisOutcome;
use crate::sentiment_api::AnalysisClient;

use self::jobs::ControllerJobs;

pub struct EguiController {
    pub ui: UiState,
    settings: AppSettings,
    /// Where settings are persisted; `None` keeps them in memory only.
    config_path: Option<PathBuf>,
    client: AnalysisClient,
    jobs: ControllerJobs,
    outcome: Option<AnalysisOutcome>,
}

impl EguiController {
    /// Build a controller from settings without persisting changes.
    pub fn new(settings: AppSettings) -> Self {
        let mut ui = UiState::default();
        ui.analyzer.mode = settings.ui.mode;
        ui.analyzer.language = settings.ui.language;
        Self {
            ui,
            client: AnalysisClient::new(settings.service.clone()),
            settings,
            config_path: None,
            jobs: ControllerJobs::new(),
            outcome: None,
        }
    }

    /// Load persisted settings from the app directory; later changes are saved back.
    pub fn load() -> Result<Self, ConfigError> {
        let path = config::config_path()?;
        let settings = config::load_from(&path)?;
        tracing::info!(
            mode = settings.ui.mode.as_str(),
            base_url = %settings.service.base_url,
            "Loaded settings from {}",
            path.display()
        );
        Ok(Self::new(settings).with_config_path(path))
    }

    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Open the folder holding log files in the OS file browser.
    pub fn open_logs_folder(&mut self) {
        let result = crate::app_dirs::logs_dir()
            .map_err(|err| err.to_string())
            .and_then(|dir| open::that(&dir).map_err(|err| err.to_string()));
        if let Err(err) = result {
            self.set_status(format!("Could not open logs folder: {err}"), StatusTone::Error);
        }
    }

    pub(crate) fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        self.ui.status.text = text.into();
        self.ui.status.badge_label = tone.label().into();
        self.ui.status.badge_color = style::status_badge_color(tone);
    }
}
