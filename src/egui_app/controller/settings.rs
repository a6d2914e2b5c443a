use super::*;

impl EguiController {
    /// Save settings when a config path is attached; failures only reach the status bar.
    pub(super) fn persist_settings(&mut self) {
        let Some(path) = self.config_path.as_ref() else {
            return;
        };
        if let Err(err) = config::save_to_path(&self.settings, path) {
            tracing::warn!("Failed to save settings: {err}");
            self.set_status(format!("Could not save settings: {err}"), StatusTone::Warning);
        }
    }
}
