use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use crate::http_client::Timeouts;
use crate::sentiment::{AnalysisMode, Language};

use super::defaults;

/// Errors that may occur while loading or saving app configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to create the config directory.
    #[error("Unable to create config directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to read a config file.
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to write a config file.
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to parse TOML config.
    #[error("Invalid config at {path}: {source}")]
    ParseToml {
        path: PathBuf,
        source: toml::de::Error,
    },
    /// Failed to serialize config to TOML.
    #[error("Failed to serialize config to TOML at {path}: {source}")]
    SerializeToml {
        path: PathBuf,
        source: toml::ser::Error,
    },
    /// No usable config directory found.
    #[error("No suitable config directory found")]
    NoConfigDir,
}

/// Settings persisted in `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default)]
    pub service: ServiceSettings,
    #[serde(default)]
    pub ui: UiSettings,
}

impl AppSettings {
    /// Clamp numeric values into supported ranges and tidy strings.
    pub fn normalized(mut self) -> Self {
        self.service = self.service.normalized();
        self
    }
}

/// Where and how the analysis service is reached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceSettings {
    /// Base URL that mode paths are resolved against.
    #[serde(default = "defaults::base_url")]
    pub base_url: String,
    /// Path (or absolute URL) receiving `{"lines": [...]}` requests.
    #[serde(default = "defaults::lines_path")]
    pub lines_path: String,
    /// Path (or absolute URL) receiving `{"text": "..."}` requests.
    #[serde(default = "defaults::text_path")]
    pub text_path: String,
    #[serde(default = "defaults::connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    #[serde(default = "defaults::read_timeout_secs")]
    pub read_timeout_secs: u64,
    /// Upper bound on response body size.
    #[serde(default = "defaults::max_response_bytes")]
    pub max_response_bytes: usize,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            base_url: defaults::base_url(),
            lines_path: defaults::lines_path(),
            text_path: defaults::text_path(),
            connect_timeout_secs: defaults::connect_timeout_secs(),
            read_timeout_secs: defaults::read_timeout_secs(),
            max_response_bytes: defaults::max_response_bytes(),
        }
    }
}

impl ServiceSettings {
    /// Settings that post both modes to a single absolute endpoint.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        let endpoint = endpoint.into();
        Self {
            base_url: endpoint.clone(),
            lines_path: endpoint.clone(),
            text_path: endpoint,
            ..Self::default()
        }
    }

    pub fn normalized(mut self) -> Self {
        self.base_url = self.base_url.trim().to_string();
        self.lines_path = self.lines_path.trim().to_string();
        self.text_path = self.text_path.trim().to_string();
        self.connect_timeout_secs = defaults::clamp_timeout_secs(self.connect_timeout_secs);
        self.read_timeout_secs = defaults::clamp_timeout_secs(self.read_timeout_secs);
        self.max_response_bytes = defaults::clamp_max_response_bytes(self.max_response_bytes);
        self
    }

    /// Resolve the endpoint for `mode`.
    ///
    /// A mode path that is itself an absolute URL replaces the base.
    pub fn endpoint(&self, mode: AnalysisMode) -> Result<Url, url::ParseError> {
        let path = match mode {
            AnalysisMode::Lines => &self.lines_path,
            AnalysisMode::Text => &self.text_path,
        };
        if let Ok(absolute) = Url::parse(path) {
            return Ok(absolute);
        }
        Url::parse(&self.base_url)?.join(path)
    }

    pub fn timeouts(&self) -> Timeouts {
        Timeouts {
            connect: std::time::Duration::from_secs(self.connect_timeout_secs),
            read: std::time::Duration::from_secs(self.read_timeout_secs),
            write: std::time::Duration::from_secs(self.read_timeout_secs),
        }
    }
}

/// Analyzer preferences restored on launch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UiSettings {
    #[serde(default)]
    pub mode: AnalysisMode,
    #[serde(default)]
    pub language: Language,
    /// Folder the file picker opens in.
    #[serde(default)]
    pub last_file_dir: Option<PathBuf>,
}
