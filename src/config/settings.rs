use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::util::paths::config_path;

/// Example configuration file contents (bundled with the binary)
pub const EXAMPLE_CONFIG: &str = include_str!("config.toml.example");

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the web server binds to
    pub server: ServerSettings,
    /// Fixed enumerations offered by the entry form
    pub catalog: Catalog,
    /// Spreadsheet download settings
    pub export: ExportSettings,
    /// Review panel behaviour
    pub review: ReviewSettings,
    /// Browser session lifetime
    pub session: SessionSettings,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

/// Sample types and labs the entry form offers, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pub sample_types: Vec<String>,
    pub labs: Vec<String>,
}

impl Catalog {
    pub fn has_lab(&self, name: &str) -> bool {
        self.labs.iter().any(|l| l == name)
    }
}

#[derive(Debug, Clone)]
pub struct ExportSettings {
    /// File name offered in the download's Content-Disposition
    pub file_name: String,
    /// Name of the single worksheet
    pub sheet_name: String,
}

/// What to do with a collected date that is blank or cannot be parsed.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum InvalidDatePolicy {
    /// Substitute today's date and log a warning
    Today,
    /// Refuse the edit
    Reject,
}

#[derive(Debug, Clone, Copy)]
pub struct ReviewSettings {
    pub invalid_date: InvalidDatePolicy,
}

#[derive(Debug, Clone, Copy)]
pub struct SessionSettings {
    /// Sessions untouched for longer than this are dropped
    pub idle_timeout_minutes: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlServerConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlCatalogConfig {
    pub sample_types: Option<Vec<String>>,
    pub labs: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlExportConfig {
    pub file_name: Option<String>,
    pub sheet_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlReviewConfig {
    pub invalid_date: Option<InvalidDatePolicy>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlSessionConfig {
    pub idle_timeout_minutes: Option<u64>,
}

/// TOML representation of the config file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    pub server: Option<TomlServerConfig>,
    pub catalog: Option<TomlCatalogConfig>,
    pub export: Option<TomlExportConfig>,
    pub review: Option<TomlReviewConfig>,
    pub session: Option<TomlSessionConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerSettings {
                host: "127.0.0.1".to_string(),
                port: 8501,
            },
            catalog: Catalog {
                sample_types: vec![
                    "Water".into(),
                    "Soil".into(),
                    "Swabs".into(),
                    "Food".into(),
                ],
                labs: vec![
                    "Microbiology".into(),
                    "Chemistry".into(),
                    "Molecular".into(),
                ],
            },
            export: ExportSettings {
                file_name: "lab_samples.xlsx".to_string(),
                sheet_name: "Samples".to_string(),
            },
            review: ReviewSettings {
                invalid_date: InvalidDatePolicy::Today,
            },
            session: SessionSettings {
                idle_timeout_minutes: 480,
            },
        }
    }
}

impl Config {
    /// Load configuration from the default config file, merging with defaults
    pub fn load() -> Self {
        let config_file = config_path();

        // Create example config on first run
        if !config_file.exists() {
            Self::create_default_config(&config_file);
        }

        Self::load_from(&config_file)
    }

    /// Load configuration from a specific file, merging with defaults.
    ///
    /// A missing or unparsable file yields the defaults.
    pub fn load_from(path: &Path) -> Self {
        let mut config = Config::default();

        if !path.exists() {
            return config;
        }

        match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<TomlConfig>(&contents) {
                Ok(toml_config) => config.merge(toml_config),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Ignoring invalid config file");
                }
            },
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to read config file");
            }
        }

        config
    }

    /// Parse a TOML document and merge it over the defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        let toml_config = toml::from_str::<TomlConfig>(contents)?;
        let mut config = Config::default();
        config.merge(toml_config);
        Ok(config)
    }

    fn merge(&mut self, toml_config: TomlConfig) {
        if let Some(server) = toml_config.server {
            if let Some(host) = server.host {
                self.server.host = host;
            }
            if let Some(port) = server.port {
                self.server.port = port;
            }
        }

        if let Some(catalog) = toml_config.catalog {
            if let Some(sample_types) = catalog.sample_types {
                self.catalog.sample_types = dedup_non_blank(sample_types);
            }
            if let Some(labs) = catalog.labs {
                self.catalog.labs = dedup_non_blank(labs);
            }
        }

        if let Some(export) = toml_config.export {
            if let Some(file_name) = export.file_name.filter(|s| !s.trim().is_empty()) {
                self.export.file_name = file_name;
            }
            if let Some(sheet_name) = export.sheet_name.filter(|s| !s.trim().is_empty()) {
                self.export.sheet_name = sheet_name;
            }
        }

        if let Some(review) = toml_config.review {
            if let Some(invalid_date) = review.invalid_date {
                self.review.invalid_date = invalid_date;
            }
        }

        if let Some(session) = toml_config.session {
            if let Some(minutes) = session.idle_timeout_minutes {
                if minutes == 0 {
                    tracing::warn!("session.idle_timeout_minutes must be at least 1, using 1");
                }
                self.session.idle_timeout_minutes = minutes.max(1);
            }
        }
    }

    /// Create the default config file from the bundled example
    fn create_default_config(path: &PathBuf) {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                if let Err(e) = fs::create_dir_all(parent) {
                    tracing::warn!(error = %e, "Failed to create config directory");
                    return;
                }
            }
        }

        if let Err(e) = fs::write(path, EXAMPLE_CONFIG) {
            tracing::warn!(error = %e, "Failed to write default config");
        }
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.server.host = host.into();
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.server.port = port;
        self
    }
}

/// Trim entries, drop blanks and keep the first occurrence of each name.
fn dedup_non_blank(items: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(items.len());
    for item in items {
        let item = item.trim().to_string();
        if !item.is_empty() && !out.contains(&item) {
            out.push(item);
        }
    }
    out
}
