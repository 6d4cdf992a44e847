//! TOML configuration file parsing and loading
//!
//! Handles default config file discovery and mapping of config keys onto
//! the runtime configuration. CLI arguments take precedence over config
//! file values; config file values take precedence over built-in defaults.

use crate::services::ServiceEndpoints;
use std::path::PathBuf;

/// Runtime configuration assembled from defaults and the config file
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Service base URL overrides; None means the production default
    pub user_service: Option<String>,
    pub profile_service: Option<String>,
    pub qr_service: Option<String>,
    pub analytics_service: Option<String>,

    /// Stored access token for authenticated operations
    pub token: Option<String>,

    pub log_level: Option<String>,
    pub log_format: Option<String>,
    pub log_file: Option<PathBuf>,
    pub color: Option<bool>,
}

impl Config {
    /// Load the config file, if any.
    ///
    /// A user-specified file must exist; the default location
    /// (`<config_dir>/MeetMii/meetmii.toml`) is optional. Parse and
    /// validation failures are fatal.
    pub async fn load(config_file: Option<PathBuf>) -> Self {
        let config_path = match config_file {
            Some(path) => {
                if !path.exists() {
                    eprintln!(
                        "Error: The specified configuration file does not exist: {}",
                        path.display()
                    );
                    std::process::exit(1);
                }
                Some(path)
            }
            None => {
                let default_path =
                    dirs::config_dir().map(|d| d.join("MeetMii").join("meetmii.toml"));
                match default_path {
                    Some(path) if path.exists() => Some(path),
                    _ => None,
                }
            }
        };

        let mut config = Config::default();
        if let Some(path) = config_path {
            match tokio::fs::read_to_string(&path).await {
                Ok(contents) => match toml::from_str::<toml::Table>(&contents) {
                    Ok(table) => config.apply_toml_values(&table),
                    Err(e) => {
                        eprintln!("Error parsing configuration file {}: {}", path.display(), e);
                        std::process::exit(1);
                    }
                },
                Err(e) => {
                    eprintln!("Error reading configuration file {}: {}", path.display(), e);
                    std::process::exit(1);
                }
            }
        }
        config
    }

    /// Apply TOML configuration values
    pub fn apply_toml_values(&mut self, table: &toml::Table) {
        if let Some(url) = table.get("user-service").and_then(|v| v.as_str()) {
            self.user_service = Some(url.to_string());
        }
        if let Some(url) = table.get("profile-service").and_then(|v| v.as_str()) {
            self.profile_service = Some(url.to_string());
        }
        if let Some(url) = table.get("qr-service").and_then(|v| v.as_str()) {
            self.qr_service = Some(url.to_string());
        }
        if let Some(url) = table.get("analytics-service").and_then(|v| v.as_str()) {
            self.analytics_service = Some(url.to_string());
        }
        if let Some(token) = table.get("token").and_then(|v| v.as_str()) {
            self.token = Some(token.to_string());
        }
        if let Some(log_level) = table.get("log-level").and_then(|v| v.as_str()) {
            self.log_level = Some(log_level.to_string());
        }
        if let Some(log_format) = table.get("log-format").and_then(|v| v.as_str()) {
            self.log_format = Some(log_format.to_string());
        }
        if let Some(log_file) = table.get("log-file").and_then(|v| v.as_str()) {
            if log_file.eq_ignore_ascii_case("none") || log_file == "-" {
                self.log_file = None; // Magic values "none" and "-" disable file logging
            } else {
                self.log_file = Some(PathBuf::from(log_file));
            }
        }
        if let Some(color) = table.get("color").and_then(|v| v.as_bool()) {
            self.color = Some(color);
        }
        if let Some(no_color) = table.get("no-color").and_then(|v| v.as_bool()) {
            self.color = Some(!no_color);
        }
    }

    /// Service endpoints with configured overrides applied
    pub fn endpoints(&self) -> ServiceEndpoints {
        let defaults = ServiceEndpoints::default();
        ServiceEndpoints {
            user: self.user_service.clone().unwrap_or(defaults.user),
            profile: self.profile_service.clone().unwrap_or(defaults.profile),
            qr: self.qr_service.clone().unwrap_or(defaults.qr),
            analytics: self.analytics_service.clone().unwrap_or(defaults.analytics),
        }
    }
}
