//! Configuration handling for the RSVP form

use crate::state::{ControllerSettings, DEFAULT_SUCCESS_WINDOW};
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Placeholder form endpoint used until one is configured
pub const DEFAULT_ENDPOINT: &str = "https://formspree.io/f/your-form-id";

/// Environment variable overriding the configured endpoint
pub const ENDPOINT_ENV: &str = "RSVP_ENDPOINT";

/// User configuration for the RSVP form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RsvpConfig {
    /// Form-collection endpoint the RSVP is posted to
    pub endpoint: String,
    /// Title shown above the form
    pub event_title: String,
    /// Person named in the failure alert
    pub fallback_contact: String,
    /// Seconds the success overlay stays up
    pub success_display_secs: u64,
    /// Request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Default for RsvpConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            event_title: "RSVP".to_string(),
            fallback_contact: "the host".to_string(),
            success_display_secs: DEFAULT_SUCCESS_WINDOW.as_secs(),
            request_timeout_secs: 30,
        }
    }
}

impl RsvpConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "rsvp", "rsvp-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file, then apply the environment override
    pub fn load() -> Result<Self> {
        let mut config = Self::load_file()?;
        if let Ok(endpoint) = std::env::var(ENDPOINT_ENV) {
            config.apply_endpoint_override(endpoint);
        }
        Ok(config)
    }

    fn load_file() -> Result<Self> {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: RsvpConfig = serde_json::from_str(&content)?;
                tracing::debug!("Loaded config from {}", path.display());
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    fn apply_endpoint_override(&mut self, endpoint: String) {
        let endpoint = endpoint.trim();
        if !endpoint.is_empty() {
            self.endpoint = endpoint.to_string();
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn controller_settings(&self) -> ControllerSettings {
        ControllerSettings {
            success_window: Duration::from_secs(self.success_display_secs),
            fallback_contact: self.fallback_contact.clone(),
        }
    }
}
