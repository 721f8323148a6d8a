//! Local configuration management.
//!
//! Config is stored at `~/.config/seatmap/config.toml` and contains:
//! - the reservation service address and optional bearer token
//! - polling, booking and notification timings
//! - an optional floor plan override

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use crate::api::DEFAULT_BASE_URL;
use crate::engine::{
    NotificationDelays, SessionSettings, StaleSelectionPolicy, DEFAULT_BOOKING_MINUTES, DEFAULT_POLL_INTERVAL,
};
use crate::floor::{FloorPlan, TableCluster, ZoneBands, DEFAULT_ZONE_BOUNDS};
use crate::types::SeatId;

const CONFIG_DIR: &str = "seatmap";
const CONFIG_FILE: &str = "config.toml";

/// Local configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Reservation service base URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Bearer token sent with every request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,

    /// Name used on bookings when the service has none for the user.
    #[serde(default = "default_display_name")]
    pub display_name: String,

    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    /// Minutes until the service auto-checks a booking out.
    #[serde(default = "default_booking_duration_minutes")]
    pub booking_duration_minutes: i64,

    #[serde(default)]
    pub stale_selection: StaleSelectionPolicy,

    #[serde(default)]
    pub notifications: NotificationDelays,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor: Option<FloorConfig>,
}

/// Floor plan override. Missing clusters fall back to the built-in floor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloorConfig {
    #[serde(default = "default_zone_bounds")]
    pub zone_bounds: [SeatId; 3],

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub clusters: Vec<TableCluster>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_display_name() -> String {
    "Employee".to_string()
}

fn default_poll_interval_ms() -> u64 {
    DEFAULT_POLL_INTERVAL.as_millis() as u64
}

fn default_booking_duration_minutes() -> i64 {
    DEFAULT_BOOKING_MINUTES
}

fn default_zone_bounds() -> [SeatId; 3] {
    DEFAULT_ZONE_BOUNDS
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            auth_token: None,
            display_name: default_display_name(),
            poll_interval_ms: default_poll_interval_ms(),
            booking_duration_minutes: default_booking_duration_minutes(),
            stale_selection: StaleSelectionPolicy::default(),
            notifications: NotificationDelays::default(),
            floor: None,
        }
    }
}

impl AppConfig {
    /// Load config from the default location.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from `path`, or the defaults if it doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).context("Failed to read config file")?;

        toml::from_str(&content).context("Failed to parse config file")
    }

    /// Save config to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(path, content).context("Failed to write config file")
    }

    /// Get the auth token as a SecretString.
    pub fn auth_token_secret(&self) -> Option<SecretString> {
        self.auth_token
            .clone()
            .filter(|t| !t.is_empty())
            .map(SecretString::from)
    }

    pub fn has_auth_token(&self) -> bool {
        self.auth_token.as_ref().is_some_and(|t| !t.is_empty())
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms.max(1))
    }

    /// Session tunables. Like the floor plan, a bad value is an error here
    /// rather than at display time.
    pub fn session_settings(&self) -> Result<SessionSettings> {
        let minutes = self.booking_duration_minutes;
        if minutes <= 0 {
            bail!("booking_duration_minutes must be positive, got {}", minutes);
        }
        let booking_duration = chrono::TimeDelta::try_minutes(minutes)
            .with_context(|| format!("booking_duration_minutes is out of range: {}", minutes))?;

        Ok(SessionSettings {
            display_name: self.display_name.clone(),
            booking_duration,
            delays: self.notifications,
            stale_selection: self.stale_selection,
        })
    }

    /// Build and validate the floor plan. A bad override is an error here,
    /// before anything talks to the service.
    pub fn floor_plan(&self) -> Result<FloorPlan> {
        let Some(floor) = &self.floor else {
            return Ok(FloorPlan::builtin());
        };

        let zones = ZoneBands::new(floor.zone_bounds).context("Invalid [floor] zone_bounds")?;
        let clusters = if floor.clusters.is_empty() {
            FloorPlan::builtin().clusters().to_vec()
        } else {
            floor.clusters.clone()
        };

        FloorPlan::new(zones, clusters).context("Invalid [floor] configuration")
    }

    /// Get the config file path.
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Get the config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not determine config directory")?;

        Ok(config_dir.join(CONFIG_DIR))
    }
}
