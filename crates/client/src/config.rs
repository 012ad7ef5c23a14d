//! # Client Configuration Module
//!
//! Loads the settings the booking client needs from environment variables,
//! falling back to defaults that match a locally running appointments API.
//!
//! ## Environment Variables
//!
//! - `HEALTHPOINT_API_URL`: Base URL of the appointments API (default: "http://127.0.0.1:8000")
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `API_REQUEST_TIMEOUT_SECONDS`: Per-request timeout (default: 30)
//! - `CLINIC_OPENS`: First bookable slot, `HH:MM` (default: "09:00")
//! - `CLINIC_CLOSES`: Last bookable slot, `HH:MM` (default: "17:00")
//! - `SLOT_MINUTES`: Length of one slot in minutes (default: 15)

use std::env;
use std::time::Duration;

use eyre::{Result, WrapErr};
use healthpoint_core::{models::TimeSlot, slots::OperatingWindow};
use tracing::Level;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

/// Configuration for the booking client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the appointments API, without a trailing slash
    pub api_url: String,

    /// Log level for the application
    pub log_level: Level,

    /// Request timeout in seconds
    pub request_timeout: u64,

    /// Daily bounds and step of bookable slots
    pub window: OperatingWindow,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            log_level: Level::INFO,
            request_timeout: 30,
            window: OperatingWindow::default(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - `CLINIC_OPENS` or `CLINIC_CLOSES` is not an `HH:MM` time
    /// - `SLOT_MINUTES` is not a positive integer
    /// - the resulting operating window ends before it starts
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup, e.g. a map in tests.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_url = lookup("HEALTHPOINT_API_URL")
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let log_level = match lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()).as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        let request_timeout = lookup("API_REQUEST_TIMEOUT_SECONDS")
            .and_then(|value| value.parse().ok())
            .unwrap_or(30);

        let opens = TimeSlot::parse(&lookup("CLINIC_OPENS").unwrap_or_else(|| "09:00".to_string()))
            .wrap_err("Invalid CLINIC_OPENS value")?;
        let closes = TimeSlot::parse(&lookup("CLINIC_CLOSES").unwrap_or_else(|| "17:00".to_string()))
            .wrap_err("Invalid CLINIC_CLOSES value")?;
        let slot_minutes: u32 = lookup("SLOT_MINUTES")
            .unwrap_or_else(|| OperatingWindow::DEFAULT_GRANULARITY_MINUTES.to_string())
            .parse()
            .wrap_err("Invalid SLOT_MINUTES value")?;

        let window = OperatingWindow::between(&opens, &closes, slot_minutes)
            .wrap_err("Invalid clinic operating window")?;

        Ok(Self {
            api_url,
            log_level,
            request_timeout,
            window,
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }
}
