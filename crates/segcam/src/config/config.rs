//! Configuration management for segcam.
//!
//! Handles loading and saving TOML configuration files with cross-platform
//! paths, validation, and atomic write operations.

use crate::{
    AppError, AppResult,
    config::{
        AudioConfig, CameraConfig, FfmpegConfig, MIN_ROLLOVER_INTERVAL_MS, PermissionsConfig,
        RecordingConfig, StorageConfig,
    },
};

use std::{
    fs,
    io::Write,
    panic::Location,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use error_location::ErrorLocation;
use segcam_core::{ControllerSettings, TICK_INTERVAL};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Main configuration struct.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Segmenting settings.
    #[serde(default)]
    pub recording: RecordingConfig,
    /// Camera device settings.
    #[serde(default)]
    pub camera: CameraConfig,
    /// Microphone settings.
    #[serde(default)]
    pub audio: AudioConfig,
    /// Where segments are written.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Encoder process settings.
    #[serde(default)]
    pub ffmpeg: FfmpegConfig,
    /// Desktop permission policy.
    #[serde(default)]
    pub permissions: PermissionsConfig,
}

impl Config {
    /// Load configuration from disk, creating default if not found.
    #[track_caller]
    #[instrument]
    pub fn load() -> AppResult<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let config = Self::load_from(&config_path)?;
            info!(config_path = ?config_path, "Configuration loaded");
            Ok(config)
        } else {
            info!("No config found, creating default");
            let config = Config::default();
            config.save_to(&config_path)?;
            Ok(config)
        }
    }

    /// Read and parse a configuration file.
    #[track_caller]
    pub fn load_from(path: &Path) -> AppResult<Self> {
        let contents = fs::read_to_string(path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to read config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Self::from_toml(&contents)
    }

    /// Parse configuration from TOML text. Missing sections take defaults.
    #[track_caller]
    pub fn from_toml(contents: &str) -> AppResult<Self> {
        toml::from_str(contents).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to parse config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Reject values the recorder cannot run with.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn validate(&self) -> AppResult<()> {
        if self.recording.rollover_interval_ms < MIN_ROLLOVER_INTERVAL_MS {
            return Err(AppError::ConfigError {
                reason: format!(
                    "recording.rollover_interval_ms must be at least {} (got {})",
                    MIN_ROLLOVER_INTERVAL_MS, self.recording.rollover_interval_ms
                ),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if self.ffmpeg.binary.trim().is_empty() {
            return Err(AppError::ConfigError {
                reason: "ffmpeg.binary must not be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if self.ffmpeg.finalize_timeout_ms == 0 {
            return Err(AppError::ConfigError {
                reason: "ffmpeg.finalize_timeout_ms must be greater than zero".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if self.camera.device.trim().is_empty() {
            return Err(AppError::ConfigError {
                reason: "camera.device must not be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }

    /// Controller timing derived from this configuration.
    pub fn controller_settings(&self) -> ControllerSettings {
        ControllerSettings {
            rollover_interval: self.recording.rollover_interval(),
            tick_interval: TICK_INTERVAL,
        }
    }

    /// Save configuration to `config_path` using atomic write pattern.
    ///
    /// Writes to a temporary file first, then renames to prevent corruption
    /// if the process crashes during the write.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn save_to(&self, config_path: &Path) -> AppResult<()> {
        let contents = toml::to_string_pretty(self).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to serialize config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        // Atomic write: write to temp file then rename
        let temp_path = config_path.with_extension("toml.tmp");

        let mut temp_file = fs::File::create(&temp_path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to create temp config file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        temp_file
            .write_all(contents.as_bytes())
            .map_err(|e| AppError::ConfigError {
                reason: format!("Failed to write temp config file: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        temp_file.sync_all().map_err(|e| AppError::ConfigError {
            reason: format!("Failed to sync temp config file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        fs::rename(&temp_path, config_path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to rename temp config to final: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        info!(config_path = ?config_path, "Configuration saved (atomic write)");

        Ok(())
    }

    /// Directory for the rolling log files, created if missing.
    pub fn log_dir() -> Option<PathBuf> {
        let proj_dirs = ProjectDirs::from("com", "segcam", "Segcam")?;
        let log_dir = proj_dirs.data_dir().join("logs");
        fs::create_dir_all(&log_dir).ok()?;
        Some(log_dir)
    }

    #[track_caller]
    fn config_path() -> AppResult<PathBuf> {
        let proj_dirs = ProjectDirs::from("com", "segcam", "Segcam").ok_or_else(|| {
            AppError::ConfigError {
                reason: "Failed to get config directory".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?;

        let config_dir = proj_dirs.config_dir();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
            debug!(config_dir = ?config_dir, "Created config directory");
        }

        Ok(config_dir.join("config.toml"))
    }
}
