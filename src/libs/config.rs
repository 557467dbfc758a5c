//! Configuration management system for the tusk application.
//!
//! This module handles the settings that shape tracking and synchronization
//! behavior. It supports both programmatic configuration and an interactive
//! setup wizard.
//!
//! ## Configuration Structure
//!
//! The configuration is modular, with each subsystem having its own dedicated
//! structure:
//!
//! - **Tracker Config**: session debounce, idle detection, and polling
//! - **Sync Config**: usage push and catalog refresh cadence
//!
//! ## Storage and Security
//!
//! - Configuration files are stored in JSON format in platform-specific directories
//! - Remote store credentials are never stored in the configuration file; they
//!   live encrypted in the local state database
//! - All configuration paths follow OS conventions for application data storage
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use tusk::libs::config::Config;
//!
//! # fn main() -> anyhow::Result<()> {
//! // Load existing configuration or create default
//! let config = Config::read()?;
//!
//! // Run interactive configuration setup
//! let updated_config = Config::init()?;
//! updated_config.save()?;
//! # Ok(())
//! # }
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Represents a configurable module in the application.
///
/// Used during interactive configuration setup to display available modules
/// and route the user's selection to the right setup block.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    /// Unique identifier for the module used in configuration routing
    pub key: String,
    /// Display name shown to users during interactive setup
    pub name: String,
}

/// Tracking behavior configuration.
///
/// Controls how browser activity events are turned into usage sessions and
/// when the user counts as idle.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TrackerConfig {
    /// Minimum session length in seconds for usage to count.
    ///
    /// Sessions shorter than this are treated as tab-flicking rather than
    /// real tool usage and are discarded without crediting any time.
    pub min_active_seconds: u64,

    /// Inactivity threshold in seconds before the user counts as idle.
    ///
    /// When no keyboard or mouse input is seen for this long, the current
    /// tracking session is closed. A locked screen is treated the same way.
    pub idle_threshold: u64,

    /// Poll interval in milliseconds for checking input activity.
    ///
    /// Lower values detect idle transitions faster but wake the process
    /// more often. Values between 500-1000ms work well.
    pub poll_interval: u64,
}

/// Synchronization cadence configuration.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SyncConfig {
    /// Interval in seconds between usage push rounds to the remote store.
    pub sync_interval: u64,

    /// Interval in seconds between tool catalog refreshes.
    pub catalog_interval: u64,
}

/// Main configuration container for the entire application.
///
/// Each field is an optional module so users only configure the subsystems
/// they care about. Missing modules fall back to defaults at use sites.
/// The `skip_serializing_if` attribute keeps unconfigured modules out of
/// the JSON file.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    /// Tracking behavior settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracker: Option<TrackerConfig>,

    /// Sync and catalog refresh cadence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync: Option<SyncConfig>,
}

impl Default for TrackerConfig {
    /// Provides sensible defaults for tracking configuration.
    ///
    /// Default values:
    /// - 5 seconds minimum session length
    /// - 120 seconds inactivity threshold
    /// - 500ms polling interval
    fn default() -> Self {
        TrackerConfig {
            min_active_seconds: 5,
            idle_threshold: 120,
            poll_interval: 500,
        }
    }
}

impl Default for SyncConfig {
    /// Provides sensible defaults for sync cadence.
    ///
    /// Default values:
    /// - 60 seconds between usage pushes
    /// - 300 seconds between catalog refreshes
    fn default() -> Self {
        SyncConfig {
            sync_interval: 60,
            catalog_interval: 300,
        }
    }
}

impl Config {
    /// Reads configuration from the filesystem.
    ///
    /// Loads the configuration file from the platform-specific application
    /// data directory. A missing file is not an error: the method returns a
    /// default configuration so the application runs with zero setup.
    ///
    /// ## File Location
    ///
    /// - **Windows**: `%LOCALAPPDATA%\ltdstack\tusk\config.json`
    /// - **macOS**: `~/Library/Application Support/ltdstack/tusk/config.json`
    /// - **Linux**: `~/.local/share/ltdstack/tusk/config.json`
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file exists but cannot be read
    /// or parsed.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        // If no configuration file exists, return default configuration
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Saves the current configuration to the filesystem.
    ///
    /// Serializes the configuration to pretty-printed JSON so the file stays
    /// readable and hand-editable. Creates the application data directory if
    /// it does not exist yet.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Runs an interactive configuration setup wizard.
    ///
    /// Presents a multi-select list of available modules, then prompts for
    /// each selected module's parameters with existing values pre-filled as
    /// defaults. Returns the updated configuration for the caller to save.
    pub fn init() -> Result<Self> {
        // Load existing configuration to use as defaults for the setup wizard
        let mut config = match Self::read() {
            Ok(config) => config,
            Err(_) => Config::default(),
        };

        let node_descriptions = vec![
            ConfigModule {
                key: "tracker".to_string(),
                name: Message::ConfigModuleTracker.to_string(),
            },
            ConfigModule {
                key: "sync".to_string(),
                name: Message::ConfigModuleSync.to_string(),
            },
        ];

        let selected_nodes = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&node_descriptions.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected_nodes {
            match node_descriptions[selection].key.as_str() {
                "tracker" => {
                    let default = config.tracker.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleTracker);
                    config.tracker = Some(TrackerConfig {
                        // Sessions shorter than this never credit usage
                        min_active_seconds: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptMinActiveSeconds.to_string())
                            .default(default.min_active_seconds)
                            .interact_text()?,

                        // Inactivity before the current session is closed
                        idle_threshold: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptIdleThreshold.to_string())
                            .default(default.idle_threshold)
                            .interact_text()?,

                        // Frequency of input activity checks
                        poll_interval: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptPollInterval.to_string())
                            .default(default.poll_interval)
                            .interact_text()?,
                    });
                }

                "sync" => {
                    let default = config.sync.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleSync);
                    config.sync = Some(SyncConfig {
                        // Cadence of usage pushes to the remote store
                        sync_interval: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptSyncInterval.to_string())
                            .default(default.sync_interval)
                            .interact_text()?,

                        // Cadence of tool catalog refreshes
                        catalog_interval: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptCatalogInterval.to_string())
                            .default(default.catalog_interval)
                            .interact_text()?,
                    });
                }
                _ => {} // Unknown module keys are safely ignored
            }
        }

        Ok(config)
    }
}
