//! Application configuration.
//!
//! Settings live in a JSON file in the platform application-data directory.
//! Each module is optional: `watson` overrides how the tracker is invoked,
//! `plot` supplies defaults for CLI options the user left out. The `init`
//! command drives the interactive wizard in [`Config::init`]; everything else
//! only ever calls [`Config::read`].
//!
//! File locations:
//! - Windows: `%LOCALAPPDATA%\wplot\config.json`
//! - macOS: `~/Library/Application Support/wplot/config.json`
//! - Linux: `~/.local/share/wplot/config.json`

use crate::libs::bucket::Period;
use crate::libs::messages::Message;
use crate::libs::order::SortMode;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect, Select};
use serde::{Deserialize, Serialize};
use std::env::consts::OS;
use std::env::var;
use std::fs::{self, File};
use std::path::PathBuf;

/// Configuration file name inside the application data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

const APP_NAME: &str = "wplot";

/// Watson tracker invocation settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct WatsonConfig {
    /// Command used to invoke the tracker. Override when watson lives outside
    /// PATH or behind a wrapper script.
    pub command: String,
}

impl Default for WatsonConfig {
    fn default() -> Self {
        WatsonConfig {
            command: "watson".to_string(),
        }
    }
}

/// Plot defaults applied when the matching CLI options are omitted.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct PlotDefaults {
    pub period: Period,
    pub sort: SortMode,
    pub truncate: bool,
}

/// Root configuration object. Unconfigured modules stay out of the file.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watson: Option<WatsonConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plot: Option<PlotDefaults>,
}

impl Config {
    /// Loads the configuration, falling back to defaults when no file exists.
    pub fn read() -> Result<Config> {
        let config_file_path = storage_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }
        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = storage_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file. Returns whether one existed.
    pub fn delete() -> Result<bool> {
        let config_file_path = storage_path(CONFIG_FILE_NAME)?;
        if config_file_path.exists() {
            fs::remove_file(config_file_path)?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Runs the interactive configuration wizard.
    ///
    /// Presents the available modules, pre-filling current values as
    /// defaults, and returns the updated configuration for saving.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = [Message::ConfigModuleWatson, Message::ConfigModulePlot];
        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(ToString::to_string).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match selection {
                0 => {
                    let default = config.watson.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleWatson);
                    config.watson = Some(WatsonConfig {
                        command: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptWatsonCommand.to_string())
                            .default(default.command)
                            .interact_text()?,
                    });
                }
                1 => {
                    let default = config.plot.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModulePlot);

                    let periods = [Period::Day, Period::Week, Period::Month, Period::Quarter, Period::Year];
                    let period_idx = Select::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptDefaultPeriod.to_string())
                        .items(&periods.iter().map(ToString::to_string).collect::<Vec<_>>())
                        .default(periods.iter().position(|p| *p == default.period).unwrap_or(0))
                        .interact()?;

                    let sorts = [SortMode::Time, SortMode::Name];
                    let sort_idx = Select::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptDefaultSort.to_string())
                        .items(&sorts.iter().map(ToString::to_string).collect::<Vec<_>>())
                        .default(sorts.iter().position(|s| *s == default.sort).unwrap_or(0))
                        .interact()?;

                    config.plot = Some(PlotDefaults {
                        period: periods[period_idx],
                        sort: sorts[sort_idx],
                        truncate: Confirm::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptDefaultTruncate.to_string())
                            .default(default.truncate)
                            .interact()?,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}

/// Resolves a file path inside the platform application-data directory,
/// creating the directory on first use.
pub fn storage_path(file_name: &str) -> Result<PathBuf> {
    let base = match OS {
        "windows" => var("LOCALAPPDATA").unwrap_or_else(|_| ".".into()),
        "macos" => var("HOME").unwrap_or_else(|_| ".".into()) + "/Library/Application Support",
        _ => var("HOME").unwrap_or_else(|_| ".".into()) + "/.local/share",
    };
    let base = PathBuf::from(base).join(APP_NAME);
    if !base.exists() {
        fs::create_dir_all(&base)?;
    }
    Ok(base.join(file_name))
}
