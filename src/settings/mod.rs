use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;
use crate::layout::LayoutParams;

/// Settings for `bst-shell`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub shell: ShellSettings,
    pub visualizer: VisualizerSettings,
    pub logging: LoggingSettings,
}

/// How the menu looks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShellSettings {
    /// Color outcome messages
    #[serde(default = "default_color")]
    pub color: bool,

    /// Printed before reading a menu choice
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

/// How trees are drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualizerSettings {
    #[serde(default = "default_initial_spread")]
    pub initial_spread: f64,

    #[serde(default = "default_spread_decay")]
    pub spread_decay: f64,

    #[serde(default = "default_level_step")]
    pub level_step: f64,

    /// Width of the terminal drawing in characters
    #[serde(default = "default_canvas_width")]
    pub canvas_width: usize,

    /// Where to also write an SVG drawing, if anywhere
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub svg_path: Option<PathBuf>,
}

/// Where log events go.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// stderr or file
    #[serde(default = "default_log_output")]
    pub output: String,

    /// Log file path (when output = file)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

fn default_color() -> bool {
    true
}

fn default_prompt() -> String {
    "Choose an option: ".to_string()
}

fn default_initial_spread() -> f64 {
    5.0
}

fn default_spread_decay() -> f64 {
    0.7
}

fn default_level_step() -> f64 {
    2.0
}

fn default_canvas_width() -> usize {
    80
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_output() -> String {
    "stderr".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            shell: ShellSettings {
                color: default_color(),
                prompt: default_prompt(),
            },
            visualizer: VisualizerSettings {
                initial_spread: default_initial_spread(),
                spread_decay: default_spread_decay(),
                level_step: default_level_step(),
                canvas_width: default_canvas_width(),
                svg_path: None,
            },
            logging: LoggingSettings {
                level: default_log_level(),
                output: default_log_output(),
                log_file: None,
            },
        }
    }
}

impl Settings {
    /// Loads settings, lowest priority first, from:
    ///
    /// 1. the defaults embedded from `default.toml`
    /// 2. the TOML file at `path`, if it exists
    /// 3. environment variables prefixed with `BST__`, using `__` between
    ///    nested keys (e.g. `BST__LOGGING__LEVEL=debug`)
    ///
    /// ```no_run
    /// use bstree::settings::Settings;
    ///
    /// let settings = Settings::from_file("bst.toml").unwrap();
    /// ```
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref().to_string_lossy();
        let settings = config::Config::builder()
            .add_source(config::File::from_str(
                include_str!("default.toml"),
                config::FileFormat::Toml,
            ))
            .add_source(config::File::new(&path, config::FileFormat::Toml).required(false))
            .add_source(config::Environment::with_prefix("BST").separator("__"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Writes these settings to `path` as TOML.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)?;
        Ok(())
    }

    /// Checks that every value is usable.
    pub fn validate(&self) -> Result<(), SettingsError> {
        let visualizer = &self.visualizer;
        if !(visualizer.initial_spread.is_finite() && visualizer.initial_spread > 0.0) {
            return Err(SettingsError::Invalid(format!(
                "visualizer.initial_spread must be positive, got {}",
                visualizer.initial_spread
            )));
        }
        if !(visualizer.spread_decay > 0.0 && visualizer.spread_decay <= 1.0) {
            return Err(SettingsError::Invalid(format!(
                "visualizer.spread_decay must be in (0, 1], got {}",
                visualizer.spread_decay
            )));
        }
        if !(visualizer.level_step.is_finite() && visualizer.level_step > 0.0) {
            return Err(SettingsError::Invalid(format!(
                "visualizer.level_step must be positive, got {}",
                visualizer.level_step
            )));
        }
        if visualizer.canvas_width < 8 {
            return Err(SettingsError::Invalid(format!(
                "visualizer.canvas_width must be at least 8, got {}",
                visualizer.canvas_width
            )));
        }

        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(SettingsError::Invalid(format!(
                "invalid log level '{}', must be one of: {}",
                self.logging.level,
                LOG_LEVELS.join(", ")
            )));
        }
        match self.logging.output.as_str() {
            "stderr" => {}
            "file" if self.logging.log_file.is_some() => {}
            "file" => {
                return Err(SettingsError::Invalid(
                    "log output is 'file' but logging.log_file is not set".to_string(),
                ))
            }
            other => {
                return Err(SettingsError::Invalid(format!(
                    "invalid log output '{}', must be one of: stderr, file",
                    other
                )))
            }
        }

        Ok(())
    }

    /// The layout parameters described by the `[visualizer]` section.
    pub fn layout_params(&self) -> LayoutParams {
        LayoutParams {
            initial_spread: self.visualizer.initial_spread,
            spread_decay: self.visualizer.spread_decay,
            level_step: self.visualizer.level_step,
        }
    }
}
