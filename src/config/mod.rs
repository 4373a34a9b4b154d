//! Configuration file support for scribblepad.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/scribblepad/config.toml`. Settings include tool defaults,
//! canvas geometry, and export options.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

pub use enums::{ColorSpec, StartTool};
pub use types::{CanvasConfig, DrawingConfig, ExportConfig};

use crate::draw::{BLACK, WHITE};
use crate::export::{
    EXPORT_SCALE, ExportFileConfig, ExportOptions,
    file::{DEFAULT_FILENAME_TEMPLATE, expand_tilde, is_valid_template},
};
use crate::input::{
    ToolSettings,
    tool::{DEFAULT_GLYPH, MAX_THICKNESS, MIN_THICKNESS},
};
use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const MIN_CANVAS_SIZE: i32 = 16;
const MAX_CANVAS_SIZE: i32 = 4096;

/// Main configuration structure containing all user settings.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_color = "black"
/// default_thickness = 2.0
/// default_glyph = "🌵"
/// default_tool = "marker"
///
/// [canvas]
/// width = 256
/// height = 256
/// background = "white"
///
/// [export]
/// background = "white"
/// save_directory = "~/Pictures/Scribblepad"
/// filename_template = "sketch_%Y-%m-%d_%H%M%S"
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Tool defaults (color, thickness, glyph)
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// On-screen canvas geometry
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Export options
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value (or replaced by
    /// the default) and a warning is logged.
    ///
    /// Validated ranges:
    /// - `default_thickness`: 1.0 - 50.0
    /// - `canvas.width`, `canvas.height`: 16 - 4096
    /// - `default_glyph`: non-empty
    fn validate_and_clamp(&mut self) {
        let thickness = self.drawing.default_thickness;
        if !thickness.is_finite() {
            log::warn!("Invalid default_thickness, falling back to 2.0");
            self.drawing.default_thickness = 2.0;
        } else if !(MIN_THICKNESS..=MAX_THICKNESS).contains(&thickness) {
            log::warn!(
                "Invalid default_thickness {:.1}, clamping to {:.1}-{:.1} range",
                thickness,
                MIN_THICKNESS,
                MAX_THICKNESS
            );
            self.drawing.default_thickness = thickness.clamp(MIN_THICKNESS, MAX_THICKNESS);
        }

        if self.drawing.default_glyph.trim().is_empty() {
            log::warn!("Empty default_glyph, falling back to '{DEFAULT_GLYPH}'");
            self.drawing.default_glyph = DEFAULT_GLYPH.to_string();
        }

        if !is_valid_template(&self.export.filename_template) {
            log::warn!(
                "Invalid filename_template '{}', falling back to '{}'",
                self.export.filename_template,
                DEFAULT_FILENAME_TEMPLATE
            );
            self.export.filename_template = DEFAULT_FILENAME_TEMPLATE.to_string();
        }

        for (name, value) in [
            ("width", &mut self.canvas.width),
            ("height", &mut self.canvas.height),
        ] {
            if !(MIN_CANVAS_SIZE..=MAX_CANVAS_SIZE).contains(&*value) {
                log::warn!(
                    "Invalid canvas {} {}, clamping to {}-{} range",
                    name,
                    value,
                    MIN_CANVAS_SIZE,
                    MAX_CANVAS_SIZE
                );
                *value = (*value).clamp(MIN_CANVAS_SIZE, MAX_CANVAS_SIZE);
            }
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/scribblepad/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("scribblepad");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or contains invalid TOML.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let mut config = Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        config.validate_and_clamp();

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    fn from_toml(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// JSON schema describing the config file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }

    /// Tool configuration the session starts with.
    pub fn tool_settings(&self) -> ToolSettings {
        ToolSettings {
            tool: self.drawing.default_tool.into(),
            thickness: self.drawing.default_thickness,
            color: self.drawing.default_color.to_color_or(BLACK),
            glyph: self.drawing.default_glyph.trim().to_string(),
        }
    }

    /// Geometry and background of exported images.
    pub fn export_options(&self) -> ExportOptions {
        ExportOptions {
            width: self.canvas.width,
            height: self.canvas.height,
            scale: EXPORT_SCALE,
            background: Some(self.export.background.to_color_or(WHITE)),
        }
    }

    /// Where exported images are saved when no explicit path is given.
    pub fn export_file_config(&self) -> ExportFileConfig {
        ExportFileConfig {
            save_directory: expand_tilde(&self.export.save_directory),
            filename_template: self.export.filename_template.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{BLUE, TRANSPARENT};
    use crate::input::Tool;
    use tempfile::TempDir;

    #[test]
    fn defaults_match_canvas_and_export_scale() {
        let config = Config::default();
        let options = config.export_options();
        assert_eq!(options.pixel_size(), (1024, 1024));
        assert_eq!(options.background, Some(WHITE));

        let tool = config.tool_settings();
        assert_eq!(tool.tool, Tool::Marker);
        assert_eq!(tool.thickness, 2.0);
        assert_eq!(tool.color, BLACK);
        assert_eq!(tool.glyph, DEFAULT_GLYPH);
    }

    #[test]
    fn partial_toml_uses_defaults_for_missing_fields() {
        let config = Config::from_toml(
            r#"
            [drawing]
            default_color = [0, 0, 255]
            default_tool = "stamp"

            [export]
            background = "transparent"
            "#,
        )
        .unwrap();

        let tool = config.tool_settings();
        assert_eq!(tool.color, BLUE);
        assert_eq!(tool.tool, Tool::Stamp);
        assert_eq!(config.canvas.width, 256);
        assert_eq!(config.export_options().background, Some(TRANSPARENT));
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let mut config = Config::from_toml(
            r#"
            [drawing]
            default_thickness = 400.0
            default_glyph = "  "

            [canvas]
            width = 2
            height = 10000
            "#,
        )
        .unwrap();
        config.validate_and_clamp();

        assert_eq!(config.drawing.default_thickness, MAX_THICKNESS);
        assert_eq!(config.drawing.default_glyph, DEFAULT_GLYPH);
        assert_eq!(config.canvas.width, MIN_CANVAS_SIZE);
        assert_eq!(config.canvas.height, MAX_CANVAS_SIZE);
    }

    #[test]
    fn invalid_filename_template_falls_back_to_default() {
        let mut config = Config::from_toml(
            r#"
            [export]
            filename_template = "sketch_%Q"
            "#,
        )
        .unwrap();
        config.validate_and_clamp();

        assert_eq!(config.export.filename_template, DEFAULT_FILENAME_TEMPLATE);
        assert_eq!(
            config.export_file_config().filename_template,
            DEFAULT_FILENAME_TEMPLATE
        );
    }

    #[test]
    fn load_from_reports_invalid_toml() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[drawing\nbroken").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn load_from_reads_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[canvas]\nwidth = 300\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.export_options().pixel_size(), (1200, 1024));
    }

    #[test]
    fn schema_lists_sections() {
        let schema = serde_json::to_string(&Config::json_schema()).unwrap();
        assert!(schema.contains("drawing"));
        assert!(schema.contains("canvas"));
        assert!(schema.contains("export"));
    }
}
