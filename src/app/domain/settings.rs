use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::app::infrastructure::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ThemeMode {
    Light,
    Dark,
    SystemDefault,
}

/// Sizes offered in the toolbar's size picker.
pub const FONT_SIZES: [i32; 9] = [8, 10, 12, 14, 16, 18, 20, 22, 24];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_theme_mode")]
    pub theme_mode: ThemeMode,

    #[serde(default = "default_font_family")]
    pub font_family: String,

    #[serde(default = "default_font_size")]
    pub font_size: u32,

    #[serde(default = "default_word_wrap")]
    pub word_wrap_enabled: bool,

    #[serde(default = "default_stats_pane")]
    pub stats_pane_visible: bool,

    /// Program used for RTF and PDF export
    #[serde(default = "default_converter_program")]
    pub converter_program: String,

    /// Passed to pandoc as `--pdf-engine`
    #[serde(default = "default_pdf_engine")]
    pub pdf_engine: String,

    /// Last directory used in an open/save/export dialog
    #[serde(default)]
    pub last_directory: Option<String>,
}

fn default_theme_mode() -> ThemeMode {
    ThemeMode::SystemDefault
}

fn default_font_family() -> String {
    "Courier".to_string()
}

fn default_font_size() -> u32 {
    16
}

fn default_word_wrap() -> bool {
    true
}

fn default_stats_pane() -> bool {
    true
}

fn default_converter_program() -> String {
    "pandoc".to_string()
}

fn default_pdf_engine() -> String {
    "pdflatex".to_string()
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme_mode: default_theme_mode(),
            font_family: default_font_family(),
            font_size: default_font_size(),
            word_wrap_enabled: default_word_wrap(),
            stats_pane_visible: default_stats_pane(),
            converter_program: default_converter_program(),
            pdf_engine: default_pdf_engine(),
            last_directory: None,
        }
    }
}

impl AppSettings {
    /// Load settings from the config dir, or defaults if missing or unreadable
    pub fn load() -> Self {
        let config_path = Self::get_config_path();
        if !config_path.exists() {
            let default = Self::default();
            if let Err(e) = default.save() {
                tracing::warn!("Could not write default settings: {}", e);
            }
            return default;
        }
        match Self::load_from(&config_path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Failed to load settings from {}: {}. Using defaults.", config_path.display(), e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, AppError> {
        let contents = fs::read_to_string(path)?;
        let settings: Self = serde_json::from_str(&contents)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to the config dir
    pub fn save(&self) -> Result<(), AppError> {
        self.save_to(&Self::get_config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), AppError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    fn validate(&self) -> Result<(), AppError> {
        if self.font_size == 0 || self.font_size > 200 {
            return Err(AppError::Settings(format!("invalid font size {}", self.font_size)));
        }
        if self.converter_program.trim().is_empty() {
            return Err(AppError::Settings("converter program is empty".to_string()));
        }
        Ok(())
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("writher");
        path.push("settings.json");
        path
    }
}
