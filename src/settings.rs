use crate::hotkey::{parse_hotkey, Hotkey};
use crate::layout::{clamp_buttons_per_row, clamp_scale};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const APP_DIR_NAME: &str = "console_panel";
pub const SETTINGS_FILE: &str = "settings.json";
pub const COMMANDS_FILE: &str = "commands.json";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PanelSettings {
    /// Hotkey that shows or hides the host console.
    #[serde(default = "default_console_hotkey")]
    pub toggle_console_hotkey: String,
    /// Hotkey that shows or hides the command panel.
    #[serde(default = "default_panel_hotkey")]
    pub toggle_panel_hotkey: String,
    /// UI scale for high DPI screens. Clamped to `0.5..=3.0`.
    #[serde(default = "default_scale")]
    pub scale_factor: f32,
    #[serde(default = "default_buttons_per_row")]
    pub buttons_per_row: usize,
    /// Raw JSON command list. When set and valid it replaces the command file.
    #[serde(default)]
    pub custom_commands_json: Option<String>,
    /// Location of the command file. Defaults to `commands.json` in the
    /// configuration directory.
    #[serde(default)]
    pub commands_file: Option<String>,
    /// When enabled the logger is initialised at debug level.
    #[serde(default)]
    pub debug_logging: bool,
    #[serde(default = "default_window_pos")]
    pub window_pos: (f32, f32),
    #[serde(default = "default_window_size")]
    pub window_size: (f32, f32),
}

fn default_console_hotkey() -> String {
    "F7".into()
}

fn default_panel_hotkey() -> String {
    "F8".into()
}

fn default_scale() -> f32 {
    1.0
}

fn default_buttons_per_row() -> usize {
    3
}

fn default_window_pos() -> (f32, f32) {
    (100.0, 100.0)
}

fn default_window_size() -> (f32, f32) {
    (300.0, 400.0)
}

impl Default for PanelSettings {
    fn default() -> Self {
        Self {
            toggle_console_hotkey: default_console_hotkey(),
            toggle_panel_hotkey: default_panel_hotkey(),
            scale_factor: default_scale(),
            buttons_per_row: default_buttons_per_row(),
            custom_commands_json: None,
            commands_file: None,
            debug_logging: false,
            window_pos: default_window_pos(),
            window_size: default_window_size(),
        }
    }
}

/// Directory holding the settings and command files.
pub fn config_dir() -> PathBuf {
    dirs_next::config_dir()
        .map(|d| d.join(APP_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from("."))
}

pub fn default_settings_path() -> PathBuf {
    config_dir().join(SETTINGS_FILE)
}

impl PanelSettings {
    /// Load settings from `path`. A missing or empty file yields defaults.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
            Err(e) => {
                return Err(e).with_context(|| format!("read settings file {}", path.display()))
            }
        };
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let settings: Self = serde_json::from_str(&content)
            .with_context(|| format!("deserialize settings file {}", path.display()))?;
        Ok(settings.clamped())
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create settings folder {}", parent.display()))?;
            }
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
            .with_context(|| format!("write settings file {}", path.display()))?;
        Ok(())
    }

    pub fn clamped(mut self) -> Self {
        self.scale_factor = clamp_scale(self.scale_factor);
        self.buttons_per_row = clamp_buttons_per_row(self.buttons_per_row);
        self.window_size.0 = self.window_size.0.max(120.0);
        self.window_size.1 = self.window_size.1.max(80.0);
        self
    }

    pub fn commands_path(&self) -> PathBuf {
        match self.commands_file.as_deref().map(str::trim) {
            Some(p) if !p.is_empty() => PathBuf::from(p),
            _ => config_dir().join(COMMANDS_FILE),
        }
    }

    pub fn console_hotkey(&self) -> Hotkey {
        hotkey_or(&self.toggle_console_hotkey, &default_console_hotkey())
    }

    pub fn panel_hotkey(&self) -> Hotkey {
        hotkey_or(&self.toggle_panel_hotkey, &default_panel_hotkey())
    }
}

fn hotkey_or(value: &str, fallback: &str) -> Hotkey {
    if let Some(k) = parse_hotkey(value) {
        return k;
    }
    tracing::warn!(
        "provided hotkey string '{}' is invalid; using default {}",
        value,
        fallback
    );
    parse_hotkey(fallback).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::Key;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let s = PanelSettings::load(&dir.path().join("nope.json")).unwrap();
        assert_eq!(s, PanelSettings::default());
    }

    #[test]
    fn missing_fields_use_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"buttons_per_row": 9, "scale_factor": 0.1}"#).unwrap();
        let s = PanelSettings::load(&path).unwrap();
        assert_eq!(s.buttons_per_row, 5);
        assert_eq!(s.scale_factor, 0.5);
        assert_eq!(s.toggle_console_hotkey, "F7");
        assert_eq!(s.toggle_panel_hotkey, "F8");
    }

    #[test]
    fn invalid_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(PanelSettings::load(&path).is_err());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let s = PanelSettings {
            scale_factor: 1.5,
            custom_commands_json: Some("[]".into()),
            ..Default::default()
        };
        s.save(&path).unwrap();
        assert_eq!(PanelSettings::load(&path).unwrap(), s);
    }

    #[test]
    fn invalid_hotkey_falls_back() {
        let s = PanelSettings {
            toggle_panel_hotkey: "Ctrl+Nope".into(),
            ..Default::default()
        };
        assert_eq!(s.panel_hotkey().key, Key::F8);
    }

    #[test]
    fn explicit_commands_file_is_used() {
        let s = PanelSettings {
            commands_file: Some("/tmp/cmds.json".into()),
            ..Default::default()
        };
        assert_eq!(s.commands_path(), PathBuf::from("/tmp/cmds.json"));
        assert!(PanelSettings::default()
            .commands_path()
            .ends_with(COMMANDS_FILE));
    }
}
