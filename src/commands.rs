use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// A single quick command shown as a button in the panel.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct CommandEntry {
    pub label: String,
    /// Passed verbatim to the host console.
    pub command: String,
    #[serde(default)]
    pub description: String,
}

impl CommandEntry {
    pub fn new(label: &str, command: &str, description: &str) -> Self {
        Self {
            label: label.into(),
            command: command.into(),
            description: description.into(),
        }
    }
}

#[derive(Debug)]
pub enum LoadError {
    NotFound,
    Parse(String),
    Io(std::io::Error),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::NotFound => write!(f, "command file not found"),
            LoadError::Parse(msg) => write!(f, "invalid command list: {msg}"),
            LoadError::Io(e) => write!(f, "failed to read command file: {e}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(e: std::io::Error) -> Self {
        if e.kind() == std::io::ErrorKind::NotFound {
            LoadError::NotFound
        } else {
            LoadError::Io(e)
        }
    }
}

/// Built-in command table written out on first run.
pub fn defaults() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("Cheats on", "cheats true", "Enable cheat commands"),
        CommandEntry::new("Cheats off", "cheats false", "Disable cheat commands"),
        CommandEntry::new("Teleport to start", "teleport 0 0 0", "Move the player to the origin"),
        CommandEntry::new("Heal", "heal", "Restore all health"),
        CommandEntry::new("Spawn pistol", "spawn item_pistol", "Spawn a pistol"),
        CommandEntry::new("Spawn rifle", "spawn item_rifle", "Spawn a rifle"),
    ]
}

/// Parse a JSON array of command objects. Empty documents and empty arrays
/// are rejected so callers never end up with a blank panel.
pub fn parse_commands(content: &str) -> Result<Vec<CommandEntry>, LoadError> {
    if content.trim().is_empty() {
        return Err(LoadError::Parse("document is empty".into()));
    }
    let list: Vec<CommandEntry> =
        serde_json::from_str(content).map_err(|e| LoadError::Parse(e.to_string()))?;
    if list.is_empty() {
        return Err(LoadError::Parse("command list is empty".into()));
    }
    Ok(list)
}

pub fn load(path: &Path) -> Result<Vec<CommandEntry>, LoadError> {
    let bytes = std::fs::read(path)?;
    let content = std::str::from_utf8(&bytes).map_err(|e| LoadError::Parse(e.to_string()))?;
    parse_commands(content)
}

pub fn save(path: &Path, entries: &[CommandEntry]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(entries)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Load the command list, falling back to [`defaults`] on any failure.
///
/// A missing file is replaced by the defaults on disk. Unreadable or
/// malformed files are left untouched.
pub fn load_or_default(path: &Path) -> Vec<CommandEntry> {
    load_or_default_reporting(path).0
}

/// Same as [`load_or_default`] but also reports whether the entries came from
/// disk or from the built-in table.
pub(crate) fn load_or_default_reporting(path: &Path) -> (Vec<CommandEntry>, bool) {
    match load(path) {
        Ok(list) => {
            tracing::info!(path = %path.display(), count = list.len(), "loaded commands");
            (list, true)
        }
        Err(LoadError::NotFound) => {
            let list = defaults();
            match save(path, &list) {
                Ok(()) => {
                    tracing::info!(path = %path.display(), "wrote default command file")
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "failed to write default command file")
                }
            }
            (list, false)
        }
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "failed to load commands; using defaults");
            (defaults(), false)
        }
    }
}
