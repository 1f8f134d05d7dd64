use crate::commands::{self, CommandEntry};
use crate::settings::PanelSettings;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Where the currently displayed command list came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandSource {
    File,
    Override,
    Defaults,
}

impl std::fmt::Display for CommandSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandSource::File => write!(f, "command file"),
            CommandSource::Override => write!(f, "settings override"),
            CommandSource::Defaults => write!(f, "built-in defaults"),
        }
    }
}

/// Owns the ordered command list shown by the panel.
///
/// The list is replaced wholesale on every reload. Callers holding a snapshot
/// from [`CommandStore::entries`] keep the old list until they ask again.
pub struct CommandStore {
    path: PathBuf,
    override_json: Option<String>,
    entries: Arc<[CommandEntry]>,
    source: CommandSource,
}

impl CommandStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_override(path, None)
    }

    pub fn with_override(path: impl Into<PathBuf>, override_json: Option<String>) -> Self {
        let mut store = Self {
            path: path.into(),
            override_json,
            entries: Arc::from(Vec::new()),
            source: CommandSource::Defaults,
        };
        store.reload();
        store
    }

    pub fn from_settings(settings: &PanelSettings) -> Self {
        Self::with_override(
            settings.commands_path(),
            settings.custom_commands_json.clone(),
        )
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn source(&self) -> CommandSource {
        self.source
    }

    pub fn entries(&self) -> Arc<[CommandEntry]> {
        Arc::clone(&self.entries)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CommandEntry> {
        self.entries.get(index)
    }

    /// Point the store at new settings without reloading.
    pub fn reconfigure(&mut self, settings: &PanelSettings) {
        self.path = settings.commands_path();
        self.override_json = settings.custom_commands_json.clone();
    }

    pub fn reload(&mut self) {
        let (list, source) = self.resolve();
        tracing::debug!(count = list.len(), %source, "command list replaced");
        self.entries = Arc::from(list);
        self.source = source;
    }

    fn resolve(&self) -> (Vec<CommandEntry>, CommandSource) {
        if let Some(json) = self.override_json.as_deref().filter(|j| !j.trim().is_empty()) {
            match commands::parse_commands(json) {
                Ok(list) => {
                    tracing::info!(count = list.len(), "loaded commands from settings override");
                    return (list, CommandSource::Override);
                }
                Err(e) => {
                    tracing::error!(error = %e, "invalid command override in settings; falling back to file");
                }
            }
        }
        let (list, from_file) = commands::load_or_default_reporting(&self.path);
        let source = if from_file {
            CommandSource::File
        } else {
            CommandSource::Defaults
        };
        (list, source)
    }
}
