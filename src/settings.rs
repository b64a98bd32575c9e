//! The `settings` file: `key=value` defaults read once at startup.

use crate::error::NotesError;
use log::debug;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const DEFAULT_NOTEBOOK: &str = "default_notebook";
pub const DEFAULT_NOTE_COUNT: &str = "default_note_count";

/// Parse `key=value` lines. Lines that do not split into exactly two parts
/// on `=` are skipped; keys and values are trimmed.
pub fn parse(raw: &str) -> BTreeMap<String, String> {
    let mut values = BTreeMap::new();
    for line in raw.lines() {
        let parts: Vec<&str> = line.split('=').collect();
        if let [key, value] = parts.as_slice() {
            values.insert(key.trim().to_string(), value.trim().to_string());
        }
    }
    values
}

pub fn load(path: &Path) -> Result<BTreeMap<String, String>, NotesError> {
    let raw = fs::read_to_string(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => NotesError::SettingsMissing(path.to_path_buf()),
        _ => NotesError::Io(err),
    })?;
    Ok(parse(&raw))
}

pub fn save(path: &Path, values: &BTreeMap<String, String>) -> io::Result<()> {
    let mut out = String::new();
    for (key, value) in values {
        out.push_str(&format!("{key}={value}\n"));
    }
    fs::write(path, out)
}

#[derive(Debug, Clone)]
pub struct Settings {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl Settings {
    /// Load and check that every required key is present.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, NotesError> {
        let path = path.into();
        let values = load(&path)?;
        for key in [DEFAULT_NOTEBOOK, DEFAULT_NOTE_COUNT] {
            if !values.contains_key(key) {
                return Err(NotesError::MissingSetting(key));
            }
        }
        debug!("loaded {} setting(s) from {}", values.len(), path.display());
        Ok(Self { path, values })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.values.insert(key.to_string(), value.into());
    }

    pub fn save(&self) -> io::Result<()> {
        save(&self.path, &self.values)
    }

    pub fn default_notebook(&self) -> Result<&str, NotesError> {
        self.get(DEFAULT_NOTEBOOK)
            .ok_or(NotesError::MissingSetting(DEFAULT_NOTEBOOK))
    }

    pub fn default_note_count(&self) -> Result<i64, NotesError> {
        let raw = self
            .get(DEFAULT_NOTE_COUNT)
            .ok_or(NotesError::MissingSetting(DEFAULT_NOTE_COUNT))?;
        raw.parse().map_err(|_| NotesError::InvalidSetting {
            key: DEFAULT_NOTE_COUNT,
            value: raw.to_string(),
        })
    }
}
