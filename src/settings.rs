use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::grid::Direction;
use crate::highscore::HighscoreTable;
use crate::input::Key;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed settings in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode settings: {0}")]
    Encode(#[source] serde_json::Error),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub sound: f32,
    pub music: f32,
    pub classic: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sound: 1.0,
            music: 0.8,
            classic: false,
        }
    }
}

impl Settings {
    pub fn set_sound(&mut self, volume: f32) {
        self.sound = volume.clamp(0.0, 1.0);
    }

    pub fn set_music(&mut self, volume: f32) {
        self.music = volume.clamp(0.0, 1.0);
    }
}

/// Single-key actions. Movement keys live in [`KeyMapping::direction`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Grid,
    Pause,
    Exit,
    Accept,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyMapping {
    pub direction: BTreeMap<Key, Direction>,
    pub grid: Key,
    pub pause: Key,
    pub exit: Key,
    pub accept: Key,
}

impl Default for KeyMapping {
    fn default() -> Self {
        Self {
            direction: BTreeMap::from([
                (Key::Up, Direction::Up),
                (Key::Down, Direction::Down),
                (Key::Left, Direction::Left),
                (Key::Right, Direction::Right),
            ]),
            grid: Key::Char('g'),
            pause: Key::Char('p'),
            exit: Key::Escape,
            accept: Key::Return,
        }
    }
}

impl KeyMapping {
    pub fn key(&self, action: Action) -> Key {
        match action {
            Action::Grid => self.grid,
            Action::Pause => self.pause,
            Action::Exit => self.exit,
            Action::Accept => self.accept,
        }
    }

    pub fn is(&self, key: Key, action: Action) -> bool {
        self.key(action) == key
    }

    pub fn direction_for(&self, key: Key) -> Option<Direction> {
        self.direction.get(&key).copied()
    }

    pub fn key_for_direction(&self, direction: Direction) -> Option<Key> {
        self.direction
            .iter()
            .find_map(|(key, d)| (*d == direction).then_some(*key))
    }
}

/// The persisted document: settings, key bindings and the leaderboard.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaveData {
    pub settings: Settings,
    pub keymapping: KeyMapping,
    pub highscores: HighscoreTable,
}

impl SaveData {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        let mut data: SaveData = serde_json::from_str(text)?;
        data.highscores.normalize();
        data.settings.set_sound(data.settings.sound);
        data.settings.set_music(data.settings.music);
        Ok(data)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// In-memory settings with an optional backing file.
#[derive(Debug, Default)]
pub struct SettingsStore {
    path: Option<PathBuf>,
    data: SaveData,
}

impl SettingsStore {
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Loads `path`, creating it with defaults when it does not exist yet.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        match fs::read_to_string(&path) {
            Ok(text) => {
                let data = SaveData::from_json(&text).map_err(|source| StoreError::Parse {
                    path: path.clone(),
                    source,
                })?;
                info!(path = %path.display(), "settings_loaded");
                Ok(Self {
                    path: Some(path),
                    data,
                })
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                let store = Self {
                    path: Some(path),
                    data: SaveData::default(),
                };
                if let Err(error) = store.persist() {
                    warn!(error = %error, "settings_create_failed");
                }
                Ok(store)
            }
            Err(source) => Err(StoreError::Read { path, source }),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn persist(&self) -> Result<(), StoreError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let text = self.data.to_json().map_err(StoreError::Encode)?;
        fs::write(path, text).map_err(|source| StoreError::Write {
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), "settings_saved");
        Ok(())
    }

    pub fn data(&self) -> &SaveData {
        &self.data
    }

    pub fn settings(&self) -> &Settings {
        &self.data.settings
    }

    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.data.settings
    }

    pub fn keymap(&self) -> &KeyMapping {
        &self.data.keymapping
    }

    pub fn highscores(&self) -> &HighscoreTable {
        &self.data.highscores
    }

    pub fn highscores_mut(&mut self) -> &mut HighscoreTable {
        &mut self.data.highscores
    }
}
