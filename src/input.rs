use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Keyboard key as the game sees it. Letters and digits are stored lowercase.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Return,
    Escape,
    Backspace,
    Tab,
    Space,
    Char(char),
}

impl Key {
    pub fn char(c: char) -> Self {
        if c == ' ' {
            Key::Space
        } else {
            Key::Char(c.to_ascii_lowercase())
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Key::Up => "up",
            Key::Down => "down",
            Key::Left => "left",
            Key::Right => "right",
            Key::Return => "return",
            Key::Escape => "escape",
            Key::Backspace => "backspace",
            Key::Tab => "tab",
            Key::Space => "space",
            Key::Char(c) => return write!(f, "{c}"),
        };
        f.write_str(name)
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown key name `{0}`")]
pub struct UnknownKey(String);

impl FromStr for Key {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = match s.to_ascii_lowercase().as_str() {
            "up" => Key::Up,
            "down" => Key::Down,
            "left" => Key::Left,
            "right" => Key::Right,
            "return" | "enter" => Key::Return,
            "escape" | "esc" => Key::Escape,
            "backspace" => Key::Backspace,
            "tab" => Key::Tab,
            "space" => Key::Space,
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if !c.is_control() => Key::char(c),
                    _ => return Err(UnknownKey(s.to_owned())),
                }
            }
        };
        Ok(key)
    }
}

impl From<Key> for String {
    fn from(key: Key) -> Self {
        key.to_string()
    }
}

impl TryFrom<String> for Key {
    type Error = UnknownKey;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// One key-down event. `text` carries the printable character, if any.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub text: Option<char>,
}

impl KeyPress {
    pub fn key(key: Key) -> Self {
        Self { key, text: None }
    }

    pub fn typed(c: char) -> Self {
        Self {
            key: Key::char(c),
            text: Some(c),
        }
    }
}

/// Everything the frontend polled for one frame.
#[derive(Clone, Debug, Default)]
pub struct InputFrame {
    pub presses: Vec<KeyPress>,
    pub held: HashSet<Key>,
}

impl InputFrame {
    pub fn pressed(keys: impl IntoIterator<Item = Key>) -> Self {
        Self {
            presses: keys.into_iter().map(KeyPress::key).collect(),
            held: HashSet::new(),
        }
    }

    pub fn typed(text: &str) -> Self {
        Self {
            presses: text.chars().map(KeyPress::typed).collect(),
            held: HashSet::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.presses.is_empty()
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }
}
