use std::cmp::Reverse;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const HIGHSCORE_CAPACITY: usize = 5;
pub const MAX_INITIALS: usize = 3;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighscoreEntry {
    pub name: String,
    pub score: u32,
    pub date: NaiveDate,
}

impl HighscoreEntry {
    pub fn new(name: impl Into<String>, score: u32, date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            score,
            date,
        }
    }
}

/// Leaderboard ordered by score (highest first), then date (oldest first).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HighscoreTable {
    entries: Vec<HighscoreEntry>,
}

impl HighscoreTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[HighscoreEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= HIGHSCORE_CAPACITY
    }

    pub fn lowest(&self) -> Option<u32> {
        self.entries.last().map(|e| e.score)
    }

    /// Any score earns a slot while the table has room; after that it has
    /// to beat the current lowest entry.
    pub fn is_record(&self, score: u32) -> bool {
        match self.lowest() {
            Some(lowest) if self.is_full() => score > lowest,
            _ => true,
        }
    }

    /// Inserts, re-sorts and truncates. Returns the new entry's rank, or
    /// `None` if it fell off the end of the table.
    pub fn insert(&mut self, entry: HighscoreEntry) -> Option<usize> {
        self.entries.push(entry);
        let inserted = self.entries.len() - 1;

        let mut order: Vec<usize> = (0..self.entries.len()).collect();
        order.sort_by_key(|&i| (Reverse(self.entries[i].score), self.entries[i].date));
        let rank = order.iter().position(|&i| i == inserted);

        self.normalize();
        rank.filter(|&r| r < HIGHSCORE_CAPACITY)
    }

    /// Restores ordering and capacity, e.g. after loading a hand-edited file.
    pub fn normalize(&mut self) {
        self.entries.sort_by_key(|e| (Reverse(e.score), e.date));
        self.entries.truncate(HIGHSCORE_CAPACITY);
    }
}

/// Up to three uppercase alphanumerics typed on the game over screen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Initials {
    text: String,
}

impl Initials {
    pub fn push(&mut self, c: char) -> bool {
        if self.text.len() >= MAX_INITIALS || !c.is_ascii_alphanumeric() {
            return false;
        }
        self.text.push(c.to_ascii_uppercase());
        true
    }

    pub fn pop(&mut self) -> Option<char> {
        self.text.pop()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
