use std::fs;
use std::path::Path;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::Deserialize;
use tracing::{info, warn};

const FALLBACK_PUN: &str = "There are no snakes in my boot :(";

#[derive(Deserialize)]
struct PunFile {
    jokes: Vec<String>,
}

/// Jokes shown on the game over screen.
#[derive(Clone, Debug)]
pub struct PunBook {
    jokes: Vec<String>,
}

impl Default for PunBook {
    fn default() -> Self {
        Self {
            jokes: vec![FALLBACK_PUN.to_owned()],
        }
    }
}

impl PunBook {
    pub fn new(jokes: Vec<String>) -> Self {
        let jokes: Vec<String> = jokes.into_iter().filter(|j| !j.trim().is_empty()).collect();
        if jokes.is_empty() {
            Self::default()
        } else {
            Self { jokes }
        }
    }

    /// Never fails: anything wrong with the file leaves the built-in pun.
    pub fn load(path: &Path) -> Self {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(error) => {
                warn!(path = %path.display(), error = %error, "puns_unavailable");
                return Self::default();
            }
        };
        match serde_json::from_str::<PunFile>(&text) {
            Ok(file) => {
                let book = Self::new(file.jokes);
                info!(count = book.len(), "puns_loaded");
                book
            }
            Err(error) => {
                warn!(path = %path.display(), error = %error, "puns_malformed");
                Self::default()
            }
        }
    }

    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        self.jokes
            .choose(rng)
            .map(String::as_str)
            .unwrap_or(FALLBACK_PUN)
    }

    pub fn len(&self) -> usize {
        self.jokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jokes.is_empty()
    }
}
