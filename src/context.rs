use chrono::{Local, NaiveDate};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::audio::{AudioSink, Silent};
use crate::grid::Grid;
use crate::puns::PunBook;
use crate::settings::SettingsStore;

/// Process-wide state shared by every scene: settings, audio, randomness.
pub struct GameContext {
    pub grid: Grid,
    pub store: SettingsStore,
    pub audio: Box<dyn AudioSink>,
    pub puns: PunBook,
    rng: SmallRng,
    calendar: fn() -> NaiveDate,
    scene_serial: u64,
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

impl GameContext {
    pub fn new(grid: Grid, store: SettingsStore, audio: Box<dyn AudioSink>, rng: SmallRng) -> Self {
        Self {
            grid,
            store,
            audio,
            puns: PunBook::default(),
            rng,
            calendar: local_today,
            scene_serial: 0,
        }
    }

    /// Silent, in-memory context with a seeded generator.
    pub fn headless(grid: Grid, seed: u64) -> Self {
        Self::new(
            grid,
            SettingsStore::in_memory(),
            Box::new(Silent),
            SmallRng::seed_from_u64(seed),
        )
    }

    pub fn with_puns(mut self, puns: PunBook) -> Self {
        self.puns = puns;
        self
    }

    pub fn with_calendar(mut self, calendar: fn() -> NaiveDate) -> Self {
        self.calendar = calendar;
        self
    }

    pub fn with_audio(mut self, audio: Box<dyn AudioSink>) -> Self {
        self.audio = audio;
        self
    }

    pub fn today(&self) -> NaiveDate {
        (self.calendar)()
    }

    pub fn rng(&mut self) -> &mut SmallRng {
        &mut self.rng
    }

    pub fn pick_pun(&mut self) -> String {
        self.puns.pick(&mut self.rng).to_owned()
    }

    pub fn next_scene_id(&mut self) -> u64 {
        self.scene_serial += 1;
        self.scene_serial
    }

    /// Pushes the stored volumes to the audio sink.
    pub fn apply_volumes(&mut self) {
        let settings = self.store.settings();
        let (sound, music) = (settings.sound, settings.music);
        self.audio.set_volumes(sound, music);
    }
}
