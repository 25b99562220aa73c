#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use chrono::NaiveDate;
use snake_arcade::audio::{AudioSink, Music, Sound};
use snake_arcade::grid::{Cell, Grid};
use snake_arcade::render::{
    BoardView, Canvas, GameOverView, HighscoresView, MenuView, SettingsView,
};
use snake_arcade::GameContext;

#[derive(Clone, Debug, PartialEq)]
pub enum AudioEvent {
    Play(Sound),
    Stop(Sound),
    Music(Music),
    PauseMusic,
    ResumeMusic,
    StopMusic,
}

/// Audio sink that records every call into a shared log.
#[derive(Clone, Default)]
pub struct RecordingAudio {
    pub log: Rc<RefCell<Vec<AudioEvent>>>,
    pub busy: Rc<RefCell<bool>>,
}

impl RecordingAudio {
    pub fn played(&self, sound: Sound) -> usize {
        self.log
            .borrow()
            .iter()
            .filter(|e| **e == AudioEvent::Play(sound))
            .count()
    }

    pub fn events(&self) -> Vec<AudioEvent> {
        self.log.borrow().clone()
    }
}

impl AudioSink for RecordingAudio {
    fn play(&mut self, sound: Sound) {
        self.log.borrow_mut().push(AudioEvent::Play(sound));
    }
    fn stop(&mut self, sound: Sound) {
        self.log.borrow_mut().push(AudioEvent::Stop(sound));
    }
    fn is_busy(&self) -> bool {
        *self.busy.borrow()
    }
    fn play_music(&mut self, music: Music) {
        self.log.borrow_mut().push(AudioEvent::Music(music));
    }
    fn pause_music(&mut self) {
        self.log.borrow_mut().push(AudioEvent::PauseMusic);
    }
    fn resume_music(&mut self) {
        self.log.borrow_mut().push(AudioEvent::ResumeMusic);
    }
    fn stop_music(&mut self) {
        self.log.borrow_mut().push(AudioEvent::StopMusic);
    }
    fn set_volumes(&mut self, _sound: f32, _music: f32) {}
}

#[derive(Clone, Debug, PartialEq)]
pub enum Drawn {
    Board { head: Cell, apple: Option<Cell> },
    Crash(Cell),
    Pause(u32),
    Fade,
    Menu(usize),
    GameOver { score: u32, record: bool, initials: String },
    Highscores(usize),
    Settings,
    Credits,
}

#[derive(Default)]
pub struct RecordingCanvas {
    pub drawn: Vec<Drawn>,
}

impl RecordingCanvas {
    pub fn take(&mut self) -> Vec<Drawn> {
        std::mem::take(&mut self.drawn)
    }
}

impl Canvas for RecordingCanvas {
    fn draw_board(&mut self, board: &BoardView<'_>) {
        self.drawn.push(Drawn::Board {
            head: board.snake.head(),
            apple: board.apple,
        });
    }
    fn draw_crash(&mut self, head: Cell) {
        self.drawn.push(Drawn::Crash(head));
    }
    fn draw_pause(&mut self, score: u32) {
        self.drawn.push(Drawn::Pause(score));
    }
    fn draw_fade(&mut self) {
        self.drawn.push(Drawn::Fade);
    }
    fn draw_menu(&mut self, menu: &MenuView<'_>) {
        self.drawn.push(Drawn::Menu(menu.selected));
    }
    fn draw_game_over(&mut self, view: &GameOverView<'_>) {
        self.drawn.push(Drawn::GameOver {
            score: view.score,
            record: view.record,
            initials: view.initials.to_owned(),
        });
    }
    fn draw_highscores(&mut self, view: &HighscoresView<'_>) {
        self.drawn.push(Drawn::Highscores(view.table.len()));
    }
    fn draw_settings(&mut self, _view: &SettingsView) {
        self.drawn.push(Drawn::Settings);
    }
    fn draw_credits(&mut self) {
        self.drawn.push(Drawn::Credits);
    }
}

pub const GRID: Grid = Grid::new(25, 20);

pub fn fixed_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).expect("valid date")
}

/// Headless context with recording audio and a fixed calendar.
pub fn context(seed: u64) -> (GameContext, RecordingAudio) {
    let audio = RecordingAudio::default();
    let ctx = GameContext::headless(GRID, seed)
        .with_audio(Box::new(audio.clone()))
        .with_calendar(fixed_day);
    (ctx, audio)
}
