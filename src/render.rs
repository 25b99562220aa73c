//! Draw calls the scenes issue. The frontend decides what they look like.

use crate::grid::{Cell, Grid};
use crate::highscore::HighscoreTable;
use crate::input::Key;
use crate::snake::Snake;

pub struct BoardView<'a> {
    pub grid: Grid,
    pub snake: &'a Snake,
    pub apple: Option<Cell>,
    pub show_grid: bool,
    pub classic: bool,
}

pub struct MenuView<'a> {
    pub options: &'a [&'a str],
    pub selected: usize,
}

pub struct GameOverView<'a> {
    pub score: u32,
    pub record: bool,
    pub initials: &'a str,
    pub pun: &'a str,
    pub replay_key: Key,
    pub menu_key: Key,
}

pub struct HighscoresView<'a> {
    pub table: &'a HighscoreTable,
    pub back_key: Key,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SettingsRow {
    Sound,
    Music,
    Classic,
}

impl SettingsRow {
    pub const ALL: [SettingsRow; 3] = [
        SettingsRow::Sound,
        SettingsRow::Music,
        SettingsRow::Classic,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SettingsRow::Sound => "Sound",
            SettingsRow::Music => "Music",
            SettingsRow::Classic => "Classic look",
        }
    }
}

pub struct SettingsView {
    pub selected: SettingsRow,
    pub sound: f32,
    pub music: f32,
    pub classic: bool,
    pub back_key: Key,
}

pub trait Canvas {
    /// Background, snake, apple and optional grid lines.
    fn draw_board(&mut self, board: &BoardView<'_>);
    /// Called every frame after a crash, on top of the last board.
    fn draw_crash(&mut self, head: Cell);
    /// Drawn once when the game is paused.
    fn draw_pause(&mut self, score: u32);
    /// Darkens whatever is on screen a little more.
    fn draw_fade(&mut self);
    fn draw_menu(&mut self, menu: &MenuView<'_>);
    fn draw_game_over(&mut self, view: &GameOverView<'_>);
    fn draw_highscores(&mut self, view: &HighscoresView<'_>);
    fn draw_settings(&mut self, view: &SettingsView);
    fn draw_credits(&mut self);
}
