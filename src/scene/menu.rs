use super::{Flow, SceneRequest};
use crate::audio::{Music, Sound};
use crate::context::GameContext;
use crate::input::{InputFrame, Key};
use crate::render::{Canvas, MenuView};
use crate::settings::Action;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MenuOption {
    Play,
    Settings,
    Highscores,
    Quit,
}

impl MenuOption {
    pub const ALL: [MenuOption; 4] = [
        MenuOption::Play,
        MenuOption::Settings,
        MenuOption::Highscores,
        MenuOption::Quit,
    ];

    const LABELS: [&'static str; 4] = ["Play", "Settings", "Highscores", "Quit"];

    pub fn label(self) -> &'static str {
        Self::LABELS[self as usize]
    }

    pub fn request(self) -> SceneRequest {
        match self {
            MenuOption::Play => SceneRequest::fade_to(SceneRequest::Game),
            MenuOption::Settings => SceneRequest::fade_to(SceneRequest::Settings),
            MenuOption::Highscores => SceneRequest::fade_to(SceneRequest::Highscores),
            MenuOption::Quit => SceneRequest::Exit,
        }
    }
}

pub struct MenuScene {
    index: usize,
    // accept was pressed; switch once the accept sound has finished
    selected: bool,
}

impl MenuScene {
    pub fn new(ctx: &mut GameContext) -> Self {
        ctx.apply_volumes();
        ctx.audio.play_music(Music::Menu);
        Self {
            index: 0,
            selected: false,
        }
    }

    pub fn highlighted(&self) -> MenuOption {
        MenuOption::ALL[self.index]
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub(super) fn process_input(&mut self, ctx: &mut GameContext, input: &InputFrame) -> Flow {
        if self.selected {
            return Flow::Continue;
        }
        let count = MenuOption::ALL.len();
        for press in &input.presses {
            let keys = ctx.store.keymap();
            if keys.is(press.key, Action::Accept) {
                ctx.audio.stop(Sound::MenuAccept);
                ctx.audio.play(Sound::MenuAccept);
                self.selected = true;
                return Flow::Continue;
            }
            if keys.is(press.key, Action::Exit) {
                return Flow::SwitchTo(SceneRequest::Exit);
            }
            match press.key {
                Key::Up => self.index = (self.index + count - 1) % count,
                Key::Down => self.index = (self.index + 1) % count,
                _ => continue,
            }
            ctx.audio.stop(Sound::MenuSelect);
            ctx.audio.play(Sound::MenuSelect);
        }
        Flow::Continue
    }

    pub(super) fn update(&mut self, ctx: &mut GameContext) -> Flow {
        if self.selected && !ctx.audio.is_busy() {
            Flow::SwitchTo(self.highlighted().request())
        } else {
            Flow::Continue
        }
    }

    pub(super) fn render(&mut self, canvas: &mut dyn Canvas) {
        canvas.draw_menu(&MenuView {
            options: &MenuOption::LABELS,
            selected: self.index,
        });
    }
}
