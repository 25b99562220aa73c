use tracing::{info, warn};

use super::{Flow, SceneRequest};
use crate::audio::{Music, Sound};
use crate::context::GameContext;
use crate::input::{InputFrame, Key};
use crate::render::{Canvas, SettingsRow, SettingsView};
use crate::settings::Action;

pub const VOLUME_STEP: f32 = 0.05;

/// Volume sliders and the classic-look switch.
pub struct SettingsScene {
    index: usize,
    dirty: bool,
}

fn nudge(volume: f32, delta: f32) -> f32 {
    ((volume + delta) * 100.0).round() / 100.0
}

impl SettingsScene {
    pub fn new(ctx: &mut GameContext) -> Self {
        ctx.apply_volumes();
        ctx.audio.play_music(Music::Menu);
        Self {
            index: 0,
            dirty: false,
        }
    }

    pub fn selected(&self) -> SettingsRow {
        SettingsRow::ALL[self.index]
    }

    pub(super) fn process_input(&mut self, ctx: &mut GameContext, input: &InputFrame) -> Flow {
        let count = SettingsRow::ALL.len();
        for press in &input.presses {
            let keys = ctx.store.keymap();
            if keys.is(press.key, Action::Exit) || keys.is(press.key, Action::Pause) {
                self.save(ctx);
                return Flow::SwitchTo(SceneRequest::Menu);
            }
            let accept = keys.is(press.key, Action::Accept);
            match (press.key, self.selected()) {
                (Key::Up, _) => self.index = (self.index + count - 1) % count,
                (Key::Down, _) => self.index = (self.index + 1) % count,
                (Key::Left, row) => self.adjust(ctx, row, -VOLUME_STEP),
                (Key::Right, row) => self.adjust(ctx, row, VOLUME_STEP),
                (_, SettingsRow::Classic) if accept => self.adjust(ctx, SettingsRow::Classic, 0.0),
                _ => continue,
            }
            ctx.audio.stop(Sound::MenuSelect);
            ctx.audio.play(Sound::MenuSelect);
        }
        Flow::Continue
    }

    fn adjust(&mut self, ctx: &mut GameContext, row: SettingsRow, delta: f32) {
        let settings = ctx.store.settings_mut();
        match row {
            SettingsRow::Sound => settings.set_sound(nudge(settings.sound, delta)),
            SettingsRow::Music => settings.set_music(nudge(settings.music, delta)),
            SettingsRow::Classic => settings.classic = !settings.classic,
        }
        self.dirty = true;
        ctx.apply_volumes();
    }

    fn save(&mut self, ctx: &mut GameContext) {
        if !self.dirty {
            return;
        }
        match ctx.store.persist() {
            Ok(()) => info!(settings = ?ctx.store.settings(), "settings_updated"),
            Err(error) => warn!(error = %error, "settings_persist_failed"),
        }
        self.dirty = false;
    }

    pub(super) fn render(&mut self, ctx: &GameContext, canvas: &mut dyn Canvas) {
        let settings = ctx.store.settings();
        canvas.draw_settings(&SettingsView {
            selected: self.selected(),
            sound: settings.sound,
            music: settings.music,
            classic: settings.classic,
            back_key: ctx.store.keymap().key(Action::Exit),
        });
    }
}
