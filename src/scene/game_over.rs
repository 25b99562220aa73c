use tracing::{info, warn};

use super::{Flow, SceneRequest};
use crate::context::GameContext;
use crate::highscore::{HighscoreEntry, Initials};
use crate::input::{InputFrame, Key};
use crate::render::{Canvas, GameOverView};
use crate::settings::Action;

pub struct GameOverScene {
    score: u32,
    // waiting for initials; cleared once the entry is committed
    record: bool,
    initials: Initials,
    pun: String,
}

impl GameOverScene {
    pub fn new(ctx: &mut GameContext, score: u32) -> Self {
        let record = ctx.store.highscores().is_record(score);
        info!(score, record, "game_over");
        Self {
            score,
            record,
            initials: Initials::default(),
            pun: ctx.pick_pun(),
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_record(&self) -> bool {
        self.record
    }

    pub fn initials(&self) -> &str {
        self.initials.as_str()
    }

    pub fn pun(&self) -> &str {
        &self.pun
    }

    pub(super) fn process_input(&mut self, ctx: &mut GameContext, input: &InputFrame) -> Flow {
        for press in &input.presses {
            let keys = ctx.store.keymap();
            let accept = keys.is(press.key, Action::Accept);
            let back = keys.is(press.key, Action::Pause) || keys.is(press.key, Action::Exit);

            if !self.record {
                if accept {
                    return Flow::SwitchTo(SceneRequest::Game);
                }
                if back {
                    return Flow::SwitchTo(SceneRequest::Menu);
                }
            } else if accept {
                self.commit(ctx);
            } else if press.key == Key::Backspace {
                self.initials.pop();
            } else if let Some(c) = press.text {
                self.initials.push(c);
            }
        }
        Flow::Continue
    }

    fn commit(&mut self, ctx: &mut GameContext) {
        let entry = HighscoreEntry::new(self.initials.as_str(), self.score, ctx.today());
        let rank = ctx.store.highscores_mut().insert(entry);
        info!(
            score = self.score,
            initials = self.initials.as_str(),
            rank = ?rank,
            "highscore_added"
        );
        if let Err(error) = ctx.store.persist() {
            warn!(error = %error, "highscore_persist_failed");
        }
        self.record = false;
    }

    pub(super) fn render(&mut self, ctx: &GameContext, canvas: &mut dyn Canvas) {
        let keys = ctx.store.keymap();
        canvas.draw_game_over(&GameOverView {
            score: self.score,
            record: self.record,
            initials: self.initials.as_str(),
            pun: &self.pun,
            replay_key: keys.key(Action::Accept),
            menu_key: keys.key(Action::Pause),
        });
    }
}
