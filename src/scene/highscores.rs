use super::{Flow, SceneRequest};
use crate::context::GameContext;
use crate::input::InputFrame;
use crate::render::{Canvas, HighscoresView};
use crate::settings::Action;

#[derive(Default)]
pub struct HighscoresScene;

impl HighscoresScene {
    pub fn new() -> Self {
        Self
    }

    pub(super) fn process_input(&mut self, ctx: &mut GameContext, input: &InputFrame) -> Flow {
        let keys = ctx.store.keymap();
        let leave = input
            .presses
            .iter()
            .any(|p| keys.is(p.key, Action::Accept) || keys.is(p.key, Action::Exit));
        if leave {
            Flow::SwitchTo(SceneRequest::Menu)
        } else {
            Flow::Continue
        }
    }

    pub(super) fn render(&mut self, ctx: &GameContext, canvas: &mut dyn Canvas) {
        canvas.draw_highscores(&HighscoresView {
            table: ctx.store.highscores(),
            back_key: ctx.store.keymap().key(Action::Accept),
        });
    }
}
