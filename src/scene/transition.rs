use super::{Flow, SceneRequest};
use crate::render::Canvas;

pub const TRANSITION_MS: u64 = 1000;

/// Fades the screen out, then hands over to `target`.
pub struct TransitionScene {
    target: SceneRequest,
    started_at: Option<u64>,
}

impl TransitionScene {
    pub fn new(target: SceneRequest) -> Self {
        Self {
            target,
            started_at: None,
        }
    }

    pub fn target(&self) -> &SceneRequest {
        &self.target
    }

    pub(super) fn update(&mut self, now: u64) -> Flow {
        let started = *self.started_at.get_or_insert(now);
        if now.saturating_sub(started) > TRANSITION_MS {
            Flow::SwitchTo(self.target.clone())
        } else {
            Flow::Continue
        }
    }

    pub(super) fn render(&mut self, canvas: &mut dyn Canvas) {
        canvas.draw_fade();
    }
}
