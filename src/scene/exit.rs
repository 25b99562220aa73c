use super::Flow;
use crate::render::Canvas;

pub const CREDITS_MS: u64 = 2500;

/// Credits, shown briefly before the program ends.
#[derive(Default)]
pub struct ExitScene {
    started_at: Option<u64>,
}

impl ExitScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub(super) fn update(&mut self, now: u64) -> Flow {
        match self.started_at {
            None => {
                self.started_at = Some(now);
                Flow::Continue
            }
            Some(started) if now.saturating_sub(started) >= CREDITS_MS => Flow::Terminate,
            Some(_) => Flow::Continue,
        }
    }

    pub(super) fn render(&mut self, canvas: &mut dyn Canvas) {
        canvas.draw_credits();
    }
}
