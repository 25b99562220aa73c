use tracing::info;

use super::{Flow, SceneRequest};
use crate::apple::Apple;
use crate::audio::{Music, Sound};
use crate::context::GameContext;
use crate::input::InputFrame;
use crate::render::{BoardView, Canvas};
use crate::settings::Action;
use crate::snake::Snake;

/// Time between the crash and the game over screen.
pub const CRASH_DELAY_MS: u64 = 3000;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameState {
    Running,
    Paused,
    Crashed { at: u64 },
    /// No free cell left for an apple.
    Cleared { at: u64 },
}

pub struct GameScene {
    snake: Snake,
    apple: Option<Apple>,
    state: GameState,
    show_grid: bool,
    // one-shot overlays (crash board, pause banner) already drawn
    event_painted: bool,
}

impl GameScene {
    pub fn new(ctx: &mut GameContext) -> Self {
        let snake = Snake::new(ctx.grid, ctx.rng());
        let apple = Apple::spawn(ctx.grid, snake.cells(), ctx.rng());
        Self::with_entities(ctx, snake, apple)
    }

    pub fn with_entities(ctx: &mut GameContext, snake: Snake, apple: Option<Apple>) -> Self {
        ctx.apply_volumes();
        ctx.audio.play_music(Music::Game);
        Self {
            snake,
            apple,
            state: GameState::Running,
            show_grid: false,
            event_painted: false,
        }
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn snake_mut(&mut self) -> &mut Snake {
        &mut self.snake
    }

    pub fn apple(&self) -> Option<&Apple> {
        self.apple.as_ref()
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn show_grid(&self) -> bool {
        self.show_grid
    }

    pub fn event_painted(&self) -> bool {
        self.event_painted
    }

    fn pause(&mut self, ctx: &mut GameContext) {
        ctx.audio.pause_music();
        self.state = GameState::Paused;
        self.event_painted = false;
    }

    fn unpause(&mut self, ctx: &mut GameContext) {
        ctx.audio.resume_music();
        self.state = GameState::Running;
    }

    fn finish(&mut self, ctx: &mut GameContext, state: GameState) {
        ctx.audio.stop_music();
        self.state = state;
        self.event_painted = false;
        info!(score = self.snake.score(), state = ?state, "game_finished");
    }

    pub(super) fn process_input(&mut self, ctx: &mut GameContext, input: &InputFrame) -> Flow {
        for press in &input.presses {
            let keys = ctx.store.keymap();
            match self.state {
                GameState::Crashed { .. } | GameState::Cleared { .. } => break,
                GameState::Paused => {
                    if keys.is(press.key, Action::Pause) {
                        self.unpause(ctx);
                    }
                }
                GameState::Running => {
                    if let Some(direction) = keys.direction_for(press.key) {
                        self.snake.queue_direction(direction);
                    } else if keys.is(press.key, Action::Grid) {
                        self.show_grid = !self.show_grid;
                    } else if keys.is(press.key, Action::Pause) {
                        self.pause(ctx);
                    } else if keys.is(press.key, Action::Exit) {
                        return Flow::SwitchTo(SceneRequest::Menu);
                    }
                }
            }
        }
        Flow::Continue
    }

    pub(super) fn update(&mut self, ctx: &mut GameContext, now: u64) -> Flow {
        match self.state {
            GameState::Running => {
                if self.apple.is_none() {
                    self.finish(ctx, GameState::Cleared { at: now });
                    return Flow::Continue;
                }
                if !self.snake.step(now) {
                    return Flow::Continue;
                }

                if self.apple.map(|a| a.position()) == Some(self.snake.head()) {
                    ctx.audio.stop(Sound::Eat);
                    ctx.audio.play(Sound::Eat);
                    self.snake.grow();
                    self.apple = Apple::spawn(ctx.grid, self.snake.cells(), ctx.rng());
                }

                if self.snake.check_collision() {
                    ctx.audio.play(Sound::Crash);
                    self.finish(ctx, GameState::Crashed { at: now });
                }
                Flow::Continue
            }
            GameState::Paused => Flow::Continue,
            GameState::Crashed { at } | GameState::Cleared { at } => {
                if now.saturating_sub(at) > CRASH_DELAY_MS {
                    Flow::SwitchTo(SceneRequest::GameOver {
                        score: self.snake.score(),
                    })
                } else {
                    Flow::Continue
                }
            }
        }
    }

    pub(super) fn render(&mut self, ctx: &GameContext, canvas: &mut dyn Canvas) {
        let board = BoardView {
            grid: ctx.grid,
            snake: &self.snake,
            apple: self.apple.map(|a| a.position()),
            show_grid: self.show_grid,
            classic: ctx.store.settings().classic,
        };
        match self.state {
            GameState::Running => canvas.draw_board(&board),
            GameState::Crashed { .. } | GameState::Cleared { .. } if !self.event_painted => {
                canvas.draw_board(&board);
                self.event_painted = true;
            }
            GameState::Crashed { .. } => canvas.draw_crash(self.snake.head()),
            GameState::Cleared { .. } => {}
            GameState::Paused if !self.event_painted => {
                canvas.draw_pause(self.snake.score());
                self.event_painted = true;
            }
            GameState::Paused => {}
        }
    }
}
