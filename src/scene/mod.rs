//! Scene state machine. Every switch builds a brand-new scene; the old one
//! is dropped as soon as the driver swaps it out.

mod exit;
mod game;
mod game_over;
mod highscores;
mod menu;
mod settings;
mod transition;

use std::mem;

use tracing::info;

use crate::context::GameContext;
use crate::input::InputFrame;
use crate::render::Canvas;

pub use exit::{CREDITS_MS, ExitScene};
pub use game::{CRASH_DELAY_MS, GameScene, GameState};
pub use game_over::GameOverScene;
pub use highscores::HighscoresScene;
pub use menu::{MenuOption, MenuScene};
pub use settings::{SettingsScene, VOLUME_STEP};
pub use transition::{TRANSITION_MS, TransitionScene};

/// What to build next, with the constructor arguments it needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SceneRequest {
    Menu,
    Game,
    GameOver { score: u32 },
    Settings,
    Highscores,
    Exit,
    Transition(Box<SceneRequest>),
}

impl SceneRequest {
    pub fn fade_to(target: SceneRequest) -> Self {
        SceneRequest::Transition(Box::new(target))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Next {
    /// Keep running the current scene.
    Stay,
    Switch(SceneRequest),
    /// Leave the main loop.
    Terminate,
}

/// Outcome of a scene callback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    SwitchTo(SceneRequest),
    Terminate,
}

pub enum SceneKind {
    Menu(MenuScene),
    Transition(TransitionScene),
    Game(GameScene),
    GameOver(GameOverScene),
    Settings(SettingsScene),
    Highscores(HighscoresScene),
    Exit(ExitScene),
}

pub struct Scene {
    id: u64,
    kind: SceneKind,
    next: Next,
}

impl Scene {
    pub fn build(request: SceneRequest, ctx: &mut GameContext) -> Self {
        let kind = match request {
            SceneRequest::Menu => SceneKind::Menu(MenuScene::new(ctx)),
            SceneRequest::Game => SceneKind::Game(GameScene::new(ctx)),
            SceneRequest::GameOver { score } => SceneKind::GameOver(GameOverScene::new(ctx, score)),
            SceneRequest::Settings => SceneKind::Settings(SettingsScene::new(ctx)),
            SceneRequest::Highscores => SceneKind::Highscores(HighscoresScene::new()),
            SceneRequest::Exit => SceneKind::Exit(ExitScene::new()),
            SceneRequest::Transition(target) => {
                SceneKind::Transition(TransitionScene::new(*target))
            }
        };
        let scene = Self {
            id: ctx.next_scene_id(),
            kind,
            next: Next::Stay,
        };
        info!(scene = scene.name(), id = scene.id, "scene_entered");
        scene
    }

    pub fn process_input(&mut self, ctx: &mut GameContext, input: &InputFrame) {
        let flow = match &mut self.kind {
            SceneKind::Menu(scene) => scene.process_input(ctx, input),
            SceneKind::Game(scene) => scene.process_input(ctx, input),
            SceneKind::GameOver(scene) => scene.process_input(ctx, input),
            SceneKind::Settings(scene) => scene.process_input(ctx, input),
            SceneKind::Highscores(scene) => scene.process_input(ctx, input),
            SceneKind::Transition(_) | SceneKind::Exit(_) => Flow::Continue,
        };
        self.follow(ctx, flow);
    }

    pub fn update(&mut self, ctx: &mut GameContext, now: u64) {
        let flow = match &mut self.kind {
            SceneKind::Menu(scene) => scene.update(ctx),
            SceneKind::Transition(scene) => scene.update(now),
            SceneKind::Game(scene) => scene.update(ctx, now),
            SceneKind::Exit(scene) => scene.update(now),
            SceneKind::GameOver(_) | SceneKind::Settings(_) | SceneKind::Highscores(_) => {
                Flow::Continue
            }
        };
        self.follow(ctx, flow);
    }

    pub fn render(&mut self, ctx: &GameContext, canvas: &mut dyn Canvas) {
        match &mut self.kind {
            SceneKind::Menu(scene) => scene.render(canvas),
            SceneKind::Transition(scene) => scene.render(canvas),
            SceneKind::Game(scene) => scene.render(ctx, canvas),
            SceneKind::GameOver(scene) => scene.render(ctx, canvas),
            SceneKind::Settings(scene) => scene.render(ctx, canvas),
            SceneKind::Highscores(scene) => scene.render(ctx, canvas),
            SceneKind::Exit(scene) => scene.render(canvas),
        }
    }

    /// Stops the music and records where to go; `None` ends the program.
    pub fn switch_to_scene(&mut self, ctx: &mut GameContext, target: Option<SceneRequest>) {
        ctx.audio.stop_music();
        self.next = match target {
            Some(request) => Next::Switch(request),
            None => Next::Terminate,
        };
    }

    pub fn terminate(&mut self, ctx: &mut GameContext) {
        self.switch_to_scene(ctx, None);
    }

    fn follow(&mut self, ctx: &mut GameContext, flow: Flow) {
        match flow {
            Flow::Continue => {}
            Flow::SwitchTo(request) => self.switch_to_scene(ctx, Some(request)),
            Flow::Terminate => self.terminate(ctx),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn next(&self) -> &Next {
        &self.next
    }

    pub fn kind(&self) -> &SceneKind {
        &self.kind
    }

    pub fn kind_mut(&mut self) -> &mut SceneKind {
        &mut self.kind
    }

    pub fn name(&self) -> &'static str {
        match self.kind {
            SceneKind::Menu(_) => "menu",
            SceneKind::Transition(_) => "transition",
            SceneKind::Game(_) => "game",
            SceneKind::GameOver(_) => "game_over",
            SceneKind::Settings(_) => "settings",
            SceneKind::Highscores(_) => "highscores",
            SceneKind::Exit(_) => "exit",
        }
    }
}

/// Owns the active scene and swaps it between frames.
pub struct SceneMachine {
    active: Scene,
}

impl SceneMachine {
    pub fn new(ctx: &mut GameContext, initial: SceneRequest) -> Self {
        Self {
            active: Scene::build(initial, ctx),
        }
    }

    /// One frame: input, update, render, then apply any pending switch.
    /// Returns `false` once the program should exit.
    pub fn frame(
        &mut self,
        ctx: &mut GameContext,
        input: &InputFrame,
        now: u64,
        canvas: &mut dyn Canvas,
    ) -> bool {
        self.active.process_input(ctx, input);
        self.active.update(ctx, now);
        self.active.render(ctx, canvas);
        self.advance(ctx)
    }

    pub fn advance(&mut self, ctx: &mut GameContext) -> bool {
        match mem::replace(&mut self.active.next, Next::Stay) {
            Next::Stay => true,
            Next::Switch(request) => {
                let from = self.active.name();
                self.active = Scene::build(request, ctx);
                info!(from, to = self.active.name(), "scene_switched");
                true
            }
            Next::Terminate => {
                self.active.next = Next::Terminate;
                info!(scene = self.active.name(), "scene_loop_finished");
                false
            }
        }
    }

    pub fn active(&self) -> &Scene {
        &self.active
    }

    pub fn active_mut(&mut self) -> &mut Scene {
        &mut self.active
    }
}
