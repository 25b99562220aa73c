//! Snake with a menu, highscores and a scene state machine.
//!
//! The library is the headless core; `main.rs` plugs it into macroquad.

pub mod apple;
pub mod audio;
pub mod context;
pub mod direction_queue;
pub mod grid;
pub mod highscore;
pub mod input;
pub mod puns;
pub mod render;
pub mod scene;
pub mod settings;
pub mod snake;

pub use apple::Apple;
pub use context::GameContext;
pub use direction_queue::{DIRECTION_QUEUE_CAPACITY, DirectionQueue};
pub use grid::{Cell, Direction, Grid};
pub use highscore::{HIGHSCORE_CAPACITY, HighscoreEntry, HighscoreTable, Initials};
pub use input::{InputFrame, Key, KeyPress};
pub use scene::{Next, Scene, SceneKind, SceneMachine, SceneRequest};
pub use settings::{Action, KeyMapping, SaveData, Settings, SettingsStore, StoreError};
pub use snake::{Segment, Snake};

// Game constants
pub const WINDOW_WIDTH: i32 = 800;
pub const WINDOW_HEIGHT: i32 = 640;
/// Side of one grid cell in pixels.
pub const BLOCK: i32 = 32;
