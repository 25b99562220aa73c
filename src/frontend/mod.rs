//! macroquad glue: window input, drawing and synthesized audio.

pub mod canvas;
pub mod keys;
pub mod tones;

pub use canvas::ScreenCanvas;
pub use tones::ToneAudio;
