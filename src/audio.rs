/// Short effects.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Sound {
    Eat,
    Crash,
    MenuSelect,
    MenuAccept,
}

/// Looping background tracks.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Music {
    Menu,
    Game,
}

pub trait AudioSink {
    fn play(&mut self, sound: Sound);
    fn stop(&mut self, sound: Sound);
    /// True while any effect is still audible.
    fn is_busy(&self) -> bool;
    fn play_music(&mut self, music: Music);
    fn pause_music(&mut self);
    fn resume_music(&mut self);
    fn stop_music(&mut self);
    fn set_volumes(&mut self, sound: f32, music: f32);
}

/// Sink that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct Silent;

impl AudioSink for Silent {
    fn play(&mut self, _sound: Sound) {}
    fn stop(&mut self, _sound: Sound) {}
    fn is_busy(&self) -> bool {
        false
    }
    fn play_music(&mut self, _music: Music) {}
    fn pause_music(&mut self) {}
    fn resume_music(&mut self) {}
    fn stop_music(&mut self) {}
    fn set_volumes(&mut self, _sound: f32, _music: f32) {}
}
