use std::collections::HashMap;

use anyhow::{Result, anyhow};
use macroquad::audio::{self, PlaySoundParams, Sound as Clip, load_sound_from_bytes};
use macroquad::time::get_time;
use tracing::debug;

use snake_arcade::audio::{AudioSink, Music, Sound};

const SAMPLE_RATE: u32 = 44100;

// (frequency in Hz, seconds); 0 Hz is a rest
type Note = (f32, f32);

const EAT: &[Note] = &[(880.0, 0.06), (1320.0, 0.05)];
const CRASH: &[Note] = &[(220.0, 0.12), (146.8, 0.12), (110.0, 0.3)];
const MENU_SELECT: &[Note] = &[(660.0, 0.05)];
const MENU_ACCEPT: &[Note] = &[(523.3, 0.08), (659.3, 0.08), (784.0, 0.16)];

const MENU_THEME: &[Note] = &[
    (261.6, 0.3),
    (329.6, 0.3),
    (392.0, 0.3),
    (329.6, 0.3),
    (293.7, 0.3),
    (349.2, 0.3),
    (440.0, 0.6),
    (0.0, 0.3),
];
const GAME_THEME: &[Note] = &[
    (110.0, 0.2),
    (0.0, 0.05),
    (110.0, 0.2),
    (130.8, 0.2),
    (146.8, 0.2),
    (0.0, 0.05),
    (130.8, 0.2),
    (98.0, 0.4),
];

/// PCM16 mono WAV holding the given notes back to back.
fn generate_wav(notes: &[Note], volume: f32) -> Vec<u8> {
    let num_samples: u32 = notes
        .iter()
        .map(|&(_, secs)| (secs * SAMPLE_RATE as f32) as u32)
        .sum();
    let mut data: Vec<u8> = Vec::with_capacity((num_samples as usize) * 2 + 44);

    let block_align: u16 = 2;
    let byte_rate: u32 = SAMPLE_RATE * block_align as u32;
    let data_size: u32 = num_samples * 2;
    let chunk_size: u32 = 36 + data_size;

    // RIFF header
    data.extend_from_slice(b"RIFF");
    data.extend_from_slice(&chunk_size.to_le_bytes());
    data.extend_from_slice(b"WAVE");
    // fmt chunk
    data.extend_from_slice(b"fmt ");
    data.extend_from_slice(&16u32.to_le_bytes());
    data.extend_from_slice(&1u16.to_le_bytes()); // PCM
    data.extend_from_slice(&1u16.to_le_bytes()); // mono
    data.extend_from_slice(&SAMPLE_RATE.to_le_bytes());
    data.extend_from_slice(&byte_rate.to_le_bytes());
    data.extend_from_slice(&block_align.to_le_bytes());
    data.extend_from_slice(&16u16.to_le_bytes());
    // data chunk
    data.extend_from_slice(b"data");
    data.extend_from_slice(&data_size.to_le_bytes());

    let amplitude = volume.clamp(0.0, 1.0) * 0.7;
    for &(freq, secs) in notes {
        let samples = (secs * SAMPLE_RATE as f32) as u32;
        for n in 0..samples {
            let t = n as f32 / SAMPLE_RATE as f32;
            // short linear release so notes don't click
            let release = ((samples - n) as f32 / 200.0).min(1.0);
            let value = amplitude * release * (std::f32::consts::TAU * freq * t).sin();
            let sample = (value * i16::MAX as f32) as i16;
            data.extend_from_slice(&sample.to_le_bytes());
        }
    }
    data
}

fn duration(notes: &[Note]) -> f64 {
    notes.iter().map(|&(_, secs)| secs as f64).sum()
}

async fn clip(notes: &[Note]) -> Result<Clip> {
    load_sound_from_bytes(&generate_wav(notes, 0.8))
        .await
        .map_err(|err| anyhow!("failed to load generated tone: {err:?}"))
}

/// Audio sink backed by tones synthesised at startup.
pub struct ToneAudio {
    effects: HashMap<Sound, (Clip, f64)>,
    tracks: HashMap<Music, Clip>,
    playing: Option<Music>,
    paused: bool,
    sound_volume: f32,
    music_volume: f32,
    busy_until: f64,
}

impl ToneAudio {
    pub async fn load() -> Result<Self> {
        let mut effects = HashMap::new();
        for (sound, notes) in [
            (Sound::Eat, EAT),
            (Sound::Crash, CRASH),
            (Sound::MenuSelect, MENU_SELECT),
            (Sound::MenuAccept, MENU_ACCEPT),
        ] {
            effects.insert(sound, (clip(notes).await?, duration(notes)));
        }
        let mut tracks = HashMap::new();
        tracks.insert(Music::Menu, clip(MENU_THEME).await?);
        tracks.insert(Music::Game, clip(GAME_THEME).await?);
        Ok(Self {
            effects,
            tracks,
            playing: None,
            paused: false,
            sound_volume: 1.0,
            music_volume: 0.8,
            busy_until: 0.0,
        })
    }

    fn start_track(&self, music: Music) {
        if let Some(track) = self.tracks.get(&music) {
            audio::play_sound(
                track,
                PlaySoundParams {
                    looped: true,
                    volume: self.music_volume,
                },
            );
        }
    }
}

impl AudioSink for ToneAudio {
    fn play(&mut self, sound: Sound) {
        if let Some((clip, secs)) = self.effects.get(&sound) {
            audio::play_sound(
                clip,
                PlaySoundParams {
                    looped: false,
                    volume: self.sound_volume,
                },
            );
            self.busy_until = self.busy_until.max(get_time() + secs);
        }
    }

    fn stop(&mut self, sound: Sound) {
        if let Some((clip, _)) = self.effects.get(&sound) {
            audio::stop_sound(clip);
        }
    }

    fn is_busy(&self) -> bool {
        get_time() < self.busy_until
    }

    fn play_music(&mut self, music: Music) {
        self.stop_music();
        debug!(music = ?music, "music_started");
        self.start_track(music);
        self.playing = Some(music);
        self.paused = false;
    }

    // macroquad cannot pause a clip; resuming restarts the loop
    fn pause_music(&mut self) {
        if let Some(track) = self.playing.and_then(|m| self.tracks.get(&m)) {
            audio::stop_sound(track);
            self.paused = true;
        }
    }

    fn resume_music(&mut self) {
        if let (true, Some(music)) = (self.paused, self.playing) {
            self.start_track(music);
            self.paused = false;
        }
    }

    fn stop_music(&mut self) {
        if let Some(track) = self.playing.take().and_then(|m| self.tracks.get(&m)) {
            audio::stop_sound(track);
        }
        self.paused = false;
    }

    fn set_volumes(&mut self, sound: f32, music: f32) {
        self.sound_volume = sound.clamp(0.0, 1.0);
        self.music_volume = music.clamp(0.0, 1.0);
        for (clip, _) in self.effects.values() {
            audio::set_sound_volume(clip, self.sound_volume);
        }
        for track in self.tracks.values() {
            audio::set_sound_volume(track, self.music_volume);
        }
    }
}
