//! Fire-and-forget sound.
//!
//! The game loop never waits on audio. [`play_events`] turns the events of a
//! tick into cues and music changes on whatever [`Audio`] backend is in use.
//! [`open_output`] picks rodio when an output device opens and the terminal
//! bell otherwise.

pub mod rodio_backend;

pub use rodio_backend::{decode_file, music_source, AudioError, RodioAudio};

use crate::assets::SoundBank;
use crate::game::{Category, GameEvent};
use std::io::{self, Write};
use tracing::{debug, trace, warn};

/// Short sound effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Success,
    Buzzer,
}

pub trait Audio {
    fn play(&mut self, cue: Cue);
    /// Start (or restart) the looping background track.
    fn start_music(&mut self);
    fn stop_music(&mut self);
    fn music_playing(&self) -> bool;
}

/// Play whatever `events` call for, in order.
pub fn play_events<A: Audio + ?Sized>(audio: &mut A, events: &[GameEvent]) {
    for event in events {
        match event {
            GameEvent::Caught {
                category: Category::Good,
                ..
            } => audio.play(Cue::Success),
            GameEvent::Caught {
                category: Category::Bad,
                ..
            } => audio.play(Cue::Buzzer),
            GameEvent::GameOver { .. } => audio.stop_music(),
            GameEvent::Retried => audio.start_music(),
            GameEvent::Spawned { .. } | GameEvent::SpawnSkipped { .. } => {}
        }
    }
}

/// Sound on the default output device, or the terminal bell without one.
pub fn open_output(sounds: SoundBank) -> Box<dyn Audio> {
    match RodioAudio::open(sounds.clone()) {
        Ok(audio) => Box::new(audio),
        Err(e) => {
            warn!(error = %e, "no audio output, cues fall back to the terminal bell");
            Box::new(TerminalAudio::new(sounds, io::stdout()))
        }
    }
}

/// Fallback when no output device opens: cues ring the bell, music state is
/// only tracked for the HUD.
pub struct TerminalAudio<W: Write> {
    sounds: SoundBank,
    out: W,
    music_playing: bool,
}

impl<W: Write> TerminalAudio<W> {
    pub fn new(sounds: SoundBank, out: W) -> Self {
        Self {
            sounds,
            out,
            music_playing: false,
        }
    }

    fn ring(&mut self, times: usize) {
        // Write errors are ignored
        let bells = vec![0x07u8; times];
        let _ = self.out.write_all(&bells).and_then(|_| self.out.flush());
    }
}

impl<W: Write> Audio for TerminalAudio<W> {
    fn play(&mut self, cue: Cue) {
        let (file, times) = match cue {
            Cue::Success => (&self.sounds.success, 1),
            Cue::Buzzer => (&self.sounds.buzzer, 2),
        };
        trace!(?cue, file = %file.display(), "cue");
        self.ring(times);
    }

    fn start_music(&mut self) {
        debug!(file = %self.sounds.music.display(), "music started");
        self.music_playing = true;
    }

    fn stop_music(&mut self) {
        debug!("music stopped");
        self.music_playing = false;
    }

    fn music_playing(&self) -> bool {
        self.music_playing
    }
}
