//! Sound through rodio on the default output device.
//!
//! Files are opened and decoded when played, so a cue costs one file open.
//! Each cue gets its own detached [`Sink`]; the music owns a looping one.

use super::{Audio, Cue};
use crate::assets::SoundBank;
use rodio::decoder::DecoderError;
use rodio::source::Repeat;
use rodio::{Decoder, OutputStream, OutputStreamHandle, PlayError, Sink, Source, StreamError};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, trace, warn};

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("no audio output: {0}")]
    Device(#[from] StreamError),
    #[error("could not create sink: {0}")]
    Sink(#[from] PlayError),
    #[error("could not open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: DecoderError,
    },
}

/// Decoded sound file, ready to append to a sink.
pub type Track = Decoder<BufReader<File>>;

/// Open and decode `path` (WAV, MP3, FLAC or Vorbis).
pub fn decode_file(path: &Path) -> Result<Track, AudioError> {
    let file = File::open(path).map_err(|source| AudioError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    Decoder::new(BufReader::new(file)).map_err(|source| AudioError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// `path` decoded and looped forever.
pub fn music_source(path: &Path) -> Result<Repeat<Track>, AudioError> {
    Ok(decode_file(path)?.repeat_infinite())
}

pub struct RodioAudio {
    /// Dropping the stream silences every sink.
    _stream: OutputStream,
    handle: OutputStreamHandle,
    sounds: SoundBank,
    music: Option<Sink>,
}

impl RodioAudio {
    /// Open the default output device.
    pub fn open(sounds: SoundBank) -> Result<Self, AudioError> {
        let (stream, handle) = OutputStream::try_default()?;
        info!("audio output opened");
        Ok(Self {
            _stream: stream,
            handle,
            sounds,
            music: None,
        })
    }

    fn play_file(&self, path: &Path) -> Result<(), AudioError> {
        let source = decode_file(path)?;
        let sink = Sink::try_new(&self.handle)?;
        sink.append(source);
        sink.detach();
        Ok(())
    }

    fn looping_sink(&self) -> Result<Sink, AudioError> {
        let source = music_source(&self.sounds.music)?;
        let sink = Sink::try_new(&self.handle)?;
        sink.append(source);
        Ok(sink)
    }
}

impl Audio for RodioAudio {
    fn play(&mut self, cue: Cue) {
        let file = match cue {
            Cue::Success => &self.sounds.success,
            Cue::Buzzer => &self.sounds.buzzer,
        };
        trace!(?cue, file = %file.display(), "cue");
        if let Err(e) = self.play_file(file) {
            warn!(?cue, error = %e, "cue not played");
        }
    }

    fn start_music(&mut self) {
        self.stop_music();
        match self.looping_sink() {
            Ok(sink) => {
                debug!(file = %self.sounds.music.display(), "music started");
                self.music = Some(sink);
            }
            Err(e) => warn!(error = %e, "music not started"),
        }
    }

    fn stop_music(&mut self) {
        if let Some(sink) = self.music.take() {
            sink.stop();
            debug!("music stopped");
        }
    }

    fn music_playing(&self) -> bool {
        self.music.as_ref().is_some_and(|sink| !sink.empty())
    }
}
