// SPDX-License-Identifier: MPL-2.0
//! Looping background music with a play/stop toggle.
//!
//! [`BackgroundMusic`] owns the output sink and the decoded track. Starting
//! playback is asynchronous: the first toggle opens the output device and
//! asks the caller to decode the track off the UI thread, then
//! [`BackgroundMusic::on_track_decoded`] finishes the start. The decoded
//! track is kept so later starts are immediate.
//!
//! Stopping always rewinds, so the next start plays from the beginning.

pub mod decoder;
pub mod output;

use crate::config::{DEFAULT_MUSIC_VOLUME, MAX_MUSIC_VOLUME, MIN_MUSIC_VOLUME};
use crate::error::AudioError;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub use decoder::{decode_track, decode_track_async};
pub use output::LoopingOutput;

/// Playback state of the background music.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MusicState {
    #[default]
    Stopped,
    /// Output opened, waiting for the decoded track.
    Starting,
    Playing,
}

/// Linear playback gain, guaranteed to be within 0.0–1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Volume(f32);

impl Volume {
    /// Creates a new volume level, clamping to valid range.
    #[must_use]
    pub fn new(volume: f32) -> Self {
        if volume.is_nan() {
            return Self::default();
        }
        Self(volume.clamp(MIN_MUSIC_VOLUME, MAX_MUSIC_VOLUME))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self(DEFAULT_MUSIC_VOLUME)
    }
}

/// Sample rate and channel count the output device expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputFormat {
    pub sample_rate: u32,
    pub channels: u16,
}

/// A fully decoded track: interleaved f32 samples in an [`OutputFormat`].
#[derive(Debug, Clone)]
pub struct Track {
    samples: Arc<[f32]>,
    format: OutputFormat,
}

impl Track {
    #[must_use]
    pub fn new(samples: impl Into<Arc<[f32]>>, format: OutputFormat) -> Self {
        Self {
            samples: samples.into(),
            format,
        }
    }

    #[must_use]
    pub fn samples(&self) -> &Arc<[f32]> {
        &self.samples
    }

    #[must_use]
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Where decoded audio ends up.
pub trait AudioSink {
    fn format(&self) -> OutputFormat;
    /// Replaces the looping track. The play position moves to the start.
    fn set_track(&mut self, track: &Track);
    fn play(&mut self);
    fn pause(&mut self);
    fn rewind(&mut self);
}

type SinkOpener = Box<dyn Fn(Volume) -> Result<Box<dyn AudioSink>, AudioError>>;

/// What the caller must do after [`BackgroundMusic::toggle`].
#[derive(Debug)]
pub enum Toggle {
    /// Playback started from the cached track.
    Playing,
    /// Playback stopped and rewound.
    Stopped,
    /// A start is already in progress.
    Ignored,
    /// Decode `path` into `format`, then call [`BackgroundMusic::on_track_decoded`].
    Decode { path: PathBuf, format: OutputFormat },
    /// Playback could not start. State is back to [`MusicState::Stopped`].
    Failed(AudioError),
}

/// Background music controller.
pub struct BackgroundMusic {
    state: MusicState,
    track_path: PathBuf,
    volume: Volume,
    sink: Option<Box<dyn AudioSink>>,
    track: Option<Track>,
    open_sink: SinkOpener,
}

impl std::fmt::Debug for BackgroundMusic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackgroundMusic")
            .field("state", &self.state)
            .field("track_path", &self.track_path)
            .field("volume", &self.volume)
            .field("sink_open", &self.sink.is_some())
            .field("track_cached", &self.track.is_some())
            .finish()
    }
}

impl BackgroundMusic {
    /// Plays through the default output device.
    pub fn new(track_path: impl Into<PathBuf>, volume: Volume) -> Self {
        Self::with_opener(track_path, volume, |volume| {
            LoopingOutput::open(volume).map(|output| Box::new(output) as Box<dyn AudioSink>)
        })
    }

    /// Plays through sinks created by `open_sink`.
    pub fn with_opener(
        track_path: impl Into<PathBuf>,
        volume: Volume,
        open_sink: impl Fn(Volume) -> Result<Box<dyn AudioSink>, AudioError> + 'static,
    ) -> Self {
        Self {
            state: MusicState::Stopped,
            track_path: track_path.into(),
            volume,
            sink: None,
            track: None,
            open_sink: Box::new(open_sink),
        }
    }

    #[must_use]
    pub fn state(&self) -> MusicState {
        self.state
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.state == MusicState::Playing
    }

    #[must_use]
    pub fn track_path(&self) -> &Path {
        &self.track_path
    }

    #[must_use]
    pub fn volume(&self) -> Volume {
        self.volume
    }

    /// Starts or stops playback.
    pub fn toggle(&mut self) -> Toggle {
        match self.state {
            MusicState::Playing => {
                self.stop();
                Toggle::Stopped
            }
            MusicState::Starting => Toggle::Ignored,
            MusicState::Stopped => self.start(),
        }
    }

    /// Finishes a start requested with [`Toggle::Decode`].
    ///
    /// A result arriving after the start was abandoned is cached but not played.
    pub fn on_track_decoded(&mut self, result: Result<Track, AudioError>) -> Result<(), AudioError> {
        let track = match result {
            Ok(track) => track,
            Err(err) => {
                if self.state == MusicState::Starting {
                    self.state = MusicState::Stopped;
                    return Err(err);
                }
                tracing::debug!(error = %err, "ignoring decode failure for abandoned start");
                return Ok(());
            }
        };

        self.track = Some(track);
        if self.state != MusicState::Starting {
            tracing::debug!("track decoded after start was abandoned");
            return Ok(());
        }
        self.play_cached();
        Ok(())
    }

    /// Pauses and rewinds whatever the current state.
    pub fn release(&mut self) {
        if let Some(sink) = self.sink.as_mut() {
            sink.pause();
            sink.rewind();
        }
        if self.state != MusicState::Stopped {
            tracing::debug!(state = ?self.state, "music released");
        }
        self.state = MusicState::Stopped;
    }

    fn start(&mut self) -> Toggle {
        if !self.track_path.is_file() {
            return Toggle::Failed(AudioError::TrackMissing(self.track_path.clone()));
        }

        let format = match self.ensure_sink() {
            Ok(format) => format,
            Err(err) => return Toggle::Failed(err),
        };

        let cached = self
            .track
            .as_ref()
            .is_some_and(|track| track.format() == format);
        if cached {
            self.state = MusicState::Starting;
            self.play_cached();
            return Toggle::Playing;
        }

        self.state = MusicState::Starting;
        Toggle::Decode {
            path: self.track_path.clone(),
            format,
        }
    }

    fn ensure_sink(&mut self) -> Result<OutputFormat, AudioError> {
        if let Some(sink) = self.sink.as_ref() {
            return Ok(sink.format());
        }
        let sink = (self.open_sink)(self.volume)?;
        let format = sink.format();
        tracing::debug!(
            sample_rate = format.sample_rate,
            channels = format.channels,
            "audio output opened"
        );
        self.sink = Some(sink);
        Ok(format)
    }

    fn play_cached(&mut self) {
        let (Some(sink), Some(track)) = (self.sink.as_mut(), self.track.as_ref()) else {
            self.state = MusicState::Stopped;
            return;
        };
        sink.set_track(track);
        sink.play();
        self.state = MusicState::Playing;
        tracing::info!(path = %self.track_path.display(), "background music playing");
    }

    fn stop(&mut self) {
        if let Some(sink) = self.sink.as_mut() {
            sink.pause();
            sink.rewind();
        }
        self.state = MusicState::Stopped;
        tracing::info!("background music stopped");
    }
}

impl Drop for BackgroundMusic {
    fn drop(&mut self) {
        self.release();
    }
}
