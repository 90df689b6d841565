// SPDX-License-Identifier: MPL-2.0
//! Looping audio output using cpal.
//!
//! The stream callback runs on the audio thread. It shares the track and a
//! few atomics with the UI thread and never allocates.

use super::{AudioSink, OutputFormat, Track, Volume};
use crate::error::AudioError;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use std::sync::atomic::{AtomicBool, AtomicU32, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Shared state between audio thread and main thread.
struct SharedState {
    /// Linear gain stored as u32 bits of f32.
    volume_bits: AtomicU32,
    paused: AtomicBool,
    /// Next sample index in the track.
    cursor: AtomicUsize,
    track: Mutex<Option<Arc<[f32]>>>,
}

impl SharedState {
    fn new(volume: Volume) -> Self {
        Self {
            volume_bits: AtomicU32::new(volume.value().to_bits()),
            paused: AtomicBool::new(true),
            cursor: AtomicUsize::new(0),
            track: Mutex::new(None),
        }
    }

    fn volume(&self) -> f32 {
        f32::from_bits(self.volume_bits.load(Ordering::Relaxed))
    }

    fn is_paused(&self) -> bool {
        self.paused.load(Ordering::Relaxed)
    }

    fn set_paused(&self, paused: bool) {
        self.paused.store(paused, Ordering::Relaxed);
    }

    fn rewind(&self) {
        self.cursor.store(0, Ordering::Relaxed);
    }

    /// Fills `data` from the track, wrapping to the start at the end.
    fn fill<T: cpal::SizedSample + cpal::FromSample<f32>>(&self, data: &mut [T]) {
        let silence = |data: &mut [T]| {
            for sample in data.iter_mut() {
                *sample = T::from_sample(0.0f32);
            }
        };

        if self.is_paused() {
            silence(data);
            return;
        }
        // Never block the audio thread
        let Ok(guard) = self.track.try_lock() else {
            silence(data);
            return;
        };
        let Some(track) = guard.as_ref().filter(|track| !track.is_empty()) else {
            silence(data);
            return;
        };

        let volume = self.volume();
        let mut cursor = self.cursor.load(Ordering::Relaxed) % track.len();
        for sample in data.iter_mut() {
            // Clamping below 1.0 avoids i16 overflow in from_sample
            let scaled = (track[cursor] * volume).clamp(-1.0, 0.999_999_9);
            *sample = T::from_sample(scaled);
            cursor += 1;
            if cursor == track.len() {
                cursor = 0;
            }
        }
        self.cursor.store(cursor, Ordering::Relaxed);
    }
}

/// Default-device output stream that loops one track.
pub struct LoopingOutput {
    shared: Arc<SharedState>,
    format: OutputFormat,
    /// Kept alive to maintain playback.
    _stream: cpal::Stream,
}

impl LoopingOutput {
    /// Opens the default output device. The stream starts paused.
    ///
    /// # Errors
    ///
    /// [`AudioError::NoOutputDevice`] when the host has no output device,
    /// [`AudioError::Output`] when the stream cannot be built or started.
    pub fn open(volume: Volume) -> Result<Self, AudioError> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or(AudioError::NoOutputDevice)?;

        let supported_config = device
            .default_output_config()
            .map_err(|e| AudioError::Output(format!("Failed to get audio config: {e}")))?;

        let format = OutputFormat {
            sample_rate: supported_config.sample_rate().0,
            channels: supported_config.channels(),
        };
        let shared = Arc::new(SharedState::new(volume));

        let stream_config: cpal::StreamConfig = supported_config.config();
        let stream = match supported_config.sample_format() {
            cpal::SampleFormat::F32 => {
                Self::build_stream::<f32>(&device, &stream_config, Arc::clone(&shared))?
            }
            cpal::SampleFormat::I16 => {
                Self::build_stream::<i16>(&device, &stream_config, Arc::clone(&shared))?
            }
            cpal::SampleFormat::U16 => {
                Self::build_stream::<u16>(&device, &stream_config, Arc::clone(&shared))?
            }
            other => {
                return Err(AudioError::Output(format!(
                    "Unsupported audio sample format: {other}"
                )))
            }
        };

        stream
            .play()
            .map_err(|e| AudioError::Output(format!("Failed to start audio stream: {e}")))?;

        Ok(Self {
            shared,
            format,
            _stream: stream,
        })
    }

    fn build_stream<T: cpal::SizedSample + cpal::FromSample<f32>>(
        device: &cpal::Device,
        config: &cpal::StreamConfig,
        shared: Arc<SharedState>,
    ) -> Result<cpal::Stream, AudioError> {
        device
            .build_output_stream(
                config,
                move |data: &mut [T], _: &cpal::OutputCallbackInfo| shared.fill(data),
                |err| {
                    tracing::error!(error = %err, "audio output error");
                },
                None,
            )
            .map_err(|e| AudioError::Output(format!("Failed to build audio stream: {e}")))
    }
}

impl AudioSink for LoopingOutput {
    fn format(&self) -> OutputFormat {
        self.format
    }

    fn set_track(&mut self, track: &Track) {
        if let Ok(mut slot) = self.shared.track.lock() {
            *slot = Some(Arc::clone(track.samples()));
        }
        self.shared.rewind();
    }

    fn play(&mut self) {
        self.shared.set_paused(false);
    }

    fn pause(&mut self) {
        self.shared.set_paused(true);
    }

    fn rewind(&mut self) {
        self.shared.rewind();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shared_with(samples: &[f32]) -> SharedState {
        let shared = SharedState::new(Volume::new(1.0));
        *shared.track.lock().unwrap() = Some(Arc::from(samples));
        shared
    }

    #[test]
    fn paused_output_is_silent() {
        let shared = shared_with(&[0.5, 0.5]);
        let mut out = [1.0_f32; 4];
        shared.fill(&mut out);
        assert_eq!(out, [0.0; 4]);
    }

    #[test]
    fn playback_wraps_to_start() {
        let shared = shared_with(&[0.1, 0.2, 0.3]);
        shared.set_paused(false);

        let mut out = [0.0_f32; 5];
        shared.fill(&mut out);
        assert_eq!(out, [0.1, 0.2, 0.3, 0.1, 0.2]);
        assert_eq!(shared.cursor.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn volume_scales_linearly() {
        let shared = SharedState::new(Volume::new(0.5));
        *shared.track.lock().unwrap() = Some(Arc::from(&[0.8_f32][..]));
        shared.set_paused(false);

        let mut out = [0.0_f32; 2];
        shared.fill(&mut out);
        assert!((out[0] - 0.4).abs() < 1e-6);
    }

    #[test]
    fn rewind_restarts_from_first_sample() {
        let shared = shared_with(&[0.1, 0.2, 0.3]);
        shared.set_paused(false);
        let mut out = [0.0_f32; 2];
        shared.fill(&mut out);

        shared.rewind();
        shared.fill(&mut out);
        assert_eq!(out, [0.1, 0.2]);
    }

    #[test]
    fn missing_track_is_silent() {
        let shared = SharedState::new(Volume::default());
        shared.set_paused(false);
        let mut out = [1_i16; 3];
        shared.fill(&mut out);
        assert_eq!(out, [0; 3]);
    }
}
