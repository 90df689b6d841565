// SPDX-License-Identifier: MPL-2.0
//! Whole-track audio decoding with `FFmpeg`.
//!
//! The track is decoded once, resampled to the output device's rate and
//! channel layout as packed f32, and kept in memory for looping.

use super::{OutputFormat, Track};
use crate::error::AudioError;
use std::path::{Path, PathBuf};
use std::sync::Once;

static FFMPEG_INIT: Once = Once::new();

/// Initializes `FFmpeg` once per process and quiets its logging.
fn init_ffmpeg() -> Result<(), AudioError> {
    let mut init_result = Ok(());

    FFMPEG_INIT.call_once(|| {
        if let Err(e) = ffmpeg_next::init() {
            init_result = Err(AudioError::Decode(format!(
                "FFmpeg initialization failed: {e}"
            )));
            return;
        }

        // SAFETY: av_log_set_level is thread-safe and only affects logging
        unsafe {
            ffmpeg_next::ffi::av_log_set_level(ffmpeg_next::ffi::AV_LOG_ERROR);
        }
    });

    init_result
}

/// Decodes the audio stream of `path` into `format`.
///
/// # Errors
///
/// [`AudioError::TrackMissing`] when the file does not exist, and
/// [`AudioError::Decode`] when it holds no decodable audio.
pub fn decode_track(path: &Path, format: OutputFormat) -> Result<Track, AudioError> {
    if !path.is_file() {
        return Err(AudioError::TrackMissing(path.to_path_buf()));
    }
    init_ffmpeg()?;

    let mut ictx = ffmpeg_next::format::input(&path)
        .map_err(|e| AudioError::Decode(format!("Failed to open track: {e}")))?;

    let input = ictx
        .streams()
        .best(ffmpeg_next::media::Type::Audio)
        .ok_or_else(|| AudioError::Decode("No audio stream found".to_string()))?;
    let audio_stream_index = input.index();

    let context_decoder = ffmpeg_next::codec::context::Context::from_parameters(input.parameters())
        .map_err(|e| AudioError::Decode(format!("Failed to create codec context: {e}")))?;
    let mut decoder = context_decoder
        .decoder()
        .audio()
        .map_err(|e| AudioError::Decode(format!("Failed to create audio decoder: {e}")))?;

    // Downmix anything beyond stereo
    let output_channel_layout = match format.channels {
        1 => ffmpeg_next::ChannelLayout::MONO,
        _ => ffmpeg_next::ChannelLayout::STEREO,
    };
    let output_channels: u16 = if format.channels == 1 { 1 } else { 2 };

    let mut resampler = ffmpeg_next::software::resampling::Context::get(
        decoder.format(),
        decoder.channel_layout(),
        decoder.rate(),
        ffmpeg_next::format::Sample::F32(ffmpeg_next::format::sample::Type::Packed),
        output_channel_layout,
        format.sample_rate,
    )
    .map_err(|e| AudioError::Decode(format!("Failed to create resampler: {e}")))?;

    let mut samples: Vec<f32> = Vec::new();
    let mut decoded_frame = ffmpeg_next::frame::Audio::empty();
    let mut drain = |decoder: &mut ffmpeg_next::decoder::Audio,
                     samples: &mut Vec<f32>|
     -> Result<(), AudioError> {
        while decoder.receive_frame(&mut decoded_frame).is_ok() {
            let mut output_audio = ffmpeg_next::frame::Audio::empty();
            resampler
                .run(&decoded_frame, &mut output_audio)
                .map_err(|e| AudioError::Decode(format!("Resampling failed: {e}")))?;
            append_samples(&output_audio, output_channels, samples);
        }
        Ok(())
    };

    for (stream, packet) in ictx.packets() {
        if stream.index() != audio_stream_index {
            continue;
        }
        if let Err(e) = decoder.send_packet(&packet) {
            tracing::debug!(error = %e, "skipping undecodable audio packet");
            continue;
        }
        drain(&mut decoder, &mut samples)?;
    }

    if decoder.send_eof().is_ok() {
        drain(&mut decoder, &mut samples)?;
    }

    if samples.is_empty() {
        return Err(AudioError::Decode("Track contains no audio".to_string()));
    }

    tracing::debug!(
        path = %path.display(),
        samples = samples.len(),
        sample_rate = format.sample_rate,
        "track decoded"
    );

    // Mono/stereo output is expanded to the device channel count.
    let samples = if output_channels == format.channels {
        samples
    } else {
        widen_channels(&samples, output_channels, format.channels)
    };

    Ok(Track::new(samples, format))
}

/// Decodes on the blocking pool.
pub async fn decode_track_async(path: PathBuf, format: OutputFormat) -> Result<Track, AudioError> {
    tokio::task::spawn_blocking(move || decode_track(&path, format))
        .await
        .map_err(|e| AudioError::Decode(format!("Decoder task failed: {e}")))?
}

/// Appends the packed f32 samples of a resampled frame.
fn append_samples(frame: &ffmpeg_next::frame::Audio, channels: u16, samples: &mut Vec<f32>) {
    let data = frame.data(0);
    let sample_count = frame.samples() * channels as usize;
    let byte_count = (sample_count * 4).min(data.len());

    samples.extend(
        data[..byte_count]
            .chunks_exact(4)
            .map(|bytes| f32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])),
    );
}

/// Copies interleaved frames into a layout with more channels.
///
/// Extra channels repeat the last source channel.
fn widen_channels(samples: &[f32], from: u16, to: u16) -> Vec<f32> {
    let (from, to) = (usize::from(from.max(1)), usize::from(to.max(1)));
    let mut widened = Vec::with_capacity(samples.len() / from * to);
    for frame in samples.chunks_exact(from) {
        for channel in 0..to {
            widened.push(frame[channel.min(from - 1)]);
        }
    }
    widened
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const FORMAT: OutputFormat = OutputFormat {
        sample_rate: 44_100,
        channels: 2,
    };

    #[test]
    fn missing_file_is_reported_as_missing() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("background-music.mp3");
        match decode_track(&path, FORMAT) {
            Err(AudioError::TrackMissing(reported)) => assert_eq!(reported, path),
            other => panic!("expected TrackMissing, got {other:?}"),
        }
    }

    #[test]
    fn garbage_file_is_a_decode_error() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("background-music.mp3");
        std::fs::write(&path, b"definitely not audio").expect("write");

        assert!(matches!(
            decode_track(&path, FORMAT),
            Err(AudioError::Decode(_))
        ));
    }

    #[tokio::test]
    async fn async_decode_reports_missing_file() {
        let dir = tempdir().expect("temp dir");
        let result = decode_track_async(dir.path().join("none.mp3"), FORMAT).await;
        assert!(matches!(result, Err(AudioError::TrackMissing(_))));
    }

    #[test]
    fn widen_stereo_to_quad_repeats_last_channel() {
        let widened = widen_channels(&[0.1, 0.2, 0.3, 0.4], 2, 4);
        assert_eq!(widened, vec![0.1, 0.2, 0.2, 0.2, 0.3, 0.4, 0.4, 0.4]);
    }

    #[test]
    fn widen_mono_to_stereo_duplicates() {
        assert_eq!(widen_channels(&[0.5, -0.5], 1, 2), vec![0.5, 0.5, -0.5, -0.5]);
    }
}
