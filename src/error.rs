// SPDX-License-Identifier: MPL-2.0
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),
    #[error("Config Error: {0}")]
    Config(String),
    #[error("Image Error: {0}")]
    Image(String),
}

/// Reasons background music could not start.
/// Used to pick a user-friendly, localized notice.
#[derive(Debug, Clone, Error)]
pub enum AudioError {
    /// The track file does not exist in the album folder.
    #[error("music track not found: {}", .0.display())]
    TrackMissing(PathBuf),

    /// No output device is available (or the platform refused it).
    #[error("no audio output device available")]
    NoOutputDevice,

    /// The output stream could not be built or started.
    #[error("audio output failed: {0}")]
    Output(String),

    /// The track exists but could not be decoded.
    #[error("decoding failed: {0}")]
    Decode(String),
}

impl AudioError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            AudioError::TrackMissing(_) | AudioError::Decode(_) => "notification-music-error",
            AudioError::NoOutputDevice | AudioError::Output(_) => "notification-music-device-error",
        }
    }
}

/// Reasons the album PDF could not be saved.
#[derive(Debug, Clone, Error)]
pub enum DownloadError {
    /// The PDF is not present in the album folder.
    #[error("album PDF not found: {}", .0.display())]
    SourceMissing(PathBuf),

    /// Copying to the chosen destination failed.
    #[error("copy to {} failed: {reason}", .destination.display())]
    CopyFailed { destination: PathBuf, reason: String },
}

impl DownloadError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        "notification-download-error"
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Image(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
