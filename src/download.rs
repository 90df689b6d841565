// SPDX-License-Identifier: MPL-2.0
//! Saving the album PDF to a location picked by the user.

use crate::album::AlbumAssets;
use crate::error::DownloadError;
use std::path::{Path, PathBuf};

/// A PDF known to exist, ready to be saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfDownload {
    source: PathBuf,
    file_name: String,
}

/// Result of a save attempt that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    Saved(PathBuf),
    Cancelled,
}

/// Checks that the album PDF exists.
///
/// # Errors
///
/// [`DownloadError::SourceMissing`] when the file is absent.
pub fn prepare(assets: &AlbumAssets) -> Result<PdfDownload, DownloadError> {
    let source = assets.pdf();
    if !source.is_file() {
        return Err(DownloadError::SourceMissing(source));
    }
    Ok(PdfDownload {
        source,
        file_name: assets.pdf_file_name().to_string(),
    })
}

impl PdfDownload {
    #[must_use]
    pub fn source(&self) -> &Path {
        &self.source
    }

    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}

/// Shows a "Save As" dialog, then copies the PDF to the chosen path.
///
/// # Errors
///
/// [`DownloadError::CopyFailed`] when the copy fails.
pub async fn save_as(download: PdfDownload) -> Result<DownloadOutcome, DownloadError> {
    let mut dialog = rfd::AsyncFileDialog::new()
        .set_file_name(&download.file_name)
        .add_filter("PDF", &["pdf"]);

    if let Some(dir) = dirs::download_dir() {
        if dir.exists() {
            dialog = dialog.set_directory(&dir);
        }
    }

    let Some(handle) = dialog.save_file().await else {
        tracing::debug!("save dialog cancelled");
        return Ok(DownloadOutcome::Cancelled);
    };

    copy_to(&download.source, handle.path())
        .await
        .map(DownloadOutcome::Saved)
}

/// Copies `source` to `destination`, returning the destination.
///
/// Saving over the source itself is a successful no-op.
///
/// # Errors
///
/// [`DownloadError::CopyFailed`] with the underlying reason.
pub async fn copy_to(source: &Path, destination: &Path) -> Result<PathBuf, DownloadError> {
    let failed = |reason: String| DownloadError::CopyFailed {
        destination: destination.to_path_buf(),
        reason,
    };

    let same_file = match (
        tokio::fs::canonicalize(source).await,
        tokio::fs::canonicalize(destination).await,
    ) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    };

    if !same_file {
        let bytes = tokio::fs::copy(source, destination)
            .await
            .map_err(|e| failed(e.to_string()))?;
        tracing::info!(destination = %destination.display(), bytes, "album PDF saved");
    }

    Ok(destination.to_path_buf())
}
