//! Avatar selection and local preview
//!
//! Picking a file never touches the form data or the server. The file is
//! read and decoded off the UI thread; each pick bumps a generation counter
//! and only the newest generation's result is kept.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;

/// The file the user picked, tagged with its generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSelection {
    pub path: PathBuf,
    pub generation: u64,
}

/// A decoded, displayable image.
#[derive(Clone, PartialEq, Eq)]
pub struct ImagePreview {
    pub mime: &'static str,
    pub width: u32,
    pub height: u32,
    pub bytes: Arc<[u8]>,
}

impl fmt::Debug for ImagePreview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImagePreview")
            .field("mime", &self.mime)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("len", &self.bytes.len())
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreviewError {
    #[error("Could not read {}: {reason}", .path.display())]
    Read { path: PathBuf, reason: String },
    #[error("Unsupported image format")]
    UnsupportedFormat,
    #[error("Could not decode image: {0}")]
    Decode(String),
    #[error("Image decoding was interrupted")]
    Interrupted,
}

/// How a decode result was handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewApplied {
    Applied,
    /// A newer selection superseded this one; the result was dropped.
    Stale,
    Failed(PreviewError),
}

#[derive(Debug, Clone, Default)]
pub struct AvatarState {
    generation: u64,
    pub selection: Option<ImageSelection>,
    pub preview: Option<ImagePreview>,
}

impl AvatarState {
    /// Record a new pick and return the ticket its decode must present.
    pub fn select(&mut self, path: PathBuf) -> ImageSelection {
        self.generation += 1;
        let selection = ImageSelection {
            path,
            generation: self.generation,
        };
        self.selection = Some(selection.clone());
        selection
    }

    pub fn current_generation(&self) -> u64 {
        self.generation
    }

    /// Apply a decode result if it belongs to the latest selection.
    /// A failed decode keeps whatever preview was shown before.
    pub fn apply_preview(
        &mut self,
        generation: u64,
        result: Result<ImagePreview, PreviewError>,
    ) -> PreviewApplied {
        if generation != self.generation {
            log::debug!(
                "[Profile] Dropping stale preview {} (current {})",
                generation,
                self.generation
            );
            return PreviewApplied::Stale;
        }
        match result {
            Ok(preview) => {
                self.preview = Some(preview);
                PreviewApplied::Applied
            }
            Err(err) => {
                log::warn!("[Profile] Avatar preview failed: {}", err);
                PreviewApplied::Failed(err)
            }
        }
    }
}

/// Read `path` and decode it into a preview.
pub async fn decode_preview(path: PathBuf) -> Result<ImagePreview, PreviewError> {
    let bytes = tokio::fs::read(&path).await.map_err(|err| {
        PreviewError::Read {
            path: path.clone(),
            reason: err.to_string(),
        }
    })?;
    tokio::task::spawn_blocking(move || decode_preview_bytes(bytes))
        .await
        .map_err(|_| PreviewError::Interrupted)?
}

/// Decode in-memory file contents. The bytes are kept as-is; decoding only
/// proves the file is displayable and yields its dimensions.
pub fn decode_preview_bytes(bytes: Vec<u8>) -> Result<ImagePreview, PreviewError> {
    let format = image::guess_format(&bytes)
        .map_err(|_| PreviewError::UnsupportedFormat)?;
    let decoded = image::load_from_memory_with_format(&bytes, format)
        .map_err(|err| PreviewError::Decode(err.to_string()))?;

    Ok(ImagePreview {
        mime: format.to_mime_type(),
        width: decoded.width(),
        height: decoded.height(),
        bytes: Arc::from(bytes),
    })
}

/// File name shown next to the avatar.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
