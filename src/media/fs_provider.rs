// SPDX-License-Identifier: MPL-2.0
//! Local-directory media provider.
//!
//! Serves pages straight off a directory listing: supported files are
//! collected, ordered by modification time (newest first, filename as a
//! tiebreak so ordering stays deterministic), and sliced according to an
//! offset encoded in the continuation token. The directory is re-scanned
//! on every fetch; a listing that changes between pages can repeat or
//! skip entries, which is acceptable for a local browser.

use super::{MediaKind, MediaProvider, MediaRecord, Page, PageRequest, ProviderError};
use futures_util::future::BoxFuture;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Extensions recognized as images.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp", "webp", "tiff", "tif"];

/// Extensions recognized as videos.
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "m4v", "avi", "mov", "mkv", "webm"];

/// Detects the media kind of a path from its extension, case-insensitive.
/// Returns `None` for unsupported files.
#[must_use]
pub fn detect_media_kind(path: &Path) -> Option<MediaKind> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
        Some(MediaKind::Image)
    } else if VIDEO_EXTENSIONS.contains(&ext.as_str()) {
        Some(MediaKind::Video)
    } else {
        None
    }
}

/// [`MediaProvider`] over a single local directory.
#[derive(Debug, Clone)]
pub struct FsMediaProvider {
    root: PathBuf,
}

impl FsMediaProvider {
    /// Creates a provider serving media from `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory this provider serves.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl MediaProvider for FsMediaProvider {
    fn fetch_page(&self, request: PageRequest) -> BoxFuture<'static, Result<Page, ProviderError>> {
        let root = self.root.clone();
        Box::pin(async move { fetch_from_directory(root, request).await })
    }
}

async fn fetch_from_directory(
    root: PathBuf,
    request: PageRequest,
) -> Result<Page, ProviderError> {
    let offset = match request.cursor.as_deref() {
        Some(token) => token
            .parse::<usize>()
            .map_err(|_| ProviderError::Backend(format!("invalid cursor: {token}")))?,
        None => 0,
    };

    let mut entries: Vec<(PathBuf, MediaKind, SystemTime, u64)> = Vec::new();
    let mut dir = tokio::fs::read_dir(&root).await.map_err(map_io_error)?;
    while let Some(entry) = dir.next_entry().await.map_err(map_io_error)? {
        let path = entry.path();
        let Some(kind) = detect_media_kind(&path) else {
            continue;
        };
        if !request.asset_type.matches(kind) {
            continue;
        }
        let metadata = entry.metadata().await.map_err(map_io_error)?;
        if !metadata.is_file() {
            continue;
        }
        let modified = metadata.modified().unwrap_or(UNIX_EPOCH);
        entries.push((path, kind, modified, metadata.len()));
    }

    // Newest first; name descending as a tiebreak so equal timestamps
    // still paginate deterministically.
    entries.sort_by(|a, b| b.2.cmp(&a.2).then_with(|| b.0.cmp(&a.0)));

    let total = entries.len();
    let slice: Vec<MediaRecord> = entries
        .into_iter()
        .skip(offset)
        .take(request.page_size)
        .map(|(path, kind, modified, len)| {
            // An empty video file has nothing to thumbnail; only report a
            // playable duration when asked to include it.
            let playable = match kind {
                MediaKind::Image => true,
                MediaKind::Video => !request.include_playable_duration || len > 0,
            };
            MediaRecord {
                uri: format!("file://{}", path.display()),
                kind,
                timestamp: modified,
                has_playable_duration: playable,
            }
        })
        .collect();

    let delivered = offset + slice.len();
    let has_more = delivered < total;
    let next_cursor = if slice.is_empty() {
        None
    } else {
        Some(delivered.to_string())
    };

    Ok(Page {
        records: slice,
        next_cursor,
        has_more,
    })
}

fn map_io_error(err: std::io::Error) -> ProviderError {
    if err.kind() == ErrorKind::PermissionDenied {
        ProviderError::PermissionDenied
    } else {
        ProviderError::Io(err.to_string())
    }
}
