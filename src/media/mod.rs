// SPDX-License-Identifier: MPL-2.0
//! Core media types shared by the picker and its providers.
//!
//! These are pure data types without presentation dependencies. The
//! provider and permission ports live in [`provider`] and [`permission`];
//! [`fs_provider`] is a local-directory adapter used by the demo
//! application and tests.

pub mod fs_provider;
pub mod permission;
pub mod provider;

pub use fs_provider::FsMediaProvider;
pub use permission::{AlwaysGranted, PermissionKind, PermissionProvider, PlatformKind};
pub use provider::{MediaProvider, ProviderError};

use std::time::SystemTime;

/// Kind of a media record, derived from the provider's type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    /// Static image (JPEG, PNG, etc.).
    Image,
    /// Video file.
    Video,
}

impl MediaKind {
    /// Parses a provider type tag (`"image/..."`, `"video/..."`).
    ///
    /// Anything that does not start with `video` is treated as an image,
    /// matching how tags are tested at render time.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        if tag.starts_with("video") {
            MediaKind::Video
        } else {
            MediaKind::Image
        }
    }
}

/// One photo or video in the library.
///
/// Immutable once fetched. `uri` is the unique key; equality is by value,
/// which the selection-sync logic relies on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaRecord {
    /// Opaque location of the media (unique key).
    pub uri: String,
    /// Image or video.
    pub kind: MediaKind,
    /// Capture/modification time; pages are sorted descending by this.
    pub timestamp: SystemTime,
    /// Whether the record has a playable duration. Video records without
    /// one have no thumbnail to show and are excluded from the grid.
    pub has_playable_duration: bool,
}

impl MediaRecord {
    /// Returns `true` if the record can produce a thumbnail.
    #[must_use]
    pub fn is_playable(&self) -> bool {
        match self.kind {
            MediaKind::Image => true,
            MediaKind::Video => self.has_playable_duration,
        }
    }

    /// Final path segment of the URI, shown by the filename overlay.
    #[must_use]
    pub fn file_name(&self) -> &str {
        self.uri.rsplit('/').next().unwrap_or(&self.uri)
    }

    /// Filesystem path form of the URI (strips a `file://` scheme).
    #[must_use]
    pub fn as_path(&self) -> &str {
        self.uri.strip_prefix("file://").unwrap_or(&self.uri)
    }
}

/// Which asset kinds a fetch should return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AssetTypeFilter {
    /// Photos only.
    #[default]
    Photos,
    /// Videos only.
    Videos,
    /// Both photos and videos.
    All,
}

impl AssetTypeFilter {
    /// Returns `true` if a record of the given kind passes this filter.
    #[must_use]
    pub fn matches(&self, kind: MediaKind) -> bool {
        match self {
            AssetTypeFilter::Photos => matches!(kind, MediaKind::Image),
            AssetTypeFilter::Videos => matches!(kind, MediaKind::Video),
            AssetTypeFilter::All => true,
        }
    }
}

/// Album/group filter understood by library-style providers.
///
/// Providers on platforms without grouped libraries ignore this; the
/// picker does not send it there at all (see
/// [`PlatformKind::supports_group_filter`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroupFilter {
    Album,
    All,
    Event,
    Faces,
    Library,
    PhotoStream,
    #[default]
    SavedPhotos,
}

/// A single fetch request issued by the picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Continuation token from the previous page; `None` on the first call.
    pub cursor: Option<String>,
    /// Maximum number of records to return.
    pub page_size: usize,
    /// Optional group/album restriction.
    pub group_filter: Option<GroupFilter>,
    /// Asset kind restriction.
    pub asset_type: AssetTypeFilter,
    /// Ask the provider for duration metadata so thumbnail-less video
    /// placeholders can be excluded.
    pub include_playable_duration: bool,
}

/// One batch of records plus continuation state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub records: Vec<MediaRecord>,
    /// Token for the next fetch; absent when the provider has none.
    pub next_cursor: Option<String>,
    /// Whether further pages exist.
    pub has_more: bool,
}
