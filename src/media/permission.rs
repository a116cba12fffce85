// SPDX-License-Identifier: MPL-2.0
//! Permission port and platform capabilities.
//!
//! Platforms differ in how media-library access is gated: desktop systems
//! read the filesystem directly, while mobile-style platforms require a
//! runtime permission grant — a single storage permission on older
//! versions, separate image and video permissions on newer ones. Both the
//! prompt mechanism and the platform identity are injected so the picker's
//! permission flow is testable without a device.

use futures_util::future::BoxFuture;
use std::sync::Arc;

/// A single permission the picker may need to acquire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionKind {
    /// Read access to images in the media library.
    ReadImages,
    /// Read access to videos in the media library.
    ReadVideos,
    /// Combined read access to external storage (older gated platforms).
    ReadStorage,
}

/// How the running platform gates media-library access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformKind {
    /// No permission prompt required (desktop).
    Unrestricted,
    /// One combined storage permission gates everything.
    GatedCombined,
    /// Separate image and video permissions must both be granted.
    GatedSplit,
}

impl PlatformKind {
    /// Returns `true` if a permission grant is required before fetching.
    #[must_use]
    pub fn is_gated(&self) -> bool {
        !matches!(self, PlatformKind::Unrestricted)
    }

    /// Permissions that must all be granted on this platform.
    #[must_use]
    pub fn required_kinds(&self) -> &'static [PermissionKind] {
        match self {
            PlatformKind::Unrestricted => &[],
            PlatformKind::GatedCombined => &[PermissionKind::ReadStorage],
            PlatformKind::GatedSplit => {
                &[PermissionKind::ReadImages, PermissionKind::ReadVideos]
            }
        }
    }

    /// Whether page requests may carry a group/album filter. Gated
    /// platforms do not support grouped queries and the filter is dropped
    /// from requests there.
    #[must_use]
    pub fn supports_group_filter(&self) -> bool {
        !self.is_gated()
    }
}

/// Port for checking and requesting media-read permissions.
pub trait PermissionProvider: Send + Sync {
    /// Returns whether the permission is currently granted, without
    /// prompting.
    fn check(&self, kind: PermissionKind) -> BoxFuture<'static, bool>;

    /// Prompts for the given permissions; resolves to `true` only when
    /// every one of them was granted.
    fn request(&self, kinds: &[PermissionKind]) -> BoxFuture<'static, bool>;
}

/// Permission provider for platforms that never prompt (desktop).
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysGranted;

impl PermissionProvider for AlwaysGranted {
    fn check(&self, _kind: PermissionKind) -> BoxFuture<'static, bool> {
        Box::pin(async { true })
    }

    fn request(&self, _kinds: &[PermissionKind]) -> BoxFuture<'static, bool> {
        Box::pin(async { true })
    }
}

/// Resolves media-read access for the given platform.
///
/// Checks every required permission first and only prompts when at least
/// one is missing. Ungated platforms resolve to `true` immediately.
pub async fn acquire_media_read(
    provider: Arc<dyn PermissionProvider>,
    platform: PlatformKind,
) -> bool {
    let kinds = platform.required_kinds();
    if kinds.is_empty() {
        return true;
    }

    let mut all_granted = true;
    for kind in kinds {
        if !provider.check(*kind).await {
            all_granted = false;
            break;
        }
    }
    if all_granted {
        return true;
    }

    provider.request(kinds).await
}
