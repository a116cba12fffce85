// SPDX-License-Identifier: MPL-2.0
//! Shared test helpers: record builders and port test doubles.
//!
//! Also re-exports the `approx` assertion macros for float comparisons.

pub use approx::{assert_abs_diff_eq, assert_relative_eq};

use crate::media::{
    MediaKind, MediaProvider, MediaRecord, Page, PageRequest, PermissionKind, PermissionProvider,
    ProviderError,
};
use futures_util::future::BoxFuture;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::{Duration, UNIX_EPOCH};

/// Default epsilon for f32 comparisons.
pub const F32_EPSILON: f32 = 1e-6;

/// Builds an image record `secs` seconds after the epoch; larger values
/// are newer.
pub fn image_record(name: &str, secs: u64) -> MediaRecord {
    MediaRecord {
        uri: format!("file:///library/{name}"),
        kind: MediaKind::Image,
        timestamp: UNIX_EPOCH + Duration::from_secs(secs),
        has_playable_duration: true,
    }
}

/// Builds a playable video record `secs` seconds after the epoch.
pub fn video_record(name: &str, secs: u64) -> MediaRecord {
    MediaRecord {
        uri: format!("file:///library/{name}"),
        kind: MediaKind::Video,
        timestamp: UNIX_EPOCH + Duration::from_secs(secs),
        has_playable_duration: true,
    }
}

/// Permission provider with fixed answers and a prompt counter.
pub struct StaticPermissions {
    granted: Vec<PermissionKind>,
    grant_on_request: bool,
    requests: AtomicUsize,
}

impl StaticPermissions {
    /// Everything already granted; prompting never happens.
    pub fn granting() -> Self {
        Self {
            granted: vec![
                PermissionKind::ReadImages,
                PermissionKind::ReadVideos,
                PermissionKind::ReadStorage,
            ],
            grant_on_request: true,
            requests: AtomicUsize::new(0),
        }
    }

    /// Nothing granted, prompts denied.
    pub fn denying() -> Self {
        Self {
            granted: Vec::new(),
            grant_on_request: false,
            requests: AtomicUsize::new(0),
        }
    }

    /// Nothing granted up front, but prompts succeed.
    pub fn granting_on_request() -> Self {
        Self {
            granted: Vec::new(),
            grant_on_request: true,
            requests: AtomicUsize::new(0),
        }
    }

    /// Only `kind` granted; prompts denied.
    pub fn granting_only(kind: PermissionKind) -> Self {
        Self {
            granted: vec![kind],
            grant_on_request: false,
            requests: AtomicUsize::new(0),
        }
    }

    /// Number of times a prompt was shown.
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

impl PermissionProvider for StaticPermissions {
    fn check(&self, kind: PermissionKind) -> BoxFuture<'static, bool> {
        let granted = self.granted.contains(&kind);
        Box::pin(async move { granted })
    }

    fn request(&self, _kinds: &[PermissionKind]) -> BoxFuture<'static, bool> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        let granted = self.grant_on_request;
        Box::pin(async move { granted })
    }
}

/// Media provider returning a scripted sequence of fetch results.
pub struct StubProvider {
    results: Mutex<VecDeque<Result<Page, ProviderError>>>,
}

impl StubProvider {
    /// Provider whose every fetch returns an empty, exhausted page.
    pub fn empty() -> Self {
        Self {
            results: Mutex::new(VecDeque::new()),
        }
    }

    /// Provider serving `results` in order, then empty exhausted pages.
    pub fn with_results(results: Vec<Result<Page, ProviderError>>) -> Self {
        Self {
            results: Mutex::new(results.into()),
        }
    }
}

impl MediaProvider for StubProvider {
    fn fetch_page(&self, _request: PageRequest) -> BoxFuture<'static, Result<Page, ProviderError>> {
        let next = self
            .results
            .lock()
            .expect("stub lock poisoned")
            .pop_front()
            .unwrap_or(Ok(Page {
                records: vec![],
                next_cursor: None,
                has_more: false,
            }));
        Box::pin(async move { next })
    }
}
