// SPDX-License-Identifier: MPL-2.0
//! Media provider port.
//!
//! The picker drives retrieval exclusively through [`MediaProvider`];
//! adapters (a platform library bridge, [`super::FsMediaProvider`], test
//! stubs) implement it. Implementations must be `Send + Sync` so a single
//! provider can be shared with background fetch tasks.

use super::{Page, PageRequest};
use futures_util::future::BoxFuture;
use std::fmt;

/// Errors reported by a media provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// The underlying storage could not be read.
    Io(String),
    /// The provider refused access.
    PermissionDenied,
    /// Provider-specific failure (malformed cursor, backend fault).
    Backend(String),
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::Io(e) => write!(f, "I/O error: {}", e),
            ProviderError::PermissionDenied => write!(f, "Media access denied"),
            ProviderError::Backend(e) => write!(f, "Provider error: {}", e),
        }
    }
}

impl std::error::Error for ProviderError {}

/// Port for paginated media retrieval.
///
/// A fetch returns up to `request.page_size` records plus continuation
/// state. The picker never issues overlapping fetches, but nothing in the
/// contract forbids them.
pub trait MediaProvider: Send + Sync {
    /// Fetches one page of media records.
    ///
    /// # Errors
    ///
    /// Resolves to a [`ProviderError`] on I/O failure, denied access, or a
    /// cursor the provider does not recognize.
    fn fetch_page(&self, request: PageRequest) -> BoxFuture<'static, Result<Page, ProviderError>>;
}
