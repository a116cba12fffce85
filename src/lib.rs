// SPDX-License-Identifier: MPL-2.0
//! `iced_media_picker` is a scrollable media-grid picker widget for the
//! Iced GUI toolkit.
//!
//! It provides multi-select with a configurable maximum, cursor-based
//! pagination in row batches, and per-tile markers (video icon, selection
//! checkmark, filename overlay). Media retrieval and permission prompts
//! are injected through the ports in [`media`], so the picker itself is
//! pure presentation state.

#![doc(html_root_url = "https://docs.rs/iced_media_picker/0.2.0")]

pub mod app;
pub mod error;
pub mod media;
pub mod picker;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
