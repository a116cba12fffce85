// SPDX-License-Identifier: MPL-2.0
//! Built-in marker icons.
//!
//! The markers are SVG assets embedded at compile time via
//! `include_bytes!`; handles are created once on first access and cached
//! with `OnceLock`. Both can be replaced per picker through
//! [`crate::picker::PickerConfig`].

use iced::widget::svg::{Handle, Svg};
use std::sync::OnceLock;

/// Defines an icon function with a cached SVG handle.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!("../../assets/icons/", $filename));
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            Svg::new(handle.clone())
        }
    };
}

define_icon!(
    circle_check,
    "circle_check.svg",
    "Selection marker: checkmark inside a filled circle."
);
define_icon!(
    videocam,
    "videocam.svg",
    "Video marker: camera glyph on a translucent pill."
);
