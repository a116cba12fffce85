// SPDX-License-Identifier: MPL-2.0
//! Design tokens used by the picker's built-in chrome.
//!
//! Only the tokens the grid actually consumes are defined here; embedding
//! applications style their own surroundings.

use iced::Color;

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
}

pub mod opacity {
    /// Filename chip background over a thumbnail.
    pub const CHIP: f32 = 0.5;
    /// Spinner track behind the animated arc.
    pub const TRACK: f32 = 0.2;
}

/// Spacing scale in logical pixels.
pub mod spacing {
    pub const XXS: f32 = 3.0;
    pub const XS: f32 = 5.0;
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 16.0;
}

/// Component sizes in logical pixels.
pub mod sizing {
    /// Side length of the selection marker.
    pub const MARKER: f32 = 25.0;
    /// Side length of the video marker.
    pub const VIDEO_MARKER: f32 = 30.0;
    /// Side length of the loading spinner.
    pub const SPINNER: f32 = 48.0;
}

/// Font size scale in logical pixels.
pub mod typography {
    pub const CAPTION: f32 = 12.0;
    pub const BODY: f32 = 16.0;
}

/// Border radii in logical pixels.
pub mod radius {
    /// Filename chip corners.
    pub const CHIP: f32 = 10.0;
}
