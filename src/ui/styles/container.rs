// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Flat surface filled with the configured picker background.
pub fn surface(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(Background::Color(color)),
        ..Default::default()
    }
}

/// Translucent rounded chip behind the filename overlay, readable over
/// any thumbnail without hard-coding a theme.
pub fn filename_chip(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::CHIP,
            ..Color::WHITE
        })),
        border: Border {
            radius: radius::CHIP.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
