// SPDX-License-Identifier: MPL-2.0
//! Single-tile renderer.
//!
//! One component renders every tile; the filename overlay is a display
//! flag rather than a separate variant. The tile is a fixed square: a
//! cover-fit thumbnail stacked with the optional video marker,
//! filename chip, and selection marker, wrapped in a mouse area that
//! reports presses with the record attached.

use crate::media::{MediaKind, MediaRecord};
use crate::picker::component::Message;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::{icons, styles};
use iced::widget::{image, mouse_area, stack, svg, Container, Svg, Text};
use iced::{alignment, ContentFit, Element, Length};

/// Everything needed to render one tile.
pub struct Tile<'a> {
    pub record: &'a MediaRecord,
    pub thumbnail: image::Handle,
    /// Side length, fixed at mount time.
    pub size: f32,
    pub selected: bool,
    pub show_filename: bool,
    /// Caller-supplied replacement for the default selection marker.
    pub selected_marker: Option<&'a svg::Handle>,
}

/// Renders a tile.
pub fn view<'a>(tile: Tile<'a>) -> Element<'a, Message> {
    let thumbnail = image(tile.thumbnail)
        .width(Length::Fixed(tile.size))
        .height(Length::Fixed(tile.size))
        .content_fit(ContentFit::Cover);

    let mut layers: Vec<Element<'a, Message>> = vec![thumbnail.into()];

    if tile.record.kind == MediaKind::Video {
        let marker = sized(icons::videocam(), sizing::VIDEO_MARKER);
        layers.push(corner(
            marker,
            alignment::Horizontal::Right,
            alignment::Vertical::Bottom,
        ));
    }

    if tile.show_filename {
        layers.push(filename_chip(tile.record.file_name()));
    }

    if tile.selected {
        let marker = match tile.selected_marker {
            Some(handle) => sized(Svg::new(handle.clone()), sizing::MARKER),
            None => sized(icons::circle_check(), sizing::MARKER),
        };
        layers.push(corner(
            marker,
            alignment::Horizontal::Right,
            alignment::Vertical::Top,
        ));
    }

    mouse_area(
        Container::new(stack(layers))
            .width(Length::Fixed(tile.size))
            .height(Length::Fixed(tile.size)),
    )
    .on_press(Message::TilePressed(tile.record.clone()))
    .into()
}

fn sized(icon: Svg<'static>, side: f32) -> Svg<'static> {
    icon.width(Length::Fixed(side)).height(Length::Fixed(side))
}

/// Pins `content` to a corner of the tile with a small inset.
fn corner<'a>(
    content: impl Into<Element<'a, Message>>,
    x: alignment::Horizontal,
    y: alignment::Vertical,
) -> Element<'a, Message> {
    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(x)
        .align_y(y)
        .padding(spacing::XS)
        .into()
}

/// Filename on a translucent chip along the tile's top edge.
fn filename_chip(name: &str) -> Element<'_, Message> {
    let chip = Container::new(Text::new(name).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::container::filename_chip);

    Container::new(chip)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Top)
        .padding(spacing::XS)
        .into()
}
