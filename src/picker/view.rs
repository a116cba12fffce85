// SPDX-License-Identifier: MPL-2.0
//! Phase-based rendering of the picker.
//!
//! Three top-level states: a centered loading indicator while
//! initializing, the terminal permission-denied text, and the live grid
//! (or the empty-library text). The grid renders nothing until the
//! one-shot layout measurement has fixed the tile size.

use crate::picker::component::{Message, Phase, State};
use crate::picker::config::TextStyle;
use crate::picker::tile::{self, Tile};
use crate::ui::design_tokens::{palette, sizing, spacing};
use crate::ui::styles;
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{scrollable, Column, Container, Row, Space, Svg, Text};
use iced::{alignment, Color, Element, Length};

/// Renders the picker for its current phase.
pub fn view(state: &State) -> Element<'_, Message> {
    match state.phase() {
        Phase::Initializing => loading(state),
        Phase::PermissionDenied => message(
            &state.config().missing_permission_text,
            state.config().missing_permission_text_style,
            state.config().background,
        ),
        Phase::Ready => {
            if state.rows().is_empty() {
                message(
                    &state.config().empty_text,
                    state.config().empty_text_style,
                    state.config().background,
                )
            } else {
                grid(state)
            }
        }
    }
}

fn loading(state: &State) -> Element<'_, Message> {
    let indicator: Element<'_, Message> = match &state.config().loader {
        Some(handle) => Svg::new(handle.clone())
            .width(Length::Fixed(sizing::SPINNER))
            .height(Length::Fixed(sizing::SPINNER))
            .into(),
        None => spinner(state),
    };

    Container::new(indicator)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::surface(state.config().background))
        .into()
}

fn message(text: &str, style: TextStyle, background: Color) -> Element<'_, Message> {
    let mut label = Text::new(text).size(style.size);
    if let Some(color) = style.color {
        label = label.color(color);
    }

    Container::new(label)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::surface(background))
        .into()
}

fn grid(state: &State) -> Element<'_, Message> {
    let config = state.config();

    // Tiles render nothing before the one-shot measurement; an unmeasured
    // grid is a blank surface.
    let Some(tile_size) = state.tile_size() else {
        return Container::new(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::surface(config.background))
            .into();
    };

    let mut rows = Column::new().spacing(config.item_margin);
    for row in state.rows().rows() {
        let mut cells = Row::new().spacing(config.item_margin);
        for slot in row {
            let cell: Element<'_, Message> = match slot {
                Some(record) => tile::view(Tile {
                    record,
                    thumbnail: state.thumbnail(record),
                    size: tile_size,
                    selected: state.is_selected(&record.uri),
                    show_filename: config.show_filenames,
                    selected_marker: config.selected_marker.as_ref(),
                }),
                // Placeholder keeping the final row at full width.
                None => Space::new()
                    .width(Length::Fixed(tile_size))
                    .height(Length::Fixed(tile_size))
                    .into(),
            };
            cells = cells.push(cell);
        }
        rows = rows.push(cells);
    }

    let mut content = Column::new().spacing(config.item_margin).push(rows);
    if !state.is_exhausted() {
        content = content.push(
            Container::new(spinner(state))
                .width(Length::Fill)
                .padding(spacing::SM)
                .align_x(alignment::Horizontal::Center),
        );
    }

    let grid = scrollable(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(Message::Scrolled);

    Container::new(grid)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(config.item_margin)
        .style(styles::container::surface(config.background))
        .into()
}

fn spinner(state: &State) -> Element<'static, Message> {
    AnimatedSpinner::new(palette::GRAY_400, state.spinner_rotation()).into_element()
}
