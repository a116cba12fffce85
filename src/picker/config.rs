// SPDX-License-Identifier: MPL-2.0
//! Picker configuration surface and its default values.
//!
//! Defaults are centralized as constants so embedding applications and
//! tests refer to a single source of truth.

use crate::media::{AssetTypeFilter, GroupFilter, MediaRecord};
use iced::widget::svg;
use iced::Color;

/// Default number of tiles per grid row.
pub const DEFAULT_ITEMS_PER_ROW: usize = 3;

/// Default margin between tiles, in logical pixels.
pub const DEFAULT_ITEM_MARGIN: f32 = 5.0;

/// Default maximum number of selectable records.
pub const DEFAULT_MAXIMUM: usize = 15;

/// Default number of rows rendered before the first scroll.
pub const DEFAULT_INITIAL_ROWS: usize = 5;

/// Default text shown when the library is empty.
pub const DEFAULT_EMPTY_TEXT: &str = "No photos.";

/// Default text shown when media-read permission was denied.
pub const DEFAULT_MISSING_PERMISSION_TEXT: &str =
    "Missing \"Photos and videos\" permission. Please grant permission and try again.";

/// Styling for one of the picker's text states.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Font size in logical pixels.
    pub size: f32,
    /// Text color; `None` inherits the theme's default.
    pub color: Option<Color>,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size: 16.0,
            color: None,
        }
    }
}

/// Everything an embedding application can configure on the picker.
#[derive(Debug, Clone)]
pub struct PickerConfig {
    /// Tiles per row.
    pub items_per_row: usize,
    /// Margin between tiles and around the grid, in logical pixels.
    pub item_margin: f32,
    /// Selection cap; ignored in single-select mode (cap is 1 there).
    pub maximum: usize,
    /// When set, a new selection replaces the previous one.
    pub single_select: bool,
    /// Rows to render before the first scroll event.
    // TODO: honor this once the grid moves to a lazy/virtualized list
    // widget; the plain scrollable below renders every row.
    pub initial_rows: usize,
    /// Fixed layout width. When absent the tile size is derived from the
    /// first container measurement instead.
    pub container_width: Option<f32>,
    /// Grid background color.
    pub background: Color,
    /// Message shown when no media exists.
    pub empty_text: String,
    pub empty_text_style: TextStyle,
    /// Replacement for the built-in loading spinner.
    pub loader: Option<svg::Handle>,
    /// Message shown in the terminal permission-denied state.
    pub missing_permission_text: String,
    pub missing_permission_text_style: TextStyle,
    /// Overlay each tile with its filename.
    pub show_filenames: bool,
    /// Which asset kinds to request.
    pub asset_type: AssetTypeFilter,
    /// Album/group restriction, sent only on platforms that support it.
    pub group_filter: Option<GroupFilter>,
    /// Records selected before the picker first renders.
    pub initial_selection: Vec<MediaRecord>,
    /// Replacement for the built-in selection checkmark.
    pub selected_marker: Option<svg::Handle>,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            items_per_row: DEFAULT_ITEMS_PER_ROW,
            item_margin: DEFAULT_ITEM_MARGIN,
            maximum: DEFAULT_MAXIMUM,
            single_select: false,
            initial_rows: DEFAULT_INITIAL_ROWS,
            container_width: None,
            background: Color::WHITE,
            empty_text: DEFAULT_EMPTY_TEXT.to_string(),
            empty_text_style: TextStyle::default(),
            loader: None,
            missing_permission_text: DEFAULT_MISSING_PERMISSION_TEXT.to_string(),
            missing_permission_text_style: TextStyle::default(),
            show_filenames: false,
            asset_type: AssetTypeFilter::Photos,
            group_filter: Some(GroupFilter::SavedPhotos),
            initial_selection: Vec::new(),
            selected_marker: None,
        }
    }
}

impl PickerConfig {
    /// Tile side length for the given available width.
    ///
    /// `n` tiles and `n + 1` margins must fit across the container.
    #[must_use]
    pub fn tile_size(&self, available_width: f32) -> f32 {
        let per_row = self.items_per_row as f32;
        (available_width - (per_row + 1.0) * self.item_margin) / per_row
    }
}
