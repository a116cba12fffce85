// SPDX-License-Identifier: MPL-2.0
//! The media grid picker.
//!
//! [`State`] owns paginated fetch state, the selection set, and the
//! row-chunked view of the accumulated records. Embed it the usual way:
//! route [`Message`]s to [`State::update`], render with [`State::view`],
//! wire [`State::subscription`] for the loading animation, and act on the
//! returned [`Effect`]s — selection changes and fetch failures surface
//! there instead of through stored callbacks.

pub mod component;
pub mod config;
pub mod cursor;
pub mod rows;
pub mod selection;
pub mod tile;
mod view;

pub use component::{Effect, Message, Phase, State, PAGE_SIZE};
pub use config::{PickerConfig, TextStyle};
pub use cursor::PaginationCursor;
pub use rows::RowMatrix;
pub use selection::SelectionSet;
