// SPDX-License-Identifier: MPL-2.0
//! Shared UI building blocks: design tokens, embedded icons, container
//! styles, and the loading spinner.

pub mod design_tokens;
pub mod icons;
pub mod styles;
pub mod widgets;
