// SPDX-License-Identifier: MPL-2.0
//! Styles for the picker's built-in chrome.

pub mod container;
