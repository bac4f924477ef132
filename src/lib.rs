// SPDX-License-Identifier: MPL-2.0
//! `iced_spread` is a two-page (spread) image and comic viewer built with
//! the Iced GUI framework.
//!
//! It lists the images of a folder, orders them naturally (`page2` before
//! `page10`), and presents them as single pages or right-open/left-open
//! spreads, with an image-grid overview for jumping around.

pub mod app;
pub mod config;
pub mod directory_scanner;
pub mod error;
pub mod i18n;
pub mod page_sequence;
pub mod spread;
pub mod ui;
