// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Generic panel surface used for the navbar and its settings dropdown.
///
/// The color is derived from the active Iced `Theme` background, with a
/// slight opacity, so panels stay readable without hard-coding colors.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::OVERLAY_HOVER,
        ))),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Dropdown menu surface with a visible edge against the viewer.
pub fn dropdown(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        border: Border {
            radius: radius::SM.into(),
            width: 1.0,
            color: palette.background.strong.color,
        },
        ..Default::default()
    }
}
