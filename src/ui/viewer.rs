// SPDX-License-Identifier: MPL-2.0
//! Spread viewer: renders the current spread with its floating controls.
//!
//! The view is a pure projection of the navigator state handed in through
//! [`ViewContext`]; no indexing logic lives here. The primary slot is the
//! visually left-hand one, which under right-to-left reading holds the
//! later page of the pair.

use crate::config::{PageMode, ReadingDirection};
use crate::spread::Spread;
use crate::ui::design_tokens::{opacity, palette::WHITE, radius, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::image::{Handle, Image};
use iced::widget::{button, progress_bar, Container, Row, Space, Stack, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Element, Length,
};
use std::path::Path;

/// Contextual data needed to render the viewer.
pub struct ViewContext<'a> {
    pub spread: Spread<'a>,
    pub direction: ReadingDirection,
    pub page_mode: PageMode,
    pub show_filenames: bool,
    pub controls_visible: bool,
    /// 1-based position of the current spread.
    pub current_page: usize,
    pub total_pages: usize,
    pub is_at_first: bool,
    pub is_at_last: bool,
    pub progress: f32,
}

/// Messages emitted by the viewer controls.
#[derive(Debug, Clone)]
pub enum Message {
    FirstPressed,
    PreviousPressed,
    NextPressed,
    RevealControls,
}

/// Render the spread viewer.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let pages: Element<'_, Message> = match ctx.page_mode {
        PageMode::Single => page_slot(ctx.spread.primary, ctx.show_filenames),
        PageMode::Dual => Row::new()
            .push(page_slot(ctx.spread.primary, ctx.show_filenames))
            .push(page_slot(ctx.spread.secondary, ctx.show_filenames))
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
    };

    let progress_strip = Container::new(
        progress_bar(0.0..=1.0, ctx.progress)
            .girth(Length::Fixed(sizing::PROGRESS_BAR_HEIGHT)),
    )
    .width(Length::Fill)
    .align_y(Vertical::Top);

    let mut stack = Stack::new().push(pages).push(progress_strip);

    if ctx.controls_visible {
        stack = stack.push(navigation_overlay(&ctx));
    } else {
        stack = stack.push(reveal_button());
    }

    Container::new(stack)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// One display slot; an absent page renders nothing.
fn page_slot(path: Option<&Path>, show_filenames: bool) -> Element<'_, Message> {
    let Some(path) = path else {
        return Space::new()
            .width(Length::FillPortion(1))
            .height(Length::Fill)
            .into();
    };

    let image = Image::new(Handle::from_path(path))
        .width(Length::Fill)
        .height(Length::Fill);

    let content: Element<'_, Message> = if show_filenames {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let chip = Container::new(Text::new(name).size(typography::CAPTION))
            .padding([spacing::XXS, spacing::XS])
            .style(styles::overlay::indicator(radius::SM));

        Stack::new()
            .push(image)
            .push(
                Container::new(chip)
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .align_x(Horizontal::Left)
                    .align_y(Vertical::Bottom)
                    .padding(spacing::XS),
            )
            .into()
    } else {
        image.into()
    };

    Container::new(content)
        .width(Length::FillPortion(1))
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}

/// Floating first/previous/counter/next controls at the bottom center.
fn navigation_overlay<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    // Arrow glyphs are mirrored under right-to-left reading so they
    // follow the page-turn direction.
    let (prev_glyph, next_glyph) = match ctx.direction {
        ReadingDirection::RightToLeft => ("▶", "◀"),
        ReadingDirection::LeftToRight => ("◀", "▶"),
    };

    let first_button = overlay_button("◀◀", !ctx.is_at_first, Message::FirstPressed);
    let previous_button = overlay_button(prev_glyph, !ctx.is_at_first, Message::PreviousPressed);
    let next_button = overlay_button(next_glyph, !ctx.is_at_last, Message::NextPressed);

    let counter = Text::new(format!("{} / {}", ctx.current_page, ctx.total_pages))
        .size(typography::BODY);

    let controls = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(first_button)
        .push(previous_button)
        .push(counter)
        .push(next_button);

    Container::new(
        Container::new(controls)
            .padding(spacing::XS)
            .style(styles::overlay::indicator(radius::MD)),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(Horizontal::Center)
    .align_y(Vertical::Bottom)
    .padding(spacing::LG)
    .into()
}

fn overlay_button(
    glyph: &str,
    enabled: bool,
    message: Message,
) -> Element<'static, Message> {
    let label = Text::new(glyph.to_owned()).size(typography::BODY);
    let base = button(label).padding([spacing::XXS, spacing::XS]);

    if enabled {
        base.on_press(message)
            .style(styles::button_overlay(
                WHITE,
                opacity::OVERLAY_MEDIUM,
                opacity::OVERLAY_HOVER,
            ))
            .into()
    } else {
        base.style(styles::button::disabled()).into()
    }
}

/// Floating button that brings the controls back after auto-hide.
fn reveal_button() -> Element<'static, Message> {
    let glyph = Text::new("☰").size(typography::TITLE_MD);

    Container::new(
        button(glyph)
            .on_press(Message::RevealControls)
            .padding(spacing::XS)
            .style(styles::button_overlay(
                WHITE,
                opacity::OVERLAY_SUBTLE,
                opacity::OVERLAY_HOVER,
            )),
    )
    .width(Length::Fill)
    .align_x(Horizontal::Right)
    .padding(spacing::XS)
    .into()
}
