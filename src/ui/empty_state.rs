// SPDX-License-Identifier: MPL-2.0
//! Empty state view displayed when no folder is loaded.
//!
//! Provides a welcoming UI with a message, a button to open a folder via
//! the system dialog, and a hint that folders can be dropped on the
//! window.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Text};
use iced::{alignment, Color, Element, Length};

/// Contextual data needed to render the empty state.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Message shown when the last folder scan failed.
    pub scan_error: Option<&'a str>,
}

/// Messages emitted by the empty state.
#[derive(Debug, Clone)]
pub enum Message {
    OpenFolderRequested,
}

/// Renders the empty state view.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("empty-state-title"))
        .size(typography::TITLE_LG)
        .color(palette::GRAY_400);

    let open_button = button(Text::new(ctx.i18n.tr("empty-state-button")))
        .padding([spacing::SM, spacing::LG])
        .style(styles::button::primary)
        .on_press(Message::OpenFolderRequested);

    let drop_hint = Text::new(ctx.i18n.tr("empty-state-drop-hint"))
        .size(typography::CAPTION)
        .color(Color {
            a: 0.5,
            ..palette::GRAY_400
        });

    let mut content = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(open_button)
        .push(drop_hint);

    if let Some(error) = ctx.scan_error {
        let error_line = Text::new(format!("{}: {}", ctx.i18n.tr("error-scan-folder"), error))
            .size(typography::BODY)
            .color(palette::ERROR_500);
        content = content.push(error_line);
    }

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
