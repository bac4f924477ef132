// SPDX-License-Identifier: MPL-2.0
//! Navigation bar module for app-level controls.
//!
//! This module provides the top bar shown while controls are visible:
//! folder open, overview and settings buttons, plus the settings dropdown
//! with the reading-direction, page-mode, and filename toggles.

use crate::config::{PageMode, ReadingDirection};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, toggler, Column, Container, Row, Space, Text},
    Element, Length,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub menu_open: bool,
    /// Folder base name shown as the title, if a folder is open.
    pub folder_name: Option<&'a str>,
    /// Whether any pages are loaded (enables the overview button).
    pub has_pages: bool,
    pub direction: ReadingDirection,
    pub page_mode: PageMode,
    pub show_filenames: bool,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleSettingsMenu,
    OpenFolder,
    OpenOverview,
    HideControls,
    ReadingDirectionToggled(bool),
    SinglePageToggled(bool),
    ShowFilenamesToggled(bool),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    OpenFolderDialog,
    OpenOverview,
    HideControls,
    SetReadingDirection(ReadingDirection),
    SetPageMode(PageMode),
    SetShowFilenames(bool),
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, menu_open: &mut bool) -> Event {
    match message {
        Message::ToggleSettingsMenu => {
            *menu_open = !*menu_open;
            Event::None
        }
        Message::OpenFolder => {
            *menu_open = false;
            Event::OpenFolderDialog
        }
        Message::OpenOverview => {
            *menu_open = false;
            Event::OpenOverview
        }
        Message::HideControls => {
            *menu_open = false;
            Event::HideControls
        }
        Message::ReadingDirectionToggled(right_to_left) => {
            Event::SetReadingDirection(if right_to_left {
                ReadingDirection::RightToLeft
            } else {
                ReadingDirection::LeftToRight
            })
        }
        Message::SinglePageToggled(single) => Event::SetPageMode(if single {
            PageMode::Single
        } else {
            PageMode::Dual
        }),
        Message::ShowFilenamesToggled(show) => Event::SetShowFilenames(show),
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new().width(Length::Fill);

    let top_bar = build_top_bar(&ctx);
    content = content.push(top_bar);

    if ctx.menu_open {
        let dropdown = build_dropdown(&ctx);
        content = content.push(dropdown);
    }

    content.into()
}

/// Build the top bar with the title and action buttons.
fn build_top_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(
        ctx.folder_name
            .map(str::to_owned)
            .unwrap_or_else(|| ctx.i18n.tr("window-title")),
    )
    .size(typography::TITLE_MD);

    let open_button = button(Text::new(ctx.i18n.tr("navbar-open-folder")))
        .on_press(Message::OpenFolder)
        .padding(spacing::XS);

    let overview_label = Text::new(ctx.i18n.tr("navbar-overview"));
    let overview_button = if ctx.has_pages {
        button(overview_label)
            .on_press(Message::OpenOverview)
            .padding(spacing::XS)
    } else {
        button(overview_label)
            .style(styles::button::disabled())
            .padding(spacing::XS)
    };

    let settings_button = button(Text::new(ctx.i18n.tr("navbar-settings")))
        .on_press(Message::ToggleSettingsMenu)
        .padding(spacing::XS);

    let hide_button = button(Text::new(ctx.i18n.tr("navbar-hide-menu")))
        .on_press(Message::HideControls)
        .padding(spacing::XS);

    let row = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(title)
        .push(Space::new().width(Length::Fill))
        .push(open_button)
        .push(overview_button)
        .push(settings_button)
        .push(hide_button);

    Container::new(row)
        .width(Length::Fill)
        .align_x(Horizontal::Left)
        .style(styles::container::panel)
        .into()
}

/// Build the settings dropdown with the three viewer toggles.
fn build_dropdown<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let direction_toggle = build_menu_toggle(
        ctx.i18n.tr("settings-right-to-left"),
        ctx.direction == ReadingDirection::RightToLeft,
        Message::ReadingDirectionToggled,
    );

    let single_page_toggle = build_menu_toggle(
        ctx.i18n.tr("settings-single-page"),
        ctx.page_mode == PageMode::Single,
        Message::SinglePageToggled,
    );

    let filenames_toggle = build_menu_toggle(
        ctx.i18n.tr("settings-show-filenames"),
        ctx.show_filenames,
        Message::ShowFilenamesToggled,
    );

    let menu_column = Column::new()
        .spacing(spacing::XXS)
        .push(direction_toggle)
        .push(single_page_toggle)
        .push(filenames_toggle);

    Container::new(menu_column)
        .padding(spacing::XS)
        .style(styles::container::dropdown)
        .into()
}

fn build_menu_toggle(
    label: String,
    value: bool,
    on_toggle: fn(bool) -> Message,
) -> Element<'static, Message> {
    let text = Text::new(label).size(typography::BODY);
    let toggle = toggler(value).on_toggle(on_toggle).size(20.0);

    Row::new()
        .spacing(spacing::SM)
        .padding(spacing::XXS)
        .align_y(Vertical::Center)
        .push(text)
        .push(Space::new().width(Length::Fill))
        .push(toggle)
        .into()
}
