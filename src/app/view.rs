// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current
//! screen based on application state. Every viewer frame is re-derived
//! from `resolve_spread()` and `progress_fraction()`; the UI never indexes
//! the sequence itself.

use super::{App, Message, Screen};
use crate::ui::empty_state;
use crate::ui::navbar;
use crate::ui::overview;
use crate::ui::viewer;
use iced::widget::Column;
use iced::{Element, Length};

/// Renders the current application view based on the active screen.
pub(super) fn view(app: &App) -> Element<'_, Message> {
    match app.screen {
        Screen::Viewer => view_viewer(app),
        Screen::Overview => view_overview(app),
    }
}

fn view_viewer(app: &App) -> Element<'_, Message> {
    let content: Element<'_, Message> = if app.navigator.is_empty() {
        empty_state::view(empty_state::ViewContext {
            i18n: &app.i18n,
            scan_error: app.scan_error.as_deref(),
        })
        .map(Message::EmptyState)
    } else {
        viewer::view(viewer::ViewContext {
            spread: app.navigator.resolve_spread(),
            direction: app.navigator.reading_direction(),
            page_mode: app.navigator.page_mode(),
            show_filenames: app.show_filenames,
            controls_visible: app.controls_visible,
            current_page: app.navigator.current_index() + 1,
            total_pages: app.navigator.total_pages(),
            is_at_first: app.navigator.is_at_first(),
            is_at_last: app.navigator.is_at_last(),
            progress: app.navigator.progress_fraction(),
        })
        .map(Message::Viewer)
    };

    if app.controls_visible {
        let navbar_view = navbar::view(navbar::ViewContext {
            i18n: &app.i18n,
            menu_open: app.menu_open,
            folder_name: app.folder_name(),
            has_pages: !app.navigator.is_empty(),
            direction: app.navigator.reading_direction(),
            page_mode: app.navigator.page_mode(),
            show_filenames: app.show_filenames,
        })
        .map(Message::Navbar);

        Column::new()
            .push(navbar_view)
            .push(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    } else {
        content
    }
}

fn view_overview(app: &App) -> Element<'_, Message> {
    overview::view(overview::ViewContext {
        i18n: &app.i18n,
        sequence: app.navigator.sequence(),
        columns: app.grid_columns,
        show_filenames: app.show_filenames,
    })
    .map(Message::Overview)
}
