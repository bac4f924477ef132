// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! This module contains the main `update` function and the specialized
//! handlers behind it. Navigation always goes through the spread
//! navigator's clamped operations, so no handler can produce an invalid
//! index.

use super::{App, Message, Screen};
use crate::config::{MAX_GRID_COLUMNS, MIN_GRID_COLUMNS};
use crate::directory_scanner;
use crate::error::Error;
use crate::page_sequence::PageSequence;
use crate::ui::empty_state;
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::overview;
use crate::ui::viewer;
use iced::keyboard::{key::Named, Key};
use iced::Task;
use std::path::PathBuf;

/// Dispatches a message to its handler.
pub(super) fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Navbar(message) => handle_navbar_message(app, message),
        Message::Viewer(message) => handle_viewer_message(app, message),
        Message::Overview(message) => handle_overview_message(app, message),
        Message::EmptyState(message) => handle_empty_state_message(message),
        Message::FolderSelected(folder) => handle_folder_selected(folder),
        Message::FileDropped(path) => handle_file_dropped(path),
        Message::DirectoryScanCompleted {
            folder,
            result,
            jump_to,
        } => handle_directory_scan_completed(app, folder, result, jump_to),
        Message::KeyPressed(key) => handle_key_pressed(app, key),
    }
}

/// Opens the system folder picker; cancellation resolves to `None`.
fn open_folder_dialog() -> Task<Message> {
    Task::perform(
        async {
            rfd::AsyncFileDialog::new()
                .pick_folder()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::FolderSelected,
    )
}

/// Scans `folder` off the UI thread and reports back as a message.
pub(super) fn scan_folder(folder: PathBuf, jump_to: Option<PathBuf>) -> Task<Message> {
    Task::perform(
        async move {
            let result = directory_scanner::scan_directory(&folder);
            (folder, result)
        },
        move |(folder, result)| Message::DirectoryScanCompleted {
            folder,
            result,
            jump_to: jump_to.clone(),
        },
    )
}

fn handle_navbar_message(app: &mut App, message: navbar::Message) -> Task<Message> {
    match navbar::update(message, &mut app.menu_open) {
        NavbarEvent::None => {}
        NavbarEvent::OpenFolderDialog => return open_folder_dialog(),
        NavbarEvent::OpenOverview => app.screen = Screen::Overview,
        NavbarEvent::HideControls => app.controls_visible = false,
        NavbarEvent::SetReadingDirection(direction) => {
            app.navigator.set_reading_direction(direction);
        }
        NavbarEvent::SetPageMode(mode) => app.navigator.set_page_mode(mode),
        NavbarEvent::SetShowFilenames(show) => app.show_filenames = show,
    }
    Task::none()
}

fn handle_viewer_message(app: &mut App, message: viewer::Message) -> Task<Message> {
    match message {
        viewer::Message::FirstPressed => go_first(app),
        viewer::Message::PreviousPressed => go_previous(app),
        viewer::Message::NextPressed => go_next(app),
        viewer::Message::RevealControls => app.controls_visible = true,
    }
    Task::none()
}

fn handle_overview_message(app: &mut App, message: overview::Message) -> Task<Message> {
    match message {
        overview::Message::Close => app.screen = Screen::Viewer,
        overview::Message::ColumnsChanged(columns) => {
            app.grid_columns = columns.clamp(MIN_GRID_COLUMNS, MAX_GRID_COLUMNS);
        }
        overview::Message::PagePicked(raw_index) => {
            let before = app.navigator.current_index();
            app.navigator.go_to_image(raw_index);
            after_page_turn(app, before);
            app.screen = Screen::Viewer;
        }
    }
    Task::none()
}

fn handle_empty_state_message(message: empty_state::Message) -> Task<Message> {
    match message {
        empty_state::Message::OpenFolderRequested => open_folder_dialog(),
    }
}

fn handle_folder_selected(folder: Option<PathBuf>) -> Task<Message> {
    // A cancelled dialog retains the prior state untouched.
    match folder {
        Some(folder) => scan_folder(folder, None),
        None => Task::none(),
    }
}

fn handle_file_dropped(path: PathBuf) -> Task<Message> {
    if path.is_dir() {
        return scan_folder(path, None);
    }

    // A dropped image opens its parent folder and jumps to that image.
    if directory_scanner::is_supported_image(&path) {
        if let Some(parent) = path.parent() {
            return scan_folder(parent.to_path_buf(), Some(path.clone()));
        }
    }

    Task::none()
}

fn handle_directory_scan_completed(
    app: &mut App,
    folder: PathBuf,
    result: Result<PageSequence, Error>,
    jump_to: Option<PathBuf>,
) -> Task<Message> {
    match result {
        Ok(sequence) => {
            let jump_index = jump_to.as_deref().and_then(|path| sequence.position(path));
            match jump_index {
                Some(raw_index) => app.navigator.open_at(sequence, raw_index),
                None => app.navigator.load_sequence(sequence),
            }
            app.scan_error = None;
        }
        Err(error) => {
            app.navigator.load_sequence(PageSequence::new());
            app.scan_error = Some(error.to_string());
        }
    }

    app.folder = Some(folder);
    app.screen = Screen::Viewer;
    app.controls_visible = true;
    app.has_page_turned = false;
    Task::none()
}

fn handle_key_pressed(app: &mut App, key: Key) -> Task<Message> {
    use crate::config::ReadingDirection;

    match key {
        // Horizontal arrows follow the page-turn direction so the arrow
        // visually matches the motion of the paper.
        Key::Named(Named::ArrowLeft) => match app.navigator.reading_direction() {
            ReadingDirection::RightToLeft => go_next(app),
            ReadingDirection::LeftToRight => go_previous(app),
        },
        Key::Named(Named::ArrowRight) => match app.navigator.reading_direction() {
            ReadingDirection::RightToLeft => go_previous(app),
            ReadingDirection::LeftToRight => go_next(app),
        },
        Key::Named(Named::ArrowUp) => go_previous(app),
        Key::Named(Named::ArrowDown) | Key::Named(Named::Space) => go_next(app),
        Key::Named(Named::Home) => go_first(app),
        Key::Named(Named::Escape) => {
            if app.screen == Screen::Overview {
                app.screen = Screen::Viewer;
            }
        }
        Key::Character(ref c) if c.as_str() == "g" => {
            if !app.navigator.is_empty() {
                app.screen = match app.screen {
                    Screen::Viewer => Screen::Overview,
                    Screen::Overview => Screen::Viewer,
                };
            }
        }
        _ => {}
    }

    Task::none()
}

fn go_first(app: &mut App) {
    let before = app.navigator.current_index();
    app.navigator.go_first();
    after_page_turn(app, before);
}

fn go_previous(app: &mut App) {
    let before = app.navigator.current_index();
    app.navigator.go_previous();
    after_page_turn(app, before);
}

fn go_next(app: &mut App) {
    let before = app.navigator.current_index();
    app.navigator.go_next();
    after_page_turn(app, before);
}

/// The controls auto-hide once, on the first actual page turn after a
/// folder is loaded.
fn after_page_turn(app: &mut App, index_before: usize) {
    if app.navigator.current_index() != index_before && !app.has_page_turned {
        app.has_page_turned = true;
        app.controls_visible = false;
        app.menu_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PageMode, ReadingDirection};
    use std::path::PathBuf;

    fn app_with_pages(count: usize) -> App {
        let paths = (1..=count)
            .map(|i| PathBuf::from(format!("page{i}.png")))
            .collect();
        let mut app = App::default();
        app.navigator
            .load_sequence(PageSequence::from_paths(paths));
        app
    }

    fn press(app: &mut App, key: Named) {
        let _ = update(app, Message::KeyPressed(Key::Named(key)));
    }

    #[test]
    fn left_arrow_advances_under_right_to_left_reading() {
        let mut app = app_with_pages(6);
        assert_eq!(app.navigator.reading_direction(), ReadingDirection::RightToLeft);

        press(&mut app, Named::ArrowLeft);
        assert_eq!(app.navigator.current_index(), 1);

        press(&mut app, Named::ArrowRight);
        assert_eq!(app.navigator.current_index(), 0);
    }

    #[test]
    fn arrows_swap_when_direction_flips() {
        let mut app = app_with_pages(6);
        app.navigator
            .set_reading_direction(ReadingDirection::LeftToRight);

        press(&mut app, Named::ArrowRight);
        assert_eq!(app.navigator.current_index(), 1);

        press(&mut app, Named::ArrowLeft);
        assert_eq!(app.navigator.current_index(), 0);
    }

    #[test]
    fn vertical_keys_ignore_reading_direction() {
        let mut app = app_with_pages(6);

        press(&mut app, Named::ArrowDown);
        press(&mut app, Named::Space);
        assert_eq!(app.navigator.current_index(), 2);

        press(&mut app, Named::ArrowUp);
        assert_eq!(app.navigator.current_index(), 1);

        press(&mut app, Named::Home);
        assert_eq!(app.navigator.current_index(), 0);
    }

    #[test]
    fn controls_hide_after_first_page_turn_only() {
        let mut app = app_with_pages(6);
        assert!(app.controls_visible);

        // A clamped no-op at the boundary is not a page turn.
        press(&mut app, Named::ArrowUp);
        assert!(app.controls_visible);

        press(&mut app, Named::ArrowDown);
        assert!(!app.controls_visible);

        // Revealing them again sticks for later turns.
        let _ = update(
            &mut app,
            Message::Viewer(viewer::Message::RevealControls),
        );
        press(&mut app, Named::ArrowDown);
        assert!(app.controls_visible);
    }

    #[test]
    fn overview_toggles_with_g_and_closes_with_escape() {
        let mut app = app_with_pages(4);

        let _ = update(&mut app, Message::KeyPressed(Key::Character("g".into())));
        assert_eq!(app.screen, Screen::Overview);

        press(&mut app, Named::Escape);
        assert_eq!(app.screen, Screen::Viewer);
    }

    #[test]
    fn overview_is_unreachable_without_pages() {
        let mut app = App::default();
        let _ = update(&mut app, Message::KeyPressed(Key::Character("g".into())));
        assert_eq!(app.screen, Screen::Viewer);
    }

    #[test]
    fn picking_a_page_jumps_and_returns_to_viewer() {
        let mut app = app_with_pages(12);
        app.screen = Screen::Overview;

        let _ = update(
            &mut app,
            Message::Overview(overview::Message::PagePicked(5)),
        );
        assert_eq!(app.navigator.current_index(), 2);
        assert_eq!(app.screen, Screen::Viewer);
    }

    #[test]
    fn grid_columns_are_clamped() {
        let mut app = app_with_pages(4);

        let _ = update(
            &mut app,
            Message::Overview(overview::Message::ColumnsChanged(99)),
        );
        assert_eq!(app.grid_columns, MAX_GRID_COLUMNS);

        let _ = update(
            &mut app,
            Message::Overview(overview::Message::ColumnsChanged(1)),
        );
        assert_eq!(app.grid_columns, MIN_GRID_COLUMNS);
    }

    #[test]
    fn scan_failure_enters_empty_state_regime() {
        let mut app = app_with_pages(6);
        let _ = update(
            &mut app,
            Message::DirectoryScanCompleted {
                folder: PathBuf::from("/missing"),
                result: Err(Error::Io("denied".into())),
                jump_to: None,
            },
        );

        assert!(app.navigator.is_empty());
        assert!(app.scan_error.is_some());
        assert_eq!(app.navigator.current_index(), 0);
    }

    #[test]
    fn scan_success_replaces_sequence_and_resets() {
        let mut app = app_with_pages(6);
        press(&mut app, Named::ArrowDown);

        let replacement =
            PageSequence::from_paths(vec![PathBuf::from("b.png"), PathBuf::from("a.png")]);
        let _ = update(
            &mut app,
            Message::DirectoryScanCompleted {
                folder: PathBuf::from("/books/one"),
                result: Ok(replacement),
                jump_to: None,
            },
        );

        assert_eq!(app.navigator.len(), 2);
        assert_eq!(app.navigator.current_index(), 0);
        assert!(app.controls_visible);
        assert!(app.scan_error.is_none());
    }

    #[test]
    fn scan_with_jump_lands_on_containing_spread() {
        let mut app = App::default();
        let paths: Vec<PathBuf> = (1..=8)
            .map(|i| PathBuf::from(format!("page{i}.png")))
            .collect();
        let target = paths[4].clone();

        let _ = update(
            &mut app,
            Message::DirectoryScanCompleted {
                folder: PathBuf::from("/books/two"),
                result: Ok(PageSequence::from_paths(paths)),
                jump_to: Some(target),
            },
        );

        assert_eq!(app.navigator.page_mode(), PageMode::Dual);
        assert_eq!(app.navigator.current_index(), 2);
    }
}
