// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the viewer, overview,
//! and navigation bar.
//!
//! The `App` struct wires together the spread navigator, localization, and
//! display preferences, and translates messages into side effects like
//! folder scanning. Policy decisions (window sizing, startup defaults,
//! keyboard contract) stay close to the main update loop so user-facing
//! behavior is easy to audit.

mod message;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config::{
    self, MAX_GRID_COLUMNS, MIN_GRID_COLUMNS, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH,
    WINDOW_DEFAULT_HEIGHT, WINDOW_DEFAULT_WIDTH,
};
use crate::i18n::fluent::I18n;
use crate::spread::SpreadNavigator;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state bridging UI components, localization, and
/// startup preferences.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    navigator: SpreadNavigator,
    /// Whether filename chips are drawn over the pages.
    show_filenames: bool,
    /// Overview grid column count (clamped to the configured range).
    grid_columns: u16,
    /// Whether the settings dropdown is open.
    menu_open: bool,
    /// Whether the navbar and navigation overlay are shown.
    controls_visible: bool,
    /// Set after the first actual page turn; gates the one-shot auto-hide.
    has_page_turned: bool,
    /// Currently open folder, if any.
    folder: Option<PathBuf>,
    /// Human-readable error from the last failed folder scan.
    scan_error: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("pages", &self.navigator.len())
            .finish()
    }
}

/// Ensures grid column values stay inside the supported range so persisted
/// configs cannot request nonsensical layouts.
fn clamp_grid_columns(value: u16) -> u16 {
    value.clamp(MIN_GRID_COLUMNS, MAX_GRID_COLUMNS)
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            screen: Screen::Viewer,
            navigator: SpreadNavigator::default(),
            show_filenames: false,
            grid_columns: config::DEFAULT_GRID_COLUMNS,
            menu_open: false,
            controls_visible: true,
            has_page_turned: false,
            folder: None,
            scan_error: None,
        }
    }
}

impl App {
    /// Initializes application state and optionally kicks off the startup
    /// folder scan based on `Flags` received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let viewer_config = config.viewer;
        let direction = viewer_config.reading_direction.unwrap_or_default();
        let mode = viewer_config.page_mode.unwrap_or_default();

        let app = App {
            i18n,
            navigator: SpreadNavigator::new(direction, mode),
            show_filenames: viewer_config.show_filenames.unwrap_or(false),
            grid_columns: clamp_grid_columns(
                viewer_config
                    .grid_columns
                    .unwrap_or(config::DEFAULT_GRID_COLUMNS),
            ),
            ..Self::default()
        };

        let task = match flags.folder {
            Some(folder) => update::scan_folder(PathBuf::from(folder), None),
            None => Task::none(),
        };

        (app, task)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");

        match self.folder_name() {
            Some(folder) => format!("{folder} - {app_name}"),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    /// Base name of the open folder, shown in the title and navbar.
    fn folder_name(&self) -> Option<&str> {
        self.folder
            .as_deref()
            .and_then(|path| path.file_name())
            .and_then(|name| name.to_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_shows_app_name_when_no_folder_open() {
        let app = App::default();
        assert_eq!(app.title(), app.i18n.tr("window-title"));
    }

    #[test]
    fn title_shows_folder_name_when_open() {
        let mut app = App::default();
        app.folder = Some(PathBuf::from("/books/one-piece-01"));

        let title = app.title();
        assert!(title.starts_with("one-piece-01 - "));
    }

    #[test]
    fn clamp_grid_columns_bounds_both_ends() {
        assert_eq!(clamp_grid_columns(0), MIN_GRID_COLUMNS);
        assert_eq!(clamp_grid_columns(4), 4);
        assert_eq!(clamp_grid_columns(100), MAX_GRID_COLUMNS);
    }
}
