// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::page_sequence::PageSequence;
use crate::ui::empty_state;
use crate::ui::navbar;
use crate::ui::overview;
use crate::ui::viewer;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Viewer(viewer::Message),
    Overview(overview::Message),
    EmptyState(empty_state::Message),
    /// Result from the folder-picker dialog (`None` = user cancelled).
    FolderSelected(Option<PathBuf>),
    /// A file or folder was dropped on the window.
    FileDropped(PathBuf),
    /// Result from async directory scanning.
    DirectoryScanCompleted {
        /// The folder that was scanned.
        folder: PathBuf,
        /// The ordered sequence, or the scan failure.
        result: Result<PageSequence, Error>,
        /// Image to jump to after loading (dropped file), if any.
        jump_to: Option<PathBuf>,
    },
    /// A key press that no widget captured.
    KeyPressed(iced::keyboard::Key),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `ja`, `en-US`).
    pub lang: Option<String>,
    /// Optional folder path to open on startup.
    pub folder: Option<String>,
}
