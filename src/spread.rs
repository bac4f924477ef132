// SPDX-License-Identifier: MPL-2.0
//! Spread navigation module: the state machine behind page turning.
//!
//! A `SpreadNavigator` owns the ordered page sequence together with the
//! current spread index, reading direction, and page mode. Every mutation
//! goes through its operations, which clamp rather than fail, and the view
//! is derived on demand with [`SpreadNavigator::resolve_spread`] so no
//! indexing logic leaks into the UI layer.

use crate::config::{PageMode, ReadingDirection};
use crate::page_sequence::PageSequence;
use std::path::Path;

/// One rendered spread: the images occupying the two display slots.
///
/// `primary` is the visually left-hand slot. Under right-to-left reading
/// the *second* page of a pair is displayed first, so it lands in
/// `primary`. Absent slots render nothing (e.g. the final odd page in
/// dual mode).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spread<'a> {
    pub primary: Option<&'a Path>,
    pub secondary: Option<&'a Path>,
}

/// Manages navigation through the page sequence as single pages or spreads.
///
/// All operations are infallible: out-of-range inputs are clamped into the
/// valid domain and operations on an empty sequence are no-ops that leave
/// the index at 0.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SpreadNavigator {
    sequence: PageSequence,
    current_index: usize,
    direction: ReadingDirection,
    mode: PageMode,
}

impl SpreadNavigator {
    /// Creates an empty navigator with the given startup direction and mode.
    pub fn new(direction: ReadingDirection, mode: PageMode) -> Self {
        Self {
            sequence: PageSequence::new(),
            current_index: 0,
            direction,
            mode,
        }
    }

    /// Replaces the sequence atomically and resets to the first spread.
    pub fn load_sequence(&mut self, sequence: PageSequence) {
        self.sequence = sequence;
        self.current_index = 0;
    }

    /// Replaces the sequence and jumps to the spread containing the image
    /// at `raw_index` (used when opening a specific dropped file).
    pub fn open_at(&mut self, sequence: PageSequence, raw_index: usize) {
        self.sequence = sequence;
        self.current_index = 0;
        self.go_to_image(raw_index);
    }

    /// Returns the page sequence in reading order.
    pub fn sequence(&self) -> &PageSequence {
        &self.sequence
    }

    /// Returns the total number of spreads under the current page mode.
    pub fn total_pages(&self) -> usize {
        match self.mode {
            PageMode::Single => self.sequence.len(),
            PageMode::Dual => self.sequence.len().div_ceil(2),
        }
    }

    /// Returns the current spread index.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Returns the number of underlying images.
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Checks if no images are loaded.
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Returns the active reading direction.
    pub fn reading_direction(&self) -> ReadingDirection {
        self.direction
    }

    /// Returns the active page mode.
    pub fn page_mode(&self) -> PageMode {
        self.mode
    }

    /// Checks if the current spread is the first (used to disable buttons).
    pub fn is_at_first(&self) -> bool {
        self.current_index == 0
    }

    /// Checks if the current spread is the last.
    pub fn is_at_last(&self) -> bool {
        self.total_pages() <= self.current_index + 1
    }

    /// Jumps to the first spread. Always succeeds.
    pub fn go_first(&mut self) {
        self.current_index = 0;
    }

    /// Advances one spread; no-op at the last spread (no wraparound).
    pub fn go_next(&mut self) {
        let last = self.total_pages().saturating_sub(1);
        self.current_index = (self.current_index + 1).min(last);
    }

    /// Goes back one spread; no-op at the first spread.
    pub fn go_previous(&mut self) {
        self.current_index = self.current_index.saturating_sub(1);
    }

    /// Jumps to the spread containing the image at raw position `raw_index`,
    /// clamped to the sequence. Used by the overview grid.
    pub fn go_to_image(&mut self, raw_index: usize) {
        if self.sequence.is_empty() {
            return;
        }
        let raw = raw_index.min(self.sequence.len() - 1);
        self.current_index = match self.mode {
            PageMode::Single => raw,
            PageMode::Dual => raw / 2,
        };
    }

    /// Updates the reading direction without moving the current index; only
    /// the slot assignment of the pair changes.
    pub fn set_reading_direction(&mut self, direction: ReadingDirection) {
        self.direction = direction;
    }

    /// Flips the reading direction.
    pub fn toggle_reading_direction(&mut self) {
        self.direction = match self.direction {
            ReadingDirection::LeftToRight => ReadingDirection::RightToLeft,
            ReadingDirection::RightToLeft => ReadingDirection::LeftToRight,
        };
    }

    /// Switches the page mode, remapping the index so the topmost visible
    /// image (the lower raw index of the current spread) stays visible.
    pub fn set_page_mode(&mut self, mode: PageMode) {
        if self.mode == mode {
            return;
        }
        let remapped = match (self.mode, mode) {
            (PageMode::Dual, PageMode::Single) => self.current_index * 2,
            (PageMode::Single, PageMode::Dual) => self.current_index / 2,
            _ => self.current_index,
        };
        self.mode = mode;
        let last = self.total_pages().saturating_sub(1);
        self.current_index = remapped.min(last);
    }

    /// Toggles between single and dual page mode.
    pub fn toggle_page_mode(&mut self) {
        self.set_page_mode(match self.mode {
            PageMode::Single => PageMode::Dual,
            PageMode::Dual => PageMode::Single,
        });
    }

    /// Resolves the current state to the images occupying the two slots.
    ///
    /// Pure query; both slots are absent when no images are loaded.
    pub fn resolve_spread(&self) -> Spread<'_> {
        match self.mode {
            PageMode::Single => Spread {
                primary: self.sequence.get(self.current_index),
                secondary: None,
            },
            PageMode::Dual => {
                let base = self.current_index * 2;
                match self.direction {
                    ReadingDirection::RightToLeft => Spread {
                        primary: self.sequence.get(base + 1),
                        secondary: self.sequence.get(base),
                    },
                    ReadingDirection::LeftToRight => Spread {
                        primary: self.sequence.get(base),
                        secondary: self.sequence.get(base + 1),
                    },
                }
            }
        }
    }

    /// Reading progress in `[0, 1]`; `0.0` when no images are loaded (the
    /// indicator is hidden in that state).
    pub fn progress_fraction(&self) -> f32 {
        let total = self.total_pages();
        if total == 0 {
            return 0.0;
        }
        (self.current_index + 1) as f32 / total as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn navigator_with(count: usize) -> SpreadNavigator {
        let paths = (1..=count)
            .map(|i| PathBuf::from(format!("page{i}.png")))
            .collect();
        let mut nav = SpreadNavigator::default();
        nav.load_sequence(PageSequence::from_paths(paths));
        nav
    }

    fn page(name: &str) -> Option<&Path> {
        Some(Path::new(name))
    }

    #[test]
    fn defaults_to_right_to_left_dual() {
        let nav = SpreadNavigator::default();
        assert_eq!(nav.reading_direction(), ReadingDirection::RightToLeft);
        assert_eq!(nav.page_mode(), PageMode::Dual);
    }

    #[test]
    fn go_previous_clamps_at_first_spread() {
        let mut nav = navigator_with(6);
        nav.go_previous();
        assert_eq!(nav.current_index(), 0);
    }

    #[test]
    fn go_next_clamps_at_last_spread() {
        let mut nav = navigator_with(6);
        for _ in 0..10 {
            nav.go_next();
        }
        assert_eq!(nav.current_index(), 2);
        assert!(nav.is_at_last());
    }

    #[test]
    fn go_first_resets_index() {
        let mut nav = navigator_with(6);
        nav.go_next();
        nav.go_next();
        nav.go_first();
        assert_eq!(nav.current_index(), 0);
        assert!(nav.is_at_first());
    }

    #[test]
    fn dual_mode_counts_spreads_with_odd_tail() {
        let nav = navigator_with(5);
        assert_eq!(nav.total_pages(), 3);
    }

    #[test]
    fn odd_tail_spread_has_absent_slot() {
        let mut nav = navigator_with(5);
        nav.go_to_image(4);
        assert_eq!(nav.current_index(), 2);

        // Raw index 5 is out of range; RTL places the existing page in the
        // secondary slot.
        let spread = nav.resolve_spread();
        assert_eq!(spread.primary, None);
        assert_eq!(spread.secondary, page("page5.png"));
    }

    #[test]
    fn direction_selects_primary_slot() {
        let mut nav = navigator_with(2);

        let spread = nav.resolve_spread();
        assert_eq!(spread.primary, page("page2.png"));
        assert_eq!(spread.secondary, page("page1.png"));

        nav.set_reading_direction(ReadingDirection::LeftToRight);
        let spread = nav.resolve_spread();
        assert_eq!(spread.primary, page("page1.png"));
        assert_eq!(spread.secondary, page("page2.png"));
    }

    #[test]
    fn toggling_direction_does_not_move_index() {
        let mut nav = navigator_with(8);
        nav.go_next();
        nav.toggle_reading_direction();
        assert_eq!(nav.current_index(), 1);
        nav.toggle_reading_direction();
        assert_eq!(nav.reading_direction(), ReadingDirection::RightToLeft);
        assert_eq!(nav.current_index(), 1);
    }

    #[test]
    fn single_mode_fills_primary_only() {
        let mut nav = SpreadNavigator::new(ReadingDirection::RightToLeft, PageMode::Single);
        nav.load_sequence(PageSequence::from_paths(vec![
            PathBuf::from("page1.png"),
            PathBuf::from("page2.png"),
        ]));

        let spread = nav.resolve_spread();
        assert_eq!(spread.primary, page("page1.png"));
        assert_eq!(spread.secondary, None);
    }

    #[test]
    fn mode_switch_preserves_topmost_image() {
        // Dual spread 3 shows raw images 6-7; the anchor is raw image 6.
        let mut nav = navigator_with(10);
        nav.go_to_image(6);
        assert_eq!(nav.current_index(), 3);

        nav.set_page_mode(PageMode::Single);
        assert_eq!(nav.current_index(), 6);

        nav.set_page_mode(PageMode::Dual);
        assert_eq!(nav.current_index(), 3);
    }

    #[test]
    fn mode_switch_clamps_at_odd_tail() {
        // 5 images, dual spread 2 shows only raw image 4. Single mode has
        // exactly 5 pages, so index 4 is still in range.
        let mut nav = navigator_with(5);
        nav.go_to_image(4);
        nav.set_page_mode(PageMode::Single);
        assert_eq!(nav.current_index(), 4);
    }

    #[test]
    fn jump_from_grid_maps_to_spread() {
        let mut nav = navigator_with(12);
        nav.go_to_image(5);
        assert_eq!(nav.current_index(), 2);
    }

    #[test]
    fn jump_clamps_out_of_range_raw_index() {
        let mut nav = navigator_with(4);
        nav.go_to_image(99);
        assert_eq!(nav.current_index(), 1);
    }

    #[test]
    fn open_at_jumps_to_containing_spread() {
        let paths = (1..=6)
            .map(|i| PathBuf::from(format!("page{i}.png")))
            .collect();
        let mut nav = SpreadNavigator::default();
        nav.open_at(PageSequence::from_paths(paths), 3);
        assert_eq!(nav.current_index(), 1);
    }

    #[test]
    fn load_sequence_resets_index() {
        let mut nav = navigator_with(10);
        nav.go_next();
        nav.go_next();
        nav.load_sequence(PageSequence::from_paths(vec![PathBuf::from("a.png")]));
        assert_eq!(nav.current_index(), 0);
        assert_eq!(nav.len(), 1);
    }

    #[test]
    fn empty_sequence_operations_are_no_ops() {
        let mut nav = SpreadNavigator::default();
        nav.go_next();
        nav.go_previous();
        nav.go_first();
        nav.go_to_image(7);
        nav.toggle_page_mode();
        nav.toggle_reading_direction();
        assert_eq!(nav.current_index(), 0);
        assert!(nav.is_empty());

        let spread = nav.resolve_spread();
        assert_eq!(spread.primary, None);
        assert_eq!(spread.secondary, None);
    }

    #[test]
    fn progress_fraction_spans_zero_to_one() {
        let mut nav = navigator_with(6);
        assert!((nav.progress_fraction() - 1.0 / 3.0).abs() < f32::EPSILON);
        nav.go_next();
        nav.go_next();
        assert!((nav.progress_fraction() - 1.0).abs() < f32::EPSILON);

        let empty = SpreadNavigator::default();
        assert_eq!(empty.progress_fraction(), 0.0);
    }
}
