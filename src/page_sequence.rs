// SPDX-License-Identifier: MPL-2.0
//! Page sequencing module: natural (human) ordering of image files.
//!
//! This module turns an unordered set of file paths into a stable reading
//! sequence. Ordering is decided by the file's base name, split into digit
//! and non-digit runs so that `page2.png` sorts before `page10.png`.

use std::cmp::Ordering;
use std::path::{Path, PathBuf};

/// An ordered sequence of page image paths.
///
/// Insertion order is natural order. The sequence is rebuilt wholesale
/// whenever the source folder changes and is never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageSequence {
    pages: Vec<PathBuf>,
}

impl PageSequence {
    /// Creates a new empty sequence.
    pub fn new() -> Self {
        Self { pages: Vec::new() }
    }

    /// Orders the given paths naturally and returns the resulting sequence.
    ///
    /// The sort is stable, so paths with identical ordering keys keep their
    /// input order. An empty input produces an empty sequence.
    pub fn from_paths(mut paths: Vec<PathBuf>) -> Self {
        paths.sort_by(|a, b| natural_path_cmp(a, b));
        Self { pages: paths }
    }

    /// Returns the page at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&Path> {
        self.pages.get(index).map(|p| p.as_path())
    }

    /// Returns the raw position of `path` in the sequence, if present.
    pub fn position(&self, path: &Path) -> Option<usize> {
        self.pages.iter().position(|p| p == path)
    }

    /// Returns the total number of pages.
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Checks if the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Iterates over the pages in reading order.
    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.pages.iter().map(|p| p.as_path())
    }
}

/// Compares two paths by the natural order of their base names.
///
/// Paths without a final component (e.g. `/`) compare via an empty name.
pub fn natural_path_cmp(a: &Path, b: &Path) -> Ordering {
    let a_name = a.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
    let b_name = b.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
    natural_cmp(&a_name, &b_name)
}

/// A single comparison token: a run of digits or a run of other characters.
#[derive(Debug, PartialEq, Eq)]
enum Token<'a> {
    Number(&'a str),
    Text(&'a str),
}

impl Token<'_> {
    fn cmp_token(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Token::Number(a), Token::Number(b)) => cmp_digit_runs(a, b),
            // Mixed positions fall back to textual comparison so that the
            // result is still total over arbitrary names.
            (a, b) => cmp_case_folded(a.raw(), b.raw()),
        }
    }

    fn raw(&self) -> &str {
        match self {
            Token::Number(s) | Token::Text(s) => s,
        }
    }
}

/// Compares two digit runs as integers without parsing them.
///
/// Leading zeros never affect the value: the magnitude is decided by the
/// zero-stripped length first, then digit by digit. This avoids any
/// overflow cliff for absurdly long runs.
fn cmp_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn cmp_case_folded(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

fn tokenize(name: &str) -> impl Iterator<Item = Token<'_>> {
    let mut rest = name;
    std::iter::from_fn(move || {
        let first = rest.chars().next()?;
        let is_digit = first.is_ascii_digit();
        let end = rest
            .find(|c: char| c.is_ascii_digit() != is_digit)
            .unwrap_or(rest.len());
        let (run, tail) = rest.split_at(end);
        rest = tail;
        Some(if is_digit {
            Token::Number(run)
        } else {
            Token::Text(run)
        })
    })
}

/// Natural-order comparison of two base names.
///
/// Token-by-token: digit runs compare as integers, other runs compare
/// case-folded. The first differing position decides; a strict prefix
/// sorts first.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut a_tokens = tokenize(a);
    let mut b_tokens = tokenize(b);

    loop {
        match (a_tokens.next(), b_tokens.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(a_tok), Some(b_tok)) => match a_tok.cmp_token(&b_tok) {
                Ordering::Equal => continue,
                other => return other,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequence_of(names: &[&str]) -> Vec<String> {
        let paths = names.iter().map(PathBuf::from).collect();
        PageSequence::from_paths(paths)
            .iter()
            .map(|p| p.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn orders_digit_runs_numerically() {
        assert_eq!(
            sequence_of(&["img2.png", "img10.png", "img1.png"]),
            vec!["img1.png", "img2.png", "img10.png"]
        );
    }

    #[test]
    fn leading_zeros_do_not_affect_value() {
        assert_eq!(
            sequence_of(&["page3.png", "page02.png", "page1.png"]),
            vec!["page1.png", "page02.png", "page3.png"]
        );
    }

    #[test]
    fn non_numeric_names_fall_back_to_case_folded_order() {
        assert_eq!(
            sequence_of(&["Cover.png", "back.png", "insert.png"]),
            vec!["back.png", "Cover.png", "insert.png"]
        );
    }

    #[test]
    fn strict_prefix_sorts_first() {
        assert_eq!(natural_cmp("page1", "page1b"), Ordering::Less);
        assert_eq!(natural_cmp("page", "page1"), Ordering::Less);
    }

    #[test]
    fn interleaved_tokens_compare_positionally() {
        assert_eq!(natural_cmp("v2ch10.png", "v2ch9.png"), Ordering::Greater);
        assert_eq!(natural_cmp("v1ch10.png", "v2ch1.png"), Ordering::Less);
    }

    #[test]
    fn very_long_digit_runs_do_not_overflow() {
        let small = format!("p{}.png", "9".repeat(30));
        let large = format!("p1{}.png", "0".repeat(30));
        assert_eq!(natural_cmp(&small, &large), Ordering::Less);
    }

    #[test]
    fn comparison_uses_base_name_not_directory() {
        let a = Path::new("/z/img1.png");
        let b = Path::new("/a/img2.png");
        assert_eq!(natural_path_cmp(a, b), Ordering::Less);
    }

    #[test]
    fn ordering_is_idempotent() {
        let names = ["b10.png", "a.png", "b2.png", "b02.png"];
        let first = sequence_of(&names);
        let second = sequence_of(&names);
        assert_eq!(first, second);
    }

    #[test]
    fn identical_keys_keep_input_order() {
        // "A.png" and "a.png" case-fold to the same key; stable sort
        // keeps them in input order.
        assert_eq!(
            sequence_of(&["A.png", "a.png"]),
            vec!["A.png", "a.png"]
        );
        assert_eq!(
            sequence_of(&["a.png", "A.png"]),
            vec!["a.png", "A.png"]
        );
    }

    #[test]
    fn empty_input_produces_empty_sequence() {
        let seq = PageSequence::from_paths(Vec::new());
        assert!(seq.is_empty());
        assert_eq!(seq.len(), 0);
        assert_eq!(seq.get(0), None);
    }

    #[test]
    fn position_finds_raw_index() {
        let seq = PageSequence::from_paths(vec![
            PathBuf::from("img2.png"),
            PathBuf::from("img1.png"),
        ]);
        assert_eq!(seq.position(Path::new("img2.png")), Some(1));
        assert_eq!(seq.position(Path::new("missing.png")), None);
    }
}
