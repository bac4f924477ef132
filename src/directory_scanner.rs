// SPDX-License-Identifier: MPL-2.0
//! Directory scanner module for finding image files.
//!
//! This module scans a folder for supported image formats, filters them,
//! and hands the result to the sequencer for natural ordering. Ordering is
//! never the filesystem's responsibility: `read_dir` output is treated as
//! an unordered set.

use crate::error::Result;
use crate::page_sequence::PageSequence;
use std::path::Path;

/// Image extensions accepted by the viewer (case-insensitive).
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp"];

/// Checks if a file has a supported image extension.
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|candidate| ext.eq_ignore_ascii_case(candidate))
        })
}

/// Scans a folder for supported image files and returns them in natural
/// reading order.
///
/// A folder without images produces an empty sequence, not an error; only
/// an unreadable directory fails.
pub fn scan_directory(directory: &Path) -> Result<PageSequence> {
    let mut image_files = Vec::new();

    for entry in std::fs::read_dir(directory)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_file() && is_supported_image(&path) {
            image_files.push(path);
        }
    }

    Ok(PageSequence::from_paths(image_files))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn create_test_image(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = fs::File::create(&path).expect("failed to create test file");
        file.write_all(b"fake image data")
            .expect("failed to write test file");
        path
    }

    #[test]
    fn is_supported_image_recognizes_image_extensions() {
        assert!(is_supported_image(Path::new("test.jpg")));
        assert!(is_supported_image(Path::new("test.JPEG")));
        assert!(is_supported_image(Path::new("test.png")));
        assert!(is_supported_image(Path::new("test.gif")));
        assert!(is_supported_image(Path::new("test.BMP")));
    }

    #[test]
    fn is_supported_image_rejects_unsupported_formats() {
        assert!(!is_supported_image(Path::new("test.txt")));
        assert!(!is_supported_image(Path::new("test.webp")));
        assert!(!is_supported_image(Path::new("test")));
    }

    #[test]
    fn scan_directory_finds_all_images() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_test_image(temp_dir.path(), "a.jpg");
        create_test_image(temp_dir.path(), "b.png");
        create_test_image(temp_dir.path(), "c.gif");
        create_test_image(temp_dir.path(), "not_image.txt");

        let sequence = scan_directory(temp_dir.path()).expect("failed to scan directory");

        assert_eq!(sequence.len(), 3);
    }

    #[test]
    fn scan_directory_orders_naturally() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let img10 = create_test_image(temp_dir.path(), "img10.png");
        let img1 = create_test_image(temp_dir.path(), "img1.png");
        let img2 = create_test_image(temp_dir.path(), "img2.png");

        let sequence = scan_directory(temp_dir.path()).expect("failed to scan directory");

        assert_eq!(sequence.get(0), Some(img1.as_path()));
        assert_eq!(sequence.get(1), Some(img2.as_path()));
        assert_eq!(sequence.get(2), Some(img10.as_path()));
    }

    #[test]
    fn scan_directory_skips_subdirectories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::create_dir(temp_dir.path().join("nested.png"))
            .expect("failed to create subdirectory");
        create_test_image(temp_dir.path(), "real.png");

        let sequence = scan_directory(temp_dir.path()).expect("failed to scan directory");

        assert_eq!(sequence.len(), 1);
    }

    #[test]
    fn scan_directory_handles_empty_directory() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let sequence = scan_directory(temp_dir.path()).expect("failed to scan directory");

        assert!(sequence.is_empty());
    }

    #[test]
    fn scan_directory_fails_on_missing_directory() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing = temp_dir.path().join("does_not_exist");

        assert!(scan_directory(&missing).is_err());
    }
}
