// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent
//! localization system. It handles language detection, translation file
//! loading, and string formatting.
//!
//! Locale resolution order: CLI flag, then config file, then OS locale,
//! with `en-US` as the final fallback.

pub mod fluent;
