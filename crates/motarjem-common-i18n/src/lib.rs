// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Internationalization (i18n) support for Motarjem.
//!
//! This crate provides the user-facing strings of the translator screen using
//! GNU gettext catalogs. It supports both left-to-right (LTR) and right-to-left
//! (RTL) interface locales.
//!
//! # String Naming Convention
//!
//! All translatable strings use a hierarchical dot-notation key format with the
//! `client.` prefix, e.g. `client.status.no_translation`.
//!
//! # Example
//!
//! ```
//! use motarjem_common_i18n::{t, t_fmt, is_rtl, resolve_locale};
//!
//! let prompt = t("fa", "client.status.enter_text");
//! let action = t_fmt("en", "client.action.translate", &[("language", "Persian")]);
//!
//! if is_rtl("fa") {
//!     // mirror the layout
//! }
//!
//! let locale = resolve_locale(Some("fa"), "en");
//! ```

mod catalog;
mod locale;
mod resolve;

pub use catalog::{t, t_fmt};
pub use locale::{available_locales, is_rtl, is_supported, locale_info, Direction, LocaleInfo};
pub use resolve::resolve_locale;

pub use locale::{DEFAULT_LOCALE, LOCALES};
