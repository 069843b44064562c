// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support.
//!
//! Labels shown by the toasts (the close button) and by the demo host are
//! localized with Fluent. Translation files are embedded at build time from
//! `assets/i18n/`.
//!
//! # Features
//!
//! - Automatic locale detection from CLI, config, or system settings
//! - Fallback to `en-US` when no better locale is available

pub mod fluent;
