// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.
//!
//! # Categories
//!
//! - **Notifications**: Keyboard dismissal, category policy
//! - **Layout**: Toast width bounds and text estimation

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Whether Escape dismisses the oldest open notification.
pub const DEFAULT_DISMISS_ON_ESCAPE: bool = true;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Default toast width in logical pixels.
pub const DEFAULT_TOAST_WIDTH: f32 = crate::ui::design_tokens::sizing::TOAST_WIDTH;

/// Minimum toast width in logical pixels.
pub const MIN_TOAST_WIDTH: f32 = 160.0;

/// Maximum toast width in logical pixels.
pub const MAX_TOAST_WIDTH: f32 = 960.0;

/// Average glyph advance relative to the font size, used to estimate
/// whether a message overflows its toast.
pub const AVERAGE_GLYPH_WIDTH_RATIO: f32 = 0.55;

const _: () = {
    assert!(MIN_TOAST_WIDTH < DEFAULT_TOAST_WIDTH);
    assert!(DEFAULT_TOAST_WIDTH < MAX_TOAST_WIDTH);
    assert!(AVERAGE_GLYPH_WIDTH_RATIO > 0.0 && AVERAGE_GLYPH_WIDTH_RATIO < 1.0);
};
