// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Pan**: Offset step per arrow press and its accepted range
//! - **Viewbox**: Aspect ratio of the pannable view

// ==========================================================================
// Pan Defaults
// ==========================================================================

/// Default offset change per arrow press, in logical pixels.
pub const DEFAULT_PAN_STEP: f32 = 60.0;

/// Minimum accepted pan step.
pub const MIN_PAN_STEP: f32 = 1.0;

/// Maximum accepted pan step.
pub const MAX_PAN_STEP: f32 = 1000.0;

// ==========================================================================
// Viewbox Defaults
// ==========================================================================

/// Default viewbox ratio width component.
pub const DEFAULT_ASPECT_WIDTH: u16 = 16;

/// Default viewbox ratio height component.
pub const DEFAULT_ASPECT_HEIGHT: u16 = 9;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_PAN_STEP > 0.0);
    assert!(MAX_PAN_STEP > MIN_PAN_STEP);
    assert!(DEFAULT_PAN_STEP >= MIN_PAN_STEP);
    assert!(DEFAULT_PAN_STEP <= MAX_PAN_STEP);

    assert!(DEFAULT_ASPECT_WIDTH > 0);
    assert!(DEFAULT_ASPECT_HEIGHT > 0);
};
