// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Geometry and offset logic kept apart from widgets so it can be unit
//! tested with synthetic sizes.

pub mod pan;
pub mod viewbox;

// Re-export commonly used types for convenience
pub use pan::{NarrowImageAlign, PanBounds, PanState};
pub use viewbox::AspectRatio;
