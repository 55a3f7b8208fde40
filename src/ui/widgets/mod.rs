// SPDX-License-Identifier: MPL-2.0
pub mod pan_surface;

pub use pan_surface::PanSurface;
