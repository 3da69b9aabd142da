//! Paint model shared by shapes and surfaces.
//!
//! Scope:
//! - color representation (linear premultiplied alpha)
//! - stroke description for outlined shapes
//!
//! Geometry types remain in `coords`.

mod color;
mod stroke;

pub use color::Color;
pub use stroke::Stroke;
