//! Coordinate and geometry types shared by surfaces and the scene graph.
//!
//! Canonical CPU space:
//! - Logical pixels
//! - Origin top-left
//! - +X right, +Y down
//!
//! Every drawable reports geometry in the space of its container; groups
//! translate into their own local space before forwarding.

mod rect;
mod vec2;

pub use rect::Rect;
pub use vec2::Vec2;
