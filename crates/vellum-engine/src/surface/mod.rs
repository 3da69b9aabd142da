//! Abstract drawing context.
//!
//! A `Surface` is whatever the windowing layer hands to the scene graph each
//! frame: a backend canvas, an offscreen buffer, or a [`DrawList`] recording.
//! The scene graph only relies on:
//! - origin translation (groups draw children in local space)
//! - sub-surface creation (groups keep a backing buffer)
//! - rendering-quality hints
//! - clearing and a handful of fill/stroke primitives
//!
//! [`DrawList`]: crate::record::DrawList

mod hints;

use core::any::Any;

use crate::coords::{Rect, Vec2};
use crate::paint::{Color, Stroke};

pub use hints::{Antialiasing, RenderHints, RenderQuality, StrokeControl};

/// 2D drawing context with a movable origin.
///
/// All primitive coordinates are relative to the current [`origin`](Surface::origin).
pub trait Surface: Send {
    /// Current origin offset, in the surface's own pixel space.
    fn origin(&self) -> Vec2;

    /// Moves the origin by `(dx, dy)`. Calls must be undone by the caller.
    fn translate(&mut self, dx: f32, dy: f32);

    /// Pixel size of the surface.
    fn size(&self) -> (u32, u32);

    fn render_hints(&self) -> RenderHints;

    fn set_render_hints(&mut self, hints: RenderHints);

    /// Fills the whole surface with `color`, ignoring the origin.
    fn clear(&mut self, color: Color);

    fn fill_rect(&mut self, rect: Rect, color: Color);

    fn stroke_rect(&mut self, rect: Rect, stroke: Stroke);

    /// Fills the ellipse inscribed in `frame`.
    fn fill_ellipse(&mut self, frame: Rect, color: Color);

    /// Outlines the ellipse inscribed in `frame`.
    fn stroke_ellipse(&mut self, frame: Rect, stroke: Stroke);

    /// Creates an offscreen surface of the same backend.
    ///
    /// The new surface starts with a zero origin and default hints.
    fn create_sub_surface(&self, width: u32, height: u32) -> Box<dyn Surface>;

    /// Backend downcasting, mostly for inspection in tests and tooling.
    fn as_any(&self) -> &dyn Any;
}
