use std::sync::Weak;

use vellum_engine::coords::{Rect, Vec2};
use vellum_engine::surface::Surface;

use crate::observer::{GraphicsObserver, ObserverSet};

/// Anything that can be drawn, bounded, hit-tested, and positioned.
///
/// Objects are shared as `Arc<dyn GraphicsObject>` between application code
/// and the group that draws them, so every mutator takes `&self` and uses
/// interior mutability.
///
/// Contract for implementors:
/// - [`bounds`](Self::bounds) always reflects the current geometry
/// - every mutation notifies [`observers`](Self::observers) before returning,
///   without holding any internal lock during the notification
/// - [`add_observer`](Self::add_observer) and
///   [`remove_observer`](Self::remove_observer) may notify; a group calls
///   them without holding its member lock
///
/// # Implementing a custom drawable
///
/// ```rust,ignore
/// struct Dot { center: RwLock<Vec2>, observers: ObserverSet }
///
/// impl GraphicsObject for Dot {
///     fn draw(&self, surface: &mut dyn Surface) {
///         let c = *self.center.read();
///         surface.fill_ellipse(Rect::new(c.x - 1.0, c.y - 1.0, 2.0, 2.0), Color::black());
///     }
///     fn bounds(&self) -> Option<Rect> { /* ... */ }
///     fn test_hit(&self, x: f32, y: f32) -> bool { /* ... */ }
///     fn position(&self) -> Vec2 { *self.center.read() }
///     fn set_position(&self, x: f32, y: f32) {
///         *self.center.write() = Vec2::new(x, y);
///         self.observers.notify(self);
///     }
///     fn observers(&self) -> &ObserverSet { &self.observers }
/// }
/// ```
pub trait GraphicsObject: Send + Sync + core::fmt::Debug {
    /// Draws the object onto `surface`, relative to the surface's current origin.
    fn draw(&self, surface: &mut dyn Surface);

    /// Axis-aligned bounds in the container's coordinate space.
    ///
    /// `None` means the object currently covers nothing.
    fn bounds(&self) -> Option<Rect>;

    /// Whether `(x, y)`, in the container's coordinate space, hits the object.
    fn test_hit(&self, x: f32, y: f32) -> bool;

    fn position(&self) -> Vec2;

    /// Moves the object so its position is `(x, y)` in the container's space.
    fn set_position(&self, x: f32, y: f32);

    fn observers(&self) -> &ObserverSet;

    fn add_observer(&self, observer: Weak<dyn GraphicsObserver>) {
        self.observers().add(observer);
    }

    /// Returns `false` if `observer` was not registered.
    fn remove_observer(&self, observer: &Weak<dyn GraphicsObserver>) -> bool {
        self.observers().remove(observer)
    }

    /// Offsets the current position by `(dx, dy)`.
    fn move_by(&self, dx: f32, dy: f32) {
        let p = self.position();
        self.set_position(p.x + dx, p.y + dy);
    }
}

/// Identity comparison: `true` when both references point at the same object.
#[inline]
pub fn same_object(a: &dyn GraphicsObject, b: &dyn GraphicsObject) -> bool {
    core::ptr::addr_eq(a, b)
}
