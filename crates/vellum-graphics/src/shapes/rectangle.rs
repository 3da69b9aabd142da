use parking_lot::RwLock;

use vellum_engine::coords::{Rect, Vec2};
use vellum_engine::paint::{Color, Stroke};
use vellum_engine::surface::Surface;

use crate::object::GraphicsObject;
use crate::observer::ObserverSet;

use super::ShapeState;

/// Axis-aligned rectangle, filled black by default.
///
/// # Example
/// ```rust,ignore
/// let r = Arc::new(
///     Rectangle::new(0.0, 0.0, 40.0, 20.0)
///         .with_fill(Color::from_straight(0.2, 0.4, 0.9, 1.0))
///         .with_stroke(Stroke::new(2.0, Color::black())),
/// );
/// group.add(r.clone());
/// ```
#[derive(Debug)]
pub struct Rectangle {
    state: RwLock<ShapeState>,
    observers: ObserverSet,
}

impl Rectangle {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            state: RwLock::new(ShapeState::new(x, y, width, height)),
            observers: ObserverSet::new(),
        }
    }

    pub fn with_fill(self, color: Color) -> Self {
        self.state.write().fill = Some(color);
        self
    }

    pub fn with_stroke(self, stroke: Stroke) -> Self {
        self.state.write().stroke = Some(stroke);
        self
    }

    /// Outline only.
    pub fn without_fill(self) -> Self {
        self.state.write().fill = None;
        self
    }

    // ── accessors ─────────────────────────────────────────────────────────

    pub fn frame(&self) -> Rect {
        self.state.read().frame
    }

    pub fn fill(&self) -> Option<Color> {
        self.state.read().fill
    }

    pub fn stroke(&self) -> Option<Stroke> {
        self.state.read().stroke
    }

    // ── mutators (notify observers) ───────────────────────────────────────

    pub fn set_size(&self, width: f32, height: f32) {
        self.state.write().frame.size = Vec2::new(width, height);
        self.changed();
    }

    pub fn set_fill(&self, fill: Option<Color>) {
        self.state.write().fill = fill;
        self.changed();
    }

    pub fn set_stroke(&self, stroke: Option<Stroke>) {
        self.state.write().stroke = stroke;
        self.changed();
    }

    #[inline]
    fn changed(&self) {
        self.observers.notify(self);
    }
}

impl GraphicsObject for Rectangle {
    fn draw(&self, surface: &mut dyn Surface) {
        let state = *self.state.read();
        if let Some(fill) = state.fill {
            surface.fill_rect(state.frame, fill);
        }
        if let Some(stroke) = state.stroke {
            surface.stroke_rect(state.frame, stroke);
        }
    }

    fn bounds(&self) -> Option<Rect> {
        self.state.read().bounds()
    }

    fn test_hit(&self, x: f32, y: f32) -> bool {
        self.state.read().outer().contains(Vec2::new(x, y))
    }

    fn position(&self) -> Vec2 {
        self.state.read().frame.origin
    }

    fn set_position(&self, x: f32, y: f32) {
        self.state.write().frame.origin = Vec2::new(x, y);
        self.changed();
    }

    fn observers(&self) -> &ObserverSet {
        &self.observers
    }
}
