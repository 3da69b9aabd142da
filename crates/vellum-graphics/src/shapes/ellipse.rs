use parking_lot::RwLock;

use vellum_engine::coords::{Rect, Vec2};
use vellum_engine::paint::{Color, Stroke};
use vellum_engine::surface::Surface;

use crate::object::GraphicsObject;
use crate::observer::ObserverSet;

use super::ShapeState;

/// Ellipse inscribed in an axis-aligned frame, filled black by default.
#[derive(Debug)]
pub struct Ellipse {
    state: RwLock<ShapeState>,
    observers: ObserverSet,
}

impl Ellipse {
    /// Ellipse whose frame has top-left `(x, y)` and the given size.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            state: RwLock::new(ShapeState::new(x, y, width, height)),
            observers: ObserverSet::new(),
        }
    }

    /// Circle of `radius` centred on `(cx, cy)`.
    pub fn circle(cx: f32, cy: f32, radius: f32) -> Self {
        Self::new(cx - radius, cy - radius, radius * 2.0, radius * 2.0)
    }

    pub fn with_fill(self, color: Color) -> Self {
        self.state.write().fill = Some(color);
        self
    }

    pub fn with_stroke(self, stroke: Stroke) -> Self {
        self.state.write().stroke = Some(stroke);
        self
    }

    pub fn without_fill(self) -> Self {
        self.state.write().fill = None;
        self
    }

    pub fn frame(&self) -> Rect {
        self.state.read().frame
    }

    pub fn fill(&self) -> Option<Color> {
        self.state.read().fill
    }

    pub fn stroke(&self) -> Option<Stroke> {
        self.state.read().stroke
    }

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

impl GraphicsObject for Ellipse {
    fn draw(&self, surface: &mut dyn Surface) {
        let state = *self.state.read();
        if let Some(fill) = state.fill {
            surface.fill_ellipse(state.frame, fill);
        }
        if let Some(stroke) = state.stroke {
            surface.stroke_ellipse(state.frame, stroke);
        }
    }

    fn bounds(&self) -> Option<Rect> {
        self.state.read().bounds()
    }

    fn test_hit(&self, x: f32, y: f32) -> bool {
        let outer = self.state.read().outer();
        let rx = outer.size.x * 0.5;
        let ry = outer.size.y * 0.5;
        if rx <= 0.0 || ry <= 0.0 {
            return false;
        }

        let dx = (x - (outer.origin.x + rx)) / rx;
        let dy = (y - (outer.origin.y + ry)) / ry;
        dx * dx + dy * dy <= 1.0
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
