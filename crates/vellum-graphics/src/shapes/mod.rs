//! Reference leaf drawables.
//!
//! Both shapes are framed by a rectangle whose origin is the shape's
//! position. A stroke is centred on the frame edge and widens the bounds.

mod ellipse;
mod rectangle;

pub use ellipse::Ellipse;
pub use rectangle::Rectangle;

use vellum_engine::coords::Rect;
use vellum_engine::paint::{Color, Stroke};

/// Mutable geometry and style shared by the reference shapes.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct ShapeState {
    pub frame: Rect,
    pub fill: Option<Color>,
    pub stroke: Option<Stroke>,
}

impl ShapeState {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            frame: Rect::new(x, y, width, height),
            fill: Some(Color::black()),
            stroke: None,
        }
    }

    /// Frame grown by the stroke outset, normalized.
    pub fn outer(&self) -> Rect {
        let frame = self.frame.normalized();
        match self.stroke {
            Some(stroke) => frame.inflate(stroke.outset()),
            None => frame,
        }
    }

    pub fn bounds(&self) -> Option<Rect> {
        let outer = self.outer();
        outer.is_finite().then_some(outer)
    }
}
