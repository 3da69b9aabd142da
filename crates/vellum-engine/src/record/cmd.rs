use crate::coords::Rect;
use crate::paint::{Color, Stroke};

/// Rectangle draw payload. `stroke = None` means filled.
#[derive(Debug, Clone, PartialEq)]
pub struct RectCmd {
    pub rect: Rect,
    pub color: Color,
    pub stroke: Option<Stroke>,
}

/// Ellipse draw payload; the ellipse is inscribed in `frame`.
#[derive(Debug, Clone, PartialEq)]
pub struct EllipseCmd {
    pub frame: Rect,
    pub color: Color,
    pub stroke: Option<Stroke>,
}

/// Renderer-agnostic draw command.
///
/// Geometry is stored in surface pixel space (origin translation applied).
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Clear(Color),
    Rect(RectCmd),
    Ellipse(EllipseCmd),
}
