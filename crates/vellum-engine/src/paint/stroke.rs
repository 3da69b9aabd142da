use super::Color;

/// Outline drawn centred on a shape's edge.
///
/// Half of `width` falls outside the shape's frame, so outlined shapes grow
/// their reported bounds by `width / 2` on each side.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Stroke {
    pub width: f32,
    pub color: Color,
}

impl Stroke {
    #[inline]
    pub fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }

    /// Distance the stroke reaches beyond the geometric edge.
    ///
    /// Negative widths are treated as zero.
    #[inline]
    pub fn outset(self) -> f32 {
        self.width.max(0.0) * 0.5
    }
}
