use core::any::Any;

use crate::coords::{Rect, Vec2};
use crate::paint::{Color, Stroke};
use crate::surface::{RenderHints, Surface};

use super::{DrawCmd, EllipseCmd, RectCmd};

/// A single recorded command plus the hints in effect when it was issued.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub cmd: DrawCmd,
    pub hints: RenderHints,
}

/// Recorded draw stream for one surface.
///
/// Performance characteristics:
/// - every primitive is an O(1) push
/// - [`reset`](DrawList::reset) keeps allocated capacity for reuse across frames
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    width: u32,
    height: u32,
    origin: Vec2,
    hints: RenderHints,
}

impl DrawList {
    /// Creates a recording surface of the given pixel size.
    #[inline]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, ..Self::default() }
    }

    /// Clears recorded items, origin, and hints. Keeps allocated capacity.
    #[inline]
    pub fn reset(&mut self) {
        self.items.clear();
        self.origin = Vec2::zero();
        self.hints = RenderHints::default();
    }

    /// Returns items in recording order (back-to-front).
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    /// Iterates recorded commands without their hints.
    pub fn commands(&self) -> impl Iterator<Item = &DrawCmd> {
        self.items.iter().map(|item| &item.cmd)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    fn push(&mut self, cmd: DrawCmd) {
        self.items.push(DrawItem { cmd, hints: self.hints });
    }
}

impl Surface for DrawList {
    #[inline]
    fn origin(&self) -> Vec2 {
        self.origin
    }

    #[inline]
    fn translate(&mut self, dx: f32, dy: f32) {
        self.origin = self.origin + Vec2::new(dx, dy);
    }

    #[inline]
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[inline]
    fn render_hints(&self) -> RenderHints {
        self.hints
    }

    #[inline]
    fn set_render_hints(&mut self, hints: RenderHints) {
        self.hints = hints;
    }

    fn clear(&mut self, color: Color) {
        self.push(DrawCmd::Clear(color));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let rect = rect.translate(self.origin);
        self.push(DrawCmd::Rect(RectCmd { rect, color, stroke: None }));
    }

    fn stroke_rect(&mut self, rect: Rect, stroke: Stroke) {
        let rect = rect.translate(self.origin);
        self.push(DrawCmd::Rect(RectCmd { rect, color: stroke.color, stroke: Some(stroke) }));
    }

    fn fill_ellipse(&mut self, frame: Rect, color: Color) {
        let frame = frame.translate(self.origin);
        self.push(DrawCmd::Ellipse(EllipseCmd { frame, color, stroke: None }));
    }

    fn stroke_ellipse(&mut self, frame: Rect, stroke: Stroke) {
        let frame = frame.translate(self.origin);
        self.push(DrawCmd::Ellipse(EllipseCmd { frame, color: stroke.color, stroke: Some(stroke) }));
    }

    fn create_sub_surface(&self, width: u32, height: u32) -> Box<dyn Surface> {
        Box::new(DrawList::new(width, height))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
