use super::Vec2;

/// Axis-aligned rectangle in logical pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        Vec2::new(self.origin.x + self.size.x, self.origin.y + self.size.y)
    }

    #[inline]
    pub fn width(self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(self) -> f32 {
        self.size.y
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.origin.is_finite() && self.size.is_finite()
    }

    /// Normalizes the rectangle so width/height are non-negative.
    #[inline]
    pub fn normalized(self) -> Self {
        let mut x = self.origin.x;
        let mut y = self.origin.y;
        let mut w = self.size.x;
        let mut h = self.size.y;

        if w < 0.0 {
            x += w;
            w = -w;
        }
        if h < 0.0 {
            y += h;
            h = -h;
        }

        Rect::new(x, y, w, h)
    }

    /// Returns the rectangle moved by `offset`. Size is unchanged.
    #[inline]
    pub fn translate(self, offset: Vec2) -> Self {
        Self::from_origin_size(self.origin + offset, self.size)
    }

    /// Component-wise ceiling of origin and size.
    ///
    /// Used when reporting bounds in whole pixels so partially covered
    /// pixels are never dropped.
    #[inline]
    pub fn ceil(self) -> Self {
        Rect::new(
            self.origin.x.ceil(),
            self.origin.y.ceil(),
            self.size.x.ceil(),
            self.size.y.ceil(),
        )
    }

    /// Grows the rectangle by `amount` on every side.
    #[inline]
    pub fn inflate(self, amount: f32) -> Self {
        Rect::new(
            self.origin.x - amount,
            self.origin.y - amount,
            self.size.x + 2.0 * amount,
            self.size.y + 2.0 * amount,
        )
    }

    /// Smallest rectangle covering both `self` and `other`.
    ///
    /// Zero-sized rectangles still contribute their origin point.
    #[inline]
    pub fn union(self, other: Rect) -> Rect {
        let a = self.normalized();
        let b = other.normalized();

        let x0 = a.origin.x.min(b.origin.x);
        let y0 = a.origin.y.min(b.origin.y);
        let x1 = (a.origin.x + a.size.x).max(b.origin.x + b.size.x);
        let y1 = (a.origin.y + a.size.y).max(b.origin.y + b.size.y);

        Rect::new(x0, y0, x1 - x0, y1 - y0)
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        let r = self.normalized();
        p.x >= r.origin.x
            && p.y >= r.origin.y
            && p.x < (r.origin.x + r.size.x)
            && p.y < (r.origin.y + r.size.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    // ── normalized ────────────────────────────────────────────────────────

    #[test]
    fn normalized_negative_width() {
        let n = r(10.0, 0.0, -4.0, 5.0).normalized();
        assert_eq!(n.origin.x, 6.0);
        assert_eq!(n.size.x, 4.0);
    }

    // ── contains ──────────────────────────────────────────────────────────

    #[test]
    fn contains_top_left_inclusive() {
        assert!(r(0.0, 0.0, 10.0, 10.0).contains(Vec2::new(0.0, 0.0)));
    }

    #[test]
    fn contains_bottom_right_exclusive() {
        assert!(!r(0.0, 0.0, 10.0, 10.0).contains(Vec2::new(10.0, 10.0)));
    }

    // ── union ─────────────────────────────────────────────────────────────

    #[test]
    fn union_disjoint_spans_both() {
        let u = r(0.0, 0.0, 5.0, 5.0).union(r(10.0, 0.0, 5.0, 5.0));
        assert_eq!(u, r(0.0, 0.0, 15.0, 5.0));
    }

    #[test]
    fn union_is_commutative() {
        let a = r(-3.0, 2.0, 4.0, 1.0);
        let b = r(1.0, -6.0, 2.0, 2.0);
        assert_eq!(a.union(b), b.union(a));
    }

    #[test]
    fn union_with_contained_is_outer() {
        let outer = r(0.0, 0.0, 100.0, 100.0);
        assert_eq!(outer.union(r(10.0, 10.0, 5.0, 5.0)), outer);
    }

    #[test]
    fn union_zero_size_extends_to_point() {
        let u = r(0.0, 0.0, 2.0, 2.0).union(r(8.0, 4.0, 0.0, 0.0));
        assert_eq!(u, r(0.0, 0.0, 8.0, 4.0));
    }

    // ── translate / ceil / inflate ────────────────────────────────────────

    #[test]
    fn translate_keeps_size() {
        let t = r(1.0, 2.0, 3.0, 4.0).translate(Vec2::new(10.0, -2.0));
        assert_eq!(t, r(11.0, 0.0, 3.0, 4.0));
    }

    #[test]
    fn ceil_rounds_every_component_up() {
        assert_eq!(r(0.2, 1.0, 4.5, 2.01).ceil(), r(1.0, 1.0, 5.0, 3.0));
    }

    #[test]
    fn inflate_grows_each_side() {
        assert_eq!(r(2.0, 2.0, 4.0, 4.0).inflate(1.0), r(1.0, 1.0, 6.0, 6.0));
    }

    // ── is_empty ──────────────────────────────────────────────────────────

    #[test]
    fn is_empty_zero_size() {
        assert!(r(0.0, 0.0, 0.0, 5.0).is_empty());
        assert!(!r(0.0, 0.0, 1.0, 1.0).is_empty());
    }
}
