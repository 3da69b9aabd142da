/// Edge anti-aliasing mode.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum Antialiasing {
    #[default]
    Off,
    On,
}

/// Speed/quality trade-off for rasterization.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum RenderQuality {
    #[default]
    Speed,
    Quality,
}

/// Whether stroke geometry may be snapped to the pixel grid.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum StrokeControl {
    /// Backend may normalize strokes for consistent appearance.
    #[default]
    Normalize,
    /// Strokes follow the exact geometry.
    Pure,
}

/// Rendering-quality hints applied to a surface.
///
/// `Default` is the backend's fast path. Group backing surfaces always use
/// [`RenderHints::high_quality`]; that policy is fixed and not configurable
/// per group.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct RenderHints {
    pub antialiasing: Antialiasing,
    pub rendering: RenderQuality,
    pub stroke_control: StrokeControl,
}

impl RenderHints {
    #[inline]
    pub const fn high_quality() -> Self {
        Self {
            antialiasing: Antialiasing::On,
            rendering: RenderQuality::Quality,
            stroke_control: StrokeControl::Pure,
        }
    }
}
