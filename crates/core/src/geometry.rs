use masthead_protocol::{GeometrySnapshot, ScrollMetrics};

use crate::math::clamp;

/// Read-only access to the rendering surface's geometry.
///
/// Implementations must measure fresh on every call; the engine never caches
/// a snapshot across passes.
pub trait GeometrySampler {
    /// Current scroll metrics and header box, or `None` while the header
    /// element is not mounted.
    fn sample(&self) -> Option<GeometrySnapshot>;

    /// Document-relative offset of the avatar anchor marker, if it can be
    /// measured.
    fn anchor_offset(&self) -> Option<f64>;
}

impl<T: GeometrySampler + ?Sized> GeometrySampler for &T {
    fn sample(&self) -> Option<GeometrySnapshot> {
        (**self).sample()
    }

    fn anchor_offset(&self) -> Option<f64> {
        (**self).anchor_offset()
    }
}

/// Scroll offset pulled back into `[0, document_height - viewport_height]`,
/// discarding overscroll.
pub fn clamped_offset(metrics: &ScrollMetrics) -> f64 {
    clamp(metrics.scroll_offset, 0.0, metrics.max_scroll())
}
