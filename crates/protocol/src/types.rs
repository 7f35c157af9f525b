use serde::{Deserialize, Serialize};

/// Scroll position and the two extents that bound it, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScrollMetrics {
    /// Distance scrolled from the top of the document. May be out of range
    /// while the platform overscrolls.
    pub scroll_offset: f64,
    pub viewport_height: f64,
    pub document_height: f64,
}

impl ScrollMetrics {
    pub fn new(scroll_offset: f64, viewport_height: f64, document_height: f64) -> Self {
        Self {
            scroll_offset,
            viewport_height,
            document_height,
        }
    }

    /// Largest reachable scroll offset. Negative when the document is
    /// shorter than the viewport.
    pub fn max_scroll(&self) -> f64 {
        self.document_height - self.viewport_height
    }
}

/// The header's bounding box relative to the viewport top.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HeaderGeometry {
    /// Signed: negative once the header has moved above the viewport.
    pub top: f64,
    pub height: f64,
}

impl HeaderGeometry {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }
}

/// Everything a single layout pass reads from the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeometrySnapshot {
    pub scroll: ScrollMetrics,
    pub header: HeaderGeometry,
}

impl GeometrySnapshot {
    pub fn new(scroll: ScrollMetrics, header: HeaderGeometry) -> Self {
        Self { scroll, header }
    }
}
