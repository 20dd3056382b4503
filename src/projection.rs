//! Longitude/latitude to screen-space mapping.

use crate::geometry::Vec2f;
use crate::model::Extent;

/// Distance kept free on every side of the viewport.
pub const OUTER_MARGIN: f32 = 100.0;

/// Linear projection of the dataset extent onto the viewport, inset by a margin.
#[derive(Debug, Clone, Copy)]
pub struct Projector {
    extent: Extent,
    viewport: Vec2f,
    margin: f32,
}

impl Projector {
    pub fn new(extent: Extent, viewport: Vec2f, margin: f32) -> Self {
        Self {
            extent,
            viewport,
            margin,
        }
    }

    pub fn with_default_margin(extent: Extent, viewport: Vec2f) -> Self {
        Self::new(extent, viewport, OUTER_MARGIN)
    }

    /// Screen position of a geographic coordinate.
    ///
    /// Longitude grows to the right, latitude grows upwards. A degenerate
    /// extent on either axis places the coordinate in the middle of that
    /// axis' output interval.
    pub fn project(&self, longitude: f64, latitude: f64) -> Vec2f {
        let left = self.margin;
        let right = (self.viewport.x - self.margin).max(left);
        let top = self.margin;
        let bottom = (self.viewport.y - self.margin).max(top);
        let x = map_axis(
            longitude,
            self.extent.min_lon,
            self.extent.max_lon,
            left,
            right,
        );
        let y = map_axis(
            latitude,
            self.extent.min_lat,
            self.extent.max_lat,
            bottom,
            top,
        );
        Vec2f::new(x, y)
    }
}

fn map_axis(v: f64, lo: f64, hi: f64, out_lo: f32, out_hi: f32) -> f32 {
    let span = hi - lo;
    if span == 0.0 || !span.is_finite() {
        return (out_lo + out_hi) * 0.5;
    }
    let t = ((v - lo) / span) as f32;
    out_lo + t * (out_hi - out_lo)
}
