//! Screen-space primitives shared by the projector, the pick engine and the
//! scene renderer.
//!
//! These types are independent of any GUI crate so the whole interaction
//! model can be exercised without a window. The `egui` adapter converts them
//! to `egui::Pos2` / `egui::Rect` at the drawing boundary.

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2f {
    pub x: f32,
    pub y: f32,
}

impl Vec2f {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Vec2f) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Axis-aligned rectangle. Clickable controls record one of these as their
/// hit region during rendering.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RectF {
    pub min: Vec2f,
    pub max: Vec2f,
}

impl RectF {
    /// Zero-area rectangle at the origin. Never contains any point.
    pub const ZERO: RectF = RectF {
        min: Vec2f { x: 0.0, y: 0.0 },
        max: Vec2f { x: 0.0, y: 0.0 },
    };

    pub fn from_min_max(min: Vec2f, max: Vec2f) -> Self {
        Self { min, max }
    }

    pub fn from_xywh(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self::from_min_max(Vec2f::new(x, y), Vec2f::new(x + w, y + h))
    }

    pub fn center(&self) -> Vec2f {
        Vec2f::new(
            (self.min.x + self.max.x) * 0.5,
            (self.min.y + self.max.y) * 0.5,
        )
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    /// Strict containment: points on the border are outside, so a degenerate
    /// rectangle contains nothing.
    pub fn contains(&self, p: Vec2f) -> bool {
        p.x > self.min.x && p.x < self.max.x && p.y > self.min.y && p.y < self.max.y
    }
}
