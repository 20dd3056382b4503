//! Drawing-surface abstraction used by the scene renderer.
//!
//! The renderer only needs filled shapes, text and a way to measure text
//! width, so it talks to this trait instead of a concrete GUI toolkit. The
//! `egui` feature provides an implementation over `egui::Painter`; tests use
//! a recording implementation.

use crate::color::Rgba;
use crate::geometry::{RectF, Vec2f};

/// Which point of the text box `pos` refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    LeftTop,
    LeftCenter,
    CenterTop,
    CenterCenter,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Font {
    pub size: f32,
    pub bold: bool,
}

impl Font {
    pub const fn regular(size: f32) -> Self {
        Self { size, bold: false }
    }

    pub const fn bold(size: f32) -> Self {
        Self { size, bold: true }
    }
}

/// Per-corner radii of a rounded rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Corners {
    pub nw: f32,
    pub ne: f32,
    pub sw: f32,
    pub se: f32,
}

impl Corners {
    pub const NONE: Corners = Corners {
        nw: 0.0,
        ne: 0.0,
        sw: 0.0,
        se: 0.0,
    };

    pub const fn same(r: f32) -> Self {
        Self {
            nw: r,
            ne: r,
            sw: r,
            se: r,
        }
    }

    /// Rounded top corners, square bottom corners.
    pub const fn top(r: f32) -> Self {
        Self {
            nw: r,
            ne: r,
            sw: 0.0,
            se: 0.0,
        }
    }
}

/// A resizable 2D surface in screen coordinates with the origin at the top-left.
pub trait Canvas {
    /// Current width and height.
    fn size(&self) -> Vec2f;
    fn fill_rect(&mut self, rect: RectF, corners: Corners, color: Rgba);
    fn fill_triangle(&mut self, points: [Vec2f; 3], color: Rgba);
    fn text(&mut self, pos: Vec2f, anchor: Anchor, text: &str, font: Font, color: Rgba);
    /// Rendered width of `text` in `font`.
    fn text_width(&self, text: &str, font: Font) -> f32;
}
