#![cfg(feature = "egui")]

use eframe::egui::{self, Align2, Color32, CornerRadius, FontId, Pos2, Rect, Stroke};

use crate::canvas::{Anchor, Canvas, Corners, Font};
use crate::color::Rgba;
use crate::geometry::{RectF, Vec2f};

/// Horizontal offset of the second pass used to fake a bold weight.
const FAUX_BOLD_OFFSET: f32 = 0.6;

pub(crate) fn rgba_to_color32(c: Rgba) -> Color32 {
    Color32::from_rgba_unmultiplied(c.0, c.1, c.2, c.3)
}

fn corner_radius(c: Corners) -> CornerRadius {
    let r = |v: f32| v.round().clamp(0.0, u8::MAX as f32) as u8;
    CornerRadius {
        nw: r(c.nw),
        ne: r(c.ne),
        sw: r(c.sw),
        se: r(c.se),
    }
}

fn align(anchor: Anchor) -> Align2 {
    match anchor {
        Anchor::LeftTop => Align2::LEFT_TOP,
        Anchor::LeftCenter => Align2::LEFT_CENTER,
        Anchor::CenterTop => Align2::CENTER_TOP,
        Anchor::CenterCenter => Align2::CENTER_CENTER,
    }
}

/// [`Canvas`] over an egui painter. Canvas coordinates are relative to `rect.min`.
pub struct EguiCanvas<'a> {
    painter: &'a egui::Painter,
    rect: Rect,
}

impl<'a> EguiCanvas<'a> {
    pub fn new(painter: &'a egui::Painter, rect: Rect) -> Self {
        Self { painter, rect }
    }

    fn to_screen(&self, p: Vec2f) -> Pos2 {
        Pos2::new(self.rect.min.x + p.x, self.rect.min.y + p.y)
    }
}

impl Canvas for EguiCanvas<'_> {
    fn size(&self) -> Vec2f {
        Vec2f::new(self.rect.width(), self.rect.height())
    }

    fn fill_rect(&mut self, rect: RectF, corners: Corners, color: Rgba) {
        let r = Rect::from_min_max(self.to_screen(rect.min), self.to_screen(rect.max));
        self.painter.rect_filled(r, corner_radius(corners), rgba_to_color32(color));
    }

    fn fill_triangle(&mut self, points: [Vec2f; 3], color: Rgba) {
        let pts = points.iter().map(|p| self.to_screen(*p)).collect();
        self.painter.add(egui::Shape::convex_polygon(
            pts,
            rgba_to_color32(color),
            Stroke::NONE,
        ));
    }

    fn text(&mut self, pos: Vec2f, anchor: Anchor, text: &str, font: Font, color: Rgba) {
        let p = self.to_screen(pos);
        let font_id = FontId::proportional(font.size);
        let color = rgba_to_color32(color);
        self.painter.text(p, align(anchor), text, font_id.clone(), color);
        if font.bold {
            // egui ships no bold face; a second, slightly shifted pass thickens the strokes
            let shifted = Pos2::new(p.x + FAUX_BOLD_OFFSET, p.y);
            self.painter.text(shifted, align(anchor), text, font_id, color);
        }
    }

    fn text_width(&self, text: &str, font: Font) -> f32 {
        let galley = self.painter.layout_no_wrap(
            text.to_string(),
            FontId::proportional(font.size),
            Color32::WHITE,
        );
        let extra = if font.bold { FAUX_BOLD_OFFSET } else { 0.0 };
        galley.size().x + extra
    }
}
