//! Per-frame scene rendering onto a [`Canvas`].
//!
//! [`render_frame`] draws markers, title, legend and the detail modal and,
//! while doing so, refreshes the pointer pick and the hit regions stored in
//! [`AppState`] for the next click.

use crate::canvas::{Anchor, Canvas, Corners, Font};
use crate::color::{ColorMap, HOVER_COLOR, Rgb, Rgba};
use crate::geometry::{RectF, Vec2f};
use crate::interaction::AppState;
use crate::model::{Dataset, Record};
use crate::pick::{HIT_RADIUS, MARKER_SIZE, pick};
use crate::projection::Projector;

pub const DEFAULT_TITLE: &str = "Interactive Map of Global Volcanoes (by Type)";
pub const HOVER_LEGEND_LABEL: &str = "Hover / Selected";
pub const CLOSE_LABEL: &str = "Close";
pub const TRUNCATION_MARKER: &str = "...";

const BACKGROUND: Rgb = Rgb::gray(10);
const WHITE: Rgb = Rgb::gray(255);

const PANEL_PADDING: f32 = 20.0;
const LEGEND_WIDTH: f32 = 240.0;
const TOGGLE_HEIGHT: f32 = 40.0;
const LEGEND_ROW_HEIGHT: f32 = 20.0;
const LEGEND_SWATCH: f32 = 15.0;

const MODAL_MAX_WIDTH: f32 = 700.0;
const MODAL_MAX_HEIGHT: f32 = 800.0;
const MODAL_TITLE_HEIGHT: f32 = 50.0;
const MODAL_INSET: f32 = 30.0;
const MODAL_LINE_HEIGHT: f32 = 25.0;
/// Field rows stop once the next row would start below `bottom - this`.
const MODAL_BOTTOM_RESERVE: f32 = 70.0;
const CLOSE_WIDTH: f32 = 120.0;
const CLOSE_HEIGHT: f32 = 40.0;

/// Everything that stays constant between frames.
#[derive(Debug, Clone, Copy)]
pub struct Scene<'a> {
    pub dataset: &'a Dataset,
    pub colors: &'a ColorMap,
    pub title: &'a str,
}

/// One swatch and label of the open legend.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendRow {
    pub label: String,
    pub color: Rgb,
}

/// Legend rows: every distinct type in sorted order, then the hover/selected row.
pub fn legend_rows(dataset: &Dataset, colors: &ColorMap) -> Vec<LegendRow> {
    dataset
        .types()
        .iter()
        .map(|t| LegendRow {
            label: t.clone(),
            color: colors.resolve(Some(t)),
        })
        .chain(std::iter::once(LegendRow {
            label: HOVER_LEGEND_LABEL.to_string(),
            color: HOVER_COLOR,
        }))
        .collect()
}

/// Draw one frame and update the pick and hit regions in `state`.
pub fn render_frame(canvas: &mut dyn Canvas, scene: &Scene<'_>, state: &mut AppState) {
    let size = canvas.size();
    let projector = Projector::with_default_margin(scene.dataset.extent(), size);
    state.pick = pick(state.pointer, scene.dataset, &projector, HIT_RADIUS);

    canvas.fill_rect(
        RectF::from_xywh(0.0, 0.0, size.x, size.y),
        Corners::NONE,
        BACKGROUND.into(),
    );
    draw_markers(canvas, scene, state, &projector);
    draw_title(canvas, scene.title, size);

    state.hit.legend_toggle =
        draw_legend_toggle(canvas, size, state.ui.legend_open, state.pointer);
    if state.ui.legend_open {
        let rows = legend_rows(scene.dataset, scene.colors);
        draw_legend_content(canvas, &rows, state.hit.legend_toggle);
    }

    let selected = state.ui.selection.as_ref().and_then(|sel| {
        let record = scene.dataset.record(sel.index)?;
        Some((record, sel.kind.as_deref()))
    });
    state.hit.close_button = match selected {
        Some((record, kind)) => {
            let accent = scene.colors.resolve(kind);
            draw_detail_modal(canvas, scene.dataset, record, accent, state.pointer)
        }
        None => RectF::ZERO,
    };
}

fn draw_markers(
    canvas: &mut dyn Canvas,
    scene: &Scene<'_>,
    state: &AppState,
    projector: &Projector,
) {
    let hovered = state.pick.as_ref().map(|p| p.index);
    let selected = state.selected_index();
    let half = MARKER_SIZE / 2.0;
    for (i, r) in scene.dataset.records().iter().enumerate() {
        let p = projector.project(r.longitude, r.latitude);
        let color = if hovered == Some(i) || selected == Some(i) {
            HOVER_COLOR
        } else {
            scene.colors.resolve(r.kind())
        };
        canvas.fill_triangle(
            [
                Vec2f::new(p.x, p.y - MARKER_SIZE),
                Vec2f::new(p.x - half, p.y + half),
                Vec2f::new(p.x + half, p.y + half),
            ],
            color.into(),
        );
    }
}

fn draw_title(canvas: &mut dyn Canvas, title: &str, size: Vec2f) {
    canvas.text(
        Vec2f::new(size.x / 2.0, 20.0),
        Anchor::CenterTop,
        title,
        Font::bold(32.0),
        WHITE.into(),
    );
}

fn is_hovered(rect: RectF, pointer: Option<Vec2f>) -> bool {
    pointer.is_some_and(|p| rect.contains(p))
}

/// Draw the legend toggle in the bottom-right corner and return its hit region.
fn draw_legend_toggle(
    canvas: &mut dyn Canvas,
    size: Vec2f,
    open: bool,
    pointer: Option<Vec2f>,
) -> RectF {
    let rect = RectF::from_xywh(
        size.x - LEGEND_WIDTH - PANEL_PADDING,
        size.y - PANEL_PADDING - TOGGLE_HEIGHT,
        LEGEND_WIDTH,
        TOGGLE_HEIGHT,
    );
    let fill = if is_hovered(rect, pointer) {
        Rgb::gray(50)
    } else {
        Rgb::gray(10)
    };
    canvas.fill_rect(rect, Corners::same(5.0), fill.with_alpha(220));

    let indicator = if open { '▲' } else { '▼' };
    canvas.text(
        Vec2f::new(rect.min.x + 10.0, rect.min.y + TOGGLE_HEIGHT / 2.0),
        Anchor::LeftCenter,
        &format!("Type legend {indicator}"),
        Font::bold(16.0),
        WHITE.into(),
    );
    rect
}

/// Draw the legend rows in a panel stacked on top of the toggle.
fn draw_legend_content(canvas: &mut dyn Canvas, rows: &[LegendRow], toggle: RectF) {
    let content_height = rows.len() as f32 * LEGEND_ROW_HEIGHT + 5.0;
    let x = toggle.min.x;
    let y = toggle.min.y - content_height - 10.0;
    canvas.fill_rect(
        RectF::from_xywh(x, y, LEGEND_WIDTH, content_height + 10.0),
        Corners::same(5.0),
        Rgb::gray(10).with_alpha(200),
    );

    let top = y + 10.0;
    for (i, row) in rows.iter().enumerate() {
        let row_y = top + i as f32 * LEGEND_ROW_HEIGHT;
        canvas.fill_rect(
            RectF::from_xywh(x + 10.0, row_y, LEGEND_SWATCH, LEGEND_SWATCH),
            Corners::NONE,
            row.color.into(),
        );
        canvas.text(
            Vec2f::new(x + 35.0, row_y + 2.0),
            Anchor::LeftTop,
            &row.label,
            Font::regular(12.0),
            WHITE.into(),
        );
    }
}

/// Draw the detail modal for `record` and return the close button's hit region.
fn draw_detail_modal(
    canvas: &mut dyn Canvas,
    dataset: &Dataset,
    record: &Record,
    accent: Rgb,
    pointer: Option<Vec2f>,
) -> RectF {
    let size = canvas.size();
    let modal_w = (size.x * 0.7).min(MODAL_MAX_WIDTH);
    let modal_h = (size.y * 0.8).min(MODAL_MAX_HEIGHT);
    let modal = RectF::from_xywh(
        size.x / 2.0 - modal_w / 2.0,
        size.y / 2.0 - modal_h / 2.0,
        modal_w,
        modal_h,
    );

    canvas.fill_rect(
        RectF::from_xywh(0.0, 0.0, size.x, size.y),
        Corners::NONE,
        Rgba(0, 0, 0, 180),
    );
    canvas.fill_rect(modal, Corners::same(10.0), Rgb::gray(30).into());
    canvas.fill_rect(
        RectF::from_xywh(modal.min.x, modal.min.y, modal_w, MODAL_TITLE_HEIGHT),
        Corners::top(10.0),
        accent.into(),
    );
    canvas.text(
        Vec2f::new(
            modal.min.x + modal_w / 2.0,
            modal.min.y + MODAL_TITLE_HEIGHT / 2.0,
        ),
        Anchor::CenterCenter,
        &format!("Volcano details: {}", record.name()),
        Font::bold(20.0),
        WHITE.into(),
    );

    let field_color: Rgba = Rgb::gray(220).into();
    let label_font = Font::bold(14.0);
    let value_font = Font::regular(14.0);
    let x = modal.min.x + MODAL_INSET;
    let limit = modal.max.y - MODAL_BOTTOM_RESERVE;
    let columns = dataset.columns();
    let mut y = modal.min.y + MODAL_INSET + 30.0;
    for (i, key) in columns.iter().enumerate() {
        let label = format!("{key}:");
        canvas.text(
            Vec2f::new(x, y),
            Anchor::LeftTop,
            &label,
            label_font,
            field_color,
        );
        let label_w = canvas.text_width(&label, label_font);
        canvas.text(
            Vec2f::new(x + label_w + 10.0, y),
            Anchor::LeftTop,
            record.get(key),
            value_font,
            field_color,
        );
        y += MODAL_LINE_HEIGHT;
        if y > limit && i + 1 < columns.len() {
            canvas.text(
                Vec2f::new(x, y),
                Anchor::LeftTop,
                TRUNCATION_MARKER,
                value_font,
                HOVER_COLOR.into(),
            );
            break;
        }
    }

    let button = RectF::from_xywh(
        modal.max.x - CLOSE_WIDTH - 20.0,
        modal.max.y - CLOSE_HEIGHT - 20.0,
        CLOSE_WIDTH,
        CLOSE_HEIGHT,
    );
    let fill = if is_hovered(button, pointer) {
        accent.brighten(50)
    } else {
        accent
    };
    canvas.fill_rect(button, Corners::same(5.0), fill.into());
    canvas.text(
        button.center(),
        Anchor::CenterCenter,
        CLOSE_LABEL,
        Font::bold(16.0),
        Rgb::gray(0).into(),
    );
    button
}
