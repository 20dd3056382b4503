use indexmap::IndexMap;
use volcamap::canvas::{Anchor, Canvas, Corners, Font};
use volcamap::color::{ColorMap, HOVER_COLOR, Palette, Rgb, Rgba};
use volcamap::geometry::{RectF, Vec2f};
use volcamap::interaction::{AppState, ClickOutcome, View};
use volcamap::model::{
    Dataset, LATITUDE_COLUMN, LONGITUDE_COLUMN, NAME_COLUMN, REQUIRED_COLUMNS, Record, TYPE_COLUMN,
};
use volcamap::scene::{
    CLOSE_LABEL, HOVER_LEGEND_LABEL, Scene, TRUNCATION_MARKER, legend_rows, render_frame,
};

#[derive(Debug, Clone, PartialEq)]
enum Op {
    Rect(RectF, Corners, Rgba),
    Triangle([Vec2f; 3], Rgba),
    Text(Vec2f, Anchor, String, Font, Rgba),
}

/// Canvas that records draw calls. Every glyph is 7 px wide.
struct RecordingCanvas {
    size: Vec2f,
    ops: Vec<Op>,
}

impl RecordingCanvas {
    fn new(w: f32, h: f32) -> Self {
        Self {
            size: Vec2f::new(w, h),
            ops: Vec::new(),
        }
    }

    fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Text(_, _, s, _, _) => Some(s.as_str()),
                _ => None,
            })
            .collect()
    }

    fn text_op(&self, needle: &str) -> Option<(Vec2f, Font)> {
        self.ops.iter().find_map(|op| match op {
            Op::Text(p, _, s, f, _) if s == needle => Some((*p, *f)),
            _ => None,
        })
    }

    fn triangles(&self) -> Vec<([Vec2f; 3], Rgba)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Triangle(p, c) => Some((*p, *c)),
                _ => None,
            })
            .collect()
    }
}

impl Canvas for RecordingCanvas {
    fn size(&self) -> Vec2f {
        self.size
    }
    fn fill_rect(&mut self, rect: RectF, corners: Corners, color: Rgba) {
        self.ops.push(Op::Rect(rect, corners, color));
    }
    fn fill_triangle(&mut self, points: [Vec2f; 3], color: Rgba) {
        self.ops.push(Op::Triangle(points, color));
    }
    fn text(&mut self, pos: Vec2f, anchor: Anchor, text: &str, font: Font, color: Rgba) {
        self.ops.push(Op::Text(pos, anchor, text.to_string(), font, color));
    }
    fn text_width(&self, text: &str, _font: Font) -> f32 {
        7.0 * text.chars().count() as f32
    }
}

fn record(name: &str, kind: &str, lon: f64, lat: f64) -> Record {
    let mut fields = IndexMap::new();
    fields.insert(NAME_COLUMN.to_string(), name.to_string());
    fields.insert(TYPE_COLUMN.to_string(), kind.to_string());
    fields.insert(LONGITUDE_COLUMN.to_string(), lon.to_string());
    fields.insert(LATITUDE_COLUMN.to_string(), lat.to_string());
    Record::new(fields, lon, lat)
}

fn dataset(records: Vec<Record>) -> Dataset {
    Dataset::new(
        REQUIRED_COLUMNS.iter().map(|c| c.to_string()).collect(),
        records,
    )
}

fn frame(ds: &Dataset, colors: &ColorMap, state: &mut AppState) -> RecordingCanvas {
    let mut canvas = RecordingCanvas::new(800.0, 600.0);
    let scene = Scene {
        dataset: ds,
        colors,
        title: "Volcanoes",
    };
    render_frame(&mut canvas, &scene, state);
    canvas
}

// Layout on an 800x600 canvas.
const TOGGLE_CENTER: Vec2f = Vec2f { x: 660.0, y: 560.0 };
const CLOSE_CENTER: Vec2f = Vec2f { x: 600.0, y: 500.0 };

#[test]
fn etna_select_and_close() {
    let ds = dataset(vec![record("Etna", "Stratovolcano", 15.0, 37.75)]);
    let colors = ColorMap::assign(ds.records(), &Palette::default());
    let mut state = AppState::new();

    // Single point extent: the marker sits in the middle of the canvas.
    let etna = Vec2f::new(400.0, 300.0);
    state.set_pointer(Some(etna));
    frame(&ds, &colors, &mut state);
    assert_eq!(state.pick.as_ref().map(|p| p.index), Some(0));

    assert_eq!(state.click(etna), ClickOutcome::Selected(0));
    assert_eq!(state.selected_index(), Some(0));

    let canvas = frame(&ds, &colors, &mut state);
    assert!(canvas.texts().contains(&"Volcano details: Etna"));
    assert!(canvas.texts().contains(&CLOSE_LABEL));
    assert_eq!(
        state.hit.close_button,
        RectF::from_xywh(540.0, 480.0, 120.0, 40.0)
    );

    // Clicking the marker again while the modal is open does nothing.
    assert_eq!(state.click(etna), ClickOutcome::Ignored);
    assert_eq!(state.click(CLOSE_CENTER), ClickOutcome::ModalClosed);
    assert_eq!(state.selected_index(), None);
    assert_eq!(state.view(), View::Map);

    frame(&ds, &colors, &mut state);
    assert_eq!(state.hit.close_button, RectF::ZERO);
}

#[test]
fn legend_lists_sorted_types_plus_hover_row() {
    for order in [["Foo", "Bar"], ["Bar", "Foo"]] {
        let ds = dataset(vec![
            record("One", order[0], 0.0, 0.0),
            record("Two", order[1], 10.0, 10.0),
        ]);
        let colors = ColorMap::assign(ds.records(), &Palette::default());
        let labels: Vec<String> = legend_rows(&ds, &colors).into_iter().map(|r| r.label).collect();
        assert_eq!(labels, vec!["Bar", "Foo", HOVER_LEGEND_LABEL]);

        let mut state = AppState::new();
        frame(&ds, &colors, &mut state);
        assert_eq!(
            state.click(TOGGLE_CENTER),
            ClickOutcome::LegendToggled { open: true }
        );
        let canvas = frame(&ds, &colors, &mut state);
        let rows: Vec<&str> = canvas
            .ops
            .iter()
            .filter_map(|op| match op {
                Op::Text(_, _, s, f, _) if *f == Font::regular(12.0) => Some(s.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(rows, vec!["Bar", "Foo", HOVER_LEGEND_LABEL]);
        assert!(canvas.texts().contains(&"Type legend ▲"));
    }
}

#[test]
fn toggle_is_not_clickable_before_first_render() {
    let ds = dataset(vec![record("Etna", "Stratovolcano", 15.0, 37.75)]);
    let colors = ColorMap::assign(ds.records(), &Palette::default());
    let mut state = AppState::new();
    assert_eq!(state.click(TOGGLE_CENTER), ClickOutcome::Ignored);

    let canvas = frame(&ds, &colors, &mut state);
    assert!(canvas.texts().contains(&"Type legend ▼"));
    assert_eq!(
        state.hit.legend_toggle,
        RectF::from_xywh(540.0, 540.0, 240.0, 40.0)
    );
    assert_eq!(
        state.click(TOGGLE_CENTER),
        ClickOutcome::LegendToggled { open: true }
    );
}

#[test]
fn marker_colors_and_shape() {
    let ds = dataset(vec![
        record("A", "Caldera", 0.0, 0.0),
        record("B", "", 10.0, 10.0),
        record("C", "Foo", 5.0, 5.0),
    ]);
    let palette = Palette::default();
    let colors = ColorMap::assign(ds.records(), &palette);
    let mut state = AppState::new();

    // A projects to the bottom-left inner corner.
    let a = Vec2f::new(100.0, 500.0);
    state.set_pointer(Some(a));
    let canvas = frame(&ds, &colors, &mut state);
    let tris = canvas.triangles();
    assert_eq!(tris.len(), 3);
    assert_eq!(
        tris[0].0,
        [
            Vec2f::new(100.0, 490.0),
            Vec2f::new(95.0, 505.0),
            Vec2f::new(105.0, 505.0),
        ]
    );
    assert_eq!(tris[0].1, Rgba::from(HOVER_COLOR));
    assert_eq!(tris[1].1, Rgba::from(palette.unknown));
    assert_eq!(tris[2].1, Rgba::from(palette.fallback[0]));

    // The pointer moves away: A goes back to its type color.
    state.set_pointer(None);
    let canvas = frame(&ds, &colors, &mut state);
    assert_eq!(canvas.triangles()[0].1, Rgba::from(Rgb(255, 140, 0)));
}

#[test]
fn selected_marker_stays_highlighted_and_accent_follows_type() {
    let ds = dataset(vec![
        record("A", "Caldera", 0.0, 0.0),
        record("B", "Foo", 10.0, 10.0),
    ]);
    let colors = ColorMap::assign(ds.records(), &Palette::default());
    let mut state = AppState::new();

    state.set_pointer(Some(Vec2f::new(100.0, 500.0)));
    frame(&ds, &colors, &mut state);
    state.click(Vec2f::new(100.0, 500.0));
    state.set_pointer(Some(Vec2f::new(10.0, 10.0)));
    let canvas = frame(&ds, &colors, &mut state);

    assert_eq!(canvas.triangles()[0].1, Rgba::from(HOVER_COLOR));
    let accent: Rgba = Rgb(255, 140, 0).into();
    assert!(canvas.ops.contains(&Op::Rect(
        RectF::from_xywh(120.0, 60.0, 560.0, 50.0),
        Corners::top(10.0),
        accent,
    )));
    assert!(canvas.ops.contains(&Op::Rect(
        RectF::from_xywh(540.0, 480.0, 120.0, 40.0),
        Corners::same(5.0),
        accent,
    )));

    // Hovering the close button brightens it.
    state.set_pointer(Some(CLOSE_CENTER));
    let canvas = frame(&ds, &colors, &mut state);
    assert!(canvas.ops.contains(&Op::Rect(
        RectF::from_xywh(540.0, 480.0, 120.0, 40.0),
        Corners::same(5.0),
        Rgb(255, 190, 50).into(),
    )));
}

#[test]
fn modal_lists_fields_with_values_after_labels() {
    let ds = dataset(vec![record("Etna", "Stratovolcano", 15.0, 37.75)]);
    let colors = ColorMap::assign(ds.records(), &Palette::default());
    let mut state = AppState::new();
    state.set_pointer(Some(Vec2f::new(400.0, 300.0)));
    frame(&ds, &colors, &mut state);
    state.click(Vec2f::new(400.0, 300.0));
    let canvas = frame(&ds, &colors, &mut state);

    let (label_pos, label_font) = canvas.text_op("Type:").unwrap();
    assert!(label_font.bold);
    let (value_pos, value_font) = canvas.text_op("Stratovolcano").unwrap();
    assert!(!value_font.bold);
    assert_eq!(value_pos.y, label_pos.y);
    assert_eq!(value_pos.x, label_pos.x + 7.0 * 5.0 + 10.0);
    assert!(!canvas.texts().contains(&TRUNCATION_MARKER));
}

#[test]
fn modal_truncates_long_records() {
    let columns: Vec<String> = (0..40).map(|i| format!("Field {i}")).collect();
    let mut fields: IndexMap<String, String> =
        columns.iter().map(|c| (c.clone(), "x".to_string())).collect();
    fields.insert(NAME_COLUMN.to_string(), "Long".to_string());
    let ds = Dataset::new(columns, vec![Record::new(fields, 1.0, 1.0)]);
    let colors = ColorMap::assign(ds.records(), &Palette::default());
    let mut state = AppState::new();
    state.set_pointer(Some(Vec2f::new(400.0, 300.0)));
    frame(&ds, &colors, &mut state);
    state.click(Vec2f::new(400.0, 300.0));
    let canvas = frame(&ds, &colors, &mut state);

    let labels = canvas.texts().iter().filter(|t| t.starts_with("Field ")).count();
    assert_eq!(labels, 15);
    let (marker_pos, _) = canvas.text_op(TRUNCATION_MARKER).unwrap();
    assert!(marker_pos.y <= 540.0, "marker stays inside the modal");
}
