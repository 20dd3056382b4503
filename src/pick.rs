use crate::geometry::Vec2f;
use crate::model::Dataset;
use crate::projection::Projector;

/// Side length of a volcano marker.
pub const MARKER_SIZE: f32 = 10.0;
/// Pointer distance under which a marker counts as hovered.
pub const HIT_RADIUS: f32 = MARKER_SIZE / 2.0;

/// The record under the pointer in the current frame.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerPick {
    pub index: usize,
    pub pos: Vec2f,
    pub kind: Option<String>,
}

/// Find the record nearest to `pointer` whose projected position lies
/// strictly within `radius`.
///
/// Ties keep the first record in dataset order.
pub fn pick(
    pointer: Option<Vec2f>,
    dataset: &Dataset,
    projector: &Projector,
    radius: f32,
) -> Option<PointerPick> {
    let pointer = pointer?;
    let mut best: Option<(f32, usize, Vec2f)> = None;
    for (i, r) in dataset.records().iter().enumerate() {
        let p = projector.project(r.longitude, r.latitude);
        let d = p.distance(pointer);
        if d < radius && best.is_none_or(|(bd, _, _)| d < bd) {
            best = Some((d, i, p));
        }
    }
    best.map(|(_, index, pos)| PointerPick {
        index,
        pos,
        kind: dataset.records()[index].kind().map(str::to_string),
    })
}
