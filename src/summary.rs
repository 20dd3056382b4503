//! JSON-serializable overview of a loaded dataset, printed by `--dump`.

use serde::Serialize;

use crate::color::{ColorMap, Rgb, UNKNOWN_TYPE};
use crate::model::{Dataset, Extent};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    #[serde(rename = "type")]
    pub kind: String,
    pub color: Rgb,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct DatasetSummary {
    pub records: usize,
    pub columns: Vec<String>,
    pub extent: Extent,
    /// Sorted types followed by the unknown entry when any record lacks a type.
    pub legend: Vec<LegendEntry>,
}

impl DatasetSummary {
    pub fn new(dataset: &Dataset, colors: &ColorMap) -> Self {
        let mut legend: Vec<LegendEntry> = dataset
            .types()
            .iter()
            .map(|t| LegendEntry {
                kind: t.clone(),
                color: colors.resolve(Some(t)),
                count: dataset.records().iter().filter(|r| r.kind() == Some(t.as_str())).count(),
            })
            .collect();
        let untyped = dataset.records().iter().filter(|r| r.kind().is_none()).count();
        if untyped > 0 {
            legend.push(LegendEntry {
                kind: UNKNOWN_TYPE.to_string(),
                color: colors.unknown(),
                count: untyped,
            });
        }
        Self {
            records: dataset.len(),
            columns: dataset.columns().to_vec(),
            extent: dataset.extent(),
            legend,
        }
    }
}
