use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Column holding the display name of a volcano.
pub const NAME_COLUMN: &str = "Volcano Name";
/// Column holding the categorical type used for coloring and the legend.
pub const TYPE_COLUMN: &str = "Type";
pub const LONGITUDE_COLUMN: &str = "Longitude";
pub const LATITUDE_COLUMN: &str = "Latitude";

/// Columns every dataset must provide.
pub const REQUIRED_COLUMNS: [&str; 4] = [
    NAME_COLUMN,
    TYPE_COLUMN,
    LONGITUDE_COLUMN,
    LATITUDE_COLUMN,
];

// ────────────────────────────────────────────────────────────────────────────
// Record
// ────────────────────────────────────────────────────────────────────────────

/// One row of the dataset.
///
/// `fields` preserves the column order of the source header so the detail
/// view can list every field the way the file declares them. Longitude and
/// latitude are parsed once at load time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub fields: IndexMap<String, String>,
    pub longitude: f64,
    pub latitude: f64,
}

impl Record {
    pub fn new(fields: IndexMap<String, String>, longitude: f64, latitude: f64) -> Self {
        Self {
            fields,
            longitude,
            latitude,
        }
    }

    /// Raw string value of a field, `""` when the column is absent.
    pub fn get(&self, field: &str) -> &str {
        self.fields.get(field).map(String::as_str).unwrap_or("")
    }

    pub fn name(&self) -> &str {
        self.get(NAME_COLUMN)
    }

    /// The categorical type, or `None` when the field is missing or empty.
    pub fn kind(&self) -> Option<&str> {
        let t = self.get(TYPE_COLUMN);
        if t.is_empty() { None } else { Some(t) }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Extent
// ────────────────────────────────────────────────────────────────────────────

/// Geographic bounds of all records.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Extent {
    pub min_lon: f64,
    pub max_lon: f64,
    pub min_lat: f64,
    pub max_lat: f64,
}

impl Extent {
    /// Bounds of `records`; all zeros for an empty slice.
    pub fn of(records: &[Record]) -> Self {
        let Some(first) = records.first() else {
            return Self::default();
        };
        let mut e = Extent {
            min_lon: first.longitude,
            max_lon: first.longitude,
            min_lat: first.latitude,
            max_lat: first.latitude,
        };
        for r in &records[1..] {
            e.min_lon = e.min_lon.min(r.longitude);
            e.max_lon = e.max_lon.max(r.longitude);
            e.min_lat = e.min_lat.min(r.latitude);
            e.max_lat = e.max_lat.max(r.latitude);
        }
        e
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Dataset
// ────────────────────────────────────────────────────────────────────────────

/// Immutable table of records plus values derived once at construction.
#[derive(Debug, Clone)]
pub struct Dataset {
    columns: Vec<String>,
    records: Vec<Record>,
    extent: Extent,
    types: Vec<String>,
}

impl Dataset {
    pub fn new(columns: Vec<String>, records: Vec<Record>) -> Self {
        let extent = Extent::of(&records);
        let types: BTreeSet<&str> = records.iter().filter_map(Record::kind).collect();
        let types = types.into_iter().map(str::to_string).collect();
        Self {
            columns,
            records,
            extent,
            types,
        }
    }

    /// Column names in header order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn record(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// Distinct non-empty types, sorted lexicographically.
    pub fn types(&self) -> &[String] {
        &self.types
    }
}
