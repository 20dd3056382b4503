//! CSV loading into a [`Dataset`].

use std::io::Read;

use anyhow::{Context, Result, anyhow, bail};
use camino::Utf8Path;
use indexmap::IndexMap;
use tracing::{info, warn};

use crate::model::{Dataset, REQUIRED_COLUMNS, Record};

/// Options controlling how the delimited file is read.
#[derive(Debug, Clone, Copy)]
pub struct LoadOptions {
    pub delimiter: u8,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl LoadOptions {
    /// Options for a single ASCII delimiter character.
    pub fn with_delimiter(delimiter: char) -> Result<Self> {
        if !delimiter.is_ascii() {
            bail!(
                "Delimiter must be a single ASCII character, got {:?}",
                delimiter
            );
        }
        Ok(Self {
            delimiter: delimiter as u8,
        })
    }
}

/// Load a dataset from a delimited file on disk.
pub fn load_dataset(path: &Utf8Path, options: LoadOptions) -> Result<Dataset> {
    let file = std::fs::File::open(path.as_std_path())
        .with_context(|| format!("Open {}", path))?;
    let reader = std::io::BufReader::new(file);
    read_dataset(reader, options)
        .with_context(|| format!("Failed to load {}", path))
}

/// Read a dataset from any reader. The first row is the header.
///
/// Rows whose longitude or latitude is not a finite number are skipped with a
/// warning; they never become part of the dataset.
pub fn read_dataset<R: Read>(reader: R, options: LoadOptions) -> Result<Dataset> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let columns: Vec<String> = rdr
        .headers()
        .context("Failed to read header row")?
        .iter()
        .map(str::to_string)
        .collect();
    let [_, _, lon_idx, lat_idx] = required_indices(&columns)?;

    let mut records = Vec::new();
    let mut skipped = 0usize;
    for row in rdr.records() {
        let row = row.context("Malformed CSV row")?;
        let line = row.position().map(|p| p.line()).unwrap_or_default();
        let coord = |idx: usize| {
            row.get(idx)
                .and_then(|s| s.parse::<f64>().ok())
                .filter(|v| v.is_finite())
        };
        let (Some(longitude), Some(latitude)) = (coord(lon_idx), coord(lat_idx)) else {
            warn!(line, "skipping row with invalid coordinates");
            skipped += 1;
            continue;
        };
        let fields: IndexMap<String, String> = columns
            .iter()
            .enumerate()
            .map(|(i, c)| (c.clone(), row.get(i).unwrap_or("").to_string()))
            .collect();
        records.push(Record::new(fields, longitude, latitude));
    }

    let dataset = Dataset::new(columns, records);
    info!(
        records = dataset.len(),
        types = dataset.types().len(),
        skipped,
        "loaded dataset"
    );
    if dataset.is_empty() {
        warn!("dataset contains no drawable records");
    }
    Ok(dataset)
}

/// Header positions of [`REQUIRED_COLUMNS`], in the same order.
fn required_indices(columns: &[String]) -> Result<[usize; 4]> {
    let mut indices = [0; 4];
    for (slot, name) in indices.iter_mut().zip(REQUIRED_COLUMNS) {
        *slot = column_index(columns, name)?;
    }
    Ok(indices)
}

fn column_index(columns: &[String], name: &str) -> Result<usize> {
    columns
        .iter()
        .position(|c| c == name)
        .ok_or_else(|| anyhow!("Missing required column '{}'", name))
}
