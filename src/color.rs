//! Colors and deterministic type-to-color assignment.

use std::collections::HashMap;

use anyhow::{Context, Result};
use camino::Utf8Path;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::Record;

/// Key of the reserved entry used for records with a missing or unrecognized type.
pub const UNKNOWN_TYPE: &str = "Unknown";

/// Highlight for the hovered and the selected record. Never assigned to a type.
pub const HOVER_COLOR: Rgb = Rgb(255, 0, 0);

/// Simple RGB color independent of egui types. Serializes as `[r, g, b]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn gray(v: u8) -> Self {
        Rgb(v, v, v)
    }

    pub const fn with_alpha(self, a: u8) -> Rgba {
        Rgba(self.0, self.1, self.2, a)
    }

    /// Add `delta` to every channel, saturating at 255.
    pub fn brighten(self, delta: u8) -> Self {
        Rgb(
            self.0.saturating_add(delta),
            self.1.saturating_add(delta),
            self.2.saturating_add(delta),
        )
    }
}

/// RGB color with unmultiplied alpha.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba(pub u8, pub u8, pub u8, pub u8);

impl From<Rgb> for Rgba {
    fn from(c: Rgb) -> Self {
        c.with_alpha(255)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Palette
// ────────────────────────────────────────────────────────────────────────────

/// Inputs of the color assignment.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    /// Fixed colors for well-known types. Always win over the fallback palette.
    pub predefined: IndexMap<String, Rgb>,
    /// Cyclic palette for types without a predefined color, used in first-encounter order.
    pub fallback: Vec<Rgb>,
    /// Color of the reserved [`UNKNOWN_TYPE`] entry.
    pub unknown: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        let predefined = [
            ("Submarine volcano", Rgb(0, 150, 255)),
            ("Stratovolcano", Rgb(150, 75, 0)),
            ("Shield volcano", Rgb(0, 150, 0)),
            ("Caldera", Rgb(255, 140, 0)),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
        Self {
            predefined,
            fallback: vec![
                Rgb(255, 105, 180),
                Rgb(100, 100, 255),
                Rgb(255, 200, 0),
                Rgb(165, 42, 42),
                Rgb(0, 200, 200),
                Rgb(128, 0, 128),
                Rgb(200, 100, 50),
                Rgb(180, 180, 180),
                Rgb(70, 130, 180),
                Rgb(50, 150, 150),
                Rgb(255, 69, 0),
            ],
            unknown: Rgb(50, 50, 50),
        }
    }
}

/// On-disk palette overrides. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PaletteFile {
    #[serde(default)]
    predefined: IndexMap<String, Rgb>,
    fallback: Option<Vec<Rgb>>,
    unknown: Option<Rgb>,
}

impl Palette {
    /// Parse JSON overrides and apply them on top of [`Palette::default`].
    ///
    /// `predefined` entries are merged over the built-in ones; `fallback` and
    /// `unknown` replace the built-in values when present.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let file: PaletteFile = serde_json::from_str(text).context("Invalid palette JSON")?;
        let mut palette = Palette::default();
        palette.predefined.extend(file.predefined);
        if let Some(fallback) = file.fallback {
            palette.fallback = fallback;
        }
        if let Some(unknown) = file.unknown {
            palette.unknown = unknown;
        }
        Ok(palette)
    }

    pub fn from_json_file(path: &Utf8Path) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_std_path())
            .with_context(|| format!("Failed to read palette {}", path))?;
        Self::from_json_str(&text)
            .with_context(|| format!("Failed to load palette {}", path))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// ColorMap
// ────────────────────────────────────────────────────────────────────────────

/// Type name to color, populated once when the dataset is loaded.
#[derive(Clone, Debug)]
pub struct ColorMap {
    colors: HashMap<String, Rgb>,
    unknown: Rgb,
}

impl ColorMap {
    /// Assign a color to every non-empty type in `records`, in record order.
    ///
    /// Predefined types and the reserved [`UNKNOWN_TYPE`] key get their fixed
    /// color. Every other type takes the next fallback color; the counter
    /// only advances for fallback assignments and wraps around the palette.
    pub fn assign(records: &[Record], palette: &Palette) -> Self {
        let mut colors: HashMap<String, Rgb> = HashMap::new();
        let mut next_fallback = 0usize;
        for kind in records.iter().filter_map(Record::kind) {
            if colors.contains_key(kind) {
                continue;
            }
            let color = if kind == UNKNOWN_TYPE {
                palette.unknown
            } else if let Some(c) = palette.predefined.get(kind) {
                *c
            } else if palette.fallback.is_empty() {
                palette.unknown
            } else {
                let c = palette.fallback[next_fallback % palette.fallback.len()];
                next_fallback += 1;
                c
            };
            colors.insert(kind.to_string(), color);
        }
        colors.insert(UNKNOWN_TYPE.to_string(), palette.unknown);
        debug!(
            types = colors.len(),
            fallback_used = next_fallback,
            "assigned type colors"
        );
        Self {
            colors,
            unknown: palette.unknown,
        }
    }

    /// Color of a known type name.
    pub fn get(&self, kind: &str) -> Option<Rgb> {
        self.colors.get(kind).copied()
    }

    pub fn unknown(&self) -> Rgb {
        self.unknown
    }

    /// Display color of a record type; missing or unrecognized types map to the unknown color.
    pub fn resolve(&self, kind: Option<&str>) -> Rgb {
        kind.and_then(|k| self.get(k)).unwrap_or(self.unknown)
    }
}
